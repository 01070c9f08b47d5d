//! Confirmation page shown after a contact form submission.

use leptos::prelude::*;

use crate::components::footer::Footer;

#[component]
pub fn ThankYouPage() -> impl IntoView {
    view! {
        <main class="thank-you">
            <div class="container">
                <h1>"Thank you!"</h1>
                <p>"Your message is on its way. I usually reply within one business day."</p>
                <a class="btn btn-primary" href="/">"Back to the portfolio"</a>
            </div>
        </main>
        <Footer/>
    }
}
