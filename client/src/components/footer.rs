use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"© Portfolio. Landing pages that convert."</p>
            </div>
        </footer>
    }
}
