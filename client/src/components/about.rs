//! About section.

use leptos::prelude::*;

use crate::components::hero::Stats;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">"About me"</h2>
                <div class="about-content">
                    <div class="about-text">
                        <p>
                            "I design and build landing pages for e-commerce brands, SaaS products, \
                             professional services, and early-stage startups."
                        </p>
                        <p>
                            "Every project starts from the conversion goal: who the visitor is, what \
                             they need to believe, and the one action the page should drive."
                        </p>
                    </div>
                    <Stats/>
                </div>
            </div>
        </section>
    }
}
