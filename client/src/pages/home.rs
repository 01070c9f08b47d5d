//! Single-page portfolio: hero, projects, about, contact.

use leptos::prelude::*;

use crate::components::{
    about::About, contact_form::ContactForm, footer::Footer, hero::Hero, nav_bar::NavBar,
    project_grid::ProjectGrid, project_modal::ProjectModal, theme_toggle::ThemeNotification,
};

#[component]
pub fn HomePage() -> impl IntoView {
    // Observers attach once the section markup is in the document.
    #[cfg(feature = "hydrate")]
    Effect::new(move || crate::util::effects::install_page_effects());

    view! {
        <NavBar/>
        <main>
            <Hero/>
            <ProjectGrid/>
            <About/>
            <ContactForm/>
        </main>
        <Footer/>
        <ProjectModal/>
        <ThemeNotification/>
    }
}
