//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, thank_you::ThankYouPage};
use crate::state::{
    filter::FilterState, modal::ModalState, nav::NavState, theme::ThemeStore, toast::ToastState,
};
use crate::util::dark_mode::DocumentTheme;
use crate::util::storage::BrowserStorage;

/// Theme store backed by `localStorage` and the live document.
pub type SiteTheme = ThemeStore<BrowserStorage, DocumentTheme>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Loading applies the stored theme to the document on the client.
    let theme = RwSignal::new(SiteTheme::load(BrowserStorage, DocumentTheme));
    let filter = RwSignal::new(FilterState::default());
    let modal = RwSignal::new(ModalState::default());
    let nav = RwSignal::new(NavState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(theme);
    provide_context(filter);
    provide_context(modal);
    provide_context(nav);
    provide_context(toast);

    #[cfg(feature = "hydrate")]
    crate::util::dark_mode::watch_system_preference(move |prefers_dark| {
        theme.update(|store| {
            if store.on_system_change(prefers_dark) {
                log::debug!("theme follows system: {}", store.get().as_str());
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Portfolio | Landing Pages That Convert"/>
        <Meta name="description" content="Landing page design and development portfolio."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("thank-you") view=ThankYouPage/>
            </Routes>
        </Router>
    }
}
