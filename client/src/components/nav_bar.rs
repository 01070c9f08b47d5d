//! Fixed top navigation with mobile menu, scroll spy, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `NavState` from context. Scroll position is sampled on a
//! debounced window `scroll` listener; section geometry is measured at that
//! moment so layout shifts (images loading, filters) never go stale.

use leptos::prelude::*;

use crate::components::section_link::{section_href, section_link_click};
use crate::components::theme_toggle::ThemeToggle;
use crate::config::NAV_SECTIONS;
use crate::state::nav::NavState;

/// Section the logo scrolls back to.
pub(crate) const LOGO_TARGET: &str = "home";

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::config::SCROLL_SPY_DEBOUNCE_MS;
        use crate::util::dom;
        use crate::util::sequence::Debouncer;

        let spy = Debouncer::new();
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            spy.debounce(SCROLL_SPY_DEBOUNCE_MS, move || {
                let ids = NAV_SECTIONS.iter().map(|(id, _)| *id).collect::<Vec<_>>();
                let bounds = dom::section_bounds(&ids);
                nav.update(|n| n.on_scroll(dom::scroll_y(), &bounds));
            });
        });
    }

    let on_toggle = move |_| nav.update(NavState::toggle_menu);
    let on_logo = section_link_click(LOGO_TARGET, move || nav.update(NavState::close_menu));

    view! {
        <nav class="navbar" class:navbar--scrolled=move || nav.get().scrolled>
            <div class="nav-container">
                <a class="nav-logo" href=section_href(LOGO_TARGET) on:click=on_logo>
                    "Portfolio"
                </a>
                <ul class="nav-menu" class:active=move || nav.get().menu_open>
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(id, label)| view! { <NavLink id=id label=label/> })
                        .collect_view()}
                </ul>
                <ThemeToggle/>
                <button
                    class="hamburger"
                    class:active=move || nav.get().menu_open
                    aria-label="Toggle navigation"
                    on:click=on_toggle
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(id: &'static str, label: &'static str) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let on_click = section_link_click(id, move || nav.update(NavState::close_menu));

    view! {
        <li class="nav-item">
            <a
                class="nav-link"
                class:active=move || nav.get().is_active(id)
                href=section_href(id)
                on:click=on_click
            >
                {label}
            </a>
        </li>
    }
}
