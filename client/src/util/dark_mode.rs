//! Theme application and system color-scheme tracking.
//!
//! Writes the `data-theme` attribute on the `<html>` element and listens for
//! `prefers-color-scheme` changes. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort browser-only behavior; SSR paths safely
//! no-op to keep server rendering deterministic. The server always renders the
//! light theme and the client corrects it on hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{Theme, ThemeSink};

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Whether the system currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Call `on_change` with the new preference whenever the system scheme flips.
pub fn watch_system_preference(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            log::debug!("matchMedia unavailable; system theme changes ignored");
            return;
        };
        let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if mq
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            callback.forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

/// `ThemeSink` that writes to the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeSink for DocumentTheme {
    fn apply(&mut self, theme: Theme) {
        apply(theme);
    }
}
