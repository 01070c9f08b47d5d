//! Light/dark toggle button and the notification it raises.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::app::SiteTheme;
use crate::state::toast::{ToastState, toast_sequence};
use crate::util::sequence::{Sequence, play};

/// Length of the button's press animation.
const PRESS_MS: u32 = 200;

/// Both icons are always rendered; CSS picks one from `[data-theme]` so the
/// server markup never depends on the stored preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<SiteTheme>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let pressed = RwSignal::new(false);

    let on_click = move |_| {
        let Some(next) = theme.try_update(SiteTheme::toggle) else {
            return;
        };
        log::info!("theme switched to {}", next.as_str());

        let generation = toast.try_update(|t| t.show(next.switched_message())).unwrap_or_default();
        play(toast_sequence(), move |step| toast.update(|t| t.advance(generation, step)));

        pressed.set(true);
        play(Sequence::new().at(PRESS_MS, false), move |value| pressed.set(value));
    };

    view! {
        <button
            class="theme-toggle"
            class:theme-toggle--pressed=move || pressed.get()
            aria-label="Toggle color theme"
            title="Toggle color theme"
            on:click=on_click
        >
            <span class="theme-toggle__icon theme-toggle__icon--sun" aria-hidden="true">"☀"</span>
            <span class="theme-toggle__icon theme-toggle__icon--moon" aria-hidden="true">"☾"</span>
        </button>
    }
}

/// Transient "Switched to ... mode" toast.
#[component]
pub fn ThemeNotification() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    move || {
        toast.get().current().map(|current| {
            view! {
                <div class=current.phase.class() role="status">
                    {current.message}
                </div>
            }
        })
    }
}
