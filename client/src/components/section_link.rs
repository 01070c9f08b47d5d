//! In-page anchors.
//!
//! Every `#section` link on the page goes through `section_link_click`, so
//! hero actions, the logo, and the nav menu all scroll the same way. The
//! `href` stays a real fragment so the links still work before hydration.

#[cfg(test)]
#[path = "section_link_test.rs"]
mod section_link_test;

use leptos::prelude::*;

#[must_use]
pub fn section_href(target: &str) -> String {
    format!("#{target}")
}

/// Click handler that smooth-scrolls to `target` instead of jumping, then
/// runs `after` (e.g. closing the mobile menu).
pub fn section_link_click(target: &'static str, after: impl Fn() + 'static) -> impl Fn(leptos::ev::MouseEvent) + 'static {
    #[cfg(feature = "hydrate")]
    {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            after();
            crate::util::dom::scroll_to_section(target);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
        move |_ev: leptos::ev::MouseEvent| after()
    }
}

#[component]
pub fn SectionLink(target: &'static str, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a class=class href=section_href(target) on:click=section_link_click(target, || {})>
            {children()}
        </a>
    }
}
