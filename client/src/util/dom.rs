//! Thin `web-sys` adapters used by components and effects.
//!
//! Every helper tolerates a missing window, document, or element by doing
//! nothing; a page without the expected markup simply loses the effect.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::state::nav::SectionBounds;
use crate::util::motion::Rect;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// All elements under `root` matching `selector`.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        log::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Document-space bounds of each section id that exists on the page.
pub fn section_bounds(ids: &[&str]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            let el = element_by_id(id)?;
            Some(SectionBounds {
                id: (*id).to_owned(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = element_by_id(id) else {
        log::debug!("no section #{id} to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Lock or restore page scrolling behind an overlay.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

pub fn focus_by_id(id: &str) {
    if let Some(el) = element_by_id(id) {
        let _ = el.focus();
    }
}

pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::warn!("navigation to {path} failed: {e:?}");
        }
    }
}

/// Observe every element matching `selector` and call `on_enter` the first
/// time each one intersects the viewport. Without `IntersectionObserver`
/// support every element is treated as already visible.
pub fn observe_once(selector: &str, threshold: f64, root_margin: Option<&str>, on_enter: impl Fn(Element) + 'static) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    let targets = query_all(&root, selector);
    if targets.is_empty() {
        return;
    }
    let on_enter = Rc::new(on_enter);

    let handler = Rc::clone(&on_enter);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    handler(target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            callback.forget();
            for target in &targets {
                observer.observe(target);
            }
        }
        Err(e) => {
            log::warn!("intersection observer unavailable, revealing {selector} immediately: {e:?}");
            for target in targets {
                on_enter(target);
            }
        }
    }
}
