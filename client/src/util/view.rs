//! Minimal view-update surface for imperative effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scroll and hover effects mutate elements Leptos does not track (observer
//! targets, counters, tilted cards). They go through `ViewTarget` so the
//! effect logic runs against a recording double in tests and against
//! `web_sys::Element` in the browser.

pub trait ViewTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn text(&self) -> Option<String>;
    fn set_text(&self, text: &str);
    /// Set an inline style property; an empty value removes it.
    fn set_style(&self, property: &str, value: &str);
}

#[cfg(feature = "hydrate")]
impl ViewTarget for web_sys::Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn text(&self) -> Option<String> {
        self.text_content()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        use wasm_bindgen::JsCast;

        let Some(el) = self.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let style = el.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingView;
