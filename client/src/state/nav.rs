//! Navigation bar state: mobile menu, scroll spy, and scrolled shadow.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NAV_SCROLL_OFFSET_PX;

/// Vertical extent of an in-page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub active_section: Option<String>,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recompute scroll-derived state. The active link only changes when
    /// some section contains the probe point.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.scrolled = scroll_y > NAV_SCROLL_OFFSET_PX;
        if let Some(id) = active_section(scroll_y, sections) {
            if self.active_section.as_deref() != Some(id) {
                self.active_section = Some(id.to_owned());
            }
        }
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}

/// The last section whose `[top, top + height]` contains `scroll_y + 100`.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + NAV_SCROLL_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe <= s.top + s.height)
        .map(|s| s.id.as_str())
}
