//! Category filter over the project grid.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::config::PROJECTS_SUBTITLE;
use crate::state::catalog::ProjectRecord;

/// Tag that matches every card.
pub const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { active: ALL.to_owned() }
    }
}

impl FilterState {
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Activate `tag` and return how many of `records` remain visible.
    ///
    /// A tag that matches nothing hides every card.
    pub fn apply_filter(&mut self, tag: &str, records: &[ProjectRecord]) -> usize {
        tag.clone_into(&mut self.active);
        let count = self.visible_count(records);
        log::debug!("filter {tag}: {count} visible");
        count
    }

    #[must_use]
    pub fn is_visible(&self, category: &str) -> bool {
        self.active == ALL || self.active == category
    }

    #[must_use]
    pub fn visible_count(&self, records: &[ProjectRecord]) -> usize {
        records.iter().filter(|r| self.is_visible(r.category)).count()
    }
}

/// Projects subtitle with the visible count appended.
#[must_use]
pub fn subtitle(count: usize) -> String {
    let noun = if count == 1 { "project" } else { "projects" };
    format!("{PROJECTS_SUBTITLE} ({count} {noun})")
}
