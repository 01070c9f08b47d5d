//! Project detail modal state.
//!
//! DESIGN
//! ======
//! `ModalState` is a two-state machine (`Closed` / `Open`). Opening while open
//! replaces the record; closing is idempotent. The component renders whatever
//! `content()` returns, so the layout decision lives here and stays testable.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::catalog::{self, ExtendedDetail, ProjectRecord};

/// Tabs shown by the extended layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalTab {
    #[default]
    Overview,
    Roadmap,
    Architecture,
    Demo,
}

impl ModalTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Roadmap, Self::Architecture, Self::Demo];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Roadmap => "Roadmap",
            Self::Architecture => "Architecture",
            Self::Demo => "Demo",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        record: &'static ProjectRecord,
        tab: ModalTab,
    },
}

/// What the modal body should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalContent {
    Standard(&'static ProjectRecord),
    Extended {
        record: &'static ProjectRecord,
        detail: &'static ExtendedDetail,
        tab: ModalTab,
    },
}

impl ModalState {
    /// Open the record with `id`. Unknown identifiers leave the state as is.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(record) = catalog::find(id) else {
            log::debug!("modal: no project named {id:?}");
            return false;
        };
        *self = Self::Open { record, tab: ModalTab::default() };
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Switch tabs. Ignored when closed or when the record has no tabs.
    pub fn select_tab(&mut self, next: ModalTab) -> bool {
        match self {
            Self::Open { record, tab } if record.extended().is_some() => {
                *tab = next;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn record(&self) -> Option<&'static ProjectRecord> {
        match *self {
            Self::Closed => None,
            Self::Open { record, .. } => Some(record),
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<ModalContent> {
        let Self::Open { record, tab } = *self else {
            return None;
        };
        Some(match record.extended() {
            None => ModalContent::Standard(record),
            Some(detail) => ModalContent::Extended { record, detail, tab },
        })
    }
}
