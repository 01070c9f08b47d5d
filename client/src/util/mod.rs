//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod effects;
pub mod motion;
pub mod sequence;
pub mod storage;
pub mod view;
