//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `filter`, `modal`, etc.) so individual
//! components depend on small focused models. None of these modules touch the
//! DOM; components and `util` adapters do.

pub mod catalog;
pub mod contact;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod theme;
pub mod toast;
