//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and read/write shared state from
//! Leptos context providers installed by `app::App`.

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod project_grid;
pub mod project_modal;
pub mod section_link;
pub mod theme_toggle;
