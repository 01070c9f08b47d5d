//! Site-wide constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timings, thresholds, and fixed copy shared by state modules and components.
//! Everything here is compiled into the WASM bundle; there is no runtime
//! configuration on the client side.

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Where the contact form lands after submission.
pub const CONFIRMATION_PATH: &str = "/thank-you";

/// Delay before forcing navigation when the form handler does not redirect.
pub const REDIRECT_FALLBACK_MS: u32 = 1000;

/// Duration of the error shake on an invalid form field.
pub const SHAKE_MS: u32 = 500;

/// Counter animation length once a stat scrolls into view.
pub const COUNTER_DURATION_MS: f64 = 1500.0;

/// Frame interval used by the counter driver.
pub const COUNTER_FRAME_MS: u32 = 16;

/// Viewport width below which the card tilt effect stays off.
pub const TILT_MIN_VIEWPORT_PX: f64 = 768.0;

/// Scroll offset used for nav shadow and scroll-spy probing.
pub const NAV_SCROLL_OFFSET_PX: f64 = 100.0;

/// Quiet period before the scroll spy recomputes.
pub const SCROLL_SPY_DEBOUNCE_MS: u32 = 50;

pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Base copy for the projects subtitle; the visible count is appended.
pub const PROJECTS_SUBTITLE: &str = "A selection of landing pages that delivered exceptional results";

/// In-page sections linked from the navigation bar, in page order.
pub const NAV_SECTIONS: &[(&str, &str)] =
    &[("home", "Home"), ("projects", "Projects"), ("about", "About"), ("contact", "Contact")];
