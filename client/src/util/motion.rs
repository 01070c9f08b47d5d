//! Pure math behind the decorative effects: counter easing, card tilt, and
//! the magnetic pull on filter buttons.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::config::TILT_MIN_VIEWPORT_PX;

/// Quartic ease-out over `progress` in `[0, 1]`.
#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// A stat counter such as `150+` or `98%`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    pub target: u32,
    pub suffix: &'static str,
}

impl Counter {
    /// Read the target from the digits of `text`; the suffix is kept when the
    /// text contains `%` or `+`. Returns `None` without digits.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.chars().filter(char::is_ascii_digit).collect::<String>();
        let target = digits.parse::<u32>().ok()?;
        let suffix = if text.contains('%') {
            "%"
        } else if text.contains('+') {
            "+"
        } else {
            ""
        };
        Some(Self { target, suffix })
    }

    /// Value shown `elapsed_ms` into an animation of `duration_ms`.
    #[must_use]
    pub fn value_at(&self, elapsed_ms: f64, duration_ms: f64) -> u32 {
        let progress = if duration_ms <= 0.0 { 1.0 } else { elapsed_ms / duration_ms };
        let eased = ease_out_quart(progress) * f64::from(self.target);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = eased.floor() as u32;
        value.min(self.target)
    }

    #[must_use]
    pub fn render(&self, value: u32) -> String {
        format!("{value}{}", self.suffix)
    }

    /// Rendered frame plus whether the animation has finished.
    #[must_use]
    pub fn frame(&self, elapsed_ms: f64, duration_ms: f64) -> (String, bool) {
        (self.render(self.value_at(elapsed_ms, duration_ms)), elapsed_ms >= duration_ms)
    }
}

/// Client-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

const SECTION_TILT_DEG: f64 = 5.0;
const MAGNETIC_PULL: f64 = 0.3;

#[must_use]
pub fn tilt_enabled(viewport_width: f64) -> bool {
    viewport_width > TILT_MIN_VIEWPORT_PX
}

/// Tilt for `card` given the pointer position over `section`. Offsets from
/// the card center are normalized by half the section size.
#[must_use]
pub fn section_tilt(pointer: (f64, f64), section: Rect, card: Rect) -> Tilt {
    let half_w = section.width / 2.0;
    let half_h = section.height / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return Tilt::default();
    }
    let (cx, cy) = card.center();
    let dx = (pointer.0 - cx) / half_w;
    let dy = (pointer.1 - cy) / half_h;
    Tilt { rotate_x: dy * -SECTION_TILT_DEG, rotate_y: dx * SECTION_TILT_DEG }
}

/// Translation pulling a button toward the pointer.
#[must_use]
pub fn magnetic_offset(pointer: (f64, f64), button: Rect) -> (f64, f64) {
    let (cx, cy) = button.center();
    ((pointer.0 - cx) * MAGNETIC_PULL, (pointer.1 - cy) * MAGNETIC_PULL)
}
