//! Scroll-triggered and pointer-driven page effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three one-shot reveals run off intersection observers: tracked blocks fade
//! in (project cards also glow briefly), stat counters count up, and lazy
//! images are marked loaded. Card tilt follows the pointer over the projects
//! section on wide viewports only.
//!
//! Project cards also carry decorative interactions: a pop and ripple on
//! click, a lift of the neighboring cards and a staggered metric lift on hover,
//! a periodic shimmer while idle, and a staggered entrance once hydrated.
//!
//! The functions taking a `ViewTarget` hold the behavior; the hydrate-only
//! installers wire them to the document.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::util::motion::{Counter, Tilt};
use crate::util::sequence::Sequence;
use crate::util::view::ViewTarget;

pub const FADE_CLASS: &str = "fade-in";
pub const GLOW_CLASS: &str = "glow";
pub const LOADED_CLASS: &str = "loaded";
pub const MAGNETIC_CLASS: &str = "magnetic";
pub const CARD_CLASS: &str = "project-card";
pub const POP_CLASS: &str = "pop";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_ACTIVE_CLASS: &str = "active";
pub const NEIGHBOR_CLASS: &str = "card--neighbor";
pub const METRIC_LIFT_CLASS: &str = "metric--lifted";
pub const SHIMMER_CLASS: &str = "shimmer";

/// Gap between consecutive metric lifts on hover.
pub const METRIC_STAGGER_MS: u32 = 100;
/// Gap between consecutive card entrances.
pub const ENTRANCE_STAGGER_MS: u32 = 200;
/// Length of the reveal transition; the entrance delay is dropped after it.
pub const ENTRANCE_SETTLE_MS: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassStep {
    Add(&'static str),
    Remove(&'static str),
}

pub fn apply_class_step(target: &impl ViewTarget, step: ClassStep) {
    match step {
        ClassStep::Add(class) => target.add_class(class),
        ClassStep::Remove(class) => target.remove_class(class),
    }
}

/// Glow from 500 ms to 2500 ms after a card scrolls into view.
#[must_use]
pub fn card_glow_sequence() -> Sequence<ClassStep> {
    Sequence::new()
        .at(500, ClassStep::Add(GLOW_CLASS))
        .then(2000, ClassStep::Remove(GLOW_CLASS))
}

/// Pop plus ripple on a card click. The ripple's `active` phase starts one
/// frame after `ripple` so the transition has a start state.
#[must_use]
pub fn card_click_sequence() -> Sequence<ClassStep> {
    Sequence::new()
        .at(0, ClassStep::Add(POP_CLASS))
        .at(0, ClassStep::Add(RIPPLE_CLASS))
        .at(10, ClassStep::Add(RIPPLE_ACTIVE_CLASS))
        .at(600, ClassStep::Remove(POP_CLASS))
        .at(600, ClassStep::Remove(RIPPLE_CLASS))
        .at(600, ClassStep::Remove(RIPPLE_ACTIVE_CLASS))
}

/// Indices directly before and after `hovered` in a row of `len` cards.
#[must_use]
pub fn neighbor_indices(len: usize, hovered: usize) -> Vec<usize> {
    [hovered.checked_sub(1), hovered.checked_add(1)]
        .into_iter()
        .flatten()
        .filter(|&i| i < len)
        .collect()
}

/// Lift the cards next to `hovered`.
pub fn lift_neighbors(cards: &[impl ViewTarget], hovered: usize) {
    for i in neighbor_indices(cards.len(), hovered) {
        cards[i].add_class(NEIGHBOR_CLASS);
    }
}

/// Undo hover lifts on every card and metric.
pub fn settle_hover(cards: &[impl ViewTarget], metrics: &[impl ViewTarget]) {
    for card in cards {
        card.remove_class(NEIGHBOR_CLASS);
    }
    for metric in metrics {
        metric.remove_class(METRIC_LIFT_CLASS);
    }
}

/// Metric index `i` lifts `i * 100` ms after the pointer enters its card.
#[must_use]
pub fn metric_lift_sequence(count: usize) -> Sequence<usize> {
    (0..count).fold(Sequence::new(), |seq, i| seq.at(stagger_ms(i, METRIC_STAGGER_MS), i))
}

fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// When the card at `index` first shimmers and how often it repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShimmerTiming {
    pub start_ms: u32,
    pub period_ms: u32,
}

/// Cards start 2 s apart and repeat every `8000 + 1500 * index` ms, so they
/// drift out of phase.
#[must_use]
pub fn shimmer_timing(index: usize) -> ShimmerTiming {
    ShimmerTiming {
        start_ms: stagger_ms(index, 2000),
        period_ms: stagger_ms(index, 1500).saturating_add(8000),
    }
}

#[must_use]
pub fn shimmer_sequence() -> Sequence<ClassStep> {
    Sequence::new()
        .at(0, ClassStep::Add(SHIMMER_CLASS))
        .then(2000, ClassStep::Remove(SHIMMER_CLASS))
}

/// Delay the reveal transition of the card at `index` so cards enter one
/// after another. Returns when the delay can be cleared again.
pub fn stagger_entrance(target: &impl ViewTarget, index: usize) -> u32 {
    let delay = stagger_ms(index, ENTRANCE_STAGGER_MS);
    target.set_style("transition-delay", &format!("{delay}ms"));
    delay.saturating_add(ENTRANCE_SETTLE_MS)
}

pub fn clear_entrance(target: &impl ViewTarget) {
    target.set_style("transition-delay", "");
}

/// Fade a tracked element in. Returns `true` when it is a project card and
/// should also glow.
pub fn reveal(target: &impl ViewTarget) -> bool {
    target.add_class(FADE_CLASS);
    target.has_class(CARD_CLASS)
}

pub fn mark_loaded(target: &impl ViewTarget) {
    target.add_class(LOADED_CLASS);
}

/// Write one counter frame. Returns `true` once the final value is shown.
pub fn render_counter(target: &impl ViewTarget, counter: Counter, elapsed_ms: f64, duration_ms: f64) -> bool {
    let (text, done) = counter.frame(elapsed_ms, duration_ms);
    target.set_text(&text);
    done
}

/// Apply or clear (`None`) a card tilt.
pub fn apply_tilt(target: &impl ViewTarget, tilt: Option<Tilt>) {
    match tilt {
        Some(tilt) => target.set_style("transform", &tilt.css()),
        None => target.set_style("transform", ""),
    }
}

/// Apply or clear (`None`) the magnetic pull on a filter button.
pub fn apply_magnetic(target: &impl ViewTarget, offset: Option<(f64, f64)>) {
    let (x, y) = offset.unwrap_or((0.0, 0.0));
    target.set_style("--mouse-x", &format!("{x:.1}px"));
    target.set_style("--mouse-y", &format!("{y:.1}px"));
    if offset.is_some() {
        target.add_class(MAGNETIC_CLASS);
    } else {
        target.remove_class(MAGNETIC_CLASS);
    }
}

/// Attach the fade, counter, and lazy-image observers to the current page.
#[cfg(feature = "hydrate")]
pub fn install_page_effects() {
    use crate::config::{COUNTER_THRESHOLD, FADE_ROOT_MARGIN, FADE_THRESHOLD};
    use crate::util::dom::observe_once;
    use crate::util::sequence::play;

    observe_once(".project-card, .stat, .about-text, .contact-form", FADE_THRESHOLD, Some(FADE_ROOT_MARGIN), |el| {
        if reveal(&el) {
            play(card_glow_sequence(), move |step| apply_class_step(&el, step));
        }
    });
    observe_once(".stat-number", COUNTER_THRESHOLD, None, animate_counter);
    observe_once("img[loading=\"lazy\"]", 0.0, None, |el| mark_loaded(&el));
    install_card_timers();
    log::debug!("page effects installed");
}

/// Staggered entrance and idle shimmer for every project card.
#[cfg(feature = "hydrate")]
fn install_card_timers() {
    use crate::util::dom::query_all;
    use crate::util::sequence::play;

    let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
        return;
    };
    for (index, card) in query_all(&root, ".project-card").into_iter().enumerate() {
        let settle_ms = stagger_entrance(&card, index);
        let settled = card.clone();
        play(Sequence::new().at(settle_ms, ()), move |()| clear_entrance(&settled));
        run_shimmer(card, shimmer_timing(index));
    }
}

/// Shimmer `card` on its own period until it leaves the document. Skipped
/// while the pointer is over it.
#[cfg(feature = "hydrate")]
fn run_shimmer(card: web_sys::Element, timing: ShimmerTiming) {
    use std::time::Duration;

    use crate::util::sequence::play;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(timing.start_ms))).await;
        loop {
            gloo_timers::future::sleep(Duration::from_millis(u64::from(timing.period_ms))).await;
            if !card.is_connected() {
                break;
            }
            if !card.matches(":hover").unwrap_or(false) {
                let el = card.clone();
                play(shimmer_sequence(), move |step| apply_class_step(&el, step));
            }
        }
    });
}

#[cfg(feature = "hydrate")]
fn animate_counter(el: web_sys::Element) {
    use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

    let Some(counter) = el.text().as_deref().and_then(Counter::parse) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let started = js_sys::Date::now();
        loop {
            let elapsed = js_sys::Date::now() - started;
            if render_counter(&el, counter, elapsed, COUNTER_DURATION_MS) {
                break;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(COUNTER_FRAME_MS))).await;
        }
    });
}

/// Tilt every card in `section` toward the pointer at client `(x, y)`.
#[cfg(feature = "hydrate")]
pub fn tilt_cards(section: &web_sys::Element, pointer: (f64, f64)) {
    use crate::util::dom::{query_all, rect_of, viewport_width};
    use crate::util::motion::{section_tilt, tilt_enabled};

    if !tilt_enabled(viewport_width()) {
        return;
    }
    let section_rect = rect_of(section);
    for card in query_all(section, ".project-card") {
        let tilt = section_tilt(pointer, section_rect, rect_of(&card));
        apply_tilt(&card, Some(tilt));
    }
}

#[cfg(feature = "hydrate")]
pub fn reset_cards(section: &web_sys::Element) {
    for card in crate::util::dom::query_all(section, ".project-card") {
        apply_tilt(&card, None);
    }
}
