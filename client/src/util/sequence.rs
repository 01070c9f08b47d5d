//! Declarative timed sequences and debouncing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visual effects (toast slide-in/out, card glow, button press, field shake)
//! are written as a list of `(offset, step)` pairs and handed to a single
//! driver instead of nesting timer callbacks. The driver sleeps with
//! `gloo-timers` on the browser and is a no-op during SSR.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Steps keyed by absolute offset (ms) from the start of playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence<S> {
    steps: Vec<(u32, S)>,
}

impl<S> Default for Sequence<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S> Sequence<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `step` at an absolute offset. Steps sharing an offset keep
    /// insertion order.
    #[must_use]
    pub fn at(mut self, offset_ms: u32, step: S) -> Self {
        let idx = self.steps.partition_point(|(o, _)| *o <= offset_ms);
        self.steps.insert(idx, (offset_ms, step));
        self
    }

    /// Add `step` `delay_ms` after the current last step.
    #[must_use]
    pub fn then(self, delay_ms: u32, step: S) -> Self {
        let base = self.total_ms();
        self.at(base.saturating_add(delay_ms), step)
    }

    /// Offset of the last step.
    #[must_use]
    pub fn total_ms(&self) -> u32 {
        self.steps.last().map_or(0, |(o, _)| *o)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps whose offset lies in `[from_ms, to_ms)`.
    pub fn due_between(&self, from_ms: u32, to_ms: u32) -> impl Iterator<Item = &S> {
        self.steps
            .iter()
            .filter(move |(o, _)| *o >= from_ms && *o < to_ms)
            .map(|(_, s)| s)
    }

    /// Convert to `(wait since previous step, step)` pairs for a sleeping driver.
    #[must_use]
    pub fn into_waits(self) -> Vec<(u32, S)> {
        let mut elapsed = 0;
        self.steps
            .into_iter()
            .map(|(offset, step)| {
                let wait = offset - elapsed;
                elapsed = offset;
                (wait, step)
            })
            .collect()
    }
}

/// Play `sequence` on the browser event loop, calling `apply` for each step.
pub fn play<S: 'static>(sequence: Sequence<S>, apply: impl Fn(S) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            for (wait, step) in sequence.into_waits() {
                if wait > 0 {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(wait))).await;
                }
                apply(step);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (sequence, apply);
    }
}

/// Clear-and-reschedule guard: only the most recent ticket is current.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate earlier tickets and return a new one.
    pub fn schedule(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket
    }

    /// Run `work` after `delay_ms` unless another call supersedes it first.
    pub fn debounce(&self, delay_ms: u32, work: impl FnOnce() + 'static) {
        let ticket = self.schedule();
        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                if this.is_current(ticket) {
                    work();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, delay_ms, work);
        }
    }
}
