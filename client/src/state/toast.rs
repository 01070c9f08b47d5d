//! Transient notification shown after a manual theme switch.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::util::sequence::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted off-screen, about to slide in.
    Entering,
    Shown,
    Leaving,
}

impl ToastPhase {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Entering => "theme-notification",
            Self::Shown => "theme-notification theme-notification--shown",
            Self::Leaving => "theme-notification theme-notification--leaving",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStep {
    Show,
    Leave,
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: &'static str,
    pub phase: ToastPhase,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    generation: u64,
}

impl ToastState {
    /// Replace any visible toast and return the generation its steps belong to.
    pub fn show(&mut self, message: &'static str) -> u64 {
        self.generation += 1;
        self.current = Some(Toast { message, phase: ToastPhase::Entering });
        self.generation
    }

    /// Apply a step from the sequence started for `generation`. Steps from a
    /// superseded toast are dropped.
    pub fn advance(&mut self, generation: u64, step: ToastStep) {
        if generation != self.generation {
            return;
        }
        match step {
            ToastStep::Show => self.set_phase(ToastPhase::Shown),
            ToastStep::Leave => self.set_phase(ToastPhase::Leaving),
            ToastStep::Remove => self.current = None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        self.current
    }

    fn set_phase(&mut self, phase: ToastPhase) {
        if let Some(toast) = self.current.as_mut() {
            toast.phase = phase;
        }
    }
}

/// Slide in after 100 ms, slide out at 2.5 s, unmount 400 ms later.
#[must_use]
pub fn toast_sequence() -> Sequence<ToastStep> {
    Sequence::new()
        .at(100, ToastStep::Show)
        .at(2500, ToastStep::Leave)
        .then(400, ToastStep::Remove)
}
