//! Session state machine driven by the presentation layer.
//!
//! Idle -> Active on `start`, Active -> Finished once the typed text reaches the
//! reference length, any state -> Idle on `reset`. Calls that do not apply to the
//! current state are ignored rather than reported.

use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{Clock, MonotonicClock};
use crate::corpus::ReferenceTextProvider;
use crate::diff::{classify, Classification};
use crate::error::ConfigurationError;
use crate::session::{Session, SessionStatus};
use crate::stats::{self, StatsSnapshot};

/// Which controls the presentation layer should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub start_enabled: bool,
    pub reset_enabled: bool,
    pub input_enabled: bool,
}

impl ControlState {
    pub fn for_status(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Idle => Self {
                start_enabled: true,
                reset_enabled: false,
                input_enabled: false,
            },
            SessionStatus::Active => Self {
                start_enabled: false,
                reset_enabled: true,
                input_enabled: true,
            },
            SessionStatus::Finished => Self {
                start_enabled: true,
                reset_enabled: true,
                input_enabled: false,
            },
        }
    }
}

/// Returned from every accepted input change
#[derive(Debug, Clone, PartialEq)]
pub struct InputUpdate {
    pub classification: Classification,
    pub stats: StatsSnapshot,
    pub status: SessionStatus,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub reference_text: String,
    pub typed_text: String,
    pub remaining_text: String,
    pub classification: Classification,
    pub stats: StatsSnapshot,
    pub controls: ControlState,
}

#[derive(Debug)]
pub struct SessionController<P, C = MonotonicClock> {
    provider: P,
    clock: C,
    session: Session,
    classification: Classification,
    stats: StatsSnapshot,
}

impl<P: ReferenceTextProvider> SessionController<P, MonotonicClock> {
    pub fn new(provider: P) -> Self {
        Self::with_clock(provider, MonotonicClock)
    }
}

impl<P: ReferenceTextProvider, C: Clock> SessionController<P, C> {
    pub fn with_clock(provider: P, clock: C) -> Self {
        Self {
            provider,
            clock,
            session: Session::default(),
            classification: Classification::default(),
            stats: StatsSnapshot::default(),
        }
    }

    /// Begin a new attempt with a freshly picked reference text. Ignored while Active.
    pub fn start(&mut self) -> Result<(), ConfigurationError> {
        if self.session.status == SessionStatus::Active {
            debug!(target: "dactylo::session", "start ignored: session already active");
            return Ok(());
        }

        let reference_text = self.provider.pick_random()?;
        self.classification = classify(&reference_text, "");
        self.stats = StatsSnapshot::default();
        self.session = Session {
            reference_text,
            typed_text: String::new(),
            mistake_count: 0,
            status: SessionStatus::Active,
            started_at: Some(self.clock.now()),
        };

        info!(
            target: "dactylo::session",
            chars = self.session.reference_len(),
            "session started"
        );
        Ok(())
    }

    /// Re-score the attempt against the full new input. Returns `None` unless Active.
    pub fn on_input_changed(&mut self, typed_text: &str) -> Option<InputUpdate> {
        if self.session.status != SessionStatus::Active {
            debug!(
                target: "dactylo::session",
                status = %self.session.status,
                "input ignored"
            );
            return None;
        }

        self.session.typed_text = typed_text.to_string();
        self.classification = classify(&self.session.reference_text, typed_text);
        self.session.mistake_count = self.classification.mistake_count;

        let elapsed_ms = self.elapsed().as_millis() as u64;
        self.stats = stats::compute(
            &self.session.reference_text,
            typed_text,
            self.session.mistake_count,
            elapsed_ms,
        );

        if self.session.is_complete() {
            self.session.status = SessionStatus::Finished;
            info!(
                target: "dactylo::session",
                wpm = self.stats.wpm,
                accuracy = self.stats.accuracy_percent,
                mistakes = self.stats.mistake_count,
                elapsed_ms,
                "session finished"
            );
        }

        Some(InputUpdate {
            classification: self.classification.clone(),
            stats: self.stats,
            status: self.session.status,
        })
    }

    /// Drop the current attempt and return to Idle
    pub fn reset(&mut self) {
        if self.session.status != SessionStatus::Idle {
            info!(target: "dactylo::session", status = %self.session.status, "session reset");
        }
        self.session = Session::default();
        self.classification = Classification::default();
        self.stats = StatsSnapshot::default();
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    pub fn reference_text(&self) -> &str {
        &self.session.reference_text
    }

    pub fn typed_text(&self) -> &str {
        &self.session.typed_text
    }

    pub fn mistake_count(&self) -> usize {
        self.session.mistake_count
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats
    }

    pub fn controls(&self) -> ControlState {
        ControlState::for_status(self.session.status)
    }

    /// Untyped tail of the reference text, for the ghost preview
    pub fn remaining_text(&self) -> String {
        self.session
            .reference_text
            .chars()
            .skip(self.session.typed_len())
            .collect()
    }

    /// Time since `start`, zero when no session has started
    pub fn elapsed(&self) -> Duration {
        self.session
            .started_at
            .map(|t| self.clock.now().saturating_duration_since(t))
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.session.status,
            reference_text: self.session.reference_text.clone(),
            typed_text: self.session.typed_text.clone(),
            remaining_text: self.remaining_text(),
            classification: self.classification.clone(),
            stats: self.stats,
            controls: self.controls(),
        }
    }
}
