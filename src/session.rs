use crate::metrics::{self, Metrics};
use std::time::SystemTime;

/// Lifecycle state of a typing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    InProgress,
    Finished,
}

/// A single typing test: target text, the evolving user input, and the
/// last-computed metrics. The clock starts on the first accepted character
/// (or an explicit `start`), not when the session is created, so the timer
/// does not run while the user reads the prompt.
#[derive(Debug, Clone)]
pub struct TypingSession {
    pub status: Status,
    pub text_to_type: String,
    pub user_input: String,
    pub started_at: Option<SystemTime>,
    pub ended_at: Option<SystemTime>,
    pub wpm: f64,
    pub accuracy: f64,
    pub errors: usize,
}

impl TypingSession {
    pub fn new(text_to_type: String) -> Self {
        let initial = Metrics::default();
        Self {
            status: Status::Waiting,
            text_to_type,
            user_input: String::new(),
            started_at: None,
            ended_at: None,
            wpm: initial.wpm,
            accuracy: initial.accuracy,
            errors: initial.errors,
        }
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.status == Status::Finished
    }

    /// Explicit timer start, for callers that begin the countdown before
    /// the first keystroke.
    pub fn start(&mut self) {
        self.start_at(SystemTime::now());
    }

    pub fn start_at(&mut self, now: SystemTime) {
        if self.started_at.is_none() && self.status == Status::Waiting {
            self.started_at = Some(now);
            self.status = Status::InProgress;
        }
    }

    /// Per-keystroke entry point: replaces the current input with
    /// `raw_input` (sanitized) and refreshes the live metrics.
    ///
    /// Over-length input is dropped without touching the session; the
    /// caller is expected to clamp input length itself, this is a second
    /// line of defense. A full-length input finalizes the session as part
    /// of the same call.
    pub fn submit_input(&mut self, raw_input: &str) {
        self.submit_input_at(raw_input, SystemTime::now());
    }

    pub fn submit_input_at(&mut self, raw_input: &str, now: SystemTime) {
        if self.status == Status::Finished {
            return;
        }

        let sanitized = metrics::sanitize_input(raw_input);
        let target_len = self.text_to_type.chars().count();
        if sanitized.chars().count() > target_len {
            return;
        }

        if self.started_at.is_none() && !sanitized.is_empty() {
            self.start_at(now);
        }

        self.user_input = sanitized;

        if let Some(started) = self.started_at {
            if !self.user_input.is_empty() {
                let elapsed = elapsed_ms(started, now);
                self.apply(metrics::live_metrics(
                    &self.text_to_type,
                    &self.user_input,
                    elapsed,
                ));
            }
        }

        if self.user_input.chars().count() == target_len {
            self.finalize_at(now);
        }
    }

    /// End-of-test entry point, invoked on timer expiry, manual stop, or
    /// automatically when the input reaches full length. A no-op on a
    /// session that never started or already finished.
    pub fn finalize(&mut self) {
        self.finalize_at(SystemTime::now());
    }

    pub fn finalize_at(&mut self, now: SystemTime) {
        let Some(started) = self.started_at else {
            return;
        };
        if self.status == Status::Finished {
            return;
        }

        let elapsed = elapsed_ms(started, now);
        self.apply(metrics::final_metrics(
            &self.text_to_type,
            &self.user_input,
            elapsed,
        ));
        self.ended_at = Some(now);
        self.status = Status::Finished;
    }

    /// Return to `Waiting` with cleared input and initial metrics.
    /// `preserve_text` keeps the current target for a retake.
    pub fn reset(&mut self, preserve_text: bool) {
        if !preserve_text {
            self.text_to_type.clear();
        }
        self.user_input.clear();
        self.started_at = None;
        self.ended_at = None;
        self.status = Status::Waiting;
        self.apply(Metrics::default());
    }

    fn apply(&mut self, m: Metrics) {
        self.wpm = m.wpm;
        self.accuracy = m.accuracy;
        self.errors = m.errors;
    }
}

fn elapsed_ms(started: SystemTime, now: SystemTime) -> u64 {
    now.duration_since(started)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
