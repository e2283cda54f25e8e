use itertools::Itertools;

/// Minimum elapsed time for live metric updates. Keeps the very first
/// keystroke from dividing by a near-zero elapsed time.
pub const LIVE_FLOOR_MINUTES: f64 = 0.01;

/// Minimum elapsed time for final scoring: one full second.
pub const FINAL_FLOOR_MINUTES: f64 = 1.0 / 60.0;

/// Derived performance metrics for a typing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub wpm: f64,
    pub accuracy: f64,
    pub errors: usize,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            wpm: 0.0,
            accuracy: 100.0,
            errors: 0,
        }
    }
}

/// Normalize raw input before comparing it against the target text:
/// newlines become single spaces and runs of two or more whitespace
/// characters collapse into one space. Pasted or control-key artifacts
/// would otherwise shift the alignment with the target.
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .coalesce(|a, b| {
            if a.is_whitespace() && b.is_whitespace() {
                Ok(' ')
            } else {
                Err((a, b))
            }
        })
        .collect()
}

/// Metrics while a test is in flight.
pub fn live_metrics(target: &str, typed: &str, elapsed_ms: u64) -> Metrics {
    compute(target, typed, elapsed_ms, LIVE_FLOOR_MINUTES)
}

/// Authoritative metrics at test end. Uses the larger one-second floor so
/// extremely short completions produce stable scores.
pub fn final_metrics(target: &str, typed: &str, elapsed_ms: u64) -> Metrics {
    compute(target, typed, elapsed_ms, FINAL_FLOOR_MINUTES)
}

fn compute(target: &str, typed: &str, elapsed_ms: u64, floor_minutes: f64) -> Metrics {
    let typed_chars = typed.chars().count();
    if typed_chars == 0 {
        // A zero-length comparison is meaningless; keep the initial values.
        return Metrics::default();
    }

    let correct_chars = target
        .chars()
        .zip(typed.chars())
        .filter(|(expected, actual)| expected == actual)
        .count();
    let errors = typed_chars - correct_chars;

    let elapsed_minutes = (elapsed_ms as f64 / 60_000.0).max(floor_minutes);

    // Clamp after rounding so rounding behaves predictably at the bounds.
    let accuracy = ((correct_chars as f64 / typed_chars as f64) * 100.0)
        .round()
        .clamp(0.0, 100.0);

    // Standard 5-characters-per-word convention; net WPM penalizes
    // uncorrected errors proportionally to their rate of occurrence.
    let gross_wpm = typed_chars as f64 / 5.0 / elapsed_minutes;
    let net_wpm = gross_wpm - errors as f64 / elapsed_minutes;
    let wpm = net_wpm.round().max(0.0);

    Metrics {
        wpm,
        accuracy,
        errors,
    }
}
