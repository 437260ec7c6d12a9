use std::fmt;

pub const DEFAULT_ACCURACY: f64 = 100.0;

/// Scores shown to the user after each edit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsSnapshot {
    pub wpm: u32,
    /// Percentage in [0, 100], one decimal place
    pub accuracy_percent: f64,
    pub mistake_count: usize,
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self {
            wpm: 0,
            accuracy_percent: DEFAULT_ACCURACY,
            mistake_count: 0,
        }
    }
}

impl StatsSnapshot {
    pub fn wpm_label(&self) -> String {
        format!("WPM: {}", self.wpm)
    }

    pub fn accuracy_label(&self) -> String {
        format!("Accuracy: {:.1}%", self.accuracy_percent)
    }

    pub fn mistakes_label(&self) -> String {
        format!("Mistakes: {}", self.mistake_count)
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.wpm_label(),
            self.accuracy_label(),
            self.mistakes_label()
        )
    }
}

/// Number of whitespace separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Words per minute, truncated toward zero. Zero when no time has passed.
pub fn words_per_minute(words: usize, elapsed_ms: u64) -> u32 {
    let minutes = elapsed_ms as f64 / 60_000.0;
    if minutes > 0.0 {
        (words as f64 / minutes).floor() as u32
    } else {
        0
    }
}

/// Share of typed characters that were not mistakes, clamped to [0, 100] and rounded to 0.1
pub fn accuracy(mistake_count: usize, typed_len: usize) -> f64 {
    if typed_len == 0 {
        return DEFAULT_ACCURACY;
    }
    let raw = DEFAULT_ACCURACY - (mistake_count as f64 / typed_len as f64 * 100.0);
    round_one_decimal(raw.clamp(0.0, DEFAULT_ACCURACY))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derive a snapshot from the current typing state. Empty input yields the defaults.
pub fn compute(_reference: &str, typed: &str, mistake_count: usize, elapsed_ms: u64) -> StatsSnapshot {
    if typed.is_empty() {
        return StatsSnapshot::default();
    }

    StatsSnapshot {
        wpm: words_per_minute(word_count(typed), elapsed_ms),
        accuracy_percent: accuracy(mistake_count, typed.chars().count()),
        mistake_count,
    }
}
