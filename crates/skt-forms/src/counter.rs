//! Character counters for length-limited inputs.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterLevel {
    #[default]
    Normal,
    /// At least 80 % of the limit.
    Warning,
    /// At least 95 % of the limit.
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharCounter {
    pub current: usize,
    pub max: usize,
    pub level: CounterLevel,
}

impl CharCounter {
    #[must_use]
    pub const fn new(current: usize, max: usize) -> Self {
        // Integer form of `current / max >= 0.95` and `>= 0.8`.
        let level = if max == 0 || current * 100 >= max * 95 {
            CounterLevel::Danger
        } else if current * 10 >= max * 8 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        };
        Self {
            current,
            max,
            level,
        }
    }
}

impl fmt::Display for CharCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
