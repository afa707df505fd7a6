//! Phase: which kind of interval the timer is in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of interval the timer is in.
///
/// Persisted under the tokens `POMODORO` and `BREAK`, which are also what the
/// status line prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Focused work, protected from interruption.
    #[default]
    #[serde(rename = "POMODORO")]
    Work,

    /// Rest between work intervals.
    #[serde(rename = "BREAK")]
    Break,
}

impl Phase {
    /// The persisted token for this phase.
    pub fn token(self) -> &'static str {
        match self {
            Self::Work => "POMODORO",
            Self::Break => "BREAK",
        }
    }

    /// First letter of the token, used in the idle status payload.
    pub fn initial(self) -> char {
        match self {
            Self::Work => 'P',
            Self::Break => 'B',
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
