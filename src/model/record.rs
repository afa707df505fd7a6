//! The persisted timer record.

use serde::{Deserialize, Serialize};

use super::Phase;

/// What gets written to the state file, and nothing else.
///
/// `start` and `end` are epoch milliseconds; `0` in both means no interval is
/// scheduled. Derived status lives in [`crate::timer::Status`], never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub session_counter: u32,
    #[serde(rename = "state")]
    pub phase: Phase,
    pub start: i64,
    pub end: i64,
}

impl Default for Record {
    /// A fresh run: first session, work phase, nothing scheduled.
    fn default() -> Self {
        Self {
            session_counter: 1,
            phase: Phase::Work,
            start: 0,
            end: 0,
        }
    }
}

impl Record {
    /// Whether an interval is scheduled at all.
    pub fn is_scheduled(&self) -> bool {
        self.start != 0 && self.end != 0
    }

    /// Drop the scheduled interval, leaving phase and counter alone.
    pub fn clear_schedule(&mut self) {
        self.start = 0;
        self.end = 0;
    }
}
