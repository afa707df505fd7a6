//! The one-line status shown by `yap state`.

use crate::model::Phase;

use super::Pomodoro;

/// Wrapped around the payload while on a break.
pub const COFFEE: &str = "☕";

const WAITING_PREFIX: &str = "WAITING_FOR_";

impl Pomodoro {
    /// Render the status line, e.g. `POMODORO 24:59` or `WAITING_FOR_BREAK ☕B3☕`.
    pub fn describe(&self, now: i64) -> String {
        let record = self.record();
        let in_progress = self.status().in_progress;

        let prefix = if in_progress { "" } else { WAITING_PREFIX };
        let decoration = match record.phase {
            Phase::Break => COFFEE,
            Phase::Work => "",
        };

        let payload = if in_progress {
            remaining(record.end - now)
        } else {
            format!("{}{}", record.phase.initial(), record.session_counter)
        };

        format!("{prefix}{} {decoration}{payload}{decoration}", record.phase)
    }
}

/// Format the time left as `m:ss`.
///
/// One millisecond is added before truncating to whole seconds so output
/// matches status lines produced by earlier versions.
fn remaining(ms: i64) -> String {
    let total_seconds = (ms + 1) / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}
