//! Timer state engine.
//!
//! A [`Pomodoro`] is built once per invocation from the persisted [`Record`]
//! (or the default one) and a single `now`, in epoch milliseconds. Loading
//! derives the [`Status`] flags and rolls a finished interval over before any
//! command sees it. Each command then applies at most one transition.
//!
//! Nothing here reads the clock or touches the filesystem.

mod display;

use std::fmt;

use tracing::debug;

use crate::model::{Phase, Record};

/// Length of a work interval.
pub const WORK_MS: i64 = 25 * 60 * 1000;

/// Length of an ordinary break.
pub const SHORT_BREAK_MS: i64 = 5 * 60 * 1000;

/// Length of the break granted every [`LONG_BREAK_EVERY`] sessions.
pub const LONG_BREAK_MS: i64 = 15 * 60 * 1000;

/// Session counters divisible by this get a long break.
pub const LONG_BREAK_EVERY: u32 = 8;

/// How long the next interval of `phase` lasts at `session_counter`.
pub fn duration_for(phase: Phase, session_counter: u32) -> i64 {
    match phase {
        Phase::Work => WORK_MS,
        Phase::Break if session_counter % LONG_BREAK_EVERY == 0 => LONG_BREAK_MS,
        Phase::Break => SHORT_BREAK_MS,
    }
}

/// Flags derived from a record at a given instant. Never persisted.
///
/// When nothing is scheduled, only `not_started` holds. When an interval is
/// scheduled, exactly one of `in_progress` and `finished` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    pub not_started: bool,
    pub in_progress: bool,
    pub finished: bool,
}

impl Status {
    /// Derive the flags for `record` as seen at `now`.
    pub fn derive(record: &Record, now: i64) -> Self {
        let scheduled = record.is_scheduled();
        Self {
            not_started: record.start == 0,
            in_progress: scheduled && record.end >= now,
            finished: scheduled && record.end < now,
        }
    }

    /// Flags for a record with nothing scheduled, whatever the time.
    pub fn idle() -> Self {
        Self {
            not_started: true,
            in_progress: false,
            finished: false,
        }
    }
}

/// Why a transition declined to change anything.
///
/// Refusals are policy, not failures: the command still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// `next` while a work interval is running.
    SkipDuringPomodoro,

    /// `start` on a run that is already under way.
    AlreadyStarted,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkipDuringPomodoro => f.write_str("you cant just skip during a pomodoro"),
            Self::AlreadyStarted => f.write_str("already started"),
        }
    }
}

/// Result of applying a transition.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Refused(Refusal),
}

/// The timer for one invocation: the record plus its derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    record: Record,
    status: Status,
}

impl Pomodoro {
    /// Build the timer from a persisted record, or the default when there is none.
    ///
    /// A finished interval is rolled over here: the counter goes up, a break
    /// returns to work, and the schedule is cleared. A finished work interval
    /// stays in the work phase until `advance` moves it on.
    pub fn load(record: Option<Record>, now: i64) -> Self {
        let mut record = record.unwrap_or_default();
        let mut status = Status::derive(&record, now);

        if status.finished {
            let from = record;
            record.session_counter = record.session_counter.saturating_add(1);
            if record.phase == Phase::Break {
                record.phase = Phase::Work;
            }
            record.clear_schedule();
            status = Status::derive(&record, now);
            debug_assert!(status.not_started);
            debug!(?from, to = ?record, "rolled over finished interval");
        }

        Self { record, status }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Schedule the next interval starting at `now`.
    ///
    /// A running work interval cannot be skipped. Skipping out of a running
    /// break goes straight to work without touching the counter.
    pub fn advance(&mut self, now: i64) -> Outcome {
        if self.record.phase == Phase::Work && self.status.in_progress {
            return Outcome::Refused(Refusal::SkipDuringPomodoro);
        }

        if self.status.in_progress {
            self.record.phase = Phase::Work;
        }

        self.record.start = now;
        self.record.end = now + duration_for(self.record.phase, self.record.session_counter);
        self.status = Status::derive(&self.record, now);
        debug!(record = ?self.record, "scheduled interval");

        Outcome::Applied
    }

    /// Begin the first work interval of a fresh run.
    ///
    /// Only an untouched run (first session, nothing scheduled) can be started.
    pub fn go_time(&mut self, now: i64) -> Outcome {
        if self.record.session_counter > 1 || self.status.in_progress || self.status.finished {
            return Outcome::Refused(Refusal::AlreadyStarted);
        }

        self.advance(now)
    }

    /// Clear the scheduled interval. Phase and counter are kept.
    pub fn stop(&mut self) -> Outcome {
        self.record.clear_schedule();
        self.status = Status::idle();
        Outcome::Applied
    }

    /// Back to the first work session with nothing scheduled.
    pub fn reset(&mut self) -> Outcome {
        self.record = Record::default();
        self.status = Status::idle();
        Outcome::Applied
    }

    /// Whether a work interval is running right now.
    pub fn is_in_active_work_phase(&self) -> bool {
        self.record.phase == Phase::Work && self.status.in_progress
    }
}
