//! Core data model for yap.
//!
//! The only thing that survives between invocations is a [`Record`]: the
//! session counter, the current [`Phase`], and the scheduled interval.

mod phase;
mod record;

pub use phase::Phase;
pub use record::Record;
