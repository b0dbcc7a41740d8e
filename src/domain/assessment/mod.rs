//! Assessment flow - lifecycle phases and the session state machine.

mod flow;
mod phase;

pub use flow::{AssessmentFlow, NextOutcome, Progress};
pub use phase::AssessmentPhase;
