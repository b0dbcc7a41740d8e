//! Assessment lifecycle phases.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Phase of one assessment run.
///
/// `Completed` is terminal for the run itself; the only way out is the
/// restart action, which begins a fresh run with a cleared answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPhase {
    NotStarted,
    InProgress,
    Completed,
}

impl StateMachine for AssessmentPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentPhase::*;
        matches!(
            (self, target),
            (NotStarted, InProgress) | (InProgress, Completed) | (Completed, InProgress)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentPhase::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Completed],
            Completed => vec![InProgress],
        }
    }
}
