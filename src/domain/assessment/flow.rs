//! Assessment flow controller.
//!
//! Owns the answer set for one run and sequences dimension-by-dimension
//! presentation: selection events, completeness-gated forward navigation,
//! ungated backward navigation, and restart. All state is held explicitly in
//! this object so transitions are unit-testable without any rendering layer.

use std::sync::Arc;
use tracing::debug;

use super::phase::AssessmentPhase;
use crate::domain::catalog::{Catalog, Dimension, QuestionId, SelectionMode};
use crate::domain::foundation::{DomainError, ErrorCode, Percentage, StateMachine};
use crate::domain::scoring::AnswerSet;

/// Result of a "next" action.
///
/// `Blocked` is a refused transition, not an error: the current dimension
/// still has unanswered questions and the state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    Advanced { dimension_index: usize },
    Completed,
    Blocked,
}

/// Question-level completion progress across the whole catalog.
///
/// A partially answered dimension contributes partial progress; this is
/// deliberately not "dimensions completed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> Percentage {
        Percentage::from_ratio(self.answered, self.total)
    }

    pub fn as_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }
}

/// State machine driving one assessment session.
pub struct AssessmentFlow {
    catalog: Arc<Catalog>,
    phase: AssessmentPhase,
    dimension_index: usize,
    answers: AnswerSet,
}

impl AssessmentFlow {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            phase: AssessmentPhase::NotStarted,
            dimension_index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    pub fn dimension_index(&self) -> usize {
        self.dimension_index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Begins a fresh run at the first dimension with a cleared answer set.
    ///
    /// From `Completed` this is the restart action; any prior answers are
    /// discarded. Invalid mid-run.
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.phase = self
            .phase
            .transition_to(AssessmentPhase::InProgress)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.dimension_index = 0;
        self.answers.clear();
        debug!("assessment started");
        Ok(())
    }

    /// The dimension currently being presented.
    pub fn current_dimension(&self) -> Result<&Dimension, DomainError> {
        self.ensure_in_progress()?;
        self.catalog.dimension(self.dimension_index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DimensionNotFound,
                format!("No dimension at index {}", self.dimension_index),
            )
        })
    }

    /// Applies a selection event to a question of the current dimension.
    ///
    /// Single-select questions replace any prior choice; multi-select
    /// questions toggle. An option index outside the question's option list
    /// is a contract violation (catalog and presentation out of sync) and
    /// fails fast without touching the answer set.
    pub fn select(&mut self, question: QuestionId, option_index: usize) -> Result<(), DomainError> {
        let (mode, option_count) = {
            let dimension = self.current_dimension()?;
            let q = dimension.question(question).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::QuestionNotFound,
                    format!(
                        "Question {} is not part of dimension '{}'",
                        question, dimension.id
                    ),
                )
            })?;
            (q.mode, q.option_count())
        };

        if option_index >= option_count {
            return Err(DomainError::new(
                ErrorCode::InvalidOptionIndex,
                format!(
                    "Question {} has {} options, got index {}",
                    question, option_count, option_index
                ),
            )
            .with_detail("question_id", question.to_string())
            .with_detail("index", option_index.to_string()));
        }

        match mode {
            SelectionMode::Single => {
                self.answers.replace(question, option_index);
                debug!(%question, option_index, "selection replaced");
            }
            SelectionMode::Multiple { .. } => {
                let selected = self.answers.toggle(question, option_index);
                debug!(%question, option_index, selected, "selection toggled");
            }
        }
        Ok(())
    }

    /// True when every question of the current dimension has at least one
    /// selection. Re-evaluated on demand, so it reflects every change.
    pub fn is_current_dimension_complete(&self) -> bool {
        match self.current_dimension() {
            Ok(dimension) => dimension
                .questions
                .iter()
                .all(|q| self.answers.is_answered(q.id)),
            Err(_) => false,
        }
    }

    /// Advances to the next dimension, or completes the run on the last one.
    ///
    /// Gated on dimension completeness; a blocked advance leaves the state
    /// untouched and reports `NextOutcome::Blocked`.
    pub fn next(&mut self) -> Result<NextOutcome, DomainError> {
        self.ensure_in_progress()?;

        if !self.is_current_dimension_complete() {
            debug!(
                dimension_index = self.dimension_index,
                "advance blocked: dimension incomplete"
            );
            return Ok(NextOutcome::Blocked);
        }

        if self.dimension_index + 1 < self.catalog.dimension_count() {
            self.dimension_index += 1;
            debug!(dimension_index = self.dimension_index, "advanced to next dimension");
            Ok(NextOutcome::Advanced {
                dimension_index: self.dimension_index,
            })
        } else {
            self.phase = self
                .phase
                .transition_to(AssessmentPhase::Completed)
                .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
            debug!("assessment completed");
            Ok(NextOutcome::Completed)
        }
    }

    /// Steps back one dimension, keeping all answers. Returns false (and
    /// changes nothing) when already at the first dimension.
    pub fn previous(&mut self) -> Result<bool, DomainError> {
        self.ensure_in_progress()?;
        if self.dimension_index == 0 {
            return Ok(false);
        }
        self.dimension_index -= 1;
        debug!(dimension_index = self.dimension_index, "moved to previous dimension");
        Ok(true)
    }

    /// Question-level progress across the whole catalog.
    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answers.answered_count(),
            total: self.catalog.total_question_count(),
        }
    }

    /// Consumes the flow and hands over the final answer set for scoring.
    /// Only valid once the run is completed.
    pub fn into_answers(self) -> Result<AnswerSet, DomainError> {
        if self.phase != AssessmentPhase::Completed {
            return Err(DomainError::new(
                ErrorCode::AssessmentNotStarted,
                "Assessment has not been completed",
            ));
        }
        Ok(self.answers)
    }

    fn ensure_in_progress(&self) -> Result<(), DomainError> {
        match self.phase {
            AssessmentPhase::InProgress => Ok(()),
            AssessmentPhase::NotStarted => Err(DomainError::new(
                ErrorCode::AssessmentNotStarted,
                "Assessment has not been started",
            )),
            AssessmentPhase::Completed => Err(DomainError::new(
                ErrorCode::AssessmentAlreadyCompleted,
                "Assessment is already completed",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::AnswerOption;
    use crate::domain::catalog::{Dimension, Question};

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::try_new(vec![
                Dimension::new(
                    "one",
                    "One",
                    "first",
                    vec![
                        Question::single(
                            1,
                            "Q1",
                            vec![AnswerOption::new("a", 0.0), AnswerOption::new("b", 3.0)],
                        ),
                        Question::multiple(
                            2,
                            "Q2",
                            vec![
                                AnswerOption::new("a", 0.5),
                                AnswerOption::new("b", 1.5),
                                AnswerOption::new("c", 2.0),
                            ],
                            Some(3.0),
                        ),
                    ],
                ),
                Dimension::new(
                    "two",
                    "Two",
                    "second",
                    vec![Question::single(
                        3,
                        "Q3",
                        vec![AnswerOption::new("a", 1.0), AnswerOption::new("b", 2.0)],
                    )],
                ),
            ])
            .unwrap(),
        )
    }

    fn started_flow() -> AssessmentFlow {
        let mut flow = AssessmentFlow::new(catalog());
        flow.start().unwrap();
        flow
    }

    fn qid(id: u32) -> QuestionId {
        QuestionId::new(id)
    }

    #[test]
    fn new_flow_is_not_started() {
        let flow = AssessmentFlow::new(catalog());
        assert_eq!(flow.phase(), AssessmentPhase::NotStarted);
        assert!(flow.current_dimension().is_err());
    }

    #[test]
    fn start_enters_first_dimension_with_empty_answers() {
        let flow = started_flow();
        assert_eq!(flow.phase(), AssessmentPhase::InProgress);
        assert_eq!(flow.dimension_index(), 0);
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn start_is_rejected_mid_run() {
        let mut flow = started_flow();
        let err = flow.start().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn select_single_replaces_prior_choice() {
        let mut flow = started_flow();
        flow.select(qid(1), 0).unwrap();
        flow.select(qid(1), 1).unwrap();

        let selected = flow.answers().selected(qid(1)).unwrap();
        assert_eq!(selected.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn select_multiple_toggles() {
        let mut flow = started_flow();
        flow.select(qid(2), 0).unwrap();
        flow.select(qid(2), 2).unwrap();
        flow.select(qid(2), 0).unwrap();

        let selected = flow.answers().selected(qid(2)).unwrap();
        assert_eq!(selected.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn select_rejects_question_outside_current_dimension() {
        let mut flow = started_flow();
        let err = flow.select(qid(3), 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionNotFound);
    }

    #[test]
    fn select_fails_fast_on_out_of_range_option_index() {
        let mut flow = started_flow();
        let err = flow.select(qid(1), 7).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOptionIndex);
        // State untouched.
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn next_is_blocked_until_dimension_complete() {
        let mut flow = started_flow();
        flow.select(qid(1), 1).unwrap();

        assert_eq!(flow.next().unwrap(), NextOutcome::Blocked);
        assert_eq!(flow.dimension_index(), 0);

        flow.select(qid(2), 0).unwrap();
        assert_eq!(
            flow.next().unwrap(),
            NextOutcome::Advanced { dimension_index: 1 }
        );
    }

    #[test]
    fn gate_reopens_when_an_answer_is_toggled_away() {
        let mut flow = started_flow();
        flow.select(qid(1), 1).unwrap();
        flow.select(qid(2), 0).unwrap();
        assert!(flow.is_current_dimension_complete());

        // Toggle off the only selection on the multi-select.
        flow.select(qid(2), 0).unwrap();
        assert!(!flow.is_current_dimension_complete());
        assert_eq!(flow.next().unwrap(), NextOutcome::Blocked);
    }

    #[test]
    fn previous_steps_back_and_keeps_answers() {
        let mut flow = started_flow();
        flow.select(qid(1), 1).unwrap();
        flow.select(qid(2), 0).unwrap();
        flow.next().unwrap();

        assert!(flow.previous().unwrap());
        assert_eq!(flow.dimension_index(), 0);
        assert!(flow.answers().is_answered(qid(1)));
    }

    #[test]
    fn previous_is_a_no_op_on_first_dimension() {
        let mut flow = started_flow();
        assert!(!flow.previous().unwrap());
        assert_eq!(flow.dimension_index(), 0);
    }

    #[test]
    fn next_on_final_dimension_completes_the_run() {
        let mut flow = started_flow();
        flow.select(qid(1), 1).unwrap();
        flow.select(qid(2), 0).unwrap();
        flow.next().unwrap();
        flow.select(qid(3), 1).unwrap();

        assert_eq!(flow.next().unwrap(), NextOutcome::Completed);
        assert_eq!(flow.phase(), AssessmentPhase::Completed);
    }

    #[test]
    fn selection_is_rejected_after_completion() {
        let mut flow = started_flow();
        flow.select(qid(1), 1).unwrap();
        flow.select(qid(2), 0).unwrap();
        flow.next().unwrap();
        flow.select(qid(3), 1).unwrap();
        flow.next().unwrap();

        let err = flow.select(qid(3), 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentAlreadyCompleted);
    }

    #[test]
    fn restart_after_completion_clears_answers() {
        let mut flow = started_flow();
        flow.select(qid(1), 1).unwrap();
        flow.select(qid(2), 0).unwrap();
        flow.next().unwrap();
        flow.select(qid(3), 1).unwrap();
        flow.next().unwrap();

        flow.start().unwrap();
        assert_eq!(flow.phase(), AssessmentPhase::InProgress);
        assert_eq!(flow.dimension_index(), 0);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.progress().answered, 0);
    }

    #[test]
    fn progress_counts_questions_not_dimensions() {
        let mut flow = started_flow();
        assert_eq!(flow.progress().percent(), Percentage::ZERO);

        flow.select(qid(1), 1).unwrap();
        let progress = flow.progress();
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent(), Percentage::new(33));

        flow.select(qid(2), 0).unwrap();
        assert_eq!(flow.progress().percent(), Percentage::new(67));
    }

    #[test]
    fn into_answers_requires_completion() {
        let flow = started_flow();
        assert!(flow.into_answers().is_err());

        let mut flow = started_flow();
        flow.select(qid(1), 1).unwrap();
        flow.select(qid(2), 0).unwrap();
        flow.next().unwrap();
        flow.select(qid(3), 1).unwrap();
        flow.next().unwrap();

        let answers = flow.into_answers().unwrap();
        assert_eq!(answers.answered_count(), 3);
    }
}
