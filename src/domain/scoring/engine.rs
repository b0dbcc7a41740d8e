//! Scoring engine - pure accumulation of answer weights.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::answers::AnswerSet;
use super::category::{CategoryTable, OutcomeCategory};
use crate::domain::catalog::{Catalog, QuestionId, SelectionMode};
use crate::domain::foundation::Points;

/// Contract violations surfaced by the engine.
///
/// Answer sets only originate from the controlled selection flow, so any of
/// these indicates a catalog/flow desynchronization bug; the engine fails
/// fast instead of skipping or reading out of bounds.
#[derive(Debug, Clone, Error)]
pub enum ScoringError {
    #[error("Question {id} selects option index {index}, but only {option_count} options exist")]
    OptionIndexOutOfRange {
        id: QuestionId,
        index: usize,
        option_count: usize,
    },

    #[error("Answer set references unknown question {id}")]
    UnknownQuestion { id: QuestionId },

    #[error("Single-select question {id} holds {count} selections")]
    MultipleSelectionsForSingle { id: QuestionId, count: usize },
}

/// Raw tallied scores, before category resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub total: Points,
    pub per_dimension: BTreeMap<String, Points>,
}

/// A completed assessment's derived result. Recomputed from the answer set;
/// never persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub total: Points,
    pub per_dimension: BTreeMap<String, Points>,
    pub category: OutcomeCategory,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Tallies the total and per-dimension subtotals.
    ///
    /// Single-select questions contribute their one selected option's weight
    /// (zero when unanswered: completeness gating happens upstream in the
    /// flow controller). Multi-select questions contribute the sum of their
    /// selected weights, clamped to the score cap when one is set. Weights
    /// accumulate at full precision with no rounding.
    pub fn tally(answers: &AnswerSet, catalog: &Catalog) -> Result<Scorecard, ScoringError> {
        // Reject ids the catalog does not know before touching any weights.
        for id in answers.question_ids() {
            if catalog.question(id).is_none() {
                return Err(ScoringError::UnknownQuestion { id });
            }
        }

        let mut per_dimension = BTreeMap::new();
        let mut total = Points::ZERO;

        for dimension in catalog.dimensions() {
            let mut subtotal = Points::ZERO;

            for question in &dimension.questions {
                let selected = match answers.selected(question.id) {
                    Some(indices) => indices,
                    None => continue,
                };

                match question.mode {
                    SelectionMode::Single => {
                        if selected.len() > 1 {
                            return Err(ScoringError::MultipleSelectionsForSingle {
                                id: question.id,
                                count: selected.len(),
                            });
                        }
                        if let Some(&index) = selected.iter().next() {
                            subtotal += Self::option_points(catalog, question.id, index)?;
                        }
                    }
                    SelectionMode::Multiple { score_cap } => {
                        let mut raw = Points::ZERO;
                        for &index in selected {
                            raw += Self::option_points(catalog, question.id, index)?;
                        }
                        subtotal += match score_cap {
                            Some(cap) => raw.capped_at(cap),
                            None => raw,
                        };
                    }
                }
            }

            per_dimension.insert(dimension.id.clone(), subtotal);
            total += subtotal;
        }

        Ok(Scorecard { total, per_dimension })
    }

    /// Tallies and resolves the matched outcome category.
    pub fn score(
        answers: &AnswerSet,
        catalog: &Catalog,
        categories: &CategoryTable,
    ) -> Result<ScoredResult, ScoringError> {
        let scorecard = Self::tally(answers, catalog)?;
        let category = categories.resolve(scorecard.total).clone();
        Ok(ScoredResult {
            total: scorecard.total,
            per_dimension: scorecard.per_dimension,
            category,
        })
    }

    fn option_points(
        catalog: &Catalog,
        id: QuestionId,
        index: usize,
    ) -> Result<Points, ScoringError> {
        let (_, question) = catalog
            .question(id)
            .ok_or(ScoringError::UnknownQuestion { id })?;
        question
            .option(index)
            .map(|o| o.points)
            .ok_or(ScoringError::OptionIndexOutOfRange {
                id,
                index,
                option_count: question.option_count(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AnswerOption, Dimension, Question};
    use crate::domain::scoring::category::{OutcomeCategory, ScoreRange, StarRating};
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::try_new(vec![
            Dimension::new(
                "first",
                "First",
                "first dimension",
                vec![
                    Question::single(
                        1,
                        "Single with three options",
                        vec![
                            AnswerOption::new("none", 0.0),
                            AnswerOption::new("some", 1.0),
                            AnswerOption::new("best", 3.0),
                        ],
                    ),
                    Question::multiple(
                        2,
                        "Capped multi-select",
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
                "second",
                "Second",
                "second dimension",
                vec![Question::single(
                    3,
                    "Another single",
                    vec![AnswerOption::new("no", 0.0), AnswerOption::new("yes", 2.0)],
                )],
            ),
        ])
        .unwrap()
    }

    fn categories() -> CategoryTable {
        CategoryTable::try_new(vec![
            OutcomeCategory {
                range: ScoreRange::new(5.0, 10.0),
                title: "Upper".to_string(),
                stars: StarRating::new(4),
                description: String::new(),
                priority_label: String::new(),
                advice: vec![],
                outcome_statement: String::new(),
            },
            OutcomeCategory {
                range: ScoreRange::new(0.0, 4.0),
                title: "Lower".to_string(),
                stars: StarRating::new(1),
                description: String::new(),
                priority_label: String::new(),
                advice: vec![],
                outcome_statement: String::new(),
            },
        ])
        .unwrap()
    }

    fn qid(id: u32) -> QuestionId {
        QuestionId::new(id)
    }

    #[test]
    fn tally_sums_selected_option_weights() {
        let mut answers = AnswerSet::new();
        answers.replace(qid(1), 2);
        answers.toggle(qid(2), 0);
        answers.toggle(qid(2), 1);
        answers.replace(qid(3), 1);

        let scorecard = ScoringEngine::tally(&answers, &catalog()).unwrap();

        // 3.0 + min(0.5 + 1.5, cap 3.0) + 2.0
        assert_eq!(scorecard.total, Points::new(7.0));
        assert_eq!(scorecard.per_dimension["first"], Points::new(5.0));
        assert_eq!(scorecard.per_dimension["second"], Points::new(2.0));
    }

    #[test]
    fn tally_clamps_capped_multi_select_to_its_cap() {
        let mut answers = AnswerSet::new();
        answers.toggle(qid(2), 0);
        answers.toggle(qid(2), 1);
        answers.toggle(qid(2), 2);

        let scorecard = ScoringEngine::tally(&answers, &catalog()).unwrap();

        // Raw 4.0 clamps to the 3.0 cap.
        assert_eq!(scorecard.per_dimension["first"], Points::new(3.0));
    }

    #[test]
    fn tally_counts_unanswered_questions_as_zero() {
        let mut answers = AnswerSet::new();
        answers.replace(qid(3), 1);

        let scorecard = ScoringEngine::tally(&answers, &catalog()).unwrap();

        assert_eq!(scorecard.total, Points::new(2.0));
        assert_eq!(scorecard.per_dimension["first"], Points::ZERO);
    }

    #[test]
    fn tally_of_empty_answer_set_is_zero() {
        let scorecard = ScoringEngine::tally(&AnswerSet::new(), &catalog()).unwrap();
        assert_eq!(scorecard.total, Points::ZERO);
        assert_eq!(scorecard.per_dimension.len(), 2);
    }

    #[test]
    fn tally_fails_fast_on_out_of_range_index() {
        let mut answers = AnswerSet::new();
        answers.replace(qid(3), 5);

        let err = ScoringEngine::tally(&answers, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::OptionIndexOutOfRange { index: 5, option_count: 2, .. }
        ));
    }

    #[test]
    fn tally_fails_fast_on_unknown_question() {
        let mut answers = AnswerSet::new();
        answers.replace(qid(99), 0);

        let err = ScoringEngine::tally(&answers, &catalog()).unwrap_err();
        assert!(matches!(err, ScoringError::UnknownQuestion { .. }));
    }

    #[test]
    fn tally_is_pure_and_idempotent() {
        let mut answers = AnswerSet::new();
        answers.replace(qid(1), 1);
        answers.toggle(qid(2), 2);

        let first = ScoringEngine::tally(&answers, &catalog()).unwrap();
        let second = ScoringEngine::tally(&answers, &catalog()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn score_attaches_the_resolved_category() {
        let mut answers = AnswerSet::new();
        answers.replace(qid(1), 2);
        answers.replace(qid(3), 1);

        let result = ScoringEngine::score(&answers, &catalog(), &categories()).unwrap();

        assert_eq!(result.total, Points::new(5.0));
        assert_eq!(result.category.title, "Upper");
    }

    proptest! {
        /// Totals always equal the independent sum of each selected option's
        /// weight (with caps applied per question), regardless of which
        /// options are chosen.
        #[test]
        fn total_matches_independent_recomputation(
            single_a in 0usize..3,
            single_b in 0usize..2,
            multi_mask in 0u8..8,
        ) {
            let catalog = catalog();
            let mut answers = AnswerSet::new();
            answers.replace(qid(1), single_a);
            answers.replace(qid(3), single_b);
            for bit in 0..3 {
                if multi_mask & (1 << bit) != 0 {
                    answers.toggle(qid(2), bit as usize);
                }
            }

            let scorecard = ScoringEngine::tally(&answers, &catalog).unwrap();

            let weights_one = [0.0, 1.0, 3.0];
            let weights_three = [0.0, 2.0];
            let multi_weights = [0.5, 1.5, 2.0];
            let mut multi_raw: f64 = 0.0;
            for bit in 0..3 {
                if multi_mask & (1 << bit) != 0 {
                    multi_raw += multi_weights[bit as usize];
                }
            }
            let expected = weights_one[single_a] + multi_raw.min(3.0) + weights_three[single_b];

            prop_assert!((scorecard.total.value() - expected).abs() < 1e-9);
        }

        /// The capped question never contributes more than its cap.
        #[test]
        fn capped_question_never_exceeds_cap(multi_mask in 0u8..8) {
            let catalog = catalog();
            let mut answers = AnswerSet::new();
            for bit in 0..3 {
                if multi_mask & (1 << bit) != 0 {
                    answers.toggle(qid(2), bit as usize);
                }
            }

            let scorecard = ScoringEngine::tally(&answers, &catalog).unwrap();
            prop_assert!(scorecard.per_dimension["first"].value() <= 3.0);
        }
    }
}
