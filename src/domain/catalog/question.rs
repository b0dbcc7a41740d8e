//! Question and answer option types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Points;

/// Identifier for a question, unique across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Creates a QuestionId from a raw integer.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw integer.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One selectable answer with its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub points: Points,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, points: f64) -> Self {
        Self {
            label: label.into(),
            points: Points::new(points),
        }
    }
}

/// How many options a question accepts, and how multi-select sums are capped.
///
/// Dispatching on this variant in the scoring engine replaces the loose
/// per-question flags of the data file with an explicit contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SelectionMode {
    /// Exactly one option may be selected; selecting again replaces it.
    Single,
    /// Any number of options; selecting an already-chosen option removes it.
    /// An optional cap clamps the per-question sum.
    Multiple {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        score_cap: Option<Points>,
    },
}

/// A weighted multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub mode: SelectionMode,
}

impl Question {
    /// Builds a single-select question.
    pub fn single(id: u32, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            options,
            mode: SelectionMode::Single,
        }
    }

    /// Builds a multi-select question with an optional score cap.
    pub fn multiple(
        id: u32,
        text: impl Into<String>,
        options: Vec<AnswerOption>,
        score_cap: Option<f64>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            options,
            mode: SelectionMode::Multiple {
                score_cap: score_cap.map(Points::new),
            },
        }
    }

    /// Returns the option at `index`, if in range.
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self.mode, SelectionMode::Multiple { .. })
    }

    /// The highest score this question can contribute.
    ///
    /// Single: the best option. Multiple: the sum of all options, clamped
    /// to the score cap when one is set.
    pub fn max_points(&self) -> Points {
        match self.mode {
            SelectionMode::Single => self
                .options
                .iter()
                .map(|o| o.points)
                .fold(Points::ZERO, |best, p| if p > best { p } else { best }),
            SelectionMode::Multiple { score_cap } => {
                let raw: Points = self.options.iter().map(|o| o.points).sum();
                match score_cap {
                    Some(cap) => raw.capped_at(cap),
                    None => raw,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_options() -> Vec<AnswerOption> {
        vec![
            AnswerOption::new("A", 0.0),
            AnswerOption::new("B", 1.0),
            AnswerOption::new("C", 3.0),
        ]
    }

    #[test]
    fn question_option_returns_none_out_of_range() {
        let q = Question::single(1, "Pick one", three_options());
        assert!(q.option(2).is_some());
        assert!(q.option(3).is_none());
    }

    #[test]
    fn single_question_max_points_is_best_option() {
        let q = Question::single(1, "Pick one", three_options());
        assert_eq!(q.max_points(), Points::new(3.0));
    }

    #[test]
    fn multiple_question_max_points_sums_options() {
        let q = Question::multiple(2, "Pick any", three_options(), None);
        assert_eq!(q.max_points(), Points::new(4.0));
    }

    #[test]
    fn multiple_question_max_points_respects_cap() {
        let q = Question::multiple(2, "Pick any", three_options(), Some(3.0));
        assert_eq!(q.max_points(), Points::new(3.0));
    }

    #[test]
    fn selection_mode_serializes_as_tagged_variant() {
        let json = serde_json::to_string(&SelectionMode::Single).unwrap();
        assert_eq!(json, "{\"mode\":\"single\"}");

        let json = serde_json::to_string(&SelectionMode::Multiple {
            score_cap: Some(Points::new(3.0)),
        })
        .unwrap();
        assert!(json.contains("multiple"));
        assert!(json.contains("3"));
    }
}
