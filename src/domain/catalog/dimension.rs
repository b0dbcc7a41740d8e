//! Dimension - a thematic grouping of questions contributing one subtotal.

use serde::{Deserialize, Serialize};

use super::question::{Question, QuestionId};
use crate::domain::foundation::Points;

/// A named group of questions scored as one subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Dimension {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            questions,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Finds a question of this dimension by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains_question(&self, id: QuestionId) -> bool {
        self.question(id).is_some()
    }

    /// The highest subtotal this dimension can contribute.
    pub fn max_points(&self) -> Points {
        self.questions.iter().map(|q| q.max_points()).sum()
    }
}
