//! Catalog - the validated, immutable set of dimensions and questions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;
use super::question::{Question, QuestionId};
use crate::domain::foundation::Points;

/// Errors detected while validating catalog structure.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one dimension")]
    Empty,

    #[error("Question id {id} appears more than once in the catalog")]
    DuplicateQuestionId { id: QuestionId },

    #[error("Question {id} has no options")]
    NoOptions { id: QuestionId },

    #[error("Question {id} has a non-positive score cap")]
    InvalidScoreCap { id: QuestionId },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// The full question catalog. Immutable once constructed; validation runs
/// exactly once, at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    dimensions: Vec<Dimension>,
}

/// Raw deserialization target, promoted to `Catalog` through validation.
#[derive(Debug, Deserialize)]
struct CatalogData {
    dimensions: Vec<Dimension>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::try_new(data.dimensions)
    }
}

impl Catalog {
    /// Validates and constructs a catalog.
    ///
    /// Question ids must be globally unique across all dimensions, every
    /// question must offer at least one option, and multi-select score caps
    /// must be positive.
    pub fn try_new(dimensions: Vec<Dimension>) -> Result<Self, CatalogError> {
        if dimensions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for question in dimensions.iter().flat_map(|d| &d.questions) {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId { id: question.id });
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions { id: question.id });
            }
            if let super::question::SelectionMode::Multiple {
                score_cap: Some(cap),
            } = question.mode
            {
                if cap <= Points::ZERO {
                    return Err(CatalogError::InvalidScoreCap { id: question.id });
                }
            }
        }

        Ok(Self { dimensions })
    }

    /// Parses a catalog from YAML (used for catalog override files).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns the dimension at `index`, if in range.
    pub fn dimension(&self, index: usize) -> Option<&Dimension> {
        self.dimensions.get(index)
    }

    /// Looks up a question anywhere in the catalog, with its dimension.
    pub fn question(&self, id: QuestionId) -> Option<(&Dimension, &Question)> {
        self.dimensions
            .iter()
            .find_map(|d| d.question(id).map(|q| (d, q)))
    }

    /// Total number of questions across all dimensions.
    pub fn total_question_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.question_count()).sum()
    }

    /// The highest total score any answer set can reach.
    ///
    /// Computed from the catalog rather than assumed: multi-select caps make
    /// the true maximum data-dependent.
    pub fn max_possible_score(&self) -> Points {
        self.dimensions.iter().map(|d| d.max_points()).sum()
    }
}
