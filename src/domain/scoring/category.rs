//! Outcome categories and the score-bracket resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::warn;

use crate::domain::foundation::{Points, ValidationError};

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    /// Creates a StarRating, clamping into the 1-5 range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Creates a StarRating, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("stars", 1, 5, value as i32));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..5 {
            write!(f, "{}", if i < self.0 { '★' } else { '☆' })?;
        }
        Ok(())
    }
}

/// Inclusive score bracket `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    low: f64,
    high: f64,
}

impl ScoreRange {
    /// Creates a range; bounds are validated at table construction.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive containment check.
    pub fn contains(&self, score: Points) -> bool {
        score.value() >= self.low && score.value() <= self.high
    }
}

/// A named score bracket with its descriptive text and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeCategory {
    pub range: ScoreRange,
    pub title: String,
    pub stars: StarRating,
    pub description: String,
    pub priority_label: String,
    pub advice: Vec<String>,
    pub outcome_statement: String,
}

/// Errors detected while validating the category table.
#[derive(Debug, Error)]
pub enum CategoryTableError {
    #[error("Category table must contain at least one category")]
    Empty,

    #[error("Category '{title}' has an invalid range [{low}, {high}]")]
    InvalidRange { title: String, low: f64, high: f64 },

    #[error("Categories '{first}' and '{second}' have overlapping ranges")]
    Overlap { first: String, second: String },

    #[error("Score domain has a gap between {after} and {before}")]
    Gap { after: f64, before: f64 },

    #[error("Lowest bracket starts at {low} instead of 0")]
    DoesNotStartAtZero { low: f64 },

    #[error("Top bracket ends at {high}, below the achievable maximum {max}")]
    DomainNotCovered { high: f64, max: f64 },
}

/// Ordered category table; resolution returns the first matching bracket.
/// Construct through `try_new` so the non-empty invariant always holds.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTable {
    categories: Vec<OutcomeCategory>,
}

impl CategoryTable {
    /// Validates basic structure: non-empty, each range well formed.
    ///
    /// Partition coverage is checked separately by `validate_partition`
    /// because it depends on the catalog's computed maximum.
    pub fn try_new(categories: Vec<OutcomeCategory>) -> Result<Self, CategoryTableError> {
        if categories.is_empty() {
            return Err(CategoryTableError::Empty);
        }
        for c in &categories {
            if c.range.low() < 0.0 || c.range.high() < c.range.low() {
                return Err(CategoryTableError::InvalidRange {
                    title: c.title.clone(),
                    low: c.range.low(),
                    high: c.range.high(),
                });
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[OutcomeCategory] {
        &self.categories
    }

    /// Checks that the brackets partition `[0, max]` with no gaps or
    /// overlaps. Bracket bounds are whole numbers adjacent at `high + 1`;
    /// the top bracket may extend past the achievable maximum.
    pub fn validate_partition(&self, max: Points) -> Result<(), CategoryTableError> {
        let mut ordered: Vec<&OutcomeCategory> = self.categories.iter().collect();
        ordered.sort_by(|a, b| {
            a.range
                .low()
                .partial_cmp(&b.range.low())
                .expect("range bounds are finite")
        });

        let first = ordered[0];
        if first.range.low() != 0.0 {
            return Err(CategoryTableError::DoesNotStartAtZero {
                low: first.range.low(),
            });
        }

        for pair in ordered.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.range.low() <= prev.range.high() {
                return Err(CategoryTableError::Overlap {
                    first: prev.title.clone(),
                    second: next.title.clone(),
                });
            }
            if next.range.low() != prev.range.high() + 1.0 {
                return Err(CategoryTableError::Gap {
                    after: prev.range.high(),
                    before: next.range.low(),
                });
            }
        }

        let top = ordered[ordered.len() - 1];
        if top.range.high() < max.value() {
            return Err(CategoryTableError::DomainNotCovered {
                high: top.range.high(),
                max: max.value(),
            });
        }

        Ok(())
    }

    /// Returns the first category whose range contains the score.
    ///
    /// A score no bracket contains means the static table is malformed (or a
    /// fractional total landed between whole-number brackets); this is a
    /// user-facing result path, so fall back to the lowest bracket and log
    /// the anomaly instead of failing.
    pub fn resolve(&self, total: Points) -> &OutcomeCategory {
        match self.categories.iter().find(|c| c.range.contains(total)) {
            Some(category) => category,
            None => {
                let fallback = self.lowest();
                warn!(
                    total = total.value(),
                    fallback = %fallback.title,
                    "no category bracket contains the total score; using lowest bracket"
                );
                fallback
            }
        }
    }

    /// The lowest-scoring bracket.
    pub fn lowest(&self) -> &OutcomeCategory {
        self.categories
            .iter()
            .min_by(|a, b| {
                a.range
                    .low()
                    .partial_cmp(&b.range.low())
                    .expect("range bounds are finite")
            })
            .expect("table is never empty after construction")
    }
}
