use serde::Serialize;

use crate::domain::foundation::Percentage;
use crate::domain::records::AssessmentRecord;
use crate::domain::scoring::CategoryTable;

/// Aggregate statistics over all recorded assessments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Number of recorded assessments.
    pub total_assessments: usize,

    /// Average total score, rounded to the nearest whole point.
    /// Rounding here is display-only; stored scores keep full precision.
    pub average_score: u32,

    /// Count and share per category, in table order. Records whose category
    /// title no longer matches the table land in trailing fallback slices.
    pub distribution: Vec<CategorySlice>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub title: String,
    pub count: usize,
    pub share: Percentage,
}

impl DashboardOverview {
    /// Computes the overview from stored records.
    ///
    /// Every category of the table gets a slice even at zero count, so the
    /// distribution always renders completely. An empty record list yields a
    /// zeroed overview.
    pub fn from_records(records: &[AssessmentRecord], categories: &CategoryTable) -> Self {
        let total = records.len();

        let average_score = if total == 0 {
            0
        } else {
            let sum: f64 = records.iter().map(|r| r.total_score.value()).sum();
            (sum / total as f64).round().max(0.0) as u32
        };

        let mut slices: Vec<CategorySlice> = categories
            .categories()
            .iter()
            .map(|c| CategorySlice {
                title: c.title.clone(),
                count: 0,
                share: Percentage::ZERO,
            })
            .collect();

        for record in records {
            match slices.iter_mut().find(|s| s.title == record.category_title) {
                Some(slice) => slice.count += 1,
                // Title drifted from the current table; keep it visible.
                None => slices.push(CategorySlice {
                    title: record.category_title.clone(),
                    count: 1,
                    share: Percentage::ZERO,
                }),
            }
        }

        for slice in &mut slices {
            slice.share = Percentage::from_ratio(slice.count, total);
        }

        Self {
            total_assessments: total,
            average_score,
            distribution: slices,
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
