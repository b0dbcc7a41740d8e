//! GetDashboardHandler - query handler for the statistics overview.

use std::sync::Arc;

use crate::domain::dashboard::DashboardOverview;
use crate::domain::scoring::CategoryTable;
use crate::ports::{AssessmentStore, StoreError};

/// Handler computing the dashboard overview from stored records.
pub struct GetDashboardHandler {
    store: Arc<dyn AssessmentStore>,
    categories: Arc<CategoryTable>,
}

impl GetDashboardHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, categories: Arc<CategoryTable>) -> Self {
        Self { store, categories }
    }

    pub async fn handle(&self) -> Result<DashboardOverview, StoreError> {
        let records = self.store.list_assessments().await?;
        Ok(DashboardOverview::from_records(&records, &self.categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::adapters::storage::InMemoryStore;
    use crate::domain::foundation::{AssessmentRecordId, Points, Timestamp};
    use crate::domain::records::AssessmentRecord;
    use crate::domain::scoring::{OutcomeCategory, ScoreRange, StarRating};
    use crate::ports::AssessmentStore;

    fn categories() -> Arc<CategoryTable> {
        let category = |title: &str, low: f64, high: f64| OutcomeCategory {
            range: ScoreRange::new(low, high),
            title: title.to_string(),
            stars: StarRating::new(3),
            description: String::new(),
            priority_label: String::new(),
            advice: vec![],
            outcome_statement: String::new(),
        };
        Arc::new(
            CategoryTable::try_new(vec![category("Upper", 50.0, 100.0), category("Lower", 0.0, 49.0)])
                .unwrap(),
        )
    }

    fn record(score: f64, title: &str) -> AssessmentRecord {
        AssessmentRecord {
            id: AssessmentRecordId::new(),
            recorded_at: Timestamp::now(),
            total_score: Points::new(score),
            category_title: title.to_string(),
            dimension_scores: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn handle_aggregates_stored_records() {
        let store = Arc::new(InMemoryStore::new());
        store.append_assessment(record(80.0, "Upper")).await.unwrap();
        store.append_assessment(record(20.0, "Lower")).await.unwrap();

        let handler = GetDashboardHandler::new(store, categories());
        let overview = handler.handle().await.unwrap();

        assert_eq!(overview.total_assessments, 2);
        assert_eq!(overview.average_score, 50);
        assert_eq!(overview.distribution[0].count, 1);
    }

    #[tokio::test]
    async fn handle_on_empty_store_yields_zeroed_overview() {
        let handler = GetDashboardHandler::new(Arc::new(InMemoryStore::new()), categories());
        let overview = handler.handle().await.unwrap();

        assert_eq!(overview.total_assessments, 0);
        assert_eq!(overview.average_score, 0);
    }
}
