//! File-based store adapter.
//!
//! Keeps assessment and submission records as JSON lists on disk, newest
//! first. An absent or unreadable assessments file is re-initialized with a
//! small set of sample records so the dashboard never renders empty; the
//! submissions file initializes to an empty list.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::domain::catalog::CATEGORIES;
use crate::domain::foundation::{AssessmentRecordId, Points, Timestamp};
use crate::domain::records::{AssessmentRecord, SubmissionRecord};
use crate::ports::{AssessmentStore, StoreError};

const ASSESSMENTS_FILE: &str = "assessments.json";
const SUBMISSIONS_FILE: &str = "submissions.json";

/// JSON-file-backed record store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    /// Create a new file store rooted at a data directory.
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn assessments_path(&self) -> PathBuf {
        self.base_path.join(ASSESSMENTS_FILE)
    }

    fn submissions_path(&self) -> PathBuf {
        self.base_path.join(SUBMISSIONS_FILE)
    }

    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))
    }

    async fn write_json<T: serde::Serialize>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), StoreError> {
        self.ensure_dir().await?;
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        fs::write(path, json)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))
    }

    /// Loads the assessment list, seeding sample records when the file is
    /// missing and re-seeding when it cannot be parsed.
    async fn load_assessments(&self) -> Result<Vec<AssessmentRecord>, StoreError> {
        let path = self.assessments_path();
        if !path.exists() {
            let seed = seed_assessments();
            self.write_json(&path, &seed).await?;
            return Ok(seed);
        }

        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "assessments file corrupt; re-seeding");
                let seed = seed_assessments();
                self.write_json(&path, &seed).await?;
                Ok(seed)
            }
        }
    }

    /// Loads the submission list; missing or corrupt files count as empty.
    async fn load_submissions(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        let path = self.submissions_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "submissions file corrupt; treating as empty");
                Ok(Vec::new())
            }
        }
    }
}

/// Sample records written on first run, mirroring a plausible score spread
/// so the dashboard has something to show.
fn seed_assessments() -> Vec<AssessmentRecord> {
    let spread: [(f64, i64); 5] = [(85.0, 2), (45.0, 5), (95.0, 10), (60.0, 1), (20.0, 0)];
    spread
        .iter()
        .map(|&(score, days_ago)| {
            let total = Points::new(score);
            AssessmentRecord {
                id: AssessmentRecordId::new(),
                recorded_at: Timestamp::now().minus_days(days_ago),
                total_score: total,
                category_title: CATEGORIES.resolve(total).title.clone(),
                dimension_scores: Default::default(),
            }
        })
        .collect()
}

#[async_trait]
impl AssessmentStore for JsonFileStore {
    async fn append_assessment(&self, record: AssessmentRecord) -> Result<(), StoreError> {
        let mut records = self.load_assessments().await?;
        records.insert(0, record);
        self.write_json(&self.assessments_path(), &records).await
    }

    async fn list_assessments(&self) -> Result<Vec<AssessmentRecord>, StoreError> {
        self.load_assessments().await
    }

    async fn append_submission(&self, record: SubmissionRecord) -> Result<(), StoreError> {
        let mut records = self.load_submissions().await?;
        records.insert(0, record);
        self.write_json(&self.submissions_path(), &records).await
    }

    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        self.load_submissions().await
    }
}
