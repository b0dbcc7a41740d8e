//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentStore` - append-only log of assessments and submissions
//! - `Notifier` - fire-and-forget multi-channel submission dispatch

mod assessment_store;
mod notifier;

pub use assessment_store::{AssessmentStore, StoreError};
pub use notifier::{ChannelReport, ChannelStatus, Notifier, SubmissionNotice};
