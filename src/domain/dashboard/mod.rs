//! Dashboard - aggregate statistics over recorded assessments.

mod overview;

pub use overview::{CategorySlice, DashboardOverview};
