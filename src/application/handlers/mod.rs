//! Command and query handlers.

mod complete_assessment;
mod get_dashboard;
mod submit_contact;

pub use complete_assessment::{
    CompleteAssessmentCommand, CompleteAssessmentError, CompleteAssessmentHandler,
    CompleteAssessmentResult,
};
pub use get_dashboard::GetDashboardHandler;
pub use submit_contact::{
    SubmitContactCommand, SubmitContactError, SubmitContactHandler, SubmitContactResult,
};
