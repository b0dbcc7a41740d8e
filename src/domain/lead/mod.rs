//! Lead capture - validated contact details for the unlock form.

mod contact;

pub use contact::ContactDetails;
