//! Contact details captured by the unlock form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Validated contact details. Name and phone are required; company is
/// optional and blank values collapse to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    name: String,
    phone: String,
    company: Option<String>,
}

impl ContactDetails {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        company: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let phone = phone.into().trim().to_string();
        if phone.is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }

        let company = company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self { name, phone, company })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_details_accepts_valid_input() {
        let contact = ContactDetails::new("Ms. Wang", "13800000000", Some("Acme Ltd".into())).unwrap();
        assert_eq!(contact.name(), "Ms. Wang");
        assert_eq!(contact.phone(), "13800000000");
        assert_eq!(contact.company(), Some("Acme Ltd"));
    }

    #[test]
    fn contact_details_rejects_blank_name() {
        let err = ContactDetails::new("   ", "13800000000", None).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { field } if field == "name"));
    }

    #[test]
    fn contact_details_rejects_blank_phone() {
        let err = ContactDetails::new("Ms. Wang", "", None).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { field } if field == "phone"));
    }

    #[test]
    fn blank_company_collapses_to_none() {
        let contact = ContactDetails::new("Ms. Wang", "13800000000", Some("  ".into())).unwrap();
        assert_eq!(contact.company(), None);
    }

    #[test]
    fn contact_details_trims_whitespace() {
        let contact = ContactDetails::new("  Ms. Wang ", " 138 ", None).unwrap();
        assert_eq!(contact.name(), "Ms. Wang");
        assert_eq!(contact.phone(), "138");
    }
}
