//! Contact page state.

use themeapp::{ContactError, ContactForm, Submission};

/// Feedback shown under the contact form after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactNotice {
    Sent,
    Invalid(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub form: ContactForm,
    notice: Option<ContactNotice>,
}

impl ContactState {
    pub fn notice(&self) -> Option<&ContactNotice> {
        self.notice.as_ref()
    }

    /// Submits the form and records the notice to display.
    pub fn submit(&mut self) -> Result<Submission, ContactError> {
        let result = self.form.submit();
        self.notice = Some(match &result {
            Ok(_) => ContactNotice::Sent,
            Err(err) => ContactNotice::Invalid(err.to_string()),
        });
        result
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_records_notice() {
        let mut contact = ContactState::default();
        assert!(contact.submit().is_err());
        assert!(matches!(contact.notice(), Some(ContactNotice::Invalid(_))));

        contact.form = ContactForm {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        assert!(contact.submit().is_ok());
        assert_eq!(contact.notice(), Some(&ContactNotice::Sent));
        assert!(contact.form.is_empty());

        contact.dismiss_notice();
        assert_eq!(contact.notice(), None);
    }
}
