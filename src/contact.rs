//! Contact form model.

use crate::error::ContactError;

/// The four fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A successfully submitted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks required fields in form order and the email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ];
        if let Some((label, _)) = fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::Missing(label));
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
            _ => Err(ContactError::InvalidEmail(email.to_string())),
        }
    }

    /// Validates and, on success, hands back the message and clears the form.
    ///
    /// On failure the form is left as typed.
    pub fn submit(&mut self) -> Result<Submission, ContactError> {
        self.validate()?;
        let form = std::mem::take(self);
        Ok(Submission {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
