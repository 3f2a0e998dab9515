use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Raw contact form as posted by the page. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A trimmed form that passed validation; this is what gets relayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One message per field. Display text is shown to the visitor as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your subject")]
    MissingSubject,
    #[error("Please enter your message")]
    MissingMessage,
}

impl ContactForm {
    /// Checks fields in form order and reports only the first problem.
    pub fn validate(&self) -> Result<ContactSubmission, ContactFieldError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactFieldError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactFieldError::MissingEmail);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ContactFieldError::InvalidEmail);
        }
        if subject.is_empty() {
            return Err(ContactFieldError::MissingSubject);
        }
        if message.is_empty() {
            return Err(ContactFieldError::MissingMessage);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}
