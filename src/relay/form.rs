//! Contact form state and local validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Coarse email shape check, the same pattern the relay enforces.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

/// Coarse email-shape check shared by the form and the relay.
#[must_use]
pub fn email_looks_valid(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Fields in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name field
    Name,
    /// Sender email field
    Email,
    /// Message body field
    Message,
}

/// Validated contact payload, serialized as the relay request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Local validation failures; the form stays editable and no request
/// is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of the three fields is empty.
    MissingFields,
    /// The email does not look like an address.
    InvalidEmail,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Please fill all fields."),
            Self::InvalidEmail => write!(f, "Please enter a valid email."),
        }
    }
}

/// Editable contact form state.
///
/// Holds the three text fields and which one currently receives typed
/// characters. Validation never touches the network.
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Current input field
    pub active_field: ContactField,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_field: ContactField::Name,
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }

    /// Get the active field's input string (mutable).
    pub const fn active_field_mut(&mut self) -> &mut String {
        match self.active_field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Move to the next field.
    pub const fn next_field(&mut self) {
        self.active_field = match self.active_field {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        };
    }

    /// Move to the previous field.
    pub const fn previous_field(&mut self) {
        self.active_field = match self.active_field {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        };
    }

    /// Append a typed character to the focused field.
    pub fn type_char(&mut self, c: char) {
        self.active_field_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.active_field_mut().pop();
    }

    /// Clear all fields (after a successful send).
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.active_field = ContactField::Name;
    }

    /// Validates the form and produces the wire payload.
    ///
    /// All three fields must be non-empty (whitespace does not count)
    /// and the email must match the coarse shape check.
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !email_looks_valid(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Hello there".to_string();
        form
    }

    #[test]
    fn test_valid_form_produces_payload() {
        let payload = filled_form().validate().expect("valid form");
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut form = filled_form();
        form.message.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_whitespace_only_field_rejected() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_field_cycling_wraps() {
        let mut form = ContactForm::new();
        form.next_field();
        assert_eq!(form.active_field, ContactField::Email);
        form.next_field();
        assert_eq!(form.active_field, ContactField::Message);
        form.next_field();
        assert_eq!(form.active_field, ContactField::Name);
        form.previous_field();
        assert_eq!(form.active_field, ContactField::Message);
    }

    #[test]
    fn test_typing_goes_to_active_field() {
        let mut form = ContactForm::new();
        form.type_char('A');
        form.next_field();
        form.type_char('b');
        assert_eq!(form.name, "A");
        assert_eq!(form.email, "b");
        form.backspace();
        assert_eq!(form.email, "");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.active_field = ContactField::Message;
        form.reset();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert_eq!(form.active_field, ContactField::Name);
    }
}
