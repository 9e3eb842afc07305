//! Contact form validation.
//!
//! Each field has a pure predicate over its trimmed value. The form
//! revalidates a field on every input and all four on submit; submission
//! only proceeds when every field is valid.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PortfolioError, PortfolioResult};

/// `local@domain.tld` with no whitespace and exactly one `@` per side.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// Contact form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Run this field's predicate
    pub fn validate(&self, value: &str) -> FieldValidationResult {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Subject => validate_subject(value),
            Field::Message => validate_message(value),
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }
}

/// Outcome of one field predicate. `message` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationResult {
    pub valid: bool,
    pub message: String,
}

impl FieldValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

pub fn validate_name(value: &str) -> FieldValidationResult {
    let name = value.trim();
    if name.is_empty() {
        FieldValidationResult::error("Name is required")
    } else if name.chars().count() < NAME_MIN_CHARS {
        FieldValidationResult::error("Name must be at least 2 characters")
    } else {
        FieldValidationResult::ok()
    }
}

pub fn validate_email(value: &str) -> FieldValidationResult {
    let email = value.trim();
    if email.is_empty() {
        FieldValidationResult::error("Email is required")
    } else if !EMAIL_REGEX.is_match(email) {
        FieldValidationResult::error("Please enter a valid email address")
    } else {
        FieldValidationResult::ok()
    }
}

pub fn validate_subject(value: &str) -> FieldValidationResult {
    if value.trim().is_empty() {
        FieldValidationResult::error("Subject is required")
    } else {
        FieldValidationResult::ok()
    }
}

pub fn validate_message(value: &str) -> FieldValidationResult {
    let message = value.trim();
    if message.is_empty() {
        FieldValidationResult::error("Message is required")
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        FieldValidationResult::error("Message must be at least 10 characters")
    } else {
        FieldValidationResult::ok()
    }
}

/// Where the simulated send is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

/// A validated message ready for the (simulated) send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact form values plus the latest result per field.
///
/// Results start as `None` (untouched) so a fresh form shows no messages.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: [String; 4],
    results: [Option<FieldValidationResult>; 4],
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a field from an input event and revalidate it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &FieldValidationResult {
        let i = field.index();
        self.values[i] = value.into();
        self.results[i].insert(field.validate(&self.values[i]))
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Latest result for a field, `None` until first validated
    pub fn result(&self, field: Field) -> Option<&FieldValidationResult> {
        self.results[field.index()].as_ref()
    }

    /// Message to show under a field (empty when valid or untouched)
    pub fn message(&self, field: Field) -> &str {
        self.result(field).map(|r| r.message.as_str()).unwrap_or("")
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Revalidate all four fields. On success the form enters
    /// [`SubmitPhase::Sending`] and the trimmed values are returned.
    pub fn submit(&mut self) -> PortfolioResult<Submission> {
        if self.phase == SubmitPhase::Sending {
            return Err(PortfolioError::SubmissionInProgress);
        }

        let mut invalid = Vec::new();
        for field in Field::ALL {
            let i = field.index();
            let result = field.validate(&self.values[i]);
            if !result.valid {
                invalid.push(field);
            }
            self.results[i] = Some(result);
        }
        if !invalid.is_empty() {
            return Err(PortfolioError::InvalidForm { fields: invalid });
        }

        self.phase = SubmitPhase::Sending;
        Ok(Submission {
            name: self.values[0].trim().to_string(),
            email: self.values[1].trim().to_string(),
            subject: self.values[2].trim().to_string(),
            message: self.values[3].trim().to_string(),
        })
    }

    /// The simulated send completed: clear the form.
    pub fn finish(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_cases() {
        let empty = validate_email("");
        assert!(!empty.valid);
        assert!(empty.message.contains("required"));

        let short = validate_email("a@b");
        assert!(!short.valid);
        assert!(short.message.contains("valid email"));

        assert!(validate_email("a@b.com").valid);
        assert!(validate_email("  a@b.com  ").valid);
        assert!(!validate_email("a b@c.com").valid);
        assert!(!validate_email("a@@b.com").valid);
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name("  ").message, "Name is required");
        assert_eq!(validate_name("A").message, "Name must be at least 2 characters");
        assert!(validate_name("Al").valid);
    }

    #[test]
    fn test_subject_rule() {
        assert_eq!(validate_subject("").message, "Subject is required");
        assert!(validate_subject("Hi").valid);
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(validate_message("").message, "Message is required");
        assert_eq!(
            validate_message("too short").message,
            "Message must be at least 10 characters"
        );
        assert!(validate_message("long enough").valid);
    }

    #[test]
    fn test_set_revalidates_field() {
        let mut form = ContactForm::new();
        assert!(form.result(Field::Email).is_none());
        assert!(!form.set(Field::Email, "a@b").valid);
        assert!(form.set(Field::Email, "a@b.com").valid);
        assert_eq!(form.message(Field::Email), "");
    }

    #[test]
    fn test_submit_rejects_and_reports_fields() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Carl");
        form.set(Field::Message, "short");

        match form.submit() {
            Err(PortfolioError::InvalidForm { fields }) => {
                assert_eq!(fields, vec![Field::Email, Field::Subject, Field::Message]);
            }
            other => panic!("expected InvalidForm, got {other:?}"),
        }
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.message(Field::Subject), "Subject is required");
    }

    #[test]
    fn test_submit_then_finish() {
        let mut form = ContactForm::new();
        form.set(Field::Name, " Carl ");
        form.set(Field::Email, "carl@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "I would like to work together.");

        let submission = form.submit().unwrap();
        assert_eq!(submission.name, "Carl");
        assert_eq!(form.phase(), SubmitPhase::Sending);
        assert!(matches!(form.submit(), Err(PortfolioError::SubmissionInProgress)));

        form.finish();
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.value(Field::Name), "");
        assert!(form.result(Field::Name).is_none());
    }
}
