use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const MIN_MESSAGE_CHARS: usize = 10;

// Loose shape check: local@domain.tld with no whitespace and a single '@'.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email")]
    InvalidFormat,
    #[error("Message must be at least 10 characters")]
    TooShort,
}

impl FieldError {
    /// Inline message shown under `field`.
    pub fn describe(self, field: Field) -> String {
        match (self, field) {
            (FieldError::Required, Field::Name) => "Name is required".to_string(),
            (FieldError::Required, Field::Email) => "Email is required".to_string(),
            (FieldError::Required, Field::Subject) => "Subject is required".to_string(),
            (FieldError::Required, Field::Message) => "Message is required".to_string(),
            (other, _) => other.to_string(),
        }
    }
}

pub type ValidationErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

fn is_plausible_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check every field independently; a field absent from the result is valid.
pub fn validate(fields: &ContactMessage) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required);
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::Required);
    } else if !is_plausible_email(&fields.email) {
        errors.insert(Field::Email, FieldError::InvalidFormat);
    }

    if fields.subject.trim().is_empty() {
        errors.insert(Field::Subject, FieldError::Required);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::Required);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(Field::Message, FieldError::TooShort);
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl SubmitStatus {
    pub fn is_settled(self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Failure)
    }
}

/// What a `submit` call decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Fields were valid; send this captured copy.
    Dispatch(ContactMessage),
    /// Errors were recorded; nothing is sent.
    Invalid,
    /// A send is already in flight.
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactMessage,
    errors: ValidationErrors,
    status: SubmitStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactSnapshot {
    pub fields: ContactMessage,
    pub errors: ValidationErrors,
    pub status: SubmitStatus,
}

impl ContactSnapshot {
    pub fn error_text(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(|error| error.describe(field))
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.slot(field) = value;
        if self.errors.remove(&field).is_some() {
            debug!("contact: cleared error on {}", field.id());
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.fields)
    }

    pub fn submit(&mut self) -> SubmitDecision {
        if self.status == SubmitStatus::Submitting {
            return SubmitDecision::InFlight;
        }
        let errors = self.validate();
        if !errors.is_empty() {
            debug!("contact: {} field(s) invalid", errors.len());
            self.errors = errors;
            return SubmitDecision::Invalid;
        }
        self.errors.clear();
        self.status = SubmitStatus::Submitting;
        SubmitDecision::Dispatch(self.fields.clone())
    }

    /// Apply the send outcome. Returns false if no send was in flight.
    pub fn complete(&mut self, delivered: bool) -> bool {
        if self.status != SubmitStatus::Submitting {
            return false;
        }
        if delivered {
            self.status = SubmitStatus::Success;
            self.fields = ContactMessage::default();
        } else {
            self.status = SubmitStatus::Failure;
        }
        true
    }

    /// Success/Failure back to Idle. Returns false if the status was not settled.
    pub fn revert_status(&mut self) -> bool {
        if !self.status.is_settled() {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        ContactSnapshot {
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, subject: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: body.into(),
        }
    }

    fn filled(form: &mut ContactForm, fields: &ContactMessage) {
        for field in Field::ALL {
            form.set_field(field, fields.get(field).to_string());
        }
    }

    #[test]
    fn reports_every_invalid_field_at_once() {
        let errors = validate(&message("", "bob@x", "hi", "short"));
        let expected: ValidationErrors = [
            (Field::Name, FieldError::Required),
            (Field::Email, FieldError::InvalidFormat),
            (Field::Message, FieldError::TooShort),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
        assert!(!errors.contains_key(&Field::Subject));
    }

    #[test]
    fn accepts_complete_form() {
        assert!(validate(&message("Bob", "bob@x.com", "Hi", "This is long enough.")).is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = validate(&message("  ", "\t", " \n", "   "));
        assert_eq!(errors.len(), 4);
        assert!(errors.values().all(|e| *e == FieldError::Required));
    }

    #[test]
    fn message_length_uses_trimmed_chars() {
        assert_eq!(
            validate(&message("a", "a@b.c", "s", "   123456789   ")).get(&Field::Message),
            Some(&FieldError::TooShort)
        );
        assert!(validate(&message("a", "a@b.c", "s", "ääääääääää")).is_empty());
    }

    #[test]
    fn email_pattern_stays_permissive() {
        for ok in ["a@b.c", "first.last@sub.example.org", "a@b..c", "x@.b.c"] {
            assert!(is_plausible_email(ok), "{ok} should pass");
        }
        for bad in ["a@b", "a@b.", "@b.c", "a@@b.c", "a b@c.d", " a@b.c", "user@localhost"] {
            assert!(!is_plausible_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn validate_is_pure() {
        let mut form = ContactForm::new();
        filled(&mut form, &message("", "nope", "", "tiny"));
        let before = form.snapshot();
        assert_eq!(form.validate(), form.validate());
        assert_eq!(form.snapshot(), before);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitDecision::Invalid);
        assert_eq!(form.snapshot().errors.len(), 4);

        form.set_field(Field::Email, "still wrong".into());
        let errors = form.snapshot().errors;
        assert!(!errors.contains_key(&Field::Email));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn invalid_submit_keeps_status() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitDecision::Invalid);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn success_clears_fields() {
        let fields = message("Bob", "bob@x.com", "Hi", "This is long enough.");
        let mut form = ContactForm::new();
        filled(&mut form, &fields);

        assert_eq!(form.submit(), SubmitDecision::Dispatch(fields));
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(form.submit(), SubmitDecision::InFlight);

        assert!(form.complete(true));
        let snapshot = form.snapshot();
        assert_eq!(snapshot.status, SubmitStatus::Success);
        assert_eq!(snapshot.fields, ContactMessage::default());
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let fields = message("Bob", "bob@x.com", "Hi", "This is long enough.");
        let mut form = ContactForm::new();
        filled(&mut form, &fields);
        form.submit();

        assert!(form.complete(false));
        assert_eq!(form.status(), SubmitStatus::Failure);
        assert!(form.snapshot().errors.is_empty());
        assert_eq!(form.submit(), SubmitDecision::Dispatch(fields));
    }

    #[test]
    fn stray_completion_and_revert_are_rejected() {
        let mut form = ContactForm::new();
        assert!(!form.complete(true));
        assert!(!form.revert_status());
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn describes_required_per_field() {
        assert_eq!(FieldError::Required.describe(Field::Name), "Name is required");
        assert_eq!(FieldError::InvalidFormat.describe(Field::Email), "Please enter a valid email");
    }
}
