//! Contact form validation and submission lifecycle.
//!
//! DESIGN
//! ======
//! `validate` is a pure first-failure-wins rule chain. `ContactFormState`
//! layers the UI lifecycle on top of it: per-field tone (the colored border
//! while typing), the inline error, the shake target, and the sending phase.
//! The component only renders these fields and performs the browser side
//! effects (focus, fallback redirect).

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static SPAM_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"https?://").expect("url pattern compiles"),
        Regex::new(r"\b(click here|free money|make money|guaranteed)\b").expect("phrase pattern compiles"),
    ]
});

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    /// Element id and form field name.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Company => 2,
            Self::Message => 3,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Your message appears to contain disallowed content")]
    Spam,
}

impl ValidationError {
    /// The field the error is reported against.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::NameTooShort => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::MessageTooShort | Self::Spam => Field::Message,
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn contains_spam(submission: &FormSubmission) -> bool {
    let full_text =
        format!("{} {} {}", submission.name, submission.email, submission.message).to_lowercase();
    SPAM_PATTERNS.iter().any(|re| re.is_match(&full_text))
}

/// Validate a submission; the first failing rule wins.
pub fn validate(submission: &FormSubmission) -> Result<(), ValidationError> {
    if submission.name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if submission.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    if contains_spam(submission) {
        return Err(ValidationError::Spam);
    }
    Ok(())
}

/// Whether `value` passes the rule for a single field.
#[must_use]
pub fn field_is_valid(field: Field, value: &str) -> bool {
    match field {
        Field::Name => value.trim().chars().count() >= MIN_NAME_CHARS,
        Field::Email => is_valid_email(value),
        Field::Company => true,
        Field::Message => value.trim().chars().count() >= MIN_MESSAGE_CHARS,
    }
}

/// Border tone of a form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldTone {
    #[default]
    Neutral,
    /// Amber: an email that is still malformed.
    Pending,
    /// Green.
    Valid,
    /// Red.
    Invalid,
}

impl FieldTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Pending => "field--pending",
            Self::Valid => "field--valid",
            Self::Invalid => "field--error",
        }
    }
}

#[must_use]
pub fn tone_on_input(field: Field, value: &str) -> FieldTone {
    if value.is_empty() {
        FieldTone::Neutral
    } else if field == Field::Email && !is_valid_email(value) {
        FieldTone::Pending
    } else if field_is_valid(field, value) {
        FieldTone::Valid
    } else {
        FieldTone::Neutral
    }
}

#[must_use]
pub fn tone_on_blur(field: Field, value: &str, current: FieldTone) -> FieldTone {
    if !value.is_empty() && !field_is_valid(field, value) {
        FieldTone::Invalid
    } else {
        current
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit; the fallback redirect should be scheduled.
    Proceed,
    /// A submission is already in flight; nothing new to schedule.
    InFlight,
    /// Submission prevented; focus this field.
    Blocked(Field),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    tones: [FieldTone; 4],
    error: Option<ValidationError>,
    shake: Option<Field>,
    phase: SubmitPhase,
}

impl ContactFormState {
    pub fn submit(&mut self, submission: &FormSubmission) -> SubmitDecision {
        if self.phase == SubmitPhase::Sending {
            return SubmitDecision::InFlight;
        }
        self.clear_feedback();
        match validate(submission) {
            Ok(()) => {
                self.phase = SubmitPhase::Sending;
                SubmitDecision::Proceed
            }
            Err(e) => {
                let field = e.field();
                log::debug!("contact form rejected on {}: {e}", field.id());
                self.error = Some(e);
                self.tones[field.index()] = FieldTone::Invalid;
                self.shake = Some(field);
                SubmitDecision::Blocked(field)
            }
        }
    }

    /// Any edit clears previous feedback, then recolors the edited field.
    pub fn on_input(&mut self, field: Field, value: &str) {
        self.clear_feedback();
        self.tones[field.index()] = tone_on_input(field, value);
    }

    pub fn on_blur(&mut self, field: Field, value: &str) {
        let slot = &mut self.tones[field.index()];
        *slot = tone_on_blur(field, value, *slot);
    }

    pub fn end_shake(&mut self) {
        self.shake = None;
    }

    #[must_use]
    pub fn tone(&self, field: Field) -> FieldTone {
        self.tones[field.index()]
    }

    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    #[must_use]
    pub fn is_shaking(&self, field: Field) -> bool {
        self.shake == Some(field)
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => "Send message",
            SubmitPhase::Sending => "Sending...",
        }
    }

    fn clear_feedback(&mut self) {
        self.tones = [FieldTone::Neutral; 4];
        self.error = None;
        self.shake = None;
    }
}
