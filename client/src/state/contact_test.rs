use super::*;

fn submission(name: &str, email: &str, message: &str) -> FormSubmission {
    FormSubmission {
        name: name.to_owned(),
        email: email.to_owned(),
        company: None,
        message: message.to_owned(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn minimal_valid_submission_passes() {
    assert_eq!(validate(&submission("Al", "a@b.co", "1234567890")), Ok(()));
}

#[test]
fn short_name_fails_on_name() {
    let err = validate(&submission("A", "a@b.co", "1234567890")).unwrap_err();
    assert_eq!(err, ValidationError::NameTooShort);
    assert_eq!(err.field(), Field::Name);
}

#[test]
fn whitespace_padded_name_is_trimmed() {
    let err = validate(&submission("  A  ", "a@b.co", "1234567890")).unwrap_err();
    assert_eq!(err.field(), Field::Name);
}

#[test]
fn malformed_email_fails_on_email() {
    let err = validate(&submission("Alice", "not-an-email", "1234567890")).unwrap_err();
    assert_eq!(err, ValidationError::InvalidEmail);
    assert_eq!(err.field(), Field::Email);
}

#[test]
fn short_message_fails_on_message() {
    let err = validate(&submission("Alice", "a@b.co", "short")).unwrap_err();
    assert_eq!(err, ValidationError::MessageTooShort);
    assert_eq!(err.field(), Field::Message);
}

#[test]
fn url_in_message_is_spam() {
    let err = validate(&submission("Alice", "a@b.co", "Visit http://x.com now")).unwrap_err();
    assert_eq!(err, ValidationError::Spam);
    assert_eq!(err.field(), Field::Message);
}

#[test]
fn spam_phrases_match_case_insensitively() {
    let err = validate(&submission("Alice", "a@b.co", "This is GUARANTEED to work")).unwrap_err();
    assert_eq!(err, ValidationError::Spam);
    let err = validate(&submission("Alice", "a@b.co", "Please Click Here today")).unwrap_err();
    assert_eq!(err, ValidationError::Spam);
}

#[test]
fn spam_phrases_need_word_boundaries() {
    assert_eq!(validate(&submission("Alice", "a@b.co", "Our guaranteedly fine plan")), Ok(()));
}

#[test]
fn first_failure_wins() {
    let err = validate(&submission("A", "bad", "short")).unwrap_err();
    assert_eq!(err.field(), Field::Name);
    let err = validate(&submission("Alice", "bad", "short")).unwrap_err();
    assert_eq!(err.field(), Field::Email);
}

#[test]
fn email_shape_rules() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email(""));
}

#[test]
fn validation_messages_render() {
    assert_eq!(ValidationError::NameTooShort.to_string(), "Name must be at least 2 characters");
}

// =============================================================
// Live feedback
// =============================================================

#[test]
fn tone_on_input_colors_email_states() {
    assert_eq!(tone_on_input(Field::Email, ""), FieldTone::Neutral);
    assert_eq!(tone_on_input(Field::Email, "alice@"), FieldTone::Pending);
    assert_eq!(tone_on_input(Field::Email, "alice@mail.com"), FieldTone::Valid);
}

#[test]
fn tone_on_input_other_fields() {
    assert_eq!(tone_on_input(Field::Name, "A"), FieldTone::Neutral);
    assert_eq!(tone_on_input(Field::Name, "Al"), FieldTone::Valid);
    assert_eq!(tone_on_input(Field::Company, "Acme"), FieldTone::Valid);
}

#[test]
fn tone_on_blur_marks_invalid_only_when_non_empty() {
    assert_eq!(tone_on_blur(Field::Message, "too short", FieldTone::Neutral), FieldTone::Invalid);
    assert_eq!(tone_on_blur(Field::Message, "", FieldTone::Neutral), FieldTone::Neutral);
    assert_eq!(tone_on_blur(Field::Email, "a@b.co", FieldTone::Valid), FieldTone::Valid);
}

// =============================================================
// ContactFormState
// =============================================================

#[test]
fn blocked_submit_highlights_and_shakes_field() {
    let mut state = ContactFormState::default();
    let decision = state.submit(&submission("Alice", "nope", "1234567890"));
    assert_eq!(decision, SubmitDecision::Blocked(Field::Email));
    assert_eq!(state.error(), Some(ValidationError::InvalidEmail));
    assert_eq!(state.tone(Field::Email), FieldTone::Invalid);
    assert!(state.is_shaking(Field::Email));
    assert_eq!(state.phase(), SubmitPhase::Idle);

    state.end_shake();
    assert!(!state.is_shaking(Field::Email));
    assert_eq!(state.tone(Field::Email), FieldTone::Invalid);
}

#[test]
fn input_clears_previous_error() {
    let mut state = ContactFormState::default();
    state.submit(&submission("A", "a@b.co", "1234567890"));
    assert!(state.error().is_some());

    state.on_input(Field::Name, "Ali");
    assert_eq!(state.error(), None);
    assert_eq!(state.tone(Field::Name), FieldTone::Valid);
}

#[test]
fn input_clears_other_field_highlights() {
    let mut state = ContactFormState::default();
    state.on_blur(Field::Message, "short");
    assert_eq!(state.tone(Field::Message), FieldTone::Invalid);

    state.on_input(Field::Name, "Alice");
    assert_eq!(state.tone(Field::Message), FieldTone::Neutral);
}

#[test]
fn valid_submit_enters_sending_phase() {
    let mut state = ContactFormState::default();
    assert_eq!(state.submit_label(), "Send message");
    let decision = state.submit(&submission("Alice", "alice@example.com", "Hello there, let's talk."));
    assert_eq!(decision, SubmitDecision::Proceed);
    assert_eq!(state.phase(), SubmitPhase::Sending);
    assert_eq!(state.submit_label(), "Sending...");
    assert_eq!(state.error(), None);
}

#[test]
fn repeat_submit_while_sending_is_in_flight() {
    let mut state = ContactFormState::default();
    let valid = submission("Alice", "alice@example.com", "Hello there, let's talk.");
    assert_eq!(state.submit(&valid), SubmitDecision::Proceed);

    let before = state.clone();
    assert_eq!(state.submit(&valid), SubmitDecision::InFlight);
    assert_eq!(state.submit(&submission("", "bad", "")), SubmitDecision::InFlight);
    assert_eq!(state, before);
    assert_eq!(state.phase(), SubmitPhase::Sending);
}

#[test]
fn tone_classes_are_distinct() {
    assert_eq!(FieldTone::Neutral.class(), "");
    assert_ne!(FieldTone::Pending.class(), FieldTone::Valid.class());
    assert_ne!(FieldTone::Valid.class(), FieldTone::Invalid.class());
}
