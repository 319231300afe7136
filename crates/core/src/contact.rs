//! Contact inquiry validation and status handling.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of the sender name.
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length of the subject line.
pub const MAX_SUBJECT_LENGTH: usize = 200;

/// Maximum length of the message body.
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

pub const STATUS_NEW: &str = "new";
pub const STATUS_READ: &str = "read";
pub const STATUS_REPLIED: &str = "replied";
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid contact statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_READ, STATUS_REPLIED, STATUS_ARCHIVED];

/// Validate that `status` is one of the accepted contact statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid contact status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a contact status transition.
///
/// Inquiries only move forward: `new -> read -> replied -> archived`, with
/// forward skips allowed (e.g. `new -> archived`). `archived` is terminal.
pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
    validate_status(to)?;
    let rank = |s: &str| match s {
        STATUS_NEW => 0,
        STATUS_READ => 1,
        STATUS_REPLIED => 2,
        STATUS_ARCHIVED => 3,
        _ => i32::MAX,
    };
    if from == STATUS_ARCHIVED {
        return Err(CoreError::Validation(
            "Archived inquiries cannot change status".to_string(),
        ));
    }
    if rank(to) <= rank(from) {
        return Err(CoreError::Validation(format!(
            "Invalid contact transition: {from} -> {to}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate an email address.
///
/// A deliberately loose structural check (exactly one `@`, non-empty local
/// part, dotted domain) -- real deliverability is the mail server's
/// problem, not ours.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid email address '{email}'"));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() || email.contains(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}

/// Validate an optional phone number: digits, spaces, and `+()-.` only.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '(' | ')' | '-' | '.'));
    if digits < 7 || !well_formed {
        return Err(CoreError::Validation(format!(
            "Invalid phone number '{phone}'"
        )));
    }
    Ok(())
}

/// Validate the sender name: non-empty and within the length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Name cannot be empty".to_string()));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the message body: non-empty and within the length limit.
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::Validation(
            "Message cannot be empty".to_string(),
        ));
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the optional subject line length.
pub fn validate_subject(subject: &str) -> Result<(), CoreError> {
    if subject.len() > MAX_SUBJECT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Subject exceeds maximum length of {MAX_SUBJECT_LENGTH} characters"
        )));
    }
    Ok(())
}
