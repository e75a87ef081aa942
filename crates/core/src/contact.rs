//! Contact form constants and validation.

use crate::error::CoreError;

/// Maximum length of a contact message subject.
pub const MAX_SUBJECT_LENGTH: usize = 200;

/// Maximum length of a contact message body.
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Validate a contact form submission: subject, sender address, and body.
pub fn validate_contact(subject: &str, email: &str, message: &str) -> Result<(), CoreError> {
    if subject.trim().is_empty() {
        return Err(CoreError::Validation("Subject is required".to_string()));
    }
    if subject.len() > MAX_SUBJECT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Subject exceeds maximum length of {MAX_SUBJECT_LENGTH} characters"
        )));
    }
    validate_email(email)?;
    if message.trim().is_empty() {
        return Err(CoreError::Validation("Message is required".to_string()));
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Minimal structural check for an email address: exactly one `@` with a
/// non-empty local part and a domain containing a dot.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => {
            return Err(CoreError::Validation(format!(
                "Invalid email address '{email}'"
            )))
        }
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.starts_with('.') {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }

    Ok(())
}
