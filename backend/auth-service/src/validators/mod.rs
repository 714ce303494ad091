/// Input validation for registration and profile updates.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::UpdateProfileRequest;
use crate::{AppError, Result};

// Two-part local@domain shape with a dot in the domain. Rejects whitespace
// and a second "@" anywhere in the address.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded email regex is invalid")
});

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A profile update with its fields trimmed and checked, ready to hand to
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Validate a partial profile update.
///
/// At least one field must be supplied. Supplied fields are trimmed before
/// length/format checks, so a whitespace-only value counts as empty and is
/// rejected even though the field was present. Usernames carry no
/// character-set restriction: the storage layer parameterizes everything,
/// so arbitrary text (quotes, angle brackets, SQL keywords) is stored
/// verbatim rather than filtered here.
pub fn validate_profile_update(request: &UpdateProfileRequest) -> Result<ValidatedProfileUpdate> {
    if request.username.is_none() && request.email.is_none() {
        return Err(AppError::InvalidInput("Invalid input data".to_string()));
    }

    let username = match request.username.as_deref().map(str::trim) {
        Some(trimmed) if trimmed.chars().count() >= 3 => Some(trimmed.to_string()),
        Some(_) => return Err(AppError::InvalidInput("Invalid input data".to_string())),
        None => None,
    };

    let email = match request.email.as_deref().map(str::trim) {
        Some(trimmed) if validate_email(trimmed) => Some(trimmed.to_string()),
        Some(_) => return Err(AppError::InvalidInput("Invalid input data".to_string())),
        None => None,
    };

    Ok(ValidatedProfileUpdate { username, email })
}
