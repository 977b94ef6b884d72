use crate::core::flow::FlowError;
use crate::models::ProfileInput;
use validator::Validate;

/// Message shown whenever a required auth field is left empty
const EMPTY_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Minimum password length enforced at registration
const MIN_PASSWORD_LEN: usize = 6;

/// Profile fields in the order violations are reported
const PROFILE_FIELD_ORDER: [&str; 2] = ["age", "gpa"];

/// Check the login form before any network call
#[inline]
pub fn login_input(email: &str, password: &str) -> Result<(), FlowError> {
    if email.is_empty() || password.is_empty() {
        return Err(FlowError::Validation {
            field: "credentials",
            message: EMPTY_FIELDS_MESSAGE.to_string(),
        });
    }

    Ok(())
}

/// Check the registration form before any network call
///
/// The empty-field message wins when both rules are broken; the password
/// length rule only fires once every field is present.
#[inline]
pub fn register_input(name: &str, email: &str, password: &str) -> Result<(), FlowError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(FlowError::Validation {
            field: "credentials",
            message: EMPTY_FIELDS_MESSAGE.to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FlowError::Validation {
            field: "password",
            message: "Password must be at least 6 characters long".to_string(),
        });
    }

    Ok(())
}

/// Run the derived range rules and report the first violation in field
/// order, so the user fixes one thing at a time
pub fn profile_input(profile: &ProfileInput) -> Result<(), FlowError> {
    let errors = match profile.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();
    for field in PROFILE_FIELD_ORDER {
        if let Some(violation) = field_errors.get(field).and_then(|list| list.first()) {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            return Err(FlowError::Validation { field, message });
        }
    }

    // Only age and gpa carry rules today
    Err(FlowError::Validation {
        field: "profile",
        message: "Invalid profile input".to_string(),
    })
}

/// Rough shape check used to warn about a suspicious email address
///
/// Advisory only: submission is gated on presence, not shape, so a typo
/// here still goes to the server for the real verdict.
pub fn looks_like_email(email: &str) -> bool {
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    let clean = |part: &str| {
        !part.is_empty() && !part.contains(char::is_whitespace) && !part.contains('@')
    };

    clean(local) && domain.split('.').count() >= 2 && domain.split('.').all(clean)
}
