use crate::error::{AppError, Result};

/// The message returned for any unusable login payload.
pub const CREDENTIALS_REQUIRED: &str = "Email and password required";

/// Validates the fields of a login request.
///
/// # Arguments
///
/// * `email` - The submitted email address.
/// * `password` - The submitted password.
///
/// # Returns
///
/// A `Result<()>` indicating whether both fields are present.
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(CREDENTIALS_REQUIRED.to_string()));
    }

    Ok(())
}

/// Validates the query parameters of an invitation lookup by target.
pub fn validate_target(target_type: &str, target_value: &str) -> Result<()> {
    if target_type.is_empty() || target_value.is_empty() {
        return Err(AppError::Validation(
            "targetType and targetValue query parameters required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        assert!(validate_credentials("", "x").is_err());
        assert!(validate_credentials("  ", "x").is_err());
        assert!(validate_credentials("a@b.c", "").is_err());
        assert!(validate_credentials("a@b.c", "x").is_ok());
    }

    #[test]
    fn target_requires_both_parts() {
        assert!(validate_target("email", "").is_err());
        assert!(validate_target("", "a@b.c").is_err());
        assert!(validate_target("email", "a@b.c").is_ok());
    }
}
