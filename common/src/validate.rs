//! Client-side form validation. Anything failing here blocks submission
//! with an inline message; no request is issued for invalid input.

use thiserror::Error;

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Name must be at least {NAME_MIN} characters")]
    NameTooShort,
    #[error("Name must be at most {NAME_MAX} characters")]
    NameTooLong,
}

/// RFC-shaped email check: exactly one `@`, a non-empty local part and a
/// dotted domain with non-empty labels, no whitespace anywhere.
pub fn email(raw: &str) -> Result<(), ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    let mut parts = raw.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(ValidationError::InvalidEmail),
    };
    if local.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidEmail);
    }
    if domain.split('.').any(str::is_empty) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Display-name check: 3..=20 characters after trimming.
pub fn name(raw: &str) -> Result<(), ValidationError> {
    let len = raw.trim().chars().count();
    if len < NAME_MIN {
        Err(ValidationError::NameTooShort)
    } else if len > NAME_MAX {
        Err(ValidationError::NameTooLong)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        for ok in ["ada@example.com", "a.b+c@mail.example.co", " padded@example.com "] {
            assert_eq!(email(ok), Ok(()), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "a@b",
            "a@@b.com",
            "two@at@signs.com",
            "spaces in@example.com",
            "a@.com",
            "a@domain.",
        ] {
            assert_eq!(email(bad), Err(ValidationError::InvalidEmail), "{bad:?}");
        }
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(name("ab"), Err(ValidationError::NameTooShort));
        assert_eq!(name("  ab  "), Err(ValidationError::NameTooShort));
        assert_eq!(name("abc"), Ok(()));
        assert_eq!(name(&"x".repeat(20)), Ok(()));
        assert_eq!(name(&"x".repeat(21)), Err(ValidationError::NameTooLong));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Name must be at least 3 characters"
        );
    }
}
