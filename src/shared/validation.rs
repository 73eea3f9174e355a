//! Credential Validation
//!
//! Pure validation rules for emails and passwords, shared between the
//! desktop client (field-level feedback) and the backend (registration
//! checks). None of these functions touch the network or the datastore.
//!
//! # Validation Rules
//!
//! - Email: non-empty, permissive `local@domain.tld` shape
//! - Password: non-empty, at least [`MIN_PASSWORD_LEN`] characters
//! - Confirm password: non-empty, equal to the password
//!
//! Password *strength* ([`password_strength`]) is advisory UI feedback
//! only; the single hard gate at registration is the length minimum.

use thiserror::Error;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Special characters counted by the strength requirements
const SPECIAL_CHARS: &str = "!@#$%^&*()_+={}[]|:;\"'<>?,./";

/// Email validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Email field was left blank
    #[error("Email is required")]
    Empty,

    /// Email does not look like `local@domain.tld`
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// Password validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Password field was left blank
    #[error("Password is required")]
    Empty,

    /// Password is shorter than [`MIN_PASSWORD_LEN`]
    #[error("Password must be at least 8 characters")]
    TooShort,
}

/// Confirm-password validation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfirmPasswordError {
    /// Confirmation field was left blank
    #[error("Confirm password is required")]
    Missing,

    /// Confirmation does not equal the password
    #[error("Passwords do not match")]
    Mismatch,
}

/// Validate an email address
///
/// The format check is deliberately permissive: a non-empty local part,
/// a domain containing a dot, and no whitespace or extra `@` anywhere.
/// Full RFC 5322 compliance is not attempted.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !has_email_shape(email) {
        return Err(EmailError::InvalidFormat);
    }
    Ok(())
}

/// Validate a password against the hard requirements (non-empty, length)
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// Validate that the confirmation field matches the password
pub fn validate_confirm_password(
    password: &str,
    confirm_password: &str,
) -> Result<(), ConfirmPasswordError> {
    if confirm_password.is_empty() {
        return Err(ConfirmPasswordError::Missing);
    }
    if password != confirm_password {
        return Err(ConfirmPasswordError::Mismatch);
    }
    Ok(())
}

/// Independent boolean requirements that make up the strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequirements {
    /// At least [`MIN_PASSWORD_LEN`] characters
    pub length: bool,
    /// Contains a lowercase letter
    pub lowercase: bool,
    /// Contains an uppercase letter
    pub uppercase: bool,
    /// Contains a digit
    pub number: bool,
    /// Contains a special character
    pub special: bool,
}

impl PasswordRequirements {
    /// Number of satisfied requirements
    pub fn score(&self) -> u8 {
        [
            self.length,
            self.lowercase,
            self.uppercase,
            self.number,
            self.special,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }
}

/// Human-readable strength band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    fn from_score(score: u8) -> Self {
        // Thresholds are fixed: with five requirements the maximum score
        // is 5, so Good is the effective ceiling.
        if score < 2 {
            Self::Weak
        } else if score < 4 {
            Self::Fair
        } else if score < 6 {
            Self::Good
        } else {
            Self::Strong
        }
    }
}

/// Advisory password strength report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Count of satisfied requirements (0..=5)
    pub score: u8,
    /// Strength band for the score
    pub label: StrengthLabel,
    /// Which requirements were satisfied
    pub requirements: PasswordRequirements,
}

/// Score a password against the five strength requirements
pub fn password_strength(password: &str) -> PasswordStrength {
    let requirements = PasswordRequirements {
        length: password.len() >= MIN_PASSWORD_LEN,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        number: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    };
    let score = requirements.score();
    PasswordStrength {
        score,
        label: StrengthLabel::from_score(score),
        requirements,
    }
}

/// Permissive `local@domain.tld` shape check
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_empty() {
        assert_eq!(validate_email(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_validate_email_accepts_simple_addresses() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        for bad in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@@example.com",
            "user name@example.com",
            "user@example.",
        ] {
            assert_eq!(
                validate_email(bad),
                Err(EmailError::InvalidFormat),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_password_empty() {
        assert_eq!(validate_password(""), Err(PasswordError::Empty));
    }

    #[test]
    fn test_validate_password_too_short() {
        assert_eq!(validate_password("short7!"), Err(PasswordError::TooShort));
        assert!(validate_password("exactly8").is_ok());
    }

    #[test]
    fn test_validate_confirm_password() {
        assert_eq!(
            validate_confirm_password("password1", ""),
            Err(ConfirmPasswordError::Missing)
        );
        assert_eq!(
            validate_confirm_password("password1", "password2"),
            Err(ConfirmPasswordError::Mismatch)
        );
        assert!(validate_confirm_password("password1", "password1").is_ok());
    }

    #[test]
    fn test_strength_empty_password() {
        let strength = password_strength("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_strength_requirements_are_independent() {
        let strength = password_strength("abc");
        assert!(strength.requirements.lowercase);
        assert!(!strength.requirements.length);
        assert!(!strength.requirements.uppercase);
        assert!(!strength.requirements.number);
        assert!(!strength.requirements.special);
        assert_eq!(strength.score, 1);
    }

    #[test]
    fn test_strength_labels() {
        // 1 requirement met -> Weak
        assert_eq!(password_strength("abc").label, StrengthLabel::Weak);
        // lowercase + digit -> Fair
        assert_eq!(password_strength("abc123").label, StrengthLabel::Fair);
        // length + lowercase + uppercase + digit -> Good
        assert_eq!(password_strength("Abcdefg1").label, StrengthLabel::Good);
        // All five requirements still cap at Good: max score is 5 < 6
        let all = password_strength("Abcdefg1!");
        assert_eq!(all.score, 5);
        assert_eq!(all.label, StrengthLabel::Good);
    }

    #[test]
    fn test_strength_counts_special_characters() {
        let strength = password_strength("pass!word");
        assert!(strength.requirements.special);
    }

    #[test]
    fn test_error_messages_match_form_copy() {
        assert_eq!(EmailError::Empty.to_string(), "Email is required");
        assert_eq!(
            EmailError::InvalidFormat.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            PasswordError::TooShort.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            ConfirmPasswordError::Mismatch.to_string(),
            "Passwords do not match"
        );
    }
}
