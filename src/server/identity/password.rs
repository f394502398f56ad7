use std::borrow::Cow;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::IdentityError;

/// A password requirement that was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    TooShort { min: usize },
    RequiresDigit,
    RequiresLower,
    RequiresUpper,
    RequiresNonAlphanumeric,
}

impl PasswordRule {
    pub fn description(&self) -> Cow<'static, str> {
        let text = match self {
            Self::TooShort { min } => {
                return Cow::Owned(format!("Passwords must be at least {} characters.", min))
            }
            Self::RequiresDigit => "Passwords must have at least one digit ('0'-'9').",
            Self::RequiresLower => "Passwords must have at least one lowercase ('a'-'z').",
            Self::RequiresUpper => "Passwords must have at least one uppercase ('A'-'Z').",
            Self::RequiresNonAlphanumeric => {
                "Passwords must have at least one non alphanumeric character."
            }
        };
        Cow::Borrowed(text)
    }
}

/// Password strength rules checked before a password is hashed.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_non_alphanumeric: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_non_alphanumeric: true,
        }
    }
}

impl PasswordPolicy {
    /// Returns every rule the password breaks, in declaration order.
    pub fn check(&self, password: &str) -> Result<(), Vec<PasswordRule>> {
        let mut broken = Vec::new();

        if password.chars().count() < self.min_length {
            broken.push(PasswordRule::TooShort {
                min: self.min_length,
            });
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            broken.push(PasswordRule::RequiresDigit);
        }
        if self.require_lowercase && !password.chars().any(|c| c.is_lowercase()) {
            broken.push(PasswordRule::RequiresLower);
        }
        if self.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            broken.push(PasswordRule::RequiresUpper);
        }
        if self.require_non_alphanumeric && password.chars().all(|c| c.is_alphanumeric()) {
            broken.push(PasswordRule::RequiresNonAlphanumeric);
        }

        if broken.is_empty() {
            Ok(())
        } else {
            Err(broken)
        }
    }
}

/// Hashes a password with Argon2id and a random salt, returning a PHC string.
pub fn hash_password(password: &str) -> Result<String, IdentityError> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(|e| IdentityError::Hash(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| IdentityError::Hash(e.to_string()))
}

/// Checks a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(IdentityError::Hash)` - Stored hash could not be parsed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, IdentityError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| IdentityError::Hash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
