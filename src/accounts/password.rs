//! Stored credential encodings.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use std::fmt;
use std::str::FromStr;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// How newly written passwords are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    /// Salted argon2id, stored as a PHC string.
    #[default]
    Argon2,
    /// Verbatim, as older clients wrote them.
    Plain,
}

impl PasswordScheme {
    /// Encode `password` for storage.
    ///
    /// # Errors
    /// Returns the hasher's message if argon2 rejects the input.
    pub fn encode(self, password: &str) -> Result<String, String> {
        match self {
            Self::Plain => Ok(password.to_string()),
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| e.to_string())
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Argon2 => "argon2",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "argon2" => Ok(Self::Argon2),
            "plain" => Ok(Self::Plain),
            other => Err(format!("unknown password storage scheme: {other}")),
        }
    }
}

/// Parse `stored` as an argon2 PHC string; other PHC algorithms and
/// `$`-prefixed plain passwords are not hashes here.
fn parse_argon2(stored: &str) -> Option<PasswordHash<'_>> {
    PasswordHash::new(stored)
        .ok()
        .filter(|parsed| ARGON2_IDENTS.contains(&parsed.algorithm.as_str()))
}

const ARGON2_IDENTS: [&str; 3] = ["argon2id", "argon2i", "argon2d"];

/// True if `stored` is an argon2 hash rather than a verbatim password.
#[must_use]
pub fn is_hashed(stored: &str) -> bool {
    parse_argon2(stored).is_some()
}

/// Check `candidate` against a stored credential in either encoding.
#[must_use]
pub fn verify(stored: &str, candidate: &str) -> bool {
    match parse_argon2(stored) {
        Some(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        None => stored == candidate,
    }
}

/// Password length in characters, not bytes.
#[must_use]
pub fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
