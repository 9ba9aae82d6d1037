//! Random password generator
//!
//! Draws each character independently and uniformly from [`ALPHABET`].

use std::env::VarError;

use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

/// Letters, digits and the generator's symbol subset (no parentheses).
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Length used when neither the caller nor `PWD_GENERATE_LENGTH` picks one.
pub const DEFAULT_LENGTH: usize = 12;

pub const LENGTH_ENV_VAR: &str = "PWD_GENERATE_LENGTH";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least 1, got {0}")]
    InvalidLength(usize),
    #[error("PWD_GENERATE_LENGTH must be a positive integer, got {0:?}")]
    InvalidEnvLength(String),
}

/// Returns the default generator length.
///
/// Priority:
/// 1. Environment variable `PWD_GENERATE_LENGTH`
/// 2. [`DEFAULT_LENGTH`]
///
/// # Errors
///
/// Returns `InvalidEnvLength` if the variable is set but is not valid
/// Unicode or not an integer greater than zero.
pub fn default_length() -> Result<usize, GeneratorError> {
    match std::env::var(LENGTH_ENV_VAR) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(GeneratorError::InvalidEnvLength(raw)),
        },
        Err(VarError::NotUnicode(raw)) => Err(GeneratorError::InvalidEnvLength(
            raw.to_string_lossy().into_owned(),
        )),
        Err(VarError::NotPresent) => Ok(DEFAULT_LENGTH),
    }
}

/// Generates a random password of `length` characters using the thread-local
/// CSPRNG.
///
/// # Errors
///
/// Returns `InvalidLength` if `length` is zero.
pub fn generate_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate_password_with(&mut rand::thread_rng(), length)
}

/// Generates a random password from a caller-supplied RNG.
///
/// The `CryptoRng` bound keeps predictable generators out; seeded `StdRng`
/// still satisfies it, so only feed it a fixed seed in tests.
///
/// # Errors
///
/// Returns `InvalidLength` if `length` is zero.
pub fn generate_password_with<R>(
    rng: &mut R,
    length: usize,
) -> Result<SecretString, GeneratorError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if length == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password generation with length 0");
        return Err(GeneratorError::InvalidLength(length));
    }

    let password: String = (0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "Generated random password");

    Ok(SecretString::from(password))
}
