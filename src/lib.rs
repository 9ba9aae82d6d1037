//! Password strength scoring library
//!
//! Scores a password against four independent rules (length of at least 8,
//! a symbol from `!@#$%^&*()`, a digit, an uppercase letter) and maps the
//! score to a display tier. Also generates random passwords.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-rules` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GENERATE_LENGTH`: Default length for generated passwords
//!   (default: 12)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{evaluate_password_strength, Tier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 4);
//! assert_eq!(evaluation.tier, Tier::Dragon);
//! ```

// Internal modules
mod evaluator;
mod generator;
mod sections;
mod types;

pub mod tips;

// Public API
pub use evaluator::{evaluate, evaluate_password_strength};
pub use generator::{
    ALPHABET, DEFAULT_LENGTH, GeneratorError, LENGTH_ENV_VAR, default_length, generate_password,
    generate_password_with,
};
pub use sections::{MIN_LENGTH, SYMBOLS};
pub use types::{RULE_COUNT, Score, StrengthResult, Tier};
