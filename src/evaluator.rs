//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::SECTIONS;
use crate::types::{Score, StrengthResult};

/// Evaluates password strength against the four rules.
///
/// Total over every input, including the empty string.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthResult` with the score, its tier, and one reason per unmet rule.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();
    let mut reasons = Vec::new();
    let mut passed: u8 = 0;

    // Orchestrator: execute sections in sequence
    for (section_name, section_fn) in SECTIONS {
        match section_fn(pwd) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(section = section_name, "rule not satisfied");
                reasons.push(reason);
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = section_name, "rule satisfied");
                passed = passed.saturating_add(1);
            }
        }
    }

    let score = Score::new(passed).unwrap_or(Score::MIN);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), "evaluation finished");

    StrengthResult::new(score, reasons)
}

/// Convenience wrapper for callers holding a plain `&str`.
pub fn evaluate(password: &str) -> StrengthResult {
    evaluate_password_strength(&SecretString::from(password.to_owned()))
}
