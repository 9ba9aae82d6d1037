//! Digit section - checks for a digit in any script.

use super::SectionResult;

/// Checks if the password contains at least one numeric character.
///
/// Non-ASCII digits (`٣`, `²`, `５`) count as well as `0-9`.
pub fn digit_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_numeric()) {
        return Some("Missing: numbers".to_string());
    }
    None
}
