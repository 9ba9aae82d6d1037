//! Uppercase section - checks for an uppercase letter.

use super::SectionResult;

/// Checks if the password contains at least one uppercase letter.
pub fn uppercase_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_uppercase()) {
        return Some("Missing: uppercase".to_string());
    }
    None
}
