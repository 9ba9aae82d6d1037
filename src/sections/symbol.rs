//! Symbol section - checks for a character from the fixed punctuation set.

use super::SectionResult;

pub const SYMBOLS: &str = "!@#$%^&*()";

/// Checks if the password contains at least one of [`SYMBOLS`].
///
/// Other punctuation (`-`, `_`, `?`, ...) does not count.
pub fn symbol_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| SYMBOLS.contains(c)) {
        return Some(format!("Missing a symbol from {}", SYMBOLS));
    }
    None
}
