//! Password strength rules
//!
//! Each section checks one independent rule. The score is the number of
//! sections that pass.

mod digit;
mod length;
mod symbol;
mod uppercase;

pub use digit::digit_section;
pub use length::{MIN_LENGTH, length_section};
pub use symbol::{SYMBOLS, symbol_section};
pub use uppercase::uppercase_section;

/// Result type for section functions.
/// - `Some(reason)` - rule not satisfied
/// - `None` - rule satisfied
pub type SectionResult = Option<String>;

/// A named rule, in evaluation order.
pub type Section = (&'static str, fn(&str) -> SectionResult);

/// All rules in the order their reasons are reported.
pub const SECTIONS: [Section; 4] = [
    ("length", length_section),
    ("symbol", symbol_section),
    ("digit", digit_section),
    ("uppercase", uppercase_section),
];
