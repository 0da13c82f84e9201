//! Print the character count of a single command-line argument.
//!
//! Counts are in code units of the argument's native encoding (UTF-8 bytes
//! for valid text), not grapheme clusters.

pub mod cli;
pub mod counter;
pub mod formatters;
pub mod types;

pub use counter::{count, measure};
pub use types::CharCount;
