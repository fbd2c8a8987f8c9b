//! Error types for palette validation.

use thiserror::Error;

/// Error type for palette construction from runtime-sourced colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The panel controller addresses exactly 7 slots; anything else is a
    /// configuration error, not a recoverable condition.
    #[error("palette must have exactly {expected} entries, got {actual}")]
    WrongLength {
        /// Required entry count.
        expected: usize,
        /// Entry count that was provided.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_length_message() {
        let error = PaletteError::WrongLength {
            expected: 7,
            actual: 5,
        };
        assert_eq!(
            error.to_string(),
            "palette must have exactly 7 entries, got 5"
        );
    }
}
