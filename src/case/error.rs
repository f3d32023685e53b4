//! Typed errors for the case converter.

use thiserror::Error;

/// Failures raised while validating converter input.
///
/// Variants fall into two categories, reported by [`CaseError::category`]:
/// - type validation (missing inputs, non-text values, bad style or options)
/// - unmatched quotes (legacy single-input kebab check)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The input sequence was empty.
    #[error("All inputs must be strings: no inputs provided")]
    NoInputs,

    /// A value at the untyped boundary was not text.
    #[error("All inputs must be strings: input {index} is {found}")]
    NotText {
        /// Position of the offending value.
        index: usize,
        /// JS type name of the value that was found.
        found: &'static str,
    },

    /// The single-input converter received something other than text.
    #[error("Input must be a string")]
    InputNotText {
        /// JS type name of the value that was found.
        found: &'static str,
    },

    /// The requested case style is not one of camel, kebab or dot.
    #[error("unsupported case style: {0}")]
    UnknownStyle(String),

    /// Conversion options from the untyped boundary could not be read.
    #[error("invalid case options: {0}")]
    InvalidOptions(String),

    /// A single input opened with a quote it never closed.
    #[error("Input string has unmatched quotes")]
    UnmatchedQuotes {
        /// The opening quote character.
        quote: char,
    },
}

impl CaseError {
    /// Error name surfaced to JavaScript callers.
    pub fn category(&self) -> &'static str {
        match self {
            CaseError::UnmatchedQuotes { .. } => "UnmatchedQuoteError",
            _ => "TypeValidationError",
        }
    }

    pub fn is_type_validation(&self) -> bool {
        self.category() == "TypeValidationError"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_split_quotes_from_type_errors() {
        assert_eq!(CaseError::NoInputs.category(), "TypeValidationError");
        assert_eq!(
            CaseError::NotText {
                index: 0,
                found: "number"
            }
            .category(),
            "TypeValidationError"
        );
        assert!(CaseError::UnknownStyle("snake".into()).is_type_validation());
        assert!(CaseError::InputNotText { found: "number" }.is_type_validation());
        let quotes = CaseError::UnmatchedQuotes { quote: '"' };
        assert_eq!(quotes.category(), "UnmatchedQuoteError");
        assert!(!quotes.is_type_validation());
    }

    #[test]
    fn messages_keep_the_public_wording() {
        assert!(
            CaseError::NoInputs
                .to_string()
                .starts_with("All inputs must be strings")
        );
        let err = CaseError::NotText {
            index: 1,
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "All inputs must be strings: input 1 is number"
        );
        assert_eq!(
            CaseError::InputNotText { found: "undefined" }.to_string(),
            "Input must be a string"
        );
        assert_eq!(
            CaseError::UnmatchedQuotes { quote: '\'' }.to_string(),
            "Input string has unmatched quotes"
        );
    }
}
