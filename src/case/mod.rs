//! Case conversion: inputs are joined with spaces, split into words on
//! whitespace, then re-joined in the requested style.

use std::collections::BTreeMap;

use serde::Deserialize;

pub mod error;
pub mod style;
mod words;

pub use error::CaseError;
pub use style::{CaseStyle, CaseStyleInfo};
pub use words::split_words;

use words::{check_quotes, input_words, require_inputs};

/// Per-call conversion options.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseOptions {
    /// Target style (default: kebab-case).
    pub style: CaseStyle,
    /// Reject a single input that opens with a quote it never closes.
    /// Ignored when more than one input is given.
    pub reject_unmatched_quotes: bool,
}

impl Default for CaseOptions {
    fn default() -> Self {
        Self {
            style: CaseStyle::Kebab,
            reject_unmatched_quotes: false,
        }
    }
}

impl CaseOptions {
    pub fn new(style: CaseStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }
}

/// Converts `inputs` to `style`.
pub fn convert<S: AsRef<str>>(style: CaseStyle, inputs: &[S]) -> Result<String, CaseError> {
    require_inputs(inputs)?;
    Ok(style.join_words(&input_words(inputs)))
}

/// Converts `inputs` using the full option set.
pub fn convert_with<S: AsRef<str>>(
    inputs: &[S],
    options: &CaseOptions,
) -> Result<String, CaseError> {
    if options.reject_unmatched_quotes {
        if let [single] = inputs {
            check_quotes(single.as_ref())?;
        }
    }
    convert(options.style, inputs)
}

/// Converts `inputs` to every style at once, keyed by style id.
pub fn convert_all<S: AsRef<str>>(
    inputs: &[S],
) -> Result<BTreeMap<&'static str, String>, CaseError> {
    require_inputs(inputs)?;
    let words = input_words(inputs);
    Ok(CaseStyle::ALL
        .iter()
        .map(|style| (style.id(), style.join_words(&words)))
        .collect())
}

/// camelCase: `["John", "Munene"]` becomes `johnMunene`.
pub fn camel<S: AsRef<str>>(inputs: &[S]) -> Result<String, CaseError> {
    convert(CaseStyle::Camel, inputs)
}

/// dot.case: `["John", "Munene"]` becomes `john.munene`.
pub fn dot_case<S: AsRef<str>>(inputs: &[S]) -> Result<String, CaseError> {
    convert(CaseStyle::Dot, inputs)
}

/// kebab-case: `["John", "Munene"]` becomes `john-munene`.
pub fn to_kebab_case<S: AsRef<str>>(inputs: &[S]) -> Result<String, CaseError> {
    convert(CaseStyle::Kebab, inputs)
}

/// Single-input kebab-case that first rejects unmatched leading quotes.
pub fn to_kebab_case_checked(input: &str) -> Result<String, CaseError> {
    let options = CaseOptions {
        style: CaseStyle::Kebab,
        reject_unmatched_quotes: true,
    };
    convert_with(&[input], &options)
}
