//! Case styles and the word joiners behind them.
//!
//! Letter casing is ASCII-only: `A-Z`/`a-z` are mapped, every other character
//! is copied through unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CaseError;

/// Output case style.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CaseStyle {
    /// `johnMunene`
    Camel,
    /// `john.munene`
    Dot,
    /// `john-munene`
    Kebab,
}

/// Describes a style for hosts that render a style picker.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CaseStyleInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub example: &'static str,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Dot, CaseStyle::Kebab];

    /// Stable identifier, matching the serde name.
    pub fn id(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Dot => "dot",
            CaseStyle::Kebab => "kebab",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camelCase",
            CaseStyle::Dot => "dot.case",
            CaseStyle::Kebab => "kebab-case",
        }
    }

    /// Character placed between words, `None` for camelCase.
    pub fn separator(self) -> Option<char> {
        match self {
            CaseStyle::Camel => None,
            CaseStyle::Dot => Some('.'),
            CaseStyle::Kebab => Some('-'),
        }
    }

    pub fn info(self) -> CaseStyleInfo {
        let example = match self {
            CaseStyle::Camel => "johnMunene",
            CaseStyle::Dot => "john.munene",
            CaseStyle::Kebab => "john-munene",
        };
        CaseStyleInfo {
            id: self.id(),
            label: self.label(),
            example,
        }
    }

    /// Joins already-split words in this style.
    pub(crate) fn join_words(self, words: &[&str]) -> String {
        match self.separator() {
            None => join_camel(words),
            Some(separator) => join_lower(words, separator),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseStyle {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "dot" | "dot.case" | "dotcase" => Ok(CaseStyle::Dot),
            "kebab" | "kebab-case" | "kebabcase" => Ok(CaseStyle::Kebab),
            _ => Err(CaseError::UnknownStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for CaseStyle {
    type Error = CaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn join_camel(words: &[&str]) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.len()).sum());
    let mut iter = words.iter();
    if let Some(first) = iter.next() {
        out.push_str(&first.to_ascii_lowercase());
    }
    for word in iter {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }
    out
}

fn join_lower(words: &[&str], separator: char) -> String {
    let mut out = String::new();
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            out.push(separator);
        }
        out.push_str(&word.to_ascii_lowercase());
    }
    out
}
