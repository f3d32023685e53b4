// Input validation and word splitting shared by every case style.

use super::error::CaseError;

const QUOTES: [char; 2] = ['\'', '"'];

/// Rejects an empty input sequence.
pub(crate) fn require_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<(), CaseError> {
    if inputs.is_empty() {
        return Err(CaseError::NoInputs);
    }
    Ok(())
}

/// Whitespace as JavaScript's `\s` sees it: Unicode `White_Space` plus the
/// byte order mark, minus NEXT LINE (U+0085).
fn is_word_break(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn words_of(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_break).filter(|word| !word.is_empty())
}

/// Splits text into words on runs of whitespace, ignoring leading and trailing runs.
pub fn split_words(text: &str) -> Vec<&str> {
    words_of(text).collect()
}

/// Words of all inputs as if they had been joined with single spaces first.
///
/// Inputs never share a word: a boundary between two inputs always splits.
pub(crate) fn input_words<S: AsRef<str>>(inputs: &[S]) -> Vec<&str> {
    inputs
        .iter()
        .flat_map(|input| words_of(input.as_ref()))
        .collect()
}

/// Fails when the raw input opens with a quote character but does not close with it.
pub(crate) fn check_quotes(input: &str) -> Result<(), CaseError> {
    for quote in QUOTES {
        if input.starts_with(quote) && !input.ends_with(quote) {
            return Err(CaseError::UnmatchedQuotes { quote });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_words_collapses_whitespace_runs() {
        assert_eq!(split_words("  John \t  Munene\n"), vec!["John", "Munene"]);
        assert!(split_words("").is_empty());
        assert!(split_words(" \t\r\n ").is_empty());
    }

    #[test]
    fn byte_order_mark_breaks_words() {
        assert_eq!(split_words("\u{feff}john\u{feff}munene"), vec!["john", "munene"]);
        assert!(is_word_break('\u{feff}'));
    }

    #[test]
    fn next_line_stays_inside_a_word() {
        assert_eq!(split_words("john\u{85}munene"), vec!["john\u{85}munene"]);
        assert!(!is_word_break('\u{85}'));
        assert!(is_word_break('\u{a0}'));
        assert!(is_word_break('\u{3000}'));
    }

    #[test]
    fn input_words_match_joined_split() {
        let inputs = ["  john", "", "MUNENE  wa", " "];
        let joined = inputs.join(" ");
        assert_eq!(input_words(&inputs), split_words(&joined));
    }

    #[test]
    fn input_words_never_glue_neighbours() {
        assert_eq!(input_words(&["ab", "cd"]), vec!["ab", "cd"]);
    }

    #[test]
    fn require_inputs_rejects_empty_slice() {
        let none: [&str; 0] = [];
        assert_eq!(require_inputs(&none), Err(CaseError::NoInputs));
        assert!(require_inputs(&[""]).is_ok());
    }

    #[test]
    fn check_quotes_flags_unclosed_openers() {
        assert_eq!(
            check_quotes("'john munene"),
            Err(CaseError::UnmatchedQuotes { quote: '\'' })
        );
        assert_eq!(
            check_quotes("\"john munene'"),
            Err(CaseError::UnmatchedQuotes { quote: '"' })
        );
    }

    #[test]
    fn check_quotes_accepts_balanced_or_unquoted_input() {
        assert!(check_quotes("'john munene'").is_ok());
        assert!(check_quotes("\"john\"").is_ok());
        assert!(check_quotes("john munene'").is_ok());
        assert!(check_quotes("'").is_ok());
        assert!(check_quotes("").is_ok());
    }

    #[test]
    fn check_quotes_runs_before_trimming() {
        // Leading whitespace hides the quote, trailing whitespace breaks the match.
        assert!(check_quotes("  'john").is_ok());
        assert!(check_quotes("'john' ").is_err());
    }
}
