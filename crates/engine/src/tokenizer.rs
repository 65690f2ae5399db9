use crate::options::TokenizeMode;

/// The requested TSV field does not exist on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    pub field: usize,
    pub found: usize,
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Lines that are empty or separator-only carry no tokens.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_separator)
}

/// Split a non-blank line into tokens.
///
/// # Errors
///
/// In [`TokenizeMode::Field`] mode, returns [`MissingField`] when the line has
/// fewer tab-separated fields than the requested index.
pub fn tokenize(line: &str, mode: TokenizeMode) -> Result<Vec<&str>, MissingField> {
    match mode {
        TokenizeMode::Whitespace => Ok(line
            .split(is_separator)
            .filter(|t| !t.is_empty())
            .collect()),
        TokenizeMode::Field(n) => {
            let n = n.get();
            line.split('\t')
                .nth(n - 1)
                .map(|field| vec![field])
                .ok_or_else(|| MissingField {
                    field: n,
                    found: line.split('\t').count(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(n: usize) -> TokenizeMode {
        TokenizeMode::field(n).unwrap()
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank(" \t \u{3000}"));
        assert!(!is_blank("  a "));
    }

    #[test]
    fn information_separators_split_tokens() {
        assert!(is_blank("\x1c\x1d \x1e\x1f"));
        assert_eq!(
            tokenize("a\x1fb\x1c c", TokenizeMode::Whitespace),
            Ok(vec!["a", "b", "c"])
        );
        assert!(!is_separator('\x1b'));
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(
            tokenize("  the cat\t\tsat  ", TokenizeMode::Whitespace),
            Ok(vec!["the", "cat", "sat"])
        );
    }

    #[test]
    fn field_selects_single_token() {
        assert_eq!(tokenize("1\tDogs run\tNOUN", field(2)), Ok(vec!["Dogs run"]));
        assert_eq!(tokenize("a\t\tc", field(2)), Ok(vec![""]));
        assert_eq!(tokenize("only", field(1)), Ok(vec!["only"]));
    }

    #[test]
    fn field_out_of_range() {
        assert_eq!(
            tokenize("only", field(2)),
            Err(MissingField { field: 2, found: 1 })
        );
        assert_eq!(
            tokenize("a\tb", field(5)),
            Err(MissingField { field: 5, found: 2 })
        );
    }
}
