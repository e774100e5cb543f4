//! The binary input alphabet
//!
//! Every machine in this crate reads the same two-symbol alphabet:
//! - [`Symbol::Zero`] — the character `'0'`
//! - [`Symbol::One`] — the character `'1'`
//!
//! Raw user input is converted up front with [`parse_input`]; anything
//! outside the alphabet is reported as an [`InvalidSymbol`] before any
//! machine runs. The machines themselves only ever see `Symbol` values,
//! so they have no invalid-character paths of their own.

use std::fmt;

/// One symbol of the binary alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Zero,
    One,
}

impl Symbol {
    /// Convert a character into a symbol, if it is in the alphabet
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            _ => None,
        }
    }

    /// The character this symbol renders as
    pub fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A character outside the binary alphabet, with its position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSymbol {
    pub ch: char,
    pub position: usize,
}

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid symbol '{}' at position {} (expected '0' or '1')",
            self.ch, self.position
        )
    }
}

/// Check that every character of `input` is in the alphabet
pub fn validate(input: &str) -> bool {
    input.chars().all(|c| Symbol::from_char(c).is_some())
}

/// Convert a raw string into symbols, or report the first offending character
pub fn parse_input(input: &str) -> Result<Vec<Symbol>, InvalidSymbol> {
    input
        .chars()
        .enumerate()
        .map(|(position, ch)| Symbol::from_char(ch).ok_or(InvalidSymbol { ch, position }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_binary_strings() {
        assert_eq!(
            parse_input("0110"),
            Ok(vec![Symbol::Zero, Symbol::One, Symbol::One, Symbol::Zero])
        );
        assert_eq!(parse_input(""), Ok(vec![]));
    }

    #[test]
    fn reports_first_invalid_character() {
        let err = parse_input("01a1b").unwrap_err();
        assert_eq!(err, InvalidSymbol { ch: 'a', position: 2 });
    }

    #[test]
    fn validate_matches_parse() {
        assert!(validate("010101"));
        assert!(validate(""));
        assert!(!validate("012"));
        assert!(!validate(" 01"));
    }
}
