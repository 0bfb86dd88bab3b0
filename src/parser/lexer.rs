//! Lexer for free-form operand text
//!
//! Splits raw input on commas and whitespace into positioned [`Token`]s.
//! Repeated separators and surrounding whitespace produce no empty tokens, so
//! `" 5,, 3\t1 "` yields exactly three tokens.

use std::fmt;

/// A single separator-delimited word of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// 1-based ordinal among the tokens of the same input
    pub position: usize,
    /// 1-based character column where the token starts
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

fn is_separator(ch: char) -> bool {
    ch == ',' || ch.is_whitespace()
}

/// Tokenizer over one operand string
pub struct Lexer<'a> {
    input: &'a str,
    column_offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            column_offset: 0,
        }
    }

    /// Lexer whose reported columns are shifted by `offset` characters, for
    /// input that is a slice of a larger line
    pub fn with_offset(input: &'a str, offset: usize) -> Self {
        Lexer {
            input,
            column_offset: offset,
        }
    }

    /// Split the input into tokens. Never fails; validation happens on the
    /// token text.
    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start_column = 0;

        for (column, ch) in self.input.chars().enumerate() {
            if is_separator(ch) {
                if !current.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        position: tokens.len() + 1,
                        column: start_column,
                    });
                }
            } else {
                if current.is_empty() {
                    start_column = self.column_offset + column + 1;
                }
                current.push(ch);
            }
        }

        if !current.is_empty() {
            tokens.push(Token {
                text: current,
                position: tokens.len() + 1,
                column: start_column,
            });
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_repeated_separators() {
        assert_eq!(texts(" 5,, 3\t1 \n"), vec!["5", "3", "1"]);
        assert_eq!(texts("64,34,25"), vec!["64", "34", "25"]);
    }

    #[test]
    fn test_blank_input_has_no_tokens() {
        assert!(texts("").is_empty());
        assert!(texts(" , ,\n").is_empty());
    }

    #[test]
    fn test_positions_and_columns() {
        let tokens = Lexer::new("7, x9 ,42").tokenize();
        assert_eq!(tokens[1].text, "x9");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[1].column, 4);
        assert_eq!(tokens[2].column, 8);

        let shifted = Lexer::with_offset("a b", 3).tokenize();
        assert_eq!(shifted[1].column, 6);
    }
}
