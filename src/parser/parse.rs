//! Operand parser
//!
//! This module turns the raw primary/secondary text into typed [`Operands`]
//! according to the [`InputShape`] an algorithm declares. Nothing here is
//! shared or cached: each call builds fresh owned values, so a parse failure
//! leaves no partial state behind.
//!
//! # Defaults
//!
//! A blank or missing secondary operand resolves to the default carried by
//! the shape itself (for example `ArrayWithTarget { default_target: 0 }`),
//! never to an implicit per-algorithm value.

use super::graph::{parse_graph, Graph};
use super::lexer::{Lexer, Token};
use crate::config::{GeneratorConfig, FIBONACCI_MAX_N};
use thiserror::Error;

/// User-correctable input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid number '{token}' at position {position} (column {column})")]
    InvalidNumber {
        token: String,
        position: usize,
        column: usize,
    },

    #[error("malformed entry '{entry}' at position {position}: expected {expected}")]
    MalformedEntry {
        entry: String,
        position: usize,
        expected: &'static str,
    },

    #[error("value '{token}' at position {position} is out of range ({min}..={max})")]
    OutOfRange {
        token: String,
        position: usize,
        min: i64,
        max: i64,
    },

    #[error("too many values: {count} given, at most {limit} allowed")]
    TooManyValues { count: usize, limit: usize },

    #[error("expected {expected} operands, found {found}")]
    WrongOperandCount { expected: usize, found: usize },

    #[error("node '{node}' is declared twice (entry {position})")]
    DuplicateNode { node: String, position: usize },
}

/// Input layout an algorithm expects, with defaults for optional operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// Integer list; secondary text is ignored
    Array,
    /// Integer list plus a search target
    ArrayWithTarget { default_target: i64 },
    /// Adjacency list plus a start node (default: first declared node)
    Graph,
    /// Single non-negative integer
    Count { default_n: usize },
    /// `weight:value` tokens plus a knapsack capacity
    WeightedItems { default_capacity: usize },
    /// Positive coin values plus a target amount
    Denominations { default_amount: usize },
    /// Exactly two word tokens
    SequencePair,
}

impl InputShape {
    /// Human-readable description of the secondary operand and its default
    pub fn secondary_hint(&self) -> Option<String> {
        match self {
            InputShape::Array | InputShape::Count { .. } | InputShape::SequencePair => None,
            InputShape::ArrayWithTarget { default_target } => {
                Some(format!("target (default {})", default_target))
            }
            InputShape::Graph => Some("start node (default: first declared node)".to_string()),
            InputShape::WeightedItems { default_capacity } => {
                Some(format!("capacity (default {})", default_capacity))
            }
            InputShape::Denominations { default_amount } => {
                Some(format!("amount (default {})", default_amount))
            }
        }
    }
}

/// Knapsack item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: i64,
}

/// Parsed, owned input for a tracer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    Array(Vec<i64>),
    Search { values: Vec<i64>, target: i64 },
    Graph { graph: Graph, start: String },
    Count(usize),
    Knapsack { items: Vec<Item>, capacity: usize },
    Coins { coins: Vec<i64>, amount: usize },
    Sequences { first: Vec<char>, second: Vec<char> },
}

/// Parse primary and optional secondary text for the given shape
pub fn parse(
    primary: &str,
    secondary: Option<&str>,
    shape: InputShape,
    config: &GeneratorConfig,
) -> Result<Operands, ParseError> {
    let secondary = secondary.map(str::trim).filter(|s| !s.is_empty());

    match shape {
        InputShape::Array => Ok(Operands::Array(parse_values(primary, config)?)),

        InputShape::ArrayWithTarget { default_target } => {
            let values = parse_values(primary, config)?;
            let target = match secondary {
                Some(text) => single_number(text)?,
                None => default_target,
            };
            Ok(Operands::Search { values, target })
        }

        InputShape::Graph => {
            let (graph, first_key) = parse_graph(primary, config.max_values)?;
            let start = match secondary {
                Some(text) => text.to_string(),
                None => first_key.unwrap_or_default(),
            };
            Ok(Operands::Graph { graph, start })
        }

        InputShape::Count { default_n } => {
            let tokens = Lexer::new(primary).tokenize();
            match tokens.as_slice() {
                [] => Ok(Operands::Count(default_n)),
                [token] => Ok(Operands::Count(bounded(token, 0, FIBONACCI_MAX_N)?)),
                _ => Err(ParseError::WrongOperandCount {
                    expected: 1,
                    found: tokens.len(),
                }),
            }
        }

        InputShape::WeightedItems { default_capacity } => {
            let tokens = limited_tokens(primary, config)?;
            let items = tokens
                .iter()
                .map(|token| parse_item(token, config))
                .collect::<Result<Vec<_>, _>>()?;
            let capacity = match secondary {
                Some(text) => bounded_text(text, config.max_table_extent)?,
                None => default_capacity,
            };
            table_cells(items.len() + 1, capacity + 1, config)?;
            Ok(Operands::Knapsack { items, capacity })
        }

        InputShape::Denominations { default_amount } => {
            let tokens = limited_tokens(primary, config)?;
            let coins = tokens
                .iter()
                .map(|token| {
                    bounded(token, 1, config.max_table_extent).map(|coin| coin as i64)
                })
                .collect::<Result<Vec<_>, _>>()?;
            let amount = match secondary {
                Some(text) => bounded_text(text, config.max_table_extent)?,
                None => default_amount,
            };
            table_cells(1, amount + 1, config)?;
            Ok(Operands::Coins { coins, amount })
        }

        InputShape::SequencePair => {
            let tokens = Lexer::new(primary).tokenize();
            let [first, second] = tokens.as_slice() else {
                return Err(ParseError::WrongOperandCount {
                    expected: 2,
                    found: tokens.len(),
                });
            };
            for token in [first, second] {
                let len = token.text.chars().count();
                if len > config.max_table_extent {
                    return Err(ParseError::TooManyValues {
                        count: len,
                        limit: config.max_table_extent,
                    });
                }
            }
            let first: Vec<char> = first.text.chars().collect();
            let second: Vec<char> = second.text.chars().collect();
            table_cells(first.len() + 1, second.len() + 1, config)?;
            Ok(Operands::Sequences { first, second })
        }
    }
}

/// Parse a comma/whitespace separated integer list
pub fn parse_values(raw: &str, config: &GeneratorConfig) -> Result<Vec<i64>, ParseError> {
    limited_tokens(raw, config)?.iter().map(number).collect()
}

fn limited_tokens(raw: &str, config: &GeneratorConfig) -> Result<Vec<Token>, ParseError> {
    let tokens = Lexer::new(raw).tokenize();
    if tokens.len() > config.max_values {
        return Err(ParseError::TooManyValues {
            count: tokens.len(),
            limit: config.max_values,
        });
    }
    Ok(tokens)
}

/// Every table step copies the whole table, so the cell count is capped
/// as a whole and not only per axis
fn table_cells(rows: usize, cols: usize, config: &GeneratorConfig) -> Result<(), ParseError> {
    let cells = rows.saturating_mul(cols);
    if cells > config.max_table_cells {
        return Err(ParseError::TooManyValues {
            count: cells,
            limit: config.max_table_cells,
        });
    }
    Ok(())
}

fn number(token: &Token) -> Result<i64, ParseError> {
    token
        .text
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber {
            token: token.text.clone(),
            position: token.position,
            column: token.column,
        })
}

fn single_number(text: &str) -> Result<i64, ParseError> {
    let tokens = Lexer::new(text).tokenize();
    match tokens.as_slice() {
        [token] => number(token),
        _ => Err(ParseError::WrongOperandCount {
            expected: 1,
            found: tokens.len(),
        }),
    }
}

fn bounded(token: &Token, min: usize, max: usize) -> Result<usize, ParseError> {
    let n = number(token)?;
    if n < min as i64 || n > max as i64 {
        return Err(ParseError::OutOfRange {
            token: token.text.clone(),
            position: token.position,
            min: min as i64,
            max: max as i64,
        });
    }
    Ok(n as usize)
}

fn bounded_text(text: &str, max: usize) -> Result<usize, ParseError> {
    let tokens = Lexer::new(text).tokenize();
    match tokens.as_slice() {
        [token] => bounded(token, 0, max),
        _ => Err(ParseError::WrongOperandCount {
            expected: 1,
            found: tokens.len(),
        }),
    }
}

fn parse_item(token: &Token, config: &GeneratorConfig) -> Result<Item, ParseError> {
    let Some((weight, value)) = token.text.split_once(':') else {
        return Err(ParseError::MalformedEntry {
            entry: token.text.clone(),
            position: token.position,
            expected: "weight:value",
        });
    };
    let part = |text: &str, offset: usize| Token {
        text: text.to_string(),
        position: token.position,
        column: token.column + offset,
    };
    let weight = bounded(&part(weight, 0), 0, config.max_table_extent)?;
    let value = number(&part(value, weight_len(&token.text) + 1))?;
    Ok(Item { weight, value })
}

fn weight_len(text: &str) -> usize {
    text.split(':').next().map_or(0, |w| w.chars().count())
}
