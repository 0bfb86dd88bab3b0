//! Input parser
//!
//! This module transforms raw operand text into typed [`parse::Operands`]:
//! - [`lexer`]: Tokenization (text → positioned tokens, commas/whitespace as separators)
//! - [`parse`]: Shape-directed parsing, defaults and [`parse::ParseError`]
//! - [`graph`]: Adjacency-list graphs for traversal algorithms
//!
//! Malformed input is rejected here, so tracers only ever see valid operands.

pub mod graph;
pub mod lexer;
pub mod parse;

pub use graph::Graph;
pub use parse::{parse, InputShape, Item, Operands, ParseError};
