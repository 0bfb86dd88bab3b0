//! Tracers: one pure function per algorithm
//!
//! - [`sorting`]: bubble, insertion, selection, merge, quick and heap sort
//! - [`searching`]: linear and binary search
//! - [`graph`]: breadth-first and depth-first traversal
//! - [`dynamic`]: Fibonacci, 0/1 knapsack, LCS and coin change tables
//! - [`recorder`]: [`recorder::TraceRecorder`], the step buffer they all share
//!
//! # Contract
//!
//! A tracer performs no I/O, touches no shared state, works on private copies
//! of its operands, and always returns a non-empty trace whose last step (and
//! only that step) is terminal, even for empty or otherwise degenerate input.

pub mod dynamic;
pub mod graph;
pub mod recorder;
pub mod searching;
pub mod sorting;

use crate::parser::{Graph, Item};
use crate::snapshot::Trace;

/// A tracer function, typed by the operands it consumes
#[derive(Clone, Copy)]
pub enum Tracer {
    Array(fn(&[i64]) -> Trace),
    Search(fn(&[i64], i64) -> Trace),
    Graph(fn(&Graph, &str) -> Trace),
    Count(fn(usize) -> Trace),
    Knapsack(fn(&[Item], usize) -> Trace),
    Coins(fn(&[i64], usize) -> Trace),
    Sequences(fn(&[char], &[char]) -> Trace),
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Tracer::Array(_) => "Array",
            Tracer::Search(_) => "Search",
            Tracer::Graph(_) => "Graph",
            Tracer::Count(_) => "Count",
            Tracer::Knapsack(_) => "Knapsack",
            Tracer::Coins(_) => "Coins",
            Tracer::Sequences(_) => "Sequences",
        };
        write!(f, "Tracer::{}", kind)
    }
}
