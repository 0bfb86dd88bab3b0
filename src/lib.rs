//! # Introduction
//!
//! algotrace runs textbook algorithms over small user inputs and records every
//! meaningful operation as an immutable step, producing a [`Trace`] a player
//! can scrub forward and backward without re-running anything. The bundled
//! player is a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Generation pipeline
//!
//! ```text
//! Text → Lexer → Operands → Tracer → Steps → Validation → Trace → TUI / JSON
//! ```
//!
//! 1. [`parser`]: tokenises the raw text and builds typed operands for the
//!    shape an algorithm declares.
//! 2. [`registry`]: maps identifiers such as `merge-sort` to descriptors
//!    (display name, family, default input, input shape, tracer).
//! 3. [`tracers`]: one pure function per algorithm, recording a step after
//!    each operation through a [`tracers::recorder::TraceRecorder`].
//! 4. [`assembler`]: looks up, parses, runs and validates; the entry point is
//!    [`generate_trace`].
//! 5. [`snapshot`]: the step schema shared by every family.
//! 6. [`ui`]: ratatui player; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble, insertion, selection, merge, quick, heap.
//! Searching: linear, binary.
//! Graph traversal: breadth-first, depth-first.
//! Dynamic programming: Fibonacci, 0/1 knapsack, longest common subsequence,
//! coin change.

pub mod assembler;
pub mod config;
pub mod parser;
pub mod registry;
pub mod snapshot;
pub mod tracers;
pub mod ui;

pub use assembler::{generate_trace, TraceError, TraceGenerator};
pub use config::GeneratorConfig;
pub use snapshot::{Step, StepKind, Trace};
