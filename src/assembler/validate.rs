//! Trace invariant checks
//!
//! Structural invariants hold for every trace:
//! - at least one step, and step `i` carries index `i`
//! - only the last step is terminal, and it is the only `Done` step
//! - every highlight addresses a position of that step's own structure
//! - merge buffer positions (active reads, buffer comparisons) stay inside
//!   the buffer
//!
//! On top of those, the terminal outcome is checked against the operands:
//! sorted permutation for sorts, target at the found index for searches,
//! visit-once order for traversals, and the answer cell for tables.

use crate::parser::Operands;
use crate::snapshot::{Auxiliary, Outcome, Step, StepKind, Structure, Trace};
use rustc_hash::FxHashSet;

/// A broken invariant, with the offending step when there is one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub step: Option<usize>,
    pub reason: String,
}

impl Violation {
    fn at(step: usize, reason: impl Into<String>) -> Self {
        Violation {
            step: Some(step),
            reason: reason.into(),
        }
    }

    fn trace(reason: impl Into<String>) -> Self {
        Violation {
            step: None,
            reason: reason.into(),
        }
    }
}

/// Check structural invariants and the outcome postcondition
pub fn validate(trace: &Trace, operands: &Operands) -> Result<(), Violation> {
    let Some(last) = trace.last() else {
        return Err(Violation::trace("trace has no steps"));
    };
    let last_index = trace.len() - 1;

    for (position, step) in trace.iter().enumerate() {
        if step.index != position {
            return Err(Violation::at(
                position,
                format!("step carries index {}", step.index),
            ));
        }
        let is_last = position == last_index;
        if step.terminal != is_last {
            return Err(Violation::at(
                position,
                if is_last {
                    "last step is not terminal"
                } else {
                    "terminal flag set before the last step"
                },
            ));
        }
        if matches!(step.kind, StepKind::Done { .. }) != is_last {
            return Err(Violation::at(position, "done step is not the last step"));
        }
        if let Some(bad) = step.highlights.iter().find(|h| !step.structure.contains(h)) {
            return Err(Violation::at(
                position,
                format!("highlight {:?} is outside the step's structure", bad),
            ));
        }
        if let Some(reason) = buffer_problem(step) {
            return Err(Violation::at(position, reason));
        }
    }

    let outcome = last
        .outcome()
        .ok_or_else(|| Violation::at(last_index, "terminal step has no outcome"))?;
    check_outcome(outcome, &last.structure, operands)
        .map_err(|reason| Violation::at(last_index, reason))
}

fn buffer_problem(step: &Step) -> Option<String> {
    let Some(Auxiliary::Buffer { values, active, .. }) = &step.auxiliary else {
        return None;
    };
    if let Some(p) = active.iter().find(|&&p| p >= values.len()) {
        return Some(format!("buffer position {} is outside the merge buffer", p));
    }
    match step.kind {
        StepKind::Compare { left, right } if left.max(right) >= values.len() => Some(format!(
            "compared buffer positions ({}, {}) exceed the merge buffer",
            left, right
        )),
        _ => None,
    }
}

fn check_outcome(
    outcome: &Outcome,
    structure: &Structure,
    operands: &Operands,
) -> Result<(), String> {
    match (operands, outcome) {
        (Operands::Array(input), Outcome::Sorted) => {
            let output = structure
                .as_array()
                .ok_or("sorted outcome without an array snapshot")?;
            if output.windows(2).any(|w| w[0] > w[1]) {
                return Err("final array is not in non-decreasing order".to_string());
            }
            let mut expected = input.clone();
            expected.sort_unstable();
            if output != expected.as_slice() {
                return Err("final array is not a permutation of the input".to_string());
            }
            Ok(())
        }

        (Operands::Search { values, target }, Outcome::Found { index }) => {
            if values.get(*index) != Some(target) {
                return Err(format!("found index {} does not hold {}", index, target));
            }
            Ok(())
        }

        (Operands::Search { values, target }, Outcome::NotFound) => {
            // Only provable on sorted input; binary search may legitimately
            // miss a present target in unsorted data.
            let sorted = values.windows(2).all(|w| w[0] <= w[1]);
            if sorted && values.contains(target) {
                return Err(format!("{} is present but was reported missing", target));
            }
            Ok(())
        }

        (Operands::Graph { graph, start }, Outcome::Traversed { order }) => {
            let mut seen = FxHashSet::default();
            for name in order {
                if graph.node_index(name).is_none() {
                    return Err(format!("visited unknown node '{}'", name));
                }
                if !seen.insert(name.as_str()) {
                    return Err(format!("node '{}' visited twice", name));
                }
            }
            if order.first().is_some_and(|first| first != start) {
                return Err(format!("traversal did not begin at '{}'", start));
            }
            Ok(())
        }

        (
            Operands::Count(_)
            | Operands::Knapsack { .. }
            | Operands::Coins { .. }
            | Operands::Sequences { .. },
            Outcome::Answer { row, col, value },
        ) => {
            let table = structure
                .as_table()
                .ok_or("answer outcome without a table snapshot")?;
            let in_bounds = table.cells.get(*row).is_some_and(|r| *col < r.len());
            if !in_bounds {
                return Err(format!("answer cell ({}, {}) is outside the table", row, col));
            }
            if table.get(*row, *col) != *value {
                return Err(format!("answer does not match cell ({}, {})", row, col));
            }
            Ok(())
        }

        (_, outcome) => Err(format!("outcome {:?} does not fit the operands", outcome)),
    }
}
