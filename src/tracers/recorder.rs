// Step recording for tracers

use crate::snapshot::{Auxiliary, Highlight, Outcome, Step, StepKind, Structure, Trace};

/// Collects steps for a single tracer run.
///
/// Each recorded step receives its own copy of the structure, so later
/// mutation of the tracer's working buffers never reaches earlier steps.
#[derive(Debug)]
pub struct TraceRecorder {
    algorithm: &'static str,
    steps: Vec<Step>,
}

impl TraceRecorder {
    /// Create a recorder with room for `capacity` steps
    pub fn new(algorithm: &'static str, capacity: usize) -> Self {
        TraceRecorder {
            algorithm,
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Append a non-terminal step
    pub fn record(
        &mut self,
        kind: StepKind,
        structure: Structure,
        highlights: Vec<Highlight>,
        auxiliary: Option<Auxiliary>,
        narration: impl Into<String>,
    ) {
        self.steps.push(Step {
            index: self.steps.len(),
            kind,
            structure,
            highlights,
            auxiliary,
            narration: narration.into(),
            terminal: false,
        });
    }

    /// Append the terminal step and seal the trace
    pub fn finish(
        mut self,
        outcome: Outcome,
        structure: Structure,
        highlights: Vec<Highlight>,
        narration: impl Into<String>,
    ) -> Trace {
        self.steps.push(Step {
            index: self.steps.len(),
            kind: StepKind::Done { outcome },
            structure,
            highlights,
            auxiliary: None,
            narration: narration.into(),
            terminal: true,
        });
        Trace::new(self.algorithm, self.steps)
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Array snapshot helper
pub(crate) fn array(values: &[i64]) -> Structure {
    Structure::Array {
        values: values.to_vec(),
    }
}

/// Highlights for a list of array positions
pub(crate) fn indices(positions: &[usize]) -> Vec<Highlight> {
    positions.iter().copied().map(Highlight::Index).collect()
}
