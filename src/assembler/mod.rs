//! Trace assembler
//!
//! Orchestrates one request end to end:
//!
//! ```text
//! id → registry lookup → parse (declared shape) → tracer → validate → Trace
//! ```
//!
//! - [`errors`]: [`TraceError`], splitting user errors from tracer defects
//! - [`validate`]: structural invariants and outcome postconditions
//!
//! The assembler is stateless apart from its [`GeneratorConfig`], so any
//! number of callers may generate traces at the same time without
//! coordination.

pub mod errors;
pub mod validate;

pub use errors::TraceError;

use crate::config::GeneratorConfig;
use crate::parser::{parse, Operands};
use crate::registry::{self, AlgorithmDescriptor};
use crate::snapshot::Trace;
use crate::tracers::Tracer;

/// Entry point for trace generation
#[derive(Debug, Clone, Default)]
pub struct TraceGenerator {
    config: GeneratorConfig,
}

impl TraceGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        TraceGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the trace for `algorithm_id` over the given input text.
    ///
    /// A missing or blank `secondary` operand resolves to the default the
    /// algorithm declares in the registry.
    pub fn generate(
        &self,
        algorithm_id: &str,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<Trace, TraceError> {
        let descriptor = registry::lookup(algorithm_id).ok_or_else(|| TraceError::NotFound {
            id: algorithm_id.to_string(),
        })?;
        let operands = parse(primary, secondary, descriptor.shape, &self.config)?;
        let trace = run(descriptor, &operands)?;

        if trace.algorithm() != descriptor.id {
            return Err(defect(
                descriptor,
                None,
                format!("trace is labelled '{}'", trace.algorithm()),
            ));
        }
        validate::validate(&trace, &operands)
            .map_err(|violation| defect(descriptor, violation.step, violation.reason))?;

        tracing::debug!(
            algorithm = descriptor.id,
            steps = trace.len(),
            "generated trace"
        );
        Ok(trace)
    }

    /// Generate using the algorithm's own default input
    pub fn generate_default(&self, algorithm_id: &str) -> Result<Trace, TraceError> {
        let descriptor = registry::lookup(algorithm_id).ok_or_else(|| TraceError::NotFound {
            id: algorithm_id.to_string(),
        })?;
        self.generate(algorithm_id, descriptor.default_input, None)
    }
}

/// Generate a trace with the default configuration
pub fn generate_trace(
    algorithm_id: &str,
    primary: &str,
    secondary: Option<&str>,
) -> Result<Trace, TraceError> {
    TraceGenerator::default().generate(algorithm_id, primary, secondary)
}

fn run(descriptor: &AlgorithmDescriptor, operands: &Operands) -> Result<Trace, TraceError> {
    let trace = match (descriptor.tracer, operands) {
        (Tracer::Array(tracer), Operands::Array(values)) => tracer(values),
        (Tracer::Search(tracer), Operands::Search { values, target }) => tracer(values, *target),
        (Tracer::Graph(tracer), Operands::Graph { graph, start }) => tracer(graph, start),
        (Tracer::Count(tracer), Operands::Count(n)) => tracer(*n),
        (Tracer::Knapsack(tracer), Operands::Knapsack { items, capacity }) => {
            tracer(items, *capacity)
        }
        (Tracer::Coins(tracer), Operands::Coins { coins, amount }) => tracer(coins, *amount),
        (Tracer::Sequences(tracer), Operands::Sequences { first, second }) => {
            tracer(first, second)
        }
        (tracer, _) => {
            tracing::error!(algorithm = descriptor.id, "registry shape does not match tracer");
            return Err(TraceError::ShapeMismatch {
                algorithm: descriptor.id.to_string(),
                shape: format!("{:?}", descriptor.shape),
                tracer: format!("{:?}", tracer),
            });
        }
    };
    Ok(trace)
}

fn defect(descriptor: &AlgorithmDescriptor, step: Option<usize>, reason: String) -> TraceError {
    tracing::error!(
        algorithm = descriptor.id,
        step = ?step,
        %reason,
        "tracer broke a trace invariant"
    );
    TraceError::InvariantViolation {
        algorithm: descriptor.id.to_string(),
        step,
        reason,
    }
}
