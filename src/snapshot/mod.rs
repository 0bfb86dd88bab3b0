//! Trace data model shared by every algorithm family
//!
//! A [`Trace`] is the complete, immutable output of one tracer run: an ordered
//! list of [`Step`]s, each carrying an eagerly captured copy of the working
//! structure. The player only ever indexes into this list, so it never calls
//! back into algorithm code and never needs per-algorithm logic.
//!
//! # Step schema
//!
//! ```text
//! Step { index, kind: StepKind, structure, highlights, auxiliary?, narration, terminal }
//! ```
//!
//! [`StepKind`] is a tagged variant holding the per-kind payload (compared
//! indices, written value, visited node, updated cell, ...). The last step of
//! every trace is a [`StepKind::Done`] carrying the [`Outcome`].
//!
//! The payload is flattened into the step when serialized, so no payload
//! field may reuse a [`Step`] field name (`index` is the step's sequence
//! number; array positions in a payload are called `position`).

use serde::Serialize;

/// Primary working structure at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Structure {
    /// Array being sorted or searched
    Array { values: Vec<i64> },
    /// Graph being traversed
    Graph(GraphView),
    /// Dynamic-programming table (a 1-D table is a single row)
    Table(TableView),
}

impl Structure {
    /// Whether `highlight` addresses a real position of this structure
    pub fn contains(&self, highlight: &Highlight) -> bool {
        match (self, highlight) {
            (Structure::Array { values }, Highlight::Index(i)) => *i < values.len(),
            (Structure::Graph(graph), Highlight::Node(n)) => *n < graph.nodes.len(),
            (Structure::Table(table), Highlight::Cell { row, col }) => table
                .cells
                .get(*row)
                .is_some_and(|cells| *col < cells.len()),
            _ => false,
        }
    }

    /// Array contents, if this is an array snapshot
    pub fn as_array(&self) -> Option<&[i64]> {
        match self {
            Structure::Array { values } => Some(values),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&GraphView> {
        match self {
            Structure::Graph(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableView> {
        match self {
            Structure::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Traversal state of a single graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeState {
    Undiscovered,
    /// Discovered and waiting in the frontier
    Frontier,
    Visited,
}

/// Self-contained picture of a graph during traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<String>,
    /// Outgoing edges by node index, in declared order
    pub adjacency: Vec<Vec<usize>>,
    pub states: Vec<NodeState>,
}

/// Dynamic-programming table with axis labels for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `None` marks a cell not computed yet (or unreachable, for coin change)
    pub cells: Vec<Vec<Option<i64>>>,
}

impl TableView {
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

/// Position emphasized by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Highlight {
    Index(usize),
    Node(usize),
    Cell { row: usize, col: usize },
}

/// Secondary structure shown beside the primary one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Auxiliary {
    /// Merge buffer holding the copied run being merged; `active` lists the
    /// buffer positions read by the step
    Buffer {
        offset: usize,
        values: Vec<i64>,
        active: Vec<usize>,
    },
    /// Active binary-search window (inclusive)
    Bounds { low: usize, high: usize },
    /// Breadth-first frontier, front first
    Queue { nodes: Vec<String> },
    /// Depth-first frontier, bottom first
    Stack { nodes: Vec<String> },
}

/// Final result recorded on the terminal step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Outcome {
    Sorted,
    Found { index: usize },
    NotFound,
    Traversed { order: Vec<String> },
    Answer {
        row: usize,
        col: usize,
        value: Option<i64>,
    },
}

/// What happened at a step, with its payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StepKind {
    /// Initial state before any operation
    Start,
    /// Positions index the merge buffer when a `Buffer` auxiliary is
    /// attached, the primary array otherwise
    Compare { left: usize, right: usize },
    /// Element compared against the search target
    CompareTarget { position: usize, target: i64 },
    Swap { left: usize, right: usize },
    /// Merge write into the destination position
    Overwrite { position: usize, value: i64 },
    Partition { pivot: usize, boundary: usize },
    Visit { node: usize },
    Enqueue { node: usize },
    Dequeue { node: usize },
    Push { node: usize },
    Pop { node: usize },
    CellUpdate {
        row: usize,
        col: usize,
        value: Option<i64>,
        sources: Vec<(usize, usize)>,
    },
    Done { outcome: Outcome },
}

impl StepKind {
    /// Short label used by the player and logs
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::Compare { .. } | StepKind::CompareTarget { .. } => "compare",
            StepKind::Swap { .. } => "swap",
            StepKind::Overwrite { .. } => "overwrite",
            StepKind::Partition { .. } => "partition",
            StepKind::Visit { .. } => "visit",
            StepKind::Enqueue { .. } => "enqueue",
            StepKind::Dequeue { .. } => "dequeue",
            StepKind::Push { .. } => "push",
            StepKind::Pop { .. } => "pop",
            StepKind::CellUpdate { .. } => "cell-update",
            StepKind::Done { .. } => "done",
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            StepKind::Compare { .. } | StepKind::CompareTarget { .. }
        )
    }
}

/// One discrete state snapshot within a trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    #[serde(flatten)]
    pub kind: StepKind,
    pub structure: Structure,
    pub highlights: Vec<Highlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<Auxiliary>,
    pub narration: String,
    pub terminal: bool,
}

impl Step {
    /// Outcome of the run, present only on the terminal step
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.kind {
            StepKind::Done { outcome } => Some(outcome),
            _ => None,
        }
    }
}

/// Ordered, immutable sequence of steps for one (algorithm, input) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    algorithm: String,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(algorithm: impl Into<String>, steps: Vec<Step>) -> Self {
        Trace {
            algorithm: algorithm.into(),
            steps,
        }
    }

    /// Identifier of the algorithm that produced this trace
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty (never true for a trace returned by the assembler)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The terminal step
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Outcome carried by the terminal step
    pub fn outcome(&self) -> Option<&Outcome> {
        self.last().and_then(Step::outcome)
    }

    /// Number of steps of a given kind label
    pub fn count(&self, label: &str) -> usize {
        self.steps.iter().filter(|s| s.kind.label() == label).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
