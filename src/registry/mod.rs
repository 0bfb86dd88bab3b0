//! Algorithm registry
//!
//! A fixed table of [`AlgorithmDescriptor`]s, indexed once on first use and
//! read-only afterwards. Each entry pairs an identifier with its declared
//! [`InputShape`] (including defaults for optional operands) and its
//! [`Tracer`]. The registry holds no algorithm logic and checks nothing beyond
//! whether an identifier exists.
//!
//! Adding an algorithm means adding one entry to [`ALGORITHMS`].

use crate::parser::InputShape;
use crate::tracers::{dynamic, graph, searching, sorting, Tracer};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Algorithm family, used for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sorting,
    Searching,
    GraphTraversal,
    DynamicProgramming,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Sorting => write!(f, "Sorting"),
            Family::Searching => write!(f, "Searching"),
            Family::GraphTraversal => write!(f, "Graph traversal"),
            Family::DynamicProgramming => write!(f, "Dynamic programming"),
        }
    }
}

/// Static description of one algorithm
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub family: Family,
    /// Input used when the caller supplies none
    pub default_input: &'static str,
    pub shape: InputShape,
    /// Whether equal values keep their relative order (sorting only)
    pub stable: bool,
    pub tracer: Tracer,
}

/// Default target for both search algorithms when none is given
pub const DEFAULT_SEARCH_TARGET: i64 = 0;

const SORT_INPUT: &str = "64,34,25,12,22,11,90";
const GRAPH_INPUT: &str = "A: B C; B: D E; C: F; D: ; E: F; F:";

const fn sort(
    id: &'static str,
    name: &'static str,
    stable: bool,
    tracer: fn(&[i64]) -> crate::snapshot::Trace,
) -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        id,
        name,
        family: Family::Sorting,
        default_input: SORT_INPUT,
        shape: InputShape::Array,
        stable,
        tracer: Tracer::Array(tracer),
    }
}

/// Every registered algorithm, in listing order
pub static ALGORITHMS: [AlgorithmDescriptor; 14] = [
    sort("bubble-sort", "Bubble Sort", true, sorting::bubble_sort),
    sort("insertion-sort", "Insertion Sort", true, sorting::insertion_sort),
    sort("selection-sort", "Selection Sort", false, sorting::selection_sort),
    sort("merge-sort", "Merge Sort", true, sorting::merge_sort),
    sort("quick-sort", "Quick Sort", false, sorting::quick_sort),
    sort("heap-sort", "Heap Sort", false, sorting::heap_sort),
    AlgorithmDescriptor {
        id: "linear-search",
        name: "Linear Search",
        family: Family::Searching,
        default_input: SORT_INPUT,
        shape: InputShape::ArrayWithTarget {
            default_target: DEFAULT_SEARCH_TARGET,
        },
        stable: false,
        tracer: Tracer::Search(searching::linear_search),
    },
    AlgorithmDescriptor {
        id: "binary-search",
        name: "Binary Search",
        family: Family::Searching,
        default_input: "11,12,22,25,34,64,90",
        shape: InputShape::ArrayWithTarget {
            default_target: DEFAULT_SEARCH_TARGET,
        },
        stable: false,
        tracer: Tracer::Search(searching::binary_search),
    },
    AlgorithmDescriptor {
        id: "bfs",
        name: "Breadth-First Search",
        family: Family::GraphTraversal,
        default_input: GRAPH_INPUT,
        shape: InputShape::Graph,
        stable: false,
        tracer: Tracer::Graph(graph::breadth_first),
    },
    AlgorithmDescriptor {
        id: "dfs",
        name: "Depth-First Search",
        family: Family::GraphTraversal,
        default_input: GRAPH_INPUT,
        shape: InputShape::Graph,
        stable: false,
        tracer: Tracer::Graph(graph::depth_first),
    },
    AlgorithmDescriptor {
        id: "fibonacci",
        name: "Fibonacci (bottom-up)",
        family: Family::DynamicProgramming,
        default_input: "10",
        shape: InputShape::Count { default_n: 10 },
        stable: false,
        tracer: Tracer::Count(dynamic::fibonacci),
    },
    AlgorithmDescriptor {
        id: "knapsack",
        name: "0/1 Knapsack",
        family: Family::DynamicProgramming,
        default_input: "2:3, 3:4, 4:5, 5:6",
        shape: InputShape::WeightedItems {
            default_capacity: 5,
        },
        stable: false,
        tracer: Tracer::Knapsack(dynamic::knapsack),
    },
    AlgorithmDescriptor {
        id: "lcs",
        name: "Longest Common Subsequence",
        family: Family::DynamicProgramming,
        default_input: "ABCBDAB, BDCABA",
        shape: InputShape::SequencePair,
        stable: false,
        tracer: Tracer::Sequences(dynamic::longest_common_subsequence),
    },
    AlgorithmDescriptor {
        id: "coin-change",
        name: "Coin Change (fewest coins)",
        family: Family::DynamicProgramming,
        default_input: "1, 2, 5",
        shape: InputShape::Denominations { default_amount: 11 },
        stable: false,
        tracer: Tracer::Coins(dynamic::coin_change),
    },
];

static INDEX: LazyLock<FxHashMap<&'static str, &'static AlgorithmDescriptor>> =
    LazyLock::new(|| ALGORITHMS.iter().map(|d| (d.id, d)).collect());

/// Find an algorithm by identifier
pub fn lookup(id: &str) -> Option<&'static AlgorithmDescriptor> {
    INDEX.get(id).copied()
}

/// All registered algorithms in listing order
pub fn all() -> &'static [AlgorithmDescriptor] {
    &ALGORITHMS
}
