// Input-size limits for trace generation

/// Largest Fibonacci index whose value still fits in an `i64`
pub const FIBONACCI_MAX_N: usize = 90;

/// Limits applied while parsing input, before any tracer runs.
///
/// Traces are fully materialized and every table step carries a full copy of
/// the table, so a table algorithm holds about `cells²` values in memory.
/// `max_table_cells` caps that product; the extents only bound single axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of values in an array, coin or item list
    pub max_values: usize,
    /// Maximum knapsack capacity, coin-change amount or LCS sequence length
    pub max_table_extent: usize,
    /// Maximum number of cells in a dynamic-programming table
    pub max_table_cells: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_values: 64,
            max_table_extent: 128,
            max_table_cells: 1024,
        }
    }
}
