//! Dynamic-programming tracers
//!
//! Each computed cell produces a `cell-update` step carrying its coordinates,
//! its value and the cells it was derived from, plus the cumulative table.
//! The terminal step points at the answer cell.

use super::recorder::TraceRecorder;
use crate::parser::Item;
use crate::snapshot::{Highlight, Outcome, StepKind, Structure, TableView, Trace};

/// Table being filled plus the recorder it reports to
struct TableTracer {
    rec: TraceRecorder,
    table: TableView,
}

impl TableTracer {
    fn new(
        algorithm: &'static str,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        narration: String,
    ) -> Self {
        let cells = vec![vec![None; col_labels.len()]; row_labels.len()];
        let mut rec = TraceRecorder::new(algorithm, row_labels.len() * col_labels.len() + 2);
        let table = TableView {
            row_labels,
            col_labels,
            cells,
        };
        rec.record(
            StepKind::Start,
            Structure::Table(table.clone()),
            vec![],
            None,
            narration,
        );
        TableTracer { rec, table }
    }

    /// Value of an already computed cell (0 for cells never filled)
    fn value(&self, row: usize, col: usize) -> i64 {
        self.table.get(row, col).unwrap_or_default()
    }

    fn set(
        &mut self,
        row: usize,
        col: usize,
        value: Option<i64>,
        sources: Vec<(usize, usize)>,
        narration: String,
    ) {
        self.table.cells[row][col] = value;
        let mut highlights = vec![Highlight::Cell { row, col }];
        highlights.extend(sources.iter().map(|&(row, col)| Highlight::Cell { row, col }));
        self.rec.record(
            StepKind::CellUpdate {
                row,
                col,
                value,
                sources,
            },
            Structure::Table(self.table.clone()),
            highlights,
            None,
            narration,
        );
    }

    fn finish(self, row: usize, col: usize, narration: String) -> Trace {
        let value = self.table.get(row, col);
        let structure = Structure::Table(self.table);
        self.rec.finish(
            Outcome::Answer { row, col, value },
            structure,
            vec![Highlight::Cell { row, col }],
            narration,
        )
    }
}

fn numbered(n: usize) -> Vec<String> {
    (0..=n).map(|i| i.to_string()).collect()
}

/// Bottom-up Fibonacci: `F(0) = 0`, `F(1) = 1`, `F(i) = F(i-1) + F(i-2)`
pub fn fibonacci(n: usize) -> Trace {
    let mut t = TableTracer::new(
        "fibonacci",
        vec!["F".to_string()],
        numbered(n),
        format!("Compute F({}) bottom-up", n),
    );

    t.set(0, 0, Some(0), vec![], "Base case: F(0) = 0".to_string());
    if n >= 1 {
        t.set(0, 1, Some(1), vec![], "Base case: F(1) = 1".to_string());
    }
    for i in 2..=n {
        let (a, b) = (t.value(0, i - 1), t.value(0, i - 2));
        let sum = a.saturating_add(b);
        t.set(
            0,
            i,
            Some(sum),
            vec![(0, i - 1), (0, i - 2)],
            format!("F({}) = F({}) + F({}) = {} + {} = {}", i, i - 1, i - 2, a, b, sum),
        );
    }

    let answer = t.value(0, n);
    t.finish(0, n, format!("F({}) = {}", n, answer))
}

/// 0/1 knapsack: `best[i][w]` is the best value using the first `i` items
/// within capacity `w`
pub fn knapsack(items: &[Item], capacity: usize) -> Trace {
    let mut rows = vec!["none".to_string()];
    rows.extend(items.iter().map(|item| format!("{}:{}", item.weight, item.value)));
    let mut t = TableTracer::new(
        "knapsack",
        rows,
        numbered(capacity),
        format!("0/1 knapsack with {} items, capacity {}", items.len(), capacity),
    );

    for w in 0..=capacity {
        t.set(0, w, Some(0), vec![], format!("No items: best value at capacity {} is 0", w));
    }

    for (i, item) in items.iter().enumerate().map(|(i, item)| (i + 1, item)) {
        for w in 0..=capacity {
            let skip = t.value(i - 1, w);
            if item.weight > w {
                t.set(
                    i,
                    w,
                    Some(skip),
                    vec![(i - 1, w)],
                    format!(
                        "Item {} (weight {}) does not fit in capacity {}: keep {}",
                        i, item.weight, w, skip
                    ),
                );
                continue;
            }
            let rest = t.value(i - 1, w - item.weight);
            let take = rest.saturating_add(item.value);
            let best = skip.max(take);
            t.set(
                i,
                w,
                Some(best),
                vec![(i - 1, w), (i - 1, w - item.weight)],
                format!(
                    "Capacity {}: skip item {} = {}, take it = {} + {} = {}; best {}",
                    w,
                    i,
                    skip,
                    rest,
                    item.value,
                    take,
                    best
                ),
            );
        }
    }

    // Walk back up the table to recover the chosen items
    let mut chosen = Vec::new();
    let mut w = capacity;
    for i in (1..=items.len()).rev() {
        if t.value(i, w) != t.value(i - 1, w) {
            chosen.push(i);
            w -= items[i - 1].weight;
        }
    }
    chosen.reverse();

    let answer = t.value(items.len(), capacity);
    let picked = chosen
        .iter()
        .map(|i| format!("#{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    t.finish(
        items.len(),
        capacity,
        format!(
            "Best value {} using items [{}]",
            answer,
            if picked.is_empty() { "none" } else { &picked }
        ),
    )
}

/// Longest common subsequence length table
pub fn longest_common_subsequence(first: &[char], second: &[char]) -> Trace {
    let label = |chars: &[char]| {
        let mut labels = vec!["ε".to_string()];
        labels.extend(chars.iter().map(char::to_string));
        labels
    };
    let (m, n) = (first.len(), second.len());
    let a: String = first.iter().collect();
    let b: String = second.iter().collect();
    let mut t = TableTracer::new(
        "lcs",
        label(first),
        label(second),
        format!("Longest common subsequence of \"{}\" and \"{}\"", a, b),
    );

    for i in 0..=m {
        for j in 0..=n {
            if i == 0 || j == 0 {
                t.set(i, j, Some(0), vec![], "Empty prefix: length 0".to_string());
                continue;
            }
            let (x, y) = (first[i - 1], second[j - 1]);
            if x == y {
                let value = t.value(i - 1, j - 1) + 1;
                t.set(
                    i,
                    j,
                    Some(value),
                    vec![(i - 1, j - 1)],
                    format!("'{}' matches: diagonal + 1 = {}", x, value),
                );
            } else {
                let (up, left) = (t.value(i - 1, j), t.value(i, j - 1));
                t.set(
                    i,
                    j,
                    Some(up.max(left)),
                    vec![(i - 1, j), (i, j - 1)],
                    format!(
                        "'{}' != '{}': max(up {}, left {}) = {}",
                        x,
                        y,
                        up,
                        left,
                        up.max(left)
                    ),
                );
            }
        }
    }

    // Backtrack one subsequence, preferring the upper cell on ties
    let mut lcs = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if first[i - 1] == second[j - 1] {
            lcs.push(first[i - 1]);
            i -= 1;
            j -= 1;
        } else if t.value(i - 1, j) >= t.value(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    let lcs: String = lcs.iter().rev().collect();

    let answer = t.value(m, n);
    t.finish(m, n, format!("LCS length {} (e.g. \"{}\")", answer, lcs))
}

/// Fewest coins summing to each amount; unreachable amounts stay empty
pub fn coin_change(coins: &[i64], amount: usize) -> Trace {
    let list = coins
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut t = TableTracer::new(
        "coin-change",
        vec!["coins".to_string()],
        numbered(amount),
        format!("Fewest coins from [{}] to make {}", list, amount),
    );

    t.set(0, 0, Some(0), vec![], "Amount 0 needs no coins".to_string());
    for a in 1..=amount {
        let mut best: Option<(i64, usize, i64)> = None;
        for &coin in coins {
            let Ok(coin_size) = usize::try_from(coin) else {
                continue;
            };
            if coin_size == 0 || coin_size > a {
                continue;
            }
            if let Some(count) = t.table.get(0, a - coin_size) {
                if best.map_or(true, |(b, _, _)| count + 1 < b) {
                    best = Some((count + 1, a - coin_size, coin));
                }
            }
        }
        match best {
            Some((count, source, coin)) => t.set(
                0,
                a,
                Some(count),
                vec![(0, source)],
                format!(
                    "Amount {}: coin {} after amount {} gives {} coins",
                    a, coin, source, count
                ),
            ),
            None => t.set(
                0,
                a,
                None,
                vec![],
                format!("Amount {} cannot be made with these coins", a),
            ),
        }
    }

    let narration = match t.table.get(0, amount) {
        Some(count) => format!("Amount {} needs {} coin(s)", amount, count),
        None => format!("Amount {} cannot be made with these coins", amount),
    };
    t.finish(0, amount, narration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(trace: &Trace) -> Option<i64> {
        match trace.outcome() {
            Some(Outcome::Answer { value, .. }) => *value,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(answer(&fibonacci(10)), Some(55));
        assert_eq!(answer(&fibonacci(0)), Some(0));
        assert_eq!(answer(&fibonacci(1)), Some(1));
        assert_eq!(answer(&fibonacci(90)), Some(2_880_067_194_370_816_120));
    }

    #[test]
    fn test_fibonacci_sources() {
        let trace = fibonacci(3);
        let last_update = trace
            .iter()
            .filter(|s| matches!(s.kind, StepKind::CellUpdate { .. }))
            .last()
            .unwrap();
        assert_eq!(
            last_update.kind,
            StepKind::CellUpdate {
                row: 0,
                col: 3,
                value: Some(2),
                sources: vec![(0, 2), (0, 1)],
            }
        );
    }

    #[test]
    fn test_knapsack() {
        let items = [
            Item { weight: 2, value: 3 },
            Item { weight: 3, value: 4 },
            Item { weight: 4, value: 5 },
            Item { weight: 5, value: 6 },
        ];
        let trace = knapsack(&items, 5);
        assert_eq!(answer(&trace), Some(7));
        assert_eq!(trace.count("cell-update"), 5 * 6);
        assert!(trace.last().unwrap().narration.contains("[#1, #2]"));
    }

    #[test]
    fn test_knapsack_without_items() {
        let trace = knapsack(&[], 3);
        assert_eq!(answer(&trace), Some(0));
    }

    #[test]
    fn test_lcs() {
        let a: Vec<char> = "ABCBDAB".chars().collect();
        let b: Vec<char> = "BDCABA".chars().collect();
        let trace = longest_common_subsequence(&a, &b);
        assert_eq!(answer(&trace), Some(4));
        let table = trace.last().unwrap().structure.as_table().unwrap();
        assert_eq!(table.cells.len(), 8);
        assert_eq!(table.cells[0].len(), 7);
    }

    #[test]
    fn test_coin_change() {
        assert_eq!(answer(&coin_change(&[1, 2, 5], 11)), Some(3));
        assert_eq!(answer(&coin_change(&[2], 3)), None);
        assert_eq!(answer(&coin_change(&[], 0)), Some(0));
    }

    #[test]
    fn test_every_step_has_cumulative_table() {
        let trace = fibonacci(4);
        let filled: Vec<usize> = trace
            .iter()
            .map(|s| {
                s.structure
                    .as_table()
                    .map(|t| t.cells[0].iter().filter(|c| c.is_some()).count())
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(filled, vec![0, 1, 2, 3, 4, 5, 5]);
    }
}
