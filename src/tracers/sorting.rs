//! Sorting tracers
//!
//! Every tracer sorts a private copy of its input and records a `compare`
//! step for each comparison of two positions and a `swap` step (with the
//! post-exchange snapshot) for each exchange.
//!
//! - Bubble, insertion and merge sort are stable: equal values never pass each
//!   other, because only strictly greater elements are moved ahead.
//! - Selection, quick and heap sort make no stability guarantee.
//! - Quick sort always partitions around the last element of the active range
//!   (Lomuto scheme) so its trace is reproducible.

use super::recorder::{array, indices, TraceRecorder};
use crate::snapshot::{Auxiliary, Highlight, Outcome, StepKind, Trace};
use std::cmp::Ordering;

/// Working array plus the recorder it reports to
struct Sorter {
    rec: TraceRecorder,
    values: Vec<i64>,
}

impl Sorter {
    fn new(algorithm: &'static str, input: &[i64], capacity: usize) -> Self {
        let mut rec = TraceRecorder::new(algorithm, capacity);
        rec.record(
            StepKind::Start,
            array(input),
            vec![],
            None,
            format!("Initial array: {}", join(input)),
        );
        Sorter {
            rec,
            values: input.to_vec(),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    /// Compare `values[left]` with `values[right]`
    fn compare(&mut self, left: usize, right: usize) -> Ordering {
        let (a, b) = (self.values[left], self.values[right]);
        self.rec.record(
            StepKind::Compare { left, right },
            array(&self.values),
            indices(&[left, right]),
            None,
            format!("Compare {} (index {}) with {} (index {})", a, left, b, right),
        );
        a.cmp(&b)
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.values.swap(left, right);
        self.rec.record(
            StepKind::Swap { left, right },
            array(&self.values),
            indices(&[left, right]),
            None,
            format!(
                "Swap indices {} and {}: now {} and {}",
                left, right, self.values[left], self.values[right]
            ),
        );
    }

    fn record(
        &mut self,
        kind: StepKind,
        highlights: Vec<Highlight>,
        auxiliary: Option<Auxiliary>,
        narration: String,
    ) {
        self.rec
            .record(kind, array(&self.values), highlights, auxiliary, narration);
    }

    fn finish(self) -> Trace {
        let narration = format!("Sorted: {}", join(&self.values));
        self.rec
            .finish(Outcome::Sorted, array(&self.values), vec![], narration)
    }
}

fn join(values: &[i64]) -> String {
    if values.is_empty() {
        return "(empty)".to_string();
    }
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quadratic step estimate used to pre-size traces
fn quadratic(n: usize) -> usize {
    n * n + 2
}

/// Bubble sort with early exit after a pass without swaps
pub fn bubble_sort(input: &[i64]) -> Trace {
    let mut s = Sorter::new("bubble-sort", input, quadratic(input.len()));
    let n = s.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if s.compare(j, j + 1) == Ordering::Greater {
                s.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    s.finish()
}

/// Insertion sort by adjacent exchanges
pub fn insertion_sort(input: &[i64]) -> Trace {
    let mut s = Sorter::new("insertion-sort", input, quadratic(input.len()));

    for i in 1..s.len() {
        let mut j = i;
        while j > 0 && s.compare(j - 1, j) == Ordering::Greater {
            s.swap(j - 1, j);
            j -= 1;
        }
    }

    s.finish()
}

pub fn selection_sort(input: &[i64]) -> Trace {
    let mut s = Sorter::new("selection-sort", input, quadratic(input.len()));
    let n = s.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if s.compare(j, min) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            s.swap(i, min);
        }
    }

    s.finish()
}

/// Top-down merge sort. Each merge copies the active run into the auxiliary
/// buffer; comparisons name buffer positions (the primary array highlights
/// the destination being written) and writes back are `overwrite` steps.
pub fn merge_sort(input: &[i64]) -> Trace {
    let n = input.len();
    let depth = usize::BITS as usize - n.leading_zeros() as usize;
    let mut s = Sorter::new("merge-sort", input, 2 * n * depth + 2);
    merge_range(&mut s, 0, n);
    s.finish()
}

fn merge_range(s: &mut Sorter, lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_range(s, lo, mid);
    merge_range(s, mid, hi);
    merge(s, lo, mid, hi);
}

fn merge(s: &mut Sorter, lo: usize, mid: usize, hi: usize) {
    let buffer = s.values[lo..hi].to_vec();
    let split = mid - lo;
    let aux = |active: Vec<usize>| Auxiliary::Buffer {
        offset: lo,
        values: buffer.clone(),
        active,
    };
    let (mut i, mut j, mut k) = (0, split, lo);

    while i < split && j < buffer.len() {
        s.record(
            StepKind::Compare { left: i, right: j },
            indices(&[k]),
            Some(aux(vec![i, j])),
            format!(
                "Merge into index {}: compare {} (left run) with {} (right run)",
                k, buffer[i], buffer[j]
            ),
        );
        // `<=` takes from the left run on ties
        let source = if buffer[i] <= buffer[j] {
            i += 1;
            i - 1
        } else {
            j += 1;
            j - 1
        };
        overwrite(s, k, buffer[source], aux(vec![source]));
        k += 1;
    }

    for source in (i..split).chain(j..buffer.len()) {
        overwrite(s, k, buffer[source], aux(vec![source]));
        k += 1;
    }
}

fn overwrite(s: &mut Sorter, position: usize, value: i64, aux: Auxiliary) {
    s.values[position] = value;
    s.record(
        StepKind::Overwrite { position, value },
        indices(&[position]),
        Some(aux),
        format!("Write {} to index {}", value, position),
    );
}

/// Quick sort, Lomuto partition around the last element of each range
pub fn quick_sort(input: &[i64]) -> Trace {
    let n = input.len();
    let mut s = Sorter::new("quick-sort", input, quadratic(n) + n);

    // Explicit range stack; the right range is pushed first so the left one
    // is processed first, as in the recursive formulation.
    let mut ranges = Vec::new();
    if n > 1 {
        ranges.push((0, n - 1));
    }
    while let Some((lo, hi)) = ranges.pop() {
        let p = partition(&mut s, lo, hi);
        if p + 1 < hi {
            ranges.push((p + 1, hi));
        }
        if p > lo + 1 {
            ranges.push((lo, p - 1));
        }
    }

    s.finish()
}

fn partition(s: &mut Sorter, lo: usize, hi: usize) -> usize {
    let pivot = s.values[hi];
    let mut boundary = lo;
    s.record(
        StepKind::Partition {
            pivot: hi,
            boundary,
        },
        indices(&[hi, boundary]),
        None,
        format!(
            "Partition indices {}..={} around pivot {} (index {})",
            lo, hi, pivot, hi
        ),
    );

    for j in lo..hi {
        if s.compare(j, hi) != Ordering::Greater {
            if boundary != j {
                s.swap(boundary, j);
            }
            boundary += 1;
            s.record(
                StepKind::Partition {
                    pivot: hi,
                    boundary,
                },
                indices(&[hi, boundary]),
                None,
                format!("Boundary moves to index {}", boundary),
            );
        }
    }

    if boundary != hi {
        s.swap(boundary, hi);
    }
    s.record(
        StepKind::Partition {
            pivot: boundary,
            boundary,
        },
        indices(&[boundary]),
        None,
        format!("Pivot {} is in its final position {}", pivot, boundary),
    );
    boundary
}

/// Heap sort: build a max-heap, then repeatedly move the root to the end
pub fn heap_sort(input: &[i64]) -> Trace {
    let n = input.len();
    let depth = usize::BITS as usize - n.leading_zeros() as usize;
    let mut s = Sorter::new("heap-sort", input, 3 * n * (depth + 1) + 2);

    for root in (0..n / 2).rev() {
        sift_down(&mut s, root, n);
    }
    for end in (1..n).rev() {
        s.swap(0, end);
        sift_down(&mut s, 0, end);
    }

    s.finish()
}

fn sift_down(s: &mut Sorter, mut root: usize, end: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;
        if left < end && s.compare(left, largest) == Ordering::Greater {
            largest = left;
        }
        if right < end && s.compare(right, largest) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        s.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Step;

    type Tracer = fn(&[i64]) -> Trace;

    const ALL: [(&str, Tracer); 6] = [
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
        ("selection", selection_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
        ("heap", heap_sort),
    ];

    fn final_array(trace: &Trace) -> Vec<i64> {
        trace
            .last()
            .and_then(|s| s.structure.as_array())
            .map(<[i64]>::to_vec)
            .unwrap_or_default()
    }

    #[test]
    fn test_all_sorts_produce_sorted_output() {
        let input = [5, -3, 8, 0, 8, 2, -3, 7, 1];
        let mut expected = input.to_vec();
        expected.sort();
        for (name, tracer) in ALL {
            let trace = tracer(&input);
            assert_eq!(final_array(&trace), expected, "{} sort", name);
            assert_eq!(trace.outcome(), Some(&Outcome::Sorted));
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        for (name, tracer) in ALL {
            let empty = tracer(&[]);
            assert_eq!(empty.len(), 2, "{} sort on empty input", name);
            assert!(empty.last().is_some_and(|s| s.terminal));

            let single = tracer(&[42]);
            assert_eq!(final_array(&single), vec![42]);
            assert_eq!(single.count("swap"), 0);
        }
    }

    #[test]
    fn test_bubble_sort_early_exit() {
        let trace = bubble_sort(&[1, 2, 3, 4, 5]);
        assert_eq!(trace.count("swap"), 0);
        assert_eq!(trace.count("compare"), 4);
    }

    #[test]
    fn test_bubble_sort_swaps() {
        let trace = bubble_sort(&[5, 3, 1, 4, 2]);
        assert_eq!(final_array(&trace), vec![1, 2, 3, 4, 5]);
        assert!(trace.count("swap") > 0);
    }

    #[test]
    fn test_swap_snapshot_is_post_exchange() {
        let trace = insertion_sort(&[2, 1]);
        let swap = trace
            .iter()
            .find(|s| matches!(s.kind, StepKind::Swap { .. }))
            .unwrap();
        assert_eq!(swap.structure.as_array(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_merge_sort_overwrites_carry_destination() {
        let trace = merge_sort(&[3, 1, 2]);
        let writes: Vec<&Step> = trace
            .iter()
            .filter(|s| matches!(s.kind, StepKind::Overwrite { .. }))
            .collect();
        assert!(!writes.is_empty());
        for step in writes {
            let StepKind::Overwrite { position, value } = step.kind else {
                unreachable!()
            };
            assert_eq!(step.structure.as_array().unwrap()[position], value);
            let Some(Auxiliary::Buffer { values, active, .. }) = &step.auxiliary else {
                panic!("overwrite without a merge buffer");
            };
            assert_eq!(active.len(), 1);
            assert_eq!(values[active[0]], value);
        }
    }

    #[test]
    fn test_merge_compares_read_the_buffer() {
        let trace = merge_sort(&[1, 3, 2, 4]);
        let compares: Vec<&Step> = trace
            .iter()
            .filter(|s| matches!(s.kind, StepKind::Compare { .. }))
            .collect();
        assert!(!compares.is_empty());
        for step in compares {
            let StepKind::Compare { left, right } = step.kind else {
                unreachable!()
            };
            let Some(Auxiliary::Buffer {
                offset,
                values,
                active,
            }) = &step.auxiliary
            else {
                panic!("merge compare without a buffer");
            };
            assert_eq!(active, &vec![left, right]);
            assert!(step.narration.contains(&format!(
                "compare {} (left run) with {} (right run)",
                values[left], values[right]
            )));
            // only the destination is highlighted on the primary array
            let [Highlight::Index(dest)] = step.highlights[..] else {
                panic!("expected a single destination highlight");
            };
            assert!(dest >= *offset && dest < offset + values.len());
        }
    }

    #[test]
    fn test_quick_sort_pivot_is_last_element() {
        let trace = quick_sort(&[4, 9, 1, 6]);
        let first = trace
            .iter()
            .find(|s| matches!(s.kind, StepKind::Partition { .. }))
            .unwrap();
        assert_eq!(
            first.kind,
            StepKind::Partition {
                pivot: 3,
                boundary: 0
            }
        );
        assert_eq!(final_array(&trace), vec![1, 4, 6, 9]);
    }

    #[test]
    fn test_heap_sort_builds_heap_before_extracting() {
        let trace = heap_sort(&[1, 2, 3]);
        // build phase: compare children 1 and 2 of the root, then swap 0 <-> 2
        let kinds: Vec<&StepKind> = trace.iter().map(|s| &s.kind).take(4).collect();
        assert_eq!(kinds[1], &StepKind::Compare { left: 1, right: 0 });
        assert_eq!(kinds[2], &StepKind::Compare { left: 2, right: 1 });
        assert_eq!(kinds[3], &StepKind::Swap { left: 0, right: 2 });
    }

    #[test]
    fn test_snapshots_do_not_alias() {
        let trace = selection_sort(&[3, 2, 1]);
        let start = trace.get(0).unwrap();
        assert_eq!(start.structure.as_array(), Some(&[3, 2, 1][..]));
    }
}
