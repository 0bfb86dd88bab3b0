//! Searching tracers
//!
//! Both tracers end with exactly one of `Found { index }` or `NotFound`.
//! Binary search assumes its input is already sorted and does not check:
//! sorting first would hide the very data layout being visualized.

use super::recorder::{array, indices, TraceRecorder};
use crate::snapshot::{Auxiliary, Highlight, Outcome, StepKind, Trace};
use std::cmp::Ordering;

/// Scan left to right, one comparison per visited index
pub fn linear_search(values: &[i64], target: i64) -> Trace {
    let mut rec = TraceRecorder::new("linear-search", values.len() + 2);
    rec.record(
        StepKind::Start,
        array(values),
        vec![],
        None,
        format!("Search for {} by checking each element in order", target),
    );

    for (index, &value) in values.iter().enumerate() {
        rec.record(
            StepKind::CompareTarget {
                position: index,
                target,
            },
            array(values),
            indices(&[index]),
            None,
            format!("Compare {} (index {}) with target {}", value, index, target),
        );
        if value == target {
            return rec.finish(
                Outcome::Found { index },
                array(values),
                indices(&[index]),
                format!("Found {} at index {}", target, index),
            );
        }
    }

    rec.finish(
        Outcome::NotFound,
        array(values),
        vec![],
        format!("{} is not in the array", target),
    )
}

/// Iterative binary search over an inclusive `low..=high` window.
///
/// The midpoint is `low + (high - low) / 2`, which cannot overflow.
pub fn binary_search(values: &[i64], target: i64) -> Trace {
    let n = values.len();
    let log2 = usize::BITS as usize - n.leading_zeros() as usize;
    let mut rec = TraceRecorder::new("binary-search", log2 + 3);
    rec.record(
        StepKind::Start,
        array(values),
        vec![],
        None,
        format!("Binary search for {} (input is assumed to be sorted)", target),
    );

    if n == 0 {
        return rec.finish(
            Outcome::NotFound,
            array(values),
            vec![],
            format!("{} is not in the empty array", target),
        );
    }

    let (mut low, mut high) = (0, n - 1);
    loop {
        let mid = low + (high - low) / 2;
        let value = values[mid];
        rec.record(
            StepKind::CompareTarget {
                position: mid,
                target,
            },
            array(values),
            window(low, mid, high),
            Some(Auxiliary::Bounds { low, high }),
            format!(
                "low={}, mid={}, high={}: compare {} with target {}",
                low, mid, high, value, target
            ),
        );

        match value.cmp(&target) {
            Ordering::Equal => {
                return rec.finish(
                    Outcome::Found { index: mid },
                    array(values),
                    indices(&[mid]),
                    format!("Found {} at index {}", target, mid),
                );
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }

        if low > high {
            break;
        }
    }

    rec.finish(
        Outcome::NotFound,
        array(values),
        vec![],
        format!("Search window is empty: {} is not in the array", target),
    )
}

fn window(low: usize, mid: usize, high: usize) -> Vec<Highlight> {
    let mut positions = vec![low, mid, high];
    positions.dedup();
    indices(&positions)
}
