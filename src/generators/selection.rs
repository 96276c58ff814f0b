//! Selection sort trace
//!
//! Each pass scans the unsorted suffix for its minimum and swaps it into
//! place. No swap step is emitted when the minimum is already in position.

use super::pseudocode::selection as lines;
use crate::step::{Description, Highlight, SelectionHighlight, Step, StepSequence, Variables};
use tracing::debug;

fn highlight(
    comparing: Option<[usize; 2]>,
    swapping: Option<[usize; 2]>,
    sorted: Vec<usize>,
    min_index: Option<usize>,
) -> Highlight {
    Highlight::Selection(SelectionHighlight {
        comparing,
        swapping,
        sorted,
        min_index,
    })
}

fn watch(n: usize, i: usize, j: Option<usize>, min_idx: usize) -> Variables {
    let mut vars = Variables::new().with("n", n).with("i", i);
    if let Some(j) = j {
        vars.set("j", j);
    }
    vars.with("minIdx", min_idx)
}

/// Produce the step trace of selection-sorting `input`
pub fn generate(input: &[i64]) -> StepSequence {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    if n <= 1 {
        steps.push(
            Step::new(
                &arr,
                lines::DONE,
                Description::new(
                    format!("An array with {} element(s) is already sorted", n),
                    format!("آرایه‌ای با {} عنصر از قبل مرتب است", n),
                ),
                highlight(None, None, (0..n).collect(), None),
            )
            .with_variables(Variables::new().with("n", n).with("arr", arr.clone())),
        );
        debug!(len = n, steps = steps.len(), "selection sort trace short-circuited");
        return StepSequence::new(steps);
    }

    steps.push(
        Step::new(
            &arr,
            lines::INIT,
            Description::new(
                format!("Start selection sort on {} elements", n),
                format!("شروع مرتب‌سازی انتخابی روی {} عنصر", n),
            ),
            highlight(None, None, Vec::new(), None),
        )
        .with_variables(Variables::new().with("n", n).with("arr", arr.clone()))
        .with_changed_var("n"),
    );

    for i in 0..n - 1 {
        let mut min_idx = i;

        steps.push(
            Step::new(
                &arr,
                lines::MIN_START,
                Description::new(
                    format!("Search for the minimum starting at index {} ({})", i, arr[i]),
                    format!("جستجوی کمینه از خانه {} ({})", i, arr[i]),
                ),
                highlight(None, None, (0..i).collect(), Some(min_idx)),
            )
            .with_variables(watch(n, i, None, min_idx))
            .with_changed_var("minIdx"),
        );

        for j in i + 1..n {
            steps.push(
                Step::new(
                    &arr,
                    lines::COMPARE,
                    Description::new(
                        format!(
                            "Compare arr[{}] = {} with current minimum arr[{}] = {}",
                            j, arr[j], min_idx, arr[min_idx]
                        ),
                        format!(
                            "مقایسه arr[{}] = {} با کمینه فعلی arr[{}] = {}",
                            j, arr[j], min_idx, arr[min_idx]
                        ),
                    ),
                    highlight(Some([j, min_idx]), None, (0..i).collect(), Some(min_idx)),
                )
                .with_variables(watch(n, i, Some(j), min_idx))
                .with_changed_var("j"),
            );

            if arr[j] < arr[min_idx] {
                min_idx = j;
                steps.push(
                    Step::new(
                        &arr,
                        lines::NEW_MIN,
                        Description::new(
                            format!("New minimum {} found at index {}", arr[j], j),
                            format!("کمینه جدید {} در خانه {} پیدا شد", arr[j], j),
                        ),
                        highlight(None, None, (0..i).collect(), Some(min_idx)),
                    )
                    .with_variables(watch(n, i, Some(j), min_idx))
                    .with_changed_var("minIdx"),
                );
            }
        }

        if min_idx != i {
            arr.swap(i, min_idx);
            steps.push(
                Step::new(
                    &arr,
                    lines::SWAP,
                    Description::new(
                        format!("Swap positions {} and {}", i, min_idx),
                        format!("جابجایی خانه‌های {} و {}", i, min_idx),
                    ),
                    highlight(None, Some([i, min_idx]), (0..i).collect(), Some(min_idx)),
                )
                .with_variables(watch(n, i, None, min_idx))
                .with_changed_var("arr"),
            );
        }

        steps.push(
            Step::new(
                &arr,
                lines::PASS_END,
                Description::new(
                    format!("{} is now sorted at index {}", arr[i], i),
                    format!("{} اکنون در خانه {} مرتب است", arr[i], i),
                ),
                highlight(None, None, (0..=i).collect(), None),
            )
            .with_variables(watch(n, i, None, min_idx))
            .with_changed_var("i"),
        );
    }

    steps.push(
        Step::new(
            &arr,
            lines::DONE,
            Description::new("Selection sort complete", "مرتب‌سازی انتخابی کامل شد"),
            highlight(None, None, (0..n).collect(), None),
        )
        .with_variables(Variables::new().with("n", n).with("arr", arr.clone()))
        .with_changed_var("arr"),
    );

    debug!(len = n, steps = steps.len(), "selection sort trace generated");
    StepSequence::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pass_minimum_lands_on_smallest() {
        let seq = generate(&[5, 2, 8, 1, 9]);
        let first_swap = seq
            .iter()
            .position(|s| s.highlight.swapping().is_some())
            .expect("a swap happens");
        // The last minimum announced before the first swap points at the 1.
        let min_before_swap = seq.as_slice()[..first_swap]
            .iter()
            .rev()
            .find(|s| s.line == lines::NEW_MIN)
            .and_then(|s| s.highlight.min_index());
        assert_eq!(min_before_swap, Some(3));
        assert_eq!(seq[first_swap].highlight.swapping(), Some([0, 3]));
    }

    #[test]
    fn test_no_swap_step_when_minimum_in_place() {
        let seq = generate(&[1, 2, 3]);
        assert!(seq.iter().all(|s| s.line != lines::SWAP));
        assert_eq!(seq.last().map(|s| s.array.clone()), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_pass_end_marks_prefix_inclusive() {
        let seq = generate(&[3, 1, 2]);
        let passes: Vec<&Step> = seq.iter().filter(|s| s.line == lines::PASS_END).collect();
        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].highlight.sorted(), &[0]);
        assert_eq!(passes[1].highlight.sorted(), &[0, 1]);
    }

    #[test]
    fn test_comparing_pairs_scan_index_with_minimum() {
        let seq = generate(&[2, 1]);
        let compare = seq
            .iter()
            .find(|s| s.line == lines::COMPARE)
            .expect("one comparison");
        assert_eq!(compare.highlight.comparing(), Some([1, 0]));
        assert_eq!(compare.highlight.min_index(), Some(0));
    }
}
