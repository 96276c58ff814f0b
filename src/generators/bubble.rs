//! Bubble sort trace with early exit
//!
//! Adjacent pairs are compared with a strict `>`, so equal neighbours never
//! swap. A pass that performs no swap ends the sort immediately.

use super::pseudocode::bubble as lines;
use crate::step::{BubbleHighlight, Description, Highlight, Step, StepSequence, Variables};
use tracing::debug;

fn highlight(
    comparing: Option<[usize; 2]>,
    swapping: Option<[usize; 2]>,
    sorted: Vec<usize>,
) -> Highlight {
    Highlight::Bubble(BubbleHighlight {
        comparing,
        swapping,
        sorted,
    })
}

/// The last `count` indices of an array of length `n`
fn sorted_tail(n: usize, count: usize) -> Vec<usize> {
    (n.saturating_sub(count)..n).collect()
}

fn watch(n: usize, i: usize, j: usize, swapped: bool) -> Variables {
    Variables::new()
        .with("n", n)
        .with("i", i)
        .with("j", j)
        .with("swapped", swapped)
}

/// Produce the step trace of bubble-sorting `input`
///
/// The caller's slice is never modified.
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
                highlight(None, None, (0..n).collect()),
            )
            .with_variables(Variables::new().with("n", n).with("arr", arr.clone())),
        );
        debug!(len = n, steps = steps.len(), "bubble sort trace short-circuited");
        return StepSequence::new(steps);
    }

    steps.push(
        Step::new(
            &arr,
            lines::INIT,
            Description::new(
                format!("Start bubble sort on {} elements", n),
                format!("شروع مرتب‌سازی حبابی روی {} عنصر", n),
            ),
            highlight(None, None, Vec::new()),
        )
        .with_variables(Variables::new().with("n", n).with("arr", arr.clone()))
        .with_changed_var("n"),
    );

    for i in 0..n - 1 {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            steps.push(
                Step::new(
                    &arr,
                    lines::COMPARE,
                    Description::new(
                        format!(
                            "Compare arr[{}] = {} with arr[{}] = {}",
                            j,
                            arr[j],
                            j + 1,
                            arr[j + 1]
                        ),
                        format!(
                            "مقایسه arr[{}] = {} با arr[{}] = {}",
                            j,
                            arr[j],
                            j + 1,
                            arr[j + 1]
                        ),
                    ),
                    highlight(Some([j, j + 1]), None, sorted_tail(n, i)),
                )
                .with_variables(watch(n, i, j, swapped))
                .with_changed_var("j"),
            );

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                steps.push(
                    Step::new(
                        &arr,
                        lines::SWAP,
                        Description::new(
                            format!(
                                "{} > {}, swap positions {} and {}",
                                arr[j + 1],
                                arr[j],
                                j,
                                j + 1
                            ),
                            format!(
                                "{} > {}، جابجایی خانه‌های {} و {}",
                                arr[j + 1],
                                arr[j],
                                j,
                                j + 1
                            ),
                        ),
                        highlight(None, Some([j, j + 1]), sorted_tail(n, i)),
                    )
                    .with_variables(watch(n, i, j, swapped))
                    .with_changed_var("swapped"),
                );
            }
        }

        if !swapped {
            steps.push(
                Step::new(
                    &arr,
                    lines::EARLY_EXIT,
                    Description::new(
                        format!("No swaps in pass {}, the array is sorted", i + 1),
                        format!("در دور {} جابجایی انجام نشد، آرایه مرتب است", i + 1),
                    ),
                    highlight(None, None, (0..n).collect()),
                )
                .with_variables(watch(n, i, n - i - 2, swapped)),
            );
            break;
        }

        steps.push(
            Step::new(
                &arr,
                lines::PASS_END,
                Description::new(
                    format!("Pass {} done, {} is in its final position", i + 1, arr[n - i - 1]),
                    format!("دور {} تمام شد، {} در جای نهایی خود است", i + 1, arr[n - i - 1]),
                ),
                highlight(None, None, sorted_tail(n, i + 1)),
            )
            .with_variables(watch(n, i, n - i - 2, swapped))
            .with_changed_var("i"),
        );
    }

    steps.push(
        Step::new(
            &arr,
            lines::DONE,
            Description::new("Bubble sort complete", "مرتب‌سازی حبابی کامل شد"),
            highlight(None, None, (0..n).collect()),
        )
        .with_variables(Variables::new().with("n", n).with("arr", arr.clone()))
        .with_changed_var("arr"),
    );

    debug!(len = n, steps = steps.len(), "bubble sort trace generated");
    StepSequence::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_comparison_then_swap() {
        let seq = generate(&[5, 2, 8, 1, 9]);
        assert_eq!(seq[0].line, lines::INIT);
        assert_eq!(seq[1].highlight.comparing(), Some([0, 1]));
        assert_eq!(seq[2].highlight.swapping(), Some([0, 1]));
        assert_eq!(seq[2].array, vec![2, 5, 8, 1, 9]);
    }

    #[test]
    fn test_final_step_is_sorted() {
        let seq = generate(&[5, 2, 8, 1, 9]);
        let last = seq.last().expect("non-empty");
        assert_eq!(last.array, vec![1, 2, 5, 8, 9]);
        assert_eq!(last.highlight.sorted(), &[0, 1, 2, 3, 4]);
        assert_eq!(last.line, lines::DONE);
    }

    #[test]
    fn test_equal_neighbours_never_swap() {
        let seq = generate(&[3, 3, 3]);
        assert!(seq.iter().all(|s| s.highlight.swapping().is_none()));
    }

    #[test]
    fn test_pass_marks_tail_sorted() {
        let seq = generate(&[3, 2, 1]);
        let pass_steps: Vec<&Step> = seq.iter().filter(|s| s.line == lines::PASS_END).collect();
        assert_eq!(pass_steps[0].highlight.sorted(), &[2]);
        assert_eq!(pass_steps[1].highlight.sorted(), &[1, 2]);
    }

    #[test]
    fn test_input_untouched() {
        let input = vec![4, 3, 2, 1];
        let _ = generate(&input);
        assert_eq!(input, vec![4, 3, 2, 1]);
    }
}
