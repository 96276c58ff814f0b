//! Binary search trace
//!
//! The input is cloned and sorted ascending before searching, so callers
//! may pass an unsorted array. Duplicates resolve to whichever index the
//! midpoint lands on first.

use super::pseudocode::binary_search as lines;
use crate::step::{
    Description, Highlight, SearchHighlight, SearchOutcome, Step, StepSequence, Variables,
};
use tracing::debug;

/// Search window state threaded through the trace
struct Window {
    n: usize,
    left: isize,
    right: isize,
    eliminated: Vec<usize>,
}

impl Window {
    fn bound(&self, index: isize) -> Option<usize> {
        if index >= 0 && (index as usize) < self.n {
            Some(index as usize)
        } else {
            None
        }
    }

    fn highlight(&self, mid: Option<usize>, outcome: SearchOutcome) -> Highlight {
        Highlight::Search(SearchHighlight {
            left: self.bound(self.left),
            right: self.bound(self.right),
            mid,
            eliminated: self.eliminated.clone(),
            outcome,
        })
    }

    fn watch(&self, target: i64, mid: Option<usize>) -> Variables {
        let mut vars = Variables::new()
            .with("target", target)
            .with("left", self.left as i64)
            .with("right", self.right as i64);
        if let Some(mid) = mid {
            vars.set("mid", mid);
        }
        vars
    }

    fn eliminate(&mut self, from: usize, to: usize) {
        self.eliminated.extend(from..=to);
        self.eliminated.sort_unstable();
        self.eliminated.dedup();
    }
}

/// Produce the step trace of searching `input` (after sorting) for `target`
pub fn generate(input: &[i64], target: i64) -> StepSequence {
    let mut arr = input.to_vec();
    arr.sort_unstable();
    let n = arr.len();
    let mut steps = Vec::new();

    let mut window = Window {
        n,
        left: 0,
        right: n as isize - 1,
        eliminated: Vec::new(),
    };

    steps.push(
        Step::new(
            &arr,
            lines::INIT,
            Description::new(
                format!(
                    "Search for {} in the sorted array: left = 0, right = {}",
                    target, window.right
                ),
                format!(
                    "جستجوی {} در آرایه مرتب: left = 0، right = {}",
                    target, window.right
                ),
            ),
            window.highlight(None, SearchOutcome::Searching),
        )
        .with_variables(window.watch(target, None).with("arr", arr.clone()))
        .with_changed_var("right"),
    );

    while window.left <= window.right {
        // Both bounds are non-negative inside the loop, so this is a floor.
        let mid = ((window.left + window.right) / 2) as usize;

        steps.push(
            Step::new(
                &arr,
                lines::MID,
                Description::new(
                    format!(
                        "mid = floor(({} + {}) / 2) = {}",
                        window.left, window.right, mid
                    ),
                    format!(
                        "وسط = floor(({} + {}) / 2) = {}",
                        window.left, window.right, mid
                    ),
                ),
                window.highlight(Some(mid), SearchOutcome::Searching),
            )
            .with_variables(window.watch(target, Some(mid)))
            .with_changed_var("mid"),
        );

        steps.push(
            Step::new(
                &arr,
                lines::COMPARE,
                Description::new(
                    format!("Compare arr[{}] = {} with target {}", mid, arr[mid], target),
                    format!("مقایسه arr[{}] = {} با هدف {}", mid, arr[mid], target),
                ),
                window.highlight(Some(mid), SearchOutcome::Searching),
            )
            .with_variables(window.watch(target, Some(mid)).with("arr[mid]", arr[mid])),
        );

        if arr[mid] == target {
            steps.push(
                Step::new(
                    &arr,
                    lines::FOUND,
                    Description::new(
                        format!("Found {} at index {}", target, mid),
                        format!("{} در خانه {} پیدا شد", target, mid),
                    ),
                    window.highlight(Some(mid), SearchOutcome::Found(mid)),
                )
                .with_variables(window.watch(target, Some(mid)).with("found", true)),
            );
            debug!(
                len = n,
                search_target = target,
                index = mid,
                steps = steps.len(),
                "binary search found target"
            );
            return StepSequence::new(steps);
        }

        if arr[mid] < target {
            window.eliminate(window.left as usize, mid);
            window.left = mid as isize + 1;
            steps.push(
                Step::new(
                    &arr,
                    lines::MOVE_LEFT,
                    Description::new(
                        format!(
                            "{} < {}, discard the left half: left = {}",
                            arr[mid], target, window.left
                        ),
                        format!(
                            "{} < {}، نیمه چپ حذف شد: left = {}",
                            arr[mid], target, window.left
                        ),
                    ),
                    window.highlight(Some(mid), SearchOutcome::Searching),
                )
                .with_variables(window.watch(target, Some(mid)))
                .with_changed_var("left"),
            );
        } else {
            window.eliminate(mid, window.right as usize);
            window.right = mid as isize - 1;
            steps.push(
                Step::new(
                    &arr,
                    lines::MOVE_RIGHT,
                    Description::new(
                        format!(
                            "{} > {}, discard the right half: right = {}",
                            arr[mid], target, window.right
                        ),
                        format!(
                            "{} > {}، نیمه راست حذف شد: right = {}",
                            arr[mid], target, window.right
                        ),
                    ),
                    window.highlight(Some(mid), SearchOutcome::Searching),
                )
                .with_variables(window.watch(target, Some(mid)))
                .with_changed_var("right"),
            );
        }
    }

    steps.push(
        Step::new(
            &arr,
            lines::NOT_FOUND,
            Description::new(
                format!("{} is not in the array", target),
                format!("{} در آرایه وجود ندارد", target),
            ),
            window.highlight(None, SearchOutcome::NotFound),
        )
        .with_variables(window.watch(target, None).with("found", false)),
    );

    debug!(
        len = n,
        search_target = target,
        steps = steps.len(),
        "binary search exhausted window"
    );
    StepSequence::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_before_searching() {
        let seq = generate(&[5, 2, 8, 1, 9], 8);
        assert_eq!(seq[0].array, vec![1, 2, 5, 8, 9]);
        let last = seq.last().expect("non-empty");
        assert!(last.found());
        assert_eq!(last.found_index(), Some(3));
        assert_eq!(last.line, lines::FOUND);
    }

    #[test]
    fn test_missing_target_reports_not_found() {
        let seq = generate(&[1, 2, 5, 8, 9], 6);
        let last = seq.last().expect("non-empty");
        assert!(last.not_found());
        assert!(!last.found());
        assert_eq!(last.found_index(), None);
    }

    #[test]
    fn test_single_element_compares_once() {
        let seq = generate(&[4], 7);
        let compares = seq.iter().filter(|s| s.line == lines::COMPARE).count();
        assert_eq!(compares, 1);
        assert!(seq.last().is_some_and(Step::not_found));
    }

    #[test]
    fn test_empty_array_goes_straight_to_not_found() {
        let seq = generate(&[], 3);
        assert_eq!(seq.len(), 2);
        assert!(seq[1].not_found());
    }

    #[test]
    fn test_eliminated_covers_discarded_half() {
        let seq = generate(&[1, 2, 5, 8, 9], 8);
        let moved = seq
            .iter()
            .find(|s| s.line == lines::MOVE_LEFT)
            .and_then(|s| s.highlight.search().cloned())
            .expect("left bound moves");
        assert_eq!(moved.eliminated, vec![0, 1, 2]);
        assert_eq!(moved.left, Some(3));
        assert_eq!(moved.right, Some(4));
    }

    #[test]
    fn test_steps_after_found_are_not_emitted() {
        let seq = generate(&[1, 2, 3], 2);
        // init, mid, compare, found
        assert_eq!(seq.len(), 4);
    }
}
