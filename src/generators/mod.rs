//! Step generators
//!
//! Each generator is a pure function from an input array (plus a target for
//! searching) to a complete [`StepSequence`]:
//!
//! - [`bubble`]: adjacent-swap sort with early exit
//! - [`selection`]: minimum-selection sort
//! - [`binary_search`]: iterative binary search over a sorted copy
//!
//! Generators copy their input before touching it and are fully
//! deterministic. Every trace starts with an initial step and ends with
//! exactly one terminal step. The `line` of every step indexes into the
//! listing returned by [`Algorithm::pseudocode`].

pub mod binary_search;
pub mod bubble;
pub mod pseudocode;
pub mod selection;

use crate::errors::InputError;
use crate::step::StepSequence;

/// The algorithms a trace can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    BinarySearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::BinarySearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::BinarySearch => "Binary Search",
        }
    }

    /// The fixed listing that `Step::line` indexes into
    pub fn pseudocode(self) -> &'static [&'static str] {
        match self {
            Algorithm::BubbleSort => pseudocode::BUBBLE_SORT,
            Algorithm::SelectionSort => pseudocode::SELECTION_SORT,
            Algorithm::BinarySearch => pseudocode::BINARY_SEARCH,
        }
    }

    pub fn needs_target(self) -> bool {
        matches!(self, Algorithm::BinarySearch)
    }

    /// Run the generator for this algorithm
    ///
    /// `target` is ignored by the sorting algorithms and required for
    /// binary search.
    pub fn generate(self, input: &[i64], target: Option<i64>) -> Result<StepSequence, InputError> {
        match self {
            Algorithm::BubbleSort => Ok(bubble::generate(input)),
            Algorithm::SelectionSort => Ok(selection::generate(input)),
            Algorithm::BinarySearch => {
                let target = target.ok_or(InputError::MissingTarget)?;
                Ok(binary_search::generate(input, target))
            }
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_requires_target() {
        assert_eq!(
            Algorithm::BinarySearch.generate(&[1, 2, 3], None),
            Err(InputError::MissingTarget)
        );
        assert!(Algorithm::BubbleSort.generate(&[1, 2, 3], None).is_ok());
    }

    #[test]
    fn test_every_step_line_is_inside_its_listing() {
        let input = [9, 4, 7, 1, 4, 3];
        for algorithm in Algorithm::ALL {
            let seq = algorithm
                .generate(&input, Some(7))
                .expect("generation succeeds");
            let listing_len = algorithm.pseudocode().len();
            assert!(seq.iter().all(|s| s.line < listing_len), "{}", algorithm);
        }
    }
}
