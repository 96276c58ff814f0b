// Pseudocode listings and the line indices steps point at

/// Bubble sort with early exit
pub const BUBBLE_SORT: &[&str] = &[
    "function bubbleSort(arr):",
    "  n = length(arr)",
    "  for i = 0 to n - 2:",
    "    swapped = false",
    "    for j = 0 to n - i - 2:",
    "      if arr[j] > arr[j + 1]:",
    "        swap(arr[j], arr[j + 1])",
    "        swapped = true",
    "    if not swapped:",
    "      break",
    "  return arr",
];

pub mod bubble {
    pub const INIT: usize = 1;
    pub const COMPARE: usize = 5;
    pub const SWAP: usize = 6;
    pub const PASS_END: usize = 8;
    pub const EARLY_EXIT: usize = 9;
    pub const DONE: usize = 10;
}

/// Selection sort
pub const SELECTION_SORT: &[&str] = &[
    "function selectionSort(arr):",
    "  n = length(arr)",
    "  for i = 0 to n - 2:",
    "    minIdx = i",
    "    for j = i + 1 to n - 1:",
    "      if arr[j] < arr[minIdx]:",
    "        minIdx = j",
    "    if minIdx != i:",
    "      swap(arr[i], arr[minIdx])",
    "  return arr",
];

pub mod selection {
    pub const INIT: usize = 1;
    pub const PASS_END: usize = 2;
    pub const MIN_START: usize = 3;
    pub const COMPARE: usize = 5;
    pub const NEW_MIN: usize = 6;
    pub const SWAP: usize = 8;
    pub const DONE: usize = 9;
}

/// Iterative binary search over an ascending array
pub const BINARY_SEARCH: &[&str] = &[
    "function binarySearch(arr, target):",
    "  left = 0, right = n - 1",
    "  while left <= right:",
    "    mid = floor((left + right) / 2)",
    "    if arr[mid] == target:",
    "      return mid",
    "    else if arr[mid] < target:",
    "      left = mid + 1",
    "    else:",
    "      right = mid - 1",
    "  return -1",
];

pub mod binary_search {
    pub const INIT: usize = 1;
    pub const MID: usize = 3;
    pub const COMPARE: usize = 4;
    pub const FOUND: usize = 5;
    pub const MOVE_LEFT: usize = 7;
    pub const MOVE_RIGHT: usize = 9;
    pub const NOT_FOUND: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constants_index_into_listings() {
        for line in [
            bubble::INIT,
            bubble::COMPARE,
            bubble::SWAP,
            bubble::PASS_END,
            bubble::EARLY_EXIT,
            bubble::DONE,
        ] {
            assert!(line < BUBBLE_SORT.len());
        }
        for line in [
            selection::INIT,
            selection::PASS_END,
            selection::MIN_START,
            selection::COMPARE,
            selection::NEW_MIN,
            selection::SWAP,
            selection::DONE,
        ] {
            assert!(line < SELECTION_SORT.len());
        }
        for line in [
            binary_search::INIT,
            binary_search::MID,
            binary_search::COMPARE,
            binary_search::FOUND,
            binary_search::MOVE_LEFT,
            binary_search::MOVE_RIGHT,
            binary_search::NOT_FOUND,
        ] {
            assert!(line < BINARY_SEARCH.len());
        }
    }

    #[test]
    fn test_listing_text_matches_line_roles() {
        assert!(BUBBLE_SORT[bubble::SWAP].contains("swap"));
        assert!(SELECTION_SORT[selection::NEW_MIN].contains("minIdx = j"));
        assert!(BINARY_SEARCH[binary_search::NOT_FOUND].contains("-1"));
    }
}
