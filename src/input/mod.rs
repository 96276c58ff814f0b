//! Input ingestion
//!
//! Turns the text a user types into the numeric array a generator expects.
//! Both `5, 2, 8` and `[5, 2, 8]` are accepted. The result is clamped to the
//! range the visualizer can draw: at most [`MAX_INPUT_LEN`] elements, each
//! between [`MIN_VALUE`] and [`MAX_VALUE`].
//!
//! [`XorShift64`] provides reproducible random arrays for seeding a fresh
//! session.

use crate::errors::InputError;
use tracing::debug;

pub const MIN_INPUT_LEN: usize = 2;
pub const MAX_INPUT_LEN: usize = 12;
pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 100;

/// Parse a comma list or JSON array of integers and clamp it
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let values = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<i64>>(trimmed).map_err(|e| InputError::MalformedJson {
            message: e.to_string(),
        })?
    } else {
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i64>().map_err(|_| InputError::NotANumber {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    if values.len() < MIN_INPUT_LEN {
        return Err(InputError::TooFew {
            got: values.len(),
            min: MIN_INPUT_LEN,
        });
    }

    let clamped = clamp(values);
    debug!(len = clamped.len(), "parsed input array");
    Ok(clamped)
}

/// Truncate to [`MAX_INPUT_LEN`] and pull every value into range
pub fn clamp(mut values: Vec<i64>) -> Vec<i64> {
    values.truncate(MAX_INPUT_LEN);
    for v in &mut values {
        *v = (*v).clamp(MIN_VALUE, MAX_VALUE);
    }
    values
}

/// Middle value of the sorted array, used when no search target is given
pub fn default_target(values: &[i64]) -> Option<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.get(sorted.len() / 2).copied()
}

/// Small deterministic PRNG (Marsaglia xorshift64)
///
/// Not `Copy`: copying would duplicate the stream.
#[derive(Clone, Debug)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Seed 0 is remapped, the all-zero state never advances.
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        XorShift64 { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-enough value in `min..=max`
    pub fn next_in(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as i64
    }
}

/// Random array of `size` values in `min..=max`
pub fn random_array(rng: &mut XorShift64, size: usize, min: i64, max: i64) -> Vec<i64> {
    (0..size).map(|_| rng.next_in(min, max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_list() {
        assert_eq!(parse_array("5, 2,8 ,1, 9"), Ok(vec![5, 2, 8, 1, 9]));
        assert_eq!(parse_array("3,4,"), Ok(vec![3, 4]));
    }

    #[test]
    fn test_parse_json_array() {
        assert_eq!(parse_array("[5, 2, 8]"), Ok(vec![5, 2, 8]));
        assert!(matches!(
            parse_array("[5, \"x\"]"),
            Err(InputError::MalformedJson { .. })
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_array("   "), Err(InputError::Empty));
        assert_eq!(
            parse_array("1, two, 3"),
            Err(InputError::NotANumber {
                token: "two".to_string()
            })
        );
        assert_eq!(parse_array("7"), Err(InputError::TooFew { got: 1, min: 2 }));
    }

    #[test]
    fn test_clamps_length_and_range() {
        let parsed = parse_array("0, 500, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12").expect("valid");
        assert_eq!(parsed.len(), MAX_INPUT_LEN);
        assert_eq!(parsed[0], MIN_VALUE);
        assert_eq!(parsed[1], MAX_VALUE);
    }

    #[test]
    fn test_default_target_is_median() {
        assert_eq!(default_target(&[9, 1, 5]), Some(5));
        assert_eq!(default_target(&[]), None);
    }

    #[test]
    fn test_random_array_is_reproducible_and_bounded() {
        let a = random_array(&mut XorShift64::new(7), 10, 1, 100);
        let b = random_array(&mut XorShift64::new(7), 10, 1, 100);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (1..=100).contains(v)));
        assert_eq!(XorShift64::new(0).next_in(5, 5), 5);
    }
}
