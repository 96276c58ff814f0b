//! Step model shared by every generator and consumed by the player
//!
//! A [`Step`] is an immutable snapshot of an algorithm at one point of its
//! trace. Every step owns its own copy of the array, so no two steps alias
//! each other's data. A finished trace is wrapped in a [`StepSequence`],
//! which is cheap to clone and can never be mutated after creation.
//!
//! # Highlights
//!
//! Each algorithm family marks a different subset of indices. Instead of a
//! bag of optional fields, [`Highlight`] is a tagged union:
//!
//! - [`Highlight::Bubble`]: comparing / swapping / sorted
//! - [`Highlight::Selection`]: the same plus the running minimum
//! - [`Highlight::Search`]: window bounds, midpoint, eliminated indices and
//!   the terminal [`SearchOutcome`]
//!
//! Renderers pattern-match on the variant and fall back to a neutral look
//! for anything a variant does not carry.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Index;
use std::sync::Arc;

/// Language used when rendering a [`Description`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Persian,
}

impl Locale {
    pub fn toggle(self) -> Self {
        match self {
            Locale::English => Locale::Persian,
            Locale::Persian => Locale::English,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::English => "EN",
            Locale::Persian => "FA",
        }
    }
}

/// Human-readable explanation of a step, in both supported locales
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Description {
    pub en: String,
    pub fa: String,
}

impl Description {
    pub fn new(en: impl Into<String>, fa: impl Into<String>) -> Self {
        Description {
            en: en.into(),
            fa: fa.into(),
        }
    }

    pub fn text(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.en,
            Locale::Persian => &self.fa,
        }
    }
}

/// A watched variable value
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum VarValue {
    Number(i64),
    Text(String),
    Boolean(bool),
    NumberArray(Vec<i64>),
}

impl VarValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            VarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for VarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarValue::Number(n) => write!(f, "{}", n),
            VarValue::Text(s) => write!(f, "\"{}\"", s),
            VarValue::Boolean(b) => write!(f, "{}", b),
            VarValue::NumberArray(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for VarValue {
    fn from(n: i64) -> Self {
        VarValue::Number(n)
    }
}

impl From<usize> for VarValue {
    fn from(n: usize) -> Self {
        VarValue::Number(n as i64)
    }
}

impl From<bool> for VarValue {
    fn from(b: bool) -> Self {
        VarValue::Boolean(b)
    }
}

impl From<&str> for VarValue {
    fn from(s: &str) -> Self {
        VarValue::Text(s.to_string())
    }
}

impl From<Vec<i64>> for VarValue {
    fn from(values: Vec<i64>) -> Self {
        VarValue::NumberArray(values)
    }
}

/// Debug-watch snapshot: variable name -> value, kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variables {
    entries: Vec<(String, VarValue)>,
}

impl Variables {
    pub fn new() -> Self {
        Variables {
            entries: Vec::new(),
        }
    }

    /// Insert a variable, replacing the value in place if the name exists
    pub fn set(&mut self, name: &str, value: impl Into<VarValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Builder form of [`Variables::set`]
    pub fn with(mut self, name: &str, value: impl Into<VarValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Highlights for adjacent-swap sorting
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct BubbleHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparing: Option<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapping: Option<[usize; 2]>,
    pub sorted: Vec<usize>,
}

/// Highlights for minimum-selection sorting
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct SelectionHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparing: Option<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapping: Option<[usize; 2]>,
    pub sorted: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_index: Option<usize>,
}

/// Where a search currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(tag = "status", content = "index", rename_all = "snake_case")]
pub enum SearchOutcome {
    #[default]
    Searching,
    Found(usize),
    NotFound,
}

/// Highlights for binary search
///
/// A bound is `None` once it leaves the array: `right` after the window
/// collapses below index 0, `left` after it moves past the last index.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct SearchHighlight {
    pub left: Option<usize>,
    pub right: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    pub eliminated: Vec<usize>,
    pub outcome: SearchOutcome,
}

/// Per-algorithm highlight payload of a step
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Highlight {
    Bubble(BubbleHighlight),
    Selection(SelectionHighlight),
    Search(SearchHighlight),
}

impl Highlight {
    /// Indices currently being compared (sorting only)
    pub fn comparing(&self) -> Option<[usize; 2]> {
        match self {
            Highlight::Bubble(h) => h.comparing,
            Highlight::Selection(h) => h.comparing,
            Highlight::Search(_) => None,
        }
    }

    /// Indices currently being exchanged (sorting only)
    pub fn swapping(&self) -> Option<[usize; 2]> {
        match self {
            Highlight::Bubble(h) => h.swapping,
            Highlight::Selection(h) => h.swapping,
            Highlight::Search(_) => None,
        }
    }

    /// Indices already in their final position
    pub fn sorted(&self) -> &[usize] {
        match self {
            Highlight::Bubble(h) => &h.sorted,
            Highlight::Selection(h) => &h.sorted,
            Highlight::Search(_) => &[],
        }
    }

    pub fn min_index(&self) -> Option<usize> {
        match self {
            Highlight::Selection(h) => h.min_index,
            _ => None,
        }
    }

    pub fn search(&self) -> Option<&SearchHighlight> {
        match self {
            Highlight::Search(h) => Some(h),
            _ => None,
        }
    }
}

/// Immutable snapshot of algorithm state
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Step {
    /// Full array state at this point
    pub array: Vec<i64>,
    /// Index into the algorithm's pseudocode listing
    pub line: usize,
    pub description: Description,
    pub variables: Variables,
    /// Name of the variable mutated by this step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_var: Option<String>,
    pub highlight: Highlight,
}

impl Step {
    /// Create a step holding a fresh copy of `array`
    pub fn new(array: &[i64], line: usize, description: Description, highlight: Highlight) -> Self {
        Step {
            array: array.to_vec(),
            line,
            description,
            variables: Variables::new(),
            changed_var: None,
            highlight,
        }
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_changed_var(mut self, name: &str) -> Self {
        self.changed_var = Some(name.to_string());
        self
    }

    /// Terminal search result, if this step belongs to a search trace
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.highlight.search().map(|h| h.outcome)
    }

    pub fn found(&self) -> bool {
        matches!(self.outcome(), Some(SearchOutcome::Found(_)))
    }

    pub fn found_index(&self) -> Option<usize> {
        match self.outcome() {
            Some(SearchOutcome::Found(index)) => Some(index),
            _ => None,
        }
    }

    pub fn not_found(&self) -> bool {
        matches!(self.outcome(), Some(SearchOutcome::NotFound))
    }
}

/// Ordered, finite, immutable list of steps from one generator run
///
/// Clones share the same backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    steps: Arc<[Step]>,
}

impl StepSequence {
    pub fn new(steps: Vec<Step>) -> Self {
        StepSequence {
            steps: steps.into(),
        }
    }

    pub fn empty() -> Self {
        StepSequence::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }
}

impl Default for StepSequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl Serialize for StepSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.steps.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_step(line: usize) -> Step {
        Step::new(
            &[3, 1, 2],
            line,
            Description::new("Start", "شروع"),
            Highlight::Bubble(BubbleHighlight::default()),
        )
    }

    #[test]
    fn test_variables_preserve_insertion_order_and_replace_in_place() {
        let mut vars = Variables::new().with("n", 3i64).with("i", 0usize);
        vars.set("n", 4i64);
        vars.set("swapped", false);

        let names: Vec<&str> = vars.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["n", "i", "swapped"]);
        assert_eq!(vars.get("n").and_then(VarValue::as_number), Some(4));
        assert_eq!(vars.get("swapped").and_then(VarValue::as_bool), Some(false));
    }

    #[test]
    fn test_step_owns_its_array() {
        let mut source = vec![5, 4];
        let step = Step::new(
            &source,
            0,
            Description::new("a", "b"),
            Highlight::Bubble(BubbleHighlight::default()),
        );
        source[0] = 99;
        assert_eq!(step.array, vec![5, 4]);
    }

    #[test]
    fn test_sequence_clones_share_storage() {
        let seq = StepSequence::new(vec![sample_step(0), sample_step(1)]);
        let clone = seq.clone();
        assert!(std::ptr::eq(seq.as_slice(), clone.as_slice()));
        assert_eq!(clone[1].line, 1);
    }

    #[test]
    fn test_var_value_display() {
        assert_eq!(VarValue::NumberArray(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(VarValue::Text("hi".into()).to_string(), "\"hi\"");
        assert_eq!(VarValue::Boolean(true).to_string(), "true");
    }

    #[test]
    fn test_step_serializes_with_kind_tag() {
        let step = sample_step(2).with_changed_var("i");
        let json = serde_json::to_value(&step).expect("serialize");
        assert_eq!(json["line"], 2);
        assert_eq!(json["highlight"]["kind"], "bubble");
        assert_eq!(json["changed_var"], "i");
        assert_eq!(json["description"]["fa"], "شروع");
    }

    #[test]
    fn test_search_outcome_accessors() {
        let step = Step::new(
            &[1, 2],
            5,
            Description::new("found", "پیدا شد"),
            Highlight::Search(SearchHighlight {
                outcome: SearchOutcome::Found(1),
                ..SearchHighlight::default()
            }),
        );
        assert!(step.found());
        assert_eq!(step.found_index(), Some(1));
        assert!(!step.not_found());
        assert_eq!(sample_step(0).outcome(), None);
    }
}
