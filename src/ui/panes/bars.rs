//! Bar chart of the current array state
//!
//! Each element is drawn as a bar whose colour reflects the role the
//! current step assigns to its index. Roles are resolved by [`bar_role`],
//! which pattern-matches the step's highlight variant; anything a variant
//! does not mark is drawn neutral.

use crate::step::{Highlight, SearchOutcome, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// What a single bar represents in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Neutral,
    Comparing,
    Swapping,
    Sorted,
    MinIndex,
    Mid,
    Eliminated,
    Found,
}

impl BarRole {
    fn color(self) -> Color {
        match self {
            BarRole::Neutral => DEFAULT_THEME.bar,
            BarRole::Comparing => DEFAULT_THEME.comparing,
            BarRole::Swapping => DEFAULT_THEME.swapping,
            BarRole::Sorted | BarRole::Found => DEFAULT_THEME.success,
            BarRole::MinIndex => DEFAULT_THEME.min_index,
            BarRole::Mid => DEFAULT_THEME.secondary,
            BarRole::Eliminated => DEFAULT_THEME.eliminated,
        }
    }
}

/// Resolve the role of `index` under `highlight`
///
/// Active markers (swap, compare, mid) win over passive ones (sorted,
/// eliminated).
pub fn bar_role(highlight: &Highlight, index: usize) -> BarRole {
    let in_pair = |pair: Option<[usize; 2]>| pair.is_some_and(|p| p.contains(&index));

    match highlight {
        Highlight::Bubble(h) => {
            if in_pair(h.swapping) {
                BarRole::Swapping
            } else if in_pair(h.comparing) {
                BarRole::Comparing
            } else if h.sorted.contains(&index) {
                BarRole::Sorted
            } else {
                BarRole::Neutral
            }
        }
        Highlight::Selection(h) => {
            if in_pair(h.swapping) {
                BarRole::Swapping
            } else if in_pair(h.comparing) && h.min_index != Some(index) {
                BarRole::Comparing
            } else if h.min_index == Some(index) {
                BarRole::MinIndex
            } else if h.sorted.contains(&index) {
                BarRole::Sorted
            } else {
                BarRole::Neutral
            }
        }
        Highlight::Search(h) => {
            if h.outcome == SearchOutcome::Found(index) {
                BarRole::Found
            } else if h.mid == Some(index) {
                BarRole::Mid
            } else if h.eliminated.contains(&index) || h.outcome == SearchOutcome::NotFound {
                BarRole::Eliminated
            } else {
                BarRole::Neutral
            }
        }
    }
}

/// Window marker shown under a bar for search steps
fn bound_label(highlight: &Highlight, index: usize) -> String {
    let Some(h) = highlight.search() else {
        return index.to_string();
    };
    let mut label = String::new();
    if h.left == Some(index) {
        label.push('L');
    }
    if h.mid == Some(index) {
        label.push('M');
    }
    if h.right == Some(index) {
        label.push('R');
    }
    if label.is_empty() {
        index.to_string()
    } else {
        label
    }
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(step) = step.filter(|s| !s.array.is_empty()) else {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let n = step.array.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(n.saturating_sub(1)) / n.max(1)).clamp(1, 7);
    let max = step.array.iter().copied().max().unwrap_or(1).max(1) as u64;

    let bars: Vec<Bar> = step
        .array
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = bar_role(&step.highlight, i).color();
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(bound_label(&step.highlight, i)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(max);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{BubbleHighlight, SearchHighlight, SelectionHighlight};

    #[test]
    fn test_bubble_roles() {
        let h = Highlight::Bubble(BubbleHighlight {
            comparing: Some([0, 1]),
            swapping: None,
            sorted: vec![3],
        });
        assert_eq!(bar_role(&h, 0), BarRole::Comparing);
        assert_eq!(bar_role(&h, 2), BarRole::Neutral);
        assert_eq!(bar_role(&h, 3), BarRole::Sorted);
    }

    #[test]
    fn test_selection_minimum_beats_comparing() {
        let h = Highlight::Selection(SelectionHighlight {
            comparing: Some([2, 1]),
            min_index: Some(1),
            ..SelectionHighlight::default()
        });
        assert_eq!(bar_role(&h, 1), BarRole::MinIndex);
        assert_eq!(bar_role(&h, 2), BarRole::Comparing);
    }

    #[test]
    fn test_search_roles_and_labels() {
        let h = Highlight::Search(SearchHighlight {
            left: Some(3),
            right: Some(4),
            mid: Some(3),
            eliminated: vec![0, 1, 2],
            outcome: SearchOutcome::Searching,
        });
        assert_eq!(bar_role(&h, 1), BarRole::Eliminated);
        assert_eq!(bar_role(&h, 3), BarRole::Mid);
        assert_eq!(bound_label(&h, 3), "LM");
        assert_eq!(bound_label(&h, 4), "R");
        assert_eq!(bound_label(&h, 0), "0");
    }
}
