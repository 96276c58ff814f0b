//! Variable watch pane
//!
//! Lists the current step's variables in insertion order. The variable the
//! step just changed is drawn bold on the current-line background.

use super::formatting::format_value_styled;
use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the variables pane
pub fn render_variables_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Variables ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(step) = step.filter(|s| !s.variables.is_empty()) else {
        let paragraph = Paragraph::new("(no variables)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let name_width = step
        .variables
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = step
        .variables
        .iter()
        .map(|(name, value)| {
            let changed = step.changed_var.as_deref() == Some(name);
            let name_style = if changed {
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let mut spans = vec![
                Span::styled(format!("{:<width$}", name, width = name_width), name_style),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            ];
            spans.extend(format_value_styled(value));

            if changed {
                for span in &mut spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(paragraph, area);
}
