//! Step description pane

use crate::step::{Locale, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the description of the current step in `locale`
///
/// Persian text is right-aligned.
pub fn render_description_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, locale: Locale) {
    let block = Block::default()
        .title(format!(" Explanation [{}] ", locale.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let (text, style) = match step {
        Some(step) => (
            step.description.text(locale).to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        None => (
            "(no steps loaded)".to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    };

    let alignment = match locale {
        Locale::English => Alignment::Left,
        Locale::Persian => Alignment::Right,
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(style)
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
