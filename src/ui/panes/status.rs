//! Status bar rendering with keybindings and state indicators

use crate::playback::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows for one frame
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed_ms: u64,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step counter, speed and message
    let step_text = if data.total_steps == 0 {
        " Step -/- ".to_string()
    } else {
        format!(" Step {}/{} ", data.current_step + 1, data.total_steps)
    };

    let bar_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}ms ", data.speed_ms),
            bar_bg.fg(DEFAULT_THEME.number),
        ),
        Span::styled(" | ", bar_bg.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", data.message), bar_bg.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_bg)
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.fg);
    let sep_style = bar_bg.fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" b ", " breakpoint "),
        (" +/- ", " speed "),
        (" l ", " lang "),
        (" n ", " new "),
        (" q ", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let indicator = match data.state {
        PlaybackState::Playing => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlaybackState::Finished => Some((" END ", DEFAULT_THEME.error)),
        PlaybackState::Ready if data.current_step == 0 => Some((" START ", DEFAULT_THEME.success)),
        PlaybackState::Ready | PlaybackState::Idle => None,
    };

    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_bg)
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
