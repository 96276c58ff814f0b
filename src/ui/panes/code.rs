//! Pseudocode pane with syntax highlighting, breakpoints and the current line
//!
//! The gutter shows, per line: a breakpoint dot, the line index (the value
//! breakpoints are keyed by) and an arrow on the line the current step
//! points at. When the pane is focused, the line cursor used for toggling
//! breakpoints is drawn reversed.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for pseudocode
fn highlight_pseudocode(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for (i, c) in line.char_indices() {
        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            let is_call = c == '(';
            spans.push(Span::styled(
                current_word.clone(),
                keyword_style(&current_word, is_call),
            ));
            current_word.clear();
        }

        let style = match c {
            '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            ':' | ',' => Style::default().fg(DEFAULT_THEME.comment),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(line[i..i + c.len_utf8()].to_string(), style));
    }

    if !current_word.is_empty() {
        let style = keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn keyword_style(word: &str, is_call: bool) -> Style {
    match word {
        "function" | "for" | "to" | "if" | "else" | "while" | "return" | "break" | "not" => {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        }
        "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Everything the code pane needs for one frame
pub struct CodeRenderData<'a> {
    pub listing: &'a [&'a str],
    pub current_line: Option<usize>,
    pub breakpoints: &'a [usize],
    pub cursor: usize,
    pub is_focused: bool,
}

/// Render the pseudocode pane
pub fn render_code_pane(frame: &mut Frame, area: Rect, data: &CodeRenderData<'_>) {
    let border_style = if data.is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Pseudocode ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<Line> = data
        .listing
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let is_current = data.current_line == Some(idx);
            let has_breakpoint = data.breakpoints.contains(&idx);

            let dot = if has_breakpoint {
                Span::styled("● ", Style::default().fg(DEFAULT_THEME.breakpoint))
            } else {
                Span::raw("  ")
            };

            let mut num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            if data.is_focused && data.cursor == idx {
                num_style = num_style.add_modifier(Modifier::REVERSED);
            }

            let arrow = if is_current {
                Span::styled("▶ ", Style::default().fg(DEFAULT_THEME.secondary))
            } else {
                Span::raw("  ")
            };

            let mut content = highlight_pseudocode(text);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![dot, Span::styled(format!("{:2} ", idx), num_style), arrow];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_keeps_text_intact() {
        let text = "    if arr[j] > arr[j + 1]:";
        let line = highlight_pseudocode(text);
        let rebuilt: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_keywords_are_bold() {
        assert!(keyword_style("while", false)
            .add_modifier
            .contains(Modifier::BOLD));
        assert_eq!(
            keyword_style("swap", true).fg,
            Some(DEFAULT_THEME.function)
        );
    }
}
