use crate::step::VarValue;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Format a watched value with styled spans
pub(crate) fn format_value_styled(value: &VarValue) -> Vec<Span<'static>> {
    match value {
        VarValue::Number(n) => vec![Span::styled(
            n.to_string(),
            Style::default().fg(DEFAULT_THEME.number),
        )],
        VarValue::Boolean(b) => vec![Span::styled(
            b.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::ITALIC),
        )],
        VarValue::Text(s) => vec![Span::styled(
            format!("\"{}\"", s),
            Style::default().fg(DEFAULT_THEME.secondary),
        )],
        VarValue::NumberArray(values) => {
            let bracket = Style::default().fg(DEFAULT_THEME.primary);
            let mut spans = vec![Span::styled("[", bracket)];
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(", ", Style::default().fg(DEFAULT_THEME.comment)));
                }
                spans.push(Span::styled(
                    v.to_string(),
                    Style::default().fg(DEFAULT_THEME.number),
                ));
            }
            spans.push(Span::styled("]", bracket));
            spans
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_spans_read_back_as_display() {
        let value = VarValue::NumberArray(vec![1, 5, 9]);
        let text: String = format_value_styled(&value)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, value.to_string());
    }
}
