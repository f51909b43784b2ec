use crate::app::TextInput;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Input value with a block cursor when focused, or a dim placeholder when empty.
pub fn input_spans(
    input: &TextInput,
    focused: bool,
    placeholder: Option<&'static str>,
) -> Vec<Span<'static>> {
    let value_style = Style::default().fg(Color::White);
    if focused {
        let (before, after) = input.split_at_cursor();
        return vec![
            Span::styled(before.to_string(), value_style),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::styled(after.to_string(), value_style),
        ];
    }
    if input.value.is_empty() {
        return match placeholder {
            Some(text) => vec![Span::styled(text, placeholder_style())],
            None => Vec::new(),
        };
    }
    vec![Span::styled(input.value.clone(), value_style)]
}

/// `◀ VALUE ▶` for closed-set pickers.
pub fn select_spans(value: Option<String>, focused: bool) -> Vec<Span<'static>> {
    let arrow = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value = match value {
        Some(v) => Span::styled(v, Style::default().fg(Color::White)),
        None => Span::styled("Selecione", placeholder_style()),
    };
    vec![
        Span::styled("◀ ", arrow),
        value,
        Span::styled(" ▶", arrow),
    ]
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn focused_input_shows_cursor_at_position() {
        let mut input = TextInput::new();
        input.set("lapa");
        input.move_left();
        assert_eq!(text(&input_spans(&input, true, None)), "lap█a");
        assert_eq!(text(&input_spans(&input, false, None)), "lapa");
    }

    #[test]
    fn empty_unfocused_input_shows_placeholder() {
        let input = TextInput::new();
        assert_eq!(text(&input_spans(&input, false, Some("AAAA-MM-DD"))), "AAAA-MM-DD");
        assert_eq!(text(&select_spans(None, false)), "◀ Selecione ▶");
    }
}
