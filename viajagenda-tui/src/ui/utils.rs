use crate::types::Status;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(popup_layout[1])[1]
}

/// Colored status pill, same palette as the web badges.
pub fn status_badge(status: Status) -> Span<'static> {
    let style = match status {
        Status::Pendente => Style::default().fg(Color::Black).bg(Color::Yellow),
        Status::Concluida => Style::default().fg(Color::White).bg(Color::Green),
        Status::Cancelada => Style::default().fg(Color::White).bg(Color::Red),
    };
    Span::styled(
        format!(" {} ", status.as_str()),
        style.add_modifier(Modifier::BOLD),
    )
}

/// `key: description` pairs for a Controls box.
pub fn control_spans(pairs: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (i, (key, label)) in pairs.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 < pairs.len() { "  " } else { "" };
        spans.push(Span::raw(format!(": {label}{sep}")));
    }
    spans
}

pub fn controls_paragraph(spans: Vec<Span<'static>>) -> Paragraph<'static> {
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controles ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        )
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 20, area);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));

        let small = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(60, 20, small), small);
    }

    #[test]
    fn control_spans_alternate_keys_and_labels() {
        let spans = control_spans(&[("Enter", "Abrir"), ("Q", "Sair")]);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, "Enter");
        assert_eq!(spans[1].content, ": Abrir  ");
        assert_eq!(spans[3].content, ": Sair");
    }
}
