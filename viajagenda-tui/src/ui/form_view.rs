use super::utils::{control_spans, controls_paragraph};
use super::widgets::{input_spans, select_spans};
use super::*;
use crate::app::{FormField, FormState};

pub fn render_form_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let form = &app.form;
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    for field in form.fields() {
        let focused = form.focused_field() == field;
        if focused {
            focused_line = lines.len();
        }
        lines.push(field_line(form, field, focused));
        if let Some(error) = form.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("    {error}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    if let Some(message) = &app.form_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" {} ", form.heading()),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::new(1, 1, 1, 0));
    let inner_height = block.inner(chunks[0]).height as usize;
    let scroll = focused_line.saturating_sub(inner_height.saturating_sub(3));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    let controls = controls_paragraph(control_spans(&[
        ("Tab/↓", "Próximo campo"),
        ("Shift+Tab/↑", "Anterior"),
        ("←→", "Opções"),
        ("Ctrl+S", "Salvar"),
        ("Esc", "Voltar"),
    ]));
    frame.render_widget(controls, chunks[1]);
}

/// `Label *: value`, with a marker on the focused field.
fn field_line(form: &FormState, field: FormField, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let required = if field.is_required() { " *" } else { "" };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if form.errors.get(field).is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{}{required}: ", field.label()), label_style),
    ];
    match field {
        FormField::Category => spans.extend(select_spans(
            form.category.map(|c| c.to_string()),
            focused,
        )),
        FormField::Priority => {
            spans.extend(select_spans(form.priority_label(), focused))
        }
        FormField::Status => {
            spans.extend(select_spans(Some(form.status.to_string()), focused))
        }
        _ => {
            if let Some(input) = form.input(field) {
                spans.extend(input_spans(input, focused, field.hint()));
            }
        }
    }
    if field == FormField::Category {
        if let Some(category) = form.category {
            spans.push(Span::styled(
                format!("  {}", category.image_path()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Line::from(spans)
}
