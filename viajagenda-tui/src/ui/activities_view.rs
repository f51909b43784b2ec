use super::utils::{border_style, control_spans, controls_paragraph, status_badge};
use super::widgets::{input_spans, placeholder_style, select_spans};
use super::*;
use crate::app::{ActivitiesFocus, FilterField};
use crate::locale::format_date_br;
use crate::types::Activity;

const CARD_WIDTH: u16 = 32;
const CARD_HEIGHT: u16 = 6;

pub fn render_activities_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filters
            Constraint::Min(0),    // Cards
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_filters(frame, app, chunks[0]);
    render_cards(frame, app, chunks[1]);

    let controls = match app.activities_focus {
        ActivitiesFocus::Filters => control_spans(&[
            ("Tab", "Próximo filtro"),
            ("←→", "Opções"),
            ("Enter", "Buscar"),
            ("Ctrl+X", "Limpar"),
            ("↓/Esc", "Cards"),
        ]),
        ActivitiesFocus::Cards => control_spans(&[
            ("←↑↓→/hjkl", "Navegar"),
            ("Enter", "Detalhes"),
            ("F", "Filtros"),
            ("Ctrl+X", "Limpar"),
            ("A", "Adicionar"),
            ("1-3", "Abas"),
            ("Q", "Sair"),
        ]),
    };
    frame.render_widget(controls_paragraph(controls), chunks[2]);
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(22),
        ])
        .split(area);

    let filters_focused = app.activities_focus == ActivitiesFocus::Filters;
    for (idx, field) in FilterField::ALL.into_iter().enumerate() {
        let focused = filters_focused && app.filter.focused_field() == field;
        let spans = match field {
            FilterField::Title => input_spans(&app.filter.title, focused, None),
            FilterField::Date => input_spans(&app.filter.date, focused, Some("AAAA-MM-DD")),
            _ if focused || app.filter.display_value(field).is_some() => {
                select_spans(app.filter.display_value(field), focused)
            }
            _ => vec![Span::styled("Todos", placeholder_style())],
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(Span::styled(
                format!(" {} ", field.placeholder()),
                border_style(focused),
            ));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), cols[idx]);
    }
}

fn render_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(" Atividades ({}) ", app.activities.len()),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // A message replaces the grid; an empty list without one stays blank.
    if let Some(message) = &app.list_message {
        let paragraph = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
        return;
    }
    if app.activities.is_empty() {
        return;
    }

    let columns = (inner.width / CARD_WIDTH).max(1) as usize;
    app.cards_per_row = columns;
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.selected_card / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let card_width = inner.width / columns as u16;
    let cards_focused = app.activities_focus == ActivitiesFocus::Cards;

    for (idx, activity) in app.activities.iter().enumerate() {
        let row = idx / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let card_area = Rect {
            x: inner.x + (idx % columns) as u16 * card_width,
            y: inner.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT.min(inner.height),
        };
        let selected = cards_focused && idx == app.selected_card;
        render_card(frame, activity, selected, card_area);
    }
}

/// Status badge, title, category and `dd/MM/yyyy` date.
fn render_card(frame: &mut Frame, activity: &Activity, selected: bool, area: Rect) {
    let date = activity
        .date
        .as_deref()
        .map(format_date_br)
        .unwrap_or_default();
    let category = activity
        .category
        .map(|c| c.as_str().to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(status_badge(activity.status)),
        Line::from(Span::styled(
            activity.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(category, Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(date, Style::default().fg(Color::Gray))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(selected));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
