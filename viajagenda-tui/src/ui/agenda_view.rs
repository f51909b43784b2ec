use super::utils::{control_spans, controls_paragraph, status_badge};
use super::*;
use crate::locale::capitalize;
use crate::types::Activity;

pub fn render_agenda_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Agenda
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(" Agenda ", Style::default().fg(Color::White)))
        .padding(Padding::horizontal(1));

    if !app.agenda_loaded || app.agenda.is_empty() {
        let message = if app.is_loading || !app.agenda_loaded {
            "Carregando..."
        } else {
            "Não há atividades cadastradas."
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, chunks[0]);
    } else {
        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_row = None;
        let mut entry_idx = 0;

        for month in &app.agenda {
            if !items.is_empty() {
                items.push(ListItem::new(""));
            }
            items.push(ListItem::new(Line::from(Span::styled(
                capitalize(&month.label),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))));
            for day in &month.days {
                items.push(ListItem::new(Line::from(Span::styled(
                    format!("── {} ──", day.label),
                    Style::default().fg(Color::Cyan),
                ))));
                for activity in &day.activities {
                    if app.agenda_selected == Some(entry_idx) {
                        selected_row = Some(items.len());
                    }
                    items.push(ListItem::new(activity_row(activity)));
                    entry_idx += 1;
                }
            }
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(selected_row);
        frame.render_stateful_widget(list, chunks[0], &mut state);
    }

    let controls = controls_paragraph(control_spans(&[
        ("↑↓/jk", "Navegar"),
        ("PgUp/PgDn", "Mês"),
        ("Enter", "Detalhes"),
        ("A", "Adicionar"),
        ("R", "Recarregar"),
        ("1-3", "Abas"),
        ("Q", "Sair"),
    ]));
    frame.render_widget(controls, chunks[1]);
}

/// Status, title, "CATEGORIA | Prioridade N" and the time span.
fn activity_row(activity: &Activity) -> Line<'static> {
    let category = activity
        .category
        .map(|c| c.as_str().to_string())
        .unwrap_or_else(|| "-".to_string());
    let priority = activity
        .priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut spans = vec![
        status_badge(activity.status),
        Span::raw(" "),
        Span::styled(
            activity.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {category} | Prioridade {priority}"),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(start) = activity.start_time.as_deref() {
        let start = start.get(..5).unwrap_or(start);
        let span = match activity.end_time.as_deref() {
            Some(end) => format!("  {start}-{}", end.get(..5).unwrap_or(end)),
            None => format!("  {start}"),
        };
        spans.push(Span::styled(span, Style::default().fg(Color::Magenta)));
    }
    Line::from(spans)
}
