use crate::app::{App, FormMode, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

mod activities_view;
mod agenda_view;
mod detail_modal;
mod form_view;
pub(super) mod utils;
pub(super) mod widgets;

const BRAND: &str = " ViajAgenda";

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_nav_bar(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Agenda => agenda_view::render_agenda_view(frame, app, body),
        View::Activities => activities_view::render_activities_view(frame, app, body),
        View::Form => form_view::render_form_view(frame, app, body),
    }

    render_status_line(frame, root[2], app);

    // Modal renders on top of whichever list opened it
    if app.detail.is_some() {
        detail_modal::render_detail_modal(frame, app);
    }
}

/// Brand with throbber, then the three tabs; the active one is highlighted.
fn render_nav_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let title_width = 1 + BRAND.len() as u16 + 2;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(title_width), Constraint::Min(0)])
        .split(area);

    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        label_area,
    );

    let active = match app.current_view {
        View::Agenda => Some(0),
        View::Activities => Some(1),
        View::Form if app.form.mode == FormMode::Create => Some(2),
        View::Form => None,
    };
    let mut spans = Vec::new();
    for (idx, label) in ["1 Agenda", "2 Atividades", "3 Adicionar"].into_iter().enumerate() {
        let style = if active == Some(idx) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    if let FormMode::Edit(id) = app.form.mode {
        if app.current_view == View::Form {
            spans.push(Span::styled(
                format!(" Editando #{id} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), cols[1]);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(if app.status_is_error {
                Color::Red
            } else {
                Color::Green
            }),
        )),
        None => Line::from(vec![
            Span::styled(" F1-F3", Style::default().fg(Color::DarkGray)),
            Span::styled(": Navegar  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Ctrl+Q", Style::default().fg(Color::DarkGray)),
            Span::styled(": Sair", Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
