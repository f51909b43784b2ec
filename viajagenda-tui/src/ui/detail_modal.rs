use super::utils::{centered_rect, status_badge};
use super::widgets::placeholder_style;
use super::*;
use crate::app::detail_lines;

const MODAL_WIDTH: u16 = 76;
// Blank spacer plus two rows for the action hints or the delete prompt.
const FOOTER_HEIGHT: u16 = 3;

pub fn render_detail_modal(frame: &mut Frame, app: &mut App) {
    let Some(detail) = app.detail.as_mut() else {
        return;
    };
    let activity = &detail.activity;

    let mut lines = vec![Line::from("")];
    for line in detail_lines(activity) {
        let value_style = if line.missing {
            placeholder_style()
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", line.label),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(line.value, value_style),
        ]));
    }
    if let Some(category) = activity.category {
        lines.push(Line::from(Span::styled(
            format!("Imagem: {}", category.image_path()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Borders and horizontal padding take two columns each side.
    let frame_area = frame.area();
    let text_width = MODAL_WIDTH.min(frame_area.width).saturating_sub(4).max(1);
    let field_rows = wrapped_rows(&lines, text_width);
    let height = field_rows.saturating_add(FOOTER_HEIGHT + 2);
    let area = centered_rect(MODAL_WIDTH, height, frame_area);
    frame.render_widget(Clear, area);

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            activity.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        status_badge(activity.status),
        Span::raw(" "),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                // Fields
            Constraint::Length(FOOTER_HEIGHT), // Actions or delete prompt
        ])
        .split(inner);

    let max_scroll = field_rows.saturating_sub(chunks[0].height);
    detail.scroll = detail.scroll.min(max_scroll);
    let fields = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((detail.scroll, 0));
    frame.render_widget(fields, chunks[0]);

    let mut footer = vec![Line::from("")];
    if detail.confirm_delete {
        footer.push(Line::from(Span::styled(
            "Deseja realmente excluir esta atividade?",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
        footer.push(Line::from(vec![
            Span::styled("[y] Sim", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] Não", Style::default().fg(Color::White)),
        ]));
    } else {
        footer.push(Line::from(vec![
            Span::styled("[c]", Style::default().fg(Color::Green)),
            Span::raw(" Concluir  "),
            Span::styled("[x]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancelar  "),
            Span::styled("[e]", Style::default().fg(Color::Cyan)),
            Span::raw(" Editar  "),
            Span::styled("[d]", Style::default().fg(Color::Red)),
            Span::raw(" Excluir"),
        ]));
        footer.push(Line::from(vec![
            Span::styled("[o]", Style::default().fg(Color::Blue)),
            Span::raw(" Abrir no Maps  "),
            Span::styled("[↑↓]", Style::default().fg(Color::DarkGray)),
            Span::raw(" Rolar  "),
            Span::styled("[Esc]", Style::default().fg(Color::DarkGray)),
            Span::raw(" Fechar"),
        ]));
    }
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

/// Rows the lines occupy once wrapped at `width`. A wrapped line gets one
/// extra row because word wrapping rarely fills every row.
fn wrapped_rows(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| {
            let needed = line.width().div_ceil(width).max(1);
            if needed > 1 {
                needed + 1
            } else {
                needed
            }
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
