use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::tui::app::{App, Field};
use crate::utils::report::{self, TABLE_HEADERS};

pub fn draw(frame: &mut Frame, app: &App) {
    let table_height = app.mode.category_count() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(table_height),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let title = Paragraph::new(format!("🏆 {} Points Calculator", app.mode.display_name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_selectors(frame, app, chunks[1]);
    draw_points_input(frame, app, chunks[2]);
    draw_weights(frame, app, chunks[3]);
    draw_summary(frame, app, chunks[4]);
    draw_table(frame, app, chunks[5]);
    draw_status(frame, app, chunks[6]);
}

fn field_block(app: &App, field: Field, title: String) -> Block<'static> {
    let style = if app.focus == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default().borders(Borders::ALL).border_style(style).title(title)
}

fn draw_selectors(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let mode = Paragraph::new(format!("◀ {} ▶", app.mode.display_name()))
        .alignment(Alignment::Center)
        .block(field_block(app, Field::Mode, "Mode".to_string()));
    frame.render_widget(mode, chunks[0]);

    let badge = app.selected_badge();
    let badge = Paragraph::new(format!("◀ {} ▶", badge.display()))
        .alignment(Alignment::Center)
        .block(field_block(app, Field::Badge, "Goal badge".to_string()));
    frame.render_widget(badge, chunks[1]);
}

fn draw_points_input(frame: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.points_input.as_str())
        .block(field_block(app, Field::Points, "Current points".to_string()));
    frame.render_widget(input, area);

    if app.focus == Field::Points {
        frame.set_cursor(area.x + app.points_input.len() as u16 + 1, area.y + 1);
    }
}

fn draw_weights(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.weight_inputs.len().max(1) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let templates = app.mode.category_templates();
    for (i, input) in app.weight_inputs.iter().enumerate() {
        let name = templates.get(i).map(|t| t.name).unwrap_or("?");
        let field = Field::Weight(i);
        let weight = Paragraph::new(format!("{}%", input))
            .alignment(Alignment::Right)
            .block(field_block(app, field, name.to_string()));
        frame.render_widget(weight, chunks[i]);

        if app.focus == field {
            frame.set_cursor(chunks[i].x + 1, chunks[i].y + 1);
        }
    }
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match &app.result {
        Some(result) => report::summary_lines(result)
            .into_iter()
            .map(Line::from)
            .collect(),
        None => vec![Line::from("Enter info and press Enter to calculate")],
    };

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Projection"))
        .wrap(Wrap { trim: true });
    frame.render_widget(summary, area);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .result
        .as_ref()
        .map(report::table_rows)
        .unwrap_or_default()
        .into_iter()
        .map(|cells| Row::new(cells.into_iter().map(Cell::from)))
        .collect();

    let header = Row::new(TABLE_HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(40),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Games per round type"));
    frame.render_widget(table, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" next field | "),
        Span::styled("←/→", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" change | "),
        Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" calculate | "),
        Span::styled("Esc", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ];

    if let Some(error) = &app.error_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}
