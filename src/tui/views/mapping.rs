//! Mapping step
//!
//! One row per CSV column: header, a sample value, and the target field

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the mapping step
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let schema = *app.wizard.schema();
    let identity_mapped = app.wizard.can_preview();

    let title = format!(
        " Map Columns ({} of {} mapped) ",
        app.wizard.mapping().mapped_count(),
        app.wizard.mapping().len()
    );
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if identity_mapped {
            Color::Cyan
        } else {
            Color::Yellow
        }));

    let widths = [
        Constraint::Length(24), // Column
        Constraint::Length(24), // Sample
        Constraint::Min(20),    // Field
    ];

    let header = Row::new(vec![
        Cell::from("Column").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Sample").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Field").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let document = app.wizard.document();
    let rows: Vec<Row> = app
        .wizard
        .mapping()
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let sample = document.and_then(|d| d.sample(i)).unwrap_or("");
            let field = match column.field {
                Some(key) => {
                    let marker = if schema.field(key).is_some_and(|f| f.required) {
                        " *"
                    } else {
                        ""
                    };
                    Cell::from(format!("{}{}", schema.label(key), marker))
                        .style(Style::default().fg(Color::Green))
                }
                None => Cell::from("(unmapped)").style(Style::default().fg(Color::DarkGray)),
            };
            Row::new(vec![
                Cell::from(column.header.clone()),
                Cell::from(sample.to_string()).style(Style::default().fg(Color::Gray)),
                field,
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_column));

    frame.render_stateful_widget(table, area, &mut state);
}
