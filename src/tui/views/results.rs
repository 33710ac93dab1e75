//! Results step
//!
//! Counts returned by the server and its per-row errors

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::RESULT_ERROR_LIMIT;

/// Render the results step
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(result) = app.wizard.result() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut counts = vec![
        Span::styled(format!("{}", result.imported), bold.fg(Color::Green)),
        Span::raw(" imported   "),
        Span::styled(
            format!("{}", result.errors),
            bold.fg(if result.errors > 0 {
                Color::Red
            } else {
                Color::Green
            }),
        ),
        Span::raw(" errors"),
    ];
    for (label, value) in [
        ("created", result.created),
        ("updated", result.updated),
        ("skipped", result.skipped),
    ] {
        if let Some(value) = value {
            counts.push(Span::raw(format!("   {} {}", value, label)));
        }
    }

    let heading = if result.is_clean() {
        Line::from(Span::styled("Import complete", bold.fg(Color::Green)))
    } else {
        Line::from(Span::styled("Import complete with errors", bold.fg(Color::Yellow)))
    };

    let summary = Paragraph::new(vec![heading, Line::from(counts)]).block(
        Block::default()
            .title(" Results ")
            .title_style(bold.fg(Color::Cyan))
            .borders(Borders::ALL),
    );
    frame.render_widget(summary, chunks[0]);

    let mut items: Vec<ListItem> = result
        .listed_errors(RESULT_ERROR_LIMIT)
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("Row {:>5}  ", e.row), Style::default().fg(Color::Gray)),
                Span::styled(e.message.clone(), Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let hidden = result.hidden_error_count(RESULT_ERROR_LIMIT);
    if hidden > 0 {
        items.push(ListItem::new(Span::styled(
            format!("...and {} more", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let errors = List::new(items).block(
        Block::default()
            .title(format!(" Row errors ({}) ", result.error_details.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(errors, chunks[1]);
}
