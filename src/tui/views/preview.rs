//! Preview step
//!
//! Record counts, repeated names and the scrollable warning list

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::WarningKind;
use crate::tui::app::App;
use crate::wizard::Preview;

/// Render the preview step
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(preview) = app.wizard.preview() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    render_summary(frame, preview, app.wizard.workspace_id(), chunks[0]);
    render_warnings(frame, preview, app.warning_scroll, chunks[1]);
}

fn render_summary(frame: &mut Frame, preview: &Preview, workspace: &str, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let count_style = if preview.can_import() {
        bold.fg(Color::Green)
    } else {
        bold.fg(Color::Red)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}", preview.record_count()), count_style),
            Span::raw(format!(
                " of {} rows ready to import into '{}'",
                preview.total_rows, workspace
            )),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}", preview.skipped_count()),
                bold.fg(Color::Yellow),
            ),
            Span::raw(" skipped (missing customer name), "),
            Span::styled(
                format!("{}", preview.other_warning_count()),
                bold.fg(Color::Yellow),
            ),
            Span::raw(" other warnings"),
        ]),
    ];

    if !preview.duplicates.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} records repeat an earlier customer name",
                preview.duplicates.len()
            ),
            Style::default().fg(Color::Yellow),
        )));
    }

    let block = Block::default()
        .title(" Preview ")
        .title_style(bold.fg(Color::Cyan))
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_warnings(frame: &mut Frame, preview: &Preview, scroll: usize, area: Rect) {
    let mut items: Vec<ListItem> = preview
        .visible_warnings()
        .iter()
        .map(|w| {
            let color = match w.kind {
                WarningKind::MissingRequired => Color::Yellow,
                WarningKind::InvalidValue => Color::Red,
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("Row {:>5}  ", w.row), Style::default().fg(Color::Gray)),
                Span::styled(format!("{:<22}", w.field), Style::default().fg(color)),
                Span::raw(w.message.clone()),
            ]))
        })
        .collect();

    let hidden = preview.hidden_warning_count();
    if hidden > 0 {
        items.push(ListItem::new(Span::styled(
            format!("...and {} more", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(" Warnings ({}) ", preview.warnings.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if !preview.warnings.is_empty() {
        state.select(Some(scroll));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
