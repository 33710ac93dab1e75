//! Upload step
//!
//! Path input, accepted file rules and the template hint

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::export::TEMPLATE_FILE_NAME;
use crate::services::MAX_FILE_BYTES;
use crate::tui::app::App;

/// Render the upload step
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let border_color = if app.wizard.is_loading() {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let input_block = Block::default()
        .title(" CSV file ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = input_block.inner(chunks[0]);
    frame.render_widget(input_block, chunks[0]);
    frame.render_widget(&app.path_input, inner);

    let label = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from("Type or paste the path of a CSV file, or drop it onto the terminal."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Accepted: ", label),
            Span::raw(format!(
                ".csv files up to {} MB, first line is the header",
                MAX_FILE_BYTES / (1024 * 1024)
            )),
        ]),
        Line::from(vec![
            Span::styled("Template: ", label),
            Span::raw(format!("Ctrl+T saves {} here", TEMPLATE_FILE_NAME)),
        ]),
    ];
    if app.wizard.is_loading() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Reading file...",
            Style::default().fg(Color::Yellow),
        )));
    }

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Upload "));
    frame.render_widget(help, chunks[1]);
}
