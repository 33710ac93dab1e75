//! Importing step

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the progress gauge while the request is in flight
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let records = app.wizard.preview().map(|p| p.record_count()).unwrap_or(0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Importing {} customers ", records))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(app.wizard.progress()));
    frame.render_widget(gauge, chunks[0]);

    frame.render_widget(
        Paragraph::new(format!("Workspace: {}", app.wizard.workspace_id()))
            .style(Style::default().fg(Color::Gray)),
        chunks[1],
    );
}
