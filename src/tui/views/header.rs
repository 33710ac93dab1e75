//! Header view
//!
//! Application title, the file being imported, and the step indicator

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::WizardStep;

/// Render the header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let current = app.wizard.step();

    let mut spans = Vec::new();
    for (i, step) in WizardStep::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *step == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if step.number() < current.number() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{}. {}", step.number(), step.title()),
            style,
        ));
    }

    let title = match app.wizard.file_name() {
        Some(name) => format!(" Customer Import · {} ", name),
        None => " Customer Import ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
