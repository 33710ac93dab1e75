//! Status bar view
//!
//! Shows the workspace, the status message and key hints for the step

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::WizardStep;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Workspace: ", Style::default().fg(Color::White)),
        Span::styled(
            app.wizard.workspace_id().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        key_hints(app.wizard.step()),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Upload => "Enter:read  Ctrl+T:template  F1:help  Esc:quit",
        WizardStep::Mapping => "j/k:move  Enter:field  u:unmap  p:preview  Esc:back  ?:help",
        WizardStep::Preview => "j/k:scroll  Enter:import  b:back  ?:help  q:quit",
        WizardStep::Importing => "Waiting for the server...",
        WizardStep::Results => "n:new import  q:quit",
    }
}
