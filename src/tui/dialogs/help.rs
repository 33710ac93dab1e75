//! Help dialog
//!
//! Shows the keys for the current wizard step

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::wizard::WizardStep;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.wizard.step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(step: WizardStep) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Ctrl+C", "Quit application"),
        key_line("q", "Quit (outside the upload step)"),
        key_line("?", "Show/hide help (F1 on the upload step)"),
        Line::from(""),
        section(step.title()),
        Line::from(""),
    ];

    let keys: &[(&str, &str)] = match step {
        WizardStep::Upload => &[
            ("Enter", "Read the file at the typed path"),
            ("Paste/drop", "Select the pasted file"),
            ("Ctrl+T", "Save a blank template"),
            ("Ctrl+U", "Clear the path"),
            ("Esc", "Quit"),
        ],
        WizardStep::Mapping => &[
            ("j/k", "Select column"),
            ("Enter", "Choose the target field"),
            ("u/Del", "Leave the column unmapped"),
            ("p/Tab", "Preview (needs Customer Name)"),
            ("Esc", "Choose another file"),
        ],
        WizardStep::Preview => &[
            ("j/k", "Scroll warnings"),
            ("Enter/i", "Send the records"),
            ("b/Esc", "Back to the mapping"),
        ],
        WizardStep::Importing => &[("", "The import runs until the server answers")],
        WizardStep::Results => &[("Enter/n", "Start a new import")],
    };
    lines.extend(keys.iter().map(|(key, description)| key_line(key, description)));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}  ", key), Style::default().fg(Color::Cyan)),
        Span::raw(description.to_string()),
    ])
}
