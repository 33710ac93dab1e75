//! TUI Views module
//!
//! One render module per wizard step, plus the header with the step
//! indicator and the status bar.

pub mod header;
pub mod importing;
pub mod mapping;
pub mod preview;
pub mod results;
pub mod status_bar;
pub mod upload;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::wizard::WizardStep;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_area, with_banner, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);

    let (banner, main) = with_banner(layout.main, app.wizard.error().is_some());
    if let (Some(area), Some(message)) = (banner, app.wizard.error()) {
        render_error_banner(frame, area, message);
    }

    match app.wizard.step() {
        WizardStep::Upload => upload::render(frame, app, main),
        WizardStep::Mapping => mapping::render(frame, app, main),
        WizardStep::Preview => preview::render(frame, app, main),
        WizardStep::Importing => importing::render(frame, app, main),
        WizardStep::Results => results::render(frame, app, main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::FieldPicker => dialogs::field_picker::render(frame, app),
        ActiveDialog::None => {}
    }
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
