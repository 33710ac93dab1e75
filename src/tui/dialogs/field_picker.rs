//! Field picker dialog
//!
//! Lists the schema fields for the selected column. Fields already owned by
//! another column are shown dimmed with the owning header.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the field picker
pub fn render(frame: &mut Frame, app: &mut App) {
    let options = app.picker_options();
    let height = options.len() as u16 + 3;
    let area = centered_rect_fixed(60, height, frame.area());

    frame.render_widget(Clear, area);

    let header = app
        .wizard
        .mapping()
        .columns()
        .get(app.selected_column)
        .map(|c| c.header.clone())
        .unwrap_or_default();

    let mut items = vec![ListItem::new(Span::styled(
        "(unmapped)",
        Style::default().fg(Color::Gray),
    ))];
    for option in &options {
        let mut spans = vec![Span::raw(option.label)];
        if option.required {
            spans.push(Span::styled(" *", Style::default().fg(Color::Yellow)));
        }
        if let Some(owner) = option.claimed_by {
            let owner_header = app
                .wizard
                .mapping()
                .columns()
                .get(owner)
                .map(|c| c.header.as_str())
                .unwrap_or("?");
            spans.push(Span::styled(
                format!("  (mapped to \"{}\")", owner_header),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let style = if option.is_available() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        items.push(ListItem::new(Line::from(spans)).style(style));
    }

    let block = Block::default()
        .title(format!(" Map \"{}\" to ", header))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.picker_index));
    frame.render_stateful_widget(list, area, &mut state);
}
