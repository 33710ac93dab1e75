//! Event handler for the TUI
//!
//! Routes keyboard events to the handler of the open dialog or the current
//! wizard step, and background completions to the app.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::wizard::WizardStep;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            Ok(())
        }
        Event::FileRead { session, outcome } => {
            app.on_file_read(session, outcome);
            Ok(())
        }
        Event::ImportFinished { session, outcome } => {
            app.on_import_finished(session, outcome);
            Ok(())
        }
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// A pasted or dropped path on the upload step selects that file
fn handle_paste(app: &mut App, text: &str) {
    if app.wizard.step() != WizardStep::Upload || app.wizard.is_loading() || app.has_dialog() {
        return;
    }
    app.path_input.set_pasted(text);
    app.submit_path();
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // The upload step takes free text, so only it skips the global keys
    if app.wizard.step() != WizardStep::Upload {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.quit();
                return Ok(());
            }
            KeyCode::Char('?') => {
                app.open_dialog(ActiveDialog::Help);
                return Ok(());
            }
            _ => {}
        }
    }

    match app.wizard.step() {
        WizardStep::Upload => handle_upload_key(app, key),
        WizardStep::Mapping => handle_mapping_key(app, key),
        WizardStep::Preview => handle_preview_key(app, key),
        // Nothing to do but wait
        WizardStep::Importing => {}
        WizardStep::Results => handle_results_key(app, key),
    }
    Ok(())
}

fn handle_upload_key(app: &mut App, key: KeyEvent) {
    if app.wizard.is_loading() {
        if key.code == KeyCode::Esc {
            app.quit();
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => app.submit_path(),
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('t') if ctrl => app.save_template(),
        KeyCode::Char('u') if ctrl => app.path_input.clear(),
        KeyCode::Char(c) if !ctrl => {
            app.wizard.clear_error();
            app.path_input.insert(c);
        }
        KeyCode::Backspace => app.path_input.backspace(),
        KeyCode::Delete => app.path_input.delete(),
        KeyCode::Left => app.path_input.move_left(),
        KeyCode::Right => app.path_input.move_right(),
        KeyCode::Home => app.path_input.move_start(),
        KeyCode::End => app.path_input.move_end(),
        _ => {}
    }
}

fn handle_mapping_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_column(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_column(),
        KeyCode::Enter => app.open_dialog(ActiveDialog::FieldPicker),
        KeyCode::Char('u') | KeyCode::Delete | KeyCode::Backspace => app.unmap_selected(),
        KeyCode::Char('p') | KeyCode::Tab => app.open_preview(),
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

fn handle_preview_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_warnings_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_warnings_up(),
        KeyCode::Enter | KeyCode::Char('i') => app.start_import(),
        KeyCode::Esc | KeyCode::Char('b') => app.go_back(),
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
        app.restart();
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1)
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::FieldPicker => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Char('j') | KeyCode::Down => app.picker_next(),
            KeyCode::Char('k') | KeyCode::Up => app.picker_prev(),
            KeyCode::Enter => app.apply_picker_choice(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ImportApi, ImportRequest};
    use crate::config::{CscxPaths, Settings};
    use crate::models::{FieldKey, ImportResult, Schema};
    use crate::wizard::ImportWizard;
    use async_trait::async_trait;
    use std::sync::{mpsc, Arc};

    struct NoopApi;

    #[async_trait]
    impl ImportApi for NoopApi {
        async fn import_customers(&self, _: &ImportRequest) -> Result<ImportResult, ApiError> {
            Ok(ImportResult::default())
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::from(code))).unwrap();
    }

    fn with_app(test: impl FnOnce(&mut App)) {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = CscxPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new(
            &settings,
            &paths,
            ImportWizard::new(Schema::customers(), "ws"),
            runtime.handle().clone(),
            tx,
            Arc::new(NoopApi),
        );
        test(&mut app);
    }

    #[test]
    fn test_typing_on_upload_does_not_quit() {
        with_app(|app| {
            for c in "q?.csv".chars() {
                press(app, KeyCode::Char(c));
            }
            assert!(!app.should_quit);
            assert!(!app.has_dialog());
            assert_eq!(app.path_input.value(), "q?.csv");
        });
    }

    #[test]
    fn test_mapping_keys() {
        with_app(|app| {
            let text = "Name,Notes\nAcme,hi\n";
            app.wizard
                .load_upload("c.csv", text.len() as u64, text)
                .unwrap();

            press(app, KeyCode::Char('j'));
            assert_eq!(app.selected_column, 1);
            press(app, KeyCode::Char('j'));
            assert_eq!(app.selected_column, 1);

            press(app, KeyCode::Char('k'));
            press(app, KeyCode::Char('u'));
            assert_eq!(app.wizard.mapping().field_for(0), None);

            // Preview is refused without the name column
            press(app, KeyCode::Char('p'));
            assert_eq!(app.wizard.step(), WizardStep::Mapping);

            press(app, KeyCode::Enter);
            assert_eq!(app.active_dialog, ActiveDialog::FieldPicker);
            press(app, KeyCode::Down);
            press(app, KeyCode::Enter);
            assert_eq!(app.wizard.mapping().field_for(0), Some(FieldKey::Name));

            press(app, KeyCode::Tab);
            assert_eq!(app.wizard.step(), WizardStep::Preview);

            press(app, KeyCode::Char('q'));
            assert!(app.should_quit);
        });
    }

    #[test]
    fn test_picker_skips_claimed_fields() {
        with_app(|app| {
            let text = "Name,Notes\nAcme,hi\n";
            app.wizard
                .load_upload("c.csv", text.len() as u64, text)
                .unwrap();

            press(app, KeyCode::Char('j'));
            press(app, KeyCode::Enter);
            assert_eq!(app.picker_index, 0);

            // Name belongs to column 0, so Down lands on the next field
            press(app, KeyCode::Down);
            let options = app.picker_options();
            let chosen = options[app.picker_index - 1].key;
            assert_ne!(chosen, FieldKey::Name);
            assert!(options[app.picker_index - 1].is_available());

            press(app, KeyCode::Up);
            assert_eq!(app.picker_index, 0);

            press(app, KeyCode::Down);
            press(app, KeyCode::Enter);
            assert!(!app.has_dialog());
            assert_eq!(app.wizard.mapping().field_for(1), Some(chosen));
            assert_eq!(app.wizard.mapping().field_for(0), Some(FieldKey::Name));
        });
    }

    #[test]
    fn test_paste_ignored_after_upload() {
        with_app(|app| {
            let text = "Name\nAcme\n";
            app.wizard
                .load_upload("c.csv", text.len() as u64, text)
                .unwrap();
            handle_event(app, Event::Paste("/tmp/other.csv".into())).unwrap();
            assert!(app.path_input.is_empty());
            assert!(!app.wizard.is_loading());
        });
    }
}
