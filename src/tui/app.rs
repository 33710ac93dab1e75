//! Application state for the TUI
//!
//! The App struct wraps the import wizard with what the screen needs on top
//! of it: selections, dialogs, notifications, and the handles used to run
//! file reads and import requests in the background.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::api::{ApiError, ImportApi};
use crate::config::{CscxPaths, Settings};
use crate::error::{CscxError, CscxResult};
use crate::export::{write_template, TEMPLATE_FILE_NAME};
use crate::history::{HistoryEntry, HistoryLog};
use crate::models::{FieldKey, FieldOption, ImportResult, SessionId};
use crate::services::{read_upload, Upload};
use crate::wizard::{ImportWizard, WizardStep};

use super::event::Event;
use super::widgets::{Notification, NotificationQueue, PathInput};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Field selector for the selected column
    FieldPicker,
}

/// Main application state
pub struct App<'a> {
    /// The import session
    pub wizard: ImportWizard,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a CscxPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// File path typed or pasted on the upload step
    pub path_input: PathInput,

    /// Selected column on the mapping step
    pub selected_column: usize,

    /// Highlighted entry in the field picker; 0 is "(unmapped)"
    pub picker_index: usize,

    /// First warning shown on the preview step
    pub warning_scroll: usize,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Status message to display
    pub status_message: Option<String>,

    runtime: Handle,
    events: Sender<Event>,
    api: Arc<dyn ImportApi>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        settings: &'a Settings,
        paths: &'a CscxPaths,
        wizard: ImportWizard,
        runtime: Handle,
        events: Sender<Event>,
        api: Arc<dyn ImportApi>,
    ) -> Self {
        Self {
            wizard,
            settings,
            paths,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            path_input: PathInput::new("path/to/customers.csv"),
            selected_column: 0,
            picker_index: 0,
            warning_scroll: 0,
            notifications: NotificationQueue::new(),
            status_message: None,
            runtime,
            events,
            api,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn notify_error(&mut self, err: &CscxError) {
        self.notifications.push(Notification::from_error(err));
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::FieldPicker {
            let current = self.wizard.mapping().field_for(self.selected_column);
            self.picker_index = current
                .and_then(|key| self.picker_options().iter().position(|o| o.key == key))
                .map(|i| i + 1)
                .unwrap_or(0);
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    // Upload

    /// Read the file at `path` in the background
    pub fn start_file_read(&mut self, path: PathBuf) {
        let session = match self.wizard.begin_file_read() {
            Ok(session) => session,
            Err(e) => {
                self.notify_error(&e);
                return;
            }
        };

        self.set_status(format!("Reading {}...", path.display()));
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = read_upload(&path).await;
            // The receiver is gone once the TUI has exited
            let _ = events.send(Event::FileRead { session, outcome });
        });
    }

    /// Read the path currently in the input
    pub fn submit_path(&mut self) {
        let value = self.path_input.value().trim().to_string();
        if value.is_empty() {
            self.set_status("Enter the path of a .csv file");
            return;
        }
        self.start_file_read(PathBuf::from(value));
    }

    pub fn on_file_read(&mut self, session: SessionId, outcome: CscxResult<Upload>) {
        self.clear_status();
        if !self.wizard.finish_file_read(session, outcome) {
            return;
        }
        if self.wizard.step() == WizardStep::Mapping {
            self.selected_column = 0;
            let mapped = self.wizard.mapping().mapped_count();
            let columns = self.wizard.mapping().len();
            self.notify(Notification::success(format!(
                "Matched {} of {} columns",
                mapped, columns
            )));
        }
    }

    /// Write the blank template into the working directory
    pub fn save_template(&mut self) {
        let path = PathBuf::from(TEMPLATE_FILE_NAME);
        let written = std::fs::File::create(&path)
            .map_err(|e| CscxError::Io(format!("Failed to create {}: {}", path.display(), e)))
            .and_then(|file| write_template(self.wizard.schema(), file));

        match written {
            Ok(()) => {
                info!(path = %path.display(), "Saved template");
                self.notify(Notification::success(format!("Saved {}", path.display())));
            }
            Err(e) => self.notify_error(&e),
        }
    }

    // Mapping

    pub fn column_count(&self) -> usize {
        self.wizard.mapping().len()
    }

    pub fn select_next_column(&mut self) {
        if self.selected_column + 1 < self.column_count() {
            self.selected_column += 1;
        }
    }

    pub fn select_prev_column(&mut self) {
        self.selected_column = self.selected_column.saturating_sub(1);
    }

    /// Field options for the selected column
    pub fn picker_options(&self) -> Vec<FieldOption> {
        self.wizard.field_options(self.selected_column)
    }

    /// Whether picker entry `index` can be chosen; "(unmapped)" always can
    fn picker_selectable(options: &[FieldOption], index: usize) -> bool {
        match index {
            0 => true,
            i => options.get(i - 1).is_some_and(FieldOption::is_available),
        }
    }

    /// Move the picker highlight down, skipping fields owned by other columns
    pub fn picker_next(&mut self) {
        let options = self.picker_options();
        if let Some(next) = (self.picker_index + 1..=options.len())
            .find(|&i| Self::picker_selectable(&options, i))
        {
            self.picker_index = next;
        }
    }

    /// Move the picker highlight up, skipping fields owned by other columns
    pub fn picker_prev(&mut self) {
        let options = self.picker_options();
        if let Some(prev) = (0..self.picker_index)
            .rev()
            .find(|&i| Self::picker_selectable(&options, i))
        {
            self.picker_index = prev;
        }
    }

    /// Apply the highlighted picker entry to the selected column.
    /// A claimed entry is inert.
    pub fn apply_picker_choice(&mut self) {
        let options = self.picker_options();
        if !Self::picker_selectable(&options, self.picker_index) {
            return;
        }
        let field: Option<FieldKey> = match self.picker_index {
            0 => None,
            i => options.get(i - 1).map(|o| o.key),
        };
        match self.wizard.assign_column(self.selected_column, field) {
            Ok(()) => self.close_dialog(),
            Err(e) => self.notify_error(&e),
        }
    }

    pub fn unmap_selected(&mut self) {
        if let Err(e) = self.wizard.assign_column(self.selected_column, None) {
            self.notify_error(&e);
        }
    }

    pub fn open_preview(&mut self) {
        match self.wizard.enter_preview() {
            Ok(_) => self.warning_scroll = 0,
            Err(e) => self.notify_error(&e),
        }
    }

    pub fn go_back(&mut self) {
        let from = self.wizard.step();
        match self.wizard.back() {
            Ok(()) if from == WizardStep::Mapping => {
                self.path_input.clear();
                self.selected_column = 0;
            }
            Ok(()) => {}
            Err(e) => self.notify_error(&e),
        }
    }

    // Preview and import

    pub fn scroll_warnings_down(&mut self) {
        let visible = self
            .wizard
            .preview()
            .map(|p| p.visible_warnings().len())
            .unwrap_or(0);
        if self.warning_scroll + 1 < visible {
            self.warning_scroll += 1;
        }
    }

    pub fn scroll_warnings_up(&mut self) {
        self.warning_scroll = self.warning_scroll.saturating_sub(1);
    }

    /// Send the previewed records in the background
    pub fn start_import(&mut self) {
        let ticket = match self.wizard.begin_import() {
            Ok(ticket) => ticket,
            Err(e) => {
                self.notify_error(&e);
                return;
            }
        };

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = api.import_customers(&ticket.request).await;
            let _ = events.send(Event::ImportFinished {
                session: ticket.session,
                outcome,
            });
        });
    }

    pub fn on_import_finished(
        &mut self,
        session: SessionId,
        outcome: Result<ImportResult, ApiError>,
    ) {
        if !self.wizard.finish_import(session, outcome) {
            return;
        }

        match self.wizard.result() {
            Some(result) => {
                let records_sent = self.wizard.preview().map(|p| p.record_count()).unwrap_or(0);
                let entry = HistoryEntry::from_import(
                    session,
                    self.wizard.file_name().unwrap_or_default(),
                    self.wizard.workspace_id(),
                    records_sent,
                    result,
                );
                let message = format!("Imported {} customers", result.imported);
                match HistoryLog::new(self.paths.history_file()).append(&entry) {
                    Ok(()) => self.set_status(entry.format_human_readable()),
                    Err(e) => warn!(error = %e, "Failed to record import history"),
                }
                self.notify(Notification::success(message));
            }
            None => {
                if let Some(error) = self.wizard.error() {
                    let message = error.to_string();
                    self.notify(Notification::error(message));
                }
            }
        }
    }

    pub fn restart(&mut self) {
        self.wizard.restart();
        self.path_input.clear();
        self.selected_column = 0;
        self.warning_scroll = 0;
        self.close_dialog();
    }

    /// Periodic update: progress and notification expiry
    pub fn on_tick(&mut self) {
        self.wizard.tick_progress();
        self.notifications.remove_expired();
    }
}
