//! Import wizard orchestration
//!
//! `ImportWizard` is the five-step state machine behind both front ends:
//!
//! ```text
//! Upload -> Mapping -> Preview -> Importing -> Results
//!    ^         |          |           |           |
//!    +---------+----------+-----------+-----------+  restart()
//! ```
//!
//! Transitions are plain methods that either apply or return
//! `InvalidTransition`. The two asynchronous operations (reading the file
//! and the import request) are split into a `begin_*` call that hands out a
//! ticket and a `finish_*` call that applies the outcome. Outcomes carrying a
//! stale session id, or arriving when the wizard is no longer waiting for
//! them, are dropped.

pub mod preview;
pub mod step;

pub use preview::{Preview, PREVIEW_WARNING_LIMIT};
pub use step::WizardStep;

use tracing::{debug, info, warn};

use crate::api::{ApiError, ImportApi, ImportRequest};
use crate::error::{CscxError, CscxResult};
use crate::models::{
    ColumnMapping, FieldKey, FieldOption, ImportResult, ParsedDocument, Schema, SessionId,
};
use crate::services::{auto_map, parse_upload, Upload};

/// Ceiling of the progress indicator while waiting for the server
pub const PROGRESS_CAP: u8 = 90;

/// Number of server row errors listed on the results step
pub const RESULT_ERROR_LIMIT: usize = 50;

/// Work handed out by `begin_import`
#[derive(Debug, Clone)]
pub struct ImportTicket {
    /// Session that started the import
    pub session: SessionId,
    /// Workspace and records to send
    pub request: ImportRequest,
}

/// The import wizard
#[derive(Debug)]
pub struct ImportWizard {
    schema: Schema,
    workspace_id: String,
    session: SessionId,
    step: WizardStep,
    file_name: Option<String>,
    document: Option<ParsedDocument>,
    mapping: ColumnMapping,
    preview: Option<Preview>,
    result: Option<ImportResult>,
    error: Option<String>,
    loading: bool,
    progress: u8,
}

impl ImportWizard {
    /// Create a wizard at the upload step
    pub fn new(schema: Schema, workspace_id: impl Into<String>) -> Self {
        Self {
            schema,
            workspace_id: workspace_id.into(),
            session: SessionId::new(),
            step: WizardStep::Upload,
            file_name: None,
            document: None,
            mapping: ColumnMapping::default(),
            preview: None,
            result: None,
            error: None,
            loading: false,
            progress: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn document(&self) -> Option<&ParsedDocument> {
        self.document.as_ref()
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&ImportResult> {
        self.result.as_ref()
    }

    /// The error banner, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Whether a file read is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Progress indicator, 0-100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    fn require(&self, step: WizardStep, action: &'static str) -> CscxResult<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(CscxError::InvalidTransition {
                step: self.step.name(),
                action,
            })
        }
    }

    // Upload

    /// Start reading a file; returns the session the read belongs to
    pub fn begin_file_read(&mut self) -> CscxResult<SessionId> {
        self.require(WizardStep::Upload, "read a file")?;
        self.loading = true;
        self.error = None;
        Ok(self.session)
    }

    /// Apply the outcome of a file read
    ///
    /// Returns false when the outcome was dropped as stale.
    pub fn finish_file_read(&mut self, session: SessionId, outcome: CscxResult<Upload>) -> bool {
        if session != self.session || !self.loading || self.step != WizardStep::Upload {
            debug!(%session, "Dropping stale file read");
            return false;
        }
        self.loading = false;

        match outcome {
            // load_upload records its own rejection
            Ok(upload) => {
                let _ = self.load_upload(&upload.name, upload.size, &upload.text);
            }
            Err(e) => {
                warn!(error = %e, "File read failed");
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Check, parse and auto-map an upload, moving to the mapping step
    ///
    /// A rejected file leaves the wizard at the upload step with the error
    /// shown.
    pub fn load_upload(&mut self, name: &str, size: u64, text: &str) -> CscxResult<()> {
        self.require(WizardStep::Upload, "load a file")?;
        self.loading = false;

        let doc = match parse_upload(name, size, text) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(file = %name, error = %e, "Upload rejected");
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.mapping = auto_map(&doc.headers, &self.schema);
        info!(
            session = %self.session,
            file = %name,
            columns = doc.column_count(),
            rows = doc.row_count(),
            mapped = self.mapping.mapped_count(),
            "Loaded upload"
        );
        self.file_name = Some(name.to_string());
        self.document = Some(doc);
        self.error = None;
        self.step = WizardStep::Mapping;
        Ok(())
    }

    // Mapping

    /// Assign (or clear) the field of a column
    pub fn assign_column(&mut self, column: usize, field: Option<FieldKey>) -> CscxResult<()> {
        self.require(WizardStep::Mapping, "change the mapping")?;
        self.mapping.assign(column, field)
    }

    /// Mutable access for batch edits such as command-line overrides
    pub fn mapping_mut(&mut self) -> CscxResult<&mut ColumnMapping> {
        self.require(WizardStep::Mapping, "change the mapping")?;
        Ok(&mut self.mapping)
    }

    /// Selector options for a column
    pub fn field_options(&self, column: usize) -> Vec<FieldOption> {
        self.mapping.available_fields(column, &self.schema)
    }

    /// Whether the preview can be opened
    pub fn can_preview(&self) -> bool {
        self.step == WizardStep::Mapping && self.mapping.is_mapped(self.schema.identity())
    }

    /// Validate and build from the current mapping and move to the preview
    pub fn enter_preview(&mut self) -> CscxResult<&Preview> {
        self.require(WizardStep::Mapping, "preview")?;
        if !self.mapping.is_mapped(self.schema.identity()) {
            return Err(CscxError::IdentityNotMapped);
        }
        let doc = self
            .document
            .as_ref()
            .ok_or(CscxError::InvalidTransition {
                step: self.step.name(),
                action: "preview without a file",
            })?;

        let preview = Preview::compute(doc, &self.mapping, &self.schema);
        info!(
            session = %self.session,
            records = preview.record_count(),
            skipped = preview.skipped_count(),
            warnings = preview.warnings.len(),
            "Computed preview"
        );

        self.error = None;
        self.step = WizardStep::Preview;
        Ok(self.preview.insert(preview))
    }

    /// Step back: mapping returns to upload, preview returns to mapping
    pub fn back(&mut self) -> CscxResult<()> {
        match self.step {
            WizardStep::Mapping => {
                self.restart();
                Ok(())
            }
            WizardStep::Preview => {
                self.preview = None;
                self.error = None;
                self.step = WizardStep::Mapping;
                Ok(())
            }
            step => Err(CscxError::InvalidTransition {
                step: step.name(),
                action: "go back",
            }),
        }
    }

    // Preview and import

    /// Whether the import can start
    pub fn can_import(&self) -> bool {
        self.step == WizardStep::Preview && self.preview.as_ref().is_some_and(Preview::can_import)
    }

    /// Move to the importing step and hand out the request to send
    pub fn begin_import(&mut self) -> CscxResult<ImportTicket> {
        self.require(WizardStep::Preview, "import")?;
        let records = match &self.preview {
            Some(preview) if preview.can_import() => preview.records.clone(),
            _ => return Err(CscxError::NothingToImport),
        };

        info!(
            session = %self.session,
            workspace = %self.workspace_id,
            records = records.len(),
            "Starting import"
        );
        self.error = None;
        self.progress = 0;
        self.step = WizardStep::Importing;

        Ok(ImportTicket {
            session: self.session,
            request: ImportRequest::new(self.workspace_id.clone(), records),
        })
    }

    /// Advance the progress indicator; it never passes `PROGRESS_CAP`
    pub fn tick_progress(&mut self) -> u8 {
        if self.step == WizardStep::Importing && self.progress < PROGRESS_CAP {
            let remaining = PROGRESS_CAP - self.progress;
            self.progress += (remaining / 5).max(1);
        }
        self.progress
    }

    /// Apply the outcome of an import request
    ///
    /// Success moves to the results step. Failure returns to the preview
    /// with the error shown; the preview and its records are kept so the
    /// import can be retried. Returns false when the outcome was dropped.
    pub fn finish_import(
        &mut self,
        session: SessionId,
        outcome: Result<ImportResult, ApiError>,
    ) -> bool {
        if session != self.session || self.step != WizardStep::Importing {
            debug!(%session, "Dropping stale import result");
            return false;
        }

        match outcome {
            Ok(result) => {
                info!(
                    session = %self.session,
                    imported = result.imported,
                    errors = result.errors,
                    "Import finished"
                );
                self.progress = 100;
                self.result = Some(result);
                self.step = WizardStep::Results;
            }
            Err(e) => {
                warn!(session = %self.session, error = %e, "Import failed");
                self.progress = 0;
                self.error = Some(CscxError::from(e).to_string());
                self.step = WizardStep::Preview;
            }
        }
        true
    }

    /// Drop the session and return to the upload step
    pub fn restart(&mut self) {
        debug!(session = %self.session, "Restarting wizard");
        let schema = self.schema;
        let workspace_id = std::mem::take(&mut self.workspace_id);
        *self = Self::new(schema, workspace_id);
    }

    /// Begin the import, await the API and apply the outcome
    pub async fn run_import(&mut self, api: &dyn ImportApi) -> CscxResult<&ImportResult> {
        let ticket = self.begin_import()?;
        let outcome = api.import_customers(&ticket.request).await;
        let failure = outcome.as_ref().err().map(ToString::to_string);

        self.finish_import(ticket.session, outcome);
        if let Some(message) = failure {
            return Err(CscxError::Api(message));
        }
        self.result
            .as_ref()
            .ok_or(CscxError::Api("no result recorded".into()))
    }
}
