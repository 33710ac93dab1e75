//! CLI command handlers for previewing and importing a CSV file
//!
//! Both commands drive the same `ImportWizard` the terminal UI uses: read
//! the file, auto-map, apply `--map` overrides, preview, and (for `import`)
//! send the records.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::info;

use crate::api::HttpImportClient;
use crate::config::{CscxPaths, Settings};
use crate::display::{format_import_result, format_mapping, format_preview_summary, format_warnings};
use crate::error::{CscxError, CscxResult};
use crate::export::{export_records_json, export_records_yaml, RecordExport};
use crate::history::{HistoryEntry, HistoryLog};
use crate::models::Schema;
use crate::services::{apply_overrides, read_upload, MappingOverride};
use crate::wizard::ImportWizard;

/// Record export format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments of `preview`
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Path to the CSV file
    pub file: PathBuf,

    /// Override a column: "Header=field" or "Header=none" (repeatable, applied in order)
    #[arg(short, long = "map", value_name = "COLUMN=FIELD")]
    pub map: Vec<MappingOverride>,

    /// Write the records that would be sent to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format of --output
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Workspace recorded in the export
    #[arg(short, long, env = "CSCX_WORKSPACE_ID")]
    pub workspace: Option<String>,
}

/// Arguments of `import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the CSV file
    pub file: PathBuf,

    /// Override a column: "Header=field" or "Header=none" (repeatable, applied in order)
    #[arg(short, long = "map", value_name = "COLUMN=FIELD")]
    pub map: Vec<MappingOverride>,

    /// Workspace that receives the customers
    #[arg(short, long, env = "CSCX_WORKSPACE_ID")]
    pub workspace: Option<String>,

    /// Base URL of the customer-success API
    #[arg(long, env = "CSCX_API_URL")]
    pub api_url: Option<String>,

    /// Show what would be sent without calling the API
    #[arg(long)]
    pub dry_run: bool,
}

/// Read, map and preview a file, printing each step
async fn prepare(
    file: &Path,
    overrides: &[MappingOverride],
    workspace_id: &str,
) -> CscxResult<ImportWizard> {
    let mut wizard = ImportWizard::new(Schema::customers(), workspace_id);

    let upload = read_upload(file).await?;
    wizard.load_upload(&upload.name, upload.size, &upload.text)?;
    apply_overrides(wizard.mapping_mut()?, overrides)?;

    let doc = wizard
        .document()
        .ok_or_else(|| CscxError::Io(format!("Failed to load {}", file.display())))?;
    println!("Column mapping for '{}'", upload.name);
    println!("{}", "=".repeat(40));
    println!("{}", format_mapping(doc, wizard.mapping(), wizard.schema()));

    let preview = wizard.enter_preview()?;
    println!("Preview");
    println!("{}", "=".repeat(40));
    print!("{}", format_preview_summary(preview));
    println!();
    println!("{}", format_warnings(preview));
    println!();

    Ok(wizard)
}

/// Handle the preview command
pub async fn handle_preview_command(settings: &Settings, args: PreviewArgs) -> CscxResult<()> {
    let workspace_id = args
        .workspace
        .clone()
        .unwrap_or_else(|| settings.workspace_id.clone());
    let wizard = prepare(&args.file, &args.map, &workspace_id).await?;

    if let Some(output) = args.output {
        let preview = wizard
            .preview()
            .ok_or_else(|| CscxError::Export("No preview to export".into()))?;
        let export =
            RecordExport::from_preview(preview, wizard.file_name().unwrap_or_default(), &workspace_id);

        let file = File::create(&output).map_err(|e| {
            CscxError::Export(format!("Failed to create file {}: {}", output.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        match args.format {
            ExportFormat::Json => export_records_json(&export, &mut writer, true)?,
            ExportFormat::Yaml => export_records_yaml(&export, &mut writer)?,
        }
        println!(
            "{} records written to: {}",
            export.records.len(),
            output.display()
        );
    }

    Ok(())
}

/// Handle the import command
pub async fn handle_import_command(
    paths: &CscxPaths,
    settings: &Settings,
    args: ImportArgs,
) -> CscxResult<()> {
    let settings = settings.clone().with_overrides(args.api_url, args.workspace);
    let mut wizard = prepare(&args.file, &args.map, &settings.workspace_id).await?;

    if !wizard.can_import() {
        return Err(CscxError::NothingToImport);
    }
    let records_sent = wizard.preview().map(|p| p.record_count()).unwrap_or(0);

    if args.dry_run {
        println!(
            "Dry run: {} records would be sent to workspace '{}' at {}",
            records_sent, settings.workspace_id, settings.api_base_url
        );
        return Ok(());
    }

    let client = HttpImportClient::from_settings(&settings)?;
    println!(
        "Importing {} records into workspace '{}'...",
        records_sent, settings.workspace_id
    );
    let session_id = wizard.session_id();
    let file_name = wizard.file_name().unwrap_or_default().to_string();
    let result = wizard.run_import(&client).await?.clone();

    println!();
    println!("Import Complete!");
    println!("{}", "=".repeat(40));
    print!("{}", format_import_result(&result));

    paths.ensure_directories()?;
    let entry = HistoryEntry::from_import(
        session_id,
        file_name,
        settings.workspace_id.as_str(),
        records_sent,
        &result,
    );
    HistoryLog::new(paths.history_file()).append(&entry)?;
    info!(session = %session_id, imported = result.imported, "Recorded import in history");

    Ok(())
}
