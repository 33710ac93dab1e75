//! CLI command handlers for the import template and the field catalog

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::display::format_field_catalog;
use crate::error::{CscxError, CscxResult};
use crate::export::write_template;
use crate::models::Schema;

/// Write the template to `output`, or to stdout when no path is given
pub fn handle_template_command(output: Option<PathBuf>) -> CscxResult<()> {
    let schema = Schema::customers();

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                CscxError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            write_template(&schema, BufWriter::new(file))?;
            println!("Template written to: {}", path.display());
        }
        None => write_template(&schema, io::stdout().lock())?,
    }

    Ok(())
}

/// Print every importable field
pub fn handle_fields_command() -> CscxResult<()> {
    println!("{}", format_field_catalog(&Schema::customers()));
    Ok(())
}
