//! Mapping and field catalog display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ColumnMapping, ParsedDocument, Schema};

#[derive(Tabled)]
struct MappingRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Column")]
    header: String,
    #[tabled(rename = "Sample")]
    sample: String,
    #[tabled(rename = "Field")]
    field: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Required")]
    required: &'static str,
    #[tabled(rename = "Header aliases")]
    aliases: String,
}

/// Longest sample shown before truncation
const SAMPLE_WIDTH: usize = 24;

/// Format the column mapping with a sample value per column
pub fn format_mapping(doc: &ParsedDocument, mapping: &ColumnMapping, schema: &Schema) -> String {
    if mapping.is_empty() {
        return "No columns found.".to_string();
    }

    let rows = mapping.columns().iter().enumerate().map(|(idx, column)| {
        let field = match column.field {
            Some(key) => format!("{} ({})", schema.label(key), key),
            None => "-".to_string(),
        };
        MappingRow {
            number: idx + 1,
            header: column.header.clone(),
            sample: truncate(doc.sample(idx).unwrap_or(""), SAMPLE_WIDTH),
            field,
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let mut output = table.to_string();
    output.push('\n');
    let identity = schema.identity();
    if !mapping.is_mapped(identity) {
        output.push_str(&format!(
            "\nNo column is mapped to {}. Use --map \"<column>={}\".\n",
            schema.label(identity),
            identity
        ));
    }
    output
}

/// Format every schema field with its aliases
pub fn format_field_catalog(schema: &Schema) -> String {
    let rows = schema.fields().iter().map(|field| FieldRow {
        key: field.key.as_str(),
        label: field.label,
        required: if field.required { "yes" } else { "" },
        aliases: field.aliases.join(", "),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

pub(crate) fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let kept: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
