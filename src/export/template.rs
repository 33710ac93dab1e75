//! CSV import template
//!
//! A template is a single header line of schema keys in declaration order.
//! Users fill it in and upload it back; the keys auto-map to themselves.

use std::io::Write;

use crate::error::{CscxError, CscxResult};
use crate::models::Schema;

/// Default file name offered for the template
pub const TEMPLATE_FILE_NAME: &str = "customer_import_template.csv";

/// Write the template header
pub fn write_template<W: Write>(schema: &Schema, writer: W) -> CscxResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(schema.keys().map(|key| key.as_str()))
        .map_err(|e| CscxError::Export(e.to_string()))?;
    csv_writer
        .flush()
        .map_err(|e| CscxError::Export(e.to_string()))?;
    Ok(())
}

/// The template as a string
pub fn template_text(schema: &Schema) -> CscxResult<String> {
    let mut buffer = Vec::new();
    write_template(schema, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| CscxError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldKey;
    use crate::services::{auto_map, parse};

    #[test]
    fn test_template_is_one_header_line() {
        let text = template_text(&Schema::customers()).unwrap();
        assert_eq!(
            text,
            "name,industry,arr,health_score,stage,renewal_date,csm_name,primary_contact_name,primary_contact_email\n"
        );
    }

    #[test]
    fn test_template_headers_map_to_every_field() {
        let schema = Schema::customers();
        let doc = parse(&template_text(&schema).unwrap());
        assert!(doc.rows.is_empty());

        let mapping = auto_map(&doc.headers, &schema);
        for (column, key) in FieldKey::ALL.iter().enumerate() {
            assert_eq!(mapping.field_for(column), Some(*key));
        }
    }
}
