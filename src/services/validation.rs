//! Validation engine
//!
//! Produces row-level warnings for a document under a mapping. Warnings are
//! data, not errors: a row with invalid values is still imported, only rows
//! missing the identity field are skipped by the builder.

use crate::models::{
    ColumnMapping, ParsedDocument, Schema, ValidationWarning, WarningSummary,
};

/// Validate every data row
///
/// Warnings come out row by row; within a row the identity check comes
/// first, then the other mapped columns in column order. Empty values are
/// never checked by field validators.
pub fn validate(
    doc: &ParsedDocument,
    mapping: &ColumnMapping,
    schema: &Schema,
) -> Vec<ValidationWarning> {
    let identity = schema.identity();
    let identity_column = mapping.column_for(identity);
    let identity_label = schema.label(identity);

    let checked: Vec<_> = mapping
        .mapped()
        .filter(|(_, key)| *key != identity)
        .filter_map(|(column, key)| {
            schema
                .field(key)
                .filter(|def| def.validator.is_some())
                .map(|def| (column, def))
        })
        .collect();

    let mut warnings = Vec::new();
    for index in 0..doc.row_count() {
        let row = ParsedDocument::display_row(index);

        let has_identity = identity_column
            .map(|column| !doc.cell(index, column).trim().is_empty())
            .unwrap_or(false);
        if !has_identity {
            warnings.push(ValidationWarning::missing_required(
                row,
                identity.as_str(),
                identity_label,
            ));
        }

        for (column, def) in &checked {
            let value = doc.cell(index, *column).trim();
            if value.is_empty() {
                continue;
            }
            if let Some(message) = def.check(value) {
                warnings.push(ValidationWarning::invalid_value(row, def.label, message));
            }
        }
    }

    warnings
}

/// Split warning counts for the preview
pub fn summarize(warnings: &[ValidationWarning]) -> WarningSummary {
    WarningSummary::from_warnings(warnings)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::services::mapping::auto_map;
    use crate::services::mapping::proptests::{document, mapped_document};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn validate_is_deterministic((doc, mapping) in mapped_document()) {
            let schema = Schema::customers();
            prop_assert_eq!(
                validate(&doc, &mapping, &schema),
                validate(&doc, &mapping, &schema)
            );
        }

        #[test]
        fn rows_without_identity_warn_once(doc in document()) {
            let schema = Schema::customers();
            let mapping = auto_map(&doc.headers, &schema);
            let warnings = validate(&doc, &mapping, &schema);
            let missing = warnings.iter().filter(|w| w.is_missing_required()).count();
            let column = mapping.column_for(schema.identity());
            let empty = (0..doc.row_count())
                .filter(|&row| column.map_or(true, |c| doc.cell(row, c).trim().is_empty()))
                .count();
            prop_assert_eq!(missing, empty);
        }
    }
}
