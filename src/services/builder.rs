//! Record builder
//!
//! Coerces mapped cells into typed records. Rows without the identity field
//! are dropped and their row numbers reported.

use std::collections::HashMap;

use tracing::debug;

use crate::models::field::{clean_currency, normalize_enum_value, parse_number};
use crate::models::{
    BuildOutcome, ColumnMapping, FieldKind, FieldValue, ImportRecord, ParsedDocument, Schema,
};

/// Build records from every data row
pub fn build(doc: &ParsedDocument, mapping: &ColumnMapping, schema: &Schema) -> BuildOutcome {
    let identity = schema.identity();
    let mut outcome = BuildOutcome {
        total_rows: doc.row_count(),
        ..Default::default()
    };

    for index in 0..doc.row_count() {
        let mut record = ImportRecord::new();

        for (column, key) in mapping.mapped() {
            let value = doc.cell(index, column).trim();
            if value.is_empty() {
                continue;
            }
            let kind = schema.field(key).map(|def| def.kind).unwrap_or(FieldKind::Text);
            if let Some(coerced) = coerce(kind, value) {
                record.insert(key, coerced);
            }
        }

        if record.contains(identity) {
            outcome.records.push(record);
        } else {
            outcome.skipped_rows.push(ParsedDocument::display_row(index));
        }
    }

    debug!(
        records = outcome.records.len(),
        skipped = outcome.skipped_rows.len(),
        "Built import records"
    );
    outcome
}

/// Coerce a trimmed, non-empty value; `None` omits the field
fn coerce(kind: FieldKind, value: &str) -> Option<FieldValue> {
    match kind {
        FieldKind::Currency => parse_number(&clean_currency(value)).map(FieldValue::Number),
        FieldKind::Numeric => parse_number(value).map(FieldValue::Number),
        FieldKind::Enumerated(_) => Some(FieldValue::Text(normalize_enum_value(value))),
        FieldKind::Text => Some(FieldValue::Text(value.to_string())),
    }
}

/// A record whose name repeats an earlier record's
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdentity {
    /// Name as it appears in the later record
    pub name: String,
    /// Index of the first record with this name
    pub first: usize,
    /// Index of the repeating record
    pub duplicate: usize,
}

/// Report records whose name (case-insensitive) repeats an earlier one
///
/// Informational only: duplicates are still sent and the server decides.
pub fn duplicate_identities(records: &[ImportRecord]) -> Vec<DuplicateIdentity> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let Some(name) = record.name() else {
            continue;
        };
        let folded = name.to_lowercase();
        match seen.get(&folded) {
            Some(&first) => duplicates.push(DuplicateIdentity {
                name: name.to_string(),
                first,
                duplicate: index,
            }),
            None => {
                seen.insert(folded, index);
            }
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldKey;
    use crate::services::mapping::auto_map;
    use crate::services::parser::parse;

    fn run(text: &str) -> BuildOutcome {
        let schema = Schema::customers();
        let doc = parse(text);
        let mapping = auto_map(&doc.headers, &schema);
        build(&doc, &mapping, &schema)
    }

    #[test]
    fn test_build_coerces_by_kind() {
        let outcome = run(
            "Name,ARR,Health Score,Stage,Industry\n\"Acme, Inc\",\"$120,000\",85,At Risk,  Software  \n",
        );
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.name(), Some("Acme, Inc"));
        assert_eq!(record.get(FieldKey::Arr), Some(&FieldValue::Number(120000.0)));
        assert_eq!(record.get(FieldKey::HealthScore), Some(&FieldValue::Number(85.0)));
        assert_eq!(record.get(FieldKey::Stage), Some(&FieldValue::from("at_risk")));
        assert_eq!(record.get(FieldKey::Industry), Some(&FieldValue::from("Software")));
    }

    #[test]
    fn test_build_omits_unparseable_numbers() {
        let outcome = run("Name,ARR,Health Score\nAcme,lots,great\n");
        let record = &outcome.records[0];
        assert_eq!(record.len(), 1);
        assert!(!record.contains(FieldKey::Arr));
    }

    #[test]
    fn test_build_skips_rows_without_name() {
        let outcome = run("Name,ARR\nAcme,1\n,2\n   ,3\nGlobex,4\n");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped_rows, vec![3, 4]);
        assert_eq!(
            outcome.records.len() + outcome.skipped_rows.len(),
            outcome.total_rows
        );
    }

    #[test]
    fn test_build_without_identity_mapping_skips_all() {
        let outcome = run("Notes,ARR\nx,1\ny,2\n");
        assert!(!outcome.has_records());
        assert_eq!(outcome.skipped_rows, vec![2, 3]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let text = "Company,Stage,ARR\nAcme,active,10\nGlobex,churned,20\n";
        assert_eq!(run(text), run(text));
    }

    #[test]
    fn test_duplicate_identities() {
        let outcome = run("Name\nAcme\nGlobex\nACME\nacme\n");
        let duplicates = duplicate_identities(&outcome.records);
        assert_eq!(duplicates.len(), 2);
        assert_eq!(duplicates[0].name, "ACME");
        assert_eq!(duplicates[0].first, 0);
        assert_eq!(duplicates[1].duplicate, 3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::services::mapping::proptests::mapped_document;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_row_is_built_or_skipped((doc, mapping) in mapped_document()) {
            let outcome = build(&doc, &mapping, &Schema::customers());
            prop_assert_eq!(outcome.total_rows, doc.row_count());
            prop_assert_eq!(
                outcome.records.len() + outcome.skipped_rows.len(),
                outcome.total_rows
            );
            prop_assert!(outcome.records.iter().all(|r| r.name().is_some()));
        }
    }
}
