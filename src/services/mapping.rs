//! Auto-mapping of CSV headers to schema fields

use std::str::FromStr;

use tracing::debug;

use crate::error::{CscxError, CscxResult};
use crate::models::{ColumnMapping, FieldKey, Schema};

/// Infer a mapping from header names
///
/// Each header is lowercased and trimmed, then matched against the alias sets
/// in schema order. The first header to match a field claims it; later
/// headers matching the same field stay unmapped, as do unknown headers.
pub fn auto_map(headers: &[String], schema: &Schema) -> ColumnMapping {
    let mut mapping = ColumnMapping::unmapped(headers);

    for (column, header) in headers.iter().enumerate() {
        let normalized = header.trim().to_lowercase();
        let candidate = schema
            .fields()
            .iter()
            .find(|field| field.matches_alias(&normalized))
            .map(|field| field.key);

        if let Some(key) = candidate {
            if !mapping.claim(column, key) {
                debug!(header = %header, field = %key, "Field already claimed by an earlier column");
            }
        }
    }

    debug!(
        columns = headers.len(),
        mapped = mapping.mapped_count(),
        "Auto-mapped headers"
    );
    mapping
}

/// A manual override: `Header=field` or `Header=none`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOverride {
    pub header: String,
    pub field: Option<FieldKey>,
}

impl FromStr for MappingOverride {
    type Err = CscxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (header, field) = s.rsplit_once('=').ok_or_else(|| {
            CscxError::UnknownField(format!("'{}' (expected HEADER=FIELD)", s))
        })?;

        let field = match field.trim().to_lowercase().as_str() {
            "" | "none" | "-" => None,
            other => Some(other.parse::<FieldKey>()?),
        };

        Ok(Self {
            header: header.trim().to_string(),
            field,
        })
    }
}

/// Apply overrides in order through the one-field-one-column rule
///
/// Unmapping always succeeds, so `Header=none` can free a field before a
/// later override claims it for another column.
pub fn apply_overrides(mapping: &mut ColumnMapping, overrides: &[MappingOverride]) -> CscxResult<()> {
    for o in overrides {
        mapping.assign_header(&o.header, o.field)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_map_known_headers() {
        let schema = Schema::customers();
        let mapping = auto_map(
            &headers(&["Company", "ARR", "Health", "Stage", "Email", "Notes"]),
            &schema,
        );

        assert_eq!(mapping.field_for(0), Some(FieldKey::Name));
        assert_eq!(mapping.field_for(1), Some(FieldKey::Arr));
        assert_eq!(mapping.field_for(2), Some(FieldKey::HealthScore));
        assert_eq!(mapping.field_for(3), Some(FieldKey::Stage));
        assert_eq!(mapping.field_for(4), Some(FieldKey::PrimaryContactEmail));
        assert_eq!(mapping.field_for(5), None);
    }

    #[test]
    fn test_auto_map_first_match_wins() {
        let schema = Schema::customers();
        let mapping = auto_map(&headers(&["Revenue", "ARR"]), &schema);

        assert_eq!(mapping.field_for(0), Some(FieldKey::Arr));
        assert_eq!(mapping.field_for(1), None);
        assert!(mapping.is_consistent());
    }

    #[test]
    fn test_auto_map_normalizes_case_and_whitespace() {
        let schema = Schema::customers();
        let mapping = auto_map(&headers(&["  CUSTOMER NAME "]), &schema);
        assert_eq!(mapping.field_for(0), Some(FieldKey::Name));
    }

    #[test]
    fn test_auto_map_duplicate_headers_stay_distinct() {
        let schema = Schema::customers();
        let mapping = auto_map(&headers(&["Name", "Name"]), &schema);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.field_for(0), Some(FieldKey::Name));
        assert_eq!(mapping.field_for(1), None);
    }

    #[test]
    fn test_parse_override() {
        let o: MappingOverride = "Revenue=arr".parse().unwrap();
        assert_eq!(o.header, "Revenue");
        assert_eq!(o.field, Some(FieldKey::Arr));

        let o: MappingOverride = "Notes = none".parse().unwrap();
        assert_eq!(o.field, None);

        assert!("Revenue".parse::<MappingOverride>().is_err());
        assert!("Revenue=bogus".parse::<MappingOverride>().is_err());
    }

    #[test]
    fn test_apply_overrides_in_order() {
        let schema = Schema::customers();
        let mut mapping = auto_map(&headers(&["Revenue", "ARR"]), &schema);

        let overrides = vec![
            "Revenue=none".parse().unwrap(),
            "ARR=arr".parse().unwrap(),
        ];
        apply_overrides(&mut mapping, &overrides).unwrap();
        assert_eq!(mapping.field_for(0), None);
        assert_eq!(mapping.field_for(1), Some(FieldKey::Arr));
    }

    #[test]
    fn test_apply_overrides_rejects_conflict() {
        let schema = Schema::customers();
        let mut mapping = auto_map(&headers(&["Revenue", "ARR"]), &schema);

        let overrides = vec!["ARR=arr".parse().unwrap()];
        let err = apply_overrides(&mut mapping, &overrides).unwrap_err();
        assert!(matches!(err, CscxError::FieldAlreadyMapped { .. }));
    }
}

#[cfg(test)]
pub(crate) mod proptests {
    use super::*;
    use crate::models::ParsedDocument;
    use proptest::prelude::*;

    const CELLS: &[&str] = &[
        "", "  ", "Acme", " Globex ", "$120,000", "85", "150", "-3", "lots", "2026-01-31",
        "31/01/2026", "at risk", "Churned", "ana@acme.io", "not-an-email",
    ];

    /// A header drawn from the schema aliases or a few unknown names
    pub(crate) fn header() -> impl Strategy<Value = String> {
        let mut names: Vec<&'static str> = Schema::customers()
            .fields()
            .iter()
            .flat_map(|field| field.aliases.iter().copied())
            .collect();
        names.extend(["notes", "owner", "id", ""]);

        (prop::sample::select(names), any::<bool>()).prop_map(|(name, shout)| {
            if shout {
                format!("  {}  ", name.to_uppercase())
            } else {
                name.to_string()
            }
        })
    }

    /// A document with alias headers and ragged rows of mixed values
    pub(crate) fn document() -> impl Strategy<Value = ParsedDocument> {
        (
            prop::collection::vec(header(), 1..8),
            prop::collection::vec(
                prop::collection::vec(prop::sample::select(CELLS), 0..10),
                0..12,
            ),
        )
            .prop_map(|(headers, rows)| {
                let rows: Vec<Vec<String>> = rows
                    .into_iter()
                    .map(|row| row.into_iter().map(str::to_string).collect::<Vec<_>>())
                    .collect();
                ParsedDocument::new(headers, rows)
            })
    }

    /// A document paired with an arbitrary consistent mapping
    pub(crate) fn mapped_document() -> impl Strategy<Value = (ParsedDocument, ColumnMapping)> {
        document().prop_flat_map(|doc| {
            let width = doc.column_count();
            let picks = prop::collection::vec(
                prop::option::of(prop::sample::select(FieldKey::ALL.to_vec())),
                width,
            );
            (Just(doc), picks).prop_map(|(doc, picks)| {
                let mut mapping = ColumnMapping::unmapped(&doc.headers);
                for (column, key) in picks.into_iter().enumerate() {
                    if let Some(key) = key {
                        mapping.claim(column, key);
                    }
                }
                (doc, mapping)
            })
        })
    }

    proptest! {
        #[test]
        fn auto_map_never_maps_a_field_twice(headers in prop::collection::vec(header(), 0..16)) {
            let mapping = auto_map(&headers, &Schema::customers());
            prop_assert!(mapping.is_consistent());
            prop_assert_eq!(mapping.len(), headers.len());
        }

        #[test]
        fn claimed_mappings_stay_consistent((_, mapping) in mapped_document()) {
            prop_assert!(mapping.is_consistent());
        }
    }
}
