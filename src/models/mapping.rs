//! Column mapping
//!
//! Associates every column of a parsed document with at most one schema
//! field. Entries are addressed by column position so that two columns with
//! the same header name stay distinct.

use serde::{Deserialize, Serialize};

use super::field::{FieldDefinition, FieldKey};
use super::schema::Schema;
use crate::error::{CscxError, CscxResult};

/// One column and the field it feeds, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// Source header
    pub header: String,
    /// Target field (None = unmapped)
    pub field: Option<FieldKey>,
}

/// A field option as presented by a mapping selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub key: FieldKey,
    pub label: &'static str,
    pub required: bool,
    /// Column currently holding this field, when it is not the column being edited
    pub claimed_by: Option<usize>,
}

impl FieldOption {
    /// Whether the option can be chosen for the column being edited
    pub fn is_available(&self) -> bool {
        self.claimed_by.is_none()
    }
}

/// Column -> field mapping for one import session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: Vec<ColumnAssignment>,
}

impl ColumnMapping {
    /// Create a mapping with every header unmapped
    pub fn unmapped(headers: &[String]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|header| ColumnAssignment {
                    header: header.clone(),
                    field: None,
                })
                .collect(),
        }
    }

    /// All columns, in header order
    pub fn columns(&self) -> &[ColumnAssignment] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the mapping has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Field assigned to a column
    pub fn field_for(&self, column: usize) -> Option<FieldKey> {
        self.columns.get(column).and_then(|c| c.field)
    }

    /// Column currently mapped to a field
    pub fn column_for(&self, key: FieldKey) -> Option<usize> {
        self.columns.iter().position(|c| c.field == Some(key))
    }

    /// Check whether a field is mapped to any column
    pub fn is_mapped(&self, key: FieldKey) -> bool {
        self.column_for(key).is_some()
    }

    /// Mapped columns as `(column index, field)` pairs, in column order
    pub fn mapped(&self) -> impl Iterator<Item = (usize, FieldKey)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(idx, c)| c.field.map(|key| (idx, key)))
    }

    /// Number of mapped columns
    pub fn mapped_count(&self) -> usize {
        self.mapped().count()
    }

    /// Index of the first column with the given header
    pub fn column_index(&self, header: &str) -> Option<usize> {
        let wanted = header.trim();
        self.columns.iter().position(|c| c.header == wanted).or_else(|| {
            let lowered = wanted.to_lowercase();
            self.columns
                .iter()
                .position(|c| c.header.to_lowercase() == lowered)
        })
    }

    /// Assign (or clear) the field of a column
    ///
    /// A field can feed only one column: assigning a field that another
    /// column already holds fails with `FieldAlreadyMapped`.
    pub fn assign(&mut self, column: usize, field: Option<FieldKey>) -> CscxResult<()> {
        if column >= self.columns.len() {
            return Err(CscxError::UnknownColumn(format!("#{}", column + 1)));
        }

        if let Some(key) = field {
            if let Some(owner) = self.column_for(key) {
                if owner != column {
                    return Err(CscxError::already_mapped(
                        key.as_str(),
                        self.columns[owner].header.clone(),
                    ));
                }
            }
        }

        self.columns[column].field = field;
        Ok(())
    }

    /// Map `column` to `key` unless another column already owns it
    ///
    /// Returns false, leaving the mapping unchanged, when the key is taken or
    /// the column does not exist.
    pub(crate) fn claim(&mut self, column: usize, key: FieldKey) -> bool {
        if column >= self.columns.len() || self.is_mapped(key) {
            return false;
        }
        self.columns[column].field = Some(key);
        true
    }

    /// Assign by header name (used by command-line overrides)
    pub fn assign_header(&mut self, header: &str, field: Option<FieldKey>) -> CscxResult<()> {
        let column = self
            .column_index(header)
            .ok_or_else(|| CscxError::UnknownColumn(header.trim().to_string()))?;
        self.assign(column, field)
    }

    /// Options for a selector on `column`, with fields held by other columns
    /// flagged as claimed
    pub fn available_fields(&self, column: usize, schema: &Schema) -> Vec<FieldOption> {
        schema
            .fields()
            .iter()
            .map(|def: &FieldDefinition| FieldOption {
                key: def.key,
                label: def.label,
                required: def.required,
                claimed_by: self.column_for(def.key).filter(|owner| *owner != column),
            })
            .collect()
    }

    /// Check the one-field-one-column invariant
    pub fn is_consistent(&self) -> bool {
        let mut seen = Vec::new();
        for (_, key) in self.mapped() {
            if seen.contains(&key) {
                return false;
            }
            seen.push(key);
        }
        true
    }
}
