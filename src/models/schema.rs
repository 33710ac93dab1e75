//! The customer import schema
//!
//! `Schema::customers()` is the fixed catalog of importable fields. It is a
//! static table; callers pass it explicitly to the mapping, validation and
//! build functions instead of reading it from ambient state.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::field::{
    clean_currency, normalize_enum_value, parse_number, FieldDefinition, FieldKey, FieldKind,
};

/// Allowed lifecycle stages after normalization
pub const STAGE_VALUES: &[&str] = &["active", "onboarding", "at_risk", "churned"];

/// Date formats accepted for renewal dates
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static CUSTOMER_FIELDS: [FieldDefinition; 9] = [
    FieldDefinition {
        key: FieldKey::Name,
        label: "Customer Name",
        required: true,
        aliases: &[
            "name",
            "customer name",
            "customer",
            "company name",
            "company",
            "account name",
            "account",
            "organization",
            "client",
        ],
        kind: FieldKind::Text,
        validator: None,
    },
    FieldDefinition {
        key: FieldKey::Industry,
        label: "Industry",
        required: false,
        aliases: &["industry", "vertical", "sector"],
        kind: FieldKind::Text,
        validator: None,
    },
    FieldDefinition {
        key: FieldKey::Arr,
        label: "ARR",
        required: false,
        aliases: &[
            "arr",
            "annual recurring revenue",
            "revenue",
            "contract value",
            "acv",
        ],
        kind: FieldKind::Currency,
        validator: Some(validate_currency),
    },
    FieldDefinition {
        key: FieldKey::HealthScore,
        label: "Health Score",
        required: false,
        aliases: &["health_score", "health score", "health", "score", "customer health"],
        kind: FieldKind::Numeric,
        validator: Some(validate_health_score),
    },
    FieldDefinition {
        key: FieldKey::Stage,
        label: "Stage",
        required: false,
        aliases: &["stage", "lifecycle stage", "lifecycle", "customer stage", "status"],
        kind: FieldKind::Enumerated(STAGE_VALUES),
        validator: Some(validate_stage),
    },
    FieldDefinition {
        key: FieldKey::RenewalDate,
        label: "Renewal Date",
        required: false,
        aliases: &["renewal_date", "renewal date", "renewal", "contract end", "contract end date"],
        kind: FieldKind::Text,
        validator: Some(validate_date),
    },
    FieldDefinition {
        key: FieldKey::CsmName,
        label: "CSM",
        required: false,
        aliases: &[
            "csm_name",
            "csm",
            "csm name",
            "customer success manager",
            "account owner",
            "owner",
        ],
        kind: FieldKind::Text,
        validator: None,
    },
    FieldDefinition {
        key: FieldKey::PrimaryContactName,
        label: "Primary Contact",
        required: false,
        aliases: &["primary_contact_name", "primary contact", "contact", "contact name"],
        kind: FieldKind::Text,
        validator: None,
    },
    FieldDefinition {
        key: FieldKey::PrimaryContactEmail,
        label: "Contact Email",
        required: false,
        aliases: &[
            "primary_contact_email",
            "primary contact email",
            "contact email",
            "email",
            "email address",
        ],
        kind: FieldKind::Text,
        validator: Some(validate_email),
    },
];

/// An ordered, immutable catalog of field definitions
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldDefinition],
}

impl Schema {
    /// The customer schema used by the import wizard
    pub fn customers() -> Self {
        Self {
            fields: &CUSTOMER_FIELDS,
        }
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &'static [FieldDefinition] {
        self.fields
    }

    /// Look up a field definition
    pub fn field(&self, key: FieldKey) -> Option<&'static FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Display label for a key, falling back to the key itself
    pub fn label(&self, key: FieldKey) -> &'static str {
        self.field(key).map(|f| f.label).unwrap_or_else(|| key.as_str())
    }

    /// The field a row must carry to become a record
    pub fn identity(&self) -> FieldKey {
        self.fields
            .iter()
            .find(|f| f.required)
            .map(|f| f.key)
            .unwrap_or(FieldKey::Name)
    }

    /// Keys in declaration order (the template header)
    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.fields.iter().map(|f| f.key)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::customers()
    }
}

fn validate_currency(value: &str) -> Option<String> {
    match parse_number(&clean_currency(value)) {
        Some(_) => None,
        None => Some("Must be a valid number".to_string()),
    }
}

fn validate_health_score(value: &str) -> Option<String> {
    match parse_number(value) {
        Some(score) if (0.0..=100.0).contains(&score) => None,
        _ => Some("Must be between 0 and 100".to_string()),
    }
}

fn validate_stage(value: &str) -> Option<String> {
    let normalized = normalize_enum_value(value);
    if STAGE_VALUES.contains(&normalized.as_str()) {
        None
    } else {
        Some(format!("Must be one of: {}", STAGE_VALUES.join(", ")))
    }
}

fn validate_email(value: &str) -> Option<String> {
    if EMAIL.is_match(value) {
        None
    } else {
        Some("Must be a valid email address".to_string())
    }
}

fn validate_date(value: &str) -> Option<String> {
    let parsed = DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok());
    if parsed {
        None
    } else {
        Some("Must be a valid date (YYYY-MM-DD)".to_string())
    }
}
