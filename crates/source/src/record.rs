use serde_json::{Map, Value};

/// Rendered in place of any field a record does not carry.
pub const PLACEHOLDER: &str = "N/A";

/// Canonical field names read by the document composer.
pub mod fields {
    pub const INVOICE_ID: &str = "invoice_id";
    pub const CUSTOMER_NAME: &str = "customer_name";
    pub const DATE: &str = "date";
    pub const AMOUNT: &str = "amount";
    pub const DESCRIPTION: &str = "description";
}

/// Text form of a scalar field value.
///
/// Nulls and nested values have no text form and count as absent.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A located invoice.
///
/// Fields are kept as the source spelled them; an identifier found only under
/// a fallback name is not copied into [`fields::INVOICE_ID`]. All reads go
/// through [`NormalizedRecord::text_or`], so the placeholder policy for absent
/// fields lives in one place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedRecord {
    fields: Map<String, Value>,
}

impl NormalizedRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(scalar_text)
    }

    pub fn text_or(&self, field: &str, default: &str) -> String {
        self.text(field).unwrap_or_else(|| default.to_string())
    }

    pub fn invoice_id(&self) -> String {
        self.text_or(fields::INVOICE_ID, PLACEHOLDER)
    }

    pub fn customer_name(&self) -> String {
        self.text_or(fields::CUSTOMER_NAME, PLACEHOLDER)
    }

    pub fn date(&self) -> String {
        self.text_or(fields::DATE, PLACEHOLDER)
    }

    pub fn amount(&self) -> String {
        self.text_or(fields::AMOUNT, PLACEHOLDER)
    }

    pub fn description(&self) -> String {
        self.text_or(fields::DESCRIPTION, PLACEHOLDER)
    }
}

impl From<Map<String, Value>> for NormalizedRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
