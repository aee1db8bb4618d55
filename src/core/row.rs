use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw cell value as delivered by the data-loading collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Missing,
}

/// One observational unit: named fields in source column order.
///
/// Rows are read-only inputs to aggregation; nothing in this crate mutates a
/// row after it is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: IndexMap<String, FieldValue>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_number(mut self, name: impl Into<String>, value: f64) -> Self {
        self.fields.insert(name.into(), FieldValue::Number(value));
        self
    }

    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Numeric view of a field. Missing or non-numeric cells read as NaN.
    #[must_use]
    pub fn number(&self, name: &str) -> f64 {
        match self.fields.get(name) {
            Some(FieldValue::Number(value)) => *value,
            Some(FieldValue::Text(raw)) => coerce_number(raw),
            Some(FieldValue::Missing) | None => f64::NAN,
        }
    }

    /// Trimmed text view of a field; `None` for numbers, missing cells and
    /// blank text.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(raw)) => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// First non-blank text among `names`, in order.
    #[must_use]
    pub fn first_text(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.text(name))
    }
}

impl FromIterator<(String, FieldValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Parses a raw cell into a number; blank or unparsable input yields NaN.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
