//! Per-call view of a record's configured fields.
//!
//! A record is serialized to JSON once, then each configured field is read,
//! normalized and tokenized. Scoring and suggestion classification both work
//! from this view so no field is normalized twice within a call.

use crate::config::{FieldSource, FieldSpec};
use crate::text::{normalize, split_normalized};
use serde::Serialize;
use serde_json::Value;

/// Normalized text of one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldText {
  /// Normalized field value; empty when the field is missing.
  pub normalized: String,
  /// Whitespace tokens of `normalized`.
  pub tokens: Vec<String>,
  /// Whether token containment may consider this field.
  pub(crate) containment: bool,
}

impl FieldText {
  /// Normalize raw field text.
  pub fn new(raw: &str) -> Self {
    let normalized = normalize(raw);
    let tokens = split_normalized(&normalized);
    Self {
      normalized,
      tokens,
      containment: true,
    }
  }

  /// True when the field had no usable text.
  pub fn is_empty(&self) -> bool {
    self.normalized.is_empty()
  }
}

/// The configured fields of one record, in config order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordView {
  fields: Vec<FieldText>,
}

impl RecordView {
  /// Build the view for `item`.
  ///
  /// A record that does not serialize to a JSON object yields empty fields
  /// rather than an error.
  pub fn extract<T>(item: &T, specs: &[FieldSpec]) -> Self
  where
    T: Serialize,
  {
    let value = match serde_json::to_value(item) {
      Ok(value) => value,
      Err(err) => {
        tracing::trace!(error = %err, "record failed to serialize, scoring as empty");
        Value::Null
      }
    };

    let fields = specs
      .iter()
      .map(|spec| match &spec.source {
        FieldSource::Value => extract_text(&value, &spec.name)
          .map(|text| FieldText::new(&text))
          .unwrap_or_default(),
        FieldSource::Flags { keys } => FieldText {
          containment: false,
          ..FieldText::new(&truthy_flags(&value, keys))
        },
      })
      .map(|mut field| {
        if field.is_empty() {
          field.containment = false;
        }
        field
      })
      .collect();

    Self { fields }
  }

  /// Field texts aligned with the config's field list.
  pub fn fields(&self) -> &[FieldText] {
    &self.fields
  }

  /// Some field equals the normalized query.
  pub fn any_equals(&self, normalized_query: &str) -> bool {
    self.fields.iter().any(|f| !f.is_empty() && f.normalized == normalized_query)
  }

  /// Some field contains the normalized query (a prefix match is a special
  /// case of containment). An empty query is contained in nothing.
  pub fn any_contains(&self, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
      return false;
    }
    self
      .fields
      .iter()
      .any(|f| !f.is_empty() && f.normalized.contains(normalized_query))
  }

  /// Some query token is a substring or superstring of a token of a plain
  /// value field. Synthetic flag fields never take part.
  pub fn any_token_containment(&self, query_tokens: &[String]) -> bool {
    self.fields.iter().filter(|f| f.containment).any(|f| {
      query_tokens.iter().any(|q| {
        f.tokens
          .iter()
          .any(|t| t.contains(q.as_str()) || q.contains(t.as_str()))
      })
    })
  }
}

/// Extract a field's text from a JSON value. Numbers are stringified; other
/// non-string values have no text.
fn extract_text(value: &Value, field: &str) -> Option<String> {
  match value.get(field)? {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}

/// Join the listed keys whose value is truthy.
fn truthy_flags(value: &Value, keys: &[String]) -> String {
  keys
    .iter()
    .filter(|key| value.get(key.as_str()).is_some_and(is_truthy))
    .map(String::as_str)
    .collect::<Vec<_>>()
    .join(" ")
}

/// `true`, a non-empty string, or a non-zero number.
pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Bool(b) => *b,
    Value::String(s) => !s.is_empty(),
    Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
    _ => false,
  }
}
