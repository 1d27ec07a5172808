use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Accumulated validation failures, keyed by request field.
///
/// Collected across every declared rule before the request is rejected, so a
/// response enumerates all failing fields at once instead of stopping at the
/// first one. Backed by a `BTreeMap` to keep the serialized order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failure message for a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if it failed.
    pub fn messages(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();

        for (field, failures) in errors.field_errors() {
            let messages: Vec<String> = failures
                .iter()
                .map(|failure| {
                    failure
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        // Rules declared without a message fall back to the rule code
                        .unwrap_or_else(|| failure.code.to_string())
                })
                .collect();

            fields.insert(field.to_string(), messages);
        }

        Self(fields)
    }
}
