use crate::detail::{ErrorCode, ErrorDetail, FieldErrors, NON_FIELD_ERRORS};
use crate::field::{type_name, FieldSpec, Validated, Validator};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Validated values keyed by field name. Absent optional fields are omitted.
pub type ValidatedObject = BTreeMap<String, Validated>;

// ---------------------------------------------------------------------------
// ObjectSchema
// ---------------------------------------------------------------------------

/// The set of fields a JSON object is validated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectSchema {
    pub fields: BTreeMap<String, FieldSpec>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field registration.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Validate every declared field of `payload`.
    ///
    /// All failing fields are reported together. Keys that are not declared
    /// are ignored and do not appear in the output.
    pub fn validate(&self, payload: &Value) -> Result<ValidatedObject, FieldErrors> {
        let Value::Object(map) = payload else {
            let mut errors = FieldErrors::new();
            errors.insert(
                NON_FIELD_ERRORS,
                ErrorDetail::new(
                    format!(
                        "Invalid data. Expected a dictionary, but got {}.",
                        type_name(payload)
                    ),
                    ErrorCode::Invalid,
                ),
            );
            return Err(errors);
        };

        let mut validated = ValidatedObject::new();
        let mut errors = FieldErrors::new();

        for (name, spec) in &self.fields {
            match map.get(name) {
                None => {
                    if spec.required {
                        errors.insert(name.as_str(), ErrorDetail::required());
                    }
                }
                Some(Value::Null) => {
                    if spec.allow_null {
                        validated.insert(name.clone(), Validated::Null);
                    } else {
                        errors.insert(name.as_str(), ErrorDetail::null());
                    }
                }
                Some(value) => match spec.kind.validate(value) {
                    Ok(v) => {
                        validated.insert(name.clone(), v);
                    }
                    Err(e) => errors.insert(name.as_str(), e),
                },
            }
        }

        if errors.is_empty() {
            Ok(validated)
        } else {
            tracing::debug!(fields = errors.len(), "payload failed validation");
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
