use crate::actor::{resolve_actor, ActorReference};
use crate::detail::{ErrorCode, ErrorDetail, FieldError};
use crate::schema::{ObjectSchema, ValidatedObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_ACTOR_INPUT: &str = "Unknown actor input";

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Turn one raw JSON value into a validated value or a field error.
///
/// Presence and null handling live in [`ObjectSchema`]; validators only see
/// values that are present and non-null.
pub trait Validator {
    fn validate(&self, value: &Value) -> Result<Validated, FieldError>;
}

// ---------------------------------------------------------------------------
// Validated
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Validated {
    Null,
    Text(String),
    Actor(ActorReference),
    List(Vec<ValidatedObject>),
}

impl Validated {
    pub fn as_actor(&self) -> Option<&ActorReference> {
        match self {
            Validated::Actor(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Validated::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ValidatedObject]> {
        match self {
            Validated::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// JSON type name used in error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

// ---------------------------------------------------------------------------
// FieldSpec / FieldKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub allow_null: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

fn default_required() -> bool {
    true
}

impl FieldSpec {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            required: true,
            allow_null: false,
            kind,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.allow_null = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Char(CharField),
    Actor,
    List(ListField),
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Char(_) => "char",
            FieldKind::Actor => "actor",
            FieldKind::List(_) => "list",
        }
    }
}

impl Validator for FieldKind {
    fn validate(&self, value: &Value) -> Result<Validated, FieldError> {
        match self {
            FieldKind::Char(f) => f.validate(value),
            FieldKind::Actor => ActorField.validate(value),
            FieldKind::List(f) => f.validate(value),
        }
    }
}

// ---------------------------------------------------------------------------
// CharField
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub allow_blank: bool,
}

impl CharField {
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            allow_blank: false,
        }
    }
}

impl Validator for CharField {
    fn validate(&self, value: &Value) -> Result<Validated, FieldError> {
        let Value::String(s) = value else {
            return Err(ErrorDetail::new("Not a valid string.", ErrorCode::Invalid).into());
        };

        if !self.allow_blank && s.trim().is_empty() {
            return Err(ErrorDetail::new("This field may not be blank.", ErrorCode::Blank).into());
        }

        if let Some(max) = self.max_length {
            if s.chars().count() > max {
                return Err(ErrorDetail::new(
                    format!("Ensure this field has no more than {max} characters."),
                    ErrorCode::MaxLength,
                )
                .into());
            }
        }

        Ok(Validated::Text(s.clone()))
    }
}

// ---------------------------------------------------------------------------
// ActorField
// ---------------------------------------------------------------------------

/// Accepts the tokens understood by [`resolve_actor`]. A JSON integer is
/// read as its decimal spelling, so `1` behaves like `"1"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorField;

impl Validator for ActorField {
    fn validate(&self, value: &Value) -> Result<Validated, FieldError> {
        let resolved = match value {
            Value::String(s) => resolve_actor(s).ok(),
            Value::Number(n) => n.as_u64().and_then(|id| resolve_actor(&id.to_string()).ok()),
            _ => None,
        };

        resolved
            .map(Validated::Actor)
            .ok_or_else(|| ErrorDetail::new(UNKNOWN_ACTOR_INPUT, ErrorCode::UnknownActor).into())
    }
}

// ---------------------------------------------------------------------------
// ListField
// ---------------------------------------------------------------------------

/// A list whose items are objects validated against `child`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListField {
    pub child: ObjectSchema,
    #[serde(default = "default_allow_empty")]
    pub allow_empty: bool,
    #[serde(default)]
    pub allow_null_items: bool,
}

fn default_allow_empty() -> bool {
    true
}

impl ListField {
    pub fn new(child: ObjectSchema) -> Self {
        Self {
            child,
            allow_empty: true,
            allow_null_items: false,
        }
    }
}

impl Validator for ListField {
    fn validate(&self, value: &Value) -> Result<Validated, FieldError> {
        let Value::Array(items) = value else {
            return Err(ErrorDetail::new(
                format!(
                    "Expected a list of items but got type \"{}\".",
                    type_name(value)
                ),
                ErrorCode::NotAList,
            )
            .into());
        };

        if items.is_empty() && !self.allow_empty {
            return Err(ErrorDetail::new("This list may not be empty.", ErrorCode::Empty).into());
        }

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if item.is_null() {
                if self.allow_null_items {
                    continue;
                }
                return Err(ErrorDetail::null().into());
            }
            // First failing item wins; its errors are reported as the list's own.
            out.push(self.child.validate(item)?);
        }

        Ok(Validated::List(out))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
