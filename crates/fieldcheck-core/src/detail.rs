use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Key used for errors that belong to the payload as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Invalid,
    Required,
    Null,
    Blank,
    MaxLength,
    NotAList,
    Empty,
    UnknownActor,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Invalid => "invalid",
            ErrorCode::Required => "required",
            ErrorCode::Null => "null",
            ErrorCode::Blank => "blank",
            ErrorCode::MaxLength => "max_length",
            ErrorCode::NotAList => "not_a_list",
            ErrorCode::Empty => "empty",
            ErrorCode::UnknownActor => "unknown_actor",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ErrorDetail
// ---------------------------------------------------------------------------

/// One human-readable validation message plus its machine code.
///
/// Serializes as the bare message string; the code is for Rust callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: String,
    pub code: ErrorCode,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn required() -> Self {
        Self::new("This field is required.", ErrorCode::Required)
    }

    pub fn null() -> Self {
        Self::new("This field may not be null.", ErrorCode::Null)
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Serialize for ErrorDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}

// ---------------------------------------------------------------------------
// FieldError / FieldErrors
// ---------------------------------------------------------------------------

/// Errors attached to a single field: either a flat message list or, for
/// fields holding objects, the nested object's own field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldError {
    Messages(Vec<ErrorDetail>),
    Nested(FieldErrors),
}

impl FieldError {
    pub fn single(detail: ErrorDetail) -> Self {
        FieldError::Messages(vec![detail])
    }

    /// Flat messages for this field, empty when the error is nested.
    pub fn messages(&self) -> &[ErrorDetail] {
        match self {
            FieldError::Messages(m) => m,
            FieldError::Nested(_) => &[],
        }
    }
}

impl From<ErrorDetail> for FieldError {
    fn from(detail: ErrorDetail) -> Self {
        FieldError::single(detail)
    }
}

/// Field name → errors, for every field of a payload that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, error: impl Into<FieldError>) {
        self.0.insert(field.into(), error.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldError)> {
        self.0.iter()
    }

    /// Flatten into `path: message` lines, nested fields joined with `.`.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_lines("", &mut out);
        out
    }

    fn collect_lines(&self, prefix: &str, out: &mut Vec<String>) {
        for (field, error) in &self.0 {
            let path = if prefix.is_empty() {
                field.clone()
            } else {
                format!("{prefix}.{field}")
            };
            match error {
                FieldError::Messages(details) => {
                    for d in details {
                        out.push(format!("{path}: {d}"));
                    }
                }
                FieldError::Nested(inner) => inner.collect_lines(&path, out),
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("; "))
    }
}

impl From<FieldErrors> for FieldError {
    fn from(errors: FieldErrors) -> Self {
        FieldError::Nested(errors)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
