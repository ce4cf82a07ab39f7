use crate::error::{FieldcheckError, Result};
use crate::field::{CharField, FieldKind, FieldSpec, ListField};
use crate::paths;
use crate::schema::ObjectSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const DEFAULT_SCHEMA: &str = "assignment";

/// The only config file format version this build reads.
pub const SUPPORTED_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3141
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_schemas")]
    pub schemas: BTreeMap<String, ObjectSchema>,
}

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

/// The `assignment` schema: an optional assignee and an optional list of
/// ownership rules.
fn default_schemas() -> BTreeMap<String, ObjectSchema> {
    let rule = ObjectSchema::new()
        .field(
            "matcher",
            FieldSpec::new(FieldKind::Char(CharField::with_max_length(64))),
        )
        .field(
            "pattern",
            FieldSpec::new(FieldKind::Char(CharField::with_max_length(64))),
        );

    let assignment = ObjectSchema::new()
        .field("assignee", FieldSpec::new(FieldKind::Actor).optional())
        .field(
            "rules",
            FieldSpec::new(FieldKind::List(ListField::new(rule))).optional(),
        );

    let mut m = BTreeMap::new();
    m.insert(DEFAULT_SCHEMA.to_string(), assignment);
    m
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerConfig::default(),
            schemas: default_schemas(),
        }
    }
}

impl Config {
    pub fn schema(&self, name: &str) -> Result<&ObjectSchema> {
        self.schemas
            .get(name)
            .ok_or_else(|| FieldcheckError::SchemaNotFound(name.to_string()))
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(FieldcheckError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        if cfg.version != SUPPORTED_VERSION {
            return Err(FieldcheckError::InvalidConfig(format!(
                "unsupported config version {} (expected {SUPPORTED_VERSION})",
                cfg.version
            )));
        }
        Ok(cfg)
    }

    /// Like [`Config::load`], but an uninitialized root yields the defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(FieldcheckError::NotInitialized) => {
                tracing::debug!(root = %root.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Write the config through a tempfile in the same directory so readers
    /// never see a partial file.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let dir = paths::fieldcheck_dir(root);
        std::fs::create_dir_all(&dir)?;
        let data = serde_yaml::to_string(self)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(data.as_bytes())?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Lint the config for mistakes that would make schemas unusable.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.schemas.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "no schemas defined; only actor resolution is available".to_string(),
            });
        }

        for (name, schema) in &self.schemas {
            if !paths::is_valid_schema_name(name) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "schema name '{name}' must be lowercase alphanumeric with '-' or '_'"
                    ),
                });
            }
            lint_schema(name, schema, &mut warnings);
        }

        warnings
    }
}

fn lint_schema(path: &str, schema: &ObjectSchema, warnings: &mut Vec<ConfigWarning>) {
    if schema.fields.is_empty() {
        warnings.push(ConfigWarning {
            level: WarnLevel::Warning,
            message: format!("schema '{path}' declares no fields"),
        });
    }

    for (field, spec) in &schema.fields {
        let field_path = format!("{path}.{field}");
        match &spec.kind {
            FieldKind::Char(c) if c.max_length == Some(0) => {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("field '{field_path}' has max_length 0 and accepts nothing"),
                });
            }
            FieldKind::List(l) => {
                if !l.allow_empty && !spec.required {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "field '{field_path}' is optional but rejects empty lists"
                        ),
                    });
                }
                lint_schema(&field_path, &l.child, warnings);
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
