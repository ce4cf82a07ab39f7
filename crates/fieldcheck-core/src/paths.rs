use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const FIELDCHECK_DIR: &str = ".fieldcheck";
pub const CONFIG_FILE: &str = ".fieldcheck/config.yaml";

pub fn fieldcheck_dir(root: &Path) -> PathBuf {
    root.join(FIELDCHECK_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Schema names
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_\-]*$").unwrap())
}

/// Schema names appear in URLs, so they are restricted to lowercase
/// alphanumerics, `-` and `_`.
pub fn is_valid_schema_name(name: &str) -> bool {
    name.len() <= 64 && name_re().is_match(name)
}
