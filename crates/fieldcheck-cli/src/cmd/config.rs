use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use fieldcheck_core::config::{Config, WarnLevel};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load config")?;

    if json {
        return print_json(&config);
    }

    println!("server: {}:{}", config.server.host, config.server.port);
    let rows: Vec<Vec<String>> = config
        .schemas
        .iter()
        .flat_map(|(name, schema)| {
            schema.fields.iter().map(move |(field, spec)| {
                vec![
                    name.clone(),
                    field.clone(),
                    spec.kind.as_str().to_string(),
                    if spec.required { "yes" } else { "no" }.to_string(),
                ]
            })
        })
        .collect();
    print_table(&["SCHEMA", "FIELD", "TYPE", "REQUIRED"], &rows);
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
