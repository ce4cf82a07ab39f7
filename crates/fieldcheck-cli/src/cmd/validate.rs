use crate::output::print_json;
use anyhow::Context;
use fieldcheck_core::config::Config;
use std::io::Read;
use std::path::Path;

pub fn run(root: &Path, schema_name: &str, input: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load config")?;
    let schema = config.schema(schema_name)?;

    let raw = read_input(input)?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("payload is not valid JSON")?;

    match schema.validate(&payload) {
        Ok(validated) => {
            if json {
                print_json(&serde_json::json!({ "validated_data": validated }))?;
            } else {
                println!("valid: {} field(s) accepted", validated.len());
                for (field, value) in &validated {
                    println!("  {field}: {}", serde_json::to_string(value)?);
                }
            }
            Ok(())
        }
        Err(errors) => {
            if json {
                print_json(&serde_json::json!({ "errors": errors }))?;
            } else {
                for line in errors.lines() {
                    println!("  {line}");
                }
            }
            anyhow::bail!(
                "payload failed validation against '{schema_name}' ({} field(s))",
                errors.len()
            )
        }
    }
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}
