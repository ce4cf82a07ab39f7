use anyhow::Context;
use fieldcheck_core::{config::Config, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing fieldcheck in: {}", root.display());

    let config_path = paths::config_path(root);
    if config_path.exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        return Ok(());
    }

    Config::default()
        .save(root)
        .context("failed to write config.yaml")?;
    println!("  created: {}", paths::CONFIG_FILE);
    Ok(())
}
