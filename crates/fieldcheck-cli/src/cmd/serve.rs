use anyhow::Context;
use fieldcheck_core::config::{Config, WarnLevel};
use std::path::Path;

pub fn run(root: &Path, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(root).context("failed to load config")?;

    for w in config.validate() {
        match w.level {
            WarnLevel::Warning => tracing::warn!("{}", w.message),
            WarnLevel::Error => tracing::error!("{}", w.message),
        }
    }

    if let Some(h) = host {
        config.server.host = h;
    }
    if let Some(p) = port {
        config.server.port = p;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(fieldcheck_server::serve(config))
}
