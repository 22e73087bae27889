use anyhow::Context;
use punchcard_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing punchcard in: {}", root.display());

    let config_path = paths::config_path(root);
    let data = serde_yaml::to_string(&Config::default()).context("failed to serialize config")?;
    let written = io::write_if_missing(&config_path, data.as_bytes())
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    if written {
        tracing::info!(path = %config_path.display(), "created config");
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }
    Ok(())
}
