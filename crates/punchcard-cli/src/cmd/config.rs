use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use punchcard_core::config::{Config, WarnLevel};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (defaults filled in)
    Show,

    /// Set a config key and save (e.g. `export.dir cards`)
    Set {
        /// Dotted key: render.escape_xml, export.dir or clipboard.command
        key: String,
        /// New value; an empty clipboard.command restores auto-detection
        value: String,
    },

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Set { key, value } => set(root, &key, &value, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    if json {
        print_json(&config)?;
    } else {
        let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
        print!("{yaml}");
    }
    Ok(())
}

fn set(root: &Path, key: &str, value: &str, json: bool) -> anyhow::Result<()> {
    let mut config = Config::load(root).context("failed to load config")?;
    config
        .set(key, value)
        .with_context(|| format!("cannot set {key}"))?;
    config.save(root).context("failed to save config")?;
    tracing::info!(key, value, "updated config");

    if json {
        print_json(&config)?;
    } else {
        println!("{key} = {value}");
    }
    Ok(())
}

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
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

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
