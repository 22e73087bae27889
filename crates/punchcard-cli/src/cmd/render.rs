use crate::cmd::parse_card;
use crate::output::print_json;
use anyhow::{bail, Context};
use clap::Args;
use punchcard_core::{
    clipboard, config::Config, export, render::render_defaults, FieldValues, FormSession,
    RenderedCard,
};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RenderArgs {
    /// Card type (e.g. bug_fix, feature_request)
    pub card: String,

    /// Set a field value; repeatable (e.g. --set urgency=4)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Read field values from a YAML or JSON file (applied before --set)
    #[arg(long, value_name = "FILE")]
    pub values: Option<PathBuf>,

    /// Render even if required fields are empty
    #[arg(long)]
    pub draft: bool,

    /// Escape XML special characters in entered text
    #[arg(long)]
    pub escape: bool,

    /// Copy the rendered card to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Write the rendered card to <title>_<card_type>.xml
    #[arg(long)]
    pub export: bool,

    /// Directory for --export (default: export.dir from config)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

pub fn run(root: &Path, args: RenderArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let card_type = parse_card(&args.card)?;

    let mut form = FormSession::new(card_type);

    if let Some(path) = &args.values {
        let values = FieldValues::load(path, form.template())
            .with_context(|| format!("failed to read values from {}", path.display()))?;
        form.apply(values)
            .with_context(|| format!("invalid values in {}", path.display()))?;
    }

    for assignment in &args.set {
        let Some((name, raw)) = assignment.split_once('=') else {
            bail!("--set expects NAME=VALUE, got '{assignment}'");
        };
        form.set_raw(name.trim(), raw)
            .with_context(|| format!("invalid --set {assignment}"))?;
    }

    let mut opts = config.render.options();
    if args.escape {
        opts.escape_xml = true;
    }

    let card: RenderedCard = if args.draft {
        form.preview(&opts).context("failed to render card")?
    } else {
        form.submit(&opts)
            .context("card not submitted (pass --draft to render anyway)")?
            .clone()
    };
    tracing::debug!(card_type = %card.card_type, bytes = card.xml.len(), "rendered card");

    let exported_to = if args.export {
        let dir = match &args.out {
            Some(out) => out.clone(),
            None => config.export_dir(root),
        };
        let path = export::write_card(&dir, &card)
            .with_context(|| format!("failed to export to {}", dir.display()))?;
        tracing::info!(path = %path.display(), "exported card");
        Some(path)
    } else {
        None
    };

    let copied = if args.copy {
        copy_to_clipboard(&card, config.clipboard.command.as_deref())
    } else {
        false
    };

    if json {
        return print_json(&serde_json::json!({
            "card_type": card.card_type,
            "title": card.title,
            "filename": card.filename,
            "mime": card.mime(),
            "xml": card.xml,
            "exported_to": exported_to,
            "copied": copied,
        }));
    }

    print!("{}", card.xml);
    if let Some(path) = &exported_to {
        eprintln!("exported: {}", path.display());
    }
    if args.copy {
        eprintln!("{}", if copied { "copied to clipboard" } else { "not copied" });
    }
    Ok(())
}

/// Clipboard failures are reported, never fatal.
fn copy_to_clipboard(card: &RenderedCard, command: Option<&str>) -> bool {
    match clipboard::copy(&card.xml, command) {
        Ok(program) => {
            tracing::info!(program = %program, "copied card to clipboard");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            false
        }
    }
}

pub fn defaults(card: &str, json: bool) -> anyhow::Result<()> {
    let card_type = parse_card(card)?;
    let xml = render_defaults(card_type).context("failed to render card")?;
    if json {
        return print_json(&serde_json::json!({
            "card_type": card_type,
            "xml": xml,
        }));
    }
    print!("{xml}");
    Ok(())
}
