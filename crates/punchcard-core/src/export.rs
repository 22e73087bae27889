use crate::error::Result;
use crate::io::atomic_write;
use crate::render::{render_with, RenderOptions};
use crate::sanitize::sanitize;
use crate::template::CardTemplate;
use crate::types::{CardType, FieldValue};
use crate::values::FieldValues;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const XML_MIME: &str = "application/xml";

/// Export name for cards whose template has no title field.
pub const FIXED_FILENAME: &str = "task_card.xml";

/// `<sanitize(title)>_<card_type>.xml`, or [`FIXED_FILENAME`] for untitled templates.
pub fn export_filename(template: &CardTemplate, title: &str) -> String {
    if template.title_field().is_some() {
        format!("{}_{}.xml", sanitize(title), template.card_type)
    } else {
        FIXED_FILENAME.to_string()
    }
}

// ---------------------------------------------------------------------------
// RenderedCard
// ---------------------------------------------------------------------------

/// A finished task card. Never mutated after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub card_type: CardType,
    pub title: String,
    pub filename: String,
    pub xml: String,
}

impl RenderedCard {
    pub fn build(
        template: &CardTemplate,
        values: &FieldValues,
        opts: &RenderOptions,
    ) -> Result<Self> {
        let xml = render_with(template, values, opts)?;
        let title = match template.title_field().and_then(|f| values.get(f.name)) {
            Some(FieldValue::Text(s)) => s.clone(),
            Some(FieldValue::Rating(n)) => n.to_string(),
            _ => String::new(),
        };
        Ok(Self {
            card_type: template.card_type,
            filename: export_filename(template, &title),
            title,
            xml,
        })
    }

    pub fn mime(&self) -> &'static str {
        XML_MIME
    }
}

/// Write the card's exact bytes to `dir/<filename>`, replacing any existing file.
pub fn write_card(dir: &Path, card: &RenderedCard) -> Result<PathBuf> {
    let path = dir.join(&card.filename);
    atomic_write(&path, card.xml.as_bytes())?;
    Ok(path)
}
