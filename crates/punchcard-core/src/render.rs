use crate::error::{PunchcardError, Result};
use crate::sanitize::sanitize;
use crate::template::{Block, CardTemplate, FieldKind, FieldSpec};
use crate::templates::{DOCS_DIR, FORMAT_LEGEND};
use crate::types::{CardType, FieldValue};
use crate::values::FieldValues;
use std::borrow::Cow;

// ---------------------------------------------------------------------------
// RenderOptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `& < > " '` in user-entered text. Off by default: values are
    /// interpolated verbatim, so a value containing `</tag>` or `&` produces
    /// malformed XML.
    pub escape_xml: bool,
}

impl RenderOptions {
    fn user_text<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.escape_xml {
            escape_xml(s)
        } else {
            Cow::Borrowed(s)
        }
    }
}

pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Where the assistant is told to write its documentation for a card titled `title`.
pub fn documentation_output_path(title: &str) -> String {
    format!("{DOCS_DIR}/{}.md", sanitize(title))
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

pub fn render(template: &CardTemplate, values: &FieldValues) -> Result<String> {
    render_with(template, values, &RenderOptions::default())
}

/// Render the card with every field left at its default.
pub fn render_defaults(card_type: CardType) -> Result<String> {
    let template = CardTemplate::for_type(card_type);
    render(template, &FieldValues::defaults(template))
}

/// Interpolate `values` into the task card XML for `template`.
///
/// Pure: identical inputs always produce byte-identical output. Required
/// fields are not checked here; an empty text field gets its fallback.
pub fn render_with(
    template: &CardTemplate,
    values: &FieldValues,
    opts: &RenderOptions,
) -> Result<String> {
    let resolved = values.resolve(template)?;

    let title = match template.title_field() {
        Some(f) => text_value(f, &resolved[f.name])?,
        None => "",
    };

    let mut doc = String::new();

    doc.push_str(&format!("<task_card type=\"{}\"", template.card_type));
    if !title.is_empty() {
        doc.push_str(&format!(" title=\"{}\"", opts.user_text(title)));
    }
    doc.push_str(">\n");

    doc.push_str("  <meta_instruction>\n");
    for line in template.instruction {
        doc.push_str(&format!("    {line}\n"));
    }
    doc.push_str("  </meta_instruction>\n");

    if let Some(depth) = template.depth_field() {
        let (level, label) = rating_value(depth, &resolved[depth.name])?;
        doc.push_str("\n  <documentation_requirement>\n");
        doc.push_str(&format!(
            "    <detail_level level=\"{level}\">{label}</detail_level>\n"
        ));
        doc.push_str(&format!(
            "    <output_path>{}</output_path>\n",
            documentation_output_path(title)
        ));
        doc.push_str("    <format_legend>\n");
        for line in FORMAT_LEGEND {
            doc.push_str(&format!("      {line}\n"));
        }
        doc.push_str("    </format_legend>\n");
        doc.push_str("  </documentation_requirement>\n");
    }

    doc.push_str(&format!("\n  <{}>\n", template.details_block));
    for field in template.fields_in(Block::Details) {
        push_element(&mut doc, 4, field, &resolved[field.name], opts)?;
    }
    doc.push_str(&format!("  </{}>\n", template.details_block));

    let mut prefs = template.fields_in(Block::Preferences).peekable();
    if prefs.peek().is_some() {
        doc.push_str("\n  <preferences>\n");
        for field in prefs {
            push_element(&mut doc, 4, field, &resolved[field.name], opts)?;
        }
        doc.push_str("  </preferences>\n");
    }

    let categories = template.advanced_categories();
    if !categories.is_empty() {
        doc.push_str("\n  <advanced_config>\n");
        for cat in categories {
            doc.push_str(&format!("    <{cat}>\n"));
            for field in template.fields_in(Block::Advanced(cat)) {
                push_element(&mut doc, 6, field, &resolved[field.name], opts)?;
            }
            doc.push_str(&format!("    </{cat}>\n"));
        }
        doc.push_str("  </advanced_config>\n");
    }

    doc.push_str("</task_card>\n");
    Ok(doc)
}

fn push_element(
    doc: &mut String,
    indent: usize,
    field: &FieldSpec,
    value: &FieldValue,
    opts: &RenderOptions,
) -> Result<()> {
    let pad = " ".repeat(indent);
    let name = field.name;
    match field.kind {
        FieldKind::Text { fallback } => {
            let text = text_value(field, value)?;
            let shown = if text.is_empty() {
                Cow::Borrowed(fallback)
            } else {
                opts.user_text(text)
            };
            doc.push_str(&format!("{pad}<{name}>{shown}</{name}>\n"));
        }
        FieldKind::Toggle { on, off } => {
            let FieldValue::Toggle(b) = value else {
                return Err(mismatch(field, value));
            };
            let token = if *b { on } else { off };
            doc.push_str(&format!("{pad}<{name}>{token}</{name}>\n"));
        }
        FieldKind::Rating { .. } => {
            let (level, label) = rating_value(field, value)?;
            doc.push_str(&format!("{pad}<{name} level=\"{level}\">{label}</{name}>\n"));
        }
        // The title lives on the root element.
        FieldKind::Title => {}
    }
    Ok(())
}

fn text_value<'v>(field: &FieldSpec, value: &'v FieldValue) -> Result<&'v str> {
    match value {
        FieldValue::Text(s) => Ok(s),
        other => Err(mismatch(field, other)),
    }
}

fn rating_value(field: &FieldSpec, value: &FieldValue) -> Result<(u8, &'static str)> {
    let (FieldKind::Rating { labels, .. }, FieldValue::Rating(level)) = (&field.kind, value) else {
        return Err(mismatch(field, value));
    };
    Ok((*level, labels.label(field.name, *level)?))
}

fn mismatch(field: &FieldSpec, value: &FieldValue) -> PunchcardError {
    PunchcardError::FieldTypeMismatch {
        field: field.name.to_string(),
        expected: field.kind.name(),
        found: value.type_name(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
