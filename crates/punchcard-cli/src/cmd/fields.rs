use crate::cmd::parse_card;
use crate::output::{print_json, Table};
use punchcard_core::template::{Block, FieldKind, FieldSpec};
use punchcard_core::CardTemplate;

pub fn run(card: &str, json: bool) -> anyhow::Result<()> {
    let template = CardTemplate::for_type(parse_card(card)?);

    if json {
        let items: Vec<serde_json::Value> = template.fields.iter().map(field_json).collect();
        return print_json(&serde_json::json!({
            "card_type": template.card_type,
            "fields": items,
        }));
    }

    let mut table = Table::new(&["FIELD", "KIND", "BLOCK", "REQUIRED", "DEFAULT"]);
    for f in template.fields {
        table.row(vec![
            f.name.to_string(),
            f.kind.name().to_string(),
            block_name(&f.block),
            if f.required { "yes" } else { "" }.to_string(),
            default_display(f),
        ]);
    }
    table.print();
    Ok(())
}

fn block_name(block: &Block) -> String {
    match block {
        Block::Header => "header".to_string(),
        Block::Documentation => "documentation".to_string(),
        Block::Details => "details".to_string(),
        Block::Preferences => "preferences".to_string(),
        Block::Advanced(cat) => format!("advanced/{cat}"),
    }
}

fn default_display(f: &FieldSpec) -> String {
    match f.kind {
        FieldKind::Text { fallback } => fallback.to_string(),
        FieldKind::Title => String::new(),
        FieldKind::Toggle { on, off } => format!("{off} ({on}/{off})"),
        FieldKind::Rating { labels, default } => {
            let label = labels.label(f.name, default).unwrap_or_default();
            format!("{default} = {label}")
        }
    }
}

fn field_json(f: &FieldSpec) -> serde_json::Value {
    let mut val = serde_json::json!({
        "name": f.name,
        "label": f.label,
        "kind": f.kind.name(),
        "block": block_name(&f.block),
        "section": f.block.section().as_str(),
        "required": f.required,
    });
    match f.kind {
        FieldKind::Text { fallback } => {
            val["fallback"] = serde_json::Value::from(fallback);
        }
        FieldKind::Title => {}
        FieldKind::Toggle { on, off } => {
            val["tokens"] = serde_json::json!({ "on": on, "off": off });
        }
        FieldKind::Rating { labels, default } => {
            val["default"] = serde_json::Value::from(default);
            val["labels"] = serde_json::Value::from(labels.as_slice().to_vec());
        }
    }
    val
}
