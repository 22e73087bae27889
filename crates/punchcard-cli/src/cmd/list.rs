use crate::output::{print_json, Table};
use punchcard_core::{CardTemplate, CardType};

pub fn run(json: bool) -> anyhow::Result<()> {
    let templates: Vec<&CardTemplate> = CardType::all()
        .iter()
        .map(|ct| CardTemplate::for_type(*ct))
        .collect();

    if json {
        let items: Vec<serde_json::Value> = templates
            .iter()
            .map(|t| {
                serde_json::json!({
                    "card_type": t.card_type,
                    "details_block": t.details_block,
                    "fields": t.fields.len(),
                    "titled": t.title_field().is_some(),
                    "documentation": t.depth_field().is_some(),
                })
            })
            .collect();
        return print_json(&items);
    }

    let mut table = Table::new(&["TYPE", "DETAILS", "FIELDS", "TITLED"]);
    for t in &templates {
        table.row(vec![
            t.card_type.to_string(),
            t.details_block.to_string(),
            t.fields.len().to_string(),
            if t.title_field().is_some() { "yes" } else { "no" }.to_string(),
        ]);
    }
    table.print();
    Ok(())
}
