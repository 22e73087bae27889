pub mod config;
pub mod fields;
pub mod init;
pub mod list;
pub mod render;

use anyhow::Context;
use punchcard_core::CardType;
use std::str::FromStr;

/// Parse a card type argument, listing the valid names on failure.
pub(crate) fn parse_card(card: &str) -> anyhow::Result<CardType> {
    CardType::from_str(card).with_context(|| {
        let names: Vec<&str> = CardType::all().iter().map(|c| c.as_str()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}
