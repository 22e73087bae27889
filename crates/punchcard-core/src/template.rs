use crate::error::{PunchcardError, Result};
use crate::rating::{self, RatingLabels};
use crate::templates;
use crate::types::{CardType, FieldValue, RawValue};

// ---------------------------------------------------------------------------
// FieldKind / Block / Section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, replaced by `fallback` when left empty.
    Text { fallback: &'static str },
    /// The card title: emitted as the `title` attribute and used for filenames.
    Title,
    /// Boolean rendered as one of two per-field tokens.
    Toggle { on: &'static str, off: &'static str },
    /// Integer 1-5 rendered with its level and label.
    Rating { labels: RatingLabels, default: u8 },
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Title => "title",
            FieldKind::Toggle { .. } => "toggle",
            FieldKind::Rating { .. } => "rating",
        }
    }
}

/// Where a field renders inside the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Header,
    Documentation,
    Details,
    Preferences,
    Advanced(&'static str),
}

impl Block {
    pub fn section(&self) -> Section {
        match self {
            Block::Advanced(_) => Section::Advanced,
            _ => Section::Core,
        }
    }
}

/// Presentational grouping. Has no effect on rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Core,
    Advanced,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Core => "core",
            Section::Advanced => "advanced",
        }
    }
}

// ---------------------------------------------------------------------------
// FieldSpec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub block: Block,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text { fallback },
            block: Block::Details,
            required: false,
        }
    }

    pub const fn title(label: &'static str) -> Self {
        Self {
            name: TITLE_FIELD,
            label,
            kind: FieldKind::Title,
            block: Block::Header,
            required: false,
        }
    }

    pub const fn toggle(
        name: &'static str,
        label: &'static str,
        on: &'static str,
        off: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Toggle { on, off },
            block: Block::Preferences,
            required: false,
        }
    }

    pub const fn rating(name: &'static str, label: &'static str, labels: RatingLabels) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Rating { labels, default: 3 },
            block: Block::Preferences,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn in_block(mut self, block: Block) -> Self {
        self.block = block;
        self
    }

    pub const fn advanced(self, category: &'static str) -> Self {
        self.in_block(Block::Advanced(category))
    }

    /// The value a field holds before the user touches it.
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text { .. } | FieldKind::Title => FieldValue::Text(String::new()),
            FieldKind::Toggle { .. } => FieldValue::Toggle(false),
            FieldKind::Rating { default, .. } => FieldValue::Rating(default),
        }
    }

    /// Check `value` against this field's kind. A rating-sized number set on
    /// a text field becomes its text.
    pub fn coerce(&self, value: FieldValue) -> Result<FieldValue> {
        match (&self.kind, value) {
            (FieldKind::Text { .. } | FieldKind::Title, FieldValue::Text(s)) => {
                Ok(FieldValue::Text(s))
            }
            (FieldKind::Text { .. } | FieldKind::Title, FieldValue::Rating(n)) => {
                Ok(FieldValue::Text(n.to_string()))
            }
            (FieldKind::Toggle { .. }, FieldValue::Toggle(b)) => Ok(FieldValue::Toggle(b)),
            (FieldKind::Rating { .. }, FieldValue::Rating(n)) => {
                rating::check_level(self.name, i64::from(n))?;
                Ok(FieldValue::Rating(n))
            }
            (kind, other) => Err(PunchcardError::FieldTypeMismatch {
                field: self.name.to_string(),
                expected: kind.name(),
                found: other.type_name(),
            }),
        }
    }

    /// Convert a scalar read from a values file. A blank entry takes the
    /// field's default; numbers typed into text fields become their text.
    pub fn coerce_raw(&self, raw: Option<RawValue>) -> Result<FieldValue> {
        let Some(raw) = raw else {
            return Ok(self.default_value());
        };
        match (&self.kind, raw) {
            (_, RawValue::Text(s)) => self.parse(&s),
            (FieldKind::Text { .. } | FieldKind::Title, RawValue::Int(n)) => {
                Ok(FieldValue::Text(n.to_string()))
            }
            (FieldKind::Text { .. } | FieldKind::Title, RawValue::Float(x)) => {
                Ok(FieldValue::Text(x.to_string()))
            }
            (FieldKind::Toggle { .. }, RawValue::Bool(b)) => Ok(FieldValue::Toggle(b)),
            (FieldKind::Rating { .. }, RawValue::Int(n)) => {
                Ok(FieldValue::Rating(rating::check_level(self.name, n)?))
            }
            (FieldKind::Rating { .. }, RawValue::Float(x)) => Err(PunchcardError::InvalidValue {
                field: self.name.to_string(),
                reason: format!("expected an integer 1-5, got {x}"),
            }),
            (kind, other) => Err(PunchcardError::FieldTypeMismatch {
                field: self.name.to_string(),
                expected: kind.name(),
                found: other.type_name(),
            }),
        }
    }

    /// Parse a raw command-line string according to this field's kind.
    pub fn parse(&self, raw: &str) -> Result<FieldValue> {
        match self.kind {
            FieldKind::Text { .. } | FieldKind::Title => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Toggle { on, off } => {
                let lowered = raw.trim().to_ascii_lowercase();
                if lowered == on.to_ascii_lowercase() {
                    return Ok(FieldValue::Toggle(true));
                }
                if lowered == off.to_ascii_lowercase() {
                    return Ok(FieldValue::Toggle(false));
                }
                match lowered.as_str() {
                    "true" | "yes" | "on" | "1" => Ok(FieldValue::Toggle(true)),
                    "false" | "no" | "off" | "0" => Ok(FieldValue::Toggle(false)),
                    _ => Err(PunchcardError::InvalidValue {
                        field: self.name.to_string(),
                        reason: format!("expected {on}/{off} or true/false, got '{raw}'"),
                    }),
                }
            }
            FieldKind::Rating { .. } => {
                let n: i64 = raw.trim().parse().map_err(|_| PunchcardError::InvalidValue {
                    field: self.name.to_string(),
                    reason: format!("expected an integer 1-5, got '{raw}'"),
                })?;
                Ok(FieldValue::Rating(rating::check_level(self.name, n)?))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CardTemplate
// ---------------------------------------------------------------------------

/// Name of the title field on every card that has one.
pub const TITLE_FIELD: &str = "punchcard_title";

/// Name of the rating that selects the documentation detail level.
pub const DEPTH_FIELD: &str = "documentation_depth";

/// Static description of one card type: everything the renderer needs.
#[derive(Debug)]
pub struct CardTemplate {
    pub card_type: CardType,
    /// Element name of the details block, e.g. `bug_details`.
    pub details_block: &'static str,
    /// Workflow text emitted inside `<meta_instruction>`, one entry per line.
    pub instruction: &'static [&'static str],
    pub fields: &'static [FieldSpec],
}

impl CardTemplate {
    pub fn for_type(card_type: CardType) -> &'static CardTemplate {
        match card_type {
            CardType::BugFix => &templates::bug_fix::TEMPLATE,
            CardType::FeatureRequest => &templates::feature_request::TEMPLATE,
            CardType::FeatureChange => &templates::feature_change::TEMPLATE,
            CardType::Documentation => &templates::documentation::TEMPLATE,
            CardType::Testing => &templates::testing::TEMPLATE,
            CardType::SecurityAudit => &templates::security_audit::TEMPLATE,
            CardType::Cleanup => &templates::cleanup::TEMPLATE,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_or_err(&self, name: &str) -> Result<&FieldSpec> {
        self.field(name).ok_or_else(|| PunchcardError::UnknownField {
            card: self.card_type.to_string(),
            field: name.to_string(),
        })
    }

    pub fn title_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.kind == FieldKind::Title)
    }

    /// The depth rating, if this card carries a documentation block.
    pub fn depth_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.block == Block::Documentation)
    }

    pub fn fields_in(&self, block: Block) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |f| f.block == block)
    }

    /// Advanced categories in first-declared order.
    pub fn advanced_categories(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for f in self.fields {
            if let Block::Advanced(cat) = f.block {
                if !out.contains(&cat) {
                    out.push(cat);
                }
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_card_type_has_a_template_of_its_own_type() {
        for ct in CardType::all() {
            assert_eq!(CardTemplate::for_type(*ct).card_type, *ct);
        }
    }

    #[test]
    fn field_names_are_unique_per_template() {
        for ct in CardType::all() {
            let t = CardTemplate::for_type(*ct);
            let mut seen = HashSet::new();
            for f in t.fields {
                assert!(seen.insert(f.name), "{ct}: duplicate field {}", f.name);
            }
        }
    }

    #[test]
    fn text_fallbacks_are_never_empty() {
        for ct in CardType::all() {
            for f in CardTemplate::for_type(*ct).fields {
                if let FieldKind::Text { fallback } = f.kind {
                    assert!(!fallback.trim().is_empty(), "{ct}.{} has empty fallback", f.name);
                }
            }
        }
    }

    #[test]
    fn advanced_categories_have_five_fields_each() {
        for ct in CardType::all() {
            let t = CardTemplate::for_type(*ct);
            for cat in t.advanced_categories() {
                let n = t.fields_in(Block::Advanced(cat)).count();
                assert_eq!(n, 5, "{ct}: advanced category {cat} has {n} fields");
            }
        }
    }

    #[test]
    fn every_card_has_title_depth_and_details() {
        for ct in CardType::all() {
            let t = CardTemplate::for_type(*ct);
            assert_eq!(t.title_field().map(|f| f.name), Some(TITLE_FIELD));
            assert_eq!(t.depth_field().map(|f| f.name), Some(DEPTH_FIELD));
            assert!(t.fields_in(Block::Details).count() > 0);
            assert!(t.details_block.ends_with("_details"));
            assert!(!t.instruction.is_empty());
        }
    }

    #[test]
    fn rating_defaults_are_in_range() {
        for ct in CardType::all() {
            for f in CardTemplate::for_type(*ct).fields {
                if let FieldKind::Rating { default, .. } = f.kind {
                    assert!((1..=5).contains(&default), "{ct}.{}", f.name);
                }
            }
        }
    }

    #[test]
    fn parse_toggle_accepts_tokens_and_booleans() {
        let f = FieldSpec::toggle("check_related_code", "Check related", "Check", "Skip");
        assert_eq!(f.parse("check").unwrap(), FieldValue::Toggle(true));
        assert_eq!(f.parse("Skip").unwrap(), FieldValue::Toggle(false));
        assert_eq!(f.parse("yes").unwrap(), FieldValue::Toggle(true));
        assert_eq!(f.parse("0").unwrap(), FieldValue::Toggle(false));
        assert!(f.parse("maybe").is_err());
    }

    #[test]
    fn parse_rating_checks_domain() {
        let f = CardTemplate::for_type(CardType::BugFix)
            .field("urgency")
            .copied()
            .unwrap();
        assert_eq!(f.parse("4").unwrap(), FieldValue::Rating(4));
        assert!(matches!(
            f.parse("9"),
            Err(PunchcardError::RatingOutOfRange { value: 9, .. })
        ));
        assert!(matches!(f.parse("high"), Err(PunchcardError::InvalidValue { .. })));
    }

    #[test]
    fn coerce_rejects_mismatched_kinds() {
        let f = FieldSpec::toggle("t", "T", "Yes", "No");
        let err = f.coerce(FieldValue::Text("yes".into())).unwrap_err();
        assert!(matches!(
            err,
            PunchcardError::FieldTypeMismatch { expected: "toggle", found: "text", .. }
        ));
    }

    #[test]
    fn coerce_turns_numbers_into_text_for_text_fields() {
        let f = FieldSpec::text("runtime_version", "Runtime", "Not specified");
        assert_eq!(
            f.coerce(FieldValue::Rating(18)).unwrap(),
            FieldValue::Text("18".into())
        );
    }

    #[test]
    fn coerce_raw_accepts_any_number_in_text_fields() {
        let f = FieldSpec::text("runtime_version", "Runtime", "Not specified");
        assert_eq!(
            f.coerce_raw(Some(RawValue::Int(2024))).unwrap(),
            FieldValue::Text("2024".into())
        );
        assert_eq!(
            f.coerce_raw(Some(RawValue::Float(3.11))).unwrap(),
            FieldValue::Text("3.11".into())
        );
        assert_eq!(f.coerce_raw(None).unwrap(), FieldValue::Text(String::new()));
    }

    #[test]
    fn coerce_raw_checks_rating_range_by_field() {
        let f = FieldSpec::rating("urgency", "Urgency", templates::DEPTH_LABELS);
        assert_eq!(f.coerce_raw(None).unwrap(), FieldValue::Rating(3));
        assert_eq!(
            f.coerce_raw(Some(RawValue::Text("4".into()))).unwrap(),
            FieldValue::Rating(4)
        );
        let err = f.coerce_raw(Some(RawValue::Int(300))).unwrap_err();
        assert!(matches!(
            err,
            PunchcardError::RatingOutOfRange { ref field, value: 300 } if field == "urgency"
        ));
        assert!(matches!(
            f.coerce_raw(Some(RawValue::Float(2.5))),
            Err(PunchcardError::InvalidValue { .. })
        ));
    }

    #[test]
    fn coerce_raw_reads_toggle_tokens_and_booleans() {
        let f = FieldSpec::toggle("check_related_code", "Check", "Check", "Skip");
        assert_eq!(
            f.coerce_raw(Some(RawValue::Bool(true))).unwrap(),
            FieldValue::Toggle(true)
        );
        assert_eq!(
            f.coerce_raw(Some(RawValue::Text("skip".into()))).unwrap(),
            FieldValue::Toggle(false)
        );
        assert!(matches!(
            f.coerce_raw(Some(RawValue::Int(7))),
            Err(PunchcardError::FieldTypeMismatch { expected: "toggle", found: "integer", .. })
        ));
    }

    #[test]
    fn section_follows_block() {
        assert_eq!(Block::Details.section(), Section::Core);
        assert_eq!(Block::Advanced("environment").section(), Section::Advanced);
    }
}
