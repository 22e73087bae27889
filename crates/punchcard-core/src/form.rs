use crate::error::{PunchcardError, Result};
use crate::export::RenderedCard;
use crate::rating;
use crate::render::RenderOptions;
use crate::template::{CardTemplate, FieldKind};
use crate::types::{CardType, FieldValue};
use crate::values::FieldValues;

/// The state of one card form, from first keystroke to submit.
///
/// Every setter validates against the template, so the values held here are
/// always renderable. Nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct FormSession {
    template: &'static CardTemplate,
    values: FieldValues,
    last: Option<RenderedCard>,
}

impl FormSession {
    pub fn new(card_type: CardType) -> Self {
        let template = CardTemplate::for_type(card_type);
        Self {
            template,
            values: FieldValues::defaults(template),
            last: None,
        }
    }

    pub fn template(&self) -> &'static CardTemplate {
        self.template
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn last_rendered(&self) -> Option<&RenderedCard> {
        self.last.as_ref()
    }

    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let field = self.template.field_or_err(name)?;
        let value = field.coerce(value)?;
        self.values.insert(field.name, value);
        Ok(())
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.set(name, FieldValue::Text(value.into()))
    }

    pub fn set_toggle(&mut self, name: &str, on: bool) -> Result<()> {
        self.set(name, FieldValue::Toggle(on))
    }

    pub fn set_rating(&mut self, name: &str, level: u8) -> Result<()> {
        rating::check_level(name, i64::from(level))?;
        self.set(name, FieldValue::Rating(level))
    }

    /// Parse `raw` according to the field's kind and store it.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> Result<()> {
        let field = self.template.field_or_err(name)?;
        let value = field.parse(raw)?;
        self.values.insert(field.name, value);
        Ok(())
    }

    /// Apply every entry of `values`, stopping at the first invalid one.
    pub fn apply(&mut self, values: FieldValues) -> Result<()> {
        for (name, value) in values.iter() {
            self.set(name, value.clone())?;
        }
        Ok(())
    }

    /// Required text and title fields that are still exactly empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.template
            .fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| matches!(f.kind, FieldKind::Text { .. } | FieldKind::Title))
            .filter(|f| matches!(self.values.get(f.name), Some(FieldValue::Text(s)) if s.is_empty()))
            .map(|f| f.name)
            .collect()
    }

    /// Render the current values without checking required fields.
    pub fn preview(&self, opts: &RenderOptions) -> Result<RenderedCard> {
        RenderedCard::build(self.template, &self.values, opts)
    }

    /// Check required fields, then render and keep the card as the last result.
    pub fn submit(&mut self, opts: &RenderOptions) -> Result<&RenderedCard> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(PunchcardError::MissingRequired(
                missing.into_iter().map(str::to_string).collect(),
            ));
        }
        let card = self.preview(opts)?;
        Ok(&*self.last.insert(card))
    }

    /// Back to the template defaults; the last rendered card is discarded.
    pub fn reset(&mut self) {
        self.values = FieldValues::defaults(self.template);
        self.last = None;
    }
}
