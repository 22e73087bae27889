use crate::error::Result;
use crate::template::CardTemplate;
use crate::types::{FieldValue, RawValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Values entered on a card form, keyed by field name.
///
/// A bag may be partial: fields it does not mention take their declared
/// default when resolved against a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, FieldValue>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of `template` at its default.
    pub fn defaults(template: &CardTemplate) -> Self {
        Self(
            template
                .fields
                .iter()
                .map(|f| (f.name.to_string(), f.default_value()))
                .collect(),
        )
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` on top of `self`; later values win.
    pub fn merge(&mut self, other: FieldValues) {
        self.0.extend(other.0);
    }

    /// Read a YAML mapping of field names to scalars for `template`.
    pub fn from_yaml_str(s: &str, template: &CardTemplate) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }
        Self::from_raw(serde_yaml::from_str(s)?, template)
    }

    /// Read a JSON object of field names to scalars for `template`.
    pub fn from_json_str(s: &str, template: &CardTemplate) -> Result<Self> {
        Self::from_raw(serde_json::from_str(s)?, template)
    }

    /// Load a values file. `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path, template: &CardTemplate) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&data, template),
            _ => Self::from_yaml_str(&data, template),
        }
    }

    fn from_raw(
        raw: BTreeMap<String, Option<RawValue>>,
        template: &CardTemplate,
    ) -> Result<Self> {
        let mut values = Self::new();
        for (name, value) in raw {
            let field = template.field_or_err(&name)?;
            values.insert(name, field.coerce_raw(value)?);
        }
        Ok(values)
    }

    /// Check every entry against `template` and fill in defaults for the rest.
    ///
    /// Fails on names the template does not declare, on values of the wrong
    /// kind, and on ratings outside 1-5.
    pub fn resolve(&self, template: &CardTemplate) -> Result<BTreeMap<&'static str, FieldValue>> {
        for name in self.0.keys() {
            template.field_or_err(name)?;
        }
        let mut out = BTreeMap::new();
        for field in template.fields {
            let value = match self.0.get(field.name) {
                Some(v) => field.coerce(v.clone())?,
                None => field.default_value(),
            };
            out.insert(field.name, value);
        }
        Ok(out)
    }
}
