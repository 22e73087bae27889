use crate::error::{PunchcardError, Result};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// Exactly five labels, addressed by rating level 1-5.
///
/// Lookups outside the domain are an error rather than a missing label, so a
/// stray `0` or `6` cannot silently render as an empty element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingLabels([&'static str; 5]);

impl RatingLabels {
    pub const fn new(labels: [&'static str; 5]) -> Self {
        Self(labels)
    }

    pub fn label(&self, field: &str, level: u8) -> Result<&'static str> {
        check_level(field, i64::from(level))?;
        Ok(self.0[usize::from(level - MIN_LEVEL)])
    }

    /// Labels in level order, starting at level 1.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        (MIN_LEVEL..=MAX_LEVEL).zip(self.0.iter().copied())
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }
}

/// Validate that `value` is a rating level and narrow it to `u8`.
pub fn check_level(field: &str, value: i64) -> Result<u8> {
    if (i64::from(MIN_LEVEL)..=i64::from(MAX_LEVEL)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(PunchcardError::RatingOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}
