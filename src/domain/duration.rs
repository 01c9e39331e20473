use super::validation::coerce_number;
use rust_decimal::Decimal;
use std::fmt;

pub const DEFAULT_DURATION: &str = "60";

/// The meeting-length field as typed, together with its numeric value.
///
/// No bounds are enforced. Text that is not a number is kept and has no value,
/// so downstream costs become unavailable instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationInput {
    text: String,
    minutes: Option<Decimal>,
}

impl DurationInput {
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let minutes = coerce_number(&text);
        Self { text, minutes }
    }

    pub fn minutes(&self) -> Option<Decimal> {
        self.minutes
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for DurationInput {
    fn default() -> Self {
        Self::parse(DEFAULT_DURATION)
    }
}

impl fmt::Display for DurationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minutes {
            Some(minutes) => write!(f, "{minutes}"),
            None => f.write_str(super::money::NOT_A_NUMBER),
        }
    }
}
