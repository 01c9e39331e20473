use super::participant::{Participant, Salary};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const NAME_REQUIRED: &str = "Name is required";
pub const SALARY_REQUIRED: &str = "Salary is required";
pub const SALARY_NOT_A_NUMBER: &str = "Salary must be a number";
pub const SALARY_NEGATIVE: &str = "Salary must be a positive number";
pub const SALARY_BELOW_MINIMUM: &str = "Salary must be > 0";

/// Raw contents of the add-participant form, before validation.
///
/// `None` means the field was never supplied, which is distinct from an empty
/// string the user typed and then cleared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParticipantCandidate {
    pub name: Option<String>,
    pub salary: Option<String>,
}

impl ParticipantCandidate {
    pub fn new(name: impl Into<String>, salary: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            salary: Some(salary.into()),
        }
    }
}

/// Every rule a rejected candidate violated, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|m| m == message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<&str>> for ValidationErrors {
    fn from(messages: Vec<&str>) -> Self {
        Self(messages.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for ValidationErrors {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

/// Coerces form text to a number the way a browser's `Number()` does for the
/// inputs this tool accepts: whitespace is ignored, blank text is zero and
/// anything unparseable has no value.
pub fn coerce_number(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }
    // Digit separators are not numbers to a browser.
    if trimmed.contains('_') {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Checks a numeric salary against the non-negative and minimum rules.
///
/// Both rules are evaluated, so a negative salary yields two messages.
pub fn salary_issues(value: Decimal) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if value.is_sign_negative() && !value.is_zero() {
        issues.push(SALARY_NEGATIVE);
    }
    if value < Salary::MINIMUM {
        issues.push(SALARY_BELOW_MINIMUM);
    }
    issues
}

/// Validates a form submission, reporting every violated rule.
pub fn validate(candidate: &ParticipantCandidate) -> Result<Participant, ValidationErrors> {
    let mut issues: Vec<String> = Vec::new();

    // Exact emptiness: a name of only spaces is accepted.
    let name = match candidate.name.as_deref() {
        Some(name) if !name.is_empty() => Some(name),
        _ => {
            issues.push(NAME_REQUIRED.to_string());
            None
        }
    };

    let salary = match candidate.salary.as_deref() {
        None => {
            issues.push(SALARY_REQUIRED.to_string());
            None
        }
        Some(text) => match coerce_number(text) {
            None => {
                issues.push(SALARY_NOT_A_NUMBER.to_string());
                None
            }
            Some(value) => match Salary::new(value) {
                Ok(salary) => Some(salary),
                Err(rejected) => {
                    issues.extend(rejected.0);
                    None
                }
            },
        },
    };

    match (name, salary) {
        (Some(name), Some(salary)) if issues.is_empty() => Ok(Participant::new(name, salary)),
        _ => Err(issues.into()),
    }
}
