use super::validation::{ValidationErrors, salary_issues};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// An annual salary that has passed the form's salary rules.
///
/// Wraps `rust_decimal::Decimal` so a participant can never carry a salary
/// below [`Salary::MINIMUM`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Salary(Decimal);

impl Salary {
    pub const MINIMUM: Decimal = dec!(1);

    pub fn new(value: Decimal) -> Result<Self, ValidationErrors> {
        let issues = salary_issues(value);
        if issues.is_empty() {
            Ok(Self(value))
        } else {
            Err(issues.into())
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Salary {
    type Error = ValidationErrors;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Salary> for Decimal {
    fn from(salary: Salary) -> Self {
        salary.0
    }
}

/// A validated meeting participant. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    name: String,
    salary: Salary,
}

impl Participant {
    pub(crate) fn new(name: impl Into<String>, salary: Salary) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> Salary {
        self.salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{SALARY_BELOW_MINIMUM, SALARY_NEGATIVE};

    #[test]
    fn test_salary_validation() {
        assert!(Salary::new(dec!(1)).is_ok());
        assert!(Salary::new(dec!(104000.50)).is_ok());

        let zero = Salary::new(Decimal::ZERO).unwrap_err();
        assert_eq!(zero.messages(), [SALARY_BELOW_MINIMUM]);

        let negative = Salary::try_from(dec!(-1)).unwrap_err();
        assert!(negative.contains(SALARY_NEGATIVE));
        assert!(negative.contains(SALARY_BELOW_MINIMUM));
    }

    #[test]
    fn test_salary_into_decimal() {
        let salary = Salary::new(dec!(52000)).unwrap();
        assert_eq!(Decimal::from(salary), dec!(52000));
    }
}
