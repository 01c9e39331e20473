//! Salary-to-meeting-cost arithmetic.
//!
//! Every function here is pure. Results are `None` when the duration is not a
//! number or when the arithmetic would overflow `Decimal`.

use super::participant::Participant;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const WEEKS_PER_YEAR: Decimal = dec!(52);
pub const HOURS_PER_WEEK: Decimal = dec!(40);
pub const MINUTES_PER_HOUR: Decimal = dec!(60);
/// 52 * 40 * 60
pub const WORK_MINUTES_PER_YEAR: Decimal = dec!(124800);

/// Cost of one working minute for an annual salary.
pub fn per_minute_rate(salary: Decimal) -> Decimal {
    salary / WEEKS_PER_YEAR / HOURS_PER_WEEK / MINUTES_PER_HOUR
}

/// What one participant costs for a meeting of `minutes`.
///
/// Multiplies before dividing so that whole-number results stay exact.
pub fn individual_cost(salary: Decimal, minutes: Decimal) -> Option<Decimal> {
    salary
        .checked_mul(minutes)
        .and_then(|scaled| scaled.checked_div(WORK_MINUTES_PER_YEAR))
        .map(|cost| cost.normalize())
}

pub fn total_salary(participants: &[Participant]) -> Option<Decimal> {
    participants
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.salary().value()))
}

pub fn total_meeting_cost(participants: &[Participant], minutes: Option<Decimal>) -> Option<Decimal> {
    let minutes = minutes?;
    participants.iter().try_fold(Decimal::ZERO, |acc, p| {
        acc.checked_add(individual_cost(p.salary().value(), minutes)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{ParticipantCandidate, validate};

    fn participant(name: &str, salary: &str) -> Participant {
        validate(&ParticipantCandidate::new(name, salary)).unwrap()
    }

    #[test]
    fn test_per_minute_rate() {
        assert_eq!(per_minute_rate(dec!(124800)), dec!(1));
        assert_eq!(WEEKS_PER_YEAR * HOURS_PER_WEEK * MINUTES_PER_HOUR, WORK_MINUTES_PER_YEAR);
    }

    #[test]
    fn test_one_hour_meeting() {
        let participants = vec![participant("Ada", "104000")];
        assert_eq!(total_meeting_cost(&participants, Some(dec!(60))), Some(dec!(50)));
    }

    #[test]
    fn test_totals_sum_participants() {
        let participants = vec![participant("Ada", "104000"), participant("Bob", "62400")];
        assert_eq!(total_salary(&participants), Some(dec!(166400)));
        assert_eq!(total_meeting_cost(&participants, Some(dec!(30))), Some(dec!(40)));
    }

    #[test]
    fn test_empty_meeting_costs_nothing() {
        assert_eq!(total_salary(&[]), Some(Decimal::ZERO));
        assert_eq!(total_meeting_cost(&[], Some(dec!(60))), Some(Decimal::ZERO));
    }

    #[test]
    fn test_missing_duration_has_no_cost() {
        let participants = vec![participant("Ada", "104000")];
        assert_eq!(total_meeting_cost(&participants, None), None);
    }

    #[test]
    fn test_negative_duration_is_not_guarded() {
        assert_eq!(individual_cost(dec!(124800), dec!(-5)), Some(dec!(-5)));
    }

    #[test]
    fn test_overflow_has_no_cost() {
        assert_eq!(individual_cost(Decimal::MAX, dec!(2)), None);
    }

    #[test]
    fn test_calculation_is_repeatable() {
        let participants = vec![participant("Ada", "98765.43"), participant("Bob", "51234")];
        let first = total_meeting_cost(&participants, Some(dec!(47)));
        let second = total_meeting_cost(&participants, Some(dec!(47)));
        assert_eq!(first, second);
    }
}
