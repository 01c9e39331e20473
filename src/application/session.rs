use crate::domain::calculator::{individual_cost, total_meeting_cost, total_salary};
use crate::domain::duration::DurationInput;
use crate::domain::participant::Participant;
use crate::domain::ports::ParticipantStoreBox;
use crate::domain::validation::{ParticipantCandidate, ValidationErrors, validate};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;

/// Text the salary field resets to after a successful submission.
pub const CLEARED_SALARY: &str = "0";

/// Outcome of submitting the add-participant form.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Participant),
    Rejected(ValidationErrors),
}

/// One line of the cost table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub salary: Decimal,
    pub meeting_cost: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub salary: Option<Decimal>,
    pub meeting_cost: Option<Decimal>,
}

/// Snapshot of everything the cost table shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingSummary {
    pub duration: Option<Decimal>,
    pub participants: Vec<SummaryRow>,
    pub totals: Totals,
}

/// State of one calculator session: the participant list, the duration field,
/// the pending add-participant form and the errors of its last submission.
///
/// Every operation runs to completion before the next one starts; the session
/// is owned by whichever front end drives it.
pub struct MeetingSession {
    store: ParticipantStoreBox,
    duration: DurationInput,
    pending: ParticipantCandidate,
    form_errors: Vec<String>,
}

impl MeetingSession {
    /// Creates a session over `store` with the default one-hour duration.
    pub fn new(store: ParticipantStoreBox) -> Self {
        Self {
            store,
            duration: DurationInput::default(),
            pending: Self::cleared_form(),
            form_errors: Vec::new(),
        }
    }

    fn cleared_form() -> ParticipantCandidate {
        ParticipantCandidate::new("", CLEARED_SALARY)
    }

    pub fn duration(&self) -> &DurationInput {
        &self.duration
    }

    pub fn set_duration(&mut self, text: impl Into<String>) {
        self.duration = DurationInput::parse(text);
        if self.duration.minutes().is_none() {
            tracing::warn!(input = self.duration.text(), "duration is not a number");
        }
    }

    pub fn pending(&self) -> &ParticipantCandidate {
        &self.pending
    }

    pub fn set_pending_name(&mut self, name: impl Into<String>) {
        self.pending.name = Some(name.into());
    }

    pub fn set_pending_salary(&mut self, salary: impl Into<String>) {
        self.pending.salary = Some(salary.into());
    }

    /// Messages from the most recent rejected submission.
    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    /// Submits the pending form.
    ///
    /// On success the participant is appended and the form is cleared. On
    /// failure the list is untouched and the messages are kept for display.
    pub async fn add_participant(&mut self) -> Result<AddOutcome> {
        match validate(&self.pending) {
            Ok(participant) => {
                self.store.append(participant.clone()).await?;
                tracing::info!(name = participant.name(), "participant added");
                self.pending = Self::cleared_form();
                self.form_errors.clear();
                Ok(AddOutcome::Added(participant))
            }
            Err(errors) => {
                tracing::debug!(%errors, "participant rejected");
                self.form_errors = errors.messages().to_vec();
                Ok(AddOutcome::Rejected(errors))
            }
        }
    }

    /// Replaces the pending form with `candidate` and submits it.
    pub async fn submit(&mut self, candidate: ParticipantCandidate) -> Result<AddOutcome> {
        self.pending = candidate;
        self.add_participant().await
    }

    /// Removes the row at `index`. Out-of-range indices change nothing.
    pub async fn remove_participant(&mut self, index: usize) -> Result<Option<Participant>> {
        let removed = self.store.remove(index).await?;
        match &removed {
            Some(participant) => tracing::info!(index, name = participant.name(), "participant removed"),
            None => tracing::debug!(index, "remove ignored, index out of range"),
        }
        Ok(removed)
    }

    pub async fn participant_count(&self) -> Result<usize> {
        self.store.len().await
    }

    pub async fn participants(&self) -> Result<Vec<Participant>> {
        self.store.all().await
    }

    /// Recomputes the cost table from the current state.
    pub async fn summary(&self) -> Result<MeetingSummary> {
        let participants = self.store.all().await?;
        let minutes = self.duration.minutes();

        let rows = participants
            .iter()
            .map(|p| SummaryRow {
                name: p.name().to_string(),
                salary: p.salary().value(),
                meeting_cost: minutes.and_then(|m| individual_cost(p.salary().value(), m)),
            })
            .collect();

        Ok(MeetingSummary {
            duration: minutes,
            participants: rows,
            totals: Totals {
                salary: total_salary(&participants),
                meeting_cost: total_meeting_cost(&participants, minutes),
            },
        })
    }
}
