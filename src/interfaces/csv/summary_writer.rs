use crate::application::session::MeetingSummary;
use crate::domain::money::NOT_A_NUMBER;
use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;

pub const TOTAL_LABEL: &str = "Total";

#[derive(Serialize)]
struct Record<'a> {
    name: &'a str,
    salary: String,
    meeting_cost: String,
}

fn cents(value: Option<Decimal>) -> String {
    match value {
        Some(value) => value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => NOT_A_NUMBER.to_string(),
    }
}

/// Writes a meeting summary as CSV: one row per participant, then a total row.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_summary(&mut self, summary: &MeetingSummary) -> Result<()> {
        for row in &summary.participants {
            self.writer.serialize(Record {
                name: &row.name,
                salary: cents(Some(row.salary)),
                meeting_cost: cents(row.meeting_cost),
            })?;
        }
        self.writer.serialize(Record {
            name: TOTAL_LABEL,
            salary: cents(summary.totals.salary),
            meeting_cost: cents(summary.totals.meeting_cost),
        })?;
        self.writer.flush()?;
        Ok(())
    }
}
