use crate::domain::validation::ParticipantCandidate;
use crate::error::{MeetingError, Result};
use std::io::Read;

/// Reads participant candidates from a `name,salary` CSV roster.
///
/// Fields are trimmed and short rows are accepted; a missing column yields a
/// candidate with that field absent, which validation then reports.
pub struct RosterReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RosterReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one candidate per row.
    pub fn candidates(self) -> impl Iterator<Item = Result<ParticipantCandidate>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MeetingError::from))
    }
}
