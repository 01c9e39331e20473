use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum MeetingError {
    #[error("CSV error: {0}")]
    #[diagnostic(code(meeting_cost::csv))]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(meeting_cost::io))]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    #[diagnostic(code(meeting_cost::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
