pub mod csv;
pub mod prompt;
pub mod report;
