pub mod roster_reader;
pub mod summary_writer;
