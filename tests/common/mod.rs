#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes a `name,salary` roster with the given rows to a temp file.
pub fn write_roster(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name, salary").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub const TEAM: [&str; 2] = ["Ada, 104000", "Bob, 62400"];
