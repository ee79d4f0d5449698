mod parser;

use std::io::Read;
use std::path::Path;

pub use parser::IntakeRecord;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read application batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a batch of applications from CSV with a header row.
pub fn read_applications<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, IntakeError> {
    Ok(parser::parse_records(reader)?)
}

pub fn read_applications_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<IntakeRecord>, IntakeError> {
    let file = std::fs::File::open(path)?;
    read_applications(file)
}
