use crate::domain::expense::ExpenseId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Participant limit reached: at most {0} participants per trip")]
    ParticipantLimit(usize),
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),
    #[error("Unknown expense: {0}")]
    UnknownExpense(ExpenseId),
    #[error("Export error: {0}")]
    ExportError(String),
}

pub type Result<T> = std::result::Result<T, TripError>;
