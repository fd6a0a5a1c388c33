use crate::ports::store::StoreError;

use super::params::ParameterError;
use super::projector::MissingColumn;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to project result row: {0}")]
    Projection(#[from] MissingColumn),
    /// The request body or query string could not be decoded at all.
    #[error("Malformed request: {message}")]
    Malformed { status: u16, message: String },
}

pub type ReportResult<T> = Result<T, ReportError>;
