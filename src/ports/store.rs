use std::time::Duration;

use crate::report::query::BoundQuery;
use crate::report::row::RowCursor;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Error executing query: {0}")]
    Execution(String),
    #[error("Error executing query: timed out after {0:?}")]
    Timeout(Duration),
}

/// Fields submitted by the award-creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAward {
    pub year: i32,
    pub artist_title: String,
    pub winner_artist: String,
}

/// Terminal state of the award + artist_award insert pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardCreation {
    Created { award_id: i64 },
    AwardInsertFailed { reason: String },
    /// The award row was rolled back together with the failed link row.
    ArtistAwardInsertFailed { award_id: i64, reason: String },
    /// Both inserts ran but the transaction did not commit.
    CommitFailed { reason: String },
}

/// Port trait for the relational store behind the report pages.
///
/// Implemented by `database::Database` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    /// Runs a read query with its bound parameters.
    async fn fetch(&self, query: &BoundQuery) -> Result<RowCursor, StoreError>;

    /// Inserts the award and its artist link in one transaction. `Err` means
    /// no transaction could be opened at all.
    async fn create_award(&self, award: &NewAward) -> Result<AwardCreation, StoreError>;
}
