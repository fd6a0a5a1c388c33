use std::future::Future;
use std::time::Duration;

use color_eyre::{Result, eyre::Context};
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectOptions, ConnectionTrait, Database as SeaDatabase,
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryResult, Statement,
    TransactionTrait,
};

use crate::config::DatabaseConfig;
use crate::entities;
use crate::ports::store::{AwardCreation, NewAward, ReportStore, StoreError};
use crate::report::query::BoundQuery;
use crate::report::row::{Row, RowCursor, Value};

pub struct Database {
    pub(crate) conn: DatabaseConnection,
    statement_timeout: Duration,
}

impl Database {
    /// Open the configured store, creating the sqlite file if needed
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        if let Some(path) = config.sqlite_path()
            && let Some(parent) = path.parent()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let url = config.connection_url()?;
        let timeout = config.statement_timeout();

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.max_connections.max(1))
            .min_connections(1)
            .connect_timeout(timeout)
            .acquire_timeout(timeout)
            .sqlx_logging(false);

        let database = Self::connect(opt, timeout).await?;

        if config.run_migrations {
            database.migrate().await?;
        }

        log::info!("Database ready");
        Ok(database)
    }

    pub(crate) async fn connect(opt: ConnectOptions, statement_timeout: Duration) -> Result<Self> {
        let conn = SeaDatabase::connect(opt)
            .await
            .wrap_err("Failed to connect to database")?;

        if conn.get_database_backend() == sea_orm::DatabaseBackend::Sqlite {
            conn.execute_unprepared("PRAGMA foreign_keys = ON")
                .await
                .wrap_err("Failed to enable foreign keys")?;
        }

        Ok(Database {
            conn,
            statement_timeout,
        })
    }

    /// Apply all pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        log::debug!("Running database migrations");
        migration::Migrator::up(&self.conn, None)
            .await
            .wrap_err("Failed to run database migrations")
    }

    /// Runs one store call under the statement timeout.
    async fn bounded<T, F>(&self, what: &str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        match tokio::time::timeout(self.statement_timeout, fut).await {
            Ok(result) => result.map_err(store_error),
            Err(_) => {
                log::warn!("{what} timed out after {:?}", self.statement_timeout);
                Err(StoreError::Timeout(self.statement_timeout))
            }
        }
    }

    async fn insert_award_pair(&self, award: &NewAward) -> Result<AwardCreation, StoreError> {
        // Not being able to open the transaction means there is no session to write with.
        let txn = self
            .bounded("begin transaction", self.conn.begin())
            .await
            .map_err(|e| match e {
                StoreError::Execution(reason) => StoreError::Connection(reason),
                other => other,
            })?;

        let inserted = self
            .bounded(
                "insert award",
                entities::award::ActiveModel {
                    award_id: ActiveValue::NotSet,
                    year: ActiveValue::Set(award.year),
                }
                .insert(&txn),
            )
            .await;

        let award_id = match inserted {
            Ok(model) => model.award_id,
            Err(e) => {
                rollback(txn).await;
                return Ok(AwardCreation::AwardInsertFailed {
                    reason: e.to_string(),
                });
            }
        };

        let link = entities::artist_award::ActiveModel {
            award_id: ActiveValue::Set(award_id),
            winner_artist: ActiveValue::Set(award.winner_artist.clone()),
            artist_title: ActiveValue::Set(award.artist_title.clone()),
        };
        let linked = self
            .bounded(
                "insert artist_award",
                entities::artist_award::Entity::insert(link).exec_without_returning(&txn),
            )
            .await;

        if let Err(e) = linked {
            rollback(txn).await;
            return Ok(AwardCreation::ArtistAwardInsertFailed {
                award_id,
                reason: e.to_string(),
            });
        }

        if let Err(e) = self.bounded("commit award", txn.commit()).await {
            return Ok(AwardCreation::CommitFailed {
                reason: e.to_string(),
            });
        }

        Ok(AwardCreation::Created { award_id })
    }
}

async fn rollback(txn: sea_orm::DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        log::error!("Failed to roll back award transaction: {e}");
    }
}

fn store_error(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(err.to_string()),
        other => StoreError::Execution(other.to_string()),
    }
}

fn bind_value(value: &Value) -> sea_orm::Value {
    match value {
        Value::Null => sea_orm::Value::BigInt(None),
        Value::Int(v) => (*v).into(),
        Value::Float(v) => (*v).into(),
        Value::Text(v) => v.clone().into(),
    }
}

fn read_value(result: &QueryResult, column: &str) -> Result<Value, DbErr> {
    if let Ok(v) = result.try_get::<Option<i64>>("", column) {
        return Ok(v.map(Value::Int).unwrap_or(Value::Null));
    }
    if let Ok(v) = result.try_get::<Option<f64>>("", column) {
        return Ok(v.map(Value::Float).unwrap_or(Value::Null));
    }
    let v = result.try_get::<Option<String>>("", column)?;
    Ok(v.map(Value::Text).unwrap_or(Value::Null))
}

/// Dynamically typed row, keyed by the column names the statement returned.
struct DynamicRow(Row);

impl FromQueryResult for DynamicRow {
    fn from_query_result(result: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        let mut row = Row::new();
        for column in result.column_names() {
            let value = read_value(result, &column)?;
            row.insert(&column, value);
        }
        Ok(DynamicRow(row))
    }
}

#[async_trait::async_trait]
impl ReportStore for Database {
    async fn fetch(&self, query: &BoundQuery) -> Result<RowCursor, StoreError> {
        let statement = Statement::from_sql_and_values(
            self.conn.get_database_backend(),
            query.template.sql,
            query.params.iter().map(bind_value),
        );

        log::debug!("Executing query '{}'", query.name());
        let rows = self
            .bounded(
                query.name(),
                DynamicRow::find_by_statement(statement).all(&self.conn),
            )
            .await?;
        log::debug!("Query '{}' returned {} rows", query.name(), rows.len());

        Ok(RowCursor::new(rows.into_iter().map(|r| r.0)))
    }

    async fn create_award(&self, award: &NewAward) -> Result<AwardCreation, StoreError> {
        let outcome = self.insert_award_pair(award).await?;
        match &outcome {
            AwardCreation::Created { award_id } => {
                log::info!(
                    "Award created: '{}' for '{}' in {} (ID: {})",
                    award.artist_title,
                    award.winner_artist,
                    award.year,
                    award_id
                );
            }
            AwardCreation::AwardInsertFailed { reason } => {
                log::warn!("Award insert failed: {reason}");
            }
            AwardCreation::ArtistAwardInsertFailed { award_id, reason } => {
                log::warn!("Artist award insert failed, award {award_id} rolled back: {reason}");
            }
            AwardCreation::CommitFailed { reason } => {
                log::warn!("Award transaction failed to commit: {reason}");
            }
        }
        Ok(outcome)
    }
}
