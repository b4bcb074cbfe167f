use std::str::FromStr;
use std::time::Duration;

use fraudscreen_core::models::decision::DecisionRecord;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::row::DecisionRow;

const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS fraud_detection (
    transaction_id       TEXT PRIMARY KEY NOT NULL,
    amount               REAL NOT NULL,
    payer_id             TEXT NOT NULL,
    payee_id             TEXT NOT NULL,
    payment_mode         TEXT NOT NULL,
    transaction_channel  TEXT NOT NULL,
    payment_gateway_bank TEXT,
    timestamp            TEXT NOT NULL,
    is_fraud_predicted   BOOLEAN NOT NULL,
    is_fraud_reported    BOOLEAN NOT NULL DEFAULT 0,
    fraud_source         TEXT NOT NULL CHECK (fraud_source IN ('rule', 'model', 'none')),
    fraud_reason         TEXT NOT NULL,
    fraud_score          REAL NOT NULL
)";

const SELECT_COLUMNS: &str = "SELECT transaction_id, amount, payer_id, payee_id, payment_mode, \
     transaction_channel, payment_gateway_bank, timestamp, is_fraud_predicted, \
     is_fraud_reported, fraud_source, fraud_reason, fraud_score FROM fraud_detection";

/// Handle to the decision table. Cloning shares the underlying pool; every
/// operation checks a connection out for its own duration only.
#[derive(Debug, Clone)]
pub struct DecisionStore {
    pool: SqlitePool,
}

impl DecisionStore {
    /// Connect to `url` (e.g. `sqlite://fraud_detection.db?mode=rwc`).
    /// Does not create the schema; call [`DecisionStore::init`].
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(url)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;
        info!(url, max_connections, "connected to decision store");
        Ok(Self { pool })
    }

    /// A private in-memory database, used in tests. Pinned to a single
    /// connection that is never recycled, since each SQLite memory
    /// connection is its own database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    /// Create the table if it does not exist.
    pub async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new record. Never overwrites: an existing id yields
    /// [`StorageError::DuplicateKey`].
    pub async fn insert(&self, record: &DecisionRecord) -> Result<(), StorageError> {
        let result = sqlx::query(
            "INSERT INTO fraud_detection (transaction_id, amount, payer_id, payee_id, \
             payment_mode, transaction_channel, payment_gateway_bank, timestamp, \
             is_fraud_predicted, is_fraud_reported, fraud_source, fraud_reason, fraud_score) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )
        .bind(&record.transaction_id)
        .bind(record.amount)
        .bind(&record.payer_id)
        .bind(&record.payee_id)
        .bind(&record.payment_mode)
        .bind(&record.transaction_channel)
        .bind(record.payment_gateway_bank.as_deref())
        .bind(record.timestamp.to_string())
        .bind(record.is_fraud_predicted)
        .bind(record.is_fraud_reported)
        .bind(record.fraud_source.as_str())
        .bind(&record.fraud_reason)
        .bind(record.fraud_score)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!(transaction_id = %record.transaction_id, "decision stored");
                Ok(())
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StorageError::DuplicateKey {
                    transaction_id: record.transaction_id.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get(&self, transaction_id: &str) -> Result<DecisionRecord, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE transaction_id = ?1");
        let row: Option<DecisionRow> = sqlx::query_as(&sql)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or_else(|| StorageError::NotFound {
            transaction_id: transaction_id.to_string(),
        })?
        .try_into()
    }

    /// Every record, in insertion order.
    pub async fn list(&self) -> Result<Vec<DecisionRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY rowid");
        let rows: Vec<DecisionRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(DecisionRecord::try_from).collect()
    }

    /// Mark a record as reported fraud and overwrite its reason with
    /// `details`. Prediction fields are left untouched. Returns the updated
    /// record.
    pub async fn report_fraud(
        &self,
        transaction_id: &str,
        details: &str,
    ) -> Result<DecisionRecord, StorageError> {
        let mut tx: Transaction<'_, Sqlite> = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE fraud_detection SET is_fraud_reported = 1, fraud_reason = ?2 \
             WHERE transaction_id = ?1",
        )
        .bind(transaction_id)
        .bind(details)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            // Dropping `tx` rolls back; nothing was written.
            return Err(StorageError::NotFound {
                transaction_id: transaction_id.to_string(),
            });
        }

        let sql = format!("{SELECT_COLUMNS} WHERE transaction_id = ?1");
        let row: DecisionRow = sqlx::query_as(&sql)
            .bind(transaction_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        row.try_into()
    }

    /// Delete every record. Returns how many were removed.
    pub async fn clear(&self) -> Result<u64, StorageError> {
        let removed = sqlx::query("DELETE FROM fraud_detection")
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(removed, "decision store cleared");
        Ok(removed)
    }

    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fraud_detection")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
