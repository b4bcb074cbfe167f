use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("transaction not found: {transaction_id}")]
    NotFound { transaction_id: String },

    #[error("transaction already exists: {transaction_id}")]
    DuplicateKey { transaction_id: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid stored row {transaction_id}: {reason}")]
    InvalidRow {
        transaction_id: String,
        reason: String,
    },
}
