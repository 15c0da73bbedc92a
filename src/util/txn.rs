//! Transaction helpers for the contended check-then-write paths.

use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, IsolationLevel, TransactionTrait,
};

/// Begins a transaction strong enough for the ledger's check-then-insert and
/// check-then-update sequences (capacity counting before an allocation
/// insert, cumulative payment summing before a paid transition).
///
/// On backends with configurable isolation this is `SERIALIZABLE`. SQLite has
/// no isolation levels to configure; its write transactions are serialized by
/// the single-writer lock, which gives the same guarantee.
pub async fn begin_serializable(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    match db.get_database_backend() {
        DbBackend::Sqlite => db.begin().await,
        _ => {
            db.begin_with_config(Some(IsolationLevel::Serializable), None)
                .await
        }
    }
}
