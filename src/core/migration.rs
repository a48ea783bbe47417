//! Migration ledger - records which schema versions have been applied.
//!
//! The ledger only supports recording and probing a version. There is no rollback
//! and no version chain: a label is written once and then left alone.

use crate::{
    core::policy::MIGRATION_POLICY,
    entities::{SchemaMigration, schema_migration},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::debug;

/// Records `version` as applied.
///
/// Returns `true` when the version was recorded by this call and `false` when it was
/// already present, in which case the original `applied_at` is kept.
pub async fn record_version<C>(db: &C, version: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    let record = schema_migration::ActiveModel {
        version: Set(version.to_string()),
        applied_at: Set(Utc::now()),
    };

    let rows = SchemaMigration::insert(record)
        .on_conflict(MIGRATION_POLICY.on_conflict([schema_migration::Column::Version], []))
        .exec_without_returning(db)
        .await?;

    debug!(version, inserted = rows > 0, "Recorded schema version");
    Ok(rows > 0)
}

/// Checks whether `version` has already been recorded.
pub async fn is_version_applied<C>(db: &C, version: &str) -> Result<bool>
where
    C: ConnectionTrait,
{
    Ok(SchemaMigration::find_by_id(version.to_string())
        .one(db)
        .await?
        .is_some())
}
