//! Provisioning runner - the single unit of work executed at deployment start-up.
//!
//! Schema creation, seeding and the ledger entry share one database transaction: if
//! any step fails nothing is committed and the database keeps its previous state.

use crate::{
    config::{database::create_tables, seed::SeedConfig},
    core::{
        migration,
        seed::{SeedReport, seed},
    },
    errors::Result,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

/// Outcome of one provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Version label recorded in the ledger
    pub version: String,
    /// Whether this run recorded the version (false when it was already applied)
    pub newly_applied: bool,
    /// Rows written by the seed loader
    pub seed: SeedReport,
}

/// Creates the schema, applies the seed set and records the migration version, all
/// in one transaction.
///
/// The seed loader runs even when the version is already recorded, so overwrite-on-
/// conflict metadata such as role descriptions follows the current seed set.
#[instrument(skip_all, fields(version = %config.migration_version))]
pub async fn run(db: &DatabaseConnection, config: &SeedConfig) -> Result<ProvisionReport> {
    let txn = db.begin().await?;

    create_tables(&txn).await?;

    if migration::is_version_applied(&txn, &config.migration_version).await? {
        info!("Schema version already applied, re-checking seed data");
    }

    let seed_report = seed(&txn, config).await?;
    let newly_applied = migration::record_version(&txn, &config.migration_version).await?;

    txn.commit().await?;
    info!(newly_applied, "Provisioning committed");

    Ok(ProvisionReport {
        version: config.migration_version.clone(),
        newly_applied,
        seed: seed_report,
    })
}
