//! Seed loader - brings a database to the baseline described by a [`SeedConfig`].
//!
//! The steps run in a fixed order: roles, users, role assignments, sample residents.
//! Each insert carries the conflict policy from [`crate::core::policy`], so running the
//! loader again converges to the same table contents instead of duplicating rows.

use crate::{
    config::seed::SeedConfig,
    core::{identity, resident},
    errors::Result,
};
use sea_orm::ConnectionTrait;
use tracing::{debug, info, instrument};

/// Rows written per table by one [`seed`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Roles inserted or updated
    pub roles: u64,
    /// Users inserted or updated
    pub users: u64,
    /// Role assignments created
    pub assignments: u64,
    /// Sample residents inserted
    pub residents: u64,
}

/// Applies the seed set. Does not open its own transaction; the caller decides the
/// unit of work.
#[instrument(skip_all)]
pub async fn seed<C>(db: &C, config: &SeedConfig) -> Result<SeedReport>
where
    C: ConnectionTrait,
{
    let mut report = SeedReport::default();

    for role in &config.roles {
        report.roles += identity::ensure_role(db, &role.name, &role.description).await?;
    }

    for user in &config.users {
        report.users += identity::ensure_user(
            db,
            &user.email,
            &user.name,
            &user.password_hash,
            user.active,
        )
        .await?;
    }

    for user in &config.users {
        for role_name in &user.roles {
            let rows = identity::assign_role(db, &user.email, role_name).await?;
            debug!(email = %user.email, role = %role_name, rows, "Role assignment");
            report.assignments += rows;
        }
    }

    for row in &config.residents {
        report.residents += resident::insert_if_absent(db, row.into()).await?;
    }

    info!(
        roles = report.roles,
        users = report.users,
        assignments = report.assignments,
        residents = report.residents,
        "Seed data applied"
    );
    Ok(report)
}
