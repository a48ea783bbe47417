//! Database configuration module for the resident directory.
//!
//! This module handles the `SQLite` connection and the schema definition. Tables are
//! generated from the entity models with `SeaORM`'s `Schema::create_table_from_entity`,
//! so the stored layout always matches the Rust structs; the secondary indexes the
//! entities cannot express are declared here with `sea_query`. Every statement is
//! guarded with `IF NOT EXISTS`, which makes [`create_tables`] safe to run on every
//! start-up.

use crate::entities::{
    AuditEntry, Resident, Role, SchemaMigration, User, UserRole, audit_entry, resident,
};
use crate::errors::Result;
use sea_orm::sea_query::{Index, IndexCreateStatement};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::debug;

const DEFAULT_DATABASE_URL: &str = "sqlite://resident_directory.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a local `SQLite` file that is created on first use.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates every table and index that does not exist yet.
///
/// Tables are created parents first so the foreign keys of `user_roles` and
/// `audit_entries` resolve. Works on a plain connection or inside a transaction.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let tables = [
        schema.create_table_from_entity(SchemaMigration),
        schema.create_table_from_entity(Role),
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(UserRole),
        schema.create_table_from_entity(Resident),
        schema.create_table_from_entity(AuditEntry),
    ];

    for mut table in tables {
        table.if_not_exists();
        db.execute(builder.build(&table)).await?;
    }

    for index in secondary_indexes() {
        db.execute(builder.build(&index)).await?;
    }

    debug!("Schema ensured");
    Ok(())
}

/// Lookup indexes for the directory and the audit log, plus the resident natural key.
fn secondary_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_residents_unit_building")
            .table(Resident)
            .col(resident::Column::Unit)
            .col(resident::Column::Building)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_residents_is_active")
            .table(Resident)
            .col(resident::Column::IsActive)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_residents_unit")
            .table(Resident)
            .col(resident::Column::Unit)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_residents_building")
            .table(Resident)
            .col(resident::Column::Building)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_residents_floor")
            .table(Resident)
            .col(resident::Column::Floor)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_residents_display_name")
            .table(Resident)
            .col(resident::Column::DisplayName)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_audit_entries_actor_user_id")
            .table(AuditEntry)
            .col(audit_entry::Column::ActorUserId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_audit_entries_entity")
            .table(AuditEntry)
            .col(audit_entry::Column::EntityType)
            .col(audit_entry::Column::EntityId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_audit_entries_created_at")
            .table(AuditEntry)
            .col(audit_entry::Column::CreatedAt)
            .if_not_exists()
            .to_owned(),
    ]
}
