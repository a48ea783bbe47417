//! Shared test utilities for the resident directory.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        audit::Actor,
        identity,
        resident::{self, NewResident},
    },
    entities,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// PBKDF2-SHA256 PHC hash used for every test account
pub const TEST_PASSWORD_HASH: &str =
    "$pbkdf2-sha256$i=600000,l=32$dGVzdC1zYWx0$dGVzdC1oYXNoLXZhbHVlLW5vdC1yZWFs";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an active test user and returns the stored row.
///
/// # Defaults
/// * `name`: the local part of the email
/// * `password_hash`: [`TEST_PASSWORD_HASH`]
pub async fn create_test_user(db: &DatabaseConnection, email: &str) -> Result<entities::user::Model> {
    let name = email.split('@').next().unwrap_or(email);
    identity::ensure_user(db, email, name, TEST_PASSWORD_HASH, true).await?;
    identity::find_user_by_email(db, email)
        .await?
        .ok_or_else(|| Error::InvalidInput {
            message: format!("Test user {email} was not created"),
        })
}

/// Builds resident fields with sensible defaults.
///
/// # Defaults
/// * `floor`: first character of the unit
/// * contact fields, photo and notes: None
#[must_use]
pub fn new_test_resident(display_name: &str, unit: &str, building: &str) -> NewResident {
    NewResident {
        display_name: display_name.to_string(),
        unit: unit.to_string(),
        building: Some(building.to_string()),
        floor: unit.chars().next().map(String::from),
        ..Default::default()
    }
}

/// Creates a test resident as the system actor.
pub async fn create_test_resident(
    db: &DatabaseConnection,
    display_name: &str,
    unit: &str,
    building: &str,
) -> Result<entities::resident::Model> {
    resident::create_resident(
        db,
        &Actor::System,
        new_test_resident(display_name, unit, building),
    )
    .await
}
