//! Resident entity - the primary business record of the directory.
//!
//! Residents are never hard-deleted by the store: deactivation clears
//! `is_active` and stamps `deactivated_at`. The (`unit`, `building`) pair is the
//! natural key used to recognise seed and import rows that already exist. Both parts
//! are NOT NULL so the key is total: a unit outside any named building is stored
//! with an empty `building`.
//!
//! `updated_at` is owned by the write path: `ActiveModel::before_save`
//! overwrites it on every insert and update, whatever the caller set.

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Resident database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "residents")]
pub struct Model {
    /// Unique identifier for the resident
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name shown in the directory
    pub display_name: String,
    /// Unit identifier (e.g., "101", "PH-2")
    pub unit: String,
    /// Building the unit belongs to; empty when there is none
    pub building: String,
    /// Floor label, kept as text so values like "G" or "B1" fit
    pub floor: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Location of the resident's photo
    pub photo_url: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Soft delete flag - false once the resident has been deactivated
    pub is_active: bool,
    /// When the row was created
    pub created_at: DateTimeUtc,
    /// When the row was last written
    pub updated_at: DateTimeUtc,
    /// When the resident was deactivated, if ever
    pub deactivated_at: Option<DateTimeUtc>,
}

/// Residents have no foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps `updated_at` with the current time on every save, discarding any
    /// value the caller supplied, and fills `created_at` on insert when unset.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
