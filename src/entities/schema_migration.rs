//! Schema migration entity - the ledger of applied schema versions.
//!
//! One row per version label. The label is the primary key, so a version can
//! only ever be recorded once.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Applied schema version
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schema_migrations")]
pub struct Model {
    /// Version label (e.g. `"20240101_000001_initial"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub version: String,
    /// When the version was first recorded
    pub applied_at: DateTimeUtc,
}

/// The ledger has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
