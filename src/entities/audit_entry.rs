//! Audit entry entity - the append-only action log.
//!
//! An entry points at the entity it describes through an [`EntityKind`] tag and
//! a text id, so one table covers residents, users, roles and imports. Valid
//! pairings:
//!
//! | `entity_type` | `entity_id`            |
//! |---------------|------------------------|
//! | `resident`    | resident id            |
//! | `user`        | user id or email       |
//! | `role`        | role name              |
//! | `import`      | none                   |
//!
//! The pairings are a convention; storage does not enforce them.
//!
//! The actor is referenced weakly: deleting the user sets `actor_user_id` to
//! NULL while `actor_email` keeps the snapshot taken when the entry was written.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of entity an audit entry refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A row of `residents`
    #[sea_orm(string_value = "resident")]
    Resident,
    /// A row of `users`
    #[sea_orm(string_value = "user")]
    User,
    /// A row of `roles`
    #[sea_orm(string_value = "role")]
    Role,
    /// A bulk operation spanning many rows
    #[sea_orm(string_value = "import")]
    Import,
}

/// Audit entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Acting user; NULL for system actions or once the user is deleted
    pub actor_user_id: Option<i64>,
    /// Email of the acting user at the time of the action
    pub actor_email: Option<String>,
    /// Action label (e.g., `"resident_update"`, `"login"`)
    pub action: String,
    /// Kind of entity the action touched
    pub entity_type: EntityKind,
    /// Identifier of the touched entity, shaped per `entity_type`
    pub entity_id: Option<String>,
    /// Snapshot before the action
    pub before_state: Option<Json>,
    /// Snapshot after the action
    pub after_state: Option<Json>,
    /// Additional structured context
    pub metadata: Option<Json>,
    /// When the action was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between an audit entry and its actor
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry may reference the user who acted
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ActorUserId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Actor,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
