//! User entity - accounts that sign in to the directory.
//!
//! The email is the stable identity key; the numeric id is an implementation
//! detail that may differ between deployments. Passwords are only ever stored
//! as self-describing PHC hash strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique sign-in email
    #[sea_orm(unique)]
    pub email: String,
    /// Display name
    pub name: String,
    /// Salted hash in PHC string format (`$algorithm$params$salt$hash`)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Inactive users cannot sign in
    pub is_active: bool,
    /// When the account was created
    pub created_at: DateTimeUtc,
    /// Last successful sign-in, if any
    pub last_login_at: Option<DateTimeUtc>,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many role assignments
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
    /// One user is the actor of many audit entries
    #[sea_orm(has_many = "super::audit_entry::Entity")]
    AuditEntries,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Related<super::audit_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuditEntries.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
