//! Audit log business logic - the append-only record of who did what.
//!
//! [`record`] is the only write. Entries are never updated or deleted by this crate;
//! retention is handled outside of it.

use crate::{
    entities::{AuditEntry, EntityKind, audit_entry, user},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Who performed an audited action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// Provisioning, background jobs and other actions without a signed-in user
    System,
    /// A signed-in user; the email is snapshotted into the entry
    User {
        /// User id at the time of the action
        id: i64,
        /// User email at the time of the action
        email: String,
    },
}

impl Actor {
    /// Builds an actor from a loaded user row.
    #[must_use]
    pub fn from_user(user: &user::Model) -> Self {
        Self::User {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Action label stored with each entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditAction {
    /// A resident was created
    ResidentCreate,
    /// A resident was edited
    ResidentUpdate,
    /// A resident was deactivated
    ResidentDelete,
    /// Residents were imported in bulk
    BulkImport,
    /// A user signed in
    Login,
    /// Any label outside the known vocabulary
    Other(String),
}

impl AuditAction {
    /// The label as stored in `audit_entries.action`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ResidentCreate => "resident_create",
            Self::ResidentUpdate => "resident_update",
            Self::ResidentDelete => "resident_delete",
            Self::BulkImport => "bulk_import",
            Self::Login => "login",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry waiting to be written.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    actor: Actor,
    action: AuditAction,
    entity_type: EntityKind,
    entity_id: Option<String>,
    before: Option<Json>,
    after: Option<Json>,
    metadata: Option<Json>,
}

impl NewAuditEntry {
    /// Starts an entry with no entity id and no payloads.
    #[must_use]
    pub const fn new(actor: Actor, action: AuditAction, entity_type: EntityKind) -> Self {
        Self {
            actor,
            action,
            entity_type,
            entity_id: None,
            before: None,
            after: None,
            metadata: None,
        }
    }

    /// Sets the identifier of the touched entity.
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Sets the snapshot taken before the action.
    #[must_use]
    pub fn before(mut self, snapshot: Json) -> Self {
        self.before = Some(snapshot);
        self
    }

    /// Sets the snapshot taken after the action.
    #[must_use]
    pub fn after(mut self, snapshot: Json) -> Self {
        self.after = Some(snapshot);
        self
    }

    /// Sets free-form structured context.
    #[must_use]
    pub fn metadata(mut self, metadata: Json) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Serializes a row into an audit payload.
pub fn snapshot<T: Serialize>(value: &T) -> Result<Json> {
    Ok(serde_json::to_value(value)?)
}

/// Appends an entry to the audit log.
pub async fn record<C>(db: &C, entry: NewAuditEntry) -> Result<audit_entry::Model>
where
    C: ConnectionTrait,
{
    let (actor_user_id, actor_email) = match entry.actor {
        Actor::System => (None, None),
        Actor::User { id, email } => (Some(id), Some(email)),
    };

    let model = audit_entry::ActiveModel {
        actor_user_id: Set(actor_user_id),
        actor_email: Set(actor_email),
        action: Set(entry.action.as_str().to_string()),
        entity_type: Set(entry.entity_type),
        entity_id: Set(entry.entity_id),
        before_state: Set(entry.before),
        after_state: Set(entry.after),
        metadata: Set(entry.metadata),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    debug!(
        action = %result.action,
        entity_id = result.entity_id.as_deref().unwrap_or("-"),
        "Audit entry recorded"
    );
    Ok(result)
}

/// Retrieves the history of one entity, oldest first.
pub async fn entries_for_entity<C>(
    db: &C,
    entity_type: EntityKind,
    entity_id: &str,
) -> Result<Vec<audit_entry::Model>>
where
    C: ConnectionTrait,
{
    AuditEntry::find()
        .filter(audit_entry::Column::EntityType.eq(entity_type))
        .filter(audit_entry::Column::EntityId.eq(entity_id))
        .order_by_asc(audit_entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every entry written by the given email, oldest first. Still finds
/// entries whose actor account has since been deleted.
pub async fn entries_by_actor_email<C>(db: &C, email: &str) -> Result<Vec<audit_entry::Model>>
where
    C: ConnectionTrait,
{
    AuditEntry::find()
        .filter(audit_entry::Column::ActorEmail.eq(email))
        .order_by_asc(audit_entry::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
