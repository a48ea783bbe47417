//! Identity and access business logic - roles, users and role assignments.
//!
//! Users are identified by email and roles by name everywhere in this module; numeric
//! ids are resolved internally. Ensuring a role or user is an upsert, and assigning a
//! role whose user or role does not exist is a silent no-op that reports zero rows.
//! Emails and role names are trimmed by `key` on every write and lookup.

use crate::{
    core::{
        audit::{self, Actor, AuditAction, NewAuditEntry},
        policy::{ROLE_POLICY, USER_POLICY, USER_ROLE_POLICY},
    },
    entities::{EntityKind, Role, User, UserRole, role, user, user_role},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info};

/// Canonical form of an identity key (user email or role name).
fn key(value: &str) -> &str {
    value.trim()
}

/// Creates the role, or overwrites its description when it already exists.
///
/// Returns the number of rows written.
pub async fn ensure_role<C>(db: &C, name: &str, description: &str) -> Result<u64>
where
    C: ConnectionTrait,
{
    let name = key(name);
    if name.is_empty() {
        return Err(Error::InvalidInput {
            message: "Role name cannot be empty".to_string(),
        });
    }

    let model = role::ActiveModel {
        name: Set(name.to_string()),
        description: Set(Some(description.to_string())),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let rows = Role::insert(model)
        .on_conflict(ROLE_POLICY.on_conflict([role::Column::Name], [role::Column::Description]))
        .exec_without_returning(db)
        .await?;
    Ok(rows)
}

/// Creates the user, or overwrites name, password hash and active flag when a user
/// with this email already exists. Re-running with a new hash rotates the password.
///
/// `password_hash` must be a PHC string (`$algorithm$...`); anything else is
/// rejected so that plaintext never reaches storage.
pub async fn ensure_user<C>(
    db: &C,
    email: &str,
    name: &str,
    password_hash: &str,
    active: bool,
) -> Result<u64>
where
    C: ConnectionTrait,
{
    let email = key(email);
    if !email.contains('@') {
        return Err(Error::InvalidInput {
            message: format!("Invalid user email: {email:?}"),
        });
    }

    if !is_phc_hash(password_hash) {
        return Err(Error::InvalidInput {
            message: format!("Password for {email} is not a PHC hash string"),
        });
    }

    let model = user::ActiveModel {
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        password_hash: Set(password_hash.to_string()),
        is_active: Set(active),
        created_at: Set(Utc::now()),
        last_login_at: Set(None),
        ..Default::default()
    };

    let rows = User::insert(model)
        .on_conflict(USER_POLICY.on_conflict(
            [user::Column::Email],
            [
                user::Column::Name,
                user::Column::PasswordHash,
                user::Column::IsActive,
            ],
        ))
        .exec_without_returning(db)
        .await?;
    Ok(rows)
}

/// Grants the named role to the user with this email.
///
/// Returns `1` when the assignment was created and `0` when it already existed or
/// when either the user or the role is missing. Neither case is an error, so callers
/// that depend on the assignment must make sure both sides exist first.
pub async fn assign_role<C>(db: &C, email: &str, role_name: &str) -> Result<u64>
where
    C: ConnectionTrait,
{
    let (email, role_name) = (key(email), key(role_name));
    let Some(user) = find_user_by_email(db, email).await? else {
        debug!(email, role_name, "Skipping role assignment: no such user");
        return Ok(0);
    };
    let Some(role) = find_role_by_name(db, role_name).await? else {
        debug!(email, role_name, "Skipping role assignment: no such role");
        return Ok(0);
    };

    let model = user_role::ActiveModel {
        user_id: Set(user.id),
        role_id: Set(role.id),
        created_at: Set(Utc::now()),
    };

    let rows = UserRole::insert(model)
        .on_conflict(
            USER_ROLE_POLICY.on_conflict([user_role::Column::UserId, user_role::Column::RoleId], []),
        )
        .exec_without_returning(db)
        .await?;
    Ok(rows)
}

/// Finds a user by email.
pub async fn find_user_by_email<C>(db: &C, email: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find()
        .filter(user::Column::Email.eq(key(email)))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a role by name.
pub async fn find_role_by_name<C>(db: &C, name: &str) -> Result<Option<role::Model>>
where
    C: ConnectionTrait,
{
    Role::find()
        .filter(role::Column::Name.eq(key(name)))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists the names of the roles held by the user with this email, sorted.
/// Unknown users hold no roles.
pub async fn role_names_for_user<C>(db: &C, email: &str) -> Result<Vec<String>>
where
    C: ConnectionTrait,
{
    let Some(user) = find_user_by_email(db, email).await? else {
        return Ok(Vec::new());
    };

    let roles = user
        .find_related(Role)
        .order_by_asc(role::Column::Name)
        .all(db)
        .await?;
    Ok(roles.into_iter().map(|r| r.name).collect())
}

/// Stamps a successful sign-in and writes a `login` audit entry.
///
/// Returns `None` without writing anything when the user does not exist or is
/// inactive.
pub async fn record_login(db: &DatabaseConnection, email: &str) -> Result<Option<user::Model>> {
    let txn = db.begin().await?;

    let Some(user) = find_user_by_email(&txn, email).await? else {
        return Ok(None);
    };
    if !user.is_active {
        info!(email, "Refusing login for inactive user");
        return Ok(None);
    }

    let mut active_model: user::ActiveModel = user.into();
    active_model.last_login_at = Set(Some(Utc::now()));
    let updated = active_model.update(&txn).await?;

    audit::record(
        &txn,
        NewAuditEntry::new(Actor::from_user(&updated), AuditAction::Login, EntityKind::User)
            .entity_id(updated.id.to_string()),
    )
    .await?;

    txn.commit().await?;
    Ok(Some(updated))
}

/// Checks for the PHC string shape `$id$...$...`: a non-empty algorithm id made of
/// `[a-z0-9-]` followed by at least two more `$`-separated fields.
fn is_phc_hash(value: &str) -> bool {
    let mut fields = value.split('$');
    if fields.next() != Some("") {
        return false;
    }
    let algorithm_ok = fields.next().is_some_and(|id| {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    });
    algorithm_ok && fields.filter(|f| !f.is_empty()).count() >= 2
}
