//! Resident directory business logic - create, search, edit, deactivate and import.
//!
//! Every write goes through the entity's `ActiveModelBehavior::before_save`, which owns
//! `updated_at`; nothing in this module touches residents with `update_many`. Each
//! mutation appends its audit entry inside the same database transaction.

use crate::{
    config::seed::ResidentSeed,
    core::{
        audit::{self, Actor, AuditAction, NewAuditEntry, snapshot},
        policy::RESIDENT_POLICY,
    },
    entities::{EntityKind, Resident, resident},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{Condition, QueryOrder, Set, TransactionTrait, prelude::*};
use serde_json::json;
use tracing::info;

/// Fields of a resident to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewResident {
    /// Name shown in the directory
    pub display_name: String,
    /// Unit identifier
    pub unit: String,
    /// Building; `None` for a unit outside any named building
    pub building: Option<String>,
    /// Floor label
    pub floor: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Photo location
    pub photo_url: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Canonical unit value: surrounding whitespace removed.
fn unit_key(unit: &str) -> String {
    unit.trim().to_string()
}

/// Canonical building value: trimmed, with a missing building stored as `""` so the
/// (`unit`, `building`) key never contains NULL.
fn building_key(building: Option<&str>) -> String {
    building.map(str::trim).unwrap_or_default().to_string()
}

/// Escapes the `LIKE` wildcards `%` and `_` (and the escape character itself) so the
/// text matches literally under `ESCAPE '\'`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl NewResident {
    fn validate(&self) -> Result<()> {
        if self.display_name.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "Resident name cannot be empty".to_string(),
            });
        }
        if self.unit.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: format!("Resident {} has no unit", self.display_name.trim()),
            });
        }
        Ok(())
    }

    fn into_active_model(self) -> resident::ActiveModel {
        resident::ActiveModel {
            display_name: Set(self.display_name.trim().to_string()),
            unit: Set(unit_key(&self.unit)),
            building: Set(building_key(self.building.as_deref())),
            floor: Set(self.floor),
            phone: Set(self.phone),
            email: Set(self.email),
            photo_url: Set(self.photo_url),
            notes: Set(self.notes),
            is_active: Set(true),
            deactivated_at: Set(None),
            ..Default::default()
        }
    }
}

impl From<&ResidentSeed> for NewResident {
    fn from(seed: &ResidentSeed) -> Self {
        Self {
            display_name: seed.display_name.clone(),
            unit: seed.unit.clone(),
            building: seed.building.clone(),
            floor: seed.floor.clone(),
            phone: seed.phone.clone(),
            email: seed.email.clone(),
            photo_url: None,
            notes: seed.notes.clone(),
        }
    }
}

/// Edits to apply to a resident. `None` leaves a field alone; for optional columns
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentChanges {
    /// New display name
    pub display_name: Option<String>,
    /// New unit
    pub unit: Option<String>,
    /// New building
    pub building: Option<Option<String>>,
    /// New floor
    pub floor: Option<Option<String>>,
    /// New phone
    pub phone: Option<Option<String>>,
    /// New email
    pub email: Option<Option<String>>,
    /// New photo location
    pub photo_url: Option<Option<String>>,
    /// New notes
    pub notes: Option<Option<String>>,
}

impl ResidentChanges {
    fn apply(self, model: &mut resident::ActiveModel) -> Result<()> {
        if let Some(display_name) = self.display_name {
            if display_name.trim().is_empty() {
                return Err(Error::InvalidInput {
                    message: "Resident name cannot be empty".to_string(),
                });
            }
            model.display_name = Set(display_name.trim().to_string());
        }
        if let Some(unit) = self.unit {
            if unit.trim().is_empty() {
                return Err(Error::InvalidInput {
                    message: "Resident unit cannot be empty".to_string(),
                });
            }
            model.unit = Set(unit_key(&unit));
        }
        if let Some(building) = self.building {
            model.building = Set(building_key(building.as_deref()));
        }
        if let Some(floor) = self.floor {
            model.floor = Set(floor);
        }
        if let Some(phone) = self.phone {
            model.phone = Set(phone);
        }
        if let Some(email) = self.email {
            model.email = Set(email);
        }
        if let Some(photo_url) = self.photo_url {
            model.photo_url = Set(photo_url);
        }
        if let Some(notes) = self.notes {
            model.notes = Set(notes);
        }
        Ok(())
    }
}

/// Directory search criteria; unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentFilter {
    /// Only active (`true`) or only deactivated (`false`) residents
    pub active: Option<bool>,
    /// Exact unit
    pub unit: Option<String>,
    /// Exact building
    pub building: Option<String>,
    /// Exact floor
    pub floor: Option<String>,
    /// Name fragment, matched literally and case-insensitively
    pub name_contains: Option<String>,
}

/// Outcome of [`import_residents`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows written
    pub inserted: u64,
    /// Rows whose unit and building already existed
    pub skipped: u64,
}

/// Inserts the resident unless one with the same unit and building already exists.
///
/// Returns the number of rows written (`0` or `1`). Used by the seed loader and bulk
/// import; does not write an audit entry.
pub async fn insert_if_absent<C>(db: &C, new: NewResident) -> Result<u64>
where
    C: ConnectionTrait,
{
    new.validate()?;
    let model = new.into_active_model().before_save(db, true).await?;

    let rows = Resident::insert(model)
        .on_conflict(RESIDENT_POLICY.on_conflict(
            [resident::Column::Unit, resident::Column::Building],
            [],
        ))
        .exec_without_returning(db)
        .await?;
    Ok(rows)
}

/// Creates a resident and records a `resident_create` entry.
///
/// A resident whose unit and building are already taken fails with a constraint
/// violation.
pub async fn create_resident(
    db: &DatabaseConnection,
    actor: &Actor,
    new: NewResident,
) -> Result<resident::Model> {
    new.validate()?;

    let txn = db.begin().await?;
    let created = new.into_active_model().insert(&txn).await?;

    audit::record(
        &txn,
        NewAuditEntry::new(actor.clone(), AuditAction::ResidentCreate, EntityKind::Resident)
            .entity_id(created.id.to_string())
            .after(snapshot(&created)?),
    )
    .await?;

    txn.commit().await?;
    Ok(created)
}

/// Finds a resident by id, active or not.
pub async fn get_resident_by_id<C>(db: &C, resident_id: i64) -> Result<Option<resident::Model>>
where
    C: ConnectionTrait,
{
    Resident::find_by_id(resident_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds the resident occupying a unit. A `None` building matches units outside any
/// named building. Both parts are normalised the same way they are on insert.
pub async fn find_by_unit<C>(
    db: &C,
    unit: &str,
    building: Option<&str>,
) -> Result<Option<resident::Model>>
where
    C: ConnectionTrait,
{
    Resident::find()
        .filter(resident::Column::Unit.eq(unit_key(unit)))
        .filter(resident::Column::Building.eq(building_key(building)))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Searches the directory, ordered by display name.
pub async fn search_residents<C>(db: &C, filter: &ResidentFilter) -> Result<Vec<resident::Model>>
where
    C: ConnectionTrait,
{
    let condition = Condition::all()
        .add_option(filter.active.map(|a| resident::Column::IsActive.eq(a)))
        .add_option(
            filter
                .unit
                .as_deref()
                .map(|u| resident::Column::Unit.eq(unit_key(u))),
        )
        .add_option(
            filter
                .building
                .as_deref()
                .map(|b| resident::Column::Building.eq(building_key(Some(b)))),
        )
        .add_option(filter.floor.as_deref().map(|f| resident::Column::Floor.eq(f)))
        .add_option(
            filter
                .name_contains
                .as_deref()
                .map(|n| {
                    let pattern = format!("%{}%", escape_like(n.trim()));
                    resident::Column::DisplayName.like(LikeExpr::new(pattern).escape('\\'))
                }),
        );

    Resident::find()
        .filter(condition)
        .order_by_asc(resident::Column::DisplayName)
        .order_by_asc(resident::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies `changes` to a resident and records a `resident_update` entry with the
/// before and after snapshots. `updated_at` is refreshed even when `changes` is empty.
pub async fn update_resident(
    db: &DatabaseConnection,
    actor: &Actor,
    resident_id: i64,
    changes: ResidentChanges,
) -> Result<resident::Model> {
    let txn = db.begin().await?;

    let existing = get_resident_by_id(&txn, resident_id)
        .await?
        .ok_or(Error::ResidentNotFound { id: resident_id })?;
    let before = snapshot(&existing)?;

    let mut active_model: resident::ActiveModel = existing.into();
    changes.apply(&mut active_model)?;
    let updated = active_model.update(&txn).await?;

    audit::record(
        &txn,
        NewAuditEntry::new(actor.clone(), AuditAction::ResidentUpdate, EntityKind::Resident)
            .entity_id(resident_id.to_string())
            .before(before)
            .after(snapshot(&updated)?),
    )
    .await?;

    txn.commit().await?;
    Ok(updated)
}

/// Soft-deletes a resident: clears `is_active`, stamps `deactivated_at` and records a
/// `resident_delete` entry. An already inactive resident is returned unchanged.
pub async fn deactivate_resident(
    db: &DatabaseConnection,
    actor: &Actor,
    resident_id: i64,
) -> Result<resident::Model> {
    let txn = db.begin().await?;

    let existing = get_resident_by_id(&txn, resident_id)
        .await?
        .ok_or(Error::ResidentNotFound { id: resident_id })?;
    if !existing.is_active {
        return Ok(existing);
    }
    let before = snapshot(&existing)?;

    let mut active_model: resident::ActiveModel = existing.into();
    active_model.is_active = Set(false);
    active_model.deactivated_at = Set(Some(Utc::now()));
    let updated = active_model.update(&txn).await?;

    audit::record(
        &txn,
        NewAuditEntry::new(actor.clone(), AuditAction::ResidentDelete, EntityKind::Resident)
            .entity_id(resident_id.to_string())
            .before(before)
            .after(snapshot(&updated)?),
    )
    .await?;

    txn.commit().await?;
    Ok(updated)
}

/// Imports residents in one transaction, skipping units that already exist, and
/// records a single `bulk_import` entry with the counts.
///
/// All rows are validated before anything is written.
pub async fn import_residents(
    db: &DatabaseConnection,
    actor: &Actor,
    residents: Vec<NewResident>,
) -> Result<ImportSummary> {
    for new in &residents {
        new.validate()?;
    }

    let total = residents.len() as u64;
    let txn = db.begin().await?;

    let mut inserted = 0;
    for new in residents {
        inserted += insert_if_absent(&txn, new).await?;
    }
    let summary = ImportSummary {
        inserted,
        skipped: total - inserted,
    };

    audit::record(
        &txn,
        NewAuditEntry::new(actor.clone(), AuditAction::BulkImport, EntityKind::Import).metadata(
            json!({ "inserted": summary.inserted, "skipped": summary.skipped }),
        ),
    )
    .await?;

    txn.commit().await?;
    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Resident import finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::audit::entries_for_entity;
    use crate::test_utils::*;
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_resident_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_resident(
            &db,
            &Actor::System,
            NewResident {
                display_name: "   ".to_string(),
                unit: "101".to_string(),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(Error::InvalidInput { message: _ })));

        let result = create_resident(
            &db,
            &Actor::System,
            NewResident {
                display_name: "Eve".to_string(),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(Error::InvalidInput { message: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_resident_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let resident = create_test_resident(&db, "Dana Park", "402", "C").await?;
        assert_eq!(resident.display_name, "Dana Park");
        assert!(resident.is_active);
        assert!(resident.deactivated_at.is_none());
        assert_eq!(resident.created_at, resident.updated_at);

        let history = entries_for_entity(&db, EntityKind::Resident, &resident.id.to_string()).await?;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, "resident_create");
        assert!(history[0].before_state.is_none());
        assert_eq!(history[0].after_state, Some(snapshot(&resident)?));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_resident_duplicate_unit_fails() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_resident(&db, "Dana Park", "402", "C").await?;

        let result = create_test_resident(&db, "Someone Else", "402", "C").await;
        assert!(matches!(result, Err(Error::Database(_))));

        let residents = search_residents(&db, &ResidentFilter::default()).await?;
        assert_eq!(residents.len(), 1);

        // The failed create left no audit entry behind
        let entries = crate::entities::AuditEntry::find().all(&db).await?;
        assert_eq!(entries.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() -> Result<()> {
        let db = setup_test_db().await?;
        let resident = create_test_resident(&db, "Dana Park", "402", "C").await?;

        let start = Utc::now();
        let updated = update_resident(
            &db,
            &Actor::System,
            resident.id,
            ResidentChanges {
                phone: Some(Some("555-0402".to_string())),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(updated.phone.as_deref(), Some("555-0402"));
        assert!(updated.updated_at >= resident.updated_at);
        assert!(updated.updated_at >= start);
        assert_eq!(updated.created_at, resident.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_caller_supplied_updated_at_is_discarded() -> Result<()> {
        let db = setup_test_db().await?;
        let resident = create_test_resident(&db, "Dana Park", "402", "C").await?;

        let start = Utc::now();
        let stale = start - Duration::days(365);
        let mut active_model: resident::ActiveModel = resident.clone().into();
        active_model.notes = Set(Some("Moved in".to_string()));
        active_model.updated_at = Set(stale);
        let updated = active_model.update(&db).await?;

        assert!(updated.updated_at >= start);
        assert!(updated.updated_at >= resident.updated_at);

        let stored = get_resident_by_id(&db, resident.id).await?.unwrap();
        assert_eq!(stored.updated_at, updated.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_resident_records_snapshots() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_user(&db, "admin@example.com").await?;
        let resident = create_test_resident(&db, "Dana Park", "402", "C").await?;

        let updated = update_resident(
            &db,
            &Actor::from_user(&admin),
            resident.id,
            ResidentChanges {
                display_name: Some("Dana Park-Lee".to_string()),
                notes: Some(None),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(updated.display_name, "Dana Park-Lee");

        let history = entries_for_entity(&db, EntityKind::Resident, &resident.id.to_string()).await?;
        let last = history.last().unwrap();
        assert_eq!(last.action, "resident_update");
        assert_eq!(last.actor_user_id, Some(admin.id));
        assert_eq!(last.before_state, Some(snapshot(&resident)?));
        assert_eq!(last.after_state, Some(snapshot(&updated)?));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_resident_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_resident(&db, &Actor::System, 999, ResidentChanges::default()).await;
        assert!(matches!(result, Err(Error::ResidentNotFound { id: 999 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_resident() -> Result<()> {
        let db = setup_test_db().await?;
        let resident = create_test_resident(&db, "Dana Park", "402", "C").await?;

        let start = Utc::now();
        let deactivated = deactivate_resident(&db, &Actor::System, resident.id).await?;
        assert!(!deactivated.is_active);
        let deactivated_at = deactivated.deactivated_at.unwrap();
        assert!(deactivated_at >= start);
        assert!(deactivated.updated_at >= start);

        // Second call changes nothing and writes no entry
        let again = deactivate_resident(&db, &Actor::System, resident.id).await?;
        assert_eq!(again, deactivated);

        let history = entries_for_entity(&db, EntityKind::Resident, &resident.id.to_string()).await?;
        let actions: Vec<_> = history.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["resident_create", "resident_delete"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_residents() -> Result<()> {
        let db = setup_test_db().await?;
        let dana = create_test_resident(&db, "Dana Park", "402", "C").await?;
        create_test_resident(&db, "Eli Brooks", "403", "C").await?;
        create_test_resident(&db, "Fay Dunn", "101", "D").await?;
        deactivate_resident(&db, &Actor::System, dana.id).await?;

        let all = search_residents(&db, &ResidentFilter::default()).await?;
        let names: Vec<_> = all.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Dana Park", "Eli Brooks", "Fay Dunn"]);

        let active_in_c = search_residents(
            &db,
            &ResidentFilter {
                active: Some(true),
                building: Some("C".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(active_in_c.len(), 1);
        assert_eq!(active_in_c[0].display_name, "Eli Brooks");

        let by_name = search_residents(
            &db,
            &ResidentFilter {
                name_contains: Some("dunn".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].unit, "101");

        let by_floor = search_residents(
            &db,
            &ResidentFilter {
                floor: Some("4".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(by_floor.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_unit() -> Result<()> {
        let db = setup_test_db().await?;
        let dana = create_test_resident(&db, "Dana Park", "402", "C").await?;

        let found = find_by_unit(&db, "402", Some("C")).await?.unwrap();
        assert_eq!(found.id, dana.id);
        assert!(find_by_unit(&db, "402", Some("D")).await?.is_none());
        assert!(find_by_unit(&db, "402", None).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_import_residents_skips_existing_units() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_resident(&db, "Dana Park", "402", "C").await?;

        let rows = vec![
            new_test_resident("Dana Again", "402", "C"),
            new_test_resident("Gil Ortiz", "501", "C"),
            new_test_resident("Hana Ito", "502", "C"),
        ];
        let summary = import_residents(&db, &Actor::System, rows).await?;
        assert_eq!(
            summary,
            ImportSummary {
                inserted: 2,
                skipped: 1
            }
        );

        let dana = find_by_unit(&db, "402", Some("C")).await?.unwrap();
        assert_eq!(dana.display_name, "Dana Park");

        let imports = crate::entities::AuditEntry::find()
            .filter(crate::entities::audit_entry::Column::Action.eq("bulk_import"))
            .all(&db)
            .await?;
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].entity_type, EntityKind::Import);
        assert_eq!(
            imports[0].metadata,
            Some(json!({ "inserted": 2, "skipped": 1 }))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_import_residents_validates_before_writing() -> Result<()> {
        let db = setup_test_db().await?;

        let rows = vec![
            new_test_resident("Gil Ortiz", "501", "C"),
            new_test_resident("", "502", "C"),
        ];
        let result = import_residents(&db, &Actor::System, rows).await;
        assert!(matches!(result, Err(Error::InvalidInput { message: _ })));
        assert!(search_residents(&db, &ResidentFilter::default()).await?.is_empty());

        Ok(())
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("Dana"), "Dana");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_resident(&db, "Dana Park", "402", "C").await?;
        create_test_resident(&db, "50% Share", "403", "C").await?;
        create_test_resident(&db, "Eli_Brooks", "404", "C").await?;

        let search = |fragment: &str| ResidentFilter {
            name_contains: Some(fragment.to_string()),
            ..Default::default()
        };

        let percent = search_residents(&db, &search("%")).await?;
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].display_name, "50% Share");

        let underscore = search_residents(&db, &search("_")).await?;
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].display_name, "Eli_Brooks");

        assert!(search_residents(&db, &search("D_na")).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_unit_without_building_is_a_single_key() -> Result<()> {
        let db = setup_test_db().await?;
        let lobby = NewResident {
            display_name: "Gate House".to_string(),
            unit: "G1".to_string(),
            building: None,
            ..Default::default()
        };

        assert_eq!(insert_if_absent(&db, lobby.clone()).await?, 1);
        assert_eq!(insert_if_absent(&db, lobby.clone()).await?, 0);
        assert_eq!(
            insert_if_absent(
                &db,
                NewResident {
                    building: Some("  ".to_string()),
                    ..lobby
                }
            )
            .await?,
            0
        );

        let found = find_by_unit(&db, "G1", None).await?.unwrap();
        assert_eq!(found.building, "");
        assert_eq!(Resident::find().all(&db).await?.len(), 1);

        let duplicate = create_resident(
            &db,
            &Actor::System,
            NewResident {
                display_name: "Second Gate".to_string(),
                unit: "G1".to_string(),
                building: None,
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(duplicate, Err(Error::Database(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_unit_and_building_are_trimmed() -> Result<()> {
        let db = setup_test_db().await?;
        let padded = create_test_resident(&db, "Dana Park", " 402 ", " C ").await?;
        assert_eq!(padded.unit, "402");
        assert_eq!(padded.building, "C");

        let found = find_by_unit(&db, "402", Some("C")).await?.unwrap();
        assert_eq!(found.id, padded.id);
        assert_eq!(
            find_by_unit(&db, " 402", Some("C ")).await?.map(|r| r.id),
            Some(padded.id)
        );

        assert_eq!(
            insert_if_absent(&db, new_test_resident("Dana Again", "402", "C")).await?,
            0
        );

        let in_c = search_residents(
            &db,
            &ResidentFilter {
                unit: Some(" 402 ".to_string()),
                building: Some(" C".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(in_c.len(), 1);

        Ok(())
    }
}
