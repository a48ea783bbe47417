//! Conflict-resolution policies for inserts that may meet an existing row.
//!
//! Every insert on a re-runnable path names its policy explicitly instead of relying
//! on storage-engine defaults. Metadata the seed owns (role descriptions, account
//! details) is overwritten; relationship rows, sample data and the migration ledger
//! keep whatever is already there.

use sea_orm::sea_query::{IntoIden, OnConflict};

/// What an insert does when its conflict key already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertPolicy {
    /// Overwrite the listed columns with the incoming values (last writer wins)
    Overwrite,
    /// Leave the existing row untouched (first writer wins)
    Ignore,
}

/// Roles: description follows the latest seed
pub const ROLE_POLICY: UpsertPolicy = UpsertPolicy::Overwrite;
/// Users: name, hash and active flag follow the latest seed
pub const USER_POLICY: UpsertPolicy = UpsertPolicy::Overwrite;
/// User-role pairs: existence is all that matters
pub const USER_ROLE_POLICY: UpsertPolicy = UpsertPolicy::Ignore;
/// Residents: seeded and imported rows never clobber application edits
pub const RESIDENT_POLICY: UpsertPolicy = UpsertPolicy::Ignore;
/// Migration ledger: the first applied timestamp is kept
pub const MIGRATION_POLICY: UpsertPolicy = UpsertPolicy::Ignore;

impl UpsertPolicy {
    /// Builds the `ON CONFLICT` clause for this policy.
    ///
    /// `keys` is the conflict target and must match a unique index. `updates` is only
    /// used by [`UpsertPolicy::Overwrite`]; an empty list degrades to `DO NOTHING`.
    pub fn on_conflict<C, K, U>(self, keys: K, updates: U) -> OnConflict
    where
        C: IntoIden,
        K: IntoIterator<Item = C>,
        U: IntoIterator<Item = C>,
    {
        let mut on_conflict = OnConflict::columns(keys);
        let updates: Vec<C> = updates.into_iter().collect();
        match self {
            Self::Overwrite if !updates.is_empty() => on_conflict.update_columns(updates),
            Self::Overwrite | Self::Ignore => on_conflict.do_nothing(),
        };
        on_conflict
    }
}
