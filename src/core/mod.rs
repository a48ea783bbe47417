//! Core business logic - storage operations for the ledger, identities, residents
//! and the audit log, plus the seed loader and provisioning runner built on them.

/// Append-only audit log
pub mod audit;
/// Roles, users and role assignments
pub mod identity;
/// Schema version ledger
pub mod migration;
/// Per-table conflict policies
pub mod policy;
/// Single-transaction provisioning run
pub mod provision;
/// Resident directory operations
pub mod resident;
/// Seed loader
pub mod seed;
