//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod audit_entry;
pub mod resident;
pub mod role;
pub mod schema_migration;
pub mod user;
pub mod user_role;

// Re-export specific types to avoid conflicts
pub use audit_entry::{
    Column as AuditEntryColumn, Entity as AuditEntry, EntityKind, Model as AuditEntryModel,
};
pub use resident::{Column as ResidentColumn, Entity as Resident, Model as ResidentModel};
pub use role::{Column as RoleColumn, Entity as Role, Model as RoleModel};
pub use schema_migration::{
    Column as SchemaMigrationColumn, Entity as SchemaMigration, Model as SchemaMigrationModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use user_role::{Column as UserRoleColumn, Entity as UserRole, Model as UserRoleModel};
