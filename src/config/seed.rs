//! Seed data configuration loaded from `seed.toml`.
//!
//! The seed set describes the baseline roles, demo accounts and sample residents a
//! fresh deployment starts with. A deployment may ship its own `seed.toml`; when the
//! file does not exist the built-in demo set from [`SeedConfig::default`] is used.
//!
//! The demo credentials are a documented contract, not production secrets: the
//! stored hashes are PBKDF2-SHA256 PHC strings of the passwords `admin123` and
//! `viewer123`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Schema version label recorded by the initial provisioning run
pub const INITIAL_MIGRATION_VERSION: &str = "20240101_000001_initial";

/// Role with full access to residents, users and the audit log
pub const ADMIN_ROLE: &str = "admin";

/// Role with read-only access to the resident directory
pub const VIEWER_ROLE: &str = "viewer";

const ADMIN_PASSWORD_HASH: &str = "$pbkdf2-sha256$i=600000,l=32$cmVzZGlyLWFkbWluLXNhbHQ$foFEIaRhA+8NopJuBx7JepmMzZ4fVnCfA4cGKcVBQ/8";
const VIEWER_PASSWORD_HASH: &str = "$pbkdf2-sha256$i=600000,l=32$cmVzZGlyLXZpZXdlci1zYWx0$mwyodoknQohPXdwv6vpaf7aE+ffG5qsM7BCbth4fQjo";

/// Configuration structure representing the entire seed.toml file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// Version label recorded in the migration ledger once seeding succeeds
    #[serde(default = "default_migration_version")]
    pub migration_version: String,
    /// Roles to ensure
    #[serde(default)]
    pub roles: Vec<RoleSeed>,
    /// Accounts to ensure, each with the roles it should hold
    #[serde(default)]
    pub users: Vec<UserSeed>,
    /// Sample residents inserted once per natural key
    #[serde(default)]
    pub residents: Vec<ResidentSeed>,
}

/// A role to ensure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleSeed {
    /// Unique role name
    pub name: String,
    /// Description written on every run
    pub description: String,
}

/// An account to ensure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSeed {
    /// Sign-in email, the identity key
    pub email: String,
    /// Display name
    pub name: String,
    /// PHC-format password hash
    pub password_hash: String,
    /// Whether the account may sign in
    #[serde(default = "default_active")]
    pub active: bool,
    /// Names of the roles to assign
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A sample resident row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResidentSeed {
    /// Name shown in the directory
    pub display_name: String,
    /// Unit identifier
    pub unit: String,
    /// Building; part of the natural key together with `unit`
    pub building: Option<String>,
    /// Floor label
    pub floor: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

fn default_migration_version() -> String {
    INITIAL_MIGRATION_VERSION.to_string()
}

const fn default_active() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            migration_version: default_migration_version(),
            roles: vec![
                RoleSeed {
                    name: ADMIN_ROLE.to_string(),
                    description: "Full access to residents, users and audit history".to_string(),
                },
                RoleSeed {
                    name: VIEWER_ROLE.to_string(),
                    description: "Read-only access to the resident directory".to_string(),
                },
            ],
            users: vec![
                UserSeed {
                    email: "admin@example.com".to_string(),
                    name: "Administrator".to_string(),
                    password_hash: ADMIN_PASSWORD_HASH.to_string(),
                    active: true,
                    roles: vec![ADMIN_ROLE.to_string()],
                },
                UserSeed {
                    email: "viewer@example.com".to_string(),
                    name: "Viewer".to_string(),
                    password_hash: VIEWER_PASSWORD_HASH.to_string(),
                    active: true,
                    roles: vec![VIEWER_ROLE.to_string()],
                },
            ],
            residents: vec![
                ResidentSeed {
                    display_name: "Alice Johnson".to_string(),
                    unit: "101".to_string(),
                    building: Some("A".to_string()),
                    floor: Some("1".to_string()),
                    phone: Some("555-0101".to_string()),
                    email: Some("alice.johnson@example.com".to_string()),
                    notes: None,
                },
                ResidentSeed {
                    display_name: "Bob Smith".to_string(),
                    unit: "204".to_string(),
                    building: Some("A".to_string()),
                    floor: Some("2".to_string()),
                    phone: Some("555-0204".to_string()),
                    email: None,
                    notes: Some("Prefers contact by phone".to_string()),
                },
                ResidentSeed {
                    display_name: "Carol Martinez".to_string(),
                    unit: "310".to_string(),
                    building: Some("B".to_string()),
                    floor: Some("3".to_string()),
                    phone: None,
                    email: Some("carol.martinez@example.com".to_string()),
                    notes: None,
                },
            ],
        }
    }
}

/// Loads the seed set from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    debug!("Loading seed configuration from {}", path_ref.display());
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the seed set at `path`, or the built-in demo set when no file exists there.
/// A file that exists but does not parse is still an error.
pub fn load_seed_config_or_default<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        load_seed_config(path_ref)
    } else {
        info!(
            "No seed file at {}, using built-in demo seed set",
            path_ref.display()
        );
        Ok(SeedConfig::default())
    }
}

/// Loads the seed set named by `SEED_CONFIG` (default `./seed.toml`), falling back to
/// the built-in demo set when that file does not exist.
pub fn load_default_seed_config() -> Result<SeedConfig> {
    let path = std::env::var("SEED_CONFIG").unwrap_or_else(|_| "seed.toml".to_string());
    load_seed_config_or_default(path)
}
