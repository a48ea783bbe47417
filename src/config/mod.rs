/// Database connection and schema definition
pub mod database;

/// Seed data loading from seed.toml
pub mod seed;
