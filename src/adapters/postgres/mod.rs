//! PostgreSQL adapters - Database implementations for repository ports.

mod profile_store;

pub use profile_store::PostgresProfileStore;
