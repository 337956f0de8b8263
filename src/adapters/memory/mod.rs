//! In-memory adapters for tests and non-durable deployments.

mod profile_store;

pub use profile_store::InMemoryProfileStore;
