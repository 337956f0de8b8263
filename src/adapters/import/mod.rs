//! Legacy data import adapters.

mod flat_file;

pub use flat_file::{FlatFileImporter, ImportSummary};
