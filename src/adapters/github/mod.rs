//! GitHub adapters.

mod commit_source;

pub use commit_source::{GithubCommitSource, GithubSourceConfig};
