//! CommitActivitySource port - external commit-count lookup.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GithubHandle, MissionDate};

/// Port for the external collaborator that reports how many commits a
/// handle authored on a given date.
///
/// The returned value is the *cumulative observed total for that date*,
/// not an increment; the commit-sync handler derives the delta itself.
/// Pagination and rate-limit handling belong to the implementation, not
/// to callers.
#[async_trait]
pub trait CommitActivitySource: Send + Sync {
    /// Cumulative commit count for the handle on the date.
    ///
    /// # Errors
    ///
    /// - `ExternalServiceError` on network, auth, or unknown-handle failures
    async fn commits_on(
        &self,
        handle: &GithubHandle,
        date: MissionDate,
    ) -> Result<i64, DomainError>;
}
