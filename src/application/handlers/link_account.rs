//! LinkAccountHandler - links a GitHub account to a profile.

use std::sync::Arc;

use crate::application::handlers::LinkOutcome;
use crate::domain::foundation::{DomainError, GithubHandle, UserId};
use crate::ports::ProfileStore;

/// Command to link a GitHub account.
#[derive(Debug, Clone)]
pub struct LinkAccountCommand {
    pub user_id: UserId,
    /// Raw username as typed by the user; may be empty.
    pub username: String,
}

/// Handler for account linking.
///
/// Overwrites any previous link; the handle's existence is not verified.
/// Linking awards no experience.
pub struct LinkAccountHandler {
    store: Arc<dyn ProfileStore>,
}

impl LinkAccountHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: LinkAccountCommand) -> Result<LinkOutcome, DomainError> {
        let Ok(handle) = GithubHandle::new(cmd.username.trim()) else {
            return Ok(LinkOutcome::rejected("Please provide your GitHub username."));
        };

        self.store.set_linked_account(&cmd.user_id, &handle).await?;

        Ok(LinkOutcome::accepted(format!(
            "GitHub account {} linked successfully!",
            handle
        )))
    }
}
