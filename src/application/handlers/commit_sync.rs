//! CommitSyncHandler - awards experience for newly observed commits.

use std::sync::Arc;

use crate::application::experience::ExperienceEngine;
use crate::application::handlers::MissionOutcome;
use crate::domain::foundation::{DomainError, ErrorCode, MissionDate, UserId};
use crate::domain::pet::rewards::COMMIT_XP;
use crate::ports::{CommitActivitySource, ProfileStore};

/// Longest diagnostic fragment surfaced to the user on a lookup failure.
const MAX_DIAGNOSTIC_LEN: usize = 120;

/// Command to sync today's commit activity for a user.
#[derive(Debug, Clone)]
pub struct CommitSyncCommand {
    pub user_id: UserId,
    pub date: MissionDate,
}

/// Handler for the commit-sync mission.
///
/// The external source reports the *cumulative* total for the date; the
/// handler derives the delta against the last recorded total, so re-running
/// with an unchanged total is a no-op. A failed lookup is reported as a
/// rejection for that one command, never as a crash, and there is no retry.
pub struct CommitSyncHandler {
    store: Arc<dyn ProfileStore>,
    source: Arc<dyn CommitActivitySource>,
    engine: ExperienceEngine,
}

impl CommitSyncHandler {
    pub fn new(store: Arc<dyn ProfileStore>, source: Arc<dyn CommitActivitySource>) -> Self {
        let engine = ExperienceEngine::new(store.clone());
        Self { store, source, engine }
    }

    pub async fn handle(&self, cmd: CommitSyncCommand) -> Result<MissionOutcome, DomainError> {
        let profile = self.store.get_or_create(&cmd.user_id).await?;

        let Some(handle) = profile.linked_github().cloned() else {
            return Ok(MissionOutcome::rejected(
                "You need to link your GitHub account first with `/link_github username`",
            ));
        };

        let total = match self.source.commits_on(&handle, cmd.date).await {
            Ok(total) => total,
            Err(err) if err.code == ErrorCode::ExternalServiceError => {
                tracing::warn!(user_id = %cmd.user_id, handle = %handle, error = %err, "Commit lookup failed");
                return Ok(MissionOutcome::rejected(format!(
                    "Error fetching GitHub data: {}",
                    truncate(&err.message, MAX_DIAGNOSTIC_LEN)
                )));
            }
            Err(err) => return Err(err),
        };

        let previous = profile.commit_count_on(cmd.date);
        let delta = (total - previous).max(0);

        if delta == 0 {
            return Ok(MissionOutcome::rejected(
                "No new commits found since last check.",
            ));
        }

        self.store
            .record_commit_count(&cmd.user_id, cmd.date, total)
            .await?;

        let xp = u32::try_from(delta)
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "Commit delta out of range"))?
            * COMMIT_XP;
        let award = self.engine.award(&cmd.user_id, xp).await?;

        Ok(MissionOutcome::accepted(
            format!("Found {} new commits! +{} XP.", delta, xp),
            award.leveled_up,
        ))
    }
}

fn truncate(text: &str, max_len: usize) -> &str {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileStore;
    use crate::domain::foundation::GithubHandle;
    use async_trait::async_trait;

    struct FixedCommitSource {
        result: Result<i64, DomainError>,
    }

    impl FixedCommitSource {
        fn reporting(total: i64) -> Self {
            Self { result: Ok(total) }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(DomainError::new(ErrorCode::ExternalServiceError, message)),
            }
        }
    }

    #[async_trait]
    impl CommitActivitySource for FixedCommitSource {
        async fn commits_on(
            &self,
            _handle: &GithubHandle,
            _date: MissionDate,
        ) -> Result<i64, DomainError> {
            self.result.clone()
        }
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn date() -> MissionDate {
        MissionDate::from_ymd(2025, 6, 1).unwrap()
    }

    fn cmd() -> CommitSyncCommand {
        CommitSyncCommand { user_id: user(), date: date() }
    }

    async fn linked_store() -> Arc<InMemoryProfileStore> {
        let store = Arc::new(InMemoryProfileStore::new());
        store
            .set_linked_account(&user(), &GithubHandle::new("octocat").unwrap())
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn rejects_when_no_account_is_linked() {
        let store = Arc::new(InMemoryProfileStore::new());
        let handler = CommitSyncHandler::new(store, Arc::new(FixedCommitSource::reporting(5)));

        let outcome = handler.handle(cmd()).await.unwrap();

        assert!(!outcome.accepted);
        assert!(outcome.message.contains("/link_github"));
    }

    #[tokio::test]
    async fn unchanged_total_is_a_no_op() {
        let store = linked_store().await;
        store.record_commit_count(&user(), date(), 5).await.unwrap();
        let handler = CommitSyncHandler::new(store.clone(), Arc::new(FixedCommitSource::reporting(5)));

        let outcome = handler.handle(cmd()).await.unwrap();

        assert!(!outcome.accepted);
        let (_, experience) = store.experience_state(&user()).await.unwrap();
        assert_eq!(experience, 0);
    }

    #[tokio::test]
    async fn new_commits_award_delta_times_three() {
        let store = linked_store().await;
        store.record_commit_count(&user(), date(), 5).await.unwrap();
        let handler = CommitSyncHandler::new(store.clone(), Arc::new(FixedCommitSource::reporting(8)));

        let outcome = handler.handle(cmd()).await.unwrap();

        assert!(outcome.accepted);
        assert!(outcome.message.contains("3 new commits"));
        assert!(outcome.message.contains("+9 XP"));

        let profile = store.get_or_create(&user()).await.unwrap();
        assert_eq!(profile.commit_count_on(date()), 8);
        assert_eq!(profile.experience(), 9);
    }

    #[tokio::test]
    async fn rerunning_with_same_total_after_award_is_a_no_op() {
        let store = linked_store().await;
        let handler = CommitSyncHandler::new(store.clone(), Arc::new(FixedCommitSource::reporting(8)));

        let first = handler.handle(cmd()).await.unwrap();
        assert!(first.accepted);

        let second = handler.handle(cmd()).await.unwrap();
        assert!(!second.accepted);

        let (_, experience) = store.experience_state(&user()).await.unwrap();
        assert_eq!(experience, 24);
    }

    #[tokio::test]
    async fn observed_total_below_recorded_awards_nothing() {
        let store = linked_store().await;
        store.record_commit_count(&user(), date(), 10).await.unwrap();
        let handler = CommitSyncHandler::new(store.clone(), Arc::new(FixedCommitSource::reporting(4)));

        let outcome = handler.handle(cmd()).await.unwrap();

        assert!(!outcome.accepted);
        // The recorded total is left alone on a no-op.
        let profile = store.get_or_create(&user()).await.unwrap();
        assert_eq!(profile.commit_count_on(date()), 10);
    }

    #[tokio::test]
    async fn lookup_failure_becomes_a_rejection_with_truncated_diagnostic() {
        let store = linked_store().await;
        let long_error = "x".repeat(500);
        let handler =
            CommitSyncHandler::new(store.clone(), Arc::new(FixedCommitSource::failing(&long_error)));

        let outcome = handler.handle(cmd()).await.unwrap();

        assert!(!outcome.accepted);
        assert!(outcome.message.starts_with("Error fetching GitHub data: "));
        assert!(outcome.message.len() < 200);

        let (_, experience) = store.experience_state(&user()).await.unwrap();
        assert_eq!(experience, 0);
    }
}
