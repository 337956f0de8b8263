//! PuzzleMissionHandler - credits puzzle submissions.

use std::sync::Arc;

use crate::application::experience::ExperienceEngine;
use crate::application::handlers::MissionOutcome;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::pet::rewards::PUZZLE_XP;
use crate::ports::ProfileStore;

/// Command to submit a puzzle solution.
#[derive(Debug, Clone)]
pub struct PuzzleMissionCommand {
    pub user_id: UserId,
    /// Submitted solution text. Content is not verified; any non-empty
    /// submission counts.
    pub solution: String,
}

/// Handler for puzzle submissions.
///
/// No idempotency key: every accepted call increments the counter and
/// awards experience. Solution verification is deliberately absent.
pub struct PuzzleMissionHandler {
    store: Arc<dyn ProfileStore>,
    engine: ExperienceEngine,
}

impl PuzzleMissionHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        let engine = ExperienceEngine::new(store.clone());
        Self { store, engine }
    }

    pub async fn handle(&self, cmd: PuzzleMissionCommand) -> Result<MissionOutcome, DomainError> {
        if cmd.solution.trim().is_empty() {
            return Ok(MissionOutcome::rejected("Please include your solution."));
        }

        self.store.increment_puzzles_solved(&cmd.user_id).await?;
        let award = self.engine.award(&cmd.user_id, PUZZLE_XP).await?;

        Ok(MissionOutcome::accepted(
            format!("Puzzle solution submitted! +{} XP.", PUZZLE_XP),
            award.leveled_up,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileStore;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn handler() -> (Arc<InMemoryProfileStore>, PuzzleMissionHandler) {
        let store = Arc::new(InMemoryProfileStore::new());
        let handler = PuzzleMissionHandler::new(store.clone());
        (store, handler)
    }

    fn cmd(solution: &str) -> PuzzleMissionCommand {
        PuzzleMissionCommand {
            user_id: user(),
            solution: solution.to_string(),
        }
    }

    #[tokio::test]
    async fn accepted_submission_counts_and_awards() {
        let (store, handler) = handler();

        let outcome = handler.handle(cmd("42")).await.unwrap();

        assert!(outcome.accepted);
        assert!(outcome.message.contains("+2 XP"));
        let profile = store.get_or_create(&user()).await.unwrap();
        assert_eq!(profile.puzzles_solved(), 1);
        assert_eq!(profile.experience(), 2);
    }

    #[tokio::test]
    async fn every_submission_counts_regardless_of_content() {
        let (store, handler) = handler();
        handler.handle(cmd("right answer")).await.unwrap();
        handler.handle(cmd("obviously wrong answer")).await.unwrap();
        handler.handle(cmd("right answer")).await.unwrap();

        let profile = store.get_or_create(&user()).await.unwrap();
        assert_eq!(profile.puzzles_solved(), 3);
        assert_eq!(profile.experience(), 6);
    }

    #[tokio::test]
    async fn empty_solution_is_rejected() {
        let (store, handler) = handler();

        let outcome = handler.handle(cmd("")).await.unwrap();

        assert!(!outcome.accepted);
        assert!(store.is_empty());
    }
}
