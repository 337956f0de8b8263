//! JournalMissionHandler - credits the daily journal mission.

use std::sync::Arc;

use crate::application::experience::ExperienceEngine;
use crate::application::handlers::MissionOutcome;
use crate::domain::foundation::{DomainError, MissionDate, UserId};
use crate::domain::pet::rewards::JOURNAL_XP;
use crate::ports::ProfileStore;

/// Command to submit a journal entry.
#[derive(Debug, Clone)]
pub struct JournalMissionCommand {
    pub user_id: UserId,
    pub date: MissionDate,
    /// Free-form journal text; only a non-empty check applies.
    pub text: String,
}

/// Handler for the daily journal mission.
///
/// Idempotency key: one entry per calendar day. The handler pre-checks the
/// profile and the store enforces the same gate at write time, so the
/// mission stays correct even if calls arrive out of order.
pub struct JournalMissionHandler {
    store: Arc<dyn ProfileStore>,
    engine: ExperienceEngine,
}

impl JournalMissionHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        let engine = ExperienceEngine::new(store.clone());
        Self { store, engine }
    }

    pub async fn handle(&self, cmd: JournalMissionCommand) -> Result<MissionOutcome, DomainError> {
        if cmd.text.trim().is_empty() {
            return Ok(MissionOutcome::rejected("Please include your journal entry."));
        }

        let profile = self.store.get_or_create(&cmd.user_id).await?;
        if profile.has_journal_entry(cmd.date) {
            return Ok(MissionOutcome::rejected(
                "You've already submitted a journal today!",
            ));
        }

        let inserted = self
            .store
            .add_journal_entry(&cmd.user_id, cmd.date, &cmd.text)
            .await?;
        if !inserted {
            return Ok(MissionOutcome::rejected(
                "You've already submitted a journal today!",
            ));
        }

        let award = self.engine.award(&cmd.user_id, JOURNAL_XP).await?;
        Ok(MissionOutcome::accepted(
            format!("Journal entry recorded! +{} XP.", JOURNAL_XP),
            award.leveled_up,
        ))
    }
}
