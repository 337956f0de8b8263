//! LoginMissionHandler - credits the daily login mission.

use std::sync::Arc;

use crate::application::experience::ExperienceEngine;
use crate::application::handlers::MissionOutcome;
use crate::domain::foundation::{DomainError, MissionDate, UserId};
use crate::domain::pet::rewards::LOGIN_XP;
use crate::ports::ProfileStore;

/// Command to credit a daily login.
#[derive(Debug, Clone)]
pub struct LoginMissionCommand {
    pub user_id: UserId,
    /// Calendar date of the attempt; callers pass `MissionDate::today()`.
    pub date: MissionDate,
}

/// Handler for the daily login mission.
///
/// Idempotency key: one credit per calendar day, gated on `last_login`.
pub struct LoginMissionHandler {
    store: Arc<dyn ProfileStore>,
    engine: ExperienceEngine,
}

impl LoginMissionHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        let engine = ExperienceEngine::new(store.clone());
        Self { store, engine }
    }

    pub async fn handle(&self, cmd: LoginMissionCommand) -> Result<MissionOutcome, DomainError> {
        let profile = self.store.get_or_create(&cmd.user_id).await?;

        if profile.logged_in_on(cmd.date) {
            return Ok(MissionOutcome::rejected("You've already logged in today!"));
        }

        self.store.record_login(&cmd.user_id, cmd.date).await?;
        let award = self.engine.award(&cmd.user_id, LOGIN_XP).await?;

        Ok(MissionOutcome::accepted(
            format!("Daily login successful! +{} XP.", LOGIN_XP),
            award.leveled_up,
        ))
    }
}
