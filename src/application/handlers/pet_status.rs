//! PetStatusHandler - read-only status query for presentation.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, MissionDate, UserId};
use crate::domain::pet::{pet_art, pet_name, requirement};
use crate::ports::ProfileStore;

/// Query for a user's pet status on a given date.
#[derive(Debug, Clone)]
pub struct PetStatusQuery {
    pub user_id: UserId,
    pub date: MissionDate,
}

/// Everything the presentation layer needs to render a status embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetStatus {
    pub level: u32,
    pub experience: i64,
    /// Cumulative XP needed to clear the current level.
    pub next_requirement: i64,
    /// Progress toward the next level, clamped to 100.
    pub progress_percent: u8,
    pub pet_name: &'static str,
    pub pet_art: &'static str,
    pub login_done: bool,
    pub journal_done: bool,
    /// Cumulative commits recorded for the query date.
    pub commits_today: i64,
    pub puzzles_solved: i64,
}

/// Handler for the pet status query. Awards nothing and mutates nothing
/// beyond lazy profile creation.
pub struct PetStatusHandler {
    store: Arc<dyn ProfileStore>,
}

impl PetStatusHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: PetStatusQuery) -> Result<PetStatus, DomainError> {
        let profile = self.store.get_or_create(&query.user_id).await?;

        let next_requirement = requirement(profile.level())?;
        let percent = (profile.experience() * 100 / next_requirement).clamp(0, 100) as u8;

        Ok(PetStatus {
            level: profile.level(),
            experience: profile.experience(),
            next_requirement,
            progress_percent: percent,
            pet_name: pet_name(profile.level()),
            pet_art: pet_art(profile.level()),
            login_done: profile.logged_in_on(query.date),
            journal_done: profile.has_journal_entry(query.date),
            commits_today: profile.commit_count_on(query.date),
            puzzles_solved: profile.puzzles_solved(),
        })
    }
}
