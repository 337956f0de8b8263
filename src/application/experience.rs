//! Experience engine - applies XP awards and evaluates level-up.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::pet::requirement;
use crate::ports::ProfileStore;

/// Result of an experience award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceAward {
    /// Experience total after the award.
    pub new_total: i64,

    /// Whether the award triggered a level-up.
    pub leveled_up: bool,

    /// Level after the award.
    pub level: u32,
}

/// Applies experience deltas and evaluates the level curve.
///
/// A single award advances the level by at most one, even when the new
/// total crosses several thresholds; the surplus carries over and later
/// missions advance it further on their own triggers.
pub struct ExperienceEngine {
    store: Arc<dyn ProfileStore>,
}

impl ExperienceEngine {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Adds `amount` experience and checks for a level-up.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    /// - `InvalidInput` if the stored level is somehow below 1
    pub async fn award(&self, user_id: &UserId, amount: u32) -> Result<ExperienceAward, DomainError> {
        let new_total = self.store.add_experience(user_id, amount).await?;
        let (level, experience) = self.store.experience_state(user_id).await?;

        let threshold = requirement(level)?;
        if experience >= threshold {
            if let Some(new_level) = self.store.try_advance_level(user_id, threshold).await? {
                return Ok(ExperienceAward {
                    new_total,
                    leveled_up: true,
                    level: new_level,
                });
            }
        }

        Ok(ExperienceAward {
            new_total,
            leveled_up: false,
            level,
        })
    }
}
