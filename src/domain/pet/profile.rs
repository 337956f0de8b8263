//! Pet profile aggregate.
//!
//! One profile per user, created lazily on first access. All mutation goes
//! through the `ProfileStore` port; this type is a read model plus the
//! construction invariants.
//!
//! # Invariants
//!
//! - `level >= 1` and monotonically non-decreasing
//! - `experience >= 0` and monotonically non-decreasing
//! - at most one journal entry per calendar date
//! - at most one commit count per calendar date (cumulative total, not a delta)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GithubHandle, MissionDate, UserId};

/// Durable per-user game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetProfile {
    /// Stable external identity; primary key.
    user_id: UserId,

    /// Current pet level, starts at 1.
    level: u32,

    /// Cumulative experience points.
    experience: i64,

    /// Date of the last credited login mission.
    last_login: Option<MissionDate>,

    /// Linked GitHub account, if any.
    linked_github: Option<GithubHandle>,

    /// Accepted puzzle submissions.
    puzzles_solved: i64,

    /// Journal text by date.
    journal_entries: BTreeMap<MissionDate, String>,

    /// Cumulative observed commit totals by date.
    commit_counts: BTreeMap<MissionDate, i64>,
}

impl PetProfile {
    /// Creates a fresh profile with defaults (level 1, no experience).
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            level: 1,
            experience: 0,
            last_login: None,
            linked_github: None,
            puzzles_solved: 0,
            journal_entries: BTreeMap::new(),
            commit_counts: BTreeMap::new(),
        }
    }

    /// Reconstitute a profile from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        user_id: UserId,
        level: u32,
        experience: i64,
        last_login: Option<MissionDate>,
        linked_github: Option<GithubHandle>,
        puzzles_solved: i64,
        journal_entries: BTreeMap<MissionDate, String>,
        commit_counts: BTreeMap<MissionDate, i64>,
    ) -> Self {
        Self {
            user_id,
            level,
            experience,
            last_login,
            linked_github,
            puzzles_solved,
            journal_entries,
            commit_counts,
        }
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the cumulative experience.
    pub fn experience(&self) -> i64 {
        self.experience
    }

    /// Returns the last credited login date.
    pub fn last_login(&self) -> Option<MissionDate> {
        self.last_login
    }

    /// Returns the linked GitHub handle.
    pub fn linked_github(&self) -> Option<&GithubHandle> {
        self.linked_github.as_ref()
    }

    /// Returns the accepted puzzle count.
    pub fn puzzles_solved(&self) -> i64 {
        self.puzzles_solved
    }

    /// Returns the journal entries keyed by date.
    pub fn journal_entries(&self) -> &BTreeMap<MissionDate, String> {
        &self.journal_entries
    }

    /// Returns the cumulative commit totals keyed by date.
    pub fn commit_counts(&self) -> &BTreeMap<MissionDate, i64> {
        &self.commit_counts
    }

    /// True if a journal entry exists for the given date.
    pub fn has_journal_entry(&self, date: MissionDate) -> bool {
        self.journal_entries.contains_key(&date)
    }

    /// Last recorded cumulative commit total for the given date, 0 if none.
    pub fn commit_count_on(&self, date: MissionDate) -> i64 {
        self.commit_counts.get(&date).copied().unwrap_or(0)
    }

    /// True if the login mission was already credited on the given date.
    pub fn logged_in_on(&self, date: MissionDate) -> bool {
        self.last_login == Some(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn new_profile_has_defaults() {
        let profile = PetProfile::new(test_user());
        assert_eq!(profile.level(), 1);
        assert_eq!(profile.experience(), 0);
        assert_eq!(profile.last_login(), None);
        assert!(profile.linked_github().is_none());
        assert_eq!(profile.puzzles_solved(), 0);
        assert!(profile.journal_entries().is_empty());
        assert!(profile.commit_counts().is_empty());
    }

    #[test]
    fn commit_count_defaults_to_zero_for_unseen_date() {
        let profile = PetProfile::new(test_user());
        let date = MissionDate::from_ymd(2025, 6, 1).unwrap();
        assert_eq!(profile.commit_count_on(date), 0);
    }

    #[test]
    fn logged_in_on_compares_dates() {
        let date = MissionDate::from_ymd(2025, 6, 1).unwrap();
        let profile = PetProfile::reconstitute(
            test_user(),
            1,
            0,
            Some(date),
            None,
            0,
            BTreeMap::new(),
            BTreeMap::new(),
        );
        assert!(profile.logged_in_on(date));
        assert!(!profile.logged_in_on(date.next_day()));
    }
}
