//! In-memory implementation of the ProfileStore port.
//!
//! Useful for tests, development, and single-process deployments that do
//! not need durability. One `Mutex` guards the whole map, which is the
//! "single global write lock" serialization variant: every read-modify-write
//! on a profile happens under the lock.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GithubHandle, MissionDate, UserId};
use crate::domain::pet::PetProfile;
use crate::ports::{ProfileImportRecord, ProfileStore};

#[derive(Debug, Clone, Default)]
struct ProfileState {
    level: u32,
    experience: i64,
    last_login: Option<MissionDate>,
    linked_github: Option<GithubHandle>,
    puzzles_solved: i64,
    journal_entries: BTreeMap<MissionDate, String>,
    commit_counts: BTreeMap<MissionDate, i64>,
}

impl ProfileState {
    fn new() -> Self {
        Self {
            level: 1,
            ..Self::default()
        }
    }
}

/// In-memory, mutex-guarded profile store.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<HashMap<UserId, ProfileState>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of profiles currently held. Useful for tests.
    pub fn len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    /// True if no profiles exist.
    pub fn is_empty(&self) -> bool {
        self.profiles.lock().unwrap().is_empty()
    }

    fn with_profile<T>(&self, user_id: &UserId, f: impl FnOnce(&mut ProfileState) -> T) -> T {
        let mut profiles = self.profiles.lock().unwrap();
        let state = profiles
            .entry(user_id.clone())
            .or_insert_with(ProfileState::new);
        f(state)
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_or_create(&self, user_id: &UserId) -> Result<PetProfile, DomainError> {
        Ok(self.with_profile(user_id, |state| {
            PetProfile::reconstitute(
                user_id.clone(),
                state.level,
                state.experience,
                state.last_login,
                state.linked_github.clone(),
                state.puzzles_solved,
                state.journal_entries.clone(),
                state.commit_counts.clone(),
            )
        }))
    }

    async fn experience_state(&self, user_id: &UserId) -> Result<(u32, i64), DomainError> {
        Ok(self.with_profile(user_id, |state| (state.level, state.experience)))
    }

    async fn record_login(&self, user_id: &UserId, date: MissionDate) -> Result<(), DomainError> {
        self.with_profile(user_id, |state| state.last_login = Some(date));
        Ok(())
    }

    async fn add_journal_entry(
        &self,
        user_id: &UserId,
        date: MissionDate,
        text: &str,
    ) -> Result<bool, DomainError> {
        Ok(self.with_profile(user_id, |state| {
            if state.journal_entries.contains_key(&date) {
                false
            } else {
                state.journal_entries.insert(date, text.to_string());
                true
            }
        }))
    }

    async fn set_linked_account(
        &self,
        user_id: &UserId,
        handle: &GithubHandle,
    ) -> Result<(), DomainError> {
        self.with_profile(user_id, |state| state.linked_github = Some(handle.clone()));
        Ok(())
    }

    async fn record_commit_count(
        &self,
        user_id: &UserId,
        date: MissionDate,
        cumulative_count: i64,
    ) -> Result<(), DomainError> {
        self.with_profile(user_id, |state| {
            state.commit_counts.insert(date, cumulative_count);
        });
        Ok(())
    }

    async fn increment_puzzles_solved(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.with_profile(user_id, |state| state.puzzles_solved += 1);
        Ok(())
    }

    async fn add_experience(&self, user_id: &UserId, amount: u32) -> Result<i64, DomainError> {
        Ok(self.with_profile(user_id, |state| {
            state.experience += i64::from(amount);
            state.experience
        }))
    }

    async fn try_advance_level(
        &self,
        user_id: &UserId,
        threshold: i64,
    ) -> Result<Option<u32>, DomainError> {
        Ok(self.with_profile(user_id, |state| {
            if state.experience >= threshold {
                state.level += 1;
                Some(state.level)
            } else {
                None
            }
        }))
    }

    async fn restore_profile(&self, record: &ProfileImportRecord) -> Result<(), DomainError> {
        self.with_profile(&record.user_id, |state| {
            state.level = record.level;
            state.experience = record.experience;
            state.last_login = record.last_login;
            state.linked_github = record.linked_github.clone();
            state.puzzles_solved = record.puzzles_solved;
        });
        Ok(())
    }
}
