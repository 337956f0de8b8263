//! ProfileStore port - sole owner of durable per-user game state.
//!
//! All reads and writes are atomic at single-profile granularity; no
//! cross-profile transactions exist. Mission handlers never mutate profile
//! fields directly, which is what keeps atomicity reasoning tractable.
//!
//! # Auto-vivification
//!
//! Every operation on an unknown `user_id` behaves as if
//! `get_or_create` ran first: the profile comes into existence with
//! defaults (level 1, experience 0) rather than the operation erroring.
//!
//! # Conflict policies
//!
//! Journal entries and commit counts are both keyed by (user, date) but
//! deliberately differ on conflict: a duplicate journal date is rejected
//! (one-shot daily entry), a duplicate commit date is overwritten
//! (running cumulative counter).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GithubHandle, MissionDate, UserId};
use crate::domain::pet::PetProfile;

/// Snapshot of a legacy flat-file profile, used by the one-time importer.
///
/// Date-keyed sub-records (journal entries, commit counts) are imported
/// through the regular store operations, not through this record.
#[derive(Debug, Clone)]
pub struct ProfileImportRecord {
    pub user_id: UserId,
    pub level: u32,
    pub experience: i64,
    pub last_login: Option<MissionDate>,
    pub linked_github: Option<GithubHandle>,
    pub puzzles_solved: i64,
}

/// Repository port for pet profile persistence.
///
/// Implementations must serialize concurrent writers to the same
/// `user_id`, either through per-row atomic statements or a global
/// write lock.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the existing profile or creates one with defaults.
    ///
    /// Safe to call repeatedly; has no side effects beyond first creation.
    async fn get_or_create(&self, user_id: &UserId) -> Result<PetProfile, DomainError>;

    /// Returns the current (level, experience) pair without loading the
    /// date-keyed maps.
    async fn experience_state(&self, user_id: &UserId) -> Result<(u32, i64), DomainError>;

    /// Sets the last credited login date.
    async fn record_login(&self, user_id: &UserId, date: MissionDate) -> Result<(), DomainError>;

    /// Inserts a journal entry for the date.
    ///
    /// Returns `false` and makes no change if an entry already exists for
    /// that date. The store enforces this even when callers pre-check.
    async fn add_journal_entry(
        &self,
        user_id: &UserId,
        date: MissionDate,
        text: &str,
    ) -> Result<bool, DomainError>;

    /// Overwrites the linked GitHub handle. No existence validation.
    async fn set_linked_account(
        &self,
        user_id: &UserId,
        handle: &GithubHandle,
    ) -> Result<(), DomainError>;

    /// Upserts the cumulative commit total for the date. NOT additive.
    async fn record_commit_count(
        &self,
        user_id: &UserId,
        date: MissionDate,
        cumulative_count: i64,
    ) -> Result<(), DomainError>;

    /// Atomically increments the accepted puzzle counter.
    async fn increment_puzzles_solved(&self, user_id: &UserId) -> Result<(), DomainError>;

    /// Atomically adds experience, returning the new total.
    async fn add_experience(&self, user_id: &UserId, amount: u32) -> Result<i64, DomainError>;

    /// Atomically increments the level by one iff current experience meets
    /// the threshold, returning the new level when it fired.
    ///
    /// The conditional update is what serializes the level-up
    /// read-modify-write against concurrent awards to the same user.
    async fn try_advance_level(
        &self,
        user_id: &UserId,
        threshold: i64,
    ) -> Result<Option<u32>, DomainError>;

    /// Idempotent upsert of a whole profile row, keyed on `user_id`.
    ///
    /// Used only by the one-time flat-file importer.
    async fn restore_profile(&self, record: &ProfileImportRecord) -> Result<(), DomainError>;
}
