//! PostgreSQL implementation of the ProfileStore port.
//!
//! Per-user serialization comes from single-statement conditional updates:
//! every read-modify-write the missions need (login-date compare, journal
//! uniqueness, level advance) is expressed as one atomic statement with an
//! `ON CONFLICT` clause or a guarding `WHERE`, so concurrent writers to the
//! same row serialize inside PostgreSQL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, GithubHandle, MissionDate, UserId,
};
use crate::domain::pet::PetProfile;
use crate::ports::{ProfileImportRecord, ProfileStore};

/// PostgreSQL-backed profile store.
#[derive(Clone)]
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    /// Creates a new PostgresProfileStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the default profile row if the user is unknown.
    ///
    /// Every mutating operation calls this first, which is what gives the
    /// store its get-or-create auto-vivification semantics.
    async fn ensure_profile(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO pet_profiles (user_id, level, experience, puzzles_solved)
            VALUES ($1, 1, 0, 0)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to ensure profile: {}", e),
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    async fn get_or_create(&self, user_id: &UserId) -> Result<PetProfile, DomainError> {
        self.ensure_profile(user_id).await?;

        let row = sqlx::query(
            r#"
            SELECT level, experience, last_login, github_handle, puzzles_solved
            FROM pet_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch profile: {}", e),
            )
        })?;

        let journal_rows = sqlx::query(
            "SELECT entry_date, content FROM journal_entries WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch journal entries: {}", e),
            )
        })?;

        let commit_rows = sqlx::query(
            "SELECT activity_date, commit_count FROM commit_activity WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch commit activity: {}", e),
            )
        })?;

        let mut journal_entries = BTreeMap::new();
        for entry in journal_rows {
            let date: NaiveDate = try_get(&entry, "entry_date")?;
            let content: String = try_get(&entry, "content")?;
            journal_entries.insert(MissionDate::from_naive(date), content);
        }

        let mut commit_counts = BTreeMap::new();
        for entry in commit_rows {
            let date: NaiveDate = try_get(&entry, "activity_date")?;
            let count: i64 = try_get(&entry, "commit_count")?;
            commit_counts.insert(MissionDate::from_naive(date), count);
        }

        row_to_profile(user_id.clone(), &row, journal_entries, commit_counts)
    }

    async fn experience_state(&self, user_id: &UserId) -> Result<(u32, i64), DomainError> {
        self.ensure_profile(user_id).await?;

        let row: (i32, i64) =
            sqlx::query_as("SELECT level, experience FROM pet_profiles WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to fetch experience state: {}", e),
                    )
                })?;

        Ok((row.0 as u32, row.1))
    }

    async fn record_login(&self, user_id: &UserId, date: MissionDate) -> Result<(), DomainError> {
        self.ensure_profile(user_id).await?;

        sqlx::query("UPDATE pet_profiles SET last_login = $2 WHERE user_id = $1")
            .bind(user_id.as_str())
            .bind(date.as_naive())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to record login: {}", e),
                )
            })?;

        Ok(())
    }

    async fn add_journal_entry(
        &self,
        user_id: &UserId,
        date: MissionDate,
        text: &str,
    ) -> Result<bool, DomainError> {
        self.ensure_profile(user_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO journal_entries (user_id, entry_date, content)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, entry_date) DO NOTHING
            "#,
        )
        .bind(user_id.as_str())
        .bind(date.as_naive())
        .bind(text)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert journal entry: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_linked_account(
        &self,
        user_id: &UserId,
        handle: &GithubHandle,
    ) -> Result<(), DomainError> {
        self.ensure_profile(user_id).await?;

        sqlx::query("UPDATE pet_profiles SET github_handle = $2 WHERE user_id = $1")
            .bind(user_id.as_str())
            .bind(handle.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to set linked account: {}", e),
                )
            })?;

        Ok(())
    }

    async fn record_commit_count(
        &self,
        user_id: &UserId,
        date: MissionDate,
        cumulative_count: i64,
    ) -> Result<(), DomainError> {
        self.ensure_profile(user_id).await?;

        sqlx::query(
            r#"
            INSERT INTO commit_activity (user_id, activity_date, commit_count)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, activity_date)
            DO UPDATE SET commit_count = EXCLUDED.commit_count
            "#,
        )
        .bind(user_id.as_str())
        .bind(date.as_naive())
        .bind(cumulative_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to record commit count: {}", e),
            )
        })?;

        Ok(())
    }

    async fn increment_puzzles_solved(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.ensure_profile(user_id).await?;

        sqlx::query("UPDATE pet_profiles SET puzzles_solved = puzzles_solved + 1 WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to increment puzzles solved: {}", e),
                )
            })?;

        Ok(())
    }

    async fn add_experience(&self, user_id: &UserId, amount: u32) -> Result<i64, DomainError> {
        self.ensure_profile(user_id).await?;

        let row: (i64,) = sqlx::query_as(
            r#"
            UPDATE pet_profiles
            SET experience = experience + $2
            WHERE user_id = $1
            RETURNING experience
            "#,
        )
        .bind(user_id.as_str())
        .bind(i64::from(amount))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to add experience: {}", e),
            )
        })?;

        Ok(row.0)
    }

    async fn try_advance_level(
        &self,
        user_id: &UserId,
        threshold: i64,
    ) -> Result<Option<u32>, DomainError> {
        self.ensure_profile(user_id).await?;

        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            UPDATE pet_profiles
            SET level = level + 1
            WHERE user_id = $1 AND experience >= $2
            RETURNING level
            "#,
        )
        .bind(user_id.as_str())
        .bind(threshold)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to advance level: {}", e),
            )
        })?;

        Ok(row.map(|(level,)| level as u32))
    }

    async fn restore_profile(&self, record: &ProfileImportRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO pet_profiles
                (user_id, level, experience, last_login, github_handle, puzzles_solved)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                level = EXCLUDED.level,
                experience = EXCLUDED.experience,
                last_login = EXCLUDED.last_login,
                github_handle = EXCLUDED.github_handle,
                puzzles_solved = EXCLUDED.puzzles_solved
            "#,
        )
        .bind(record.user_id.as_str())
        .bind(record.level as i32)
        .bind(record.experience)
        .bind(record.last_login.map(|d| d.as_naive()))
        .bind(record.linked_github.as_ref().map(|h| h.as_str()))
        .bind(record.puzzles_solved)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to restore profile: {}", e),
            )
        })?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn try_get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", column, e),
        )
    })
}

fn row_to_profile(
    user_id: UserId,
    row: &sqlx::postgres::PgRow,
    journal_entries: BTreeMap<MissionDate, String>,
    commit_counts: BTreeMap<MissionDate, i64>,
) -> Result<PetProfile, DomainError> {
    let level: i32 = try_get(row, "level")?;
    let experience: i64 = try_get(row, "experience")?;
    let last_login: Option<NaiveDate> = try_get(row, "last_login")?;
    let github_handle: Option<String> = try_get(row, "github_handle")?;
    let puzzles_solved: i64 = try_get(row, "puzzles_solved")?;

    let linked_github = github_handle
        .map(GithubHandle::new)
        .transpose()
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid github_handle: {}", e),
            )
        })?;

    Ok(PetProfile::reconstitute(
        user_id,
        level as u32,
        experience,
        last_login.map(MissionDate::from_naive),
        linked_github,
        puzzles_solved,
        journal_entries,
        commit_counts,
    ))
}
