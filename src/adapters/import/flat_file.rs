//! One-time importer from the legacy flat-file profile layout.
//!
//! The earlier revision of this system kept all profiles in a single JSON
//! document keyed by user id. This importer moves that document into the
//! relational store. It is idempotent: profile rows upsert on `user_id`,
//! and date-keyed sub-records that already exist in the store are left
//! untouched rather than double-inserted or overwritten.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::foundation::{
    DomainError, ErrorCode, GithubHandle, MissionDate, UserId, ValidationError,
};
use crate::ports::{ProfileImportRecord, ProfileStore};

/// A profile as stored in the legacy JSON document.
#[derive(Debug, Clone, Deserialize)]
struct LegacyProfile {
    #[serde(default = "default_level")]
    level: u32,
    #[serde(default)]
    experience: i64,
    #[serde(default)]
    last_login: Option<String>,
    #[serde(default)]
    github_username: Option<String>,
    #[serde(default)]
    puzzles_solved: i64,
    #[serde(default)]
    journal_days: BTreeMap<String, String>,
    #[serde(default)]
    github_commits: BTreeMap<String, i64>,
}

fn default_level() -> u32 {
    1
}

/// Counts of what an import run actually wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Profile rows upserted.
    pub profiles: usize,
    /// Journal entries inserted (existing dates are skipped).
    pub journal_entries: usize,
    /// Commit records inserted (existing dates are skipped).
    pub commit_records: usize,
}

/// Imports legacy flat-file profiles into a ProfileStore.
pub struct FlatFileImporter {
    store: Arc<dyn ProfileStore>,
}

impl FlatFileImporter {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Imports every profile found in the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the document or any date key cannot be parsed
    /// - `DatabaseError` on store failure
    pub async fn import_file(&self, path: &Path) -> Result<ImportSummary, DomainError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::InvalidInput,
                format!("Failed to read legacy data file: {}", e),
            )
        })?;

        let profiles: HashMap<String, LegacyProfile> =
            serde_json::from_str(&raw).map_err(|e| {
                DomainError::from(ValidationError::invalid_format(
                    "legacy_data",
                    e.to_string(),
                ))
            })?;

        let mut summary = ImportSummary::default();
        for (raw_user_id, legacy) in profiles {
            self.import_profile(&raw_user_id, &legacy, &mut summary)
                .await?;
        }

        tracing::info!(
            profiles = summary.profiles,
            journal_entries = summary.journal_entries,
            commit_records = summary.commit_records,
            "Legacy profile import complete"
        );
        Ok(summary)
    }

    async fn import_profile(
        &self,
        raw_user_id: &str,
        legacy: &LegacyProfile,
        summary: &mut ImportSummary,
    ) -> Result<(), DomainError> {
        let user_id = UserId::new(raw_user_id)?;

        let last_login = legacy
            .last_login
            .as_deref()
            .map(str::parse::<MissionDate>)
            .transpose()?;
        let linked_github = legacy
            .github_username
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(GithubHandle::new)
            .transpose()?;

        let record = ProfileImportRecord {
            user_id: user_id.clone(),
            level: legacy.level.max(1),
            experience: legacy.experience.max(0),
            last_login,
            linked_github,
            puzzles_solved: legacy.puzzles_solved.max(0),
        };
        self.store.restore_profile(&record).await?;
        summary.profiles += 1;

        // Existing date-keyed records win over the flat file.
        let existing = self.store.get_or_create(&user_id).await?;

        for (raw_date, content) in &legacy.journal_days {
            let date: MissionDate = raw_date.parse()?;
            if self.store.add_journal_entry(&user_id, date, content).await? {
                summary.journal_entries += 1;
            }
        }

        for (raw_date, count) in &legacy.github_commits {
            let date: MissionDate = raw_date.parse()?;
            if existing.commit_counts().contains_key(&date) {
                continue;
            }
            self.store.record_commit_count(&user_id, date, *count).await?;
            summary.commit_records += 1;
        }

        Ok(())
    }
}
