//! Fixed experience rewards per mission.

/// Daily login mission reward.
pub const LOGIN_XP: u32 = 10;

/// Daily journal mission reward.
pub const JOURNAL_XP: u32 = 30;

/// Reward per newly observed commit.
pub const COMMIT_XP: u32 = 3;

/// Reward per accepted puzzle submission.
pub const PUZZLE_XP: u32 = 2;
