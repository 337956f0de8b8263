//! Application layer - mission handlers and the experience engine.
//!
//! Orchestrates domain operations over the ports. Handlers validate
//! preconditions and idempotency gates, then delegate XP awards to the
//! `ExperienceEngine`.

pub mod experience;
pub mod handlers;

pub use experience::{ExperienceAward, ExperienceEngine};
pub use handlers::{
    CommitSyncCommand, CommitSyncHandler, JournalMissionCommand, JournalMissionHandler,
    LinkAccountCommand, LinkAccountHandler, LinkOutcome, LoginMissionCommand, LoginMissionHandler,
    MissionOutcome, PetStatus, PetStatusHandler, PetStatusQuery, PuzzleMissionCommand,
    PuzzleMissionHandler,
};
