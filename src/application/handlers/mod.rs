//! Application handlers.
//!
//! One handler per mission plus the account-link and status operations.
//! Each follows the same shape: a Command struct in, a
//! `MissionOutcome`/`LinkOutcome` out, with rejected preconditions as
//! normal outcomes and `Err` reserved for system faults.

mod commit_sync;
mod journal_mission;
mod link_account;
mod login_mission;
mod outcome;
mod pet_status;
mod puzzle_mission;

pub use commit_sync::{CommitSyncCommand, CommitSyncHandler};
pub use journal_mission::{JournalMissionCommand, JournalMissionHandler};
pub use link_account::{LinkAccountCommand, LinkAccountHandler};
pub use login_mission::{LoginMissionCommand, LoginMissionHandler};
pub use outcome::{LinkOutcome, MissionOutcome};
pub use pet_status::{PetStatus, PetStatusHandler, PetStatusQuery};
pub use puzzle_mission::{PuzzleMissionCommand, PuzzleMissionHandler};
