//! Uniform result shape returned by mission handlers.

/// Outcome of a mission attempt, rendered by the presentation layer.
///
/// Rejected preconditions are normal outcomes (`accepted = false`), not
/// errors; `Err` is reserved for system faults such as an unreachable
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionOutcome {
    /// Whether the mission was credited.
    pub accepted: bool,

    /// One-line, user-visible message.
    pub message: String,

    /// Whether the award pushed the pet over a level threshold.
    pub leveled_up: bool,
}

impl MissionOutcome {
    /// An accepted mission with its award message.
    pub fn accepted(message: impl Into<String>, leveled_up: bool) -> Self {
        Self {
            accepted: true,
            message: message.into(),
            leveled_up,
        }
    }

    /// A rejected precondition. Never carries a level-up.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
            leveled_up: false,
        }
    }
}

/// Outcome of an account-link operation.
///
/// Linking never awards experience, so there is no level-up flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    /// Whether the link was recorded.
    pub accepted: bool,

    /// One-line, user-visible message.
    pub message: String,
}

impl LinkOutcome {
    /// A recorded link.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            message: message.into(),
        }
    }

    /// A rejected link request.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_outcome_never_levels_up() {
        let outcome = MissionOutcome::rejected("nope");
        assert!(!outcome.accepted);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn accepted_outcome_carries_level_flag() {
        let outcome = MissionOutcome::accepted("+10 XP", true);
        assert!(outcome.accepted);
        assert!(outcome.leveled_up);
    }
}
