//! Roster composition limits.

use crate::model::player::PlayerStatus;

/// Statuses subject to a ceiling, in the order their locks are acquired.
pub const CAPACITY_LIMITED: [PlayerStatus; 3] = [
    PlayerStatus::Starter,
    PlayerStatus::Substitute,
    PlayerStatus::Preselected,
];

pub const DEFAULT_STARTER_LIMIT: u64 = 11;
pub const DEFAULT_SUBSTITUTE_LIMIT: u64 = 25;
pub const DEFAULT_PRESELECTED_LIMIT: u64 = 15;

/// Maximum number of persisted players per capacity-limited status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLimits {
    pub starter: u64,
    pub substitute: u64,
    pub preselected: u64,
}

impl RosterLimits {
    /// Returns the ceiling for `status`, or `None` when the status is unlimited.
    pub fn ceiling(&self, status: PlayerStatus) -> Option<u64> {
        match status {
            PlayerStatus::Starter => Some(self.starter),
            PlayerStatus::Substitute => Some(self.substitute),
            PlayerStatus::Preselected => Some(self.preselected),
            PlayerStatus::Injured | PlayerStatus::Released | PlayerStatus::Suspended => None,
        }
    }
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            starter: DEFAULT_STARTER_LIMIT,
            substitute: DEFAULT_SUBSTITUTE_LIMIT,
            preselected: DEFAULT_PRESELECTED_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_limited_statuses_have_a_ceiling() {
        let limits = RosterLimits::default();

        for status in CAPACITY_LIMITED {
            assert!(limits.ceiling(status).is_some());
        }
        assert_eq!(limits.ceiling(PlayerStatus::Starter), Some(11));
        assert_eq!(limits.ceiling(PlayerStatus::Substitute), Some(25));
        assert_eq!(limits.ceiling(PlayerStatus::Preselected), Some(15));
        assert_eq!(limits.ceiling(PlayerStatus::Injured), None);
        assert_eq!(limits.ceiling(PlayerStatus::Released), None);
        assert_eq!(limits.ceiling(PlayerStatus::Suspended), None);
    }
}
