//! Roster capacity enforcement.
//!
//! `RosterValidator` decides whether an admission batch or a status transition fits
//! within the configured `RosterLimits`. Its checks are read-then-decide, so callers
//! must hold the matching `RosterPermit` (and run the count and the write in one
//! transaction) for the decision to still hold when the write lands.

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::DbErr;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    model::player::PlayerStatus,
    server::{
        error::{
            roster::{CapacityViolation, RosterError},
            AppError,
        },
        model::{
            player::Player,
            roster::{RosterLimits, CAPACITY_LIMITED},
        },
    },
};

/// Source of persisted per-status counts.
#[async_trait]
pub trait PlayerCounter: Send + Sync {
    async fn count_by_status(&self, status: PlayerStatus) -> Result<u64, DbErr>;
}

pub struct RosterValidator<'a, S: PlayerCounter> {
    store: &'a S,
    limits: &'a RosterLimits,
}

impl<'a, S: PlayerCounter> RosterValidator<'a, S> {
    pub fn new(store: &'a S, limits: &'a RosterLimits) -> Self {
        Self { store, limits }
    }

    /// Checks that admitting `candidates` keeps every limited status within its ceiling.
    ///
    /// Every capacity-limited status is checked, so the error lists all violated
    /// categories rather than the first one found.
    ///
    /// # Arguments
    /// - `candidates` - Status of each player in the batch
    ///
    /// # Returns
    /// - `Ok(())` - The batch fits
    /// - `Err(AppError::RosterErr)` - One or more ceilings would be exceeded
    /// - `Err(AppError::DbErr)` - Counting failed
    pub async fn validate_batch_admission(
        &self,
        candidates: &[PlayerStatus],
    ) -> Result<(), AppError> {
        let mut violations = Vec::new();

        for status in CAPACITY_LIMITED {
            let Some(ceiling) = self.limits.ceiling(status) else {
                continue;
            };

            let incoming = candidates.iter().filter(|s| **s == status).count() as u64;
            let existing = self.store.count_by_status(status).await?;
            let attempted = existing + incoming;

            tracing::debug!(
                "{} capacity check: {} existing + {} incoming / {}",
                status,
                existing,
                incoming,
                ceiling
            );

            if attempted > ceiling {
                violations.push(CapacityViolation {
                    status,
                    ceiling,
                    attempted,
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(RosterError::CapacityExceeded(violations).into())
        }
    }

    /// Checks that moving `target` into `new_status` keeps that status within its ceiling.
    ///
    /// Unlimited destinations are accepted without querying the store. A player
    /// already holding the destination status is not counted twice.
    ///
    /// # Returns
    /// - `Ok(())` - The transition fits
    /// - `Err(AppError::RosterErr)` - The destination ceiling would be exceeded
    /// - `Err(AppError::DbErr)` - Counting failed
    pub async fn validate_status_transition(
        &self,
        target: &Player,
        new_status: PlayerStatus,
    ) -> Result<(), AppError> {
        let Some(ceiling) = self.limits.ceiling(new_status) else {
            return Ok(());
        };

        let existing = self.store.count_by_status(new_status).await?;
        let already_counted = u64::from(target.status() == new_status);
        let attempted = existing.saturating_sub(already_counted) + 1;

        if attempted > ceiling {
            return Err(RosterError::CapacityExceeded(vec![CapacityViolation {
                status: new_status,
                ceiling,
                attempted,
            }])
            .into());
        }

        Ok(())
    }
}

/// Per-category admission locks.
///
/// One async mutex per capacity-limited status. Clones share the same mutexes, so
/// the lock held in `AppState` serializes every request of the process.
#[derive(Clone, Default)]
pub struct RosterLock {
    slots: [Arc<Mutex<()>>; CAPACITY_LIMITED.len()],
}

/// Held locks for the categories an operation touches, released on drop.
pub struct RosterPermit {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl RosterLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks every capacity-limited status present in `statuses`.
    ///
    /// Locks are taken in `CAPACITY_LIMITED` order whatever the input order, so two
    /// operations touching overlapping categories cannot deadlock. Unlimited
    /// statuses take no lock.
    pub async fn acquire(&self, statuses: impl IntoIterator<Item = PlayerStatus>) -> RosterPermit {
        let requested: Vec<PlayerStatus> = statuses.into_iter().collect();
        let mut guards = Vec::new();

        for (slot, status) in self.slots.iter().zip(CAPACITY_LIMITED) {
            if requested.contains(&status) {
                guards.push(slot.clone().lock_owned().await);
            }
        }

        RosterPermit { _guards: guards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;
    use test_utils::fixture;

    /// In-memory counter standing in for the repository.
    struct StubCounter(HashMap<PlayerStatus, u64>);

    impl StubCounter {
        fn with(counts: &[(PlayerStatus, u64)]) -> Self {
            Self(counts.iter().copied().collect())
        }
    }

    #[async_trait]
    impl PlayerCounter for StubCounter {
        async fn count_by_status(&self, status: PlayerStatus) -> Result<u64, DbErr> {
            Ok(self.0.get(&status).copied().unwrap_or(0))
        }
    }

    fn player_with_status(status: PlayerStatus) -> Player {
        Player::from_entity(fixture::player::entity_builder().status(status).build()).unwrap()
    }

    fn violations(err: AppError) -> Vec<CapacityViolation> {
        match err {
            AppError::RosterErr(RosterError::CapacityExceeded(v)) => v,
            other => panic!("expected capacity error, got {:?}", other),
        }
    }

    /// Tests admission with a full starting eleven.
    ///
    /// Expected: Err naming Starter and ceiling 11 for a Starter, Ok for a Substitute
    #[tokio::test]
    async fn rejects_starter_when_eleven_are_stored() {
        let store = StubCounter::with(&[(PlayerStatus::Starter, 11)]);
        let limits = RosterLimits::default();
        let validator = RosterValidator::new(&store, &limits);

        let err = validator
            .validate_batch_admission(&[PlayerStatus::Starter])
            .await
            .unwrap_err();
        assert_eq!(
            violations(err),
            vec![CapacityViolation {
                status: PlayerStatus::Starter,
                ceiling: 11,
                attempted: 12,
            }]
        );

        assert!(validator
            .validate_batch_admission(&[PlayerStatus::Substitute])
            .await
            .is_ok());
    }

    /// Tests that a batch exactly reaching the ceiling is accepted.
    ///
    /// Expected: Ok
    #[tokio::test]
    async fn accepts_batch_reaching_ceiling() {
        let store = StubCounter::with(&[(PlayerStatus::Preselected, 13)]);
        let limits = RosterLimits::default();
        let validator = RosterValidator::new(&store, &limits);

        let result = validator
            .validate_batch_admission(&[PlayerStatus::Preselected, PlayerStatus::Preselected])
            .await;

        assert!(result.is_ok());
    }

    /// Tests that all violated categories are reported together.
    ///
    /// Expected: Err listing Starter and Preselected, not Substitute
    #[tokio::test]
    async fn reports_every_violated_category() {
        let store = StubCounter::with(&[
            (PlayerStatus::Starter, 10),
            (PlayerStatus::Substitute, 20),
            (PlayerStatus::Preselected, 15),
        ]);
        let limits = RosterLimits::default();
        let validator = RosterValidator::new(&store, &limits);

        let batch = [
            PlayerStatus::Starter,
            PlayerStatus::Starter,
            PlayerStatus::Substitute,
            PlayerStatus::Preselected,
        ];
        let err = validator.validate_batch_admission(&batch).await.unwrap_err();

        let found = violations(err);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].status, PlayerStatus::Starter);
        assert_eq!(found[0].attempted, 12);
        assert_eq!(found[1].status, PlayerStatus::Preselected);
        assert_eq!(found[1].attempted, 16);
    }

    /// Tests that unlimited statuses are never rejected.
    ///
    /// Expected: Ok however many are admitted
    #[tokio::test]
    async fn unlimited_statuses_are_not_capped() {
        let store = StubCounter::with(&[(PlayerStatus::Injured, 500)]);
        let limits = RosterLimits::default();
        let validator = RosterValidator::new(&store, &limits);

        let batch = vec![PlayerStatus::Injured; 40];
        assert!(validator.validate_batch_admission(&batch).await.is_ok());

        let target = player_with_status(PlayerStatus::Starter);
        for status in [
            PlayerStatus::Injured,
            PlayerStatus::Released,
            PlayerStatus::Suspended,
        ] {
            assert!(validator
                .validate_status_transition(&target, status)
                .await
                .is_ok());
        }
    }

    /// Tests transitions into a full category.
    ///
    /// Expected: Err for an outsider, Ok for a player already in the category
    #[tokio::test]
    async fn transition_excludes_target_already_in_category() {
        let store = StubCounter::with(&[(PlayerStatus::Substitute, 25)]);
        let limits = RosterLimits::default();
        let validator = RosterValidator::new(&store, &limits);

        let injured = player_with_status(PlayerStatus::Injured);
        let err = validator
            .validate_status_transition(&injured, PlayerStatus::Substitute)
            .await
            .unwrap_err();
        assert_eq!(violations(err)[0].attempted, 26);

        let substitute = player_with_status(PlayerStatus::Substitute);
        assert!(validator
            .validate_status_transition(&substitute, PlayerStatus::Substitute)
            .await
            .is_ok());
    }

    /// Tests that custom limits are honored.
    ///
    /// Expected: Err once the configured ceiling of 2 is passed
    #[tokio::test]
    async fn honors_configured_limits() {
        let store = StubCounter::with(&[(PlayerStatus::Starter, 2)]);
        let limits = RosterLimits {
            starter: 2,
            ..Default::default()
        };
        let validator = RosterValidator::new(&store, &limits);

        let err = validator
            .validate_batch_admission(&[PlayerStatus::Starter])
            .await
            .unwrap_err();
        assert_eq!(violations(err)[0].ceiling, 2);
    }

    /// Tests that a permit locks each limited status once and ignores unlimited ones.
    ///
    /// Expected: duplicate statuses do not deadlock, unlimited and untouched statuses
    /// stay free, held limited statuses block
    #[tokio::test]
    async fn permit_only_locks_limited_statuses() {
        let lock = RosterLock::new();
        let wait = Duration::from_millis(50);

        let _permit = tokio::time::timeout(
            wait,
            lock.acquire([
                PlayerStatus::Preselected,
                PlayerStatus::Injured,
                PlayerStatus::Starter,
                PlayerStatus::Starter,
            ]),
        )
        .await
        .expect("duplicate statuses must be locked once");

        let free = tokio::time::timeout(
            wait,
            lock.acquire([
                PlayerStatus::Substitute,
                PlayerStatus::Injured,
                PlayerStatus::Released,
            ]),
        )
        .await;
        assert!(free.is_ok());

        let starter = tokio::time::timeout(wait, lock.acquire([PlayerStatus::Starter])).await;
        assert!(starter.is_err());

        let preselected =
            tokio::time::timeout(wait, lock.acquire([PlayerStatus::Preselected])).await;
        assert!(preselected.is_err());
    }

    /// Tests that a held category blocks a second acquirer until released.
    ///
    /// Expected: second acquire times out while the first permit lives, succeeds after drop
    #[tokio::test]
    async fn permit_blocks_overlapping_category() {
        let lock = RosterLock::new();
        let held = lock.acquire([PlayerStatus::Substitute]).await;

        let blocked = tokio::time::timeout(
            Duration::from_millis(50),
            lock.acquire([PlayerStatus::Starter, PlayerStatus::Substitute]),
        )
        .await;
        assert!(blocked.is_err());

        let other = tokio::time::timeout(
            Duration::from_millis(50),
            lock.acquire([PlayerStatus::Preselected]),
        )
        .await;
        assert!(other.is_ok());

        drop(held);
        let after = tokio::time::timeout(
            Duration::from_millis(50),
            lock.acquire([PlayerStatus::Starter, PlayerStatus::Substitute]),
        )
        .await;
        assert!(after.is_ok());
    }
}
