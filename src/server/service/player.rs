use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::player::PlayerStatus,
    server::{
        data::player::PlayerRepository,
        error::AppError,
        model::{
            player::{CreatePlayerParams, Player, UpdatePlayerParams},
            roster::RosterLimits,
        },
        service::roster::{RosterLock, RosterPermit, RosterValidator},
    },
};

/// Squad management operations.
///
/// Writes that can grow a capacity-limited status hold the `RosterLock` slots of
/// the affected statuses and run their count and write in one transaction, so the
/// capacity decision cannot be invalidated by a concurrent request.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
    lock: &'a RosterLock,
    limits: &'a RosterLimits,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection, lock: &'a RosterLock, limits: &'a RosterLimits) -> Self {
        Self { db, lock, limits }
    }

    /// Admits a batch of new players
    ///
    /// Either the whole batch is persisted or nothing is.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)`: Inserted players with their IDs
    /// - `Err(AppError::BadRequest)`: Empty batch
    /// - `Err(AppError::RosterErr)`: One or more ceilings would be exceeded
    /// - `Err(AppError::DbErr)`: Database error, transaction rolled back
    pub async fn create_batch(&self, params: Vec<CreatePlayerParams>) -> Result<Vec<Player>, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "At least one player is required".to_string(),
            ));
        }

        let statuses: Vec<PlayerStatus> = params.iter().map(|p| p.profile.status).collect();
        let _permit = self.lock.acquire(statuses.iter().copied()).await;

        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        if let Err(err) = RosterValidator::new(&repo, self.limits)
            .validate_batch_admission(&statuses)
            .await
        {
            tracing::warn!("Rejected admission of {} players: {}", statuses.len(), err);
            return Err(err);
        }

        let players = repo.insert_batch(params).await?;
        txn.commit().await?;

        tracing::info!("Admitted {} players", players.len());

        Ok(players)
    }

    /// Gets every player
    pub async fn get_all(&self) -> Result<Vec<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets a player by ID
    /// Returns None if the player doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Applies a partial update
    ///
    /// An update carrying a status re-checks the capacity of the destination status
    /// before anything is written.
    ///
    /// Returns None if the player doesn't exist
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Option<Player>, AppError> {
        let Some(status) = params.status else {
            let repo = PlayerRepository::new(self.db);
            return Ok(repo.update_by_id(params).await?);
        };

        let Some((_permit, txn)) = self.begin_transition(params.id, status).await? else {
            return Ok(None);
        };

        let updated = PlayerRepository::new(&txn).update_by_id(params).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Moves a player to `status`
    ///
    /// Returns None if the player doesn't exist
    pub async fn update_status(&self, id: i32, status: PlayerStatus) -> Result<Option<Player>, AppError> {
        let Some((_permit, txn)) = self.begin_transition(id, status).await? else {
            return Ok(None);
        };

        let updated = PlayerRepository::new(&txn)
            .update_status_by_id(id, status)
            .await?;
        txn.commit().await?;

        if let Some(player) = &updated {
            tracing::info!("Player {} is now {}", player.id, status);
        }

        Ok(updated)
    }

    /// Deletes a player
    /// Returns true if deleted, false if not found
    ///
    /// Removing a player can only free capacity, so no lock is taken.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.delete_by_id(id).await?)
    }

    /// Locks the destination status, opens a transaction and validates the transition.
    ///
    /// # Returns
    /// - `Ok(Some((permit, txn)))`: Transition allowed, write on `txn` then commit
    /// - `Ok(None)`: No player with that ID
    /// - `Err(AppError::RosterErr)`: Destination ceiling would be exceeded
    async fn begin_transition(
        &self,
        id: i32,
        status: PlayerStatus,
    ) -> Result<Option<(RosterPermit, DatabaseTransaction)>, AppError> {
        let permit = self.lock.acquire([status]).await;
        let txn = self.db.begin().await?;

        let repo = PlayerRepository::new(&txn);
        let Some(target) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Err(err) = RosterValidator::new(&repo, self.limits)
            .validate_status_transition(&target, status)
            .await
        {
            tracing::warn!("Rejected moving player {} to {}: {}", id, status, err);
            return Err(err);
        }

        Ok(Some((permit, txn)))
    }
}
