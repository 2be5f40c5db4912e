use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::player::PlayerStatus,
    server::{
        model::player::{CreatePlayerParams, Player, UpdatePlayerParams},
        service::roster::PlayerCounter,
    },
};

/// Player persistence.
///
/// Generic over the SeaORM connection so the same queries run against the pool or
/// inside a `DatabaseTransaction`; multi-record writes are only atomic in the latter.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts persisted players holding `status`
    ///
    /// # Returns
    /// - `Ok(count)`: Number of players with the status
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_status(&self, status: PlayerStatus) -> Result<u64, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Inserts every player of the batch
    ///
    /// Run on a transaction to get all-or-nothing behavior.
    ///
    /// # Returns
    /// - `Ok(players)`: Inserted players in input order with their assigned IDs
    /// - `Err(DbErr)`: Database error, remaining records are not inserted
    pub async fn insert_batch(&self, params: Vec<CreatePlayerParams>) -> Result<Vec<Player>, DbErr> {
        let mut players = Vec::with_capacity(params.len());

        for param in params {
            let p = param.profile;
            let model = entity::player::ActiveModel {
                name: ActiveValue::Set(p.name),
                surname: ActiveValue::Set(p.surname),
                img: ActiveValue::Set(p.img),
                birth_date: ActiveValue::Set(p.birth_date),
                first_nationality: ActiveValue::Set(p.first_nationality),
                second_nationality: ActiveValue::Set(p.second_nationality),
                languages: ActiveValue::Set(encode_json("languages", &p.languages)?),
                marital_status: ActiveValue::Set(p.marital_status),
                children: ActiveValue::Set(p.children),
                natural_position: ActiveValue::Set(p.natural_position),
                secondary_position: ActiveValue::Set(p.secondary_position),
                preferred_foot: ActiveValue::Set(p.preferred_foot),
                status: ActiveValue::Set(p.status),
                height: ActiveValue::Set(p.height),
                weight: ActiveValue::Set(p.weight),
                technical_skills: ActiveValue::Set(encode_json("technical_skills", &p.technical)?),
                physical_skills: ActiveValue::Set(encode_json("physical_skills", &p.physical)?),
                mental_skills: ActiveValue::Set(encode_json("mental_skills", &p.mental)?),
                goalkeeper_skills: ActiveValue::Set(encode_json(
                    "goalkeeper_skills",
                    &p.goalkeeper,
                )?),
                agent: ActiveValue::Set(p.agent),
                current_club: ActiveValue::Set(p.current_club),
                contract_status: ActiveValue::Set(p.contract_status),
                requires_loan_out: ActiveValue::Set(p.requires_loan_out),
                transfer_interest: ActiveValue::Set(p.transfer_interest),
                priority_signing: ActiveValue::Set(p.priority_signing),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            players.push(Player::from_entity(model)?);
        }

        Ok(players)
    }

    /// Gets a player by ID
    ///
    /// # Returns
    /// - `Ok(Some(player))`: Player found
    /// - `Ok(None)`: No player with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        entity::prelude::Player::find_by_id(id)
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    /// Gets every player ordered by ID
    pub async fn find_all(&self) -> Result<Vec<Player>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    /// Applies a partial update
    ///
    /// Only fields set on `params` are written.
    ///
    /// # Returns
    /// - `Ok(Some(player))`: The updated player
    /// - `Ok(None)`: No player with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update_by_id(&self, params: UpdatePlayerParams) -> Result<Option<Player>, DbErr> {
        let Some(model) = entity::prelude::Player::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::player::ActiveModel = model.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(surname) = params.surname {
            active.surname = ActiveValue::Set(surname);
        }
        if let Some(img) = params.img {
            active.img = ActiveValue::Set(Some(img));
        }
        if let Some(birth_date) = params.birth_date {
            active.birth_date = ActiveValue::Set(birth_date);
        }
        if let Some(nationality) = params.first_nationality {
            active.first_nationality = ActiveValue::Set(nationality);
        }
        if let Some(nationality) = params.second_nationality {
            active.second_nationality = ActiveValue::Set(Some(nationality));
        }
        if let Some(languages) = params.languages {
            active.languages = ActiveValue::Set(encode_json("languages", &languages)?);
        }
        if let Some(marital_status) = params.marital_status {
            active.marital_status = ActiveValue::Set(Some(marital_status));
        }
        if let Some(children) = params.children {
            active.children = ActiveValue::Set(Some(children));
        }
        if let Some(position) = params.natural_position {
            active.natural_position = ActiveValue::Set(position);
        }
        if let Some(position) = params.secondary_position {
            active.secondary_position = ActiveValue::Set(Some(position));
        }
        if let Some(foot) = params.preferred_foot {
            active.preferred_foot = ActiveValue::Set(Some(foot));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(height) = params.height {
            active.height = ActiveValue::Set(Some(height));
        }
        if let Some(weight) = params.weight {
            active.weight = ActiveValue::Set(Some(weight));
        }
        if let Some(skills) = params.technical {
            active.technical_skills = ActiveValue::Set(encode_json("technical_skills", &skills)?);
        }
        if let Some(skills) = params.physical {
            active.physical_skills = ActiveValue::Set(encode_json("physical_skills", &skills)?);
        }
        if let Some(skills) = params.mental {
            active.mental_skills = ActiveValue::Set(encode_json("mental_skills", &skills)?);
        }
        if let Some(skills) = params.goalkeeper {
            active.goalkeeper_skills = ActiveValue::Set(encode_json("goalkeeper_skills", &skills)?);
        }
        if let Some(agent) = params.agent {
            active.agent = ActiveValue::Set(Some(agent));
        }
        if let Some(club) = params.current_club {
            active.current_club = ActiveValue::Set(Some(club));
        }
        if let Some(contract_status) = params.contract_status {
            active.contract_status = ActiveValue::Set(Some(contract_status));
        }
        if let Some(flag) = params.requires_loan_out {
            active.requires_loan_out = ActiveValue::Set(Some(flag));
        }
        if let Some(flag) = params.transfer_interest {
            active.transfer_interest = ActiveValue::Set(Some(flag));
        }
        if let Some(flag) = params.priority_signing {
            active.priority_signing = ActiveValue::Set(Some(flag));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Player::from_entity(updated)?))
    }

    /// Sets a player's status without touching other fields
    ///
    /// # Returns
    /// - `Ok(Some(player))`: The updated player
    /// - `Ok(None)`: No player with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update_status_by_id(
        &self,
        id: i32,
        status: PlayerStatus,
    ) -> Result<Option<Player>, DbErr> {
        self.update_by_id(UpdatePlayerParams {
            id,
            status: Some(status),
            ..Default::default()
        })
        .await
    }

    /// Deletes a player by ID
    ///
    /// # Returns
    /// - `Ok(true)`: Player deleted
    /// - `Ok(false)`: No player with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl<C: ConnectionTrait + Sync> PlayerCounter for PlayerRepository<'_, C> {
    async fn count_by_status(&self, status: PlayerStatus) -> Result<u64, DbErr> {
        PlayerRepository::count_by_status(self, status).await
    }
}

fn encode_json<T: serde::Serialize>(column: &str, value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to encode {}: {}", column, e)))
}
