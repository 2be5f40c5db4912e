use crate::{
    model::player::{PlayerStatus, Position, TechnicalSkills},
    server::{
        data::player::PlayerRepository,
        model::player::{CreatePlayerParams, PlayerProfile, UpdatePlayerParams},
    },
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_status;
mod delete_by_id;
mod find;
mod insert_batch;
mod update;

/// Builds creation parameters with only the required fields set.
fn create_params(name: &str, status: PlayerStatus) -> CreatePlayerParams {
    CreatePlayerParams {
        profile: PlayerProfile {
            name: name.to_string(),
            surname: "Tester".to_string(),
            img: None,
            birth_date: NaiveDate::from_ymd_opt(1995, 3, 14).unwrap(),
            first_nationality: "Uruguay".to_string(),
            second_nationality: None,
            languages: vec!["Spanish".to_string()],
            marital_status: None,
            children: None,
            natural_position: Position::CB,
            secondary_position: None,
            preferred_foot: None,
            status,
            height: Some(1.84),
            weight: Some(79.0),
            technical: TechnicalSkills::default(),
            physical: Default::default(),
            mental: Default::default(),
            goalkeeper: Default::default(),
            agent: None,
            current_club: None,
            contract_status: None,
            requires_loan_out: None,
            transfer_interest: None,
            priority_signing: None,
        },
    }
}
