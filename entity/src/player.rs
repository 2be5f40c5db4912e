use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{PlayerStatus, Position, PreferredFoot};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub img: Option<String>,
    pub birth_date: Date,
    pub first_nationality: String,
    pub second_nationality: Option<String>,
    pub languages: Json,
    pub marital_status: Option<String>,
    pub children: Option<i32>,
    pub natural_position: Position,
    pub secondary_position: Option<Position>,
    pub preferred_foot: Option<PreferredFoot>,
    pub status: PlayerStatus,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub technical_skills: Json,
    pub physical_skills: Json,
    pub mental_skills: Json,
    pub goalkeeper_skills: Json,
    pub agent: Option<String>,
    pub current_club: Option<String>,
    pub contract_status: Option<String>,
    pub requires_loan_out: Option<bool>,
    pub transfer_interest: Option<bool>,
    pub priority_signing: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
