use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PlayerStatus {
    #[default]
    #[sea_orm(string_value = "Starter")]
    Starter,
    #[sea_orm(string_value = "Substitute")]
    Substitute,
    #[sea_orm(string_value = "Injured")]
    Injured,
    #[sea_orm(string_value = "Preselected")]
    Preselected,
    #[sea_orm(string_value = "Released")]
    Released,
    #[sea_orm(string_value = "Suspended")]
    Suspended,
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_value())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Position {
    #[sea_orm(string_value = "ST")]
    ST,
    #[sea_orm(string_value = "LM")]
    LM,
    #[sea_orm(string_value = "CM")]
    CM,
    #[sea_orm(string_value = "RM")]
    RM,
    #[sea_orm(string_value = "LB")]
    LB,
    #[sea_orm(string_value = "CB")]
    CB,
    #[sea_orm(string_value = "RB")]
    RB,
    #[sea_orm(string_value = "GK")]
    GK,
    #[sea_orm(string_value = "CAM")]
    CAM,
    #[sea_orm(string_value = "LWB")]
    LWB,
    #[sea_orm(string_value = "RWB")]
    RWB,
    #[sea_orm(string_value = "CDM")]
    CDM,
    #[sea_orm(string_value = "LAM")]
    LAM,
    #[sea_orm(string_value = "RAM")]
    RAM,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PreferredFoot {
    #[sea_orm(string_value = "Left")]
    Left,
    #[sea_orm(string_value = "Right")]
    Right,
    #[sea_orm(string_value = "Both")]
    Both,
}
