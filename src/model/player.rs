use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use entity::sea_orm_active_enums::{PlayerStatus, Position, PreferredFoot};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalSkills {
    pub heading: bool,
    pub crossing: bool,
    pub first_touch: bool,
    pub tackling: bool,
    pub marking: bool,
    pub passing: bool,
    pub penalties: bool,
    pub dribbling: bool,
    pub finishing: bool,
    pub corners: bool,
    pub technique: bool,
    pub long_shots: bool,
    pub free_kicks: bool,
    pub one_on_ones: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalSkills {
    pub acceleration: bool,
    pub agility: bool,
    pub jumping_reach: bool,
    pub balance: bool,
    pub strength: bool,
    pub natural_fitness: bool,
    pub stamina: bool,
    pub pace: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MentalSkills {
    pub handling: bool,
    pub communication: bool,
    pub eccentricity: bool,
    pub aggression: bool,
    pub anticipation: bool,
    pub positioning: bool,
    pub decisions: bool,
    pub off_the_ball: bool,
    pub determination: bool,
    pub teamwork: bool,
    pub leadership: bool,
    pub work_rate: bool,
    pub flair: bool,
    pub bravery: bool,
    pub vision: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalkeeperSkills {
    pub aerial_reach: bool,
    pub punching: bool,
    pub command_of_area: bool,
    pub reflexes: bool,
    pub rushing_out: bool,
    pub throwing: bool,
    pub kicking: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributesDto {
    pub technical: TechnicalSkills,
    pub physical: PhysicalSkills,
    pub mental: MentalSkills,
    pub goalkeeper: GoalkeeperSkills,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalDto {
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractDto {
    pub agent: Option<String>,
    pub current_club: Option<String>,
    pub contract_status: Option<String>,
    pub requires_loan_out: Option<bool>,
    pub transfer_interest: Option<bool>,
    pub priority_signing: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDataDto {
    pub name: String,
    pub surname: String,
    pub img: Option<String>,
    pub birth_date: NaiveDate,
    pub first_nationality: String,
    pub second_nationality: Option<String>,
    pub languages: Vec<String>,
    pub marital_status: Option<String>,
    pub children: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FootballProfileDto {
    pub natural_position: Position,
    pub secondary_position: Option<Position>,
    pub preferred_foot: Option<PreferredFoot>,
    pub status: PlayerStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub personal_data: PersonalDataDto,
    pub football_profile: FootballProfileDto,
    pub physical: PhysicalDto,
    pub attributes: AttributesDto,
    pub contract: ContractDto,
}

// Request bodies keep enum and date fields as raw strings so that every
// invalid field can be reported at once instead of failing deserialization.

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDataInputDto {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub img: Option<String>,
    pub birth_date: Option<String>,
    pub first_nationality: Option<String>,
    pub second_nationality: Option<String>,
    pub languages: Option<Vec<String>>,
    pub marital_status: Option<String>,
    pub children: Option<i32>,
}

impl PersonalDataInputDto {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FootballProfileInputDto {
    pub natural_position: Option<String>,
    pub secondary_position: Option<String>,
    pub preferred_foot: Option<String>,
    pub status: Option<String>,
}

impl FootballProfileInputDto {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributesInputDto {
    pub technical: Option<TechnicalSkills>,
    pub physical: Option<PhysicalSkills>,
    pub mental: Option<MentalSkills>,
    pub goalkeeper: Option<GoalkeeperSkills>,
}

impl AttributesInputDto {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePlayerDto {
    pub personal_data: PersonalDataInputDto,
    pub football_profile: FootballProfileInputDto,
    pub physical: PhysicalDto,
    pub attributes: AttributesInputDto,
    pub contract: ContractDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePlayerDto {
    pub personal_data: PersonalDataInputDto,
    pub football_profile: FootballProfileInputDto,
    pub physical: PhysicalDto,
    pub attributes: AttributesInputDto,
    pub contract: ContractDto,
}

impl UpdatePlayerDto {
    /// True when the body carries no recognized field to update.
    pub fn is_empty(&self) -> bool {
        self.personal_data.is_empty()
            && self.football_profile.is_empty()
            && self.physical == PhysicalDto::default()
            && self.attributes.is_empty()
            && self.contract == ContractDto::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlayerStatusDto {
    #[serde(default, alias = "status")]
    pub estado: Option<String>,
}
