//! Player domain models and parameters.
//!
//! Defines the persisted `Player`, the `PlayerProfile` carried by every record, and
//! the parameter types produced from request DTOs. DTO conversion is where
//! field-level validation happens: required fields, enum membership, numeric bounds
//! and date format are all checked, and every failing field is reported together.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::player::{
        AttributesDto, ContractDto, CreatePlayerDto, FootballProfileDto, GoalkeeperSkills,
        MentalSkills, PersonalDataDto, PhysicalDto, PhysicalSkills, PlayerDto,
        PlayerStatus, Position, PreferredFoot, TechnicalSkills, UpdatePlayerDto,
    },
    server::{
        error::{validation::ValidationErrors, AppError},
        util::parse::{check_min, parse_date, parse_variant, require_text},
    },
};

/// Minimum accepted height in meters.
pub const MIN_HEIGHT: f64 = 1.0;
/// Minimum accepted weight in kilograms.
pub const MIN_WEIGHT: f64 = 30.0;

/// Every descriptive field of a player record.
///
/// Shared by persisted players and creation parameters; only the identifier is
/// assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub surname: String,
    pub img: Option<String>,
    pub birth_date: NaiveDate,
    pub first_nationality: String,
    pub second_nationality: Option<String>,
    pub languages: Vec<String>,
    pub marital_status: Option<String>,
    pub children: Option<i32>,

    pub natural_position: Position,
    pub secondary_position: Option<Position>,
    pub preferred_foot: Option<PreferredFoot>,
    pub status: PlayerStatus,

    /// Height in meters.
    pub height: Option<f64>,
    /// Weight in kilograms.
    pub weight: Option<f64>,

    pub technical: TechnicalSkills,
    pub physical: PhysicalSkills,
    pub mental: MentalSkills,
    pub goalkeeper: GoalkeeperSkills,

    pub agent: Option<String>,
    pub current_club: Option<String>,
    pub contract_status: Option<String>,
    pub requires_loan_out: Option<bool>,
    pub transfer_interest: Option<bool>,
    pub priority_signing: Option<bool>,
}

/// A persisted squad member.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Database-assigned identifier.
    pub id: i32,
    pub profile: PlayerProfile,
}

impl Player {
    pub fn status(&self) -> PlayerStatus {
        self.profile.status
    }

    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The player entity model from the database
    ///
    /// # Returns
    /// - `Ok(Player)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A JSON column could not be decoded
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            profile: PlayerProfile {
                name: entity.name,
                surname: entity.surname,
                img: entity.img,
                birth_date: entity.birth_date,
                first_nationality: entity.first_nationality,
                second_nationality: entity.second_nationality,
                languages: decode_json("languages", entity.languages)?,
                marital_status: entity.marital_status,
                children: entity.children,
                natural_position: entity.natural_position,
                secondary_position: entity.secondary_position,
                preferred_foot: entity.preferred_foot,
                status: entity.status,
                height: entity.height,
                weight: entity.weight,
                technical: decode_json("technical_skills", entity.technical_skills)?,
                physical: decode_json("physical_skills", entity.physical_skills)?,
                mental: decode_json("mental_skills", entity.mental_skills)?,
                goalkeeper: decode_json("goalkeeper_skills", entity.goalkeeper_skills)?,
                agent: entity.agent,
                current_club: entity.current_club,
                contract_status: entity.contract_status,
                requires_loan_out: entity.requires_loan_out,
                transfer_interest: entity.transfer_interest,
                priority_signing: entity.priority_signing,
            },
        })
    }

    /// Converts the domain model to its API representation.
    pub fn into_dto(self) -> PlayerDto {
        let p = self.profile;
        PlayerDto {
            id: self.id,
            personal_data: PersonalDataDto {
                name: p.name,
                surname: p.surname,
                img: p.img,
                birth_date: p.birth_date,
                first_nationality: p.first_nationality,
                second_nationality: p.second_nationality,
                languages: p.languages,
                marital_status: p.marital_status,
                children: p.children,
            },
            football_profile: FootballProfileDto {
                natural_position: p.natural_position,
                secondary_position: p.secondary_position,
                preferred_foot: p.preferred_foot,
                status: p.status,
            },
            physical: PhysicalDto {
                height: p.height,
                weight: p.weight,
            },
            attributes: AttributesDto {
                technical: p.technical,
                physical: p.physical,
                mental: p.mental,
                goalkeeper: p.goalkeeper,
            },
            contract: ContractDto {
                agent: p.agent,
                current_club: p.current_club,
                contract_status: p.contract_status,
                requires_loan_out: p.requires_loan_out,
                transfer_interest: p.transfer_interest,
                priority_signing: p.priority_signing,
            },
        }
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(
    column: &str,
    value: serde_json::Value,
) -> Result<T, DbErr> {
    serde_json::from_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to decode {}: {}", column, e)))
}

/// Parameters for admitting a new player.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlayerParams {
    pub profile: PlayerProfile,
}

impl CreatePlayerParams {
    /// Validates a creation DTO and converts it to parameters.
    ///
    /// Status defaults to `Starter` when omitted.
    ///
    /// # Returns
    /// - `Ok(CreatePlayerParams)` - Every field passed validation
    /// - `Err(ValidationErrors)` - One entry per failing field
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let personal = dto.personal_data;
        let football = dto.football_profile;

        let name = require_text(&mut errors, "personalData.name", personal.name);
        let surname = require_text(&mut errors, "personalData.surname", personal.surname);
        let first_nationality = require_text(
            &mut errors,
            "personalData.firstNationality",
            personal.first_nationality,
        );
        let birth_date = match personal.birth_date.as_deref() {
            Some(raw) => parse_date(&mut errors, "personalData.birthDate", Some(raw)),
            None => {
                errors.add(
                    "personalData.birthDate",
                    "personalData.birthDate is required",
                );
                None
            }
        };
        if matches!(personal.children, Some(c) if c < 0) {
            errors.add(
                "personalData.children",
                "personalData.children must not be negative",
            );
        }

        let natural_position = match football.natural_position.as_deref() {
            Some(raw) => parse_variant::<Position>(
                &mut errors,
                "footballProfile.naturalPosition",
                Some(raw),
            ),
            None => {
                errors.add(
                    "footballProfile.naturalPosition",
                    "footballProfile.naturalPosition is required",
                );
                None
            }
        };
        let secondary_position = parse_variant::<Position>(
            &mut errors,
            "footballProfile.secondaryPosition",
            football.secondary_position.as_deref(),
        );
        let preferred_foot = parse_variant::<PreferredFoot>(
            &mut errors,
            "footballProfile.preferredFoot",
            football.preferred_foot.as_deref(),
        );
        let status = parse_variant::<PlayerStatus>(
            &mut errors,
            "footballProfile.status",
            football.status.as_deref(),
        );

        check_min(&mut errors, "physical.height", dto.physical.height, MIN_HEIGHT, "m");
        check_min(&mut errors, "physical.weight", dto.physical.weight, MIN_WEIGHT, "kg");

        let (Some(name), Some(surname), Some(first_nationality), Some(birth_date), Some(natural_position)) =
            (name, surname, first_nationality, birth_date, natural_position)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let attributes = dto.attributes;
        let contract = dto.contract;

        Ok(Self {
            profile: PlayerProfile {
                name,
                surname,
                img: personal.img,
                birth_date,
                first_nationality,
                second_nationality: personal.second_nationality,
                languages: personal.languages.unwrap_or_default(),
                marital_status: personal.marital_status,
                children: personal.children,
                natural_position,
                secondary_position,
                preferred_foot,
                status: status.unwrap_or_default(),
                height: dto.physical.height,
                weight: dto.physical.weight,
                technical: attributes.technical.unwrap_or_default(),
                physical: attributes.physical.unwrap_or_default(),
                mental: attributes.mental.unwrap_or_default(),
                goalkeeper: attributes.goalkeeper.unwrap_or_default(),
                agent: contract.agent,
                current_club: contract.current_club,
                contract_status: contract.contract_status,
                requires_loan_out: contract.requires_loan_out,
                transfer_interest: contract.transfer_interest,
                priority_signing: contract.priority_signing,
            },
        })
    }

    /// Validates a whole admission batch.
    ///
    /// Errors from every record are collected, keyed by the record's index, so a
    /// single invalid player rejects the batch before anything is persisted.
    pub fn from_dto_batch(dtos: Vec<CreatePlayerDto>) -> Result<Vec<Self>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut params = Vec::with_capacity(dtos.len());

        for (index, dto) in dtos.into_iter().enumerate() {
            match Self::from_dto(dto) {
                Ok(p) => params.push(p),
                Err(e) => errors.merge_prefixed(&format!("[{}]", index), e),
            }
        }

        if errors.is_empty() {
            Ok(params)
        } else {
            Err(errors)
        }
    }
}

/// Parameters for a partial update of an existing player.
///
/// Only `Some` fields are written. Skill groups are replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlayerParams {
    /// ID of the player to update.
    pub id: i32,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub img: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub first_nationality: Option<String>,
    pub second_nationality: Option<String>,
    pub languages: Option<Vec<String>>,
    pub marital_status: Option<String>,
    pub children: Option<i32>,
    pub natural_position: Option<Position>,
    pub secondary_position: Option<Position>,
    pub preferred_foot: Option<PreferredFoot>,
    /// New status; when set the capacity of the destination status is re-checked.
    pub status: Option<PlayerStatus>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub technical: Option<TechnicalSkills>,
    pub physical: Option<PhysicalSkills>,
    pub mental: Option<MentalSkills>,
    pub goalkeeper: Option<GoalkeeperSkills>,
    pub agent: Option<String>,
    pub current_club: Option<String>,
    pub contract_status: Option<String>,
    pub requires_loan_out: Option<bool>,
    pub transfer_interest: Option<bool>,
    pub priority_signing: Option<bool>,
}

impl UpdatePlayerParams {
    /// Validates a partial update DTO and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(UpdatePlayerParams)` - At least one field provided and all provided fields valid
    /// - `Err(AppError::BadRequest)` - The body carries no field to update
    /// - `Err(AppError::Validation)` - One or more provided fields are invalid
    pub fn from_dto(id: i32, dto: UpdatePlayerDto) -> Result<Self, AppError> {
        if dto.is_empty() {
            return Err(AppError::BadRequest(
                "No fields were provided to update".to_string(),
            ));
        }

        let mut errors = ValidationErrors::new();
        let personal = dto.personal_data;
        let football = dto.football_profile;

        // Present-but-blank required fields are rejected, absent ones are left untouched.
        let name = personal
            .name
            .and_then(|v| require_text(&mut errors, "personalData.name", Some(v)));
        let surname = personal
            .surname
            .and_then(|v| require_text(&mut errors, "personalData.surname", Some(v)));
        let first_nationality = personal.first_nationality.and_then(|v| {
            require_text(&mut errors, "personalData.firstNationality", Some(v))
        });
        let birth_date = parse_date(
            &mut errors,
            "personalData.birthDate",
            personal.birth_date.as_deref(),
        );
        if matches!(personal.children, Some(c) if c < 0) {
            errors.add(
                "personalData.children",
                "personalData.children must not be negative",
            );
        }

        let natural_position = parse_variant::<Position>(
            &mut errors,
            "footballProfile.naturalPosition",
            football.natural_position.as_deref(),
        );
        let secondary_position = parse_variant::<Position>(
            &mut errors,
            "footballProfile.secondaryPosition",
            football.secondary_position.as_deref(),
        );
        let preferred_foot = parse_variant::<PreferredFoot>(
            &mut errors,
            "footballProfile.preferredFoot",
            football.preferred_foot.as_deref(),
        );
        let status = parse_variant::<PlayerStatus>(
            &mut errors,
            "footballProfile.status",
            football.status.as_deref(),
        );

        check_min(&mut errors, "physical.height", dto.physical.height, MIN_HEIGHT, "m");
        check_min(&mut errors, "physical.weight", dto.physical.weight, MIN_WEIGHT, "kg");

        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            id,
            name,
            surname,
            img: personal.img,
            birth_date,
            first_nationality,
            second_nationality: personal.second_nationality,
            languages: personal.languages,
            marital_status: personal.marital_status,
            children: personal.children,
            natural_position,
            secondary_position,
            preferred_foot,
            status,
            height: dto.physical.height,
            weight: dto.physical.weight,
            technical: dto.attributes.technical,
            physical: dto.attributes.physical,
            mental: dto.attributes.mental,
            goalkeeper: dto.attributes.goalkeeper,
            agent: dto.contract.agent,
            current_club: dto.contract.current_club,
            contract_status: dto.contract.contract_status,
            requires_loan_out: dto.contract.requires_loan_out,
            transfer_interest: dto.contract.transfer_interest,
            priority_signing: dto.contract.priority_signing,
        })
    }
}

/// Parses the `estado` field of a status change request.
///
/// # Returns
/// - `Ok(PlayerStatus)` - Known status name
/// - `Err(AppError::BadRequest)` - Field missing or blank
/// - `Err(AppError::Validation)` - Unknown status name
pub fn parse_status_change(estado: Option<String>) -> Result<PlayerStatus, AppError> {
    let Some(raw) = estado.filter(|s| !s.trim().is_empty()) else {
        return Err(AppError::BadRequest("Status is required".to_string()));
    };

    let mut errors = ValidationErrors::new();
    match parse_variant::<PlayerStatus>(&mut errors, "estado", Some(raw.trim())) {
        Some(status) => Ok(status),
        None => Err(errors.into()),
    }
}
