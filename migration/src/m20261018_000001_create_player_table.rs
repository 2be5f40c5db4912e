use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(string(Player::Surname))
                    .col(string_null(Player::Img))
                    .col(date(Player::BirthDate))
                    .col(string(Player::FirstNationality))
                    .col(string_null(Player::SecondNationality))
                    .col(json(Player::Languages))
                    .col(string_null(Player::MaritalStatus))
                    .col(integer_null(Player::Children))
                    .col(string(Player::NaturalPosition))
                    .col(string_null(Player::SecondaryPosition))
                    .col(string_null(Player::PreferredFoot))
                    .col(string(Player::Status).default("Starter"))
                    .col(double_null(Player::Height))
                    .col(double_null(Player::Weight))
                    .col(json(Player::TechnicalSkills))
                    .col(json(Player::PhysicalSkills))
                    .col(json(Player::MentalSkills))
                    .col(json(Player::GoalkeeperSkills))
                    .col(string_null(Player::Agent))
                    .col(string_null(Player::CurrentClub))
                    .col(string_null(Player::ContractStatus))
                    .col(boolean_null(Player::RequiresLoanOut))
                    .col(boolean_null(Player::TransferInterest))
                    .col(boolean_null(Player::PrioritySigning))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Surname,
    Img,
    BirthDate,
    FirstNationality,
    SecondNationality,
    Languages,
    MaritalStatus,
    Children,
    NaturalPosition,
    SecondaryPosition,
    PreferredFoot,
    Status,
    Height,
    Weight,
    TechnicalSkills,
    PhysicalSkills,
    MentalSkills,
    GoalkeeperSkills,
    Agent,
    CurrentClub,
    ContractStatus,
    RequiresLoanOut,
    TransferInterest,
    PrioritySigning,
}
