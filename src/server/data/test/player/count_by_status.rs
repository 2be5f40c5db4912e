use super::*;

/// Tests counting on an empty table.
///
/// Expected: Ok(0) for every status
#[tokio::test]
async fn returns_zero_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.count_by_status(PlayerStatus::Starter).await?, 0);
    assert_eq!(repo.count_by_status(PlayerStatus::Released).await?, 0);

    Ok(())
}

/// Tests that counts are kept per status.
///
/// Expected: Ok with each status counted independently
#[tokio::test]
async fn counts_only_matching_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_players_with_status(db, PlayerStatus::Starter, 4).await?;
    factory::helpers::create_players_with_status(db, PlayerStatus::Substitute, 2).await?;
    factory::player::create_player_with_status(db, PlayerStatus::Injured).await?;

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.count_by_status(PlayerStatus::Starter).await?, 4);
    assert_eq!(repo.count_by_status(PlayerStatus::Substitute).await?, 2);
    assert_eq!(repo.count_by_status(PlayerStatus::Injured).await?, 1);
    assert_eq!(repo.count_by_status(PlayerStatus::Preselected).await?, 0);

    Ok(())
}

/// Tests that statuses are persisted under their names.
///
/// Expected: Ok with the row matched by the plain string column value
#[tokio::test]
async fn stores_status_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_status(db, PlayerStatus::Preselected).await?;

    let stored = entity::prelude::Player::find()
        .filter(entity::player::Column::Status.eq("Preselected"))
        .count(db)
        .await?;
    assert_eq!(stored, 1);

    let repo = PlayerRepository::new(db);
    assert_eq!(repo.count_by_status(PlayerStatus::Preselected).await?, 1);

    Ok(())
}
