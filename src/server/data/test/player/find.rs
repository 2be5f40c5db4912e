use super::*;

/// Tests getting an existing player by ID.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::PlayerFactory::new(db)
        .name("Andrea")
        .natural_position(Position::CDM)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.profile.name, "Andrea");
    assert_eq!(found.profile.natural_position, Position::CDM);

    Ok(())
}

/// Tests getting a player that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(repo.find_by_id(404).await?.is_none());

    Ok(())
}

/// Tests listing every player.
///
/// Expected: Ok with all players ordered by ID
#[tokio::test]
async fn lists_all_players_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::helpers::create_players_with_status(db, PlayerStatus::Released, 3).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.find_all().await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    let expected: Vec<i32> = created.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}
