use super::*;

/// Tests deleting an existing player.
///
/// Expected: Ok(true) and the player is gone
#[tokio::test]
async fn deletes_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::create_player(db).await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.delete_by_id(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert_eq!(repo.count_by_status(PlayerStatus::Starter).await?, 0);

    Ok(())
}

/// Tests deleting a player that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(!repo.delete_by_id(404).await?);

    Ok(())
}
