use super::*;

/// Tests inserting a batch of players.
///
/// Expected: Ok with IDs assigned in input order and fields persisted
#[tokio::test]
async fn inserts_every_player_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let players = repo
        .insert_batch(vec![
            create_params("First", PlayerStatus::Starter),
            create_params("Second", PlayerStatus::Preselected),
        ])
        .await?;

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].profile.name, "First");
    assert_eq!(players[1].profile.name, "Second");
    assert!(players[0].id < players[1].id);
    assert_eq!(players[1].status(), PlayerStatus::Preselected);
    assert_eq!(players[0].profile.languages, vec!["Spanish".to_string()]);

    let stored = entity::prelude::Player::find().count(db).await?;
    assert_eq!(stored, 2);

    Ok(())
}

/// Tests that skill groups survive the JSON column round trip.
///
/// Expected: Ok with the set skills read back
#[tokio::test]
async fn persists_skill_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = create_params("Skilled", PlayerStatus::Substitute);
    params.profile.technical.dribbling = true;
    params.profile.mental.vision = true;

    let repo = PlayerRepository::new(db);
    let inserted = repo.insert_batch(vec![params]).await?;

    let found = repo.find_by_id(inserted[0].id).await?.unwrap();
    assert!(found.profile.technical.dribbling);
    assert!(!found.profile.technical.heading);
    assert!(found.profile.mental.vision);

    Ok(())
}

/// Tests that a batch inserted in a dropped transaction leaves nothing behind.
///
/// Expected: Ok with zero stored players after rollback
#[tokio::test]
async fn uncommitted_batch_is_rolled_back() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    PlayerRepository::new(&txn)
        .insert_batch(vec![
            create_params("Ghost", PlayerStatus::Starter),
            create_params("Phantom", PlayerStatus::Starter),
        ])
        .await?;
    txn.rollback().await?;

    let repo = PlayerRepository::new(db);
    assert_eq!(repo.count_by_status(PlayerStatus::Starter).await?, 0);

    Ok(())
}
