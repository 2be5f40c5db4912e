use super::*;

/// Tests a partial update.
///
/// Expected: Ok(Some) with only the provided fields changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update_by_id(UpdatePlayerParams {
            id: created.id,
            surname: Some("Renamed".to_string()),
            height: Some(1.91),
            technical: Some(TechnicalSkills {
                passing: true,
                ..Default::default()
            }),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.profile.surname, "Renamed");
    assert_eq!(updated.profile.height, Some(1.91));
    assert!(updated.profile.technical.passing);
    assert_eq!(updated.profile.name, created.name);
    assert_eq!(updated.status(), PlayerStatus::Starter);

    Ok(())
}

/// Tests updating a player that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo
        .update_by_id(UpdatePlayerParams {
            id: 404,
            name: Some("Nobody".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests changing only the status.
///
/// Expected: Ok(Some) with the new status and counts moved between categories
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::player::create_player_with_status(db, PlayerStatus::Substitute).await?;

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update_status_by_id(created.id, PlayerStatus::Suspended)
        .await?
        .unwrap();

    assert_eq!(updated.status(), PlayerStatus::Suspended);
    assert_eq!(updated.profile.surname, created.surname);
    assert_eq!(repo.count_by_status(PlayerStatus::Substitute).await?, 0);
    assert_eq!(repo.count_by_status(PlayerStatus::Suspended).await?, 1);

    Ok(())
}
