use super::*;

/// Tests that the captain is the captain-type user linked to a team player.
///
/// Expected: Ok(Some(captain)) even though a plain player user is linked first
#[tokio::test]
async fn finds_captain_among_linked_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let player_user = factory::create_user(db, UserType::Player).await?;
    let captain_user = factory::create_user(db, UserType::Captain).await?;
    PlayerFactory::new(db, Some(team.id))
        .user_id(player_user.id.clone())
        .build()
        .await?;
    PlayerFactory::new(db, Some(team.id))
        .user_id(captain_user.id.clone())
        .build()
        .await?;

    let captain = AppUserRepository::new(db).find_captain_of_team(team.id).await?;

    assert_eq!(captain.map(|u| u.id), Some(captain_user.id));

    Ok(())
}

/// Tests a captain linked to a different team.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_captains_of_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let other = factory::create_team(db, city.id).await?;
    let captain_user = factory::create_user(db, UserType::Captain).await?;
    PlayerFactory::new(db, Some(other.id))
        .user_id(captain_user.id.clone())
        .build()
        .await?;

    let captain = AppUserRepository::new(db).find_captain_of_team(team.id).await?;

    assert!(captain.is_none());

    Ok(())
}
