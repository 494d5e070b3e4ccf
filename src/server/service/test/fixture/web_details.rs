use super::*;

/// Tests the web match page with squads split by side and formations.
///
/// Expected: one starter per side, own goal flagged, formation image kept
#[tokio::test]
async fn splits_squads_and_lists_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _, _, week) = factory::create_league_with_week(db).await?;
    let (home, away, fixture) = factory::create_played_match(db, &week, city.id, 1, 1).await?;
    let keeper = PlayerFactory::new(db, Some(home.id)).number(1).build().await?;
    let forward = PlayerFactory::new(db, Some(away.id)).number(9).build().await?;
    factory::create_squad_entry(db, fixture.id, keeper.id, home.id, true, 0).await?;
    factory::create_squad_entry(db, fixture.id, forward.id, away.id, true, 11).await?;
    GoalFactory::new(db, fixture.id, away.id, forward.id)
        .minute(30)
        .build()
        .await?;
    GoalFactory::new(db, fixture.id, home.id, forward.id)
        .minute(80)
        .own_goal()
        .build()
        .await?;
    entity::match_squad_formation::ActiveModel {
        match_id: ActiveValue::Set(fixture.id),
        team_id: ActiveValue::Set(home.id),
        formation_image: ActiveValue::Set("/formations/4-4-2.png".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let page = MatchService::new(db).web_details(fixture.id).await?;

    assert_eq!(page.summary.id, fixture.id);
    assert_eq!(page.summary.home_team_id, home.id);
    assert_eq!(
        page.home_squad.iter().map(|p| (p.player_id, p.number)).collect::<Vec<_>>(),
        vec![(keeper.id, Some(1))]
    );
    assert_eq!(
        page.away_squad.iter().map(|p| (p.player_id, p.number)).collect::<Vec<_>>(),
        vec![(forward.id, Some(11))]
    );
    assert_eq!(page.goals.len(), 2);
    assert!(!page.goals[0].is_own_goal);
    assert!(page.goals[1].is_own_goal);
    assert_eq!(page.goals[1].team_name, home.name);
    assert_eq!(page.formations.len(), 1);
    assert_eq!(page.formations[0].formation_image, "/formations/4-4-2.png");

    Ok(())
}

/// Tests an unknown match.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_match_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MatchService::new(db).web_details(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
