use super::*;

/// Tests that a team lists every league it played in with those seasons.
///
/// Expected: leagues [Alpha, Beta] by name; Alpha's seasons newest name first
#[tokio::test]
async fn lists_leagues_with_seasons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let rival = factory::create_team(db, city.id).await?;

    let beta = LeagueFactory::new(db, city.id).name("Beta").build().await?;
    let beta_season = factory::create_season(db, beta.id).await?;
    let beta_week = factory::create_week(db, beta.id, beta_season.id).await?;
    factory::create_fixture(db, beta.id, beta_week.id, rival.id, team.id).await?;

    let alpha = LeagueFactory::new(db, city.id).name("Alpha").build().await?;
    for name in ["2025", "2026"] {
        let season = SeasonFactory::new(db, alpha.id).name(name).build().await?;
        let week = factory::create_week(db, alpha.id, season.id).await?;
        factory::create_fixture(db, alpha.id, week.id, team.id, rival.id).await?;
    }
    let unplayed = SeasonFactory::new(db, alpha.id).name("2027").build().await?;
    factory::create_week(db, alpha.id, unplayed.id).await?;

    let leagues = TeamService::new(db).leagues(team.id).await?;

    assert_eq!(leagues.team_id, team.id);
    assert_eq!(
        leagues
            .leagues
            .iter()
            .map(|l| l.league_name.as_str())
            .collect::<Vec<_>>(),
        vec!["Alpha", "Beta"]
    );
    assert_eq!(
        leagues.leagues[0]
            .seasons
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>(),
        vec!["2026", "2025"]
    );
    assert_eq!(leagues.leagues[1].seasons.len(), 1);

    Ok(())
}

/// Tests a team without matches and an unknown team.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn team_without_matches_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;

    let service = TeamService::new(db);
    assert!(matches!(
        service.leagues(team.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.leagues(team.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
