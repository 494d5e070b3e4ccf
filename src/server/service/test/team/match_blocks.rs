use super::*;

/// Tests one block per league week, ordered by league name then week.
///
/// Expected: [Alpha week 1, Alpha week 2, Beta week 1] with the team's
/// matches only
#[tokio::test]
async fn blocks_by_league_then_week() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let rival = factory::create_team(db, city.id).await?;
    let stranger = factory::create_team(db, city.id).await?;

    let beta = LeagueFactory::new(db, city.id).name("Beta").build().await?;
    let beta_season = factory::create_season(db, beta.id).await?;
    let beta_week = factory::create_week(db, beta.id, beta_season.id).await?;
    factory::create_fixture(db, beta.id, beta_week.id, team.id, rival.id).await?;

    let alpha = LeagueFactory::new(db, city.id).name("Alpha").build().await?;
    let alpha_season = factory::create_season(db, alpha.id).await?;
    let first = WeekFactory::new(db, alpha.id, alpha_season.id)
        .week_name("Opening")
        .build()
        .await?;
    let second = WeekFactory::new(db, alpha.id, alpha_season.id)
        .week_number(2)
        .span(date(2026, 3, 9), date(2026, 3, 15))
        .build()
        .await?;
    factory::create_fixture(db, alpha.id, second.id, rival.id, team.id).await?;
    factory::create_fixture(db, alpha.id, first.id, team.id, rival.id).await?;
    factory::create_fixture(db, alpha.id, first.id, rival.id, stranger.id).await?;

    let blocks = TeamService::new(db).match_blocks(team.id).await?;

    assert_eq!(
        blocks
            .iter()
            .map(|b| (b.league_name.as_str(), b.week_id))
            .collect::<Vec<_>>(),
        vec![
            ("Alpha", Some(first.id)),
            ("Alpha", Some(second.id)),
            ("Beta", Some(beta_week.id)),
        ]
    );
    assert_eq!(blocks[0].week_name.as_deref(), Some("Opening"));
    assert!(blocks
        .iter()
        .flat_map(|b| &b.matches)
        .all(|m| m.home_team_id == team.id || m.away_team_id == team.id));
    assert_eq!(blocks[0].matches.len(), 1);

    Ok(())
}

/// Tests a team without matches.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn no_matches_gives_no_blocks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;

    assert!(TeamService::new(db).match_blocks(team.id).await?.is_empty());

    Ok(())
}
