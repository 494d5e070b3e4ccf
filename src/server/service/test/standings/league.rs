use super::*;

/// Tests that penalty points can drop a winner below the loser.
///
/// Expected: the away side first, the home side on -1 with its penalty noted
#[tokio::test]
async fn penalty_reorders_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let (home, away, _) = factory::create_played_match(db, &week, city.id, 1, 0).await?;
    entity::team_penalty::ActiveModel {
        id: ActiveValue::NotSet,
        league_id: ActiveValue::Set(league.id),
        season_id: ActiveValue::Set(season.id),
        team_id: ActiveValue::Set(home.id),
        penalty_points: ActiveValue::Set(4),
        description: ActiveValue::Set(Some("Forfeit".to_string())),
    }
    .insert(db)
    .await?;

    let rows = StandingsService::new(db)
        .league(league.id, season.id, None)
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].team_id, away.id);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[1].team_id, home.id);
    assert_eq!(rows[1].points, -1);
    assert_eq!(rows[1].penalty_points, 4);
    assert_eq!(rows[1].penalty_description.as_deref(), Some("Forfeit"));
    assert!(rows.iter().all(|r| r.group_name == "League"));

    Ok(())
}

/// Tests that unplayed matches do not count.
///
/// Expected: Ok(empty table)
#[tokio::test]
async fn ignores_unplayed_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let home = factory::create_team(db, city.id).await?;
    let away = factory::create_team(db, city.id).await?;
    factory::create_fixture(db, league.id, week.id, home.id, away.id).await?;

    let rows = StandingsService::new(db)
        .league(league.id, season.id, None)
        .await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests filtering the table to one group.
///
/// Expected: only the teams of that group
#[tokio::test]
async fn group_filter_limits_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let group_a = factory::create_group(db, league.id, season.id, "A").await?;
    let group_b = factory::create_group(db, league.id, season.id, "B").await?;
    let teams = [
        factory::create_team(db, city.id).await?,
        factory::create_team(db, city.id).await?,
        factory::create_team(db, city.id).await?,
        factory::create_team(db, city.id).await?,
    ];
    FixtureFactory::new(db, league.id, week.id, teams[0].id, teams[1].id)
        .group_id(group_a.id)
        .score(2, 2)
        .build()
        .await?;
    FixtureFactory::new(db, league.id, week.id, teams[2].id, teams[3].id)
        .group_id(group_b.id)
        .score(0, 3)
        .build()
        .await?;

    let rows = StandingsService::new(db)
        .league(league.id, season.id, Some(group_b.id))
        .await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.group_id == Some(group_b.id)));
    assert_eq!(rows[0].team_id, teams[3].id);
    assert_eq!(rows[0].points, 3);

    Ok(())
}
