use super::*;

/// Tests which week is flagged current.
///
/// The current week is the first one that has not ended yet.
///
/// Expected: only week 2 flagged
#[tokio::test]
async fn flags_first_unfinished_week() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;
    let season = factory::create_season(db, league.id).await?;
    let first = WeekFactory::new(db, league.id, season.id)
        .span(date(2026, 3, 2), date(2026, 3, 8))
        .build()
        .await?;
    let second = WeekFactory::new(db, league.id, season.id)
        .week_number(2)
        .span(date(2026, 3, 9), date(2026, 3, 15))
        .build()
        .await?;
    let home = factory::create_team(db, city.id).await?;
    let away = factory::create_team(db, city.id).await?;
    factory::create_fixture(db, league.id, first.id, home.id, away.id).await?;

    let weeks = LeagueService::new(db)
        .weeks(league.id, season.id, None, date(2026, 3, 10))
        .await?;

    assert_eq!(weeks.len(), 2);
    assert!(!weeks[0].is_current_week);
    assert!(weeks[1].is_current_week);
    assert_eq!(weeks[1].week_id, second.id);
    assert_eq!(weeks[0].days.len(), 1);
    assert!(weeks[1].days.is_empty());

    Ok(())
}

/// Tests a season that belongs to another league.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn foreign_season_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;
    let other = factory::create_league(db, city.id).await?;
    let season = factory::create_season(db, other.id).await?;

    let result = LeagueService::new(db)
        .weeks(league.id, season.id, None, date(2026, 3, 10))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the day blocks when a group is selected.
///
/// Expected: one block for the selected group with its name, the ungrouped
/// match listed apart, the other group's match left out
#[tokio::test]
async fn blocks_selected_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let group_a = factory::create_group(db, league.id, season.id, "Group A").await?;
    let group_b = factory::create_group(db, league.id, season.id, "Group B").await?;
    let home = factory::create_team(db, city.id).await?;
    let away = factory::create_team(db, city.id).await?;
    let in_a = FixtureFactory::new(db, league.id, week.id, home.id, away.id)
        .group_id(group_a.id)
        .build()
        .await?;
    FixtureFactory::new(db, league.id, week.id, away.id, home.id)
        .group_id(group_b.id)
        .build()
        .await?;
    let friendly = factory::create_fixture(db, league.id, week.id, home.id, away.id).await?;

    let weeks = LeagueService::new(db)
        .weeks(league.id, season.id, Some(group_a.id), date(2026, 3, 10))
        .await?;

    assert_eq!(weeks[0].days.len(), 1);
    let day = &weeks[0].days[0];
    assert_eq!(day.grouped_matches.len(), 1);
    assert_eq!(day.grouped_matches[0].group_id, group_a.id);
    assert_eq!(day.grouped_matches[0].group_name, "Group A");
    assert_eq!(
        day.grouped_matches[0].matches.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![in_a.id]
    );
    assert_eq!(
        day.ungrouped_matches.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![friendly.id]
    );

    Ok(())
}
