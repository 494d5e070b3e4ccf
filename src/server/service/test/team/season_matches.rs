use super::*;

/// Tests the season fixture list of a team.
///
/// Verifies played matches show the score with a result letter and upcoming
/// ones show the kick-off time.
///
/// Expected: week 1 played "2-1", week 2 at "19:00"
#[tokio::test]
async fn labels_played_and_upcoming_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let next = WeekFactory::new(db, league.id, season.id)
        .week_number(2)
        .span(
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        )
        .build()
        .await?;
    let (home, away, _) = factory::create_played_match(db, &week, city.id, 2, 1).await?;
    factory::create_fixture(db, league.id, next.id, away.id, home.id).await?;

    let matches = TeamService::new(db)
        .season_matches(home.id, season.id)
        .await?;

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].week_number, 1);
    assert_eq!(matches[0].score, "2-1");
    assert_eq!(matches[0].result.as_deref(), Some("W"));
    assert_eq!(matches[1].score, "19:00");
    assert!(!matches[1].is_played);

    Ok(())
}

/// Tests a team without matches in the season.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn no_matches_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _, season, _) = factory::create_league_with_week(db).await?;
    let team = factory::create_team(db, city.id).await?;

    let result = TeamService::new(db).season_matches(team.id, season.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
