use super::*;

/// Tests the tables of a team's season.
///
/// Expected: one table with the team's row marked
#[tokio::test]
async fn marks_the_team_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _, season, week) = factory::create_league_with_week(db).await?;
    let (home, _, _) = factory::create_played_match(db, &week, city.id, 2, 0).await?;

    let tables = StandingsService::new(db).team(home.id, season.id).await?;

    assert_eq!(tables.len(), 1);
    let marked: Vec<_> = tables[0].rows.iter().filter(|r| r.is_current_team).collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].team_id, home.id);

    Ok(())
}

/// Tests a team without matches in the season.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn team_without_matches_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _, season, _) = factory::create_league_with_week(db).await?;
    let idle = factory::create_team(db, city.id).await?;

    let result = StandingsService::new(db).team(idle.id, season.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
