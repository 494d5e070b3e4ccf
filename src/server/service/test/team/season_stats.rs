use super::*;

/// Tests a team's season record and favourite flag.
///
/// Expected: one win and one loss, 3 points, favourite for the stored device
#[tokio::test]
async fn counts_record_and_favourite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let (home, away, _) = factory::create_played_match(db, &week, city.id, 3, 1).await?;
    FixtureFactory::new(db, league.id, week.id, away.id, home.id)
        .score(2, 0)
        .build()
        .await?;
    FavouriteRepository::new(db)
        .create(home.id, "token", "mac-9")
        .await?;

    let service = TeamService::new(db);
    let stats = service
        .season_stats(home.id, season.id, Some("mac-9"))
        .await?;

    assert_eq!(stats.played, 2);
    assert_eq!(stats.won, 1);
    assert_eq!(stats.lost, 1);
    assert_eq!(stats.goals_for, 3);
    assert_eq!(stats.goals_against, 3);
    assert_eq!(stats.points, 3);
    assert!(stats.is_favorite);

    let anonymous = service.season_stats(home.id, season.id, None).await?;
    assert!(!anonymous.is_favorite);

    Ok(())
}
