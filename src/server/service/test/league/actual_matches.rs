use super::*;

fn kickoff(m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, m, d, h, 0, 0).unwrap()
}

/// Tests that the week starting nearest to today is used, with matches
/// grouped by day.
///
/// Expected: week 2 with days "10.03" (two matches) then "12.03"; the league
/// without matches is skipped
#[tokio::test]
async fn groups_nearest_week_by_day() -> Result<(), AppError> {
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
    for (week_id, at) in [
        (first.id, kickoff(3, 4, 19)),
        (second.id, kickoff(3, 12, 18)),
        (second.id, kickoff(3, 10, 20)),
        (second.id, kickoff(3, 10, 18)),
    ] {
        FixtureFactory::new(db, league.id, week_id, home.id, away.id)
            .match_date(at)
            .build()
            .await?;
    }

    let idle = factory::create_league(db, city.id).await?;
    let idle_season = factory::create_season(db, idle.id).await?;
    factory::create_week(db, idle.id, idle_season.id).await?;

    let leagues = LeagueService::new(db)
        .actual_matches(city.id, date(2026, 3, 7))
        .await?;

    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].league_id, league.id);
    assert_eq!(leagues[0].week_id, second.id);
    assert_eq!(
        leagues[0]
            .days
            .iter()
            .map(|d| (d.date.as_str(), d.matches.len()))
            .collect::<Vec<_>>(),
        vec![("10.03", 2), ("12.03", 1)]
    );
    assert_eq!(leagues[0].days[0].full_date, date(2026, 3, 10));

    Ok(())
}
