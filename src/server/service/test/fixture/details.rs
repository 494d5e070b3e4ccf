use super::*;

/// Tests the match details with goals, cards and the man of the match.
///
/// The man of the match scored once, put one into their own net and
/// assisted once. The own goal is not counted.
///
/// Expected: goals by minute, man of the match with 1 goal and 1 assist
#[tokio::test]
async fn man_of_the_match_goals_skip_own_goals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, _, week) = factory::create_league_with_week(db).await?;
    let home = factory::create_team(db, city.id).await?;
    let away = factory::create_team(db, city.id).await?;
    let captain = PlayerFactory::new(db, Some(home.id))
        .name("Emre", "Kaya")
        .build()
        .await?;
    let striker = factory::create_player(db, home.id).await?;
    let fixture = FixtureFactory::new(db, league.id, week.id, home.id, away.id)
        .score(2, 1)
        .man_of_the_match(captain.id)
        .build()
        .await?;
    GoalFactory::new(db, fixture.id, home.id, striker.id)
        .minute(70)
        .assist(captain.id)
        .build()
        .await?;
    GoalFactory::new(db, fixture.id, home.id, captain.id)
        .minute(10)
        .build()
        .await?;
    GoalFactory::new(db, fixture.id, away.id, captain.id)
        .minute(40)
        .own_goal()
        .build()
        .await?;
    factory::create_card(db, fixture.id, striker.id, CardType::Yellow, 55).await?;

    let details = MatchService::new(db).details(fixture.id).await?;

    assert_eq!(details.home_team.id, home.id);
    assert_eq!(details.away_team.id, away.id);
    assert_eq!(details.league_name, league.name);
    assert_eq!(
        details.goals.iter().map(|g| g.minute).collect::<Vec<_>>(),
        vec![10, 40, 70]
    );
    assert!(details.goals[1].is_own_goal);
    assert_eq!(details.goals[2].assist_player_name.as_deref(), Some("Emre Kaya"));
    assert_eq!(details.cards.len(), 1);
    assert_eq!(details.cards[0].player_id, striker.id);

    let mom = details.man_of_the_match.unwrap();
    assert_eq!(mom.player_id, captain.id);
    assert_eq!(mom.player_name, "Emre Kaya");
    assert_eq!(mom.team_name.as_deref(), Some(home.name.as_str()));
    assert_eq!(mom.goals, 1);
    assert_eq!(mom.assists, 1);

    Ok(())
}

/// Tests a match without an award and an unknown match.
///
/// Expected: no man of the match, then Err(NotFound)
#[tokio::test]
async fn without_award_and_missing_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _, _, week) = factory::create_league_with_week(db).await?;
    let (_, _, fixture) = factory::create_played_match(db, &week, city.id, 0, 0).await?;

    let service = MatchService::new(db);
    let details = service.details(fixture.id).await?;
    assert!(details.man_of_the_match.is_none());
    assert!(details.goals.is_empty());

    assert!(matches!(
        service.details(fixture.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
