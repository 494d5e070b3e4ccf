use super::*;

/// Tests that players, teams and leagues come back in that order.
///
/// Expected: [player "Kartal Demir", team "Kartallar", league "Kartal Ligi"]
#[tokio::test]
async fn returns_players_then_teams_then_leagues() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    LeagueFactory::new(db, city.id).name("Kartal Ligi").build().await?;
    let team = TeamFactory::new(db, city.id).name("Kartallar").build().await?;
    PlayerFactory::new(db, Some(team.id))
        .name("Kartal", "Demir")
        .build()
        .await?;
    TeamFactory::new(db, city.id).name("Şahinler").build().await?;

    let results = SearchService::new(db).search("kartal").await?;

    assert_eq!(
        results
            .iter()
            .map(|r| (r.result_type, r.name.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (SearchResultType::Player, "Kartal Demir"),
            (SearchResultType::Team, "Kartallar"),
            (SearchResultType::League, "Kartal Ligi"),
        ]
    );

    Ok(())
}

/// Tests that `_` and `%` in a query match only themselves.
///
/// Expected: Ok(empty) for "___" and "%%%", one team for "a_b"
#[tokio::test]
async fn wildcards_are_literal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    TeamFactory::new(db, city.id).name("Gençler").build().await?;
    TeamFactory::new(db, city.id).name("a_b United").build().await?;

    let service = SearchService::new(db);
    assert!(service.search("___").await?.is_empty());
    assert!(service.search("%%%").await?.is_empty());

    let literal = service.search("a_b").await?;
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].name, "a_b United");

    Ok(())
}

/// Tests case-insensitive matching of Turkish letters.
///
/// Expected: "ÇAĞLAYAN" and "çağlayan" both find team "Çağlayan Spor"
#[tokio::test]
async fn folds_non_ascii_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = TeamFactory::new(db, city.id)
        .name("Çağlayan Spor")
        .build()
        .await?;

    let service = SearchService::new(db);
    for query in ["ÇAĞLAYAN", "çağlayan"] {
        let results = service.search(query).await?;
        assert_eq!(results.len(), 1, "query {query}");
        assert_eq!(results[0].id, team.id);
        assert_eq!(results[0].result_type, SearchResultType::Team);
    }

    Ok(())
}

/// Tests a query that is too short once trimmed.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_short_query() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SearchService::new(db).search("  ab ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
