use super::*;

/// Tests case-insensitive matching across first and last name.
///
/// Expected: Ok with the single player whose full name contains "n ka"
#[tokio::test]
async fn matches_full_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let hakan = PlayerFactory::new(db, Some(team.id))
        .name("Hakan", "Kaya")
        .build()
        .await?;
    PlayerFactory::new(db, Some(team.id))
        .name("Mert", "Demir")
        .build()
        .await?;

    let found = PlayerRepository::new(db).search("N KA").await?;

    assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![hakan.id]);

    Ok(())
}

/// Tests queries made of LIKE wildcard characters.
///
/// Expected: Ok with no players, since no name contains `_` or `%`
#[tokio::test]
async fn wildcard_characters_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    PlayerFactory::new(db, Some(team.id))
        .name("Hakan", "Kaya")
        .build()
        .await?;
    PlayerFactory::new(db, Some(team.id))
        .name("Mert", "Demir")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.search("___").await?.is_empty());
    assert!(repo.search("%%%").await?.is_empty());

    Ok(())
}

/// Tests matching Turkish letters in a different case.
///
/// Expected: Ok with the player for both the lowercase and uppercase query
#[tokio::test]
async fn folds_turkish_letters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let player = PlayerFactory::new(db, Some(team.id))
        .name("Çağlar", "Öztürk")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    for query in ["çağlar", "ÖZTÜRK"] {
        let found = repo.search(query).await?;
        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![player.id]);
    }

    Ok(())
}
