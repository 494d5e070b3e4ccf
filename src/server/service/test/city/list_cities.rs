use super::*;

/// Tests the city list order.
///
/// Expected: ascending display order, ties broken by name
#[tokio::test]
async fn orders_by_display_order_then_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CityFactory::new(db).name("Nicosia").order_no(2).build().await?;
    CityFactory::new(db).name("Limassol").order_no(2).build().await?;
    CityFactory::new(db).name("Kyrenia").order_no(1).build().await?;

    let cities = CityService::new(db).list_cities().await?;
    let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, vec!["Kyrenia", "Limassol", "Nicosia"]);

    Ok(())
}
