use super::*;

/// Tests inserting a beer without an id.
///
/// Verifies that the repository assigns an id and stores every field,
/// with the type written as its upper-case name.
///
/// Expected: Ok with new beer
#[tokio::test]
async fn inserts_beer_without_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let beer = repo.save(new_param("Colorado Kuya")).await?;

    assert!(beer.id > 0);
    assert_eq!(beer.name, "Colorado Kuya");
    assert_eq!(beer.max, 20);
    assert_eq!(beer.quantity, 10);
    assert_eq!(beer.beer_type, BeerType::Ipa);

    let stored = entity::prelude::Beer::find_by_id(beer.id).one(db).await?.unwrap();
    assert_eq!(stored.beer_type, "IPA");

    Ok(())
}

/// Tests saving a beer that carries an existing id.
///
/// Verifies that the record is replaced in place rather than a second
/// record being inserted.
///
/// Expected: Ok with the same id and new field values
#[tokio::test]
async fn replaces_beer_with_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_beer(db).await?;

    let repo = BeerRepository::new(db);
    let param = BeerParam {
        name: "Guinness".to_string(),
        brand: "Guinness".to_string(),
        max: 50,
        quantity: 5,
        beer_type: BeerType::Stout,
        ..new_param("unused")
    }
    .with_id(existing.id);
    let beer = repo.save(param).await?;

    assert_eq!(beer.id, existing.id);
    assert_eq!(beer.name, "Guinness");
    assert_eq!(beer.beer_type, BeerType::Stout);

    let all = entity::prelude::Beer::find().all(db).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].quantity, 5);

    Ok(())
}

/// Tests that saving does not check name uniqueness.
///
/// Uniqueness is a service rule, the table accepts duplicate names.
///
/// Expected: Ok with two records
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeerRepository::new(db);
    let first = repo.save(new_param("Colorado Kuya")).await?;
    let second = repo.save(new_param("Colorado Kuya")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
