use super::*;

/// Tests incrementing stock up to exactly max.
///
/// Colorado Kuya has max 20 and quantity 10, so an increment of 10 fills it.
///
/// Expected: Ok with quantity 20
#[tokio::test]
async fn increments_to_max() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = service(db).create(colorado_kuya()).await?;
    let beer = service(db).increment(created.id, 10).await?;

    assert_eq!(beer.quantity, 20);
    assert!(beer.quantity <= beer.max);

    let stored = entity::prelude::Beer::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.quantity, 20);

    Ok(())
}

/// Tests incrementing a full beer by one.
///
/// Expected: Err(StockExceeded) and quantity unchanged
#[tokio::test]
async fn fails_when_already_full() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = service(db);
    let created = service.create(colorado_kuya()).await?;
    service.increment(created.id, 10).await?;
    let result = service.increment(created.id, 1).await;

    assert!(matches!(
        result,
        Err(AppError::BeerErr(BeerError::StockExceeded { amount: 1, .. }))
    ));
    assert_eq!(service.get_by_id(created.id).await?.quantity, 20);

    Ok(())
}

/// Tests an increment above the headroom but not above max.
///
/// 11 fits under max 20 on its own, but only 10 units of headroom remain.
///
/// Expected: Err(StockExceeded)
#[tokio::test]
async fn fails_when_amount_exceeds_headroom() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = service(db).create(colorado_kuya()).await?;
    let result = service(db).increment(created.id, 11).await;

    assert!(matches!(
        result,
        Err(AppError::BeerErr(BeerError::StockExceeded { amount: 11, .. }))
    ));

    Ok(())
}

/// Tests an increment above max itself.
///
/// Expected: Err(StockExceeded) even with an empty stock
#[tokio::test]
async fn fails_when_amount_exceeds_max() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::beer::BeerFactory::new(db)
        .max(20)
        .quantity(0)
        .build()
        .await?;
    let result = service(db).increment(created.id, 21).await;

    assert!(matches!(
        result,
        Err(AppError::BeerErr(BeerError::StockExceeded { amount: 21, .. }))
    ));

    Ok(())
}

/// Tests incrementing a beer that does not exist.
///
/// Expected: Err(NotFoundById)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = service(db).increment(999999, 1).await;

    assert!(matches!(
        result,
        Err(AppError::BeerErr(BeerError::NotFoundById(999999)))
    ));

    Ok(())
}

/// Tests that incrementing then decrementing by the same amount restores the stock.
///
/// Expected: Ok with the original quantity for every amount within headroom
#[tokio::test]
async fn round_trips_with_decrement() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = service(db);
    let created = service.create(colorado_kuya()).await?;

    for amount in 1..=created.headroom() {
        service.increment(created.id, amount).await?;
        let beer = service.decrement(created.id, amount).await?;
        assert_eq!(beer.quantity, created.quantity);
    }

    Ok(())
}

/// Tests incrementing by zero or a negative amount.
///
/// A negative increment would otherwise push the stock below zero.
///
/// Expected: Err(InvalidAmount) and quantity unchanged
#[tokio::test]
async fn fails_for_non_positive_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_beer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = service(db);
    let created = service.create(colorado_kuya()).await?;

    for amount in [0, -1, -15] {
        let result = service.increment(created.id, amount).await;

        assert!(matches!(
            result,
            Err(AppError::BeerErr(BeerError::InvalidAmount(a))) if a == amount
        ));
    }
    assert_eq!(service.get_by_id(created.id).await?.quantity, 10);

    Ok(())
}
