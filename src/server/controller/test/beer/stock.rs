use super::*;

/// Tests PATCH increment within the headroom.
///
/// Expected: 200 with the updated quantity
#[tokio::test]
async fn increment_responds_ok() -> Result<(), sea_orm::DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let beer = factory::create_beer(db).await?;

    let uri = format!("/api/v1/beers/{}/increment", beer.id);
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"amount": 10}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 20);
    assert_eq!(body["name"], beer.name.as_str());
    assert_eq!(body["type"], "IPA");

    Ok(())
}

/// Tests PATCH increment past max.
///
/// Expected: 400 with the exceeded message
#[tokio::test]
async fn increment_responds_bad_request_when_exceeding_max() -> Result<(), sea_orm::DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let beer = factory::create_beer(db).await?;

    let uri = format!("/api/v1/beers/{}/increment", beer.id);
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"amount": 11}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        format!(
            "Beer with id {} has exceeded max stock when tried to increment by 11",
            beer.id
        )
    );

    Ok(())
}

/// Tests PATCH increment on an id that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn increment_responds_not_found_for_unknown_id() {
    let (_test, app) = setup().await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/v1/beers/999999/increment",
        Some(json!({"amount": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests PATCH increment with a missing or non-positive amount.
///
/// Expected: 400 for each payload
#[tokio::test]
async fn increment_responds_bad_request_for_invalid_amount() -> Result<(), sea_orm::DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let beer = factory::create_beer(db).await?;

    let uri = format!("/api/v1/beers/{}/increment", beer.id);
    for payload in [json!({}), json!({"amount": 0}), json!({"amount": -3})] {
        let (status, _) = send(&app, Method::PATCH, &uri, Some(payload.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
    }

    Ok(())
}

/// Tests PATCH decrement within the current stock.
///
/// Expected: 200 with the updated quantity
#[tokio::test]
async fn decrement_responds_ok() -> Result<(), sea_orm::DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let beer = factory::create_beer(db).await?;

    let uri = format!("/api/v1/beers/{}/decrement", beer.id);
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"amount": 10}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 0);

    Ok(())
}

/// Tests PATCH decrement below zero.
///
/// Expected: 400 with the negative stock message
#[tokio::test]
async fn decrement_responds_bad_request_when_going_negative() -> Result<(), sea_orm::DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let beer = factory::create_beer(db).await?;

    let uri = format!("/api/v1/beers/{}/decrement", beer.id);
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"amount": 11}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        format!(
            "Beer with id {} has yielded negative stock when tried to decrement by 11",
            beer.id
        )
    );

    Ok(())
}

/// Tests PATCH decrement with the legacy `quantity` field name.
///
/// Expected: 200 with the updated quantity
#[tokio::test]
async fn decrement_accepts_quantity_field() -> Result<(), sea_orm::DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let beer = factory::create_beer(db).await?;

    let uri = format!("/api/v1/beers/{}/decrement", beer.id);
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"quantity": 3}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 7);

    Ok(())
}

/// Tests PATCH decrement on an id that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn decrement_responds_not_found_for_unknown_id() {
    let (_test, app) = setup().await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/v1/beers/999999/decrement",
        Some(json!({"amount": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests both adjustments with an id that isn't a number.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn responds_bad_request_for_non_numeric_id() {
    let (_test, app) = setup().await;

    for uri in ["/api/v1/beers/abc/increment", "/api/v1/beers/abc/decrement"] {
        let (status, body) = send(&app, Method::PATCH, uri, Some(json!({"amount": 1}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert!(body["error"].is_string());
    }
}
