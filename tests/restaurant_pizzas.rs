mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

fn rejected() -> serde_json::Value {
    json!({ "errors": ["validation errors"] })
}

#[tokio::test]
async fn creates_menu_item_with_nested_objects() {
    let (app, pool) = seeded_app().await;
    let before = menu_item_count(&pool, 1).await;

    let (status, body) = post_json(
        &app,
        "/restaurant_pizzas",
        &json!({ "price": 15, "pizza_id": 1, "restaurant_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 5,
            "price": 15,
            "pizza": { "id": 1, "name": "Margherita", "ingredients": "Dough, Tomato Sauce, Cheese" },
            "restaurant": { "id": 1, "name": "Karen's Pizza Shack", "address": "123 Main St" }
        })
    );
    assert_eq!(menu_item_count(&pool, 1).await, before + 1);

    let (_, detail) = get(&app, "/restaurants/1").await;
    assert_eq!(detail["restaurant_pizzas"].as_array().unwrap().len() as i64, before + 1);
}

#[tokio::test]
async fn accepts_alias_spellings_and_numeric_strings() {
    let (app, _pool) = seeded_app().await;
    let (status, body) = post_json(
        &app,
        "/restaurant_pizzas",
        &json!({ "Price": "7", "pizzaId": 3, "RestaurantId": "2" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], 7);
    assert_eq!(body["pizza"]["name"], "California");
    assert_eq!(body["restaurant"]["name"], "Sanjay's Pizza");
}

#[tokio::test]
async fn price_out_of_range_is_rejected() {
    let (app, pool) = seeded_app().await;
    for price in [0, 31, -1] {
        let (status, body) = post_json(
            &app,
            "/restaurant_pizzas",
            &json!({ "price": price, "pizza_id": 1, "restaurant_id": 1 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, rejected());
    }
    assert_eq!(menu_item_count(&pool, 1).await, 2);
}

#[tokio::test]
async fn boundary_prices_are_accepted() {
    let (app, _pool) = seeded_app().await;
    for price in [1, 30] {
        let (status, body) = post_json(
            &app,
            "/restaurant_pizzas",
            &json!({ "price": price, "pizza_id": 2, "restaurant_id": 3 }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["price"], price);
    }
}

#[tokio::test]
async fn dangling_references_are_rejected() {
    let (app, _pool) = seeded_app().await;
    for body in [
        json!({ "price": 10, "pizza_id": 9999, "restaurant_id": 1 }),
        json!({ "price": 10, "pizza_id": 1, "restaurant_id": 9999 }),
    ] {
        let (status, res) = post_json(&app, "/restaurant_pizzas", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(res, rejected());
    }
}

#[tokio::test]
async fn missing_and_mistyped_fields_are_rejected() {
    let (app, _pool) = seeded_app().await;
    for body in [
        json!({ "pizza_id": 1, "restaurant_id": 1 }),
        json!({ "price": 10, "restaurant_id": 1 }),
        json!({ "price": 10, "pizza_id": 1 }),
        json!({ "price": null, "pizza_id": 1, "restaurant_id": 1 }),
        json!({ "price": "ten", "pizza_id": 1, "restaurant_id": 1 }),
        json!({ "price": 10, "pizza_id": [1], "restaurant_id": 1 }),
        json!([{ "price": 10, "pizza_id": 1, "restaurant_id": 1 }]),
    ] {
        let (status, res) = post_json(&app, "/restaurant_pizzas", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(res, rejected());
    }
}

#[tokio::test]
async fn non_json_requests_are_rejected() {
    let (app, _pool) = seeded_app().await;

    let (status, res) = post_raw(
        &app,
        "/restaurant_pizzas",
        "text/plain",
        r#"{"price": 10, "pizza_id": 1, "restaurant_id": 1}"#.into(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res, rejected());

    let (status, res) = post_raw(&app, "/restaurant_pizzas", "application/json", "{price: 10".into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res, rejected());
}

#[tokio::test]
async fn insert_failure_is_rolled_back_and_rejected() {
    let (app, pool) = seeded_app().await;
    sqlx::query("DROP TABLE restaurant_pizzas").execute(&pool).await.unwrap();

    let (status, res) = post_json(
        &app,
        "/restaurant_pizzas",
        &json!({ "price": 10, "pizza_id": 1, "restaurant_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res, rejected());

    // the single pooled connection is usable again, so the transaction was released
    let (status, _) = get(&app, "/pizzas").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn large_valid_body_is_accepted() {
    let (app, pool) = seeded_app().await;
    let body = json!({
        "price": 10,
        "pizza_id": 1,
        "restaurant_id": 1,
        "note": "x".repeat(70 * 1024)
    });

    let (status, res) = post_sized(&app, "/restaurant_pizzas", body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(res["price"], 10);
    assert_eq!(menu_item_count(&pool, 1).await, 3);
}

#[tokio::test]
async fn body_over_extractor_limit_gets_generic_rejection() {
    let (app, pool) = seeded_app().await;
    let body = json!({
        "price": 10,
        "pizza_id": 1,
        "restaurant_id": 1,
        "note": "x".repeat(3 * 1024 * 1024)
    });

    let (status, res) = post_sized(&app, "/restaurant_pizzas", body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res, rejected());
    assert_eq!(menu_item_count(&pool, 1).await, 2);
}
