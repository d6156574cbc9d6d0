//! HTTP-level integration tests for the `/api/monasteries` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    admin_cookie, body_json, delete, delete_as, get, post_json, post_json_as, post_raw_as,
    put_json_as, visitor_cookie,
};
use sqlx::PgPool;

fn rumtek() -> serde_json::Value {
    serde_json::json!({
        "name": "Rumtek Monastery",
        "location": "Rumtek, 24 km from Gangtok",
        "district": "East Sikkim",
        "foundedYear": 1966,
        "history": "Rebuilt by the 16th Karmapa after leaving Tibet.",
        "rituals": ["Cham dance", "Losar prayers", "Mahakala puja"],
        "latitude": "27.28820000",
        "longitude": "88.56160000",
        "altitude": 1547,
        "entryFee": "10.00",
        "panoramicUrl": "https://tours.example.org/rumtek"
    })
}

async fn create(pool: &PgPool, cookie: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/monasteries", body, cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Admin gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_create_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/monasteries", rumtek()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin access required");
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_admin_create_is_forbidden(pool: PgPool) {
    let cookie = visitor_cookie(&pool).await;
    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/monasteries", rumtek(), &cookie).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin access required");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/monasteries").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_forbidden_wins_over_invalid_body(pool: PgPool) {
    let cookie = visitor_cookie(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_as(app, "/api/monasteries", serde_json::json!({}), &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_delete_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/monasteries/5b0f8e0a-4c4e-4d57-9a57-0b7f3c2b9d11").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_create_returns_201_with_id(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let json = create(&pool, &cookie, rumtek()).await;

    assert!(json["id"].as_str().is_some_and(|id| uuid::Uuid::parse_str(id).is_ok()));
    assert_eq!(json["name"], "Rumtek Monastery");
    assert_eq!(json["foundedYear"], 1966);
    assert_eq!(json["isActive"], true);
    assert_eq!(json["entryFee"], "10.00");
    assert_eq!(
        json["rituals"],
        serde_json::json!(["Cham dance", "Losar prayers", "Mahakala puja"])
    );
    assert!(json["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_id(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let created = create(&pool, &cookie, rumtek()).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/monasteries/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["district"], "East Sikkim");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/monasteries/5b0f8e0a-4c4e-4d57-9a57-0b7f3c2b9d11").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/monasteries/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let created = create(&pool, &cookie, rumtek()).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json_as(
        app,
        &format!("/api/monasteries/{id}"),
        serde_json::json!({"visitingHours": "6am - 6pm"}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["visitingHours"], "6am - 6pm");
    assert_eq!(json["name"], "Rumtek Monastery");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_null_clears_virtual_tour(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let created = create(&pool, &cookie, rumtek()).await;
    let uri = format!("/api/monasteries/{}", created["id"].as_str().unwrap());

    let app = common::build_test_app(pool.clone());
    let response = put_json_as(app, &uri, serde_json::json!({"panoramicUrl": null}), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["panoramicUrl"].is_null());
    // Keys left out of the body keep their values.
    assert_eq!(json["altitude"], 1547);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/monasteries?hasVirtualTour=false").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], created["id"]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/monasteries?hasVirtualTour=true").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_404(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let app = common::build_test_app(pool);
    let response = put_json_as(
        app,
        "/api/monasteries/5b0f8e0a-4c4e-4d57-9a57-0b7f3c2b9d11",
        serde_json::json!({"name": "Ghost"}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_succeeds(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_as(
        app,
        "/api/monasteries/5b0f8e0a-4c4e-4d57-9a57-0b7f3c2b9d11",
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_as(app, "/api/monasteries/garbage", &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_get_is_404(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let created = create(&pool, &cookie, rumtek()).await;
    let uri = format!("/api/monasteries/{}", created["id"].as_str().unwrap());

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete_as(app, &uri, &cookie).await.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    assert_eq!(get(app, &uri).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_are_a_conjunction(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    create(&pool, &cookie, rumtek()).await;

    let mut enchey = rumtek();
    enchey["name"] = "Enchey Monastery".into();
    enchey["history"] = "Blessed by Lama Druptob Karpo.".into();
    enchey["location"] = "Gangtok".into();
    enchey["panoramicUrl"] = serde_json::Value::Null;
    create(&pool, &cookie, enchey).await;

    let mut pemayangtse = rumtek();
    pemayangtse["name"] = "Pemayangtse Monastery".into();
    pemayangtse["district"] = "West Sikkim".into();
    pemayangtse["history"] = "One of the oldest monasteries.".into();
    pemayangtse["location"] = "Pelling".into();
    create(&pool, &cookie, pemayangtse).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get(app, "/api/monasteries?district=East%20Sikkim&hasVirtualTour=true").await,
    )
    .await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Rumtek Monastery"]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/monasteries").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    create(&pool, &cookie, rumtek()).await;

    let mut other = rumtek();
    other["name"] = "Lingdum Monastery".into();
    other["location"] = "Ranka".into();
    other["history"] = "Completed in 1999.".into();
    create(&pool, &cookie, other).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/monasteries?search=rUmTeK").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Rumtek Monastery");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_hidden_by_default(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let mut closed = rumtek();
    closed["isActive"] = false.into();
    create(&pool, &cookie, closed).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/monasteries").await).await;
    assert!(json.as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/monasteries?isActive=false").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unparseable_boolean_filter_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/monasteries?hasVirtualTour=maybe").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_body_returns_field_details(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let mut body = rumtek();
    body["district"] = "Darjeeling".into();
    body["latitude"] = "95".into();
    body["name"] = "".into();

    let app = common::build_test_app(pool);
    let response = post_json_as(app, "/api/monasteries", body, &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid data");
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<_> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["district", "latitude", "name"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entry_fee_too_large_for_column_is_400(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let mut body = rumtek();
    body["entryFee"] = serde_json::json!(1_000_000_000);

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/monasteries", body, &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["field"], "entryFee");

    let mut body = rumtek();
    body["entryFee"] = "99999999.99".into();
    let json = create(&pool, &cookie, body).await;
    assert_eq!(json["entryFee"], "99999999.99");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_is_invalid_data(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_as(
        app,
        "/api/monasteries",
        serde_json::json!({"name": "Half a monastery"}),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid data");
    assert_eq!(json["details"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_is_invalid_data(pool: PgPool) {
    let cookie = admin_cookie(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_raw_as(app, "/api/monasteries", "{\"name\": ", &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
