//! Ordered collections over HTTP: listing order, reorder batches and dashboard moves

mod common;

use std::time::Duration;

use common::{TestApp, hero_body, ids, spawn_app};
use content_server::db::repository::{HeroSlideRepository, UpdateOutcome};
use content_server::ordering::OrderedRepository;
use http::{Method, StatusCode};
use serde_json::{Value, json};
use shared::models::HeroSlide;
use shared::ordering::{MoveDirection, plan_move};

async fn create_slide(app: &TestApp, token: &str, body: Value) -> String {
    let (status, slide) = app
        .send(Method::POST, "/api/admin/hero", Some(token), Some(body))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{slide}");
    // created_at is the tie-breaker; keep timestamps distinct
    tokio::time::sleep(Duration::from_millis(5)).await;
    slide["_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_list_is_public_and_sorted_by_order() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let c = create_slide(&app, &token, hero_body("c", 3)).await;
    let a = create_slide(&app, &token, hero_body("a", 1)).await;
    let b = create_slide(&app, &token, hero_body("b", 2)).await;

    let (status, list) = app.get("/api/admin/hero").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![a, b, c]);
}

#[tokio::test]
async fn test_equal_order_lists_newest_first() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let older = create_slide(&app, &token, hero_body("older", 0)).await;
    let newer = create_slide(&app, &token, hero_body("newer", 0)).await;

    let (_, list) = app.get("/api/admin/hero").await;
    assert_eq!(ids(&list), vec![newer, older]);
}

#[tokio::test]
async fn test_move_up_swaps_with_neighbour() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let x = create_slide(&app, &token, hero_body("x", 1)).await;
    let y = create_slide(&app, &token, hero_body("y", 2)).await;
    let z = create_slide(&app, &token, hero_body("z", 3)).await;

    let (_, list) = app.get("/api/admin/hero").await;
    let displayed: Vec<HeroSlide> = serde_json::from_value(list).unwrap();
    let pairs = plan_move(&displayed, &y, MoveDirection::Up).unwrap();

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/admin/hero/reorder",
            Some(&token),
            Some(json!({ "slides": pairs })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["updated"], 2);
    assert_eq!(body["skipped"], 0);
    assert_eq!(body["failed"], 0);

    let (_, list) = app.get("/api/admin/hero").await;
    assert_eq!(ids(&list), vec![y.clone(), x.clone(), z.clone()]);

    let slides: Vec<HeroSlide> = serde_json::from_value(list).unwrap();
    let order_of = |id: &str| slides.iter().find(|s| s.id == id).unwrap().order;
    assert_eq!(order_of(&y), 1);
    assert_eq!(order_of(&x), 2);
    assert_eq!(order_of(&z), 3);
}

#[tokio::test]
async fn test_moving_first_item_up_plans_nothing() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let first = create_slide(&app, &token, hero_body("first", 1)).await;
    create_slide(&app, &token, hero_body("second", 2)).await;

    let (_, list) = app.get("/api/admin/hero").await;
    let displayed: Vec<HeroSlide> = serde_json::from_value(list).unwrap();
    assert!(plan_move(&displayed, &first, MoveDirection::Up).is_none());
}

#[tokio::test]
async fn test_reorder_skips_unknown_ids() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let a = create_slide(&app, &token, hero_body("a", 1)).await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/admin/hero/reorder",
            Some(&token),
            Some(json!({
                "slides": [
                    { "_id": a, "order": 7 },
                    { "_id": "hero_slide:doesnotexist", "order": 1 },
                ]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Slides reordered successfully");
    assert_eq!(body["updated"], 1);
    assert_eq!(body["skipped"], 1);

    // no record was created for the unknown id
    let (_, list) = app.get("/api/admin/hero").await;
    assert_eq!(ids(&list), vec![a]);
    assert_eq!(list[0]["order"], 7);
}

#[tokio::test]
async fn test_reorder_after_delete_does_not_resurrect() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let kept = create_slide(&app, &token, hero_body("kept", 1)).await;
    let gone = create_slide(&app, &token, hero_body("gone", 2)).await;
    let (status, _) = app
        .send(Method::DELETE, &format!("/api/admin/hero/{gone}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // a dashboard still showing the deleted slide swaps it with its neighbour
    let (status, body) = app
        .send(
            Method::PUT,
            "/api/admin/hero/reorder",
            Some(&token),
            Some(json!({
                "slides": [
                    { "_id": kept, "order": 2 },
                    { "_id": gone, "order": 1 },
                ]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["updated"], 1);
    assert_eq!(body["skipped"], 1);
    assert_eq!(body["failed"], 0);

    let (_, list) = app.get("/api/admin/hero").await;
    assert_eq!(ids(&list), vec![kept]);

    let repo = HeroSlideRepository::new(app.state.db.clone());
    assert_eq!(repo.update_order(&gone, 5).await.unwrap(), UpdateOutcome::NotFound);
    assert!(repo.find_by_id(&gone).await.unwrap().is_none());
}

#[tokio::test]
async fn test_reorder_counts_foreign_ids_as_failed() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let a = create_slide(&app, &token, hero_body("a", 1)).await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/admin/hero/reorder",
            Some(&token),
            Some(json!({
                "items": [
                    { "_id": "product:abc", "order": 2 },
                    { "_id": a, "order": 5 },
                ]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["updated"], 1);
    assert_eq!(body["failed"], 1);
}

#[tokio::test]
async fn test_reorder_is_idempotent() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let a = create_slide(&app, &token, hero_body("a", 1)).await;
    let b = create_slide(&app, &token, hero_body("b", 2)).await;
    let batch = json!({ "slides": [{ "_id": a, "order": 2 }, { "_id": b, "order": 1 }] });

    for _ in 0..2 {
        let (status, _) = app
            .send(
                Method::PUT,
                "/api/admin/hero/reorder",
                Some(&token),
                Some(batch.clone()),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let (_, list) = app.get("/api/admin/hero").await;
        assert_eq!(ids(&list), vec![b.clone(), a.clone()]);
    }
}

#[tokio::test]
async fn test_reorder_rejects_malformed_body() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    for body in [
        json!({ "slides": "not-a-list" }),
        json!({ "slides": [{ "_id": "hero_slide:a" }] }),
        json!({ "something": [] }),
    ] {
        let (status, error) = app
            .send(Method::PUT, "/api/admin/hero/reorder", Some(&token), Some(body))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], 3301);
    }
}

#[tokio::test]
async fn test_empty_reorder_batch_is_ok() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/admin/hero/reorder",
            Some(&token),
            Some(json!({ "slides": [] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 0);
}

#[tokio::test]
async fn test_reorder_needs_admin() {
    let app = spawn_app().await;
    let body = json!({ "slides": [] });

    let (status, error) = app
        .send(Method::PUT, "/api/admin/hero/reorder", None, Some(body.clone()))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["code"], 1001);

    let editor = app.token_for("editor", false).await;
    let (status, error) = app
        .send(Method::PUT, "/api/admin/hero/reorder", Some(&editor), Some(body))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error["code"], 2003);
}

#[tokio::test]
async fn test_active_filter_keeps_display_order() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let mut hidden = hero_body("hidden", 1);
    hidden["active"] = json!(false);
    let hidden = create_slide(&app, &token, hidden).await;
    let a = create_slide(&app, &token, hero_body("a", 2)).await;
    let b = create_slide(&app, &token, hero_body("b", 3)).await;

    let (_, all) = app.get("/api/admin/hero").await;
    assert_eq!(ids(&all), vec![hidden.clone(), a.clone(), b.clone()]);

    let (_, active) = app.get("/api/admin/hero?active=true").await;
    assert_eq!(ids(&active), vec![a, b]);

    let (_, inactive) = app.get("/api/admin/hero?active=false").await;
    assert_eq!(ids(&inactive), vec![hidden]);
}

#[tokio::test]
async fn test_update_without_order_keeps_position() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let a = create_slide(&app, &token, hero_body("a", 4)).await;

    let mut body = hero_body("renamed", 0);
    body.as_object_mut().unwrap().remove("order");
    let (status, slide) = app
        .send(Method::PUT, &format!("/api/admin/hero/{a}"), Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::OK, "{slide}");
    assert_eq!(slide["title"], "renamed");
    assert_eq!(slide["order"], 4);
    assert_eq!(slide["active"], true);
}

#[tokio::test]
async fn test_products_reorder_accepts_collection_key() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let mut created = Vec::new();
    for (path, order) in [("/p1", 1), ("/p2", 2)] {
        let (status, product) = app
            .send(
                Method::POST,
                "/api/admin/products",
                Some(&token),
                Some(common::product_body(path, order)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{product}");
        created.push(product["_id"].as_str().unwrap().to_string());
    }

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/admin/products/reorder",
            Some(&token),
            Some(json!({
                "products": [
                    { "_id": created[0], "order": 2 },
                    { "_id": created[1], "order": 1 },
                ]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Products reordered successfully");

    let (_, list) = app.get("/api/admin/products").await;
    assert_eq!(ids(&list), vec![created[1].clone(), created[0].clone()]);
}

#[tokio::test]
async fn test_services_reorder_accepts_items_key() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let mut created = Vec::new();
    for (title, order) in [("web", 1), ("seo", 2), ("ads", 3)] {
        let (status, service) = app
            .send(
                Method::POST,
                "/api/admin/services",
                Some(&token),
                Some(common::service_body(title, order)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{service}");
        created.push(service["_id"].as_str().unwrap().to_string());
    }

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/admin/services/reorder",
            Some(&token),
            Some(json!({ "items": [{ "id": created[2], "order": 0 }] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Services reordered successfully");

    let (_, list) = app.get("/api/admin/services").await;
    assert_eq!(
        ids(&list),
        vec![created[2].clone(), created[0].clone(), created[1].clone()]
    );
}
