//! CRUD surface of the site content and editorial collections

mod common;

use common::{hero_body, ids, product_body, service_body, spawn_app};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_health_is_public() {
    let app = spawn_app().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = app.get("/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["media_host"]["status"], "disabled");
    assert_eq!(body["collections"]["hero"], 0);
}

#[tokio::test]
async fn test_detailed_health_counts_ordered_collections() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    for (title, order) in [("a", 1), ("b", 2)] {
        app.send(Method::POST, "/api/admin/hero", Some(&token), Some(hero_body(title, order)))
            .await;
    }
    app.send(Method::POST, "/api/admin/products", Some(&token), Some(product_body("/one", 1)))
        .await;

    let (_, body) = app.get("/health/detailed").await;
    assert_eq!(body["collections"]["hero"], 2);
    assert_eq!(body["collections"]["products"], 1);
    assert_eq!(body["collections"]["services"], 0);
}

#[tokio::test]
async fn test_hero_lifecycle() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, slide) = app
        .send(Method::POST, "/api/admin/hero", Some(&token), Some(hero_body("launch", 1)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(slide["active"], true);
    assert_eq!(slide["imagePublicId"], "hero/launch");
    let id = slide["_id"].as_str().unwrap().to_string();
    let path = format!("/api/admin/hero/{id}");

    let (status, fetched) = app.get(&path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "launch");

    let (status, body) = app.send(Method::DELETE, &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hero slide deleted successfully");

    let (status, error) = app.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], 3001);

    let (status, _) = app.send(Method::DELETE, &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hero_requires_fields() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let mut body = hero_body("x", 1);
    body["title"] = json!("   ");
    let (status, error) = app
        .send(Method::POST, "/api/admin/hero", Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 7);

    let (_, list) = app.get("/api/admin/hero").await;
    assert!(ids(&list).is_empty());
}

#[tokio::test]
async fn test_malformed_path_id_is_rejected() {
    let app = spawn_app().await;

    let (status, _) = app.get("/api/admin/hero/product:abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_page_path_is_unique() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, _) = app
        .send(Method::POST, "/api/admin/products", Some(&token), Some(product_body("/crm", 1)))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = app
        .send(Method::POST, "/api/admin/products", Some(&token), Some(product_body("/crm", 2)))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], 3102);
}

#[tokio::test]
async fn test_product_needs_hero_image() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let mut body = product_body("/erp", 1);
    body["heroImage"] = json!({ "url": "https://res.example.com/a.png" });
    let (status, error) = app
        .send(Method::POST, "/api/admin/products", Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 7);
}

#[tokio::test]
async fn test_product_preview_and_showcase_items() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (_, product) = app
        .send(Method::POST, "/api/admin/products", Some(&token), Some(product_body("/pos", 1)))
        .await;
    let id = product["_id"].as_str().unwrap().to_string();
    let desktop = json!({ "url": "https://res.example.com/d.png", "publicId": "products/d" });

    let (status, updated) = app
        .send(
            Method::POST,
            &format!("/api/admin/products/{id}/preview"),
            Some(&token),
            Some(json!({ "title": "Dashboard", "desktop": desktop })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["previewItems"].as_array().unwrap().len(), 1);
    assert_eq!(updated["previewItems"][0]["title"], "Dashboard");

    let (status, error) = app
        .send(
            Method::POST,
            &format!("/api/admin/products/{id}/showcase"),
            Some(&token),
            Some(json!({ "title": "Reports", "desktop": desktop })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 7);

    let (status, updated) = app
        .send(
            Method::POST,
            &format!("/api/admin/products/{id}/showcase"),
            Some(&token),
            Some(json!({ "title": "Reports", "description": "Daily", "desktop": desktop })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["showcaseItems"].as_array().unwrap().len(), 1);
    assert_eq!(updated["previewItems"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_product_basic_update_keeps_sections() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let mut body = product_body("/hr", 1);
    body["cta"] = json!({ "text": "Book a demo", "secondaryText": "Pricing" });
    let (_, product) = app
        .send(Method::POST, "/api/admin/products", Some(&token), Some(body))
        .await;
    let path = format!("/api/admin/products/{}", product["_id"].as_str().unwrap());
    let desktop = json!({ "url": "https://res.example.com/d.png", "publicId": "products/hr-d" });
    app.send(
        Method::POST,
        &format!("{path}/preview"),
        Some(&token),
        Some(json!({ "title": "Payroll", "desktop": desktop })),
    )
    .await;

    let mut basic = product_body("/hr", 1);
    basic.as_object_mut().unwrap().remove("features");
    basic["title"] = json!("HR Suite");
    let (status, updated) = app.send(Method::PUT, &path, Some(&token), Some(basic)).await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["title"], "HR Suite");
    assert_eq!(updated["features"], json!(["Fast", "Simple"]));
    assert_eq!(updated["cta"]["text"], "Book a demo");
    assert_eq!(updated["previewItems"][0]["desktop"]["publicId"], "products/hr-d");

    let (_, fetched) = app.get(&path).await;
    assert_eq!(fetched["previewItems"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_service_basic_update_keeps_sections() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let mut body = service_body("consulting", 1);
    body["pagePath"] = json!("/services/consulting");
    body["slides"] = json!([{
        "title": "Plan",
        "content": "We plan with you",
        "image": { "url": "https://res.example.com/slide.png", "publicId": "services/slide-img" },
    }]);
    body["overviewCards"] = json!([{
        "title": "Audit",
        "description": "Full audit",
        "image": { "url": "https://res.example.com/card.png", "publicId": "services/card-img" },
    }]);
    body["benefits"] = json!(["fast"]);
    let (status, service) = app
        .send(Method::POST, "/api/admin/services", Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{service}");
    let path = format!("/api/admin/services/{}", service["_id"].as_str().unwrap());

    let mut basic = service_body("consulting", 1);
    basic["description"] = json!("Hands-on consulting");
    let (status, updated) = app.send(Method::PUT, &path, Some(&token), Some(basic)).await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["description"], "Hands-on consulting");
    assert_eq!(updated["pagePath"], "/services/consulting");
    assert_eq!(updated["benefits"], json!(["fast"]));

    let (_, fetched) = app.get(&path).await;
    assert_eq!(fetched["slides"][0]["image"]["publicId"], "services/slide-img");
    assert_eq!(fetched["overviewCards"][0]["image"]["publicId"], "services/card-img");

    let mut cleared = service_body("consulting", 1);
    cleared["benefits"] = json!([]);
    let (_, updated) = app.send(Method::PUT, &path, Some(&token), Some(cleared)).await;
    assert!(updated["benefits"].as_array().unwrap().is_empty());
    assert_eq!(updated["slides"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blog_crud() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, blog) = app
        .send(
            Method::POST,
            "/api/admin/blogs",
            Some(&token),
            Some(json!({
                "title": "Hello",
                "content": "First post",
                "imageUrl": "https://res.example.com/blog.png",
                "imagePublicId": "blogs/hello",
                "tags": ["news"],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{blog}");
    let path = format!("/api/admin/blogs/{}", blog["_id"].as_str().unwrap());

    let (status, list) = app.get("/api/admin/blogs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app.send(Method::DELETE, &path, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) = app.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], 4001);
}

#[tokio::test]
async fn test_logos_are_admin_only_and_unique() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, _) = app.get("/api/admin/logos").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let body = json!({ "name": "Acme", "imageUrl": "https://res.example.com/acme.png" });
    let (status, logo) = app
        .send(Method::POST, "/api/admin/logos", Some(&token), Some(body.clone()))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{logo}");

    let (status, error) = app
        .send(Method::POST, "/api/admin/logos", Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], 4102);

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/admin/logos/{}", logo["_id"].as_str().unwrap()),
            Some(&token),
            Some(json!({ "altText": "Acme Inc." })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Acme");
    assert_eq!(updated["altText"], "Acme Inc.");
}

#[tokio::test]
async fn test_contact_submission_flow() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, error) = app
        .send(
            Method::POST,
            "/api/contacts/public",
            None,
            Some(json!({ "name": "Ann", "email": "nope", "message": "Hi" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 5002);

    let (status, contact) = app
        .send(
            Method::POST,
            "/api/contacts/public",
            None,
            Some(json!({
                "name": "Ann",
                "email": "ann@example.com",
                "service": "Web design",
                "message": "Please call me",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{contact}");
    assert_eq!(contact["isRead"], false);

    let (status, _) = app.get("/api/admin/contacts").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, list) = app
        .send(Method::GET, "/api/admin/contacts", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, read) = app
        .send(
            Method::PUT,
            &format!("/api/admin/contacts/{}", contact["_id"].as_str().unwrap()),
            Some(&token),
            Some(json!({ "isRead": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["isRead"], true);
}

#[tokio::test]
async fn test_review_moderation() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, error) = app
        .send(
            Method::POST,
            "/api/reviews/public",
            None,
            Some(json!({ "reviewerName": "Bo", "rating": 6, "comment": "Great" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 4202);

    let (status, review) = app
        .send(
            Method::POST,
            "/api/reviews/public",
            None,
            Some(json!({ "reviewerName": "Bo", "rating": 5, "comment": "Great" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{review}");
    assert_eq!(review["status"], "pending");

    let (_, approved) = app.get("/api/reviews/public/approved").await;
    assert!(approved.as_array().unwrap().is_empty());

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/admin/reviews/{}", review["_id"].as_str().unwrap()),
            Some(&token),
            Some(json!({ "status": "approved" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "approved");
    assert_eq!(updated["comment"], "Great");

    let (_, approved) = app.get("/api/reviews/public/approved").await;
    assert_eq!(approved.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_contacts_admin_surface_under_both_prefixes() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, contact) = app
        .send(
            Method::POST,
            "/api/contacts/public",
            None,
            Some(json!({ "name": "Cy", "email": "cy@example.com", "message": "Quote please" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{contact}");
    let id = contact["_id"].as_str().unwrap().to_string();

    let (status, error) = app.get("/api/contacts").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["code"], 1001);

    let (status, list) = app.send(Method::GET, "/api/contacts", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![id.clone()]);

    let (status, fetched) = app
        .send(Method::GET, &format!("/api/contacts/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["email"], "cy@example.com");

    let (status, _) = app.get(&format!("/api/contacts/{id}")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/contacts/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app
        .send(Method::GET, "/api/admin/contacts", Some(&token), None)
        .await;
    assert!(ids(&list).is_empty());
}
