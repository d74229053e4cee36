//! Integration tests for the landing page.

mod common;

use axum::http::StatusCode;
use common::{body_text, get};
use sqlx::PgPool;
use vitrina_db::models::category::{CreateCategory, CreateSubcategory};
use vitrina_db::models::photo::CreatePhoto;
use vitrina_db::repositories::{CategoryRepo, PhotoRepo, SubcategoryRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn landing_page_renders_catalog_and_captcha(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &CreateCategory { name: "HOGAR".into() })
        .await
        .unwrap();
    let sub = SubcategoryRepo::create(
        &pool,
        &CreateSubcategory {
            category_id: cat.id,
            name: "Cocinas".into(),
        },
    )
    .await
    .unwrap();
    PhotoRepo::create(
        &pool,
        &CreatePhoto {
            subcategory_id: sub.id,
            image_path: "hogar/cocina.jpg".into(),
            description: None,
            sort_order: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_text(response).await;
    assert!(body.contains("<h2>HOGAR</h2>"));
    assert!(body.contains("Cocinas"));
    assert!(body.contains("/media/hogar/cocina.jpg"));
    assert!(body.contains("name=\"captcha_0\""));
    assert!(body.contains("\u{00bf}Cu\u{00e1}nto es"));

    // Rendering stored exactly one pending challenge.
    let challenges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM captcha_challenges")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(challenges, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn landing_page_renders_with_empty_catalog(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Vitrina Modular"));
    assert!(body.contains("id=\"contacto\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn captcha_refresh_issues_a_stored_challenge(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let request = axum::http::Request::builder()
        .method(axum::http::Method::POST)
        .uri("/captcha/refresh/")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    let key = json["key"].as_str().unwrap();
    assert_eq!(key.len(), 32);
    assert!(json["question"].as_str().unwrap().contains("Cu\u{00e1}nto es"));

    let stored: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM captcha_challenges WHERE key = $1")
            .bind(key)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, 1);
}
