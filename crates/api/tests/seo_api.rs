//! Integration tests for robots.txt and sitemap.xml.

mod common;

use axum::http::StatusCode;
use common::{body_text, get};
use sqlx::PgPool;
use vitrina_db::models::category::{CreateCategory, CreateSubcategory};
use vitrina_db::repositories::{CategoryRepo, SubcategoryRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn robots_txt_references_sitemap(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/robots.txt").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_text(response).await;
    assert!(body.contains("Sitemap: http://testserver/sitemap.xml"));
    assert!(body.contains("Disallow: /admin/"));
    assert!(body.contains("Crawl-delay: 1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sitemap_covers_home_categories_and_subcategories(pool: PgPool) {
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

    let app = common::build_test_app(pool);
    let response = get(app, "/sitemap.xml").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/xml"));

    let body = body_text(response).await;
    assert!(body.contains("<loc>http://testserver/</loc>"));
    assert!(body.contains(&format!("<loc>http://testserver/categoria/{}/</loc>", cat.id)));
    assert!(body.contains(&format!(
        "<loc>http://testserver/subcategoria/{}/</loc>",
        sub.id
    )));
}
