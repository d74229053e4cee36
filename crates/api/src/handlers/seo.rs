//! robots.txt and sitemap.xml handlers.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use vitrina_core::seo;
use vitrina_db::repositories::{CategoryRepo, SubcategoryRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    let sitemap_url = format!("{}/sitemap.xml", state.config.public_base_url);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::robots_txt(&sitemap_url),
    )
}

/// GET /sitemap.xml
///
/// Covers the landing page plus every category and subcategory.
pub async fn sitemap(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let base = state.config.public_base_url.as_str();

    let mut urls = vec![seo::home_url(base)];
    for category in CategoryRepo::list_all(&state.pool).await? {
        urls.push(seo::category_url(base, category.id));
    }
    for subcategory in SubcategoryRepo::list_all(&state.pool).await? {
        urls.push(seo::subcategory_url(base, subcategory.id));
    }

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        seo::sitemap_xml(&urls),
    ))
}
