pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// GET  /                                   landing page
/// POST /contacto/                          contact submission
/// GET  /api/subcategoria/{id}/fotos/       ordered photo list
/// POST /captcha/refresh/                   fresh captcha challenge
/// GET  /robots.txt                         robots directives
/// GET  /sitemap.xml                        sitemap
/// GET  /media/{*path}                      media (volume, then local fallback)
/// GET  /static/*                           static assets
/// ```
pub fn public_routes(static_root: &std::path::Path) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/contacto/", post(handlers::contact::submit))
        .route(
            "/api/subcategoria/{id}/fotos/",
            get(handlers::photo::list_by_subcategory),
        )
        .route("/captcha/refresh/", post(handlers::captcha::refresh))
        .route("/robots.txt", get(handlers::seo::robots))
        .route("/sitemap.xml", get(handlers::seo::sitemap))
        .route("/media/{*path}", get(handlers::media::serve))
        .nest_service("/static", ServeDir::new(static_root))
}

/// Build the `/api/admin` route tree. Every handler takes the
/// `RequireAdmin` extractor.
///
/// ```text
/// GET    /categories                              list
/// POST   /categories                              create
/// PUT    /categories/{id}                         rename
/// DELETE /categories/{id}                         delete (cascades)
/// GET    /categories/{category_id}/subcategories  list
/// POST   /categories/{category_id}/subcategories  create
/// PUT    /subcategories/{id}                      rename
/// DELETE /subcategories/{id}                      delete (cascades)
/// POST   /photos                                  multipart upload
/// PUT    /photos/{id}                             edit metadata
/// DELETE /photos/{id}                             delete row + asset
/// GET    /contacts                                list inquiries
/// DELETE /contacts/{id}                           delete inquiry
/// ```
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(handlers::category::list).post(handlers::category::create),
        )
        .route(
            "/categories/{id}",
            put(handlers::category::update).delete(handlers::category::delete),
        )
        .route(
            "/categories/{category_id}/subcategories",
            get(handlers::category::list_subcategories)
                .post(handlers::category::create_subcategory),
        )
        .route(
            "/subcategories/{id}",
            put(handlers::category::update_subcategory)
                .delete(handlers::category::delete_subcategory),
        )
        .route("/photos", post(handlers::photo::upload))
        .route(
            "/photos/{id}",
            put(handlers::photo::update).delete(handlers::photo::delete),
        )
        .route("/contacts", get(handlers::contact::list_contacts))
        .route("/contacts/{id}", delete(handlers::contact::delete_contact))
}
