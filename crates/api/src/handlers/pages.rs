//! Landing page handler.

use axum::extract::State;
use axum::response::Html;
use vitrina_db::repositories::{CategoryRepo, PhotoRepo, SubcategoryRepo};

use crate::error::AppResult;
use crate::handlers::captcha::issue_challenge;
use crate::render::{self, CategorySection, PageContext, SubcategoryCard};
use crate::state::AppState;

/// GET /
///
/// Composes the full catalog (categories, subcategories, one
/// representative photo per subcategory) plus a fresh captcha challenge
/// into the landing page.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    let mut sections = Vec::with_capacity(categories.len());
    for category in categories {
        let subcategories = SubcategoryRepo::list_by_category(&state.pool, category.id).await?;

        let mut cards = Vec::with_capacity(subcategories.len());
        for subcategory in subcategories {
            let featured = PhotoRepo::first_by_subcategory(&state.pool, subcategory.id).await?;
            cards.push(SubcategoryCard {
                subcategory,
                featured,
            });
        }

        sections.push(CategorySection {
            category,
            subcategories: cards,
        });
    }

    let challenge = issue_challenge(&state).await?;

    let site_name = state.config.site_name.as_str();
    let meta_description = format!(
        "{site_name}: fabricaci\u{00f3}n, venta y distribuci\u{00f3}n de muebles modulares \
         para hogar y empresa."
    );
    let meta_keywords = format!(
        "muebles modulares, cocinas, ba\u{00f1}os, dormitorios, oficinas, {site_name}"
    );

    let ctx = PageContext {
        site_name,
        meta_description: &meta_description,
        meta_keywords: &meta_keywords,
        captcha_key: &challenge.key,
        captcha_question: &challenge.question,
    };

    Ok(Html(render::landing_page(&ctx, &sections)))
}
