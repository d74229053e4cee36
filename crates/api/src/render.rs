//! Landing page renderer.
//!
//! Composes category, subcategory, featured-photo, and captcha data into
//! the landing page document. Markup is written directly; the data
//! composition is the substance, the HTML itself is deliberately minimal
//! and styled from `/static`.

use vitrina_db::models::category::{Category, Subcategory};
use vitrina_db::models::photo::Photo;

/// One category block on the landing page.
#[derive(Debug)]
pub struct CategorySection {
    pub category: Category,
    pub subcategories: Vec<SubcategoryCard>,
}

/// One subcategory card: the subcategory plus its representative photo
/// (first in display order), if it has any.
#[derive(Debug)]
pub struct SubcategoryCard {
    pub subcategory: Subcategory,
    pub featured: Option<Photo>,
}

/// Everything the landing page needs besides the catalog itself.
#[derive(Debug)]
pub struct PageContext<'a> {
    pub site_name: &'a str,
    pub meta_description: &'a str,
    pub meta_keywords: &'a str,
    pub captcha_key: &'a str,
    pub captcha_question: &'a str,
}

/// Render the landing page document.
pub fn landing_page(ctx: &PageContext<'_>, sections: &[CategorySection]) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let title = format!("{} - Cat\u{00e1}logo de productos", ctx.site_name);

    html.push_str(&format!(
        "<!DOCTYPE html>\n\
         <html lang=\"es\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         <meta name=\"keywords\" content=\"{keywords}\">\n\
         <link rel=\"stylesheet\" href=\"/static/css/home.css\">\n\
         </head>\n\
         <body>\n",
        title = escape(&title),
        description = escape(ctx.meta_description),
        keywords = escape(ctx.meta_keywords),
    ));

    render_nav(&mut html, ctx.site_name, sections);
    for section in sections {
        render_section(&mut html, section);
    }
    render_contact_form(&mut html, ctx, sections);

    html.push_str("<script src=\"/static/js/home.js\"></script>\n</body>\n</html>\n");

    html
}

/// Navigation bar with one anchor per category.
fn render_nav(html: &mut String, site_name: &str, sections: &[CategorySection]) {
    html.push_str(&format!(
        "<header class=\"navbar\">\n<a class=\"brand\" href=\"/\">{}</a>\n<nav>\n<ul>\n",
        escape(site_name)
    ));
    for section in sections {
        html.push_str(&format!(
            "<li><a href=\"#categoria-{}\">{}</a></li>\n",
            section.category.id,
            escape(&section.category.name)
        ));
    }
    html.push_str("<li><a href=\"#contacto\">Contacto</a></li>\n</ul>\n</nav>\n</header>\n");
}

/// One category section with its subcategory gallery cards.
fn render_section(html: &mut String, section: &CategorySection) {
    html.push_str(&format!(
        "<section class=\"categoria\" id=\"categoria-{}\">\n<h2>{}</h2>\n<div class=\"subcategorias\">\n",
        section.category.id,
        escape(&section.category.name)
    ));

    for card in &section.subcategories {
        html.push_str(&format!(
            "<article class=\"subcategoria\" data-subcategoria-id=\"{}\">\n<h3>{}</h3>\n",
            card.subcategory.id,
            escape(&card.subcategory.name)
        ));

        if let Some(photo) = &card.featured {
            let alt = photo.description.as_deref().unwrap_or(&card.subcategory.name);
            html.push_str(&format!(
                "<img src=\"/media/{}\" alt=\"{}\" loading=\"lazy\">\n",
                escape(&photo.image_path),
                escape(alt)
            ));
        }

        html.push_str("</article>\n");
    }

    html.push_str("</div>\n</section>\n");
}

/// Contact form wired with the fresh captcha challenge.
fn render_contact_form(html: &mut String, ctx: &PageContext<'_>, sections: &[CategorySection]) {
    html.push_str(
        "<section id=\"contacto\">\n<h2>Contacto</h2>\n\
         <form id=\"contact-form\" method=\"post\" action=\"/contacto/\">\n\
         <input type=\"text\" name=\"nombre\" placeholder=\"Nombre\" required>\n\
         <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\n\
         <input type=\"tel\" name=\"telefono\" placeholder=\"Tel\u{00e9}fono\">\n\
         <select name=\"categoria\">\n<option value=\"\">Categor\u{00ed}a de inter\u{00e9}s</option>\n",
    );

    for section in sections {
        html.push_str(&format!(
            "<option value=\"{name}\">{name}</option>\n",
            name = escape(&section.category.name)
        ));
    }

    html.push_str(&format!(
        "</select>\n\
         <textarea name=\"mensaje\" placeholder=\"Mensaje\" required></textarea>\n\
         <div class=\"captcha\">\n\
         <label id=\"captcha-question\" for=\"captcha-input\">{question}</label>\n\
         <input type=\"hidden\" name=\"captcha_0\" value=\"{key}\">\n\
         <input type=\"text\" id=\"captcha-input\" name=\"captcha_1\" autocomplete=\"off\" required>\n\
         <button type=\"button\" id=\"captcha-refresh\">Otra pregunta</button>\n\
         </div>\n\
         <button type=\"submit\">Enviar</button>\n\
         </form>\n</section>\n",
        question = escape(ctx.captcha_question),
        key = escape(ctx.captcha_key),
    ));
}

/// Escape text for HTML element and attribute positions.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
