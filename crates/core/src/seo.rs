//! robots.txt and sitemap.xml document builders.
//!
//! Pure string composition; the HTTP handlers supply the absolute base URL
//! and the catalog ids.

use crate::types::DbId;

/// One `<url>` entry in the sitemap.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    /// Absolute location.
    pub loc: String,
    /// `daily`, `weekly`, ...
    pub changefreq: &'static str,
    /// `0.0`..`1.0` as text.
    pub priority: &'static str,
}

/// Build the robots.txt body. `sitemap_url` must be absolute.
pub fn robots_txt(sitemap_url: &str) -> String {
    let sitemap_line = format!("Sitemap: {sitemap_url}");
    let lines = [
        "User-Agent: *",
        "Allow: /",
        "",
        "# Sitemap",
        sitemap_line.as_str(),
        "",
        "# Disallow admin and private areas",
        "Disallow: /admin/",
        "Disallow: /captcha/",
        "",
        "# Allow all static files",
        "Allow: /static/",
        "Allow: /media/",
        "",
        "# Crawl delay (optional)",
        "Crawl-delay: 1",
    ];
    lines.join("\n")
}

/// Build a standard sitemap `<urlset>` document.
pub fn sitemap_xml(urls: &[SitemapUrl]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        out.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
            xml_escape(&url.loc),
            url.changefreq,
            url.priority
        ));
    }
    out.push_str("</urlset>\n");
    out
}

/// Sitemap entry for the landing page.
pub fn home_url(base_url: &str) -> SitemapUrl {
    SitemapUrl {
        loc: format!("{base_url}/"),
        changefreq: "daily",
        priority: "0.5",
    }
}

/// Sitemap entry for a category page.
pub fn category_url(base_url: &str, id: DbId) -> SitemapUrl {
    SitemapUrl {
        loc: format!("{base_url}/categoria/{id}/"),
        changefreq: "weekly",
        priority: "0.8",
    }
}

/// Sitemap entry for a subcategory page.
pub fn subcategory_url(base_url: &str, id: DbId) -> SitemapUrl {
    SitemapUrl {
        loc: format!("{base_url}/subcategoria/{id}/"),
        changefreq: "weekly",
        priority: "0.7",
    }
}

/// Minimal XML escaping for `<loc>` values.
fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_references_sitemap_and_blocks_admin() {
        let body = robots_txt("https://example.com/sitemap.xml");
        assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
        assert!(body.contains("Disallow: /admin/"));
        assert!(body.contains("Disallow: /captcha/"));
        assert!(body.contains("Allow: /media/"));
    }

    #[test]
    fn sitemap_lists_all_urls_with_metadata() {
        let urls = vec![
            home_url("https://example.com"),
            category_url("https://example.com", 3),
            subcategory_url("https://example.com", 7),
        ];
        let xml = sitemap_xml(&urls);

        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/categoria/3/</loc>"));
        assert!(xml.contains("<loc>https://example.com/subcategoria/7/</loc>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn sitemap_escapes_xml_characters() {
        let urls = vec![SitemapUrl {
            loc: "https://example.com/?a=1&b=2".into(),
            changefreq: "daily",
            priority: "0.5",
        }];
        assert!(sitemap_xml(&urls).contains("?a=1&amp;b=2"));
    }
}
