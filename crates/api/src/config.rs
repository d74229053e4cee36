use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Absolute base URL used in sitemap and robots.txt links.
    pub public_base_url: String,
    /// Business name shown in page titles and notification emails.
    pub site_name: String,
    /// Persistent media volume. Uploads are written here and it is
    /// consulted first when serving `/media`.
    pub media_root: PathBuf,
    /// Local fallback directory consulted when a media file is absent
    /// from the volume.
    pub local_media_root: PathBuf,
    /// Directory served under `/static`.
    pub static_root: PathBuf,
    /// Bearer token protecting `/api/admin`. `None` disables the admin API.
    pub admin_token: Option<String>,
    /// Captcha challenge lifetime in seconds.
    pub captcha_ttl_secs: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `SITE_NAME`            | `Vitrina Modular`          |
    /// | `MEDIA_ROOT`           | `media`                    |
    /// | `LOCAL_MEDIA_ROOT`     | `local_media`              |
    /// | `STATIC_ROOT`          | `static`                   |
    /// | `ADMIN_TOKEN`          | unset (admin API disabled) |
    /// | `CAPTCHA_TTL_SECS`     | `300`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("SITE_NAME").unwrap_or_else(|_| "Vitrina Modular".into());

        let media_root =
            PathBuf::from(std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".into()));
        let local_media_root = PathBuf::from(
            std::env::var("LOCAL_MEDIA_ROOT").unwrap_or_else(|_| "local_media".into()),
        );
        let static_root =
            PathBuf::from(std::env::var("STATIC_ROOT").unwrap_or_else(|_| "static".into()));

        let admin_token = std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty());

        let captcha_ttl_secs: i64 = match std::env::var("CAPTCHA_TTL_SECS") {
            Ok(value) => value.parse().expect("CAPTCHA_TTL_SECS must be a valid i64"),
            Err(_) => vitrina_core::captcha::DEFAULT_TTL_SECS,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            site_name,
            media_root,
            local_media_root,
            static_root,
            admin_token,
            captcha_ttl_secs,
        }
    }
}
