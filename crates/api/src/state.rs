use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vitrina_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Contact notification mailer. `None` when SMTP is not configured;
    /// submissions still persist, only the notification is skipped.
    pub mailer: Option<Arc<vitrina_mailer::Mailer>>,
}
