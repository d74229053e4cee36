//! Contact form endpoint and admin inquiry triage.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use vitrina_core::captcha;
use vitrina_core::contact::{clean_optional, is_valid_email};
use vitrina_core::types::{DbId, MAX_NAME_LEN, MAX_PHONE_LEN};
use vitrina_db::models::contact::{Contact, CreateContact};
use vitrina_db::repositories::{CaptchaRepo, ContactRepo};
use vitrina_mailer::ContactNotification;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::ApiMessage;
use crate::state::AppState;

/// Form-encoded contact submission. Missing fields deserialize as empty
/// strings so validation can answer with targeted messages.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub mensaje: String,
    /// Challenge key.
    #[serde(default)]
    pub captcha_0: String,
    /// Visitor's answer.
    #[serde(default)]
    pub captcha_1: String,
}

/// POST /contacto/
///
/// Validation order: required fields, captcha presence, captcha
/// challenge, email shape. The stored challenge is consumed only by a
/// successful comparison. A notification failure never surfaces to the
/// visitor.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> AppResult<Json<ApiMessage>> {
    let nombre = form.nombre.trim();
    let email = form.email.trim();
    let mensaje = form.mensaje.trim();
    let captcha_key = form.captcha_0.trim();
    let captcha_response = form.captcha_1.trim();

    if nombre.is_empty() || email.is_empty() || mensaje.is_empty() {
        return Err(AppError::BadRequest(
            "Los campos nombre, email y mensaje son requeridos".into(),
        ));
    }

    // Column limits; oversized values would otherwise surface as 500s.
    if nombre.chars().count() > MAX_NAME_LEN
        || form.categoria.trim().chars().count() > MAX_NAME_LEN
        || form.telefono.trim().chars().count() > MAX_PHONE_LEN
    {
        return Err(AppError::BadRequest(
            "Uno de los campos supera la longitud permitida".into(),
        ));
    }

    if captcha_key.is_empty() || captcha_response.is_empty() {
        return Err(AppError::BadRequest("El captcha es requerido".into()));
    }

    let challenge = CaptchaRepo::find_valid(&state.pool, captcha_key)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("El captcha ha expirado o es inv\u{00e1}lido".into())
        })?;

    if !captcha::responses_match(&challenge.response, captcha_response) {
        return Err(AppError::BadRequest("El captcha es incorrecto".into()));
    }

    CaptchaRepo::delete(&state.pool, &challenge.key).await?;

    if !is_valid_email(email) {
        return Err(AppError::BadRequest("Email inv\u{00e1}lido".into()));
    }

    let contact = ContactRepo::create(
        &state.pool,
        &CreateContact {
            name: nombre.to_string(),
            email: email.to_string(),
            phone: clean_optional(Some(form.telefono.clone())),
            category: clean_optional(Some(form.categoria.clone())),
            message: mensaje.to_string(),
        },
    )
    .await?;

    notify_business(&state, &contact).await;

    Ok(Json(ApiMessage::ok(
        "\u{00a1}Gracias por contactarnos! Te responderemos pronto.",
    )))
}

/// Attempt the notification email for a stored submission. Failures are
/// logged only; the endpoint already committed the contact row.
async fn notify_business(state: &AppState, contact: &Contact) {
    let Some(mailer) = &state.mailer else {
        tracing::debug!(contact_id = contact.id, "SMTP not configured, skipping notification");
        return;
    };

    let notification = ContactNotification {
        name: &contact.name,
        email: &contact.email,
        phone: contact.phone.as_deref(),
        category: contact.category.as_deref(),
        message: &contact.message,
    };

    match mailer.send_contact_notification(&notification).await {
        Ok(()) => {
            if let Err(err) = ContactRepo::mark_email_sent(&state.pool, contact.id).await {
                tracing::error!(error = %err, contact_id = contact.id, "Failed to record email_sent flag");
            }
        }
        Err(err) => {
            tracing::error!(error = %err, contact_id = contact.id, "Failed to send contact notification");
        }
    }
}

// ---------------------------------------------------------------------------
// Admin triage
// ---------------------------------------------------------------------------

/// GET /api/admin/contacts
///
/// List all inquiries, newest first.
pub async fn list_contacts(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list_all(&state.pool).await?;
    Ok(Json(contacts))
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete_contact(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Contacto no encontrado".into()))
    }
}
