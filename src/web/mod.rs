//! Mail relay web API.
//!
//! A small HTTP service the contact form posts to. It validates the
//! submission, then hands it off to the Resend email API using a secret
//! key and a verified sender identity. The TUI only depends on the
//! status/body contract here, never on Resend's own protocol.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/send-email` - Validate and forward a contact message

use std::net::SocketAddr;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::relay::form::email_looks_valid;

/// Resend's send endpoint.
const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Where contact messages end up.
const DELIVERY_ADDRESS: &str = "kishorem2607@gmail.com";

/// Sender identity. Must belong to a domain verified with the provider;
/// the onboarding sender works for testing only.
const FROM_ADDRESS: &str = "Portfolio Contact <onboarding@resend.dev>";

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the relay.
#[derive(Clone)]
pub struct AppState {
    /// Provider API key, absent when unconfigured
    api_key: Option<String>,
    /// Provider endpoint (overridable for tests)
    provider_url: String,
    /// Shared HTTP client
    client: reqwest::Client,
}

impl AppState {
    /// Creates relay state with the given provider key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            provider_url: RESEND_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Points the relay at a different provider endpoint.
    #[must_use]
    pub fn with_provider_url(mut self, url: impl Into<String>) -> Self {
        self.provider_url = url.into();
        self
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Contact form submission body.
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    /// Sender name.
    #[serde(default)]
    pub name: Option<String>,
    /// Sender email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful hand-off response.
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    /// Confirmation line shown to the sender.
    pub message: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/send-email - Validate a submission and forward it.
async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, (StatusCode, Json<ApiError>)> {
    let name = request.name.as_deref().unwrap_or("").trim();
    let email = request.email.as_deref().unwrap_or("").trim();
    let message = request.message.as_deref().unwrap_or("").trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Missing required fields")),
        ));
    }
    if !email_looks_valid(email) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Invalid email format")),
        ));
    }

    let Some(api_key) = state.api_key.as_deref() else {
        error!("Provider API key is not configured. Set RESEND_API_KEY in the environment");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details(
                "Email service not configured (API key missing).",
                "RESEND_API_KEY is not set. The site administrator needs to configure \
                 the email sending service.",
            )),
        ));
    };

    let payload = serde_json::json!({
        "from": FROM_ADDRESS,
        "to": [DELIVERY_ADDRESS],
        "subject": format!("New Contact Form Submission from {name}"),
        "html": render_email_html(name, email, message),
        "reply_to": email,
    });

    let response = state
        .client
        .post(&state.provider_url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            error!("Provider request failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Failed to send message.",
                    e.to_string(),
                )),
            )
        })?;

    if !response.status().is_success() {
        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to send email due to an API error.".to_string());
        error!("Provider rejected the message: {detail}");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to send message.", detail)),
        ));
    }

    info!("Forwarded contact message from {email}");
    Ok(Json(SendEmailResponse {
        message: "Form submission received and email sent successfully!".to_string(),
    }))
}

/// Builds the HTML body forwarded to the provider.
fn render_email_html(name: &str, email: &str, message: &str) -> String {
    let message_html = escape_html(message).replace('\n', "<br>");
    format!(
        "<h1>New Contact Form Submission</h1>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        escape_html(name),
        escape_html(email),
        message_html
    )
}

/// Minimal HTML entity escaping for user-supplied text.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Router / Server
// ============================================================================

/// Creates the relay router.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // The relay is meant to run locally next to the TUI; restrict
    // origins before exposing it anywhere public.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/send-email", post(send_email))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the relay server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(api_key: Option<String>, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(api_key);
    let app = create_router(state);

    info!("Starting mail relay on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&\"x\"</b>"), "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_email_html_breaks_lines() {
        let html = render_email_html("Ada", "ada@example.com", "line one\nline two");
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("<strong>Name:</strong> Ada"));
    }

    #[test]
    fn test_render_email_html_escapes_injection() {
        let html = render_email_html("<script>", "a@b.c", "hi");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_api_error_details_shape() {
        let err = ApiError::with_details("oops", "because");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"details\":\"because\""));

        let bare = ApiError::new("oops");
        let json = serde_json::to_string(&bare).unwrap();
        assert!(!json.contains("details"));
    }
}
