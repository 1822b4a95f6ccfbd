//! Best-effort classification of relay failures.
//!
//! The relay reports failures as free-text `{error, details}` payloads,
//! so deciding whether the service is worth retrying comes down to
//! substring matching. Misconfiguration (missing API key, unverified
//! sender domain) downgrades the form to "service offline"; anything
//! else leaves it editable for another attempt.

/// What the user sees after a failed send, and whether the form should
/// be disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// Toast title (the relay's error line, or a generic one).
    pub title: String,
    /// Toast body (admin-facing when the service is misconfigured).
    pub detail: String,
    /// When true, further submissions are disabled for the session.
    pub service_offline: bool,
}

/// Classifies a non-2xx relay response.
///
/// `error` and `details` are the relay's payload fields; either may be
/// absent.
#[must_use]
pub fn classify_failure(status: u16, error: Option<&str>, details: Option<&str>) -> FailureReport {
    let title = error.unwrap_or("Error Sending Message").to_string();
    let raw_details = details.unwrap_or("Failed to send message. Please try again later.");

    let missing_key = raw_details.contains("RESEND_API_KEY is not set")
        || (status == 500 && title.to_lowercase().contains("api key missing"));
    if missing_key {
        return FailureReport {
            title,
            detail: "Email service is not configured by the administrator.".to_string(),
            service_offline: true,
        };
    }

    if raw_details.contains("API Key is required") {
        return FailureReport {
            title,
            detail: "Email service configuration error (API Key). Contact administrator."
                .to_string(),
            service_offline: true,
        };
    }

    if raw_details.contains("Invalid domain") || raw_details.contains("Sender not allowed") {
        return FailureReport {
            title,
            detail: "Email service configuration error (Sender Domain). Contact administrator."
                .to_string(),
            service_offline: true,
        };
    }

    if status == 503 && title == "Service Unavailable" {
        return FailureReport {
            title,
            detail: "The email service is currently unavailable or not configured.".to_string(),
            service_offline: true,
        };
    }

    FailureReport {
        title,
        detail: raw_details.to_string(),
        service_offline: false,
    }
}

/// Report for a transport-level failure (request never completed).
///
/// Treated conservatively as a service-offline condition.
#[must_use]
pub fn transport_failure(reason: &str) -> FailureReport {
    FailureReport {
        title: "Error".to_string(),
        detail: format!("An unexpected error occurred. Please try again. ({reason})"),
        service_offline: true,
    }
}
