//! Contact-form submission pipeline.
//!
//! The form state and validation are pure and synchronous; the actual
//! HTTP request runs on a background thread and reports back over a
//! message channel polled by the main loop. Failures are classified
//! best-effort into "try again" and "service offline" buckets.

pub mod classify;
pub mod form;
pub mod send;

pub use classify::{classify_failure, FailureReport};
pub use form::{email_looks_valid, ContactField, ContactForm, ContactMessage, ValidationError};
pub use send::{SendResult, SendState, SendStatus};
