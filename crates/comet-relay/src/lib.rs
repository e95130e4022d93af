//! Contact-form mail relay.
//!
//! A single HTTP endpoint, `POST /api/send`, accepts a
//! [`comet_core::ContactMessage`], resolves it into an outbound email,
//! verifies the SMTP transport, and attempts one best-effort delivery.
//! No retries and no queueing; failures surface to the caller verbatim in
//! the response body.

mod mailer;
mod message;
mod server;

pub use mailer::{Mailer, SmtpConfig, SmtpMailer};
pub use message::Email;
pub use server::{RelayState, router};

use thiserror::Error;

/// Errors raised while configuring or using the mail transport.
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    /// A required configuration value is unset. Credentials are never
    /// derived from request-supplied addresses.
    #[error("missing required config: {0}")]
    MissingConfig(&'static str),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    /// The transport rejected the pre-flight connection check.
    #[error("transport verification failed: {0}")]
    Verify(String),
}
