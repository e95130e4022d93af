//! Mail transport abstraction and the SMTP implementation.

use std::env;

use async_trait::async_trait;
use comet_config::SmtpSection;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::RelayError;
use crate::message::Email;

/// Mail transport used by the relay endpoint.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Pre-flight check that the transport is reachable and the
    /// credentials are accepted.
    async fn verify(&self) -> Result<(), RelayError>;

    /// Deliver one message. Best effort; the relay never retries.
    async fn send(&self, email: &Email) -> Result<(), RelayError>;
}

/// SMTP submission settings. Host and port come from the config file,
/// credentials from the environment.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Sending account address, also the default message identity.
    pub user: String,
    pub pass: String,
}

impl SmtpConfig {
    /// Resolve credentials from `EMAIL_USER` / `EMAIL_PASS`. Missing or
    /// empty credentials are a startup error; they are never substituted
    /// with request-supplied addresses.
    pub fn from_env(section: &SmtpSection) -> Result<Self, RelayError> {
        Ok(Self {
            host: section.host.clone(),
            port: section.port,
            user: require_env("EMAIL_USER")?,
            pass: require_env("EMAIL_PASS")?,
        })
    }
}

fn require_env(key: &'static str) -> Result<String, RelayError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(RelayError::MissingConfig(key)),
    }
}

/// SMTP mailer over implicit TLS (lettre).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a transport bound to the submission endpoint in `config`.
    pub fn new(config: &SmtpConfig) -> Result<Self, RelayError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| RelayError::Smtp(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();
        Ok(Self { transport })
    }

    fn build_message(email: &Email) -> Result<Message, RelayError> {
        let from = parse_mailbox(&email.from)?;
        let to = parse_mailbox(&email.to)?;
        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| RelayError::Build(e.to_string()))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, RelayError> {
    address
        .parse()
        .map_err(|e| RelayError::InvalidAddress(format!("{address}: {e}")))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), RelayError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RelayError::Verify(
                "server rejected the connection check".to_string(),
            )),
            Err(e) => Err(RelayError::Verify(e.to_string())),
        }
    }

    async fn send(&self, email: &Email) -> Result<(), RelayError> {
        let message = Self::build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| RelayError::Smtp(e.to_string()))?;
        Ok(())
    }
}
