use std::sync::Arc;

use comet_config::Config;
use comet_relay::{RelayState, SmtpConfig, SmtpMailer, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let smtp = SmtpConfig::from_env(&config.smtp)?;
    let account = smtp.user.clone();
    let mailer = Arc::new(SmtpMailer::new(&smtp)?);

    let app = router(RelayState { mailer, account });
    let listener = tokio::net::TcpListener::bind(&config.relay.listen).await?;
    tracing::info!(target: "comet-relay", "listening on {}", config.relay.listen);
    axum::serve(listener, app).await?;
    Ok(())
}
