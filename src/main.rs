//! Portfolio Contact Relay - main entry point.

use anyhow::Result;
use portfolio_contact_relay::repositories::{DocumentStoreArchive, MessageArchive};
use portfolio_contact_relay::{
    AppState, AsyncEmailProvider, AsyncEmailProviderImpl, Config, ContactRelayService,
    EmailProviderClient, EmailTemplate, Metrics,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_tracing(&config.log_level);
    info!(
        "Starting contact relay with provider API URL: {}",
        config.resend_api_url
    );

    let metrics = Metrics::new();
    let client = EmailProviderClient::new(&config, metrics.clone());
    let provider = Arc::new(AsyncEmailProviderImpl::new(client)) as Arc<dyn AsyncEmailProvider>;

    let template = EmailTemplate::new(config.sender.clone(), config.recipient.clone());
    let mut relay = ContactRelayService::new(provider, template, metrics.clone());

    if let Some(url) = &config.archive_url {
        info!("Archiving delivered messages to {}", url);
        let archive = Arc::new(DocumentStoreArchive::new(
            url.clone(),
            config.archive_api_key.clone(),
            config.request_timeout,
        )) as Arc<dyn MessageArchive>;
        relay = relay.with_archive(archive);
    }

    let addr = config.socket_addr()?;
    portfolio_contact_relay::server::run_server(addr, AppState::new(relay)).await?;

    let summary = metrics.summary();
    info!(
        "Contact relay shutdown complete ({} received, {} delivered, {} rejected, {} failed)",
        summary.submissions_received,
        summary.submissions_delivered,
        summary.submissions_rejected,
        summary.submissions_failed
    );
    Ok(())
}

/// `RUST_LOG` wins over `LOG_LEVEL`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
