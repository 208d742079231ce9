use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gddnsd::{
    config::Settings,
    daemon,
    dns::{Credentials, GoDaddyClient},
    ip::ExternalIpSource,
};

#[derive(Parser)]
#[command(name = "gddnsd")]
#[command(about = "Dynamic DNS updater - keeps a GoDaddy A record pointed at the current public IP")]
#[command(version)]
struct Cli {
    /// Record name (host label of the A record)
    #[arg(short = 'n', long = "name")]
    name: String,

    /// Domain the record belongs to
    #[arg(short = 'd', long = "domain")]
    domain: String,

    /// GoDaddy API key
    #[arg(short = 'k', long = "key")]
    key: String,

    /// GoDaddy API secret
    #[arg(short = 's', long = "secret")]
    secret: String,

    /// Check interval in seconds
    #[arg(short = 'i', long = "interval", default_value_t = 60)]
    interval: u64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let settings = Settings::new(cli.name, cli.domain, cli.key, cli.secret, cli.interval)?;

    let provider = Arc::new(GoDaddyClient::new(
        &settings.record_name,
        &settings.domain,
        Credentials {
            api_key: settings.api_key.clone(),
            api_secret: settings.api_secret.clone(),
        },
    ));
    let ip_source = Arc::new(ExternalIpSource::new());

    info!("Starting gddnsd daemon");
    daemon::run(settings, ip_source, provider).await
}
