use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::dns::DnsProvider;
use crate::ip::IpSource;

/// Run the reconciliation loop until SIGTERM/SIGINT (Ctrl+C on Windows).
pub async fn run(
    settings: Settings,
    ip_source: Arc<dyn IpSource>,
    provider: Arc<dyn DnsProvider>,
) -> Result<()> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if let Err(e) = wait_for_shutdown().await {
            error!("Error waiting for shutdown signal: {}", e);
        }
        let _ = shutdown_tx.send(true);
    });

    run_until_shutdown(settings, ip_source, provider, shutdown_rx).await
}

/// Reconciliation loop with caller-controlled shutdown.
///
/// One attempt per elapsed interval, starting after the first interval
/// (no check at startup). Ticks are independent: nothing but the
/// configuration and the provider handle survives between them, and a
/// failed step only ends the current tick.
pub async fn run_until_shutdown(
    settings: Settings,
    ip_source: Arc<dyn IpSource>,
    provider: Arc<dyn DnsProvider>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    info!(
        "Daemon started. Monitoring {}.{} via {} with {} second interval",
        settings.record_name,
        settings.domain,
        provider.provider_name(),
        settings.check_interval.as_secs()
    );

    loop {
        tokio::select! {
            _ = tokio::time::sleep(settings.check_interval) => {
                check_and_update(&settings, ip_source.as_ref(), provider.as_ref()).await;
            }
            _ = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    info!("Shutdown signal received, stopping daemon");
                    break;
                }
            }
        }
    }

    Ok(())
}

async fn check_and_update(
    settings: &Settings,
    ip_source: &dyn IpSource,
    provider: &dyn DnsProvider,
) {
    let current_ip = match ip_source.current_ip().await {
        Ok(ip) => ip,
        Err(e) => {
            warn!(
                "Failed to get external IP for {}.{}: {}",
                settings.record_name, settings.domain, e
            );
            return;
        }
    };

    let published_ip = match provider.query().await {
        Ok(ip) => ip,
        Err(e) => {
            warn!(
                "Failed to get DNS record for {}.{}: {}",
                settings.record_name, settings.domain, e
            );
            return;
        }
    };

    if published_ip.as_deref() == Some(current_ip.as_str()) {
        info!(
            "DNS record {}.{} already set to {}",
            settings.record_name, settings.domain, current_ip
        );
        return;
    }

    match published_ip {
        Some(ref old_ip) => info!(
            "Updating {}.{} from {} to {}",
            settings.record_name, settings.domain, old_ip, current_ip
        ),
        None => info!(
            "Updating {}.{} to {} (no record published yet)",
            settings.record_name, settings.domain, current_ip
        ),
    }

    match provider.update(&current_ip).await {
        Ok(()) => {
            info!(
                "Successfully updated {}.{} to {}",
                settings.record_name, settings.domain, current_ip
            );
        }
        Err(e) => {
            error!(
                "Failed to update {}.{}: {}",
                settings.record_name, settings.domain, e
            );
        }
    }
}

async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT");
            }
        }
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c().await?;
        info!("Received Ctrl+C");
    }

    Ok(())
}
