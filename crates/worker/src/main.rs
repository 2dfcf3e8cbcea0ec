//! Reminder dispatch worker.
//!
//! Runs the [`ReminderDispatcher`] either once (`--once`, for an external
//! cron trigger) or on an interval until SIGINT/SIGTERM.

use std::time::Duration;

use nova_events::{EmailConfig, EmailDelivery, ReminderDispatcher, SmsConfig, SmsDelivery};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default seconds between dispatch sweeps.
const DEFAULT_DISPATCH_INTERVAL_SECS: u64 = 900;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nova_worker=debug,nova_events=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = nova_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    let email = EmailConfig::from_env().map(EmailDelivery::new);
    let sms = SmsConfig::from_env().map(SmsDelivery::new);
    if email.is_none() {
        tracing::warn!("SMTP_HOST not set, email channel disabled");
    }
    if sms.is_none() {
        tracing::warn!("SMS_GATEWAY_URL not set, SMS channel disabled");
    }

    let dispatcher = ReminderDispatcher::new(pool, email, sms);

    // Single pass for external schedulers (platform cron).
    if std::env::args().any(|a| a == "--once") {
        match dispatcher.run_once().await {
            Ok(stats) => {
                tracing::info!(sent = stats.sent, failed = stats.failed, "Dispatch pass complete");
            }
            Err(e) => {
                tracing::error!(error = %e, "Dispatch pass failed");
                std::process::exit(1);
            }
        }
        return;
    }

    let interval_secs: u64 = std::env::var("REMINDER_DISPATCH_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DISPATCH_INTERVAL_SECS);
    tracing::info!(interval_secs, "Reminder dispatcher starting");

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_cancel.cancel();
    });

    dispatcher
        .run(cancel, Duration::from_secs(interval_secs))
        .await;

    tracing::info!("Reminder dispatcher stopped");
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
