use std::process::ExitCode;

use mentorlink::{app, config::Settings, telemetry::init_subscriber};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_subscriber(settings.environment);

    let address = settings.address();
    let listener = match TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%address, error = %e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(environment = ?settings.environment, "Server starting at http://{address}");

    if let Err(e) = axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server terminated with an error");
        return ExitCode::FAILURE;
    }

    info!("Server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
