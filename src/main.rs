#![recursion_limit = "256"]

mod config;
mod routes;

use config::HostConfig;
use routes::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "payroll-portal failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = HostConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, "payroll backend configured");

    let app = routes::app(&config)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "payroll-portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
