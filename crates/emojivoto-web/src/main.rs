//! Emojivoto web server entry point
//!
//! Run with:
//! ```bash
//! WEB_PORT=8080 BACKEND_MODE=memory cargo run -p emojivoto-web
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use emojivoto_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.web.port,
        backends = ?config.backends.mode,
        "Configuration loaded"
    );

    emojivoto_web::run(config).await
}
