use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medirec::dataset::Dataset;
use medirec::{api, config};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Data load must succeed before the listener binds; no partial-data
    // serving.
    let data_dir = config::data_dir();
    let dataset = match Dataset::load(&data_dir) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!(error = %e, "failed to load reference data");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = api::server::serve(dataset, config::bind_addr()).await {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
