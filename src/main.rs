mod config;
mod error;
mod models;
mod report;
mod session;
mod store;

use config::ReportConfig;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() {
    // Initialize logging; stdout is reserved for the report itself
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("mongodb=warn".parse().unwrap())
                .add_directive("user_interest_report=debug".parse().unwrap())
        )
        .init();

    let config = ReportConfig::from_env();

    info!("Generating user report");

    let mut stdout = io::stdout();
    if let Ok(report) = report::run(&config, &mut stdout).await {
        info!("User report finished: {} users", report.total_users);
    }
}
