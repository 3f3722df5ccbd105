use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use volstat::{Config, UsageService};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env().with_path_arg(std::env::args().nth(1));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("volstat={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("volstat v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    let service = UsageService::platform();
    let usage = match service.query_with_timeout(&config.path, config.timeout).await {
        Ok(usage) => usage,
        Err(e) => {
            error!("{}: {}", config.path, e);
            return ExitCode::FAILURE;
        }
    };

    let json = if config.pretty {
        serde_json::to_string_pretty(&usage)
    } else {
        serde_json::to_string(&usage)
    };
    match json {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to encode disk usage: {}", e);
            ExitCode::FAILURE
        }
    }
}
