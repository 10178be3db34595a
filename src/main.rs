use fipe_explorer::AppError;
use fipe_explorer::api::client::FipeClient;
use fipe_explorer::cli::{self, Console};
use fipe_explorer::core::services::PriceService;
use fipe_explorer::storage::config::Config;
use fipe_explorer::utils::logging::{default_log_path, init_file_logger, parse_level};
use std::io;

fn exit_with(error: AppError) -> ! {
    eprintln!("Error: {}", error.display_friendly());
    if let Some(hint) = error.troubleshooting_hint() {
        eprintln!("Hint: {}", hint);
    }
    std::process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load Config
    let config = match Config::load(None) {
        Ok(config) => config,
        Err(err) => exit_with(err.into()),
    };

    if let Some(log_path) = default_log_path() {
        init_file_logger(&log_path, parse_level(config.log_level.as_deref()));
    }

    let base_url = config.base_url();
    log::info!(
        "Starting fipe-explorer against {} (timeout {}s)",
        base_url,
        config.timeout_seconds()
    );

    let client = match FipeClient::with_timeout(&base_url, config.timeout_seconds()) {
        Ok(client) => client,
        Err(err) => exit_with(err),
    };
    let service = PriceService::new(client);

    let result = {
        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout());
        cli::run(&service, &mut console).await
    };

    if let Err(err) = result {
        log::error!("Menu stopped: {}", err);
        exit_with(err);
    }
    log::info!("Session closed");
}
