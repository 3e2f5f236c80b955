use clap::Parser;
use worker_fixtures::utils::logger;
use worker_fixtures::{FixtureError, RecoveredArgs, RecoveredWorker};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = RecoveredArgs::parse();

    // 載入配置
    let config = match args.common.load_config() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(args.common.verbose, args.common.log_json);
            exit_with(e);
        }
    };

    let logging = args.common.logging(&config);
    logger::init_cli_logger(logging.verbose, logging.json);

    let settings = match args.settings(&config) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    let monitor_enabled = args.common.monitoring_enabled(&config);
    tracing::info!(
        "Starting healthy worker: {} heartbeats every {:?}",
        settings.heartbeats,
        settings.interval()
    );

    let worker = RecoveredWorker::new_with_monitoring(settings, monitor_enabled);
    let mut stdout = std::io::stdout();

    match worker.run(&mut stdout).await {
        Ok(summary) => {
            tracing::info!("Healthy worker finished after {} heartbeats", summary.iterations);
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: FixtureError) -> ! {
    tracing::error!("Healthy worker failed: {}", e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("recovered: {}", e);
    std::process::exit(e.exit_code());
}
