use clap::Parser;
use worker_fixtures::utils::logger;
use worker_fixtures::{FixtureError, RunawayArgs, RunawayWorker};

fn main() {
    let args = RunawayArgs::parse();

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
    tracing::info!("Starting runaway worker (pid {})", std::process::id());

    let worker = RunawayWorker::new_with_monitoring(settings, monitor_enabled);
    let mut stdout = std::io::stdout();

    match worker.run(&mut stdout) {
        Ok(summary) => {
            tracing::info!("Runaway worker stopped after {} iterations", summary.iterations);
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: FixtureError) -> ! {
    tracing::error!("Runaway worker failed: {}", e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("runaway: {}", e);
    std::process::exit(e.exit_code());
}
