use clap::Parser;
use fizzbuzz::core::ConfigProvider;
use fizzbuzz::utils::{logger, validation::Validate};
use fizzbuzz::{CliConfig, FizzBuzzEngine, OutputSink, RangePipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fizzbuzz CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let sink = OutputSink::from_path(config.output_path());
    let pipeline = RangePipeline::new(sink, config);
    let engine = FizzBuzzEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Classified {} numbers into {}",
                summary.count,
                summary.destination
            );
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
