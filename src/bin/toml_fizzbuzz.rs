use clap::Parser;
use fizzbuzz::core::pipeline::dry_run_report;
use fizzbuzz::core::ConfigProvider;
use fizzbuzz::utils::{logger, validation::Validate};
use fizzbuzz::{FizzBuzzEngine, OutputSink, RangePipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-fizzbuzz")]
#[command(about = "FizzBuzz driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "fizzbuzz.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - validate the config and report the range without printing
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        match dry_run_report(&config) {
            Ok(report) => eprintln!("🔍 {}", report),
            Err(e) => {
                tracing::error!("❌ Dry run failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        }
        return;
    }

    let sink = OutputSink::from_path(config.output_path());
    let engine = FizzBuzzEngine::new(RangePipeline::new(sink, config));

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
