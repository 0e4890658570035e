use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未設定 RUST_LOG 時的過濾規則，不限定 target 以涵蓋所有 binary
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "fizzbuzz=debug,info"
    } else {
        "warn"
    }
}

/// 日誌一律輸出到 stderr，stdout 只留給數列本身
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
