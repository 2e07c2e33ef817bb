use clap::Parser;
use hello_ci::utils::{logger, validation::Validate};
use hello_ci::{run_demo, CliConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting hello-ci");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // 合併 TOML 與命令列設定, 輸出三行結果
    let result = config
        .resolve()
        .and_then(|demo| run_demo(&demo, &mut std::io::stdout().lock()));

    if let Err(e) = result {
        tracing::error!("hello-ci failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        // 配置錯誤為 2, 執行錯誤為 1
        std::process::exit(e.exit_code());
    }
}
