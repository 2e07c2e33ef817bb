use clap::Parser;
use hello_ci::run_self_test;
use hello_ci::utils::logger;

#[derive(Parser)]
#[command(name = "selftest")]
#[command(about = "Checks greet() and add() and exits non-zero on the first failure")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    logger::init_logger(args.verbose, args.log_json);

    match run_self_test(&mut std::io::stdout().lock()) {
        Ok(report) => {
            tracing::debug!("Self-test finished: {:?}", report);
        }
        Err(e) => {
            // 記錄失敗細節, 再輸出簡短訊息
            tracing::error!("Self-test failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
