use clap::Parser;
use small_commons::app;
use small_commons::utils::error::{ErrorSeverity, UtilError};
use small_commons::utils::{logger, validation::Validate};
use small_commons::{CliConfig, SmallCommonsConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入配置，未指定檔案時使用預設值
    let config = match &cli.config {
        Some(path) => match SmallCommonsConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => SmallCommonsConfig::default(),
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(cli.verbose, Some(config.logging.level.as_str()));
    } else {
        logger::init_cli_logger(cli.verbose, Some(config.logging.level.as_str()));
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match app::execute(&cli.command, &config) {
        Ok(output) => println!("{}", output.render(cli.json)),
        Err(e) => std::process::exit(report_failure(&e)),
    }
}

fn report_failure(e: &UtilError) -> i32 {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
