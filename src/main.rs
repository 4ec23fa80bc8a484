use clap::Parser;
use phone_zip_api::utils::{logger, validation::Validate};
use phone_zip_api::{api, LookupService, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    let settings = match args.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(logger::tracing_level(&settings.log_level), settings.log_format);
    tracing::info!("Starting phone-zip-api");
    tracing::debug!("settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入郵遞區號資料與郡/區域對照表
    let service = match LookupService::from_settings(&settings) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("❌ Unable to load reference data: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    api::start_server(service, &settings.bind_address()).await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
