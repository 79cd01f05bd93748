use clap::Parser;
use clinic_recommender::report;
use clinic_recommender::utils::error::{ErrorSeverity, RecommenderError};
use clinic_recommender::utils::{logger, validation::Validate};
use clinic_recommender::{CliConfig, ConfiguredCatalogStore, RecommendationEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置檔 (日誌設定可能來自檔案)
    let file_config = match cli.load_file_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.json_logging(&file_config) {
        logger::init_json_logger(cli.verbose_logging(&file_config));
    } else {
        logger::init_cli_logger(cli.verbose_logging(&file_config));
    }

    tracing::info!("Starting clinic-recommender");
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = file_config.validate().and_then(|_| cli.validate()) {
        fail(e);
    }

    let settings = match cli.merge(&file_config) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let store = ConfiguredCatalogStore::from_path(settings.catalog_path.as_deref());
    let engine = match RecommendationEngine::load(&store).await {
        Ok(engine) => engine,
        Err(e) => fail(e),
    };

    if settings.list_symptoms {
        for symptom in &engine.catalog().symptoms {
            println!(
                "{} ({}, {})",
                symptom.name, symptom.severity, symptom.duration
            );
        }
        return Ok(());
    }

    let assessment = match engine.assess_names(&settings.symptoms, &settings.overrides) {
        Ok(assessment) => assessment,
        Err(e) => fail(e),
    };

    let output = match report::render(&assessment, settings.format, settings.limit) {
        Ok(output) => output,
        Err(e) => fail(e),
    };
    print!("{}", output);

    if assessment.is_urgent() {
        eprintln!("🚨 {}", assessment.advice);
    }

    Ok(())
}

/// Logs the error, prints a friendly message and exits with a code
/// derived from the error severity.
fn fail(e: RecommenderError) -> ! {
    tracing::error!(
        "❌ Recommendation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
