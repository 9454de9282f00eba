use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::CLASSIFIER_URL_ENV;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::enums::session_command::SessionCommand;
use crate::errors::{ErrorHandler, SdgError, SdgResult};
use crate::helpers::report_reader::ReportReader;
use crate::logger::report_printer::ReportPrinter;
use crate::services::report_aggregator::{ReportAggregator, ReportBuild};
use crate::services::sdg_client::SdgApiClient;
use crate::structs::config::config::Config;
use crate::structs::report_view::ReportView;
use crate::structs::upload::Upload;
use crate::traits::sdg_classifier::SdgClassifier;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    config: SdgResult<Config>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    /// `config` is the result of `ConfigManager::load` for `config_path`.
    pub const fn new(config_path: Option<PathBuf>, config: SdgResult<Config>) -> Self {
        Self {
            config_path,
            config,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SdgResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Categories => {
                ReportPrinter::print_categories();
                Ok(())
            }
            Commands::Classify { text } => self.classify_command(&text).await,
            Commands::Report { uploads, view, format } => self.report_command(uploads, view, format).await,
            Commands::Session => self.session_command().await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> SdgResult<Config> {
        match ConfigManager::resolve_path(self.config_path.as_deref()) {
            Some(path) => log::info!("📋 Loading config from: {}", path.display()),
            None => log::debug!("No config at {}, using defaults", ConfigManager::default_path().display()),
        }
        if ConfigManager::endpoint_override().is_some() {
            log::debug!("Classifier endpoint overridden by {}", CLASSIFIER_URL_ENV);
        }

        let config = match self.config.clone() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'sdg-classifier init' to create a configuration file.");
                return Err(e);
            }
        };
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    fn aggregator(config: &Config) -> SdgResult<ReportAggregator> {
        let client: Arc<dyn SdgClassifier> = Arc::new(SdgApiClient::from_config(&config.classifier)?);
        log::debug!("Using classifier at {}", config.classifier.endpoint);
        Ok(ReportAggregator::new(client)
            .with_concurrency(config.classifier.concurrency)
            .with_retry(config.retry.clone()))
    }

    fn init_command(&self) -> SdgResult<()> {
        log::info!("🚀 Initializing sdg-classifier configuration...");

        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔧 Run 'sdg-classifier validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> SdgResult<()> {
        log::info!("🔍 Validating sdg-classifier configuration...");
        let config = self.load_config()?;
        let years = config.report.years();

        log::info!("✅ Configuration is valid");
        log::info!("   🌐 Endpoint: {}", config.classifier.endpoint);
        log::info!("   ⏳ Timeout: {}s, concurrency: {}", config.classifier.timeout_secs, config.classifier.concurrency);
        log::info!("   🔄 Retry: {}", if config.retry.enabled { "enabled" } else { "disabled" });
        log::info!("   📅 Report years: {}-{}", years.start(), years.end());
        Ok(())
    }

    async fn classify_command(&self, text: &str) -> SdgResult<()> {
        let config = self.load_config()?;
        let client = SdgApiClient::from_config(&config.classifier)?;
        let predictions = client.classify(text).await?;
        ReportPrinter::print_predictions(text, &predictions);
        Ok(())
    }

    async fn report_command(&self, uploads: Vec<Upload>, view: Option<i32>, format: Option<OutputFormat>) -> SdgResult<()> {
        let config = self.load_config()?;
        let format = format.unwrap_or(config.output.format);
        let mut aggregator = Self::aggregator(&config)?;

        for upload in uploads {
            config.report.check_year(upload.year)?;
            Self::upload(&mut aggregator, upload.year, &upload.path).await?;
        }

        let year = match view {
            Some(year) => year,
            None => aggregator
                .store()
                .earliest_year()
                .ok_or_else(|| SdgError::ReportNotFound { year: config.report.first_year, available: Vec::new() })?,
        };

        Self::show(&aggregator, year, format)
    }

    async fn session_command(&self) -> SdgResult<()> {
        let config = self.load_config()?;
        let mut aggregator = Self::aggregator(&config)?;
        let years = config.report.years();

        log::info!("🗂️ Interactive session, report years {}-{}", years.start(), years.end());
        log::info!("💡 Commands: {}", SessionCommand::USAGE);

        let stdin = io::stdin();
        loop {
            print!("\nsdg> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }
            if input.trim().is_empty() {
                continue;
            }

            let command = match SessionCommand::parse(input.trim()) {
                Ok(command) => command,
                Err(e) => {
                    ErrorHandler::handle_error(&e);
                    continue;
                }
            };

            let outcome = match command {
                SessionCommand::Upload { year, path } => match config.report.check_year(year) {
                    Ok(year) => Self::upload(&mut aggregator, year, &path).await.map(|_| ()),
                    Err(e) => Err(e),
                },
                SessionCommand::View { year } => {
                    let year = year.or_else(|| aggregator.store().earliest_year());
                    match year {
                        Some(year) => Self::show(&aggregator, year, config.output.format),
                        None => Err(SdgError::ReportNotFound { year: *years.start(), available: Vec::new() }),
                    }
                }
                SessionCommand::Years => {
                    let stored = aggregator.store().years();
                    if stored.is_empty() {
                        log::info!("📭 No reports uploaded yet");
                    } else {
                        let stored: Vec<String> = stored.iter().map(ToString::to_string).collect();
                        log::info!("📅 Reports: {}", stored.join(", "));
                    }
                    Ok(())
                }
                SessionCommand::Help => {
                    log::info!("💡 Commands: {}", SessionCommand::USAGE);
                    Ok(())
                }
                SessionCommand::Quit => break,
            };

            if let Err(e) = outcome {
                ErrorHandler::handle_error(&e);
            }
        }

        log::info!("👋 Session closed; {} reports discarded", aggregator.store().len());
        Ok(())
    }

    async fn upload(aggregator: &mut ReportAggregator, year: i32, path: &Path) -> SdgResult<ReportBuild> {
        log::info!("📥 Uploading {} for {}", path.display(), year);
        let lines = ReportReader::read_lines(path).await?;

        match aggregator.build_report(year, &lines).await {
            Ok(build) => Ok(build),
            Err(e) => {
                log::error!("❌ Upload for {} failed, previous report kept: {}", year, e);
                Err(e)
            }
        }
    }

    fn show(aggregator: &ReportAggregator, year: i32, format: OutputFormat) -> SdgResult<()> {
        let report = aggregator.store().require(year)?;
        let view = ReportView::from_report(report);
        match format {
            OutputFormat::Table => {
                ReportPrinter::print_report(&view);
                Ok(())
            }
            OutputFormat::Json => ReportPrinter::print_json(&view),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validate_uses_the_config_it_was_given() {
        let mut runner = CommandRunner::new(None, Ok(Config::default()));
        assert!(runner.run_command(Commands::Validate).await.is_ok());
    }

    #[tokio::test]
    async fn load_failure_is_returned_once_per_command() {
        let failure = SdgError::ConfigurationFileError {
            path: "missing.toml".to_string(),
            reason: "No such file or directory".to_string(),
        };
        let mut runner = CommandRunner::new(None, Err(failure));

        let error = runner.run_command(Commands::Validate).await.unwrap_err();
        assert!(matches!(error, SdgError::ConfigurationFileError { ref path, .. } if path == "missing.toml"));
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_before_any_request() {
        let mut config = Config::default();
        config.classifier.endpoint = "ftp://example.org".to_string();
        let mut runner = CommandRunner::new(None, Ok(config));

        let error = runner
            .run_command(Commands::Classify { text: "clean water".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(error, SdgError::ConfigurationError { .. }));
    }
}
