use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use sdg_classifier::config::config_manager::ConfigManager;
use sdg_classifier::errors::ErrorHandler;
use sdg_classifier::structs::cli::Cli;
use sdg_classifier::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = ConfigManager::load(cli.config.as_deref());
    let verbose = cli.verbose || config.as_ref().is_ok_and(|config| config.output.verbose);
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();

    let mut runner = CommandRunner::new(cli.config, config);
    match runner.run_command(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
