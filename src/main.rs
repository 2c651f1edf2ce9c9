mod cli;

use brew_deps::adapters::outbound::console::StderrProgressReporter;
use brew_deps::adapters::outbound::filesystem::FileSystemReader;
use brew_deps::adapters::outbound::homebrew::BrewCliClient;
use brew_deps::application::dto::ReportRequest;
use brew_deps::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use brew_deps::application::use_cases::{CollectReportUseCase, ExploreGraphUseCase};
use brew_deps::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use brew_deps::shared::error::ExitCode;
use brew_deps::shared::Result;
use clap::Parser;
use cli::{Args, CollectArgs, Command, GraphArgs};
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version output go through the same path
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Graph(graph_args) => run_graph(graph_args),
        Command::Collect(collect_args) => run_collect(collect_args).await,
    }
}

fn run_graph(args: GraphArgs) -> Result<()> {
    let config = load_config(args.common.config.as_deref())?;
    let request = args.to_request(&config, color_supported());

    let use_case = ExploreGraphUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let output = use_case.execute(&request)?;

    PresenterFactory::create(PresenterType::Stdout).present(&output)
}

async fn run_collect(args: CollectArgs) -> Result<()> {
    let config = load_config(args.common.config.as_deref())?;
    let settings = args
        .settings(&config, color_supported())
        .map_err(anyhow::Error::msg)?;

    let source = BrewCliClient::new(Duration::from_secs(settings.timeout_secs));
    let use_case = CollectReportUseCase::new(source, StderrProgressReporter::new());
    let report = use_case
        .execute(ReportRequest::new(settings.max_workers))
        .await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.use_color);
    let formatted_output = formatter.format(&report)?;

    let presenter_type = match settings.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)
}

/// Loads an explicit config file, or discovers one in the current directory
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        let config = load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(config);
    }

    let current_dir = std::env::current_dir()?;
    match discover_config(&current_dir)? {
        Some(config) => {
            eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Color is used only on a terminal and when `NO_COLOR` is unset
fn color_supported() -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    std::io::stdout().is_terminal() && !no_color_env
}
