use identity_formulator::adapters::outbound::console::StderrProgressReporter;
use identity_formulator::adapters::outbound::filesystem::FileSystemReader;
use identity_formulator::application::dto::FormulationResponse;
use identity_formulator::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use identity_formulator::application::use_cases::FormulateIdentityUseCase;
use identity_formulator::cli::{Args, Commands};
use identity_formulator::config::{self, ConfigFile, DEFAULT_DATABASE_PATH, DEFAULT_OUTPUT_PATH};
use identity_formulator::identity_formulation::domain::ComponentIds;
use identity_formulator::ports::inbound::IdentityFormulationPort;
use identity_formulator::ports::outbound::ProgressReporter;
use identity_formulator::shared::error::ExitCode;
use identity_formulator::shared::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
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

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let database_path = args
        .database
        .clone()
        .or_else(|| config.database.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

    let progress_reporter = if std::io::stderr().is_terminal() {
        StderrProgressReporter::colored()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = FormulateIdentityUseCase::load(
        &FileSystemReader::new(),
        &database_path,
        progress_reporter.clone(),
    )?;

    let strategy = args
        .command
        .strategy()
        .or_else(|| config.strategy_name())
        .unwrap_or_default();
    let strategy = Some(strategy.as_str());

    let response = match &args.command {
        Commands::List { format } => {
            let listing = use_case.list_components()?;
            let colored = args.output.is_none() && std::io::stdout().is_terminal();
            let content =
                FormatterFactory::create_listing_formatter(*format, colored).format_listing(&listing)?;
            let presenter_type = match &args.output {
                Some(path) => PresenterType::File(path.clone()),
                None => PresenterType::Stdout,
            };
            return PresenterFactory::create(presenter_type).present(&content);
        }
        Commands::Preset { name, .. } => use_case.formulate_from_preset(name, strategy)?,
        Commands::Random { .. } => use_case.formulate_random(strategy)?,
        Commands::Custom {
            cpu,
            gpu,
            motherboard,
            network,
            storage,
            os,
            ..
        } => {
            let ids = ComponentIds::new(
                cpu.as_str(),
                gpu.as_str(),
                motherboard.as_str(),
                network.as_str(),
                storage.as_str(),
                os.as_str(),
            );
            use_case.formulate_from_components(&ids, strategy)?
        }
    };

    let content = FormatterFactory::create_identity_formatter().format_identity(&response.identity)?;

    let output_path = args
        .output
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    let presenter_type = PresenterType::from_flags(args.stdout, output_path);
    PresenterFactory::create(presenter_type.clone()).present(&content)?;

    report_summary(&progress_reporter, &response, &presenter_type);
    Ok(())
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

fn report_summary(
    reporter: &StderrProgressReporter,
    response: &FormulationResponse,
    presenter_type: &PresenterType,
) {
    let identity = &response.identity;
    reporter.report_completion(&format!(
        "✨ Generated identity: {}",
        identity.identity_profile
    ));
    reporter.report(&format!("   Hostname: {}", identity.hostname));
    reporter.report(&format!("   CPU: {}", identity.cpu.model));
    reporter.report(&format!("   Strategy: {}", identity.metadata.strategy));
    if let PresenterType::File(path) = presenter_type {
        reporter.report(&format!("✅ Output complete: {}", path.display()));
    }
}
