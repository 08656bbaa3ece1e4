//! CLI entrypoint for PoliGrade
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use poligrade_application::{
    AuditLogger, BrowseRosterInput, BrowseRosterUseCase, ManageRosterUseCase, NoAuditLogger,
    OfficeholderRepository, RunQuizUseCase, ScriptedResponder, VerifyAccessUseCase,
};
use poligrade_domain::{OfficeholderDraft, OfficeholderId, StateCode};
use poligrade_infrastructure::{
    ConfigLoader, FileConfig, JsonOfficeholderStore, JsonQuestionSource, JsonlAuditLogger,
    SitePasswordGate,
};
use poligrade_presentation::{
    AdminAction, AdminArgs, Cli, Command, OutputConfig, OutputFormatter, QuizArgs, QuizRepl,
    RosterFilterArgs, formatter_for,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;

    let output = OutputConfig::new(config.output.format, config.output.color)
        .with_cli_override(cli.output);
    output.apply();
    let formatter = formatter_for(output.format);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting PoliGrade");

    match command {
        Command::Quiz(args) => {
            run_quiz(args, &config, &output, formatter.as_ref(), cli.quiet).await
        }
        Command::Grades(args) => run_grades(args, &config, formatter.as_ref()).await,
        Command::Admin(args) => run_admin(args, &config, formatter.as_ref()).await,
        Command::States => {
            println!("{}", formatter.format_states(&StateCode::all_by_name()));
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("Config: {}", issue.error);
    }
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.error.to_string())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok(config)
}

async fn open_roster(config: &FileConfig) -> Result<Arc<dyn OfficeholderRepository>> {
    let store = JsonOfficeholderStore::open(&config.data.politicians)
        .await
        .with_context(|| {
            format!(
                "Failed to open roster {}",
                config.data.politicians.display()
            )
        })?;
    Ok(Arc::new(store))
}

fn audit_logger(config: &FileConfig) -> Arc<dyn AuditLogger> {
    match config
        .logging
        .audit_log
        .as_ref()
        .and_then(JsonlAuditLogger::new)
    {
        Some(logger) => {
            info!("Audit log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoAuditLogger),
    }
}

async fn run_quiz(
    args: QuizArgs,
    config: &FileConfig,
    output: &OutputConfig,
    formatter: &dyn OutputFormatter,
    quiet: bool,
) -> Result<()> {
    let source = Arc::new(JsonQuestionSource::new(&config.data.questionnaire));
    let use_case = RunQuizUseCase::new(source);

    match args.answers {
        Some(script) => {
            let responder = ScriptedResponder::parse(&script)
                .map_err(|c| anyhow!("Invalid answer '{}': use y/n or 1/0", c))?;
            let run = use_case.execute(&responder).await?;
            println!("{}", formatter.format_quiz_run(&run));
        }
        None => {
            let run = QuizRepl::new(use_case)
                .with_progress(!quiet)
                .run()
                .await?;
            // The prompt already printed the result screen for completed runs
            if output.is_json() || run.outcome().is_none() {
                println!("{}", formatter.format_quiz_run(&run));
            }
        }
    }

    Ok(())
}

async fn run_grades(
    args: RosterFilterArgs,
    config: &FileConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let use_case = BrowseRosterUseCase::new(open_roster(config).await?);
    let spec = args.to_spec(config.roster.page_size);

    let result = use_case.execute(BrowseRosterInput::new(spec)).await?;
    println!("{}", formatter.format_roster(&result, false));
    Ok(())
}

async fn run_admin(
    args: AdminArgs,
    config: &FileConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let audit = audit_logger(config);

    let gate = Arc::new(SitePasswordGate::from_config(&config.auth));
    let session = VerifyAccessUseCase::new(gate)
        .with_audit_logger(audit.clone())
        .with_session_ttl_hours(config.auth.session_ttl_hours)
        .execute(args.password.as_deref())?;

    let repository = open_roster(config).await?;
    let manage = ManageRosterUseCase::new(repository.clone()).with_audit_logger(audit);

    match args.action {
        AdminAction::List(filters) => {
            let spec = filters.to_spec(config.roster.page_size);
            let result = BrowseRosterUseCase::new(repository)
                .execute(BrowseRosterInput::new(spec))
                .await?;
            println!("{}", formatter.format_roster(&result, true));
        }
        AdminAction::Show { id } => {
            let record = manage.get(&session, &OfficeholderId::new(id)).await?;
            println!("{}", formatter.format_record("Officeholder", &record));
        }
        AdminAction::Add(fields) => {
            let record = manage
                .create(&session, OfficeholderDraft::from(fields))
                .await?;
            println!("{}", formatter.format_record("Created", &record));
        }
        AdminAction::Update { id, fields } => {
            let id = OfficeholderId::new(id);
            let existing = manage.get(&session, &id).await?;
            let draft = fields.apply(OfficeholderDraft::from(&existing));
            let record = manage.update(&session, &id, draft).await?;
            println!("{}", formatter.format_record("Updated", &record));
        }
        AdminAction::Delete { id } => {
            let record = manage.delete(&session, &OfficeholderId::new(id)).await?;
            println!("{}", formatter.format_record("Deleted", &record));
        }
    }

    Ok(())
}
