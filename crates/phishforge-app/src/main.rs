//! # phishforge binary
//!
//! Command-line entry point: submit an email or URL for analysis, or
//! normalize a saved backend response.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use phishforge_app::{
    AppConfig, AppError, UreqTransport, app_version, assess_json, assessment_json, init_tracing,
    render_report, run_analysis, version_label,
};
use phishforge_analysis_contract::NormalizedAssessment;
use phishforge_client::AnalysisClient;
use phishforge_core::{AnalysisMode, AnalysisRequest, ExampleKind};
use phishforge_translate::TranslationTable;
use phishforge_ui::UiState;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "phishforge", version = app_version(), about = "Phishing email and URL analysis client")]
struct Cli {
    /// Print the normalized assessment as JSON instead of a report.
    #[arg(long, global = true)]
    json: bool,

    /// Backend base URL; overrides PHISHFORGE_API_BASE_URL.
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a full email.
    Email(EmailArgs),

    /// Analyze a single URL.
    Url {
        /// URL to check.
        url: String,
    },

    /// Analyze one of the bundled sample inputs.
    Example {
        /// phishing, legitimate, phishing-url or legitimate-url.
        kind: ExampleKind,
    },

    /// Normalize a saved backend response without any network call.
    Render {
        /// Mode the response was produced for.
        #[arg(long, default_value = "email")]
        mode: AnalysisMode,

        /// Response file, or `-` for stdin.
        file: PathBuf,
    },

    /// Probe the backend health endpoint.
    Health,
}

#[derive(Args)]
struct EmailArgs {
    /// Sender address.
    #[arg(long, default_value = "")]
    sender: String,

    /// Subject line.
    #[arg(long, default_value = "")]
    subject: String,

    /// Email body text.
    #[arg(long, conflicts_with = "body_file", required_unless_present = "body_file")]
    body: Option<String>,

    /// Read the body from a file, or `-` for stdin.
    #[arg(long)]
    body_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let table = TranslationTable::builtin();

    match run(cli, table) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.user_message(table));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, table: &TranslationTable) -> Result<ExitCode, AppError> {
    let mut config = AppConfig::from_env()?;
    if let Some(base_url) = cli.api_base_url {
        config.api_base_url = base_url;
    }
    init_tracing(&config.log_level);
    debug!(base_url = %config.api_base_url, "configuration loaded");

    let request = match cli.command {
        Command::Render { mode, file } => {
            let raw = read_input(&file)?;
            let assessment = assess_json(&raw, mode, table)?;
            print_assessment(&assessment, cli.json)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Health => {
            let client = build_client(&config)?;
            return Ok(if client.check_health() {
                println!("ok");
                ExitCode::SUCCESS
            } else {
                println!("unavailable");
                ExitCode::FAILURE
            });
        }
        Command::Email(args) => {
            let body = match (args.body, args.body_file) {
                (Some(body), _) => body,
                (None, Some(path)) => read_input(&path)?,
                (None, None) => String::new(),
            };
            AnalysisRequest::email(args.sender, args.subject, body)?
        }
        Command::Url { url } => AnalysisRequest::url(url)?,
        Command::Example { kind } => kind.request(),
    };

    let client = build_client(&config)?;
    if config.health_check && !client.check_health() {
        warn!("backend health probe failed; submitting anyway");
    }

    let mut state = UiState::new(version_label());
    let assessment = run_analysis(&client, &request, table, &mut state)?;
    print_assessment(&assessment, cli.json)?;
    Ok(ExitCode::SUCCESS)
}

fn build_client(config: &AppConfig) -> Result<AnalysisClient, AppError> {
    let transport = Arc::new(UreqTransport::new(config.request_timeout));
    Ok(AnalysisClient::new(&config.api_base_url, transport)?)
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn print_assessment(assessment: &NormalizedAssessment, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", assessment_json(assessment)?);
    } else {
        print!("{}", render_report(assessment));
    }
    Ok(())
}
