use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::{debug, error, info};

use gatehouse::cli::{self, REJECTED_TOKEN_EXIT_CODE};
use gatehouse::{JwtConfig, PolicyConfig};

#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(about = "Gatehouse - policy resolution and session token tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resource tree for role keys in a policy file
    Resources {
        /// Policy CSV (defaults to POLICY_PATH)
        #[arg(short = 'p', long)]
        policy: Option<PathBuf>,

        /// Role keys such as `leader:sales`; every subject in the file if omitted
        roles: Vec<String>,
    },
    /// Validate a session token with JWT_SECRET and print its authorization context
    InspectToken {
        /// The raw token, without the `Bearer` prefix
        token: String,

        /// Issuer recorded for the user; ghost issuers are also accepted
        #[arg(short = 'i', long)]
        expected_issuer: Option<String>,
    },
}

fn main() -> ExitCode {
    dotenv().ok();
    gatehouse_observability::init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resources { policy, roles } => handle_resources(policy, &roles),
        Commands::InspectToken {
            token,
            expected_issuer,
        } => handle_inspect_token(&token, expected_issuer.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_resources(policy: Option<PathBuf>, roles: &[String]) -> anyhow::Result<ExitCode> {
    let path = policy.unwrap_or_else(|| PolicyConfig::from_env().policy_path);

    let resources = cli::resources(&path, roles)?;
    debug!(count = resources.len(), "Resources resolved");

    println!("{}", serde_json::to_string_pretty(&resources)?);
    Ok(ExitCode::SUCCESS)
}

fn handle_inspect_token(token: &str, expected_issuer: Option<&str>) -> anyhow::Result<ExitCode> {
    let jwt_config = JwtConfig::from_env();

    match cli::inspect_token(token, expected_issuer, &jwt_config) {
        Ok(ctx) => {
            info!("{}", cli::session_summary(&ctx));
            println!("{}", serde_json::to_string_pretty(&ctx)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&cli::rejection_body(err))?);
            Ok(ExitCode::from(REJECTED_TOKEN_EXIT_CODE))
        }
    }
}
