use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payagent::application::orchestrator::PaymentOrchestrator;
use payagent::application::scorer::SelectionScorer;
use payagent::config::{ProviderSettings, load_weights};
use payagent::infrastructure::providers::default_registry;
use payagent::interfaces::json::capabilities::Capabilities;
use payagent::interfaces::json::outcome_writer::OutcomeWriter;
use payagent::interfaces::json::request_reader::CheckoutRequest;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Timeout for each provider invocation, in milliseconds
    #[arg(long, global = true, env = "PAYAGENT_INVOCATION_TIMEOUT_MS", default_value_t = 10_000)]
    invocation_timeout_ms: u64,

    /// JSON file overriding the selection weights
    #[arg(long, global = true, env = "PAYAGENT_WEIGHTS")]
    weights: Option<PathBuf>,

    #[command(flatten)]
    providers: ProviderSettings,
}

#[derive(Subcommand)]
enum Command {
    /// Select a payment method for a checkout request and submit it
    Checkout {
        /// JSON file with `orderData` and optional `userProfile`
        request: PathBuf,
    },
    /// List the available payment methods and features
    Methods,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "payagent=info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let registry = default_registry(&cli.providers).into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    match cli.command {
        Command::Methods => {
            writer
                .write_json(&Capabilities::from_registry(&registry))
                .into_diagnostic()?;
        }
        Command::Checkout { request } => {
            let weights = load_weights(cli.weights.as_deref()).into_diagnostic()?;
            let file = File::open(request).into_diagnostic()?;
            let (order, profile) = CheckoutRequest::from_reader(BufReader::new(file))
                .and_then(CheckoutRequest::into_validated)
                .into_diagnostic()?;

            let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::new(weights))
                .with_invocation_timeout(Duration::from_millis(cli.invocation_timeout_ms));
            let outcome = orchestrator.process_payment(&order, &profile).await;
            writer.write_outcome(&outcome).into_diagnostic()?;
        }
    }

    Ok(())
}
