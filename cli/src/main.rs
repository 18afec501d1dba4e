//! CLI entrypoint for yoyaku
//!
//! Wires the layers together with dependency injection and drives one
//! summarization session over the given inputs, printing each summary, its
//! cost, and the running total.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use yoyaku_application::{RequestParams, SummarizeInput, SummarizeRequest, SummarizeUseCase};
use yoyaku_domain::{Message, Model, ModelConfig, ModelTier, SessionRegistry, SummaryPrompt};
use yoyaku_infrastructure::config::FileConfig;
use yoyaku_infrastructure::{
    ConfigLoader, InMemorySessionRegistry, JsonlConversationLogger, OpenAiGateway,
};

#[derive(Parser)]
#[command(
    name = "yoyaku",
    version,
    about = "Summarize text through a hosted chat-completion model, keeping a per-session cost ledger"
)]
struct Cli {
    /// Files to summarize; reads stdin when empty
    inputs: Vec<PathBuf>,

    /// Request shape: templated document call, or full-transcript chat call
    #[arg(long, value_enum, default_value = "document")]
    mode: Mode,

    /// Model tier ("fast" or "capable"); ignored when --model is given
    #[arg(long)]
    tier: Option<String>,

    /// Exact model identifier (e.g. "gpt-4")
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature in [0.0, 2.0]
    #[arg(long)]
    temperature: Option<f64>,

    /// Output language for document summaries
    #[arg(long)]
    language: Option<String>,

    /// Session identifier
    #[arg(long, default_value = "local")]
    session: String,

    /// Explicit config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip config files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Mode {
    Document,
    Transcript,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    for warning in config.validate() {
        warn!("{warning}");
    }

    let model = resolve_model(&cli, &config)?;
    let temperature = cli
        .temperature
        .or(config.models.temperature)
        .unwrap_or(0.0);
    let model_config = ModelConfig::new(model, temperature)?;

    let mut options = config.summary.to_options();
    if let Some(language) = &cli.language {
        options.language = language.clone();
    }

    info!(
        "Using model {} at temperature {}",
        model_config.model,
        model_config.temperature()
    );

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::from_config(&config.provider)?);
    let sessions: Arc<InMemorySessionRegistry> = Arc::new(InMemorySessionRegistry::new());

    let seed = config
        .session
        .seed_prompt
        .clone()
        .unwrap_or_else(|| SummaryPrompt::seed_system().to_string());
    sessions.initialize(&cli.session, Message::system(seed));

    let mut params = RequestParams::default();
    if let Some(secs) = config.provider.timeout_secs {
        params = params.with_request_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(max) = config.provider.max_retries {
        params = params.with_max_retries(max);
    }

    let mut use_case = SummarizeUseCase::new(gateway, sessions.clone()).with_params(params);
    if let Some(path) = &config.logging.conversation_log {
        if let Some(logger) = JsonlConversationLogger::new(path) {
            use_case = use_case.with_conversation_logger(Arc::new(logger));
        }
    }

    let texts = read_inputs(&cli.inputs)?;
    if texts.is_empty() {
        bail!("No input text. Pass file paths or pipe text on stdin.");
    }

    for (label, text) in texts {
        let input = match cli.mode {
            Mode::Document => SummarizeInput::Document {
                text,
                title: label.clone(),
            },
            Mode::Transcript => SummarizeInput::Transcript { text },
        };
        let request = SummarizeRequest {
            session_id: cli.session.clone(),
            input,
            config: model_config.clone(),
            options: options.clone(),
        };

        let result = match use_case.execute(request).await {
            Ok(result) => result,
            Err(e) => {
                // Costs incurred on earlier inputs are already in the
                // ledger; show them before bailing out.
                print!(
                    "{}",
                    render_ledger(&sessions.costs(&cli.session), sessions.total_cost(&cli.session))
                );
                return Err(e.into());
            }
        };

        if let Some(label) = label {
            println!("--- {} ---", label);
        }
        println!("{}", result.text);
        println!();
        println!("cost: ${}", result.cost);
        println!();
    }

    print!(
        "{}",
        render_ledger(&sessions.costs(&cli.session), sessions.total_cost(&cli.session))
    );

    Ok(())
}

/// Per-call entries (when there is more than one) and the running total.
fn render_ledger(costs: &[Decimal], total: Decimal) -> String {
    let mut out = String::new();
    if costs.len() > 1 {
        out.push_str("ledger:\n");
        for cost in costs {
            out.push_str(&format!("  - ${cost}\n"));
        }
    }
    out.push_str(&format!("total: ${total}\n"));
    out
}

/// CLI flags win over config; config over the default tier.
fn resolve_model(cli: &Cli, config: &FileConfig) -> Result<Model> {
    if let Some(name) = &cli.model {
        // Model::from_str is infallible; unknown ids become Custom
        return Ok(name.parse().unwrap());
    }
    if let Some(tier) = &cli.tier {
        return Ok(tier.parse::<ModelTier>()?.model());
    }
    if let Some(model) = config.models.resolve_model() {
        return Ok(model);
    }
    Ok(ModelTier::default().model())
}

fn read_inputs(paths: &[PathBuf]) -> Result<Vec<(Option<String>, String)>> {
    if paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Reading stdin")?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![(None, text)]);
    }

    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            Ok((Some(path.display().to_string()), text))
        })
        .collect()
}
