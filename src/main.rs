use capi_versions::config::Config;
use capi_versions::core::{VersionsError, VersionsResult};
use capi_versions::di::{ConfigProvider, ServiceContainer};
use capi_versions::pipeline::{Pipeline, PipelineOutcome};
use capi_versions::providers::{check_providers, load_providers};
use capi_versions::{format_error_with_help, server};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "capi-versions")]
#[command(about = "Track which Cloud Controller API version each provider runs")]
#[command(version)]
struct Cli {
    /// YAML config file (environment variables override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory artifacts are written to and served from
    #[arg(long, global = true)]
    static_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate artifacts now and hourly, and serve them over HTTP (default)
    Serve,
    /// Generate artifacts once and exit
    Generate,
    /// Print the providers whose endpoint currently responds, as JSON
    CheckProviders {
        /// Connect timeout per provider, in seconds. The whole request is
        /// still bounded by the configured request timeout.
        #[arg(long, default_value_t = 2)]
        connect_timeout: u64,
    },
}

fn load_config(cli: &Cli) -> VersionsResult<Config> {
    let mut config = Config::from_env(cli.config.as_deref())?;
    if let Some(ref dir) = cli.static_dir {
        config.static_dir = dir.clone();
    }
    Ok(config)
}

fn http_client(config: &Config) -> VersionsResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent("capi-versions")
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| VersionsError::Config(format!("Failed to create HTTP client: {}", e)))
}

async fn build_pipeline(config: &Config) -> VersionsResult<Pipeline> {
    let providers = load_providers(&config.providers, &http_client(config)?).await?;
    let services = ServiceContainer::new(config)?;
    Ok(Pipeline::new(services, providers))
}

async fn serve(config: Config) -> VersionsResult<()> {
    let pipeline = Arc::new(build_pipeline(&config).await?);
    let listener = server::bind(config.port).await?;

    let _scheduler = server::spawn_scheduler(pipeline, config.refresh_interval());
    server::serve(listener, &config.static_dir).await
}

async fn generate(config: Config) -> VersionsResult<()> {
    let pipeline = build_pipeline(&config).await?;
    match pipeline.run().await? {
        PipelineOutcome::Published { records } => {
            tracing::info!(
                "Published {} records to {}",
                records,
                config.static_dir.display()
            );
        }
        PipelineOutcome::Skipped => {}
    }
    Ok(())
}

async fn check(config: Config, connect_timeout: u64) -> VersionsResult<()> {
    let providers = load_providers(&config.providers, &http_client(&config)?).await?;
    let working = check_providers(
        &providers,
        Duration::from_secs(connect_timeout),
        config.request_timeout(),
    )
    .await?;
    tracing::info!("{} of {} providers respond", working.len(), providers.len());
    println!("{}", serde_json::to_string(&working)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match load_config(&cli) {
        Ok(config) => match cli.command.unwrap_or(Commands::Serve) {
            Commands::Serve => serve(config).await,
            Commands::Generate => generate(config).await,
            Commands::CheckProviders { connect_timeout } => check(config, connect_timeout).await,
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
