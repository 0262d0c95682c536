use anyhow::Context;
use clap::Parser;
use sayu_api::Server;
use sayu_core::{ConfigManager, LoggingConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sayu-api", version, about = "SAYU personality compatibility and recommendation API")]
struct Cli {
    /// Path to a TOML config file. Defaults to ./.sayu.toml, then ~/.sayu/config.toml.
    #[arg(short, long, env = "SAYU_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},security=info", logging.level)));

    let json = logging.format.eq_ignore_ascii_case("json");
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer().pretty()))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", ConfigManager::default_config_toml()?);
        return Ok(());
    }

    // Tracing must be up before `finish` logs the config summary.
    let discovered =
        ConfigManager::discover(cli.config.as_deref()).with_context(|| match &cli.config {
            Some(path) => format!("loading config from {}", path.display()),
            None => "loading configuration".to_string(),
        })?;
    init_tracing(&discovered.logging());
    let loaded = discovered.finish().context("validating configuration")?;

    let mut settings = loaded.config().clone();
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    let config = ConfigManager::from_config(settings).context("applying CLI overrides")?;

    match loaded.config_path() {
        Some(path) => info!(config = %path.display(), "SAYU API starting"),
        None => info!("SAYU API starting with default configuration"),
    }

    let server = Server::new(Arc::new(config))
        .await
        .context("initialising server")?;
    info!(addr = %server.addr(), "Server initialised");
    server.run().await?;
    Ok(())
}
