pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod i18n;
pub mod models;
pub mod services;
pub mod state;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
use config::GeneralConfig;
use services::Session;
use state::AppState;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(lang) = &cli.lang {
        config.general.language = Some(lang.clone());
    }
    config.validate()?;

    init_tracing(&config.general);

    let command = cli.command.unwrap_or(Commands::Top { limit: None });
    debug!(?command, "Starting");

    if command == Commands::Init {
        return cli::cmd_init();
    }

    let mut state = AppState::new(config).await?;
    let mut session = Session::new();

    match command {
        Commands::Shell => cli::cmd_shell(&mut state, &mut session).await,
        command => cli::execute(&mut state, &mut session, command).await,
    }
}

fn init_tracing(general: &GeneralConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries command output, logs go to stderr
    if general.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
