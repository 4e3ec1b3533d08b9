mod cli;
mod content;
mod panels;
mod session;
mod settings;

use std::io::IsTerminal;
use std::sync::Arc;

use mintdesk_common::DeskError;
use mintdesk_config::DeskConfig;
use mintdesk_github::{GithubClient, GithubService};
use mintdesk_wm::WindowManager;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use content::PortfolioContent;
use session::Session;

const DEFAULT_DIRECTIVE: &str = "mintdesk=info";

fn init_logging(directive: &str) {
    let directive = directive
        .parse()
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().expect("static directive parses"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn github_service(config: &DeskConfig) -> Result<Arc<GithubService>, DeskError> {
    let client = GithubClient::new(settings::client_config(&config.github))?;
    Ok(Arc::new(GithubService::new(
        Arc::new(client),
        settings::service_settings(&config.github),
    )))
}

async fn run(args: cli::Args, mut config: DeskConfig) -> Result<(), DeskError> {
    if let Some(user) = args.user {
        config.github.username = user;
    }
    let username = config.github.username.clone();

    let github = if args.offline {
        tracing::info!("Offline mode, GitHub panels disabled");
        None
    } else {
        Some(github_service(&config)?)
    };

    let wm = WindowManager::new(
        settings::wm_settings(&config),
        PortfolioContent::new(username.clone()),
    );
    let mut session = Session::new(wm, github, username, std::io::stdout());

    match args.script {
        Some(path) => {
            tracing::info!("Running script: {}", path.display());
            let file = tokio::fs::File::open(&path).await?;
            session.run(BufReader::new(file)).await
        }
        None => {
            if std::io::stdin().is_terminal() {
                println!("mintdesk v{}: type `help` for commands", env!("CARGO_PKG_VERSION"));
            }
            session.run(BufReader::new(tokio::io::stdin())).await
        }
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let loaded = mintdesk_config::load_from(args.config.as_deref());
    let level = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.clone(),
        (None, Err(_)) => "info".to_string(),
    };
    init_logging(&cli::log_directive(&level));

    tracing::info!("mintdesk v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DeskConfig::default()
    });
    tracing::info!(user = %config.github.username, "Config loaded");

    if let Err(e) = run(args, config).await {
        tracing::error!("Session error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
