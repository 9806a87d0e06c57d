/// Chirp Server - social-media style HTTP API over a flat-file user store
use chirp_core::{types::Signup, validation::validate_signup, UserStore};
use chirp_server::{api, config::ServerConfig, state::AppState};
use chirp_storage::JsonFileStore;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "chirp-server")]
#[command(about = "Chirp users + tweets API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Register a new user from the command line
    AddUser {
        /// User ID (UUID); generated when omitted
        #[arg(long)]
        id: Option<String>,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password (checked against the configured policy, never stored)
        #[arg(long)]
        password: String,
        /// Given name
        #[arg(long)]
        first_name: String,
        /// Family name
        #[arg(long)]
        last_name: String,
        /// Birth date, ISO 8601 (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,
    },
    /// List all registered users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirp_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::AddUser {
            id,
            email,
            password,
            first_name,
            last_name,
            birth_date,
        } => {
            let signup = Signup {
                id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                email,
                password,
                first_name,
                last_name,
                birth_date,
            };
            add_user(signup).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&std::path::Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Chirp Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize the user store
    let store = JsonFileStore::new(config.storage.users_file.clone());
    store.initialize().await?;
    let store = Arc::new(store);
    tracing::info!("User store at {}", config.storage.users_file.display());

    // Build application state and router
    let app_state = AppState::new(store, config.signup.password_policy());
    let app = api::router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(signup: Signup) -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    config.validate()?;

    let store = JsonFileStore::new(config.storage.users_file.clone());
    store.initialize().await?;

    let user = validate_signup(&signup, &config.signup.password_policy())?;
    let user = store.append(user).await?;

    println!("Registered {} <{}>", user.id, user.email);
    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    config.validate()?;

    let store = JsonFileStore::new(config.storage.users_file.clone());
    let users = store.list().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.email);
    }

    Ok(())
}
