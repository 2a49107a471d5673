/// Roster Server - user records over HTTP
use clap::{Parser, Subcommand};
use roster_core::{User, UserUsecase};
use roster_server::{config::ServerConfig, create_router, services::UserService, state::AppState};
use roster_storage::LocalUserRepository;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user records service", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List users, oldest first
    ListUsers {
        /// Page size
        #[arg(short, long, default_value_t = 0)]
        num: i64,
        /// Cursor returned by a previous page
        #[arg(long, default_value = "")]
        cursor: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            name,
            email,
            password,
        } => {
            add_user(&config, name, email, password).await?;
        }
        Commands::ListUsers { num, cursor } => {
            list_users(&config, &cursor, num).await?;
        }
    }

    Ok(())
}

/// Connect to the database and build the use case over it
async fn build_service(config: &ServerConfig) -> anyhow::Result<UserService> {
    let pool =
        roster_storage::create_pool(&config.storage.database_url, config.storage.max_connections)
            .await?;
    roster_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    let repository = Arc::new(LocalUserRepository::new(pool));
    Ok(UserService::new(repository, config.context.timeout()))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Request timeout: {:?}", config.context.timeout());

    let service = build_service(&config).await?;
    let app_state = AppState::new(Arc::new(service));

    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(
    config: &ServerConfig,
    name: String,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let service = build_service(config).await?;

    let mut user = User::new(name, password, email);
    service.signup(&mut user).await?;

    println!("Created user {} - {} <{}>", user.id, user.name, user.email);
    Ok(())
}

async fn list_users(config: &ServerConfig, cursor: &str, num: i64) -> anyhow::Result<()> {
    let service = build_service(config).await?;
    let page = service.fetch(cursor, num).await?;

    println!("Users:");
    for user in &page.users {
        println!("  {} - {} <{}>", user.id, user.name, user.email);
    }
    if let Some(next) = page.next_cursor {
        println!("Next cursor: {}", next);
    }

    Ok(())
}
