mod config;
mod http;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use migration::{Migrator, MigratorTrait};
use platform_db::{DatabaseSettings, DbPool, connect};
use platform_obs::{ObsConfig, init_tracing, shutdown_tracing};
use tracing::{error, info};

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "employee-server", version, about = "Employee records service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
    /// Run database migrations.
    #[command(subcommand)]
    Migrate(MigrateCommand),
}

#[derive(Subcommand, Debug)]
enum MigrateCommand {
    /// Apply pending migrations.
    Up,
    /// Rollback the most recent migration.
    Down,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<&ServeCommand> for ServeConfig {
    fn from(value: &ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::from_env())?;
    let cli = Cli::parse();
    let config = Arc::new(AppConfig::load());
    let outcome = match cli.command {
        Command::Serve(cmd) => run_server(&cmd, config).await,
        Command::Migrate(action) => {
            let pool = setup_pool(&config.database).await?;
            match action {
                MigrateCommand::Up => migrate_up(&pool).await,
                MigrateCommand::Down => migrate_down(&pool).await,
            }
        }
    };
    shutdown_tracing();
    outcome
}

async fn setup_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    connect(settings)
        .await
        .context("failed to open database pool")
}

async fn run_server(cmd: &ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let pool = setup_pool(&config.database).await?;
    if config.migrate_on_startup {
        apply_startup_migrations(&pool).await;
    }
    let state = AppState { pool, config };
    http::serve(cmd.into(), state).await
}

/// Startup migrations are best effort: a failure is logged and serving continues.
async fn apply_startup_migrations(pool: &DbPool) {
    match Migrator::up(pool, None).await {
        Ok(()) => info!("database migrations applied"),
        Err(err) => error!(error = %err, "an error occurred while migrating the database"),
    }
}

async fn migrate_up(pool: &DbPool) -> Result<()> {
    Migrator::up(pool, None).await?;
    info!("database migrations applied");
    Ok(())
}

async fn migrate_down(pool: &DbPool) -> Result<()> {
    Migrator::down(pool, Some(1)).await?;
    info!("most recent migration rolled back");
    Ok(())
}
