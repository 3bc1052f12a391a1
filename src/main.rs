use clap::Parser;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kiosk_maintenance::cleanup::{run_cleanup, AssumeYes, ConfirmationGate, StdinGate};
use kiosk_maintenance::config::Config;
use kiosk_maintenance::db::VideoRepository;

#[derive(Parser)]
#[command(name = "cleanup-legacy-videos")]
#[command(
    about = "Delete RUNWAY_GENERATED/VEO_GENERATED rows from the videos table",
    long_about = None
)]
struct Cli {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,kiosk_maintenance=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, cli.yes).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: &Config, assume_yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting legacy video cleanup with config: {:?}", config);

    println!(
        "Connecting to database {} at {}...",
        config.db_name, config.db_host
    );
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await?;
    info!("Database connection established");

    let repo = VideoRepository::new(pool);
    let gate: Box<dyn ConfirmationGate> = if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinGate)
    };

    run_cleanup(&repo, gate.as_ref()).await?;
    Ok(())
}
