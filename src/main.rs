use clap::Parser;
use spotwatch::cli::{Cli, Commands};
use spotwatch::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // SMTP credentials may live in a .env file.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = spotwatch::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting monitor with read API");
            args.execute(config).await?;
        }
        Commands::Watch(args) => {
            tracing::info!("Starting standalone monitor");
            args.execute(config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  URL: {}", config.monitor.url);
            println!(
                "  Refresh: every {}s (render wait {}s, settle {}s)",
                config.monitor.refresh_interval_secs,
                config.monitor.render_wait_secs,
                config.monitor.settle_secs
            );
            println!("  WebDriver: {}", config.monitor.webdriver_url);
            println!(
                "  Alerts: gold={:?} silver={:?} recipient={:?}",
                config.alerts.gold_threshold,
                config.alerts.silver_threshold,
                config.alerts.recipient
            );
            println!("  API: {}", config.server.bind_addr);
        }
    }

    Ok(())
}
