//! Glance - Terminal dashboard for remote host telemetry
//!
//! Polls a JSON metrics endpoint on a fixed cadence and renders the
//! snapshot into text panels, gauges, and history charts.

mod config;
mod core;
mod metrics;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::app::App;
use crate::metrics::format::{format_bytes, format_duration, format_temp};
use crate::metrics::{HttpMetricsSource, MetricsSource};

#[derive(Parser)]
#[command(name = "glance")]
#[command(author = "Glance Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Terminal dashboard for remote host telemetry", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Metrics endpoint URL (overrides configuration)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Poll interval in milliseconds (overrides configuration)
    #[arg(short, long, value_name = "MS")]
    interval: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one snapshot from the endpoint and print it
    Snapshot,

    /// Initialize a Glance configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

fn setup_logging(verbosity: u8) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // The TUI owns stdout, so logs go to a rolling file instead
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glance")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "glance.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the duration of the program
    let _logging_guard = setup_logging(cli.verbose)?;

    let config_path = cli.config.clone().or_else(|| {
        let default_config = config::Config::default_path()?;
        if default_config.exists() {
            Some(default_config)
        } else {
            None
        }
    });

    let mut config = if let Some(path) = config_path {
        config::Config::load(&path)?
    } else {
        config::Config::default()
    };

    if let Some(url) = cli.url {
        config.endpoint.url = url;
    }
    if let Some(interval) = cli.interval {
        config.endpoint.poll_interval_ms = interval;
    }

    match cli.command {
        Some(Commands::Snapshot) => {
            print_snapshot(&config).await?;
        }
        Some(Commands::Init { force }) => {
            let path = match cli.config {
                Some(path) => path,
                None => config::Config::default_path()
                    .context("could not determine the configuration directory")?,
            };
            config::init_config(&path, force)?;
        }
        None => {
            // Launch the main TUI
            let mut app = App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}

/// One-shot fetch printed through the same formatting the dashboard uses.
async fn print_snapshot(config: &config::Config) -> Result<()> {
    let source = HttpMetricsSource::new(config.endpoint.url.clone());
    let snapshot = source.fetch().await?;

    println!("endpoint   {}", config.endpoint.url);
    println!("cpu        {:.1} %", snapshot.cpu);
    println!("ram        {:.1} %", snapshot.ram);
    println!("swap       {:.1} %", snapshot.swap);
    println!(
        "disk       {:.1} % ({:.1} GB of {:.1} GB, {:.1} GB free)",
        snapshot.disk, snapshot.disk_used, snapshot.disk_total, snapshot.disk_avail
    );
    println!("load       {:.2}", snapshot.load);
    println!("uptime     {}", format_duration(snapshot.uptime));
    println!("users      {}", snapshot.users);
    println!("temp       {}", format_temp(snapshot.temp));
    println!("temp_cpu0  {}", format_temp(snapshot.temp_cpu0));
    println!("temp_cpu1  {}", format_temp(snapshot.temp_cpu1));
    println!("temp_nvme  {}", format_temp(snapshot.temp_nvme));
    println!("iface      {}", snapshot.net_iface);
    println!("rx         {}", format_bytes(snapshot.net_rx));
    println!("tx         {}", format_bytes(snapshot.net_tx));

    Ok(())
}
