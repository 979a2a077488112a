//! Thermo Dashboard terminal client
//!
//! Polls the sensor API and prints the dashboard to stdout. Logs go to
//! stderr. Type `help` for commands.
//!
//! # Configuration
//!
//! See `thermo-dash --print-config`. Environment variables:
//! - `THERMO_REQUEST_TIMEOUT_MS`: Sensor API request timeout (default: 5000)
//! - `THERMO_LOG_LEVEL`: Log level (default: info)
//! - `THERMO_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use thermo_dashboard::config::{generate_default_config, Config, LoggingConfig};
use thermo_dashboard::dashboard::{Dashboard, PollSchedule};
use thermo_dashboard::terminal::{Command, Output, TerminalChart, TerminalView, HELP};
use thermo_dashboard::{HttpSensorApi, Preset};

#[derive(Parser)]
#[command(name = "thermo-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal dashboard for a temperature sensor API")]
struct Cli {
    /// Config file (default: user config dir, then ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial statistics window (24h, 7d, 30d, reset)
    #[arg(short, long, default_value = "reset")]
    preset: Preset,

    /// Fetch once, print, and exit
    #[arg(long)]
    once: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!("Thermo Dashboard v{}", env!("CARGO_PKG_VERSION"));

    let client_config = config.client.client_config();
    tracing::info!(
        base_url = %client_config.base_url,
        timeout_ms = client_config.request_timeout_ms,
        "Sensor API"
    );

    let api = Arc::new(HttpSensorApi::new(client_config).context("Failed to build HTTP client")?);
    let out = Output::stdout();
    let view = Arc::new(TerminalView::new(out.clone(), config.display.color));
    let charts = TerminalChart::new(out.clone(), config.display.sparkline_width);
    let dashboard = Arc::new(Dashboard::new(api, view, charts));

    if cli.once {
        dashboard.set_window(cli.preset).await;
        let current = dashboard.fetch_current().await;
        let statistics = dashboard.fetch_statistics().await;
        dashboard.clear_chart().await;

        current.context("Failed to load current temperature")?;
        statistics.context("Failed to load statistics")?;
        return Ok(());
    }

    let polls = dashboard.start_with(cli.preset, PollSchedule::default()).await;
    out.line("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    tracing::debug!("stdin closed");
                    // Keep polling until interrupted
                    tokio::signal::ctrl_c().await?;
                    break;
                };

                match Command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => run_command(&dashboard, &out, command).await,
                    Err(e) => out.line(&e.to_string()),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    tracing::info!("Shutting down...");
    polls.stop();
    dashboard.clear_chart().await;

    Ok(())
}

async fn run_command(dashboard: &Dashboard<TerminalChart>, out: &Output, command: Command) {
    // Failures are logged and shown by the dashboard itself
    match command {
        Command::Preset(preset) => {
            let _ = dashboard.apply_preset(preset).await;
        }
        Command::Window(inputs) => {
            dashboard.set_window_inputs(inputs).await;
            out.line("Window inputs updated; type 'apply' to load.");
        }
        Command::Apply => {
            let _ = dashboard.apply().await;
        }
        Command::Help => out.line(HELP),
        Command::Quit => {}
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "thermo_dashboard={level},thermo_dash={level}",
            level = logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
