//! Bogor Nexus CLI
//!
//! Drives the dashboard headlessly:
//! - Watch a panel update live in the terminal
//! - Tour every panel, mounting and tearing down timers
//! - Export a panel's charts as SVG documents
//! - Print the menu or a default config file

use anyhow::Context;
use bogor_nexus::config::{generate_default_config, Config};
use bogor_nexus::render::{write_snapshot, TextRenderer};
use bogor_nexus::{logging, NexusResult, Panel, PanelSnapshot, Shell, MENU_ITEMS};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "nexus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bogor Nexus smart city dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Disable ANSI colours
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mount a panel and redraw it until interrupted
    Watch {
        /// Panel to show (dashboard, analytics, neural, system)
        #[arg(short, long, default_value = "dashboard")]
        panel: Panel,
        /// Stop after this many seconds
        #[arg(short, long)]
        duration_secs: Option<u64>,
        /// Redraw interval, overriding the config
        #[arg(short, long)]
        refresh_ms: Option<u64>,
    },

    /// Cycle through every panel
    Tour {
        /// Time spent on each panel
        #[arg(short, long, default_value_t = 3000)]
        dwell_ms: u64,
        /// Number of full cycles
        #[arg(short, long, default_value_t = 1)]
        rounds: u32,
    },

    /// Write the panel's charts as SVG files
    Snapshot {
        /// Panel to capture
        #[arg(short, long)]
        panel: Panel,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Let simulators run this long before capturing
        #[arg(short, long, default_value_t = 0)]
        settle_ms: u64,
    },

    /// List menu entries
    Menu,

    /// Print or write the default config file
    Config {
        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.logging);
    tracing::debug!("Bogor Nexus v{}", env!("CARGO_PKG_VERSION"));

    let color = config.display.color && !cli.no_color && cli.format == OutputFormat::Text;
    let renderer = TextRenderer::new(color);

    match cli.command {
        Commands::Watch {
            panel,
            duration_secs,
            refresh_ms,
        } => {
            let refresh = refresh_ms
                .map(|ms| Duration::from_millis(ms.max(1)))
                .unwrap_or_else(|| config.refresh());
            let mut shell = Shell::new(config.data_source(), config.simulation.clone());
            shell.select(panel).await;

            let deadline = async {
                match duration_secs {
                    Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
                    None => std::future::pending().await,
                }
            };
            tokio::pin!(deadline);

            let mut ticker = tokio::time::interval(refresh);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        emit(&shell.snapshot(), cli.format, &renderer, color)?;
                    }
                    _ = &mut deadline => break,
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Interrupted");
                        break;
                    }
                }
            }

            shell.close().await;
        }

        Commands::Tour { dwell_ms, rounds } => {
            let dwell = Duration::from_millis(dwell_ms);
            let mut shell = Shell::new(config.data_source(), config.simulation.clone());
            let mut panel = shell.active();

            for _ in 0..rounds {
                for _ in Panel::ALL {
                    shell.select(panel).await;
                    tracing::info!(%panel, timers = shell.live_timers(), "Showing panel");
                    tokio::time::sleep(dwell).await;
                    emit(&shell.snapshot(), cli.format, &renderer, false)?;
                    panel = panel.next();
                }
            }

            shell.close().await;
        }

        Commands::Snapshot {
            panel,
            out,
            settle_ms,
        } => {
            let mut shell = Shell::new(config.data_source(), config.simulation.clone());
            let snapshot = shell
                .capture(panel, Duration::from_millis(settle_ms))
                .await;
            shell.close().await;

            let files = write_snapshot(&snapshot, &out, Utc::now())
                .with_context(|| format!("writing snapshot to {:?}", out))?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                OutputFormat::Text => {
                    for file in &files {
                        println!("Wrote {}", file.display());
                    }
                }
            }
        }

        Commands::Menu => match cli.format {
            OutputFormat::Json => {
                let entries: Vec<_> = MENU_ITEMS
                    .iter()
                    .map(|item| {
                        serde_json::json!({
                            "id": item.id.id(),
                            "label": item.label,
                            "icon": format!("{:?}", item.icon),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Text => {
                println!("{:<4} {:<12} {}", "", "ID", "Label");
                println!("{}", "-".repeat(32));
                for item in MENU_ITEMS.iter() {
                    println!("{:<4} {:<12} {}", item.icon.glyph(), item.id.id(), item.label);
                }
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> NexusResult<Config> {
    match path {
        Some(path) => Ok(Config::load_with_env(path)?),
        None => Ok(Config::load_default()),
    }
}

fn emit(
    snapshot: &PanelSnapshot,
    format: OutputFormat,
    renderer: &TextRenderer,
    clear: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
        OutputFormat::Text => {
            if clear {
                print!("\x1b[2J\x1b[H");
            }
            println!("{}", renderer.render(snapshot, Utc::now()));
        }
    }
    Ok(())
}
