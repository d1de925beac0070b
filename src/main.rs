// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use congress_seats::config::{API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL};
use congress_seats::render::SvgOptions;
use congress_seats::{
    layout_roster, member_detail, officer_detail, render_svg, write_seats_csv, ApiConfig, Chamber,
    ChartError, FixtureSource, LayoutStrategy, RosterLoader,
};

#[derive(Parser, Debug)]
#[command(name = "congress-seats", version, about = "Seating charts for the US House and Senate")]
struct Cli {
    /// congress.gov API key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[arg(long, env = BASE_URL_VAR, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Read members from a local JSON file instead of the API
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal chart (default)
    Tui {
        #[arg(long, default_value = "senate")]
        chamber: Chamber,
    },
    /// Write an SVG chart with hover tooltips
    Render {
        #[arg(long, default_value = "senate")]
        chamber: Chamber,
        #[arg(long, default_value = "arc")]
        strategy: String,
        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write seat positions as CSV
    Export {
        #[arg(long, default_value = "senate")]
        chamber: Chamber,
        #[arg(long, default_value = "arc")]
        strategy: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the normalized roster
    Members {
        #[arg(long, default_value = "senate")]
        chamber: Chamber,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Command::Tui { .. }));

    // The terminal UI owns the screen, so stay quiet there unless asked
    let default_filter = if interactive { "off" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let loader = build_loader(&cli);

    match cli.command {
        None => run_ui_mode(&runtime, loader, Chamber::Senate),
        Some(Command::Tui { chamber }) => run_ui_mode(&runtime, loader, chamber),
        Some(Command::Render { chamber, strategy, out }) => {
            runtime.block_on(run_render(loader?, chamber, &strategy, out))
        }
        Some(Command::Export { chamber, strategy, out }) => {
            runtime.block_on(run_export(loader?, chamber, &strategy, out))
        }
        Some(Command::Members { chamber }) => runtime.block_on(run_members(loader?, chamber)),
    }
}

/// Config is validated here, once, before anything touches the network
fn build_loader(cli: &Cli) -> congress_seats::Result<RosterLoader> {
    if let Some(path) = &cli.fixture {
        let source = FixtureSource::load(path)
            .map_err(|e| ChartError::Configuration(format!("{:#}", e)))?;
        return Ok(RosterLoader::with_source(
            Arc::new(source),
            ApiConfig::default().cache_ttl(),
        ));
    }

    let config = ApiConfig::new(cli.api_key.clone()).with_base_url(cli.base_url.clone());
    RosterLoader::from_config(&config)
}

fn parse_strategy(name: &str, chamber: Chamber) -> Result<LayoutStrategy> {
    LayoutStrategy::named(name, chamber).with_context(|| {
        format!(
            "Unknown strategy '{}'. Expected one of: {}",
            name,
            LayoutStrategy::NAMES.join(", ")
        )
    })
}

fn output(out: &Option<PathBuf>) -> Result<Box<dyn Write>> {
    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

async fn run_render(loader: RosterLoader, chamber: Chamber, strategy: &str, out: Option<PathBuf>) -> Result<()> {
    let strategy = parse_strategy(strategy, chamber)?;
    let roster = loader.load(chamber, false).await?;
    let layout = layout_roster(&roster, &strategy);
    let svg = render_svg(&roster, &layout, &SvgOptions::default());

    let mut writer = output(&out)?;
    writer.write_all(svg.as_bytes()).context("Failed to write SVG")?;

    if let Some(path) = out {
        eprintln!("✓ Rendered {} seats ({}) to {}", layout.seats.len(), strategy.name(), path.display());
    }
    Ok(())
}

async fn run_export(loader: RosterLoader, chamber: Chamber, strategy: &str, out: Option<PathBuf>) -> Result<()> {
    let strategy = parse_strategy(strategy, chamber)?;
    let roster = loader.load(chamber, false).await?;
    let layout = layout_roster(&roster, &strategy);

    let count = write_seats_csv(&roster, &layout, output(&out)?)?;
    if let Some(path) = out {
        eprintln!("✓ Exported {} rows to {}", count, path.display());
    }
    Ok(())
}

async fn run_members(loader: RosterLoader, chamber: Chamber) -> Result<()> {
    println!("🏛️  {} - via {}", chamber.title(), loader.source_name());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let roster = loader.load(chamber, false).await?;

    for (party, count) in roster.party_breakdown() {
        println!("  {:<12} {:>4}", party.name(), count);
    }
    println!("  {:<12} {:>4}", "Total", roster.members.len());

    if let Some(officer) = &roster.officer {
        let detail = officer_detail(officer);
        println!("\n⭐ {} - {}", detail.heading, detail.lines.join(", "));
    }

    println!();
    for member in &roster.members {
        let detail = member_detail(member, chamber);
        let marker = if member.is_party_leader { "★" } else { " " };
        println!("{} {:<40} {}", marker, detail.heading, detail.lines.join(" · "));
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(
    runtime: &tokio::runtime::Runtime,
    loader: congress_seats::Result<RosterLoader>,
    chamber: Chamber,
) -> Result<()> {
    // Loads are spawned onto this runtime while the UI loop blocks the main thread
    let _guard = runtime.enter();

    let mut app = ui::App::new(loader.map(Arc::new), chamber);
    app.start();
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(
    _runtime: &tokio::runtime::Runtime,
    _loader: congress_seats::Result<RosterLoader>,
    _chamber: Chamber,
) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: congress-seats render --chamber senate --out senate.svg");
    std::process::exit(1);
}
