//! SCROS dashboard CLI
//!
//! Renders each dashboard page to the terminal from fixture data. Page
//! controls (search boxes, dropdowns, toggles, sliders) map to flags on the
//! page's subcommand.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use dashboard_core::{
    nav, AdminPage, AdminTab, EnergyPage, Fixtures, MaintenancePage, OptimizeFor, OverviewPage,
    Setting, SimulationPage, TenantsPage, Timeframe, UnitsPage,
};
use dashboard_types::{Priority, SimulationKind};
use record_filter::ALL;
use tracing::{debug, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod render;

use config::{Config, OutputFormat};

/// Command-line arguments for the dashboard CLI
#[derive(Parser, Debug)]
#[command(name = "scros")]
#[command(about = "Property management dashboard pages in the terminal")]
struct Args {
    /// Fixture JSON file to load instead of the bundled demo data
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, env = "SCROS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Search box and dropdowns shared by the filtered pages
#[derive(ClapArgs, Debug)]
struct FilterArgs {
    /// Free-text search
    #[arg(short, long, default_value = "")]
    search: String,

    /// Building dropdown
    #[arg(long, default_value = ALL)]
    building: String,

    /// Status dropdown
    #[arg(long, default_value = ALL)]
    status: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Status cards, city grid, alerts and quick actions
    Overview {
        /// Building id to select on the city grid
        #[arg(long)]
        select: Option<String>,
    },

    /// Unit manager
    Units {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Tenant portal
    Tenants {
        #[command(flatten)]
        filter: FilterArgs,

        /// Hide payment history
        #[arg(long)]
        no_payments: bool,
    },

    /// Maintenance issues and AI predictions
    Maintenance {
        /// Priority filter: All, High, Medium or Low
        #[arg(long, default_value = ALL)]
        priority: String,

        /// Prediction confidence threshold (0-100, steps of 5)
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<i64>,

        /// Enable the AI assistant
        #[arg(long, conflicts_with = "no_ai")]
        ai: bool,

        /// Disable the AI assistant
        #[arg(long)]
        no_ai: bool,
    },

    /// Energy usage and building efficiency
    Energy {
        /// electricity, water or gas
        #[arg(long, default_value = "electricity")]
        utility: String,

        /// day, week, month, quarter or year
        #[arg(long, default_value = "month")]
        timeframe: Timeframe,
    },

    /// Admin settings and users
    Admin {
        /// general, users, security, api, notifications or billing
        #[arg(long, default_value = "general")]
        tab: AdminTab,

        /// Setting to flip, may be repeated
        #[arg(long)]
        toggle: Vec<Setting>,
    },

    /// Simulation engine
    Simulation {
        /// occupancy, energy, maintenance or revenue
        #[arg(long = "type", default_value = "occupancy")]
        kind: SimulationKind,

        /// Timeframe in months (1-36)
        #[arg(long, allow_negative_numbers = true)]
        months: Option<i64>,

        /// Intensity (1-100)
        #[arg(long, allow_negative_numbers = true)]
        intensity: Option<i64>,

        /// cost, revenue or sustainability
        #[arg(long)]
        optimize: Option<OptimizeFor>,

        /// Run the simulation and show results
        #[arg(long)]
        run: bool,
    },

    /// Sidebar navigation
    Nav {
        /// Current path
        #[arg(long, default_value = "/")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout carries only the rendered page
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load(args.config.as_deref())?;
    let fixtures = load_fixtures(args.fixtures.as_deref().or(config.fixtures.path.as_deref()))?;
    let format = args.format.unwrap_or(config.display.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args.command, &config, &fixtures, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn load_fixtures(path: Option<&Path>) -> anyhow::Result<Fixtures> {
    match path {
        Some(path) => {
            info!("Loading fixtures from {}", path.display());
            Fixtures::from_file(path)
                .with_context(|| format!("Failed to load fixtures from {}", path.display()))
        }
        None => Fixtures::bundled().context("Bundled fixtures are invalid"),
    }
}

/// Either render path for a view
fn emit<W: Write, T: serde::Serialize>(
    out: &mut W,
    format: OutputFormat,
    view: &T,
    text: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => render::json(out, view),
        OutputFormat::Text => Ok(text(out, view)?),
    }
}

fn run(
    command: &Command,
    config: &Config,
    fixtures: &Fixtures,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    debug!(?command, ?format, "Rendering page");

    match command {
        Command::Overview { select } => {
            let mut page = OverviewPage::new(fixtures);
            if let Some(id) = select {
                if page.select_building(id).is_none() {
                    anyhow::bail!("No building with id {}", id);
                }
            }
            emit(out, format, &page.view(), |out, view| render::overview(out, view))
        }

        Command::Units { filter } => {
            let mut page = UnitsPage::new(fixtures);
            page.set_search(filter.search.as_str());
            page.select("building", filter.building.as_str())?;
            page.select("status", filter.status.as_str())?;
            emit(out, format, &page.view(), |out, view| render::units(out, view))
        }

        Command::Tenants { filter, no_payments } => {
            let mut page = TenantsPage::new(fixtures);
            page.set_search(filter.search.as_str());
            page.select("building", filter.building.as_str())?;
            page.select("status", filter.status.as_str())?;
            page.set_show_payment_history(config.display.show_payment_history && !no_payments);
            emit(out, format, &page.view(), |out, view| render::tenants(out, view))
        }

        Command::Maintenance {
            priority,
            threshold,
            ai,
            no_ai,
        } => {
            let mut page = MaintenancePage::new(fixtures);
            page.set_priority(parse_priority(priority)?)?;
            page.set_threshold(threshold.unwrap_or(i64::from(config.maintenance.threshold)));
            page.set_ai_enabled(match (*ai, *no_ai) {
                (_, true) => false,
                (true, _) => true,
                _ => config.maintenance.ai_enabled,
            });
            emit(out, format, &page.view(), |out, view| render::maintenance(out, view))
        }

        Command::Energy { utility, timeframe } => {
            let mut page = EnergyPage::new(fixtures);
            page.select_utility(utility)?;
            page.set_timeframe(*timeframe);
            let view = page.view()?;
            emit(out, format, &view, |out, view| render::energy(out, view))
        }

        Command::Admin { tab, toggle } => {
            let mut page = AdminPage::with_settings(fixtures, config.admin);
            page.set_tab(*tab);
            for setting in toggle {
                page.toggle(*setting);
            }
            emit(out, format, &page.view(), |out, view| render::admin(out, view))
        }

        Command::Simulation {
            kind,
            months,
            intensity,
            optimize,
            run,
        } => {
            let mut page = SimulationPage::new(fixtures);
            page.select_kind(*kind);
            if let Some(months) = months {
                page.set_timeframe_months(*months);
            }
            if let Some(intensity) = intensity {
                page.set_intensity(*intensity);
            }
            if let Some(target) = optimize {
                page.set_optimize_for(*target);
            }
            if *run {
                page.run();
            }
            emit(out, format, &page.view(), |out, view| render::simulation(out, view))
        }

        Command::Nav { path } => {
            let entries = nav::sidebar(path);
            emit(out, format, &entries, |out, entries| render::nav(out, entries))
        }
    }
}

/// `All` (any case) clears the filter
fn parse_priority(value: &str) -> anyhow::Result<Option<Priority>> {
    if value.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    let priority = value.parse::<Priority>()?;
    Ok(Some(priority))
}
