mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use eframe::egui;

use app::KickLensApp;
use kick_lens::report::write_report;
use kick_lens::{Config, DatasetStore, FilterSpec, InclusiveRange, Selection};
use state::AppState;

#[derive(Parser)]
#[command(name = "kick-lens")]
#[command(about = "Explore rugby league kicks by team, player, field position and match conditions", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "kick-lens.toml")]
    config: PathBuf,

    /// Kicks table (overrides the config file)
    #[arg(long)]
    kicks: Option<PathBuf>,

    /// Fixtures table (overrides the config file)
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    View,
    /// Print the matching fixtures and kicks without opening a window
    Report(ReportArgs),
}

/// Filter flags. Categorical flags take `all` (any case) for no filter; range
/// flags take two values, low then high, both inclusive.
#[derive(Args, Debug)]
struct ReportArgs {
    #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
    rounds: Option<Vec<i64>>,
    #[arg(long)]
    kicking_team: Option<String>,
    #[arg(long)]
    receiving_team: Option<String>,
    #[arg(long)]
    player: Option<String>,
    #[arg(long)]
    kick_type: Option<String>,
    #[arg(long)]
    outcome: Option<String>,
    #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
    start_x: Option<Vec<f64>>,
    #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
    start_y: Option<Vec<f64>>,
    #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
    end_x: Option<Vec<f64>>,
    #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
    end_y: Option<Vec<f64>>,
    #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
    game_seconds: Option<Vec<f64>>,
    #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
    tackle: Option<Vec<i64>>,
    #[arg(long)]
    venue: Option<String>,
    #[arg(long)]
    ground: Option<String>,
    #[arg(long)]
    weather: Option<String>,
}

/// Turn a two-value flag into a range. clap guarantees the count.
fn range<T: PartialOrd + Copy>(values: &Option<Vec<T>>) -> Option<InclusiveRange<T>> {
    match values.as_deref() {
        Some(&[lo, hi]) => Some(InclusiveRange::new(lo, hi)),
        _ => None,
    }
}

impl ReportArgs {
    /// Overlay the given flags on an unrestricted spec.
    fn apply_to(&self, spec: &mut FilterSpec) {
        let categorical = [
            (&self.kicking_team, &mut spec.kicking_team),
            (&self.receiving_team, &mut spec.receiving_team),
            (&self.player, &mut spec.player),
            (&self.kick_type, &mut spec.kick_type),
            (&self.outcome, &mut spec.kick_outcome),
            (&self.venue, &mut spec.venue),
            (&self.ground, &mut spec.ground_condition),
            (&self.weather, &mut spec.weather),
        ];
        for (flag, selection) in categorical {
            if let Some(text) = flag {
                *selection = Selection::parse(text);
            }
        }

        let numeric = [
            (&self.start_x, &mut spec.start_x),
            (&self.start_y, &mut spec.start_y),
            (&self.end_x, &mut spec.end_x),
            (&self.end_y, &mut spec.end_y),
            (&self.game_seconds, &mut spec.game_seconds),
        ];
        for (flag, target) in numeric {
            if let Some(r) = range(flag) {
                *target = r;
            }
        }

        if let Some(r) = range(&self.rounds) {
            spec.rounds = r;
        }
        spec.tackle_number = range(&self.tackle);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(path) = cli.kicks {
        config.data.kicks_path = path;
    }
    if let Some(path) = cli.fixtures {
        config.data.fixtures_path = path;
    }

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => run_dashboard(config),
        Commands::Report(args) => run_report(&config, &args),
    }
}

fn run_report(config: &Config, args: &ReportArgs) -> Result<()> {
    let store = DatasetStore::open(&config.data)?;
    let mut spec = store.unrestricted_spec(&config.field);
    args.apply_to(&mut spec);
    log::debug!("Report filter: {spec:?}");

    let outcome = store.apply(&spec)?;
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &store, &spec, &outcome).context("writing report")
}

fn run_dashboard(config: Config) -> Result<()> {
    let mut state = AppState::new(config);
    // A missing kicks file just leaves the dashboard empty until one is opened.
    if state.config.data.kicks_path.exists() {
        ui::panels::load_configured(&mut state);
    } else {
        log::info!(
            "No kicks at {}; open one from the File menu",
            state.config.data.kicks_path.display()
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Kick Lens – Rugby League Kicks",
        options,
        Box::new(|_cc| Ok(Box::new(KickLensApp::new(state)))),
    )
    .map_err(|e| anyhow!("dashboard failed: {e}"))
}
