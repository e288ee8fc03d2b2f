use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tour_calculator::{
    config::Settings,
    models::{Mode, ProgressionResult},
    scoring::{weights, CalculationRequest, ProgressionCalculator},
    utils::{report, Clock, FixedClock, SystemClock},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod tui_main;

#[derive(Parser)]
#[clap(name = "tour-calc")]
#[clap(about = "Estimate the games and playtime needed to reach a seasonal badge", long_about = None)]
struct Cli {
    /// Settings file, layered over the built-in defaults
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project games, playtime and daily pace toward a badge
    Calc {
        /// Current points
        #[clap(short, long, allow_hyphen_values = true)]
        points: String,

        /// Mode (world-tour, quick-play)
        #[clap(short, long)]
        mode: Option<String>,

        /// Goal badge label, e.g. "Emerald 1"; defaults to the top badge
        #[clap(short, long)]
        badge: Option<String>,

        /// Percent chance of each round type, comma separated
        #[clap(short, long)]
        weights: Option<String>,

        /// Override today's date (YYYY-MM-DD)
        #[clap(long)]
        today: Option<NaiveDate>,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// List the badge ladder for a mode
    Badges {
        /// Mode (world-tour, quick-play)
        #[clap(short, long)]
        mode: Option<String>,
    },

    /// Launch interactive TUI
    Tui {
        /// Mode to start in
        #[clap(short, long)]
        mode: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A broken override must not silently fall back to the compiled defaults
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path).map_err(|e| {
            anyhow::anyhow!("Failed to load settings from {}: {}", path.display(), e)
        })?,
        None => Settings::new()
            .map_err(|e| anyhow::anyhow!("Failed to load layered settings: {}", e))?,
    };

    if !matches!(cli.command, Commands::Tui { .. }) {
        init_logging(&settings.app.log_level);
        info!("Loaded settings for {}", settings.season.name);
    }

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Calc {
            points,
            mode,
            badge,
            weights,
            today,
            json,
        } => {
            let outcome = match today {
                Some(day) => {
                    let calculator = ProgressionCalculator::new(settings, FixedClock(day));
                    run_calc(&calculator, &points, mode, badge, weights)
                }
                None => {
                    let calculator = ProgressionCalculator::new(settings, SystemClock);
                    run_calc(&calculator, &points, mode, badge, weights)
                }
            };

            match outcome {
                Ok(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Ok(result) => print_result(&result),
                Err(e) => {
                    warn!("Calculation failed: {}", e);
                    println!("{}", e.user_message());
                }
            }
        }

        Commands::Badges { mode } => {
            let mode = match resolve_mode(mode, &settings) {
                Ok(mode) => mode,
                Err(e) => {
                    println!("{}", e.user_message());
                    return Ok(());
                }
            };

            println!("{} badges:", mode.display_name());
            for badge in mode.badges() {
                println!("  {}", badge.display());
            }
        }

        Commands::Tui { mode } => {
            let mode = resolve_mode(mode, &settings).map_err(|e| anyhow::anyhow!(e))?;
            tui_main::run_tui(ProgressionCalculator::with_system_clock(settings), mode)?;
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_mode(mode: Option<String>, settings: &Settings) -> tour_calculator::Result<Mode> {
    match mode {
        Some(m) => Mode::parse(&m),
        None => settings.defaults.mode(),
    }
}

fn run_calc<C: Clock>(
    calculator: &ProgressionCalculator<C>,
    points: &str,
    mode: Option<String>,
    badge: Option<String>,
    weight_list: Option<String>,
) -> tour_calculator::Result<ProgressionResult> {
    let mode = resolve_mode(mode, calculator.settings())?;

    let mut request = CalculationRequest::with_defaults(calculator.settings(), mode, points);
    if let Some(label) = badge {
        request.goal = mode.find_badge(&label)?;
    }
    if let Some(list) = weight_list {
        request.weights = weights::parse_weight_list(&list)?;
    }

    calculator.calculate(&request)
}

fn print_result(result: &ProgressionResult) {
    println!();
    for line in report::summary_lines(result) {
        println!("{}", line);
    }
    println!();
    println!("{}", report::render_table(result));
}
