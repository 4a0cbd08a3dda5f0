use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use u_timetable::config::{ProblemConfig, DEFAULT_SEED};
use u_timetable::format::{format_timetable, render_text};
use u_timetable::models::Timetable;
use u_timetable::scheduler::{build_schedule_seeded, TimetableKpi};
use u_timetable::validation::validate_request;

// ── CLI argument definition ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One table per section.
    Text,
    /// The whole timetable as JSON.
    Json,
}

/// Builds weekly class timetables for several sections.
///
/// Example:
///   u-timetable --config school.yaml --seed 7 --kpi
#[derive(Debug, Parser)]
#[command(name = "u-timetable", about = "Weekly class timetable builder", long_about = None)]
struct Cli {
    /// Path to the YAML problem file. The built-in sample is used when absent.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RNG seed; overrides the seed in the problem file.
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip input validation.
    #[arg(long = "no-validate", default_value_t = false)]
    no_validate: bool,

    /// Print load metrics after the timetable.
    #[arg(long = "kpi", default_value_t = false)]
    kpi: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by RUST_LOG (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let problem = match &cli.config {
        Some(path) => ProblemConfig::load_from_file(path)?,
        None => {
            warn!("No problem file provided, using the built-in sample");
            ProblemConfig::sample()
        }
    };

    let seed = cli.seed.or(problem.seed).unwrap_or(DEFAULT_SEED);
    let request = problem.to_request();

    if !cli.no_validate {
        if let Err(errors) = validate_request(&request) {
            for e in &errors {
                error!(kind = ?e.kind, "{}", e);
            }
            anyhow::bail!("problem has {} validation error(s)", errors.len());
        }
    }

    info!(seed, "Building timetable");
    let timetable = build_schedule_seeded(&request, seed).context("Timetable build failed")?;

    match cli.format {
        OutputFormat::Text => print_text(&timetable),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&timetable)?),
    }

    if cli.kpi {
        print_kpi(&TimetableKpi::calculate(&timetable, &request.rooms));
    }
    Ok(())
}

fn print_text(timetable: &Timetable) {
    for (section, rows) in format_timetable(timetable) {
        println!("\nSchedule for Section {section}");
        print!("{}", render_text(&rows));
    }
}

fn print_kpi(kpi: &TimetableKpi) {
    println!("\nLoad");
    println!(
        "  occupied {}  free {}  occupancy {:.1}%",
        kpi.occupied_cells,
        kpi.free_cells,
        kpi.occupancy_rate * 100.0
    );
    println!("  room spread {}", kpi.room_spread);
    for (room, n) in &kpi.room_load {
        println!("  room {room:<10} {n}");
    }
    for (instructor, n) in &kpi.instructor_load {
        println!("  instructor {instructor:<10} {n}");
    }
    println!(
        "  max sessions per instructor per day {}",
        kpi.max_daily_instructor_load
    );
}
