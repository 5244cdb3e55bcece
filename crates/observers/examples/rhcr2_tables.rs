//! Runs the staged refinement chain over a grid of configurations and prints
//! one results table per `(p, z)` pair, followed by a single bonus run.
//!
//! # Usage
//!
//! ```text
//! cargo run --example rhcr2_tables
//! cargo run --example rhcr2_tables -- --seed 1234
//! RUST_LOG=climb_observers=debug cargo run --example rhcr2_tables
//! ```
//!
//! Each run uses the seed `base + p * 1000 + floor(z * 1000) + i`, where `i`
//! is the index of the start point and `base` defaults to 4368.

use std::error::Error;

use climb_core::Point;
use climb_observers::TraceObserver;
use climb_solvers::{
    Config,
    refine::{self, Stage},
};
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED_BASE: i64 = 4368;
const START_POINTS: [(f64, f64); 4] = [(2.9, 3.2), (-2.5, 3.2), (4.2, -2.0), (-5.0, -5.0)];
const SAMPLE_COUNTS: [usize; 2] = [30, 180];
const STEP_RADII: [f64; 2] = [0.05, 0.25];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let seed_base = parse_seed_base()?.unwrap_or(DEFAULT_SEED_BASE);

    for p in SAMPLE_COUNTS {
        for z in STEP_RADII {
            let title = format!("Results for p={p}, z={z:.2}");
            println!("\n{title}");
            println!("{}", "=".repeat(title.len()));
            print_header();

            for (i, start) in START_POINTS.into_iter().map(Point::from).enumerate() {
                let seed = run_seed(seed_base, p, z, i)
                    .ok_or("--seed is too large for the derived run seeds")?;
                let config = Config::new(z, p, seed);
                let mut observer = TraceObserver::new();
                let solution = refine::minimize(start, &config, &mut observer)?;
                print_row(start, &solution, seed);
            }
            print_rule();
        }
    }

    let bonus = Config::default();
    let start = Point::new(0.0, 0.0);
    println!("\nBonus run");
    println!("=========");
    print_header();
    let solution = refine::minimize_unobserved(start, &bonus)?;
    print_row(start, &solution, bonus.seed);
    print_rule();

    Ok(())
}

/// Reads `--seed N` from the command line. `N` may be negative.
fn parse_seed_base() -> Result<Option<i64>, Box<dyn Error>> {
    parse_seed_arg(std::env::args().skip(1))
}

fn parse_seed_arg(args: impl IntoIterator<Item = String>) -> Result<Option<i64>, Box<dyn Error>> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed expects a value")?;
                return Ok(Some(value.parse()?));
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }
    Ok(None)
}

/// Derives a run seed, or `None` if it leaves the `i64` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn run_seed(base: i64, p: usize, z: f64, index: usize) -> Option<i64> {
    base.checked_add(p as i64 * 1000)?
        .checked_add((z * 1000.0) as i64)?
        .checked_add(index as i64)
}

fn header() -> String {
    format!(
        "{:>12} | {:>20} | {:>10} | {:>20} | {:>10} | {:>20} | {:>10} | {:>12} | {:>14} | {:>6}",
        "Start Point",
        "Sol1",
        "f(Sol1)",
        "Sol2",
        "f(Sol2)",
        "Sol3",
        "f(Sol3)",
        "N1/N2/N3",
        "Total f_calls",
        "Seed"
    )
}

fn print_header() {
    let header = header();
    println!("{header}");
    println!("{}", "-".repeat(header.len()));
}

fn print_rule() {
    println!("{}", "-".repeat(header().len()));
}

fn print_row(start: Point, solution: &refine::Solution, seed: i64) {
    let mut row = format!("{:>12}", start.to_string());
    for stage in Stage::ALL {
        match solution.stage(stage) {
            Some(result) => row.push_str(&format!(
                " | {:>20} | {:10.4}",
                result.point.rounded(4).to_string(),
                result.value
            )),
            None => row.push_str(&format!(" | {:>20} | {:>10}", "-", "-")),
        }
    }
    let counts = Stage::ALL
        .into_iter()
        .map(|stage| {
            solution
                .solutions_generated(stage)
                .map_or_else(|| "-".to_string(), |n| n.to_string())
        })
        .collect::<Vec<_>>()
        .join("/");
    row.push_str(&format!(
        " | {counts:>12} | {:>14} | {seed:>6}",
        solution.f_calls_total()
    ));
    println!("{row}");
}
