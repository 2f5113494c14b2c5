use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tqdm::tqdm;
use tracing_subscriber::EnvFilter;
use wayfind::error::GridError;
use wayfind::grid::{self, Grid};
use wayfind::search::{Strategy, search};
use wayfind::statistics::SearchStats;

/// Grid path-search engine with interchangeable frontiers
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(about = "A grid path-search engine with interchangeable frontiers", long_about = None)]
struct Args {
    /// Path to a grid file ('#' wall, space open, 'A' start, 'B' goal;
    /// a .json extension selects the JSON form). Omit to generate one.
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Height of generated grids
    #[arg(long, default_value_t = 12)]
    height: usize,

    /// Width of generated grids
    #[arg(long, default_value_t = 36)]
    width: usize,

    /// Wall probability for generated grids
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Strategies to run (comma-separated list from: bfs, dfs, ucs, beam)
    #[arg(short, long, value_delimiter = ',', default_value = "bfs")]
    strategies: Vec<String>,

    /// Widths for beam search (comma-separated list, e.g., "4,8,16")
    #[arg(long, value_delimiter = ',', default_value = "8")]
    beam_width: Vec<usize>,

    /// Benchmark mode: solve this many freshly generated grids per strategy
    #[arg(long)]
    trials: Option<usize>,

    /// Emit a JSON summary instead of rendered grids
    #[arg(long)]
    json: bool,
}

fn strategy_jobs(args: &Args) -> Option<Vec<(String, Strategy)>> {
    let mut jobs = Vec::new();
    for name in &args.strategies {
        match name.as_str() {
            "bfs" => jobs.push(("bfs".to_string(), Strategy::BreadthFirst)),
            "dfs" => jobs.push(("dfs".to_string(), Strategy::DepthFirst)),
            "ucs" => jobs.push(("ucs".to_string(), Strategy::UniformCost)),
            "beam" => {
                for &width in &args.beam_width {
                    jobs.push((format!("beam-{width}"), Strategy::Beam { width }));
                }
            }
            other => {
                eprintln!("unknown strategy '{other}', expected bfs, dfs, ucs or beam");
                return None;
            }
        }
    }
    Some(jobs)
}

fn load_or_generate(args: &Args, rng: &mut impl Rng) -> Result<Grid, GridError> {
    match &args.grid {
        Some(path) if path.extension().is_some_and(|ext| ext == "json") => grid::load_json(path),
        Some(path) => grid::load_text(path),
        None => Ok(grid::generate(args.height, args.width, args.density, rng)),
    }
}

fn run_single(args: &Args, jobs: &[(String, Strategy)], grid: &Grid) -> ExitCode {
    let mut summaries = Vec::new();
    for (label, strategy) in jobs {
        let mut stats = SearchStats::new();
        let outcome = match search(
            *strategy,
            grid.start(),
            |cell| grid.is_goal(*cell),
            |cell| grid.neighbors(*cell),
            &mut stats,
        ) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("{label}: {e}");
                return ExitCode::FAILURE;
            }
        };

        if args.json {
            summaries.push(json!({
                "strategy": label,
                "found": outcome.found,
                "path_len": outcome.path.as_ref().map(|path| path.len()),
                "stats": stats,
            }));
        } else {
            println!("\n==========");
            println!(
                "{label}: {}",
                if outcome.found { "path found" } else { "no path" }
            );
            println!("==========");
            print!("{}", grid.render(outcome.path.as_deref()));
            if let Some(path) = &outcome.path {
                println!("path length: {} states", path.len());
            }
            println!(
                "expanded {} nodes, generated {}, peak frontier {}",
                stats.get_nodes_expanded(),
                stats.get_nodes_generated(),
                stats.get_peak_frontier_len()
            );
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).expect("summaries are plain data")
        );
    }
    ExitCode::SUCCESS
}

fn run_benchmark(
    args: &Args,
    jobs: &[(String, Strategy)],
    trials: usize,
    rng: &mut StdRng,
) -> ExitCode {
    // with an explicit grid file the benchmark re-solves it; otherwise every
    // trial gets a fresh random grid
    let base = match &args.grid {
        Some(_) => match load_or_generate(args, rng) {
            Ok(grid) => Some(grid),
            Err(e) => {
                eprintln!("failed to load grid: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let mut summaries = Vec::new();
    for (label, strategy) in jobs {
        let mut merged = SearchStats::new();
        let mut solved = 0usize;

        for _trial in tqdm(0..trials) {
            let grid = match &base {
                Some(grid) => grid.clone(),
                None => grid::generate(args.height, args.width, args.density, rng),
            };
            let mut stats = SearchStats::new();
            match search(
                *strategy,
                grid.start(),
                |cell| grid.is_goal(*cell),
                |cell| grid.neighbors(*cell),
                &mut stats,
            ) {
                Ok(outcome) => {
                    if outcome.found {
                        solved += 1;
                    }
                }
                Err(e) => {
                    eprintln!("{label}: {e}");
                    return ExitCode::FAILURE;
                }
            }
            merged = merged.merge(&stats);
        }

        if args.json {
            summaries.push(json!({
                "strategy": label,
                "trials": trials,
                "solved": solved,
                "stats": merged,
            }));
        } else {
            println!("\n==========");
            println!("{label}: solved {solved}/{trials}");
            println!(
                "expanded {} nodes total, generated {}, peak frontier {}",
                merged.get_nodes_expanded(),
                merged.get_nodes_generated(),
                merged.get_peak_frontier_len()
            );
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).expect("summaries are plain data")
        );
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if !(0.0..1.0).contains(&args.density) {
        eprintln!("density must lie in [0, 1), got {}", args.density);
        return ExitCode::FAILURE;
    }
    let Some(jobs) = strategy_jobs(&args) else {
        return ExitCode::FAILURE;
    };
    if jobs.is_empty() {
        eprintln!("no strategies requested");
        return ExitCode::FAILURE;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match args.trials {
        Some(trials) => run_benchmark(&args, &jobs, trials, &mut rng),
        None => {
            let grid = match load_or_generate(&args, &mut rng) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("failed to load grid: {e}");
                    return ExitCode::FAILURE;
                }
            };
            run_single(&args, &jobs, &grid)
        }
    }
}
