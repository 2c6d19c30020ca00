use std::{
    fs::File,
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{bail, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use fastrand::Rng;
use parking_lot::RwLock;
use subset_swarm::{
    algorithms::particles::{BinaryPSO, BinaryPSOConfig, TrackingSwarmObserver},
    core::{Engine, SubsetSumProblem},
    traits::observer::DebugObserver,
    Float, SubsetSumError,
};

fn cli() -> Command {
    Command::new("subset-swarm")
        .about("Searches for a subset summing to a target with binary particle swarm optimization")
        .arg(
            arg!([VALUES] "Candidate values, e.g. \"3, 34, 4\" or \"[3 34 4]\"")
                .value_parser(clap::value_parser!(String))
                .requires("TARGET"),
        )
        .arg(arg!([TARGET] "Target sum").value_parser(clap::value_parser!(String)))
        .arg(
            arg!(--runs [RUNS] "Number of independent runs")
                .default_value("1")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"swarm-size" [SWARM_SIZE] "Number of particles")
                .default_value("50")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"max-iterations" [MAX_ITERATIONS] "Iteration cap per run")
                .default_value("300")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--omega [OMEGA] "Inertial weight")
                .default_value("0.729")
                .value_parser(clap::value_parser!(Float)),
        )
        .arg(
            arg!(--c1 [C1] "Cognitive weight")
                .default_value("1.49445")
                .value_parser(clap::value_parser!(Float)),
        )
        .arg(
            arg!(--c2 [C2] "Social weight")
                .default_value("1.49445")
                .value_parser(clap::value_parser!(Float)),
        )
        .arg(
            arg!(--seed [SEED] "Seed for the random number generator (default: from entropy)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--history [HISTORY_FILE] "If set, the swarm history of the last run is saved to this file as a pickle")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--verbose "Print the swarm status after every iteration")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let problem = read_problem(&matches)?;
    if problem.target() == 0 {
        bail!(SubsetSumError::DegenerateTarget);
    }

    let mut config = BinaryPSOConfig::default();
    config
        .with_n_particles(*matches.get_one::<usize>("swarm-size").unwrap_or(&50))
        .with_omega(*matches.get_one::<Float>("omega").unwrap_or(&0.729))
        .with_c1(*matches.get_one::<Float>("c1").unwrap_or(&1.49445))
        .with_c2(*matches.get_one::<Float>("c2").unwrap_or(&1.49445));
    let max_iterations = *matches.get_one::<usize>("max-iterations").unwrap_or(&300);
    let runs = *matches.get_one::<usize>("runs").unwrap_or(&1);
    let history = matches.get_one::<PathBuf>("history");
    let verbose = matches.get_flag("verbose");

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    for run in 1..=runs {
        let tracker = Arc::new(RwLock::new(TrackingSwarmObserver::default()));
        let pso = BinaryPSO::new(rng.fork()).with_config(config.clone());
        let mut engine = Engine::new(pso).setup(|e| {
            e.with_max_steps(max_iterations);
            if history.is_some() {
                e.with_observer(tracker.clone());
            }
            if verbose {
                e.with_observer(DebugObserver::build());
            }
            e
        });
        let summary = engine.process(&problem)?;
        println!("==== PSO Run #{} ====", run);
        println!("{}", summary);
        if run == runs {
            if let Some(path) = history {
                let mut writer = BufWriter::new(File::create(path)?);
                serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
            }
        }
    }
    Ok(())
}

/// Read the problem from the positional arguments, or interactively from stdin when there are
/// none. An empty first line selects the built-in instance.
fn read_problem(matches: &ArgMatches) -> Result<SubsetSumProblem> {
    if let (Some(values), Some(target)) = (
        matches.get_one::<String>("VALUES"),
        matches.get_one::<String>("TARGET"),
    ) {
        return Ok(SubsetSumProblem::parse(values, target)?);
    }
    println!("Press Enter to use default assignment set, or paste numbers then target.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let first = match lines.next() {
        Some(line) => line?,
        None => return Ok(SubsetSumProblem::default()),
    };
    if first.trim().is_empty() {
        return Ok(SubsetSumProblem::default());
    }
    print!("Enter target sum T: ");
    io::stdout().flush()?;
    let target = lines
        .next()
        .ok_or(SubsetSumError::MissingInput("target sum"))??;
    Ok(SubsetSumProblem::parse(&first, &target)?)
}
