use clap::{Parser, Subcommand};
use hn_headloss::Fluid;
use hn_network::Network;
use hn_project::{ProjectError, compile_network, load, validate_scenario};
use hn_solver::{
    Branch, HardyCrossReport, PropagationReport, SeriesPipe, SolverError,
    distribute_parallel_flow, propagate_pressure, series_heads, solve,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hn-cli")]
#[command(about = "hydronet CLI - looped pipe network solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Balance loop flows and propagate heads from the scenario source
    Solve {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Override the loop-correction exponent
        #[arg(long)]
        exponent: Option<f64>,
        /// Override the convergence tolerance (m³/s)
        #[arg(long)]
        tolerance: Option<f64>,
        /// Override the pass limit
        #[arg(long)]
        max_iterations: Option<usize>,
    },
    /// Split a flow between parallel pipes
    Split {
        /// Total flow to distribute
        #[arg(long)]
        total: f64,
        /// Branch as name:diameter:length (repeatable)
        #[arg(long = "branch", value_parser = parse_branch, required = true)]
        branches: Vec<Branch>,
    },
    /// Walk heads down a chain of pipes in series
    Series {
        /// Flow through every pipe (m³/s)
        #[arg(long)]
        flow: f64,
        /// Head at the chain inlet (m)
        #[arg(long)]
        head: f64,
        /// Pipe as name:diameter:length in metres (repeatable)
        #[arg(long = "pipe", value_parser = parse_series_pipe, required = true)]
        pipes: Vec<SeriesPipe>,
        /// Absolute roughness applied to every pipe (m)
        #[arg(long)]
        roughness: Option<f64>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Solve {
            scenario_path,
            exponent,
            tolerance,
            max_iterations,
        } => cmd_solve(&scenario_path, exponent, tolerance, max_iterations),
        Commands::Split { total, branches } => cmd_split(total, &branches),
        Commands::Series {
            flow,
            head,
            pipes,
            roughness,
        } => cmd_series(flow, head, pipes, roughness),
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load(scenario_path)?;
    validate_scenario(&scenario).map_err(ProjectError::from)?;
    compile_network(&scenario)?;
    println!("✓ Scenario is valid");
    println!(
        "  {} nodes, {} pipes, {} loops",
        scenario.nodes.len(),
        scenario.pipes.len(),
        scenario.loops.len()
    );
    Ok(())
}

fn cmd_solve(
    scenario_path: &Path,
    exponent: Option<f64>,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
) -> CliResult<()> {
    let scenario = load(scenario_path)?;
    let mut config = scenario.solver.to_config();
    if let Some(n) = exponent {
        config.exponent = n;
    }
    if let Some(tol) = tolerance {
        config.tolerance = tol;
    }
    if let Some(max) = max_iterations {
        config.max_iterations = max;
    }

    let mut network = compile_network(&scenario)?;
    info!(scenario = %scenario.name, "solving");
    let report = solve(&mut network, &config)?;

    let propagation = match &scenario.source {
        Some(source) => {
            let id = network.node_id(&source.node).ok_or_else(|| {
                CliError::Usage(format!("source node '{}' not in network", source.node))
            })?;
            Some(propagate_pressure(&mut network, id, source.head)?)
        }
        None => None,
    };

    println!("Scenario: {}", scenario.name);
    print_convergence(&report);
    print_pipes(&network);
    if let Some(propagation) = &propagation {
        print_nodes(&network, propagation);
    } else {
        println!("\nNo source defined; node heads not computed");
    }
    Ok(())
}

fn print_convergence(report: &HardyCrossReport) {
    if report.converged {
        println!(
            "✓ Converged in {} passes (max correction {:.3e} m³/s)",
            report.iterations, report.max_correction
        );
    } else {
        println!(
            "✗ Not converged after {} passes (max correction {:.3e} m³/s)",
            report.iterations, report.max_correction
        );
    }
}

fn print_pipes(network: &Network) {
    println!("\nPipes:");
    println!(
        "  {:<10} {:>12} {:>12} {:>12}",
        "id", "flow m³/s", "vel m/s", "loss m"
    );
    for p in network.pipes() {
        println!(
            "  {:<10} {:>12.5} {:>12.4} {:>12.4}",
            p.name,
            p.flow(),
            p.velocity(),
            p.head_loss()
        );
    }
}

fn print_nodes(network: &Network, propagation: &PropagationReport) {
    println!("\nNodes:");
    println!(
        "  {:<10} {:>10} {:>10} {:>12}",
        "id", "elev m", "head m", "press kPa"
    );
    for n in network.nodes() {
        if propagation.unreached.contains(&n.id) {
            println!("  {:<10} {:>10.3} {:>10} {:>12}", n.name, n.elevation, "-", "-");
        } else {
            println!(
                "  {:<10} {:>10.3} {:>10.3} {:>12.3}",
                n.name,
                n.elevation,
                n.head(),
                n.pressure()
            );
        }
    }
    if !propagation.is_complete() {
        let names: Vec<&str> = network
            .nodes()
            .iter()
            .filter(|n| propagation.unreached.contains(&n.id))
            .map(|n| n.name.as_str())
            .collect();
        println!("\nUnreached from source: {}", names.join(", "));
    }
}

fn cmd_split(total: f64, branches: &[Branch]) -> CliResult<()> {
    let flows = distribute_parallel_flow(total, branches);
    println!("Parallel split of {} across {} branches:", total, branches.len());
    for (b, f) in branches.iter().zip(&flows) {
        let share = if total != 0.0 { f.flow / total * 100.0 } else { 0.0 };
        println!(
            "  {:<10} D={:<8} L={:<8} Q={:<12.6} ({:.1}%)",
            f.name, b.diameter, b.length, f.flow, share
        );
    }
    Ok(())
}

fn cmd_series(
    flow: f64,
    head: f64,
    mut pipes: Vec<SeriesPipe>,
    roughness: Option<f64>,
) -> CliResult<()> {
    if let Some(r) = roughness {
        if !(r.is_finite() && r >= 0.0) {
            return Err(CliError::Usage(format!(
                "roughness must be non-negative, got {}",
                r
            )));
        }
        for p in &mut pipes {
            p.roughness = r;
        }
    }
    let stations = series_heads(head, flow, &pipes, &Fluid::water())?;

    println!("Series chain, Q = {} m³/s, inlet head = {} m:", flow, head);
    println!(
        "  {:<10} {:>10} {:>10} {:>10} {:>10}",
        "pipe", "vel m/s", "loss m", "H in m", "H out m"
    );
    for s in &stations {
        println!(
            "  {:<10} {:>10.4} {:>10.4} {:>10.3} {:>10.3}",
            s.name, s.velocity, s.head_loss, s.head_in, s.head_out
        );
    }
    Ok(())
}

/// Split `name:a:b` into its name and two numbers.
fn parse_triple(s: &str) -> Result<(String, f64, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 || parts[0].is_empty() {
        return Err(format!("expected name:diameter:length, got '{}'", s));
    }
    let number = |v: &str, what: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad {} '{}': {}", what, v, e))
    };
    Ok((
        parts[0].to_string(),
        number(parts[1], "diameter")?,
        number(parts[2], "length")?,
    ))
}

fn parse_branch(s: &str) -> Result<Branch, String> {
    let (name, diameter, length) = parse_triple(s)?;
    Ok(Branch::new(name, diameter, length))
}

fn parse_series_pipe(s: &str) -> Result<SeriesPipe, String> {
    let (name, diameter, length) = parse_triple(s)?;
    Ok(SeriesPipe::new(name, length, diameter))
}
