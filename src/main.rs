use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use u_tsp::aco::{AcoConfig, AntColonySolver};
use u_tsp::constructive::nearest_neighbor_with;
use u_tsp::distance::CostMatrix;
use u_tsp::ga::{GaConfig, GeneticSolver};
use u_tsp::generation::{GridVertexGenerator, VertexGenerator};
use u_tsp::models::{SolveResult, Tour, Vertex};
use u_tsp::persist::{read_matrix, read_vertices, write_matrix, write_vertices};
use u_tsp::progress::LogProgress;
use u_tsp::random::rng_from;

#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random instance and write its vertex and matrix files
    Generate {
        #[command(flatten)]
        grid: GridArgs,
        /// Number of vertices
        #[arg(short = 'n', long, default_value_t = 150)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "vertices.data")]
        vertices: PathBuf,
        #[arg(long, default_value = "costMatrix.data")]
        matrix: PathBuf,
    },
    /// Nearest-neighbor construction
    Greedy {
        #[command(flatten)]
        instance: InstanceArgs,
        /// Start vertex
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Genetic algorithm
    Genetic {
        #[command(flatten)]
        instance: InstanceArgs,
        #[arg(long, default_value_t = 500)]
        population: usize,
        #[arg(long, default_value_t = 150)]
        hybridization: usize,
        #[arg(long, default_value_t = 20)]
        mutation: usize,
        #[arg(long, default_value_t = 1000)]
        generations: usize,
        /// Stop after this many seconds
        #[arg(long)]
        time_limit: Option<u64>,
    },
    /// Ant colony optimization
    Ant {
        #[command(flatten)]
        instance: InstanceArgs,
        #[arg(long, default_value_t = 10_000)]
        ants: usize,
        #[arg(long, default_value_t = 0.8)]
        evaporation: f64,
        /// Reinforce the best tour every this many ants (0 disables)
        #[arg(long, default_value_t = 100)]
        reinforce_every: usize,
        /// Stop after this many seconds
        #[arg(long)]
        time_limit: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct GridArgs {
    #[arg(long, default_value_t = 1200)]
    width: i32,
    #[arg(long, default_value_t = 800)]
    height: i32,
    #[arg(long, default_value_t = 8)]
    step: i32,
    #[arg(long, default_value_t = 25)]
    border: i32,
}

impl GridArgs {
    fn generator(&self) -> GridVertexGenerator {
        GridVertexGenerator::default()
            .with_canvas(self.width, self.height)
            .with_step(self.step)
            .with_border(self.border)
    }
}

/// Where the instance comes from: a matrix file, a vertex file, or a fresh
/// random instance.
#[derive(Args, Debug)]
struct InstanceArgs {
    /// Read the cost matrix from this file
    #[arg(long, conflicts_with = "vertices")]
    matrix: Option<PathBuf>,
    /// Read vertices from this file
    #[arg(long)]
    vertices: Option<PathBuf>,
    /// Number of random vertices when no file is given
    #[arg(short = 'n', long, default_value_t = 150)]
    count: usize,
    /// Seed for instance generation and the solver
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    grid: GridArgs,
}

impl InstanceArgs {
    fn load(&self) -> Result<CostMatrix> {
        if let Some(path) = &self.matrix {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            return Ok(read_matrix(BufReader::new(file))?);
        }
        let vertices = match &self.vertices {
            Some(path) => {
                let file =
                    File::open(path).with_context(|| format!("opening {}", path.display()))?;
                read_vertices(BufReader::new(file))?
            }
            None => self.generate()?,
        };
        Ok(CostMatrix::from_vertices(&vertices)?)
    }

    fn generate(&self) -> Result<Vec<Vertex>> {
        let mut rng = rng_from(self.seed);
        Ok(self.grid.generator().generate(self.count, &mut rng)?)
    }
}

fn set_up_logging(verbose: u8) -> Result<(), fern::InitError> {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date}][{level}] {message}",
                date = chrono::Local::now().format("%H:%M:%S"),
                level = record.level(),
                message = message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn print_tour(name: &str, tour: &Tour) {
    let order: Vec<String> = tour.order().iter().map(|v| v.to_string()).collect();
    println!("{name}: {}", tour.cost());
    println!("{}", order.join(" "));
}

fn print_result(name: &str, result: &SolveResult) {
    print_tour(name, &result.tour);
    println!(
        "iterations: {}{}",
        result.iterations,
        if result.stopped_early { " (stopped early)" } else { "" }
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_up_logging(cli.verbose)?;

    match cli.command {
        Command::Generate {
            grid,
            count,
            seed,
            vertices,
            matrix,
        } => {
            let mut rng = rng_from(seed);
            let generated = grid.generator().generate(count, &mut rng)?;
            let costs = CostMatrix::from_vertices(&generated)?;
            write_vertices(&generated, BufWriter::new(File::create(&vertices)?))?;
            write_matrix(&costs, BufWriter::new(File::create(&matrix)?))?;
            log::info!(
                "Wrote {count} vertices to {} and their cost matrix to {}",
                vertices.display(),
                matrix.display()
            );
        }
        Command::Greedy { instance, start } => {
            let costs = instance.load()?;
            let tour = nearest_neighbor_with(&costs, start, &mut LogProgress)?;
            print_tour("greedy", &tour);
        }
        Command::Genetic {
            instance,
            population,
            hybridization,
            mutation,
            generations,
            time_limit,
        } => {
            let costs = instance.load()?;
            let mut config = GaConfig::default()
                .with_population_size(population)
                .with_hybridization_size(hybridization)
                .with_mutation_size(mutation)
                .with_generations(generations);
            if let Some(secs) = time_limit {
                config = config.with_time_limit(Duration::from_secs(secs));
            }
            let solver = GeneticSolver::new(&costs, config)?;
            let result = solver.solve_with(&mut rng_from(instance.seed), &mut LogProgress);
            print_result("genetic", &result);
        }
        Command::Ant {
            instance,
            ants,
            evaporation,
            reinforce_every,
            time_limit,
        } => {
            let costs = instance.load()?;
            let mut config = AcoConfig::default()
                .with_num_ants(ants)
                .with_evaporation_rate(evaporation)
                .with_reinforce_best_every((reinforce_every > 0).then_some(reinforce_every));
            if let Some(secs) = time_limit {
                config = config.with_time_limit(Duration::from_secs(secs));
            }
            let solver = AntColonySolver::new(&costs, config)?;
            let result = solver.solve_with(&mut rng_from(instance.seed), &mut LogProgress);
            print_result("ant", &result);
        }
    }

    Ok(())
}
