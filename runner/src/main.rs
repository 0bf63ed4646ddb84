mod mirror;

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, ensure, Context};
use clap::Parser;
use life_engine::{Simulation, SimulationConfig};
use log::{debug, info};

use crate::mirror::BoardMirror;

const DEFAULT_BOARD_SIZE: usize = 64;
const DEFAULT_TICKS: u64 = 100;

/// Run a seeded Game of Life board headless and report what happens.
#[derive(Parser, Debug)]
#[command(name = "life-runner", version)]
struct Args {
    /// Side length of the square board
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Seed for the initial board and static noise
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of steps to run
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// Probability that any cell is flipped at random on each step
    #[arg(long, default_value_t = 0.0)]
    noise: f32,

    /// Pause between steps, in milliseconds
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Refill the board from the random stream every N steps (0 = never)
    #[arg(long, default_value_t = 0)]
    randomize_every: u64,

    /// Print the final board as text
    #[arg(long)]
    print_final: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            board_size: self.size,
            seed: self.seed,
            static_noise_probability: self.noise,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();

    let mut simulation = Simulation::from_config(&config).context("invalid simulation config")?;

    // The display side only ever learns about the board through events
    let mirror = Arc::new(Mutex::new(BoardMirror::new()));
    {
        let mirror = Arc::clone(&mirror);
        simulation.subscribe(move |event| {
            if let Ok(mut mirror) = mirror.lock() {
                mirror.apply(event);
            }
        });
    }

    simulation
        .initialize_seeded(config.board_size)
        .context("initialize board")?;
    info!(
        "board {0}x{0}, seed {1}, noise {2}",
        config.board_size, config.seed, config.static_noise_probability
    );

    // The driver thread is the only owner of the simulation while it runs
    let interval = Duration::from_millis(args.interval_ms);
    let ticks = args.ticks;
    let randomize_every = args.randomize_every;
    let driver_mirror = Arc::clone(&mirror);
    let driver = thread::spawn(move || -> anyhow::Result<Simulation> {
        for _ in 0..ticks {
            if !interval.is_zero() {
                thread::sleep(interval);
            }
            let event = simulation.step()?;
            let population = driver_mirror
                .lock()
                .map_err(|_| anyhow!("board mirror poisoned"))?
                .population();
            debug!("tick {}: {} flipped, population {}", event.tick(), event.len(), population);

            if randomize_every > 0 && event.tick() % randomize_every == 0 {
                simulation.randomize()?;
            }
        }
        Ok(simulation)
    });

    let simulation = driver
        .join()
        .map_err(|_| anyhow!("tick driver panicked"))?
        .context("run simulation")?;

    let mirror = mirror.lock().map_err(|_| anyhow!("board mirror poisoned"))?;
    let cells = simulation.cells().context("simulation lost its board")?;
    ensure!(mirror.cells() == cells, "board mirror diverged from the simulation");

    info!(
        "finished after {} ticks: population {}, {} events applied",
        simulation.tick(),
        mirror.population(),
        mirror.events_applied()
    );

    if args.print_final {
        for row in mirror.rows() {
            println!("{row}");
        }
    }

    Ok(())
}
