use std::ops::Range;

use log::{debug, info, trace};
use rand_chacha::ChaCha8Rng;

use crate::config::{check_board_size, SimulationConfig};
use crate::error::{EngineError, Result};
use crate::event::{ChangeEvent, ChangeKind, ChangeNotifier, SubscriptionId};
use crate::grid::GridState;
use crate::input::{HostInput, SetBoardStateInput};
use crate::neighbors::NeighborOffsets;
use crate::random::{seed_cells, seeded_rng, RandomSource};
use crate::rule::{StaticNoise, TransitionRule};

/// A single Game of Life board plus everything needed to advance it.
///
/// A simulation starts without a board. [`initialize`](Self::initialize) (or
/// [`initialize_seeded`](Self::initialize_seeded)) installs one exactly once;
/// after that the host calls [`step`](Self::step) once per tick and may
/// override cells or change the noise probability between ticks.
///
/// Every board change is returned to the caller and also published to the
/// subscribed handlers before the call returns. Handlers only ever see a
/// `&ChangeEvent`, so they cannot start another step while one is running.
#[derive(Debug)]
pub struct Simulation<R = ChaCha8Rng> {
    grid: Option<GridState>,
    rule: TransitionRule,
    rng: R,
    notifier: ChangeNotifier,
    tick: u64,
}

impl Simulation<ChaCha8Rng> {
    /// An uninitialized simulation drawing from a ChaCha8 stream seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded_rng(seed))
    }

    /// Seeded simulation with the configured noise. The board is not created
    /// yet so the host can subscribe before the initial event goes out; follow
    /// up with `initialize_seeded(config.board_size)`.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let mut simulation = Self::seeded(config.seed);
        simulation.set_static_noise_probability(config.static_noise_probability)?;
        Ok(simulation)
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn new(rng: R) -> Self {
        Self {
            grid: None,
            rule: TransitionRule::default(),
            rng,
            notifier: ChangeNotifier::new(),
            tick: 0,
        }
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.notifier.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Option<&GridState> {
        self.grid.as_ref()
    }

    pub fn cells(&self) -> Option<&[bool]> {
        self.grid.as_ref().map(GridState::cells)
    }

    pub fn board_size(&self) -> Option<usize> {
        self.grid.as_ref().map(GridState::size)
    }

    pub fn population(&self) -> Option<usize> {
        self.grid.as_ref().map(GridState::population)
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn static_noise_probability(&self) -> f32 {
        self.rule.noise.probability()
    }

    /// Install the starting board and announce every cell of it.
    pub fn initialize(&mut self, size: usize, values: Vec<bool>) -> Result<ChangeEvent> {
        if self.grid.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }
        let grid = GridState::from_cells(size, values)?;
        Ok(self.install(grid))
    }

    /// Like [`initialize`](Self::initialize) with the board drawn from the
    /// random source's integer stream.
    pub fn initialize_seeded(&mut self, size: usize) -> Result<ChangeEvent> {
        if self.grid.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }
        check_board_size(size)?;
        let values = seed_cells(size, &mut self.rng);
        let grid = GridState::from_cells(size, values)?;
        Ok(self.install(grid))
    }

    fn install(&mut self, grid: GridState) -> ChangeEvent {
        let event = ChangeEvent::new(
            grid.size(),
            self.tick,
            ChangeKind::Initialized,
            (0..grid.cell_count()).collect(),
            grid.cells().to_vec(),
        );
        info!(
            "initialized {0}x{0} board with {1} live cells",
            grid.size(),
            grid.population()
        );
        self.grid = Some(grid);
        self.notifier.publish(&event);
        event
    }

    /// Advance one generation.
    ///
    /// Every cell is judged against the board as it was when the step began;
    /// flips are applied only after the whole board has been evaluated.
    pub fn step(&mut self) -> Result<ChangeEvent> {
        let grid = self.grid.as_mut().ok_or(EngineError::NotInitialized)?;

        let to_flip = collect_flips(grid, &self.rule, &mut self.rng);
        let new_states: Vec<bool> = to_flip.iter().map(|&index| grid.toggle(index)).collect();

        self.tick += 1;
        trace!("tick {}: {} cells flipped", self.tick, to_flip.len());
        let event = ChangeEvent::new(grid.size(), self.tick, ChangeKind::Stepped, to_flip, new_states);
        self.notifier.publish(&event);
        Ok(event)
    }

    /// Write `values` into `range`, skipping the rule. Each written cell is
    /// reported whether or not its value changed.
    pub fn override_state(&mut self, values: &[bool], range: Range<usize>) -> Result<ChangeEvent> {
        let grid = self.grid.as_mut().ok_or(EngineError::NotInitialized)?;
        grid.replace_range(range.clone(), values)?;

        debug!("overrode cells {}..{} at tick {}", range.start, range.end, self.tick);
        let event = ChangeEvent::new(
            grid.size(),
            self.tick,
            ChangeKind::Overridden,
            range.collect(),
            values.to_vec(),
        );
        self.notifier.publish(&event);
        Ok(event)
    }

    pub fn override_all(&mut self, values: &[bool]) -> Result<ChangeEvent> {
        let cell_count = self
            .grid
            .as_ref()
            .map(GridState::cell_count)
            .ok_or(EngineError::NotInitialized)?;
        self.override_state(values, 0..cell_count)
    }

    /// Refill the board from the random source and announce it as a full override.
    pub fn randomize(&mut self) -> Result<ChangeEvent> {
        let size = self.board_size().ok_or(EngineError::NotInitialized)?;
        let values = seed_cells(size, &mut self.rng);
        info!("randomized board at tick {}", self.tick);
        self.override_all(&values)
    }

    /// Takes effect from the next step. An invalid value leaves the current
    /// probability in place.
    pub fn set_static_noise_probability(&mut self, probability: f32) -> Result<()> {
        self.rule.noise = StaticNoise::new(probability)?;
        debug!("static noise probability set to {probability}");
        Ok(())
    }

    /// Apply one host input. Board inputs return the override event.
    pub fn handle_input(&mut self, input: impl Into<HostInput>) -> Result<Option<ChangeEvent>> {
        match input.into() {
            HostInput::SetBoardState(SetBoardStateInput { new_values, range }) => {
                let event = match range {
                    Some(range) => self.override_state(&new_values, range)?,
                    None => self.override_all(&new_values)?,
                };
                Ok(Some(event))
            }
            HostInput::SetStaticProbability(input) => {
                self.set_static_noise_probability(input.probability)?;
                Ok(None)
            }
        }
    }
}

/// Indices, ascending, of every cell that flips this step. Reads `grid` only.
fn collect_flips(grid: &GridState, rule: &TransitionRule, rng: &mut impl RandomSource) -> Vec<usize> {
    let offsets = NeighborOffsets::new(grid.size());
    let snapshot = grid.cells();
    snapshot
        .iter()
        .enumerate()
        .filter_map(|(index, &alive)| {
            let live = offsets.live_count(snapshot, index);
            rule.should_flip(alive, live, rng).then_some(index)
        })
        .collect()
}
