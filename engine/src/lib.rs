//! Deterministic Game of Life on a wrapped square board.
//!
//! [`Simulation`] owns the board and advances it one tick at a time. Instead
//! of handing back the whole board, every call reports a [`ChangeEvent`]
//! listing just the cells that changed so a display can update in place.
//! An optional static noise probability flips random cells on top of the
//! normal rule, drawn from a seeded stream so runs are reproducible.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod grid;
pub mod input;
pub mod neighbors;
pub mod random;
pub mod rule;

pub use config::{SimulationConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use engine::Simulation;
pub use error::{EngineError, Result};
pub use event::{ChangeEvent, ChangeKind, ChangeNotifier, SubscriptionId};
pub use grid::GridState;
pub use input::{HostInput, SetBoardStateInput, SetStaticProbabilityInput};
pub use neighbors::{live_neighbors, NeighborOffsets};
pub use random::{seed_cells, seeded_rng, RandomSource};
pub use rule::{rule_flips, StaticNoise, TransitionRule};
