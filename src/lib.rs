//! Core rules engine for two-player Battleship: board state, ship placement
//! validation, attack resolution, and win detection.
//!
//! The crate exposes a plain data/query API. Rendering and input wiring
//! belong to an external presentation layer that calls into [`Player`] and
//! [`Gameboard`] and reflects their state; the core imposes no turn order
//! of its own and is purely reactive to the calls it receives.

mod board;
mod common;
mod config;
mod logging;
mod player;
mod ship;

pub use board::{Attack, Cell, Gameboard};
pub use common::{AttackOutcome, GameError};
pub use config::{BOARD_SIZE, FLEET, NUM_SHIPS, PLACEMENT_ATTEMPTS};
pub use logging::init_logging;
pub use player::Player;
pub use ship::{Orientation, Ship, ShipClass};
