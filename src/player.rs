//! Player state and turn actions: placement and attack entry points.

use std::collections::VecDeque;

use log::warn;
use rand::Rng;

use crate::board::Gameboard;
use crate::common::{AttackOutcome, GameError};
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::{Orientation, Ship, ShipClass};

/// One side of the game: a board plus the queue of ships still to place.
///
/// The queue drains front to back as placement succeeds; a failed attempt
/// returns the candidate to the front so the caller can retry it with new
/// coordinates.
#[derive(Debug, Clone)]
pub struct Player {
    is_computer: bool,
    board: Gameboard,
    pending: VecDeque<ShipClass>,
}

impl Player {
    /// Create a player with an empty board and the standard fleet queued.
    pub fn new(is_computer: bool) -> Self {
        Player {
            is_computer,
            board: Gameboard::new(),
            pending: FLEET.iter().copied().collect(),
        }
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    /// Mutable board access, for receiving enemy attacks.
    pub fn board_mut(&mut self) -> &mut Gameboard {
        &mut self.board
    }

    /// Ship classes still waiting to be placed, next first.
    pub fn pending_ships(&self) -> &VecDeque<ShipClass> {
        &self.pending
    }

    /// The class the next placement attempt will use.
    pub fn next_ship(&self) -> Option<&ShipClass> {
        self.pending.front()
    }

    /// Attempt to place the next queued ship at (`row`, `col`).
    ///
    /// Returns false when the queue is empty or the placement is invalid;
    /// an invalid attempt leaves the queue unchanged. Exactly one attempt
    /// per call.
    pub fn manual_place_ship(&mut self, row: i32, col: i32, orientation: Orientation) -> bool {
        let Some(class) = self.pending.pop_front() else {
            return false;
        };
        match self
            .board
            .place_ship(Ship::from_class(&class), row, col, orientation)
        {
            Ok(_) => true,
            Err(_) => {
                self.pending.push_front(class);
                false
            }
        }
    }

    /// Randomly place every queued ship.
    ///
    /// Each class gets the full random-placement attempt budget; classes
    /// that never find an open spot are logged and kept in the queue so the
    /// caller can retry later. Returns the number of ships placed.
    pub fn random_place_all_ships<R: Rng>(&mut self, rng: &mut R) -> usize {
        let mut placed = 0;
        let mut retained = VecDeque::new();
        while let Some(class) = self.pending.pop_front() {
            let ship = Ship::from_class(&class);
            let result = self
                .board
                .random_placement(rng, &ship)
                .and_then(|(row, col, orientation)| self.board.place_ship(ship, row, col, orientation));
            match result {
                Ok(_) => placed += 1,
                Err(err) => {
                    warn!("leaving {} unplaced: {}", class.name(), err);
                    retained.push_back(class);
                }
            }
        }
        self.pending = retained;
        placed
    }

    /// Attack the enemy board at explicit coordinates.
    ///
    /// Computer players must use [`random_attack`](Player::random_attack);
    /// a manual attack from one is a caller bug. Coordinates are validated
    /// here so a bad call fails before touching the enemy board.
    pub fn manual_attack(
        &self,
        enemy: &mut Gameboard,
        row: i32,
        col: i32,
    ) -> Result<AttackOutcome, GameError> {
        if self.is_computer {
            return Err(GameError::ComputerManualAttack);
        }
        if !(0..BOARD_SIZE).contains(&row) || !(0..BOARD_SIZE).contains(&col) {
            return Err(GameError::InvalidAttackCoordinates);
        }
        enemy.receive_attack(row, col)
    }

    /// Attack a uniformly random coordinate the enemy board has not seen.
    ///
    /// Returns `Ok(None)` once every coordinate has been attacked. While
    /// unattacked coordinates remain, a previously attacked one is never
    /// chosen.
    pub fn random_attack<R: Rng>(
        &self,
        rng: &mut R,
        enemy: &mut Gameboard,
    ) -> Result<Option<AttackOutcome>, GameError> {
        if !self.is_computer {
            return Err(GameError::HumanRandomAttack);
        }
        let mut open = Vec::with_capacity((BOARD_SIZE * BOARD_SIZE) as usize);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !enemy.is_attacked(row, col) {
                    open.push((row, col));
                }
            }
        }
        if open.is_empty() {
            return Ok(None);
        }
        let (row, col) = open[rng.random_range(0..open.len())];
        enemy.receive_attack(row, col).map(Some)
    }
}
