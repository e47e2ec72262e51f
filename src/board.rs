//! Game board state: ship placement, attack resolution, win detection.

use rand::Rng;

use crate::common::{AttackOutcome, GameError};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

const SIZE: usize = BOARD_SIZE as usize;

/// Occupancy record for one grid cell.
///
/// `ship` indexes into the board's ship list, which is the sole owner of the
/// ship itself; `segment` is the 0-based offset along the ship from its
/// placement origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ship: usize,
    pub segment: usize,
}

/// One entry in the attack history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    pub row: i32,
    pub col: i32,
    pub hit: bool,
}

/// A 10×10 board owning its ships and the ordered attack history.
///
/// The attack list is the single source of truth for what has been fired at
/// this board; missed attacks are derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gameboard {
    cells: [[Option<Cell>; SIZE]; SIZE],
    ships: Vec<Ship>,
    attacks: Vec<Attack>,
}

impl Gameboard {
    /// Create an empty board with no ships and no recorded attacks.
    pub fn new() -> Self {
        Gameboard {
            cells: [[None; SIZE]; SIZE],
            ships: Vec::new(),
            attacks: Vec::new(),
        }
    }

    fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
    }

    /// Cells a placement would cover, origin first.
    fn footprint(
        length: usize,
        row: i32,
        col: i32,
        orientation: Orientation,
    ) -> impl Iterator<Item = (i32, i32)> {
        (0..length as i32).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    fn validate_placement(
        &self,
        length: usize,
        row: i32,
        col: i32,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let len = length as i32;
        let fits = match orientation {
            Orientation::Horizontal => {
                col >= 0 && col + len <= BOARD_SIZE && row >= 0 && row < BOARD_SIZE
            }
            Orientation::Vertical => {
                row >= 0 && row + len <= BOARD_SIZE && col >= 0 && col < BOARD_SIZE
            }
        };
        if !fits {
            return Err(GameError::ShipOutOfBounds);
        }
        let clear = Self::footprint(length, row, col, orientation)
            .all(|(r, c)| self.cells[r as usize][c as usize].is_none());
        if !clear {
            return Err(GameError::ShipOverlap);
        }
        Ok(())
    }

    /// Check that a placement lies fully on the board and overlaps nothing.
    pub fn is_valid_placement(
        &self,
        ship: &Ship,
        row: i32,
        col: i32,
        orientation: Orientation,
    ) -> bool {
        self.validate_placement(ship.length(), row, col, orientation)
            .is_ok()
    }

    /// Place `ship` with its origin at (`row`, `col`).
    ///
    /// On success every covered cell records the ship's index and segment,
    /// the ship joins the board's fleet, and its index is returned. On
    /// failure the board is left untouched.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        row: i32,
        col: i32,
        orientation: Orientation,
    ) -> Result<usize, GameError> {
        self.validate_placement(ship.length(), row, col, orientation)?;
        let index = self.ships.len();
        for (segment, (r, c)) in Self::footprint(ship.length(), row, col, orientation).enumerate() {
            self.cells[r as usize][c as usize] = Some(Cell {
                ship: index,
                segment,
            });
        }
        self.ships.push(ship);
        Ok(index)
    }

    /// Draw random placements for `ship` until one validates.
    ///
    /// Orientation is uniform; the origin is uniform over the coordinates
    /// that keep the ship on the board for that orientation. Fails with
    /// [`GameError::PlacementExhausted`] once the attempt budget runs out.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship: &Ship,
    ) -> Result<(i32, i32, Orientation), GameError> {
        let len = ship.length() as i32;
        if len > BOARD_SIZE {
            return Err(GameError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - len),
                Orientation::Vertical => (BOARD_SIZE - len, BOARD_SIZE - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            if self.is_valid_placement(ship, row, col, orientation) {
                return Ok((row, col, orientation));
            }
        }
        Err(GameError::PlacementExhausted)
    }

    /// Resolve an attack at (`row`, `col`).
    ///
    /// Coordinates off the board and repeats of an earlier attack are
    /// rejected with no state change. Otherwise the attack is appended to
    /// the history, and on a hit the occupying ship takes the damage. This
    /// is the sole mutator of the attack history and the sole caller of
    /// [`Ship::hit`].
    pub fn receive_attack(&mut self, row: i32, col: i32) -> Result<AttackOutcome, GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.is_attacked(row, col) {
            return Err(GameError::AlreadyAttacked { row, col });
        }
        match self.cells[row as usize][col as usize] {
            Some(cell) => {
                let ship = &mut self.ships[cell.ship];
                ship.hit();
                let sunk = ship.is_sunk();
                self.attacks.push(Attack {
                    row,
                    col,
                    hit: true,
                });
                Ok(if sunk {
                    AttackOutcome::Sunk
                } else {
                    AttackOutcome::Hit
                })
            }
            None => {
                self.attacks.push(Attack {
                    row,
                    col,
                    hit: false,
                });
                Ok(AttackOutcome::Miss)
            }
        }
    }

    /// True when an attack has already been recorded at (`row`, `col`).
    pub fn is_attacked(&self, row: i32, col: i32) -> bool {
        self.attacks.iter().any(|a| a.row == row && a.col == col)
    }

    /// True once at least one ship is placed and every ship is sunk. An
    /// empty fleet is never "all sunk".
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Coordinates of recorded attacks that struck open water, oldest first.
    pub fn missed_attacks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.attacks.iter().filter(|a| !a.hit).map(|a| (a.row, a.col))
    }

    /// Occupancy at (`row`, `col`); `None` for empty or off-board cells.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    /// Ship at `index` in placement order.
    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Full attack history, oldest first.
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}
