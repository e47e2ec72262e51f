//! Ship definitions: fleet configuration entries and per-ship hit tracking.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Fleet configuration entry: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Class name, e.g. "Carrier".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells a ship of this class occupies.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship and its accumulated damage.
///
/// `hits` only ever increases and is not clamped, so hits past the ship's
/// length leave it sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hits: usize,
}

impl Ship {
    /// Create an undamaged ship of the given length (must be positive).
    pub fn new(length: usize) -> Self {
        Self { length, hits: 0 }
    }

    /// Create an undamaged ship from a fleet class.
    pub fn from_class(class: &ShipClass) -> Self {
        Self::new(class.length())
    }

    /// Register one hit.
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    /// A ship is sunk once it has taken at least `length` hits.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
