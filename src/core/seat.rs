//! Seat identification and per-seat data storage.
//!
//! A match always has exactly two seats. `Seat` identifies one side,
//! `SeatMap` stores one value per seat with O(1) indexed access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    P1,
    P2,
}

impl Seat {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::P1 => Seat::P2,
            Seat::P2 => Seat::P1,
        }
    }

    /// Raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::P1 => 0,
            Seat::P2 => 1,
        }
    }

    /// Both seats in order.
    #[must_use]
    pub const fn both() -> [Seat; 2] {
        [Seat::P1, Seat::P2]
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::P1 => write!(f, "player1"),
            Seat::P2 => write!(f, "player2"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use pattern_duel::core::{Seat, SeatMap};
///
/// let mut hands: SeatMap<u32> = SeatMap::with_value(3);
/// hands[Seat::P2] = 4;
///
/// assert_eq!(hands[Seat::P1], 3);
/// assert_eq!(hands[Seat::P2], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::P1), factory(Seat::P2)],
        }
    }

    /// Create a map from explicit per-seat values.
    #[must_use]
    pub fn from_values(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's value.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's value.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Mutable references to `seat`'s value and its opponent's, in that order.
    pub fn split_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [p1, p2] = &mut self.data;
        match seat {
            Seat::P1 => (p1, p2),
            Seat::P2 => (p2, p1),
        }
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
