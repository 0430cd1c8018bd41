//! Identities of the machines in a game hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat of one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerIndex {
    Zero,
    One,
}

impl PlayerIndex {
    /// Both seats, in index order.
    pub const ALL: [PlayerIndex; 2] = [PlayerIndex::Zero, PlayerIndex::One];

    /// Position of this seat in a two-element array.
    pub fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            _ => None,
        }
    }

    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Names one machine of the hierarchy.
///
/// Used as the origin of notifications, the target of delegated events and
/// in the game journal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineRef {
    Game,
    Player(PlayerIndex),
    Board,
}

impl fmt::Display for MachineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game => write!(f, "game"),
            Self::Player(index) => write!(f, "player {index}"),
            Self::Board => write!(f, "board"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_usize() {
        for seat in PlayerIndex::ALL {
            assert_eq!(PlayerIndex::from_index(seat.index()), Some(seat));
        }
        assert_eq!(PlayerIndex::from_index(2), None);
    }

    #[test]
    fn opponent_swaps_seats() {
        assert_eq!(PlayerIndex::Zero.opponent(), PlayerIndex::One);
        assert_eq!(PlayerIndex::One.opponent().opponent(), PlayerIndex::One);
    }

    #[test]
    fn machine_ref_display() {
        assert_eq!(MachineRef::Game.to_string(), "game");
        assert_eq!(MachineRef::Player(PlayerIndex::One).to_string(), "player 1");
        assert_eq!(MachineRef::Board.to_string(), "board");
    }
}
