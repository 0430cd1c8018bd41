//! Notifications raised by sub-machines to their owning game machine.

use super::identity::{MachineRef, PlayerIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What changed inside the sub-machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// A player entered its ready state.
    PlayerReady,
    /// A waiting player was promoted to take its turn.
    PlayerTurned,
    /// The board accepted a move.
    BoardMoved,
    /// The board took back a move.
    BoardUndone,
    /// The board replayed an undone move.
    BoardRedone,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlayerReady => "PlayerReady",
            Self::PlayerTurned => "PlayerTurned",
            Self::BoardMoved => "BoardMoved",
            Self::BoardUndone => "BoardUndone",
            Self::BoardRedone => "BoardRedone",
        };
        f.write_str(name)
    }
}

/// Immutable signal describing a settled sub-machine transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    kind: NotificationKind,
    origin: MachineRef,
}

impl Notification {
    pub fn player(kind: NotificationKind, index: PlayerIndex) -> Self {
        Self {
            kind,
            origin: MachineRef::Player(index),
        }
    }

    pub fn board(kind: NotificationKind) -> Self {
        Self {
            kind,
            origin: MachineRef::Board,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Machine that raised the notification.
    pub fn origin(&self) -> MachineRef {
        self.origin
    }
}
