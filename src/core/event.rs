//! Events consumed by the machines of a game.
//!
//! An [`Event`] is an immutable signal: a kind from the closed
//! [`EventKind`] vocabulary plus an optional [`Payload`]. Every kind belongs
//! to exactly one machine family, reported by [`EventKind::domain`].

use super::identity::PlayerIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Machine family an event kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventDomain {
    Game,
    Player,
    Board,
}

/// Every event name understood by the game hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    GameInitialized,
    GamePlay,
    GamePlayed,
    GameUndo,
    GameUndoed,
    GameRedo,
    GameRedoed,
    GameEnd,
    PlayerReady,
    PlayerPlay,
    PlayerWait,
    PlayerTurn,
    PlayerUndo,
    BoardMove,
    BoardUndo,
    BoardRedo,
}

impl EventKind {
    pub const ALL: [EventKind; 16] = [
        EventKind::GameInitialized,
        EventKind::GamePlay,
        EventKind::GamePlayed,
        EventKind::GameUndo,
        EventKind::GameUndoed,
        EventKind::GameRedo,
        EventKind::GameRedoed,
        EventKind::GameEnd,
        EventKind::PlayerReady,
        EventKind::PlayerPlay,
        EventKind::PlayerWait,
        EventKind::PlayerTurn,
        EventKind::PlayerUndo,
        EventKind::BoardMove,
        EventKind::BoardUndo,
        EventKind::BoardRedo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GameInitialized => "GameInitialized",
            Self::GamePlay => "GamePlay",
            Self::GamePlayed => "GamePlayed",
            Self::GameUndo => "GameUndo",
            Self::GameUndoed => "GameUndoed",
            Self::GameRedo => "GameRedo",
            Self::GameRedoed => "GameRedoed",
            Self::GameEnd => "GameEnd",
            Self::PlayerReady => "PlayerReady",
            Self::PlayerPlay => "PlayerPlay",
            Self::PlayerWait => "PlayerWait",
            Self::PlayerTurn => "PlayerTurn",
            Self::PlayerUndo => "PlayerUndo",
            Self::BoardMove => "BoardMove",
            Self::BoardUndo => "BoardUndo",
            Self::BoardRedo => "BoardRedo",
        }
    }

    pub fn domain(&self) -> EventDomain {
        match self {
            Self::GameInitialized
            | Self::GamePlay
            | Self::GamePlayed
            | Self::GameUndo
            | Self::GameUndoed
            | Self::GameRedo
            | Self::GameRedoed
            | Self::GameEnd => EventDomain::Game,
            Self::PlayerReady
            | Self::PlayerPlay
            | Self::PlayerWait
            | Self::PlayerTurn
            | Self::PlayerUndo => EventDomain::Player,
            Self::BoardMove | Self::BoardUndo | Self::BoardRedo => EventDomain::Board,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that is not part of the event vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown event name '{0}'")]
pub struct UnknownEvent(pub String);

impl FromStr for EventKind {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownEvent(s.to_string()))
    }
}

/// A board coordinate. Its meaning belongs to the board's rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A move submitted to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Data carried by an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// Seat of the player a player event is addressed to.
    Player(PlayerIndex),
    /// Move submitted with a board move event.
    Move(Move),
}

/// Immutable named signal consumed by exactly one machine.
///
/// # Example
///
/// ```rust
/// use turnmind::core::{Event, EventKind, PlayerIndex};
///
/// let event = Event::for_player(EventKind::PlayerReady, PlayerIndex::Zero);
/// assert_eq!(event.name(), "PlayerReady");
/// assert_eq!(event.player(), Some(PlayerIndex::Zero));
///
/// let kind: EventKind = "GameEnd".parse().unwrap();
/// assert_eq!(Event::new(kind).payload(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    kind: EventKind,
    payload: Option<Payload>,
}

impl Event {
    /// Create an event without payload.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            payload: None,
        }
    }

    /// Create an event addressed to one player.
    pub fn for_player(kind: EventKind, player: PlayerIndex) -> Self {
        Self {
            kind,
            payload: Some(Payload::Player(player)),
        }
    }

    /// Create a board move event.
    pub fn board_move(mv: Move) -> Self {
        Self {
            kind: EventKind::BoardMove,
            payload: Some(Payload::Move(mv)),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn payload(&self) -> Option<Payload> {
        self.payload
    }

    /// Seat this event is addressed to, if it carries one.
    pub fn player(&self) -> Option<PlayerIndex> {
        match self.payload {
            Some(Payload::Player(index)) => Some(index),
            _ => None,
        }
    }

    /// Move carried by this event, if any.
    pub fn board_move_payload(&self) -> Option<Move> {
        match self.payload {
            Some(Payload::Move(mv)) => Some(mv),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_parses_back_to_its_kind() {
        for kind in EventKind::ALL {
            assert_eq!(kind.name().parse::<EventKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "GameExploded".parse::<EventKind>().unwrap_err();
        assert_eq!(err, UnknownEvent("GameExploded".to_string()));
        assert_eq!(err.to_string(), "Unknown event name 'GameExploded'");
    }

    #[test]
    fn domains_partition_the_vocabulary() {
        let count = |domain| {
            EventKind::ALL
                .iter()
                .filter(|kind| kind.domain() == domain)
                .count()
        };
        assert_eq!(count(EventDomain::Game), 8);
        assert_eq!(count(EventDomain::Player), 5);
        assert_eq!(count(EventDomain::Board), 3);
    }

    #[test]
    fn payload_accessors_match_constructor() {
        let mv = Move::new(Square::new(0, 0), Square::new(1, 1));
        let event = Event::board_move(mv);
        assert_eq!(event.kind(), EventKind::BoardMove);
        assert_eq!(event.board_move_payload(), Some(mv));
        assert_eq!(event.player(), None);

        let event = Event::for_player(EventKind::PlayerWait, PlayerIndex::One);
        assert_eq!(event.player(), Some(PlayerIndex::One));
        assert_eq!(event.board_move_payload(), None);
    }

    #[test]
    fn event_serializes_with_payload() {
        let event = Event::for_player(EventKind::PlayerTurn, PlayerIndex::Zero);
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
