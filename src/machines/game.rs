//! Top-level game machine.
//!
//! The game machine owns the two player machines and the board machine.
//! Events submitted to [`GameStateMachine::consume_event`] either move the
//! game itself, are forwarded to a sub-machine, or are rejected. Sub-machine
//! notifications come back through
//! [`GameStateMachine::fire_state_changed_notification`], which may
//! synthesize further events: this is how turn order is kept in step.

use super::board::{BoardState, BoardStateMachine};
use super::error::{DispatchError, EventNotAcceptable};
use super::player::{PlayerState, PlayerStateMachine};
use super::submachine::SubMachine;
use crate::builder::GameStateMachineBuilder;
use crate::config::GameConfig;
use crate::core::{
    Event, EventDomain, EventKind, Machine, MachineRef, Notification, NotificationKind,
    PlayerIndex, State, StateHistory, TransitionTable,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

crate::state_enum! {
    /// Game-level lifecycle.
    pub enum GameState {
        Initializing,
        Playing,
        Played,
        Undoing,
        Undoed,
        Redoing,
        Redo,
        Ended,
    }
    final: [Ended]
}

impl GameState {
    /// Whether this state forwards `kind` to a sub-machine.
    ///
    /// Only consulted for events that have no entry in the game table.
    pub fn delegates(&self, kind: EventKind) -> bool {
        use EventKind::*;

        match self {
            Self::Initializing => matches!(kind, PlayerReady),
            Self::Playing => matches!(
                kind,
                PlayerPlay | PlayerWait | PlayerTurn | PlayerUndo | BoardMove
            ),
            Self::Undoing => matches!(kind, BoardUndo | PlayerUndo),
            Self::Undoed => matches!(kind, BoardUndo | PlayerPlay | PlayerWait),
            Self::Redo => matches!(kind, PlayerPlay | PlayerWait),
            Self::Redoing => matches!(kind, BoardRedo),
            Self::Played | Self::Ended => false,
        }
    }
}

fn game_table() -> TransitionTable<GameState> {
    use EventKind::*;
    use GameState::*;

    TransitionTable::builder(Initializing)
        .on(Initializing, GameInitialized, Playing)
        .on(Playing, GamePlayed, Played)
        .on(Playing, GameUndo, Undoing)
        .on(Played, GameEnd, Ended)
        .on(Played, GameUndo, Undoing)
        .on(Undoing, GameUndoed, Undoed)
        .on(Undoed, GamePlay, Playing)
        .on(Undoed, GameRedo, Redoing)
        .on(Redoing, GameRedoed, Redo)
        .on(Redo, GamePlay, Playing)
        .on(Redo, GameUndo, Undoed)
        .build()
        .expect("game transition table is complete")
}

/// How an accepted event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The game machine itself moved.
    Transitioned { from: GameState, to: GameState },
    /// The event was forwarded to and accepted by a sub-machine.
    Delegated(MachineRef),
}

/// One event accepted by a machine of the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub machine: MachineRef,
    pub event: EventKind,
}

/// Current state of every machine in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub game: GameState,
    pub players: [PlayerState; 2],
    pub board: BoardState,
}

/// Orchestrates two player machines and one board machine.
///
/// # Example
///
/// ```rust
/// use turnmind::core::{Event, EventKind, PlayerIndex};
/// use turnmind::machines::{GameState, GameStateMachine, PlayerState};
///
/// let mut game = GameStateMachine::new();
/// assert_eq!(game.current_state(), GameState::Initializing);
///
/// for seat in PlayerIndex::ALL {
///     assert!(game.consume_event(&Event::for_player(EventKind::PlayerReady, seat)));
/// }
///
/// assert_eq!(game.current_state(), GameState::Playing);
/// assert_eq!(game.player(PlayerIndex::One).current_state(), PlayerState::Playing);
/// assert_eq!(game.player(PlayerIndex::Zero).current_state(), PlayerState::Waiting);
/// ```
#[derive(Debug)]
pub struct GameStateMachine {
    id: Uuid,
    config: GameConfig,
    machine: Machine<GameState>,
    players: [PlayerStateMachine; 2],
    board: BoardStateMachine,
    journal: Vec<JournalEntry>,
    cascade_depth: usize,
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateMachine {
    /// Game with default configuration, fresh players and an open board.
    pub fn new() -> Self {
        Self::assemble(
            GameConfig::default(),
            [
                PlayerStateMachine::new(PlayerIndex::Zero),
                PlayerStateMachine::new(PlayerIndex::One),
            ],
            BoardStateMachine::new(),
        )
    }

    pub fn builder() -> GameStateMachineBuilder {
        GameStateMachineBuilder::new()
    }

    /// Wire already-validated parts together and enter the initial state.
    pub(crate) fn assemble(
        config: GameConfig,
        players: [PlayerStateMachine; 2],
        board: BoardStateMachine,
    ) -> Self {
        let game = Self {
            id: Uuid::new_v4(),
            config,
            machine: Machine::new(game_table()),
            players,
            board,
            journal: Vec::new(),
            cascade_depth: 0,
        };
        game.run(game.machine.current_state(), None);
        game
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_state(&self) -> GameState {
        self.machine.current_state()
    }

    /// Outgoing game-level transitions of the current state.
    pub fn transitionable_states(&self) -> Vec<(EventKind, GameState)> {
        self.machine.transitionable_states()
    }

    pub fn history(&self) -> &StateHistory<GameState> {
        self.machine.history()
    }

    pub fn player(&self, index: PlayerIndex) -> &PlayerStateMachine {
        &self.players[index.index()]
    }

    pub fn players(&self) -> &[PlayerStateMachine; 2] {
        &self.players
    }

    pub fn board(&self) -> &BoardStateMachine {
        &self.board
    }

    /// Every event accepted by any machine of the hierarchy, in order.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            game: self.current_state(),
            players: [
                self.players[0].current_state(),
                self.players[1].current_state(),
            ],
            board: self.board.current_state(),
        }
    }

    /// Submit an event. Returns whether it was accepted.
    ///
    /// Refusals of any kind leave every machine unchanged and yield `false`.
    ///
    /// # Panics
    ///
    /// Panics when the notification cascade triggered by the event exceeds
    /// the configured depth, which means the machine wiring is broken.
    pub fn consume_event(&mut self, event: &Event) -> bool {
        match self.try_consume_event(event) {
            Ok(_) => true,
            Err(err) if err.is_fatal() => panic!("game {}: {err}", self.id),
            Err(err) => {
                debug!(%err, "event not accepted");
                false
            }
        }
    }

    /// Submit an event and learn how it was handled or why it was refused.
    #[instrument(skip(self, event), fields(game = %self.id, event = %event.kind()))]
    pub fn try_consume_event(&mut self, event: &Event) -> Result<Dispatch, DispatchError> {
        let from = self.machine.current_state();
        let kind = event.kind();

        if let Some(to) = self.machine.advance(kind) {
            info!(from = from.name(), to = to.name(), "consuming game event");
            self.journal.push(JournalEntry {
                machine: MachineRef::Game,
                event: kind,
            });
            self.run(to, Some(event));
            return Ok(Dispatch::Transitioned { from, to });
        }

        if !from.delegates(kind) {
            info!(state = from.name(), "rejecting event invalid in current state");
            return Err(DispatchError::Rejected {
                state: from.name(),
                event: kind.name(),
            });
        }

        let (target, outcome) = match kind.domain() {
            EventDomain::Player => {
                let index = event
                    .player()
                    .ok_or(DispatchError::MissingTarget { event: kind.name() })?;
                let player = &mut self.players[index.index()];
                (player.label(), forward(player, event))
            }
            EventDomain::Board => (self.board.label(), forward(&mut self.board, event)),
            EventDomain::Game => {
                return Err(DispatchError::Rejected {
                    state: from.name(),
                    event: kind.name(),
                })
            }
        };

        let notification = outcome?;
        self.journal.push(JournalEntry {
            machine: target,
            event: kind,
        });
        if let Some(notification) = notification {
            self.fire_state_changed_notification(notification)?;
        }
        Ok(Dispatch::Delegated(target))
    }

    /// React to a settled sub-machine transition.
    ///
    /// Nested notifications deeper than `max_cascade_depth` fail with
    /// [`DispatchError::CascadeOverflow`].
    #[instrument(
        skip(self, notification),
        fields(game = %self.id, kind = %notification.kind(), origin = %notification.origin())
    )]
    pub fn fire_state_changed_notification(
        &mut self,
        notification: Notification,
    ) -> Result<(), DispatchError> {
        let max = self.config.max_cascade_depth;
        if self.cascade_depth >= max {
            error!(max, "notification cascade overflow");
            return Err(DispatchError::CascadeOverflow { max });
        }

        self.cascade_depth += 1;
        let result = self.react(notification);
        self.cascade_depth -= 1;
        result
    }

    fn react(&mut self, notification: Notification) -> Result<(), DispatchError> {
        info!(depth = self.cascade_depth, "received notification");
        match notification.kind() {
            NotificationKind::PlayerReady => self.on_player_ready(),
            NotificationKind::BoardMoved => self.on_board_moved(),
            NotificationKind::PlayerTurned
            | NotificationKind::BoardUndone
            | NotificationKind::BoardRedone => {
                debug!("no reaction to notification");
                Ok(())
            }
        }
    }

    /// Once both players are ready: both play, the second seat waits, and
    /// the game starts.
    fn on_player_ready(&mut self) -> Result<(), DispatchError> {
        let all_ready = self
            .players
            .iter()
            .all(|player| player.current_state() == PlayerState::Ready);
        if !all_ready {
            info!("not all players ready");
            return Ok(());
        }

        info!(first = %self.config.first_player, "all players ready");
        for index in PlayerIndex::ALL {
            self.drive_player(index, EventKind::PlayerPlay)?;
        }
        self.drive_player(self.config.first_player.opponent(), EventKind::PlayerWait)?;

        match self.try_consume_event(&Event::new(EventKind::GameInitialized)) {
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                warn!(%err, "game refused to start");
                Ok(())
            }
            Ok(_) => Ok(()),
        }
    }

    /// A move ends the mover's turn and promotes the waiting player.
    fn on_board_moved(&mut self) -> Result<(), DispatchError> {
        for index in PlayerIndex::ALL {
            match self.players[index.index()].current_state() {
                PlayerState::Playing => {
                    info!(player = %index, "playing to waiting");
                    self.drive_player(index, EventKind::PlayerWait)?;
                }
                PlayerState::Waiting => {
                    info!(player = %index, "waiting to turning");
                    self.drive_player(index, EventKind::PlayerTurn)?;
                }
                other => debug!(player = %index, state = other.name(), "player unaffected by move"),
            }
        }
        Ok(())
    }

    /// Send a synthesized event straight to one player.
    ///
    /// A refusal is logged and skipped; only a cascade overflow propagates.
    fn drive_player(&mut self, index: PlayerIndex, kind: EventKind) -> Result<(), DispatchError> {
        let event = Event::for_player(kind, index);
        match forward(&mut self.players[index.index()], &event) {
            Ok(notification) => {
                self.journal.push(JournalEntry {
                    machine: MachineRef::Player(index),
                    event: kind,
                });
                if let Some(notification) = notification {
                    self.fire_state_changed_notification(notification)?;
                }
                Ok(())
            }
            Err(err) => {
                warn!(%err, "player refused synthesized event");
                Ok(())
            }
        }
    }

    /// Entry action of a game state.
    fn run(&self, state: GameState, event: Option<&Event>) {
        let trigger = event.map_or("<construction>", Event::name);
        match state {
            GameState::Initializing => {
                info!(game = %self.id, "game initializing, waiting for players")
            }
            GameState::Playing => info!(game = %self.id, trigger, "game in play"),
            GameState::Played => info!(game = %self.id, trigger, "move played"),
            GameState::Undoing => info!(game = %self.id, trigger, "undoing last move"),
            GameState::Undoed => info!(game = %self.id, trigger, "move undone"),
            GameState::Redoing => info!(game = %self.id, trigger, "redoing move"),
            GameState::Redo => info!(game = %self.id, trigger, "move redone"),
            GameState::Ended => info!(game = %self.id, trigger, "game ended"),
        }
    }
}

/// Hand an event to a sub-machine and log the outcome.
fn forward<M: SubMachine>(
    machine: &mut M,
    event: &Event,
) -> Result<Option<Notification>, EventNotAcceptable> {
    let before = machine.current_state();
    match machine.consume_event(event) {
        Ok(notification) => {
            debug!(
                machine = %machine.label(),
                from = before.name(),
                to = machine.current_state().name(),
                "sub-machine accepted event"
            );
            Ok(notification)
        }
        Err(err) => {
            info!(%err, "sub-machine refused event");
            Err(err)
        }
    }
}
