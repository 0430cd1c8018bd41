//! Board sub-machine.
//!
//! The board machine only tracks the lifecycle of moves. Whether a move is
//! legal is decided by a [`BoardRules`] implementation supplied by the game's
//! domain model.

use super::error::{EventNotAcceptable, Refusal};
use super::submachine::SubMachine;
use crate::core::{
    Event, EventKind, Machine, MachineRef, Move, Notification, NotificationKind, State,
    StateHistory, TransitionTable,
};
use std::fmt::Debug;
use tracing::{debug, info};

crate::state_enum! {
    /// Lifecycle of the board between moves.
    pub enum BoardState {
        Idle,
        Moved,
        Undone,
        Redone,
    }
}

fn board_table() -> TransitionTable<BoardState> {
    use BoardState::*;
    use EventKind::*;

    TransitionTable::builder(Idle)
        .on(Idle, BoardMove, Moved)
        .on(Moved, BoardMove, Moved)
        .on(Moved, BoardUndo, Undone)
        .on(Undone, BoardMove, Moved)
        .on(Undone, BoardUndo, Undone)
        .on(Undone, BoardRedo, Redone)
        .on(Redone, BoardMove, Moved)
        .on(Redone, BoardUndo, Undone)
        .on(Redone, BoardRedo, Redone)
        .build()
        .expect("board transition table is complete")
}

/// Move legality and position bookkeeping, owned by the game's domain model.
///
/// Each mutating method returns `false` to refuse the request; a refused
/// request must leave the position unchanged.
pub trait BoardRules: Debug + Send {
    fn apply(&mut self, mv: &Move) -> bool;

    fn undo(&mut self) -> bool;

    fn redo(&mut self) -> bool;

    /// Moves currently on the board, oldest first.
    fn played(&self) -> &[Move];
}

/// Rules that accept every move and keep undo/redo stacks.
#[derive(Clone, Debug, Default)]
pub struct OpenBoard {
    played: Vec<Move>,
    undone: Vec<Move>,
}

impl OpenBoard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardRules for OpenBoard {
    fn apply(&mut self, mv: &Move) -> bool {
        self.undone.clear();
        self.played.push(*mv);
        true
    }

    fn undo(&mut self) -> bool {
        match self.played.pop() {
            Some(mv) => {
                self.undone.push(mv);
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(mv) => {
                self.played.push(mv);
                true
            }
            None => false,
        }
    }

    fn played(&self) -> &[Move] {
        &self.played
    }
}

/// State machine of the shared board.
#[derive(Debug)]
pub struct BoardStateMachine {
    machine: Machine<BoardState>,
    rules: Box<dyn BoardRules>,
}

impl Default for BoardStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStateMachine {
    /// Board governed by [`OpenBoard`].
    pub fn new() -> Self {
        Self::with_rules(OpenBoard::new())
    }

    pub fn with_rules(rules: impl BoardRules + 'static) -> Self {
        let board = Self {
            machine: Machine::new(board_table()),
            rules: Box::new(rules),
        };
        board.run(board.machine.current_state(), None);
        board
    }

    pub fn current_state(&self) -> BoardState {
        self.machine.current_state()
    }

    pub fn history(&self) -> &StateHistory<BoardState> {
        self.machine.history()
    }

    /// Position bookkeeping behind this board.
    pub fn rules(&self) -> &dyn BoardRules {
        self.rules.as_ref()
    }

    /// Consume a board event.
    ///
    /// The rules are consulted only once the table allows the event, and the
    /// state moves only once the rules agree.
    pub fn consume_event(
        &mut self,
        event: &Event,
    ) -> Result<Option<Notification>, EventNotAcceptable> {
        let from = self.machine.current_state();
        let refuse = |reason| EventNotAcceptable {
            machine: MachineRef::Board,
            state: from.name(),
            event: event.name(),
            reason,
        };

        if !self.machine.accepts(event.kind()) {
            return Err(refuse(Refusal::NoTransition));
        }

        let allowed = match event.kind() {
            EventKind::BoardMove => {
                let mv = event
                    .board_move_payload()
                    .ok_or_else(|| refuse(Refusal::MissingPayload))?;
                self.rules.apply(&mv)
            }
            EventKind::BoardUndo => self.rules.undo(),
            EventKind::BoardRedo => self.rules.redo(),
            _ => false,
        };
        if !allowed {
            debug!(event = event.name(), state = from.name(), "board rules refused event");
            return Err(refuse(Refusal::RuleViolation));
        }

        let to = self
            .machine
            .advance(event.kind())
            .ok_or_else(|| refuse(Refusal::NoTransition))?;
        debug!(from = from.name(), to = to.name(), "board transition");
        Ok(self.run(to, Some(event)))
    }

    /// Entry action of `state`. Returns the notification the state raises.
    fn run(&self, state: BoardState, event: Option<&Event>) -> Option<Notification> {
        match state {
            BoardState::Idle => {
                debug!("board set up");
                None
            }
            BoardState::Moved => {
                let mv = event.and_then(Event::board_move_payload);
                info!(?mv, "board moved");
                Some(Notification::board(NotificationKind::BoardMoved))
            }
            BoardState::Undone => {
                info!("board move undone");
                Some(Notification::board(NotificationKind::BoardUndone))
            }
            BoardState::Redone => {
                info!("board move redone");
                Some(Notification::board(NotificationKind::BoardRedone))
            }
        }
    }
}

impl SubMachine for BoardStateMachine {
    type State = BoardState;

    fn label(&self) -> MachineRef {
        MachineRef::Board
    }

    fn consume_event(&mut self, event: &Event) -> Result<Option<Notification>, EventNotAcceptable> {
        BoardStateMachine::consume_event(self, event)
    }

    fn current_state(&self) -> BoardState {
        BoardStateMachine::current_state(self)
    }
}
