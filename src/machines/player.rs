//! Player sub-machine: one player's turn-participation lifecycle.

use super::error::{EventNotAcceptable, Refusal};
use super::submachine::SubMachine;
use crate::core::{
    Event, EventKind, Machine, MachineRef, Notification, NotificationKind, PlayerIndex, State,
    StateHistory, TransitionTable,
};
use tracing::{debug, info};

crate::state_enum! {
    /// Where a player stands in the turn cycle.
    pub enum PlayerState {
        /// Seated, not yet ready.
        Joined,
        Ready,
        /// Holds the move.
        Playing,
        Waiting,
        /// Promoted from waiting after the opponent moved.
        Turning,
        Undo,
    }
}

fn player_table() -> TransitionTable<PlayerState> {
    use EventKind::*;
    use PlayerState::*;

    TransitionTable::builder(Joined)
        .on(Joined, PlayerReady, Ready)
        .on(Ready, PlayerPlay, Playing)
        .on(Playing, PlayerWait, Waiting)
        .on(Playing, PlayerUndo, Undo)
        .on(Waiting, PlayerTurn, Turning)
        .on(Turning, PlayerPlay, Playing)
        .on(Turning, PlayerUndo, Undo)
        .on(Undo, PlayerPlay, Playing)
        .on(Undo, PlayerWait, Waiting)
        .build()
        .expect("player transition table is complete")
}

/// State machine of one seated player.
#[derive(Clone, Debug)]
pub struct PlayerStateMachine {
    index: PlayerIndex,
    machine: Machine<PlayerState>,
}

impl PlayerStateMachine {
    /// Create the machine for `index`, sitting in `Joined`.
    pub fn new(index: PlayerIndex) -> Self {
        let player = Self {
            index,
            machine: Machine::new(player_table()),
        };
        player.run(player.machine.current_state(), None);
        player
    }

    pub fn index(&self) -> PlayerIndex {
        self.index
    }

    pub fn current_state(&self) -> PlayerState {
        self.machine.current_state()
    }

    pub fn history(&self) -> &StateHistory<PlayerState> {
        self.machine.history()
    }

    /// Consume a player event addressed to this seat.
    pub fn consume_event(
        &mut self,
        event: &Event,
    ) -> Result<Option<Notification>, EventNotAcceptable> {
        let from = self.machine.current_state();
        match self.machine.advance(event.kind()) {
            Some(to) => {
                debug!(
                    player = %self.index,
                    from = from.name(),
                    to = to.name(),
                    "player transition"
                );
                Ok(self.run(to, Some(event)))
            }
            None => Err(EventNotAcceptable {
                machine: MachineRef::Player(self.index),
                state: from.name(),
                event: event.name(),
                reason: Refusal::NoTransition,
            }),
        }
    }

    /// Entry action of `state`. Returns the notification the state raises.
    fn run(&self, state: PlayerState, event: Option<&Event>) -> Option<Notification> {
        let trigger = event.map_or("<construction>", Event::name);
        match state {
            PlayerState::Joined => {
                debug!(player = %self.index, "player seated");
                None
            }
            PlayerState::Ready => {
                info!(player = %self.index, trigger, "player ready");
                Some(Notification::player(NotificationKind::PlayerReady, self.index))
            }
            PlayerState::Playing => {
                info!(player = %self.index, trigger, "player to move");
                None
            }
            PlayerState::Waiting => {
                debug!(player = %self.index, trigger, "player waiting");
                None
            }
            PlayerState::Turning => {
                info!(player = %self.index, trigger, "player turning");
                Some(Notification::player(NotificationKind::PlayerTurned, self.index))
            }
            PlayerState::Undo => {
                info!(player = %self.index, trigger, "player undo");
                None
            }
        }
    }
}

impl SubMachine for PlayerStateMachine {
    type State = PlayerState;

    fn label(&self) -> MachineRef {
        MachineRef::Player(self.index)
    }

    fn consume_event(&mut self, event: &Event) -> Result<Option<Notification>, EventNotAcceptable> {
        PlayerStateMachine::consume_event(self, event)
    }

    fn current_state(&self) -> PlayerState {
        PlayerStateMachine::current_state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: EventKind) -> Event {
        Event::for_player(kind, PlayerIndex::Zero)
    }

    #[test]
    fn every_state_is_wired() {
        let table = player_table();
        for state in PlayerState::all() {
            assert!(!state.is_final());
            assert!(!table.transitionable_states(*state).is_empty());
        }
    }

    #[test]
    fn ready_raises_player_ready() {
        let mut player = PlayerStateMachine::new(PlayerIndex::Zero);
        assert_eq!(player.current_state(), PlayerState::Joined);

        let notification = player.consume_event(&event(EventKind::PlayerReady)).unwrap();
        assert_eq!(
            notification,
            Some(Notification::player(
                NotificationKind::PlayerReady,
                PlayerIndex::Zero
            ))
        );
        assert_eq!(player.current_state(), PlayerState::Ready);
    }

    #[test]
    fn turning_raises_player_turned() {
        let mut player = PlayerStateMachine::new(PlayerIndex::One);
        for kind in [EventKind::PlayerReady, EventKind::PlayerPlay, EventKind::PlayerWait] {
            player.consume_event(&event(kind)).unwrap();
        }
        let notification = player.consume_event(&event(EventKind::PlayerTurn)).unwrap();
        assert_eq!(
            notification.map(|n| n.kind()),
            Some(NotificationKind::PlayerTurned)
        );
        assert_eq!(notification.map(|n| n.origin()), Some(MachineRef::Player(PlayerIndex::One)));
    }

    #[test]
    fn quiet_states_raise_nothing() {
        let mut player = PlayerStateMachine::new(PlayerIndex::Zero);
        player.consume_event(&event(EventKind::PlayerReady)).unwrap();
        assert_eq!(player.consume_event(&event(EventKind::PlayerPlay)).unwrap(), None);
        assert_eq!(player.consume_event(&event(EventKind::PlayerUndo)).unwrap(), None);
        assert_eq!(player.consume_event(&event(EventKind::PlayerWait)).unwrap(), None);
        assert_eq!(player.current_state(), PlayerState::Waiting);
    }

    #[test]
    fn refusal_leaves_state_and_history_alone() {
        let mut player = PlayerStateMachine::new(PlayerIndex::Zero);
        let err = player.consume_event(&event(EventKind::PlayerTurn)).unwrap_err();

        assert_eq!(err.machine, MachineRef::Player(PlayerIndex::Zero));
        assert_eq!(err.state, "Joined");
        assert_eq!(err.reason, Refusal::NoTransition);
        assert_eq!(player.current_state(), PlayerState::Joined);
        assert!(player.history().transitions().is_empty());
    }

    #[test]
    fn works_through_the_trait() {
        fn drive<M: SubMachine>(machine: &mut M, event: &Event) -> bool {
            machine.consume_event(event).is_ok()
        }

        let mut player = PlayerStateMachine::new(PlayerIndex::One);
        assert!(drive(&mut player, &event(EventKind::PlayerReady)));
        assert_eq!(SubMachine::current_state(&player), PlayerState::Ready);
        assert_eq!(player.label(), MachineRef::Player(PlayerIndex::One));
    }
}
