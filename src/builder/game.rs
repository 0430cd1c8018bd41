//! Builder for assembling a game machine from injected sub-machines.

use crate::builder::error::BuildError;
use crate::config::GameConfig;
use crate::core::PlayerIndex;
use crate::machines::{BoardStateMachine, GameStateMachine, PlayerStateMachine};

/// Builder for a [`GameStateMachine`] with a fluent API.
///
/// Player and board machines are constructed by the caller and handed over
/// here; each player lands in the seat it was created for.
///
/// # Example
///
/// ```rust
/// use turnmind::builder::GameStateMachineBuilder;
/// use turnmind::core::PlayerIndex;
/// use turnmind::machines::{BoardStateMachine, PlayerStateMachine};
///
/// let game = GameStateMachineBuilder::new()
///     .first_player(PlayerIndex::Zero)
///     .players(
///         PlayerStateMachine::new(PlayerIndex::Zero),
///         PlayerStateMachine::new(PlayerIndex::One),
///     )
///     .board(BoardStateMachine::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(game.config().first_player, PlayerIndex::Zero);
/// ```
#[derive(Debug, Default)]
pub struct GameStateMachineBuilder {
    config: GameConfig,
    players: [Option<PlayerStateMachine>; 2],
    board: Option<BoardStateMachine>,
    seat_taken: Option<PlayerIndex>,
}

impl GameStateMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn first_player(mut self, index: PlayerIndex) -> Self {
        self.config.first_player = index;
        self
    }

    pub fn max_cascade_depth(mut self, depth: usize) -> Self {
        self.config.max_cascade_depth = depth;
        self
    }

    /// Seat a player machine (required for both seats).
    pub fn player(mut self, player: PlayerStateMachine) -> Self {
        let seat = player.index();
        if self.players[seat.index()].replace(player).is_some() && self.seat_taken.is_none() {
            self.seat_taken = Some(seat);
        }
        self
    }

    /// Seat both player machines.
    pub fn players(self, first: PlayerStateMachine, second: PlayerStateMachine) -> Self {
        self.player(first).player(second)
    }

    /// Set the board machine (required).
    pub fn board(mut self, board: BoardStateMachine) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game machine.
    /// Returns an error if a part is missing or the configuration is invalid.
    pub fn build(self) -> Result<GameStateMachine, BuildError> {
        self.config.validate()?;
        if let Some(found) = self.seat_taken {
            return Err(BuildError::SeatTaken { found });
        }

        let [zero, one] = self.players;
        let zero = zero.ok_or(BuildError::MissingPlayer(PlayerIndex::Zero))?;
        let one = one.ok_or(BuildError::MissingPlayer(PlayerIndex::One))?;
        let board = self.board.ok_or(BuildError::MissingBoard)?;

        Ok(GameStateMachine::assemble(self.config, [zero, one], board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn seated() -> GameStateMachineBuilder {
        GameStateMachineBuilder::new().players(
            PlayerStateMachine::new(PlayerIndex::Zero),
            PlayerStateMachine::new(PlayerIndex::One),
        )
    }

    #[test]
    fn builder_requires_board() {
        let result = seated().build();
        assert!(matches!(result, Err(BuildError::MissingBoard)));
    }

    #[test]
    fn builder_requires_both_players() {
        let result = GameStateMachineBuilder::new()
            .player(PlayerStateMachine::new(PlayerIndex::Zero))
            .board(BoardStateMachine::new())
            .build();
        assert!(matches!(
            result,
            Err(BuildError::MissingPlayer(PlayerIndex::One))
        ));
    }

    #[test]
    fn players_land_in_their_own_seats() {
        let game = GameStateMachineBuilder::new()
            .players(
                PlayerStateMachine::new(PlayerIndex::One),
                PlayerStateMachine::new(PlayerIndex::Zero),
            )
            .board(BoardStateMachine::new())
            .build()
            .unwrap();

        assert_eq!(game.player(PlayerIndex::Zero).index(), PlayerIndex::Zero);
        assert_eq!(game.player(PlayerIndex::One).index(), PlayerIndex::One);
    }

    #[test]
    fn same_seat_twice_is_rejected() {
        let result = GameStateMachineBuilder::new()
            .players(
                PlayerStateMachine::new(PlayerIndex::One),
                PlayerStateMachine::new(PlayerIndex::One),
            )
            .board(BoardStateMachine::new())
            .build();
        assert!(matches!(
            result,
            Err(BuildError::SeatTaken {
                found: PlayerIndex::One
            })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = seated()
            .board(BoardStateMachine::new())
            .max_cascade_depth(0)
            .build();
        assert!(matches!(
            result,
            Err(BuildError::InvalidConfig(ConfigError::ZeroCascadeDepth))
        ));
    }

    #[test]
    fn config_is_carried_into_the_game() {
        let config = GameConfig {
            first_player: PlayerIndex::Zero,
            max_cascade_depth: 3,
        };
        let game = seated()
            .board(BoardStateMachine::new())
            .config(config)
            .build()
            .unwrap();
        assert_eq!(game.config(), &config);
    }
}
