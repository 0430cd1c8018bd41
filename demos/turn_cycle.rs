//! Turn Cycle
//!
//! This example walks a game through setup, a few alternating moves and an
//! undo/redo round.
//!
//! Key concepts:
//! - Players report readiness; the game starts on its own once both are ready
//! - Board moves hand the turn to the waiting player
//! - Invalid actions are refused without changing anything
//!
//! Run with: RUST_LOG=info cargo run --example turn_cycle

use tracing_subscriber::EnvFilter;
use turnmind::core::{Event, EventKind, Move, PlayerIndex, Square};
use turnmind::machines::GameStateMachine;

fn show(game: &GameStateMachine) {
    let snapshot = game.snapshot();
    println!(
        "  game={:?} player0={:?} player1={:?} board={:?}",
        snapshot.game, snapshot.players[0], snapshot.players[1], snapshot.board
    );
}

fn submit(game: &mut GameStateMachine, label: &str, event: Event) {
    let accepted = game.consume_event(&event);
    println!("{label}: {}", if accepted { "accepted" } else { "refused" });
    show(game);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turn Cycle ===\n");

    let mut game = GameStateMachine::new();
    show(&game);

    for seat in PlayerIndex::ALL {
        submit(
            &mut game,
            &format!("player {seat} ready"),
            Event::for_player(EventKind::PlayerReady, seat),
        );
    }

    let mut mover = game.config().first_player;
    for row in 0..3u8 {
        let mv = Move::new(Square::new(row, 0), Square::new(row + 1, 0));
        submit(&mut game, &format!("player {mover} moves"), Event::board_move(mv));
        mover = mover.opponent();
        submit(
            &mut game,
            &format!("player {mover} takes the move"),
            Event::for_player(EventKind::PlayerPlay, mover),
        );
    }

    submit(&mut game, "end too early", Event::new(EventKind::GameEnd));

    for kind in [
        EventKind::GameUndo,
        EventKind::BoardUndo,
        EventKind::GameUndoed,
        EventKind::GameRedo,
        EventKind::BoardRedo,
        EventKind::GameRedoed,
        EventKind::GamePlay,
        EventKind::GamePlayed,
        EventKind::GameEnd,
    ] {
        submit(&mut game, kind.name(), Event::new(kind));
    }

    println!("\nJournal:");
    for entry in game.journal() {
        println!("  {} <- {}", entry.machine, entry.event);
    }

    println!("\n=== Example Complete ===");
}
