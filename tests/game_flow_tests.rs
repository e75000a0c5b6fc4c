//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Starting positions and first moves
//! - Checkmate and blocked-check detection for both teams
//! - Restart idempotence
//! - Silent rejection of illegal clicks

use chess3d::core::GameSettings;
use chess3d::game::{
    BoardLayout, ChessGameController, GameEvent, GameOutcome, GameState, Placement,
};
use chess_rules::{PieceKind, Square, Team};

fn sq(file: i32, rank: i32) -> Square {
    Square::new(file, rank)
}

fn layout(pieces: &[(PieceKind, Team, (i32, i32))]) -> BoardLayout {
    let placements: Vec<Placement> = pieces
        .iter()
        .map(|&(kind, team, at)| Placement {
            square: Square::from(at),
            kind,
            team,
        })
        .collect();
    BoardLayout::from_placements(&placements)
}

fn started(layout: &BoardLayout) -> ChessGameController {
    let mut game = ChessGameController::new(layout).expect("valid layout");
    game.start_new_game().expect("game starts");
    game
}

/// Click `from` then `to`, the way the input layer does
fn click_move(game: &mut ChessGameController, from: Square, to: Square) {
    game.select_square(from).unwrap();
    game.select_square(to).unwrap();
}

/// Occupancy as (square, kind, team, id) in board order
fn snapshot(game: &ChessGameController) -> Vec<(Square, PieceKind, Team, u32)> {
    game.board()
        .occupied()
        .map(|(square, piece)| (square, piece.kind, piece.team, piece.id.0))
        .collect()
}

// ============================================================================
// Starting Position Tests
// ============================================================================

#[test]
fn test_pawn_double_step_from_start() {
    let game = started(&layout(&[
        (PieceKind::Pawn, Team::White, (0, 1)),
        (PieceKind::Pawn, Team::Black, (1, 6)),
    ]));

    let pawn = game.player(Team::White).piece_at(sq(0, 1)).unwrap();

    assert!(pawn.can_move_to(sq(0, 2)));
    assert!(pawn.can_move_to(sq(0, 3)));
    assert!(!pawn.can_move_to(sq(1, 2)));
    assert_eq!(game.state(), GameState::InProgress);
    assert!(game.is_team_turn_active(Team::White));
}

#[test]
fn test_standard_start_has_twenty_moves() {
    let game = started(&BoardLayout::standard());
    assert_eq!(game.player(Team::White).all_moves().count(), 20);
    assert_eq!(game.board().piece_count(), 32);
}

#[test]
fn test_turns_alternate() {
    let mut game = started(&BoardLayout::standard());

    click_move(&mut game, sq(6, 0), sq(5, 2));
    assert_eq!(game.active_team(), Team::Black);

    // White may not move again
    game.select_square(sq(5, 2)).unwrap();
    assert!(!game.selection().is_selected());

    click_move(&mut game, sq(1, 7), sq(2, 5));
    assert_eq!(game.active_team(), Team::White);
}

// ============================================================================
// Checkmate Tests
// ============================================================================

/// White king on (4,0) boxed in by two black rooks on files 3 and 5; a third
/// rook swings onto file 4 to give check.
fn rook_mate_layout(extra: &[(PieceKind, Team, (i32, i32))]) -> BoardLayout {
    let mut pieces = vec![
        (PieceKind::King, Team::White, (4, 0)),
        (PieceKind::Pawn, Team::White, (7, 1)),
        (PieceKind::King, Team::Black, (0, 7)),
        (PieceKind::Rook, Team::Black, (3, 7)),
        (PieceKind::Rook, Team::Black, (5, 7)),
        (PieceKind::Rook, Team::Black, (1, 4)),
    ];
    pieces.extend_from_slice(extra);
    layout(&pieces)
}

#[test]
fn test_rook_checkmate_finishes_game() {
    let mut game = started(&rook_mate_layout(&[]));

    click_move(&mut game, sq(7, 1), sq(7, 2));
    click_move(&mut game, sq(1, 4), sq(4, 4));

    assert_eq!(
        game.state(),
        GameState::Finished(GameOutcome::Checkmate {
            winner: Team::Black
        })
    );
    assert_eq!(game.winner(), Some(Team::Black));
    assert!(!game.is_game_in_progress());
    assert!(game.drain_events().contains(&GameEvent::GameFinished {
        outcome: GameOutcome::Checkmate {
            winner: Team::Black
        }
    }));
}

#[test]
fn test_check_with_blocker_stays_in_progress() {
    let mut game = started(&rook_mate_layout(&[(PieceKind::Bishop, Team::White, (2, 0))]));

    click_move(&mut game, sq(7, 1), sq(7, 2));
    click_move(&mut game, sq(1, 4), sq(4, 4));

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.active_team(), Team::White);

    let king = game.player(Team::White).piece_at(sq(4, 0)).unwrap();
    assert!(king.available_moves().is_empty());

    // Only the interposition on (4,2) is offered for the bishop
    game.select_square(sq(2, 0)).unwrap();
    assert_eq!(game.selection().possible_moves, vec![sq(4, 2)]);

    game.select_square(sq(4, 2)).unwrap();
    assert_eq!(game.active_team(), Team::Black);
}

#[test]
fn test_check_with_escape_square_is_not_mate() {
    let mut game = started(&layout(&[
        (PieceKind::King, Team::White, (0, 0)),
        (PieceKind::Rook, Team::White, (7, 1)),
        (PieceKind::King, Team::Black, (6, 7)),
        (PieceKind::Pawn, Team::Black, (5, 6)),
        (PieceKind::Pawn, Team::Black, (6, 6)),
        (PieceKind::Pawn, Team::Black, (7, 6)),
    ]));

    game.try_move(sq(7, 1), sq(7, 2)).unwrap();
    game.try_move(sq(5, 6), sq(5, 5)).unwrap();
    game.try_move(sq(7, 2), sq(1, 2)).unwrap();
    game.try_move(sq(5, 5), sq(5, 4)).unwrap();
    game.try_move(sq(1, 2), sq(1, 7)).unwrap();

    // (5,6) opened up, so the king escapes: no mate yet
    assert_eq!(game.state(), GameState::InProgress);

    game.try_move(sq(6, 7), sq(5, 6)).unwrap();
    assert_eq!(game.active_team(), Team::White);
}

#[test]
fn test_back_rank_mate_for_white() {
    let mut game = started(&layout(&[
        (PieceKind::King, Team::White, (0, 0)),
        (PieceKind::Rook, Team::White, (0, 3)),
        (PieceKind::King, Team::Black, (6, 7)),
        (PieceKind::Pawn, Team::Black, (5, 6)),
        (PieceKind::Pawn, Team::Black, (6, 6)),
        (PieceKind::Pawn, Team::Black, (7, 6)),
    ]));

    game.try_move(sq(0, 3), sq(0, 7)).unwrap();

    assert_eq!(game.winner(), Some(Team::White));
}

// ============================================================================
// Restart Tests
// ============================================================================

#[test]
fn test_restart_is_idempotent() {
    let mut game = started(&BoardLayout::standard());
    let fresh = snapshot(&game);

    click_move(&mut game, sq(4, 1), sq(4, 3));
    click_move(&mut game, sq(3, 6), sq(3, 4));
    click_move(&mut game, sq(4, 3), sq(3, 4));
    game.select_square(sq(6, 7)).unwrap();

    for _ in 0..5 {
        game.restart().unwrap();
        assert_eq!(snapshot(&game), fresh);
        assert_eq!(game.active_team(), Team::White);
        assert_eq!(game.move_number(), 1);
        assert!(!game.selection().is_selected());
        assert!(game.is_game_in_progress());
    }
}

#[test]
fn test_restart_after_checkmate() {
    let mut game = started(&rook_mate_layout(&[]));
    let fresh = snapshot(&game);
    click_move(&mut game, sq(7, 1), sq(7, 2));
    click_move(&mut game, sq(1, 4), sq(4, 4));
    assert!(!game.is_game_in_progress());

    game.restart().unwrap();

    assert_eq!(snapshot(&game), fresh);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_restart_reports_removals_then_creations() {
    let mut game = started(&rook_mate_layout(&[]));
    game.drain_events();

    game.restart().unwrap();
    let events = game.drain_events();

    assert_eq!(events.first(), Some(&GameEvent::GameRestarted));
    let removed = events
        .iter()
        .filter(|e| matches!(e, GameEvent::PieceRemoved { .. }))
        .count();
    let created = events
        .iter()
        .filter(|e| matches!(e, GameEvent::PieceCreated { .. }))
        .count();
    assert_eq!(removed, 6);
    assert_eq!(created, 6);
    assert_eq!(events.last(), Some(&GameEvent::GameStarted));
}

// ============================================================================
// Input Edge Tests
// ============================================================================

#[test]
fn test_illegal_click_is_silently_ignored() {
    let mut game = started(&BoardLayout::standard());
    let before = snapshot(&game);

    game.select_square(sq(1, 0)).unwrap();
    game.select_square(sq(1, 2)).unwrap();

    assert_eq!(snapshot(&game), before);
    assert!(game.selection().is_selected());
    assert_eq!(game.active_team(), Team::White);

    // Reselecting the same knight deselects it
    game.select_square(sq(1, 0)).unwrap();
    assert!(!game.selection().is_selected());
}

#[test]
fn test_game_from_settings() {
    let settings = GameSettings {
        square_size: 0.5,
        promotion_piece: "rook".to_string(),
        layout_path: None,
    };

    let mut game = settings.build_controller().unwrap();
    game.start_new_game().unwrap();

    assert_eq!(game.promotion_kind(), PieceKind::Rook);
    assert_eq!(game.geometry().square_size, 0.5);
    assert_eq!(game.board().piece_count(), 32);
}
