//! Game controller - the turn state machine
//!
//! [`ChessGameController`] owns the board, both players and the session state,
//! and is the only thing that mutates them. Every public operation runs the
//! whole pipeline synchronously before returning:
//!
//! ```text
//! select / try_move → apply move → regenerate both sides → check detection
//!                   → Finished(outcome) | swap active team
//! ```
//!
//! # Lifecycle
//!
//! - `Initializing`: board and players are emptied and rebuilt from the layout,
//!   one piece at a time (create, place on board, hand to owner)
//! - `InProgress`: entered once White's moves are generated
//! - `Finished`: checkmate or stalemate; only [`ChessGameController::restart`]
//!   leaves it
//!
//! # Presentation
//!
//! Nothing here renders or animates. Each observable change is queued as a
//! [`GameEvent`] and collected with [`ChessGameController::drain_events`].
//! Captured pieces leave the authoritative state immediately; any visual delay
//! belongs to whoever consumes the event.
//!
//! # Examples
//!
//! ```rust
//! use chess3d::game::{BoardLayout, ChessGameController};
//! use chess_rules::Square;
//!
//! let mut game = ChessGameController::new(&BoardLayout::standard()).unwrap();
//! game.start_new_game().unwrap();
//!
//! game.select_square(Square::new(4, 1)).unwrap(); // e2
//! game.select_square(Square::new(4, 3)).unwrap(); // e4
//!
//! assert_eq!(game.active_team(), chess_rules::Team::Black);
//! ```

use chess_rules::{
    Board, Piece, PieceId, PieceKind, PieceRef, Player, RulesError, Square, Team,
};
use tracing::{debug, info};

use crate::game::error::{GameError, GameResult};
use crate::game::events::{GameEvent, MarkerKind, MoveMarker, RemovalCause};
use crate::game::input::{BoardGeometry, BoardPoint};
use crate::game::layout::{BoardLayout, Placement};
use crate::game::resources::{GameOutcome, GameState, Selection, TurnState};

/// Kind whose safety decides check, checkmate and move legality
const PROTECTED_KIND: PieceKind = PieceKind::King;

/// Owner of the authoritative game state
#[derive(Debug, Clone)]
pub struct ChessGameController {
    placements: Vec<Placement>,
    promotion_kind: PieceKind,
    geometry: BoardGeometry,
    board: Board,
    white: Player,
    black: Player,
    turn: TurnState,
    state: GameState,
    selection: Selection,
    next_piece_id: u32,
    events: Vec<GameEvent>,
}

/// Borrow `team`'s player mutably alongside its opponent
fn split_players<'a>(
    white: &'a mut Player,
    black: &'a mut Player,
    team: Team,
) -> (&'a mut Player, &'a mut Player) {
    match team {
        Team::White => (white, black),
        Team::Black => (black, white),
    }
}

impl ChessGameController {
    /// Controller for `layout`, left in `Initializing` until
    /// [`Self::start_new_game`]
    ///
    /// # Errors
    ///
    /// Any layout problem reported by [`BoardLayout::resolve`]. These are
    /// configuration errors and should stop startup.
    pub fn new(layout: &BoardLayout) -> GameResult<Self> {
        let placements = layout.resolve()?;
        Ok(Self {
            placements,
            promotion_kind: PieceKind::Queen,
            geometry: BoardGeometry::default(),
            board: Board::new(),
            white: Player::new(Team::White),
            black: Player::new(Team::Black),
            turn: TurnState::default(),
            state: GameState::Initializing,
            selection: Selection::default(),
            next_piece_id: 1,
            events: Vec::new(),
        })
    }

    /// Kind a pawn becomes on the far rank
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidPromotion`] for Pawn or King.
    pub fn with_promotion_kind(mut self, kind: PieceKind) -> GameResult<Self> {
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(GameError::InvalidPromotion { kind });
        }
        self.promotion_kind = kind;
        Ok(self)
    }

    pub fn with_geometry(mut self, geometry: BoardGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Tear down whatever is on the board and set up the layout again
    pub fn start_new_game(&mut self) -> GameResult<()> {
        self.state.transition_to(GameState::Initializing);
        self.tear_down();

        let placements = self.placements.clone();
        for placement in placements {
            self.create_piece_and_initialize(placement.square, placement.kind, placement.team)?;
        }

        self.turn = TurnState::default();
        let (active, _) = split_players(&mut self.white, &mut self.black, self.turn.active);
        active.generate_all_possible_moves(&self.board);

        self.state.transition_to(GameState::InProgress);
        self.events.push(GameEvent::GameStarted);
        info!(
            "[GAME_INIT] New game started: {} piece(s), {} to move",
            self.board.piece_count(),
            self.turn.active
        );
        Ok(())
    }

    /// Discard the current game and start over from the layout
    ///
    /// Always yields the same occupancy, piece ids and active team, however
    /// often and from whatever state it is called.
    pub fn restart(&mut self) -> GameResult<()> {
        info!("[GAME] Restarting game");
        self.events.push(GameEvent::GameRestarted);
        self.start_new_game()
    }

    fn tear_down(&mut self) {
        self.deselect();

        let removed: Vec<GameEvent> = self
            .white
            .pieces()
            .iter()
            .chain(self.black.pieces())
            .map(|piece| GameEvent::PieceRemoved {
                piece: piece.piece_ref(),
                square: piece.square(),
                cause: RemovalCause::Restart,
            })
            .collect();
        self.events.extend(removed);

        self.white.on_game_restarted();
        self.black.on_game_restarted();
        self.board.reset();
        self.next_piece_id = 1;
    }

    /// Create a piece, put it on the board and hand it to its owner
    fn create_piece_and_initialize(
        &mut self,
        square: Square,
        kind: PieceKind,
        team: Team,
    ) -> GameResult<PieceRef> {
        let piece = Piece::new(PieceId(self.next_piece_id), kind, team, square);
        let piece_ref = piece.piece_ref();
        self.board.place_or_clear(square, Some(piece_ref))?;
        self.next_piece_id += 1;
        self.player_mut(team).add_piece(piece);

        debug!("[GAME_INIT] Created {} {} {} on {}", team, kind, piece_ref.id, square);
        self.events.push(GameEvent::PieceCreated {
            piece: piece_ref,
            square,
        });
        Ok(piece_ref)
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle a click on the board plane
    pub fn on_square_selected(&mut self, point: BoardPoint) -> GameResult<()> {
        let square = self.geometry.square_at(point);
        debug!("[INPUT] Point ({:.2}, {:.2}) -> {}", point.x, point.z, square);
        self.select_square(square)
    }

    /// Handle a click on `square`
    ///
    /// - Clicking the selected piece deselects it
    /// - Clicking another piece of the active team selects that one
    /// - Clicking one of the selected piece's legal destinations plays the move
    /// - Anything else is ignored and the selection stays as it is
    ///
    /// Input is ignored entirely unless the game is in progress.
    ///
    /// # Errors
    ///
    /// Only if the board rejects an update of the move being played, which
    /// means the controller's own state is inconsistent.
    pub fn select_square(&mut self, square: Square) -> GameResult<()> {
        if !self.state.is_in_progress() {
            debug!("[INPUT] Ignoring {}: no game in progress", square);
            return Ok(());
        }

        let occupant = self.board.occupant_at(square);
        let own_piece = occupant.filter(|piece| self.turn.is_active(piece.team));

        match (self.selection.is_selected(), own_piece) {
            (true, Some(piece)) if self.selection.is_selected_piece(piece.id) => {
                self.deselect();
            }
            (_, Some(piece)) => {
                self.select_piece(piece.id);
            }
            (true, None) if self.selection.allows(square) => {
                self.move_selected(square)?;
            }
            _ => {
                debug!("[INPUT] Ignoring {}", square);
            }
        }
        Ok(())
    }

    /// Play `from` → `to` for the active team
    ///
    /// Unlike the click path an illegal request is reported. Any current
    /// selection is cleared when the move is accepted.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameNotInProgress`] outside `InProgress`
    /// - [`RulesError::IllegalMove`] if `from` holds no piece of the active
    ///   team or `to` is not one of its legal destinations
    pub fn try_move(&mut self, from: Square, to: Square) -> GameResult<()> {
        if !self.state.is_in_progress() {
            return Err(GameError::GameNotInProgress);
        }
        let illegal = || GameError::from(RulesError::IllegalMove { from, to });

        let team = self.turn.active;
        let mover = self
            .board
            .occupant_at(from)
            .filter(|piece| piece.team == team)
            .ok_or_else(illegal)?;

        let (own, opponent) = split_players(&mut self.white, &mut self.black, team);
        own.remove_moves_enabling_attack_on_piece(mover.id, PROTECTED_KIND, opponent, &self.board);
        if !own.piece(mover.id).is_some_and(|piece| piece.can_move_to(to)) {
            return Err(illegal());
        }

        self.deselect();
        self.apply_move(mover.id, from, to)?;
        self.end_turn();
        Ok(())
    }

    fn select_piece(&mut self, id: PieceId) {
        let (own, opponent) = split_players(&mut self.white, &mut self.black, self.turn.active);
        own.remove_moves_enabling_attack_on_piece(id, PROTECTED_KIND, opponent, &self.board);
        let Some(piece) = own.piece(id) else {
            return;
        };

        let moves = piece.available_moves().to_vec();
        let markers = moves
            .iter()
            .map(|&square| MoveMarker {
                square,
                kind: if self.board.is_empty(square) {
                    MarkerKind::Free
                } else {
                    MarkerKind::Capture
                },
            })
            .collect();

        debug!(
            "[INPUT] Selected {} {} on {} ({} legal move(s))",
            piece.kind(),
            id,
            piece.square(),
            moves.len()
        );
        self.events.push(GameEvent::SelectionShown {
            piece: piece.piece_ref(),
            markers,
        });
        self.selection.select(id, piece.square(), moves);
    }

    fn deselect(&mut self) {
        if self.selection.is_selected() {
            self.selection.clear();
            self.events.push(GameEvent::SelectionCleared);
        }
    }

    fn move_selected(&mut self, to: Square) -> GameResult<()> {
        let (Some(id), Some(from)) = (self.selection.selected_piece, self.selection.selected_square)
        else {
            return Ok(());
        };

        self.deselect();
        self.apply_move(id, from, to)?;
        self.end_turn();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Move application
    // ------------------------------------------------------------------

    fn apply_move(&mut self, id: PieceId, from: Square, to: Square) -> GameResult<()> {
        let team = self.turn.active;

        let captured = self.board.occupant_at(to).filter(|piece| piece.team != team);
        if let Some(victim) = captured {
            self.take_piece(victim, to)?;
        }

        let (own, _) = split_players(&mut self.white, &mut self.black, team);
        let piece = own
            .piece_mut(id)
            .ok_or(RulesError::IllegalMove { from, to })?;
        let piece_ref = piece.piece_ref();
        self.board.move_occupant(to, from, Some(piece_ref), None)?;
        piece.move_to(to);

        info!(
            "[GAME] {} {} {} -> {}{}",
            team,
            piece_ref.kind,
            from,
            to,
            captured.map_or(String::new(), |victim| format!(" takes {}", victim.kind))
        );
        self.events.push(GameEvent::PieceMoved {
            piece: piece_ref,
            from,
            to,
            captured,
        });

        if piece_ref.kind == PieceKind::Pawn && to.rank == team.promotion_rank() {
            self.promote_piece(piece_ref, to)?;
        }
        Ok(())
    }

    /// Remove a captured piece from the board and its owner
    fn take_piece(&mut self, victim: PieceRef, square: Square) -> GameResult<()> {
        self.board.place_or_clear(square, None)?;
        if self.player_mut(victim.team).remove_piece(victim.id).is_some() {
            debug!("[GAME] {} {} {} captured on {}", victim.team, victim.kind, victim.id, square);
            self.events.push(GameEvent::PieceRemoved {
                piece: victim,
                square,
                cause: RemovalCause::Captured,
            });
        }
        Ok(())
    }

    /// Replace the pawn on `square` with a piece of the promotion kind
    fn promote_piece(&mut self, pawn: PieceRef, square: Square) -> GameResult<()> {
        self.board.place_or_clear(square, None)?;
        self.player_mut(pawn.team).remove_piece(pawn.id);
        self.events.push(GameEvent::PieceRemoved {
            piece: pawn,
            square,
            cause: RemovalCause::Promoted,
        });

        let promoted = self.create_piece_and_initialize(square, self.promotion_kind, pawn.team)?;
        info!("[GAME] {} pawn promoted to {} on {}", pawn.team, promoted.kind, square);
        self.events.push(GameEvent::PiecePromoted {
            pawn,
            promoted,
            square,
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Turn advance
    // ------------------------------------------------------------------

    /// Regenerate both sides, detect the end of the game or hand over the turn
    ///
    /// Check detection is the same for both teams: the side that just moved
    /// checks the other side's king.
    fn end_turn(&mut self) {
        let mover = self.turn.active;
        let defender = mover.opponent();

        self.white.generate_all_possible_moves(&self.board);
        self.black.generate_all_possible_moves(&self.board);

        let (own, opponent) = split_players(&mut self.white, &mut self.black, mover);
        let attackers = own.pieces_attacking_kind(PROTECTED_KIND, &self.board);
        let in_check = !attackers.is_empty();

        opponent.remove_moves_enabling_attack_on(PROTECTED_KIND, own, &self.board);

        let outcome = if in_check {
            debug!(
                "[GAME] {} king attacked by {} piece(s)",
                defender,
                attackers.len()
            );
            let king_moves: usize = opponent
                .pieces_of_kind(PROTECTED_KIND)
                .map(|king| king.available_moves().len())
                .sum();
            let can_block = opponent.can_block_check_against(PROTECTED_KIND, own, &self.board);
            (king_moves == 0 && !can_block).then_some(GameOutcome::Checkmate { winner: mover })
        } else if opponent.pieces_of_kind(PROTECTED_KIND).next().is_some()
            && !opponent.has_any_move()
        {
            Some(GameOutcome::Stalemate)
        } else {
            None
        };

        match outcome {
            Some(outcome) => self.end_game(outcome),
            None => {
                if in_check {
                    info!("[GAME] {} is in check", defender);
                    self.events.push(GameEvent::KingInCheck { team: defender });
                }
                self.turn.switch_turn();
                self.events.push(GameEvent::TurnChanged {
                    active: self.turn.active,
                });
            }
        }
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        info!("[GAME] Game over: {}", outcome.message());
        self.state.transition_to(GameState::Finished(outcome));
        self.events.push(GameEvent::GameFinished { outcome });
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn is_game_in_progress(&self) -> bool {
        self.state.is_in_progress()
    }

    /// Whether `team` may act right now
    pub fn is_team_turn_active(&self, team: Team) -> bool {
        self.state.is_in_progress() && self.turn.is_active(team)
    }

    pub fn active_team(&self) -> Team {
        self.turn.active
    }

    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<Team> {
        self.state.outcome().and_then(|outcome| outcome.winner())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, team: Team) -> &Player {
        match team {
            Team::White => &self.white,
            Team::Black => &self.black,
        }
    }

    fn player_mut(&mut self, team: Team) -> &mut Player {
        match team {
            Team::White => &mut self.white,
            Team::Black => &mut self.black,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn promotion_kind(&self) -> PieceKind {
        self.promotion_kind
    }

    /// Events queued since the last drain, oldest first
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every queued event, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
