//! Game record over a `shakmaty` position

use shakmaty::{
    fen::Fen,
    san::SanPlus,
    zobrist::Zobrist64,
    CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Square,
};
use tracing::{debug, info};

use super::outcome::{DecisiveReason, DrawClaim, DrawReason, Outcome};
use super::pgn::Pgn;
use super::types::{MoveRecord, PiecePlacement, RulesEngine};
use crate::error::{Error, Result};

/// Something that happened in a game, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A board move; its details are in the move history.
    Move,
    OfferDraw(Color),
    AcceptDraw,
    ClaimDraw(DrawClaim),
    Resign(Color),
}

/// A game: the start position, everything that happened since and the
/// position it leads to.
#[derive(Debug, Clone)]
pub struct GameRecord {
    start_position: Chess,
    moves: Vec<MoveRecord>,
    actions: Vec<Action>,
    current_position: Chess,
    /// Hashes of every position reached, the start included.
    position_hashes: Vec<Zobrist64>,
}

fn position_hash(position: &Chess) -> Zobrist64 {
    position.zobrist_hash(EnPassantMode::Legal)
}

impl GameRecord {
    /// Game from the standard starting position
    pub fn new() -> Self {
        Self::from_start_position(Chess::default())
    }

    pub fn from_start_position(start_position: Chess) -> Self {
        Self {
            current_position: start_position.clone(),
            position_hashes: vec![position_hash(&start_position)],
            start_position,
            moves: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| Error::Fen(format!("{}: {}", fen, e)))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| Error::Fen(format!("{}: {}", fen, e)))?;
        Ok(Self::from_start_position(position))
    }

    pub fn start_position(&self) -> &Chess {
        &self.start_position
    }

    pub fn current_position(&self) -> &Chess {
        &self.current_position
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of half-moves played
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.current_position, EnPassantMode::Legal).to_string()
    }

    pub fn start_fen(&self) -> String {
        Fen::from_position(&self.start_position, EnPassantMode::Legal).to_string()
    }

    pub fn pgn(&self) -> Pgn<'_> {
        Pgn::from_game(self)
    }

    fn ensure_ongoing(&self, action: &str) -> Result<()> {
        match self.outcome() {
            Some(outcome) => Err(Error::InvalidAction(format!("{}: {}", action, outcome))),
            None => Ok(()),
        }
    }

    /// Plays a move given in SAN ("e4", "Nf3", "O-O", "exd8=Q+").
    ///
    /// The record is left untouched if the game is over, or if the move
    /// does not parse or is not legal in the current position.
    pub fn play_san(&mut self, san: &str) -> Result<()> {
        self.ensure_ongoing(san)?;

        let san_plus: SanPlus = san
            .trim()
            .parse()
            .map_err(|e| Error::IllegalMove(format!("{}: {}", san, e)))?;

        let mv = san_plus
            .san
            .to_move(&self.current_position)
            .map_err(|e| Error::IllegalMove(format!("{}: {}", san, e)))?;

        let (from, to) =
            move_squares(&mv).ok_or_else(|| Error::IllegalMove(format!("{}: not a board move", san)))?;

        let position = match self.current_position.clone().play(mv) {
            Ok(p) => p,
            Err(_) => return Err(Error::IllegalMove(san.to_string())),
        };

        let suffix = if position.is_checkmate() {
            "#"
        } else if position.is_check() {
            "+"
        } else {
            ""
        };

        let record = MoveRecord {
            from: from.to_string(),
            to: to.to_string(),
            san: format!("{}{}", san_plus.san, suffix),
        };
        debug!(ply = self.moves.len() + 1, san = %record.san, from = %record.from, to = %record.to, "played move");

        self.position_hashes.push(position_hash(&position));
        self.current_position = position;
        self.moves.push(record);
        self.actions.push(Action::Move);
        Ok(())
    }

    /// Plays moves in order, stopping at the first one that fails.
    pub fn play_all<'a, I>(&mut self, moves: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for san in moves {
            self.play_san(san)?;
        }
        Ok(())
    }

    /// `color` offers a draw; the opponent may accept until they move.
    pub fn offer_draw(&mut self, color: Color) -> Result<()> {
        self.ensure_ongoing("offer draw")?;
        self.actions.push(Action::OfferDraw(color));
        Ok(())
    }

    /// Accepts a pending draw offer.
    ///
    /// The offer is pending when it is the last action, or when the
    /// offering side has made one move since.
    pub fn accept_draw(&mut self) -> Result<()> {
        self.ensure_ongoing("accept draw")?;

        let mut recent = self.actions.iter().rev();
        let pending = match recent.next() {
            Some(Action::OfferDraw(_)) => true,
            Some(Action::Move) => {
                recent.next() == Some(&Action::OfferDraw(self.current_position.turn().other()))
            }
            _ => false,
        };

        if !pending {
            return Err(Error::InvalidAction("accept draw: no draw offer pending".to_string()));
        }
        self.actions.push(Action::AcceptDraw);
        info!("draw agreed");
        Ok(())
    }

    pub fn resign(&mut self, color: Color) -> Result<()> {
        self.ensure_ongoing("resign")?;
        self.actions.push(Action::Resign(color));
        info!(side = ?color, "resigned");
        Ok(())
    }

    /// Grounds on which the side to move may claim a draw now.
    pub fn can_claim_draw(&self) -> Option<DrawClaim> {
        if self.outcome().is_some() {
            return None;
        }

        let halfmoves = self.current_position.halfmoves();
        if halfmoves >= 100 {
            return Some(DrawClaim::FiftyMoveRule { halfmoves });
        }

        let claimed_by = self.current_position.turn();
        let occurrences = |hash: Zobrist64| self.position_hashes.iter().filter(|h| **h == hash).count();

        if let Some(last) = self.position_hashes.last() {
            let count = occurrences(*last);
            if count >= 3 {
                return Some(DrawClaim::Repetition { count, claimed_by });
            }
        }

        // A move that would repeat the position for the third time
        // can be claimed before it is played.
        for mv in self.current_position.legal_moves() {
            if let Ok(next) = self.current_position.clone().play(mv) {
                let count = occurrences(position_hash(&next)) + 1;
                if count >= 3 {
                    return Some(DrawClaim::Repetition { count, claimed_by });
                }
            }
        }

        None
    }

    pub fn claim_draw(&mut self) -> Result<()> {
        let claim = self
            .can_claim_draw()
            .ok_or_else(|| Error::InvalidAction("claim draw: no grounds".to_string()))?;
        self.actions.push(Action::ClaimDraw(claim));
        info!(?claim, "draw claimed");
        Ok(())
    }

    /// How the game ended, `None` while it is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        let position = &self.current_position;

        if position.is_checkmate() {
            return Some(Outcome::Decisive {
                winner: position.turn().other(),
                reason: DecisiveReason::Checkmate,
            });
        }
        if position.is_stalemate() {
            return Some(Outcome::Draw {
                reason: DrawReason::Stalemate,
            });
        }
        if position.is_insufficient_material() {
            return Some(Outcome::Draw {
                reason: DrawReason::InsufficientMaterial,
            });
        }

        match self.actions.last() {
            Some(Action::Resign(color)) => Some(Outcome::Decisive {
                winner: color.other(),
                reason: DecisiveReason::Resigned,
            }),
            Some(Action::AcceptDraw) => Some(Outcome::Draw {
                reason: DrawReason::MutualAgreement,
            }),
            Some(Action::ClaimDraw(claim)) => Some(Outcome::Draw {
                reason: DrawReason::Claimed(*claim),
            }),
            _ => None,
        }
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for GameRecord {
    fn history(&self) -> Vec<MoveRecord> {
        self.moves.clone()
    }

    fn is_check(&self) -> bool {
        self.current_position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.current_position.is_checkmate()
    }

    fn turn(&self) -> Color {
        self.current_position.turn()
    }

    fn outcome(&self) -> Option<Outcome> {
        GameRecord::outcome(self)
    }

    fn pieces(&self) -> Vec<PiecePlacement> {
        let board = self.current_position.board();
        Square::ALL
            .into_iter()
            .filter_map(|square| {
                board.piece_at(square).map(|piece| PiecePlacement {
                    square: square.to_string(),
                    role: piece.role,
                    color: piece.color,
                })
            })
            .collect()
    }
}

/// Origin and destination of a move as a player sees them.
///
/// Castling is reported as the king's walk (e1 to g1), not as the rook
/// capture `shakmaty` encodes it with.
fn move_squares(mv: &Move) -> Option<(Square, Square)> {
    match mv {
        Move::Normal { from, to, .. } => Some((*from, *to)),
        Move::EnPassant { from, to, .. } => Some((*from, *to)),
        Move::Castle { king, rook } => {
            let king_to = if rook.file() > king.file() {
                Square::from_coords(File::G, king.rank())
            } else {
                Square::from_coords(File::C, king.rank())
            };
            Some((*king, king_to))
        }
        Move::Put { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameRecord::new();
        assert_eq!(game.ply_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.pieces().len(), 32);
        assert!(!game.is_check());
    }

    #[test]
    fn test_play_records_history() {
        let mut game = GameRecord::new();
        game.play_all(["e4", "e5", "Nf3"]).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].from, "e2");
        assert_eq!(history[0].to, "e4");
        assert_eq!(history[2].san, "Nf3");
        assert_eq!(history[2].from, "g1");
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_illegal_move_leaves_record_untouched() {
        let mut game = GameRecord::new();
        game.play_san("e4").unwrap();

        assert!(matches!(game.play_san("e4"), Err(Error::IllegalMove(_))));
        assert!(matches!(game.play_san("zz"), Err(Error::IllegalMove(_))));
        assert_eq!(game.ply_count(), 1);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_fools_mate() {
        let mut game = GameRecord::new();
        game.play_all(["f3", "e5", "g4", "Qh4#"]).unwrap();

        assert!(game.is_check());
        assert!(game.is_checkmate());
        assert_eq!(game.history()[3].san, "Qh4#");
    }

    #[test]
    fn test_castling_reports_king_squares() {
        let mut game = GameRecord::new();
        game.play_all(["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "O-O"]).unwrap();

        let last = game.history().pop().unwrap();
        assert_eq!(last.from, "e1");
        assert_eq!(last.to, "g1");
        assert_eq!(last.san, "O-O");
    }

    #[test]
    fn test_from_fen() {
        let game = GameRecord::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert_eq!(game.pieces().len(), 3);
        assert_eq!(game.fen(), "4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(matches!(GameRecord::from_fen("not a fen"), Err(Error::Fen(_))));
    }

    #[test]
    fn test_checkmate_outcome() {
        let mut game = GameRecord::new();
        assert_eq!(game.outcome(), None);

        game.play_all(["f3", "e5", "g4", "Qh4#"]).unwrap();

        let outcome = game.outcome().unwrap();
        assert_eq!(
            outcome,
            Outcome::Decisive {
                winner: Color::Black,
                reason: DecisiveReason::Checkmate
            }
        );
        assert_eq!(outcome.result_tag(), "0-1");
        assert_eq!(outcome.to_string(), "Black wins by checkmate");
    }

    #[test]
    fn test_stalemate_outcome() {
        let game = GameRecord::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let outcome = game.outcome().unwrap();
        assert_eq!(
            outcome,
            Outcome::Draw {
                reason: DrawReason::Stalemate
            }
        );
        assert_eq!(outcome.result_tag(), "1/2-1/2");
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_insufficient_material_outcome() {
        let game = GameRecord::from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(
            game.outcome(),
            Some(Outcome::Draw {
                reason: DrawReason::InsufficientMaterial
            })
        );
    }

    #[test]
    fn test_resign_ends_game() {
        let mut game = GameRecord::new();
        game.play_san("e4").unwrap();
        game.resign(Color::Black).unwrap();

        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.winner(), Some(Color::White));
        assert_eq!(outcome.result_tag(), "1-0");

        assert!(matches!(game.play_san("e5"), Err(Error::InvalidAction(_))));
        assert!(matches!(game.resign(Color::White), Err(Error::InvalidAction(_))));
        assert_eq!(game.ply_count(), 1);
    }

    #[test]
    fn test_draw_offer_and_accept() {
        let mut game = GameRecord::new();
        assert!(matches!(game.accept_draw(), Err(Error::InvalidAction(_))));

        game.offer_draw(Color::White).unwrap();
        game.play_san("e4").unwrap();
        game.accept_draw().unwrap();

        assert_eq!(
            game.outcome(),
            Some(Outcome::Draw {
                reason: DrawReason::MutualAgreement
            })
        );
        assert_eq!(
            game.actions(),
            &[Action::OfferDraw(Color::White), Action::Move, Action::AcceptDraw]
        );
    }

    #[test]
    fn test_draw_offer_lapses_after_reply() {
        let mut game = GameRecord::new();
        game.offer_draw(Color::White).unwrap();
        game.play_all(["e4", "e5"]).unwrap();
        assert!(matches!(game.accept_draw(), Err(Error::InvalidAction(_))));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_threefold_repetition_claim() {
        let mut game = GameRecord::new();
        game.play_all(["Nf3", "Nf6", "Ng1", "Ng8"]).unwrap();
        assert_eq!(game.can_claim_draw(), None);
        assert!(matches!(game.claim_draw(), Err(Error::InvalidAction(_))));

        // Black's knight returning to g8 would be the third occurrence.
        game.play_all(["Nf3", "Nf6", "Ng1"]).unwrap();
        assert_eq!(
            game.can_claim_draw(),
            Some(DrawClaim::Repetition {
                count: 3,
                claimed_by: Color::Black
            })
        );

        game.play_san("Ng8").unwrap();
        assert_eq!(
            game.can_claim_draw(),
            Some(DrawClaim::Repetition {
                count: 3,
                claimed_by: Color::White
            })
        );

        game.claim_draw().unwrap();
        assert_eq!(game.outcome().unwrap().result_tag(), "1/2-1/2");
        assert_eq!(game.outcome().unwrap().to_string(), "Draw by repetition (3 times)");
    }

    #[test]
    fn test_fifty_move_claim() {
        let game = GameRecord::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
        assert_eq!(
            game.can_claim_draw(),
            Some(DrawClaim::FiftyMoveRule { halfmoves: 100 })
        );
    }
}
