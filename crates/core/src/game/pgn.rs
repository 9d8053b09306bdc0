//! Portable game notation export

use std::fmt;

use shakmaty::{Chess, Color, EnPassantMode, Position, fen::Fen};

use super::record::GameRecord;
use super::types::RulesEngine;

/// PGN of a recorded game, written through `Display`.
pub struct Pgn<'a> {
    game: &'a GameRecord,
}

impl<'a> Pgn<'a> {
    pub fn from_game(game: &'a GameRecord) -> Self {
        Self { game }
    }

    fn movetext(&self) -> Vec<String> {
        let start = self.game.start_position();
        let mut number = start.fullmoves().get();
        let mut turn = start.turn();

        let mut tokens = Vec::new();
        for (index, record) in self.game.history().iter().enumerate() {
            match turn {
                Color::White => tokens.push(format!("{}. {}", number, record.san)),
                Color::Black if index == 0 => tokens.push(format!("{}... {}", number, record.san)),
                Color::Black => tokens.push(record.san.clone()),
            }
            if turn == Color::Black {
                number += 1;
            }
            turn = turn.other();
        }
        tokens
    }
}

impl fmt::Display for Pgn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self
            .game
            .outcome()
            .map(|outcome| outcome.result_tag())
            .unwrap_or("*");

        // Player and event details are not recorded
        writeln!(f, "[Event \"?\"]")?;
        writeln!(f, "[Site \"?\"]")?;
        writeln!(f, "[Date \"????.??.??\"]")?;
        writeln!(f, "[Round \"?\"]")?;
        writeln!(f, "[White \"?\"]")?;
        writeln!(f, "[Black \"?\"]")?;
        writeln!(f, "[Result \"{}\"]", result)?;

        let start_fen = self.game.start_fen();
        let standard = Fen::from_position(&Chess::default(), EnPassantMode::Legal).to_string();
        if start_fen != standard {
            writeln!(f, "[SetUp \"1\"]")?;
            writeln!(f, "[FEN \"{}\"]", start_fen)?;
        }
        writeln!(f)?;

        let mut tokens = self.movetext();
        tokens.push(result.to_string());
        write!(f, "{}", tokens.join(" "))
    }
}
