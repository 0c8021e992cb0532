//! Turn-taking Othello logic on top of [`Position`].
//!
//! Where [`Position::apply_move`] trusts its caller, [`Game`] validates
//! every move, hands the turn over (or keeps it, when the opponent has no
//! reply), and replays textual move records.

use crate::board::{GameStatus, Position, Side};
use crate::location::{Location, LocationList};
use std::fmt;

/// A position together with the side to move.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Game {
    position: Position,
    to_move: Side,
}

/// A move that is not legal for the side to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IllegalMoveError {
    pub loc: Location,
    pub side: Side,
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} is not legal for {}", self.loc, self.side)
    }
}

impl std::error::Error for IllegalMoveError {}

/// Why a move record could not be replayed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReplayError {
    /// The record does not match the `([a-h][1-8])*` grammar.
    Notation,
    /// A well-formed move was illegal in the position it was played from.
    Illegal(IllegalMoveError),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Notation => f.write_str("malformed move record"),
            ReplayError::Illegal(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Notation => None,
            ReplayError::Illegal(err) => Some(err),
        }
    }
}

impl From<IllegalMoveError> for ReplayError {
    fn from(err: IllegalMoveError) -> Self {
        Self::Illegal(err)
    }
}

impl Game {
    /// Start a game from an arbitrary position.
    pub fn new(position: Position, to_move: Side) -> Self {
        Self { position, to_move }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Every square the side to move may play.
    #[inline]
    pub fn legal_moves(&self) -> LocationList {
        self.position.legal_moves(self.to_move)
    }

    /// Play a stone for the side to move.
    ///
    /// The turn passes to the opponent unless the opponent has no legal
    /// reply, in which case the same side moves again (a forced pass).
    pub fn apply_move(self, loc: Location) -> Result<Self, IllegalMoveError> {
        if !self.position.is_legal_move(self.to_move, loc) {
            return Err(IllegalMoveError {
                loc,
                side: self.to_move,
            });
        }

        let position = self.position.apply_move(self.to_move, loc);
        let to_move = if position.legal_moves(!self.to_move).is_empty() {
            self.to_move
        } else {
            !self.to_move
        };
        Ok(Self { position, to_move })
    }

    /// Whether neither side can move.
    pub fn is_finished(&self) -> bool {
        self.position.status() == GameStatus::GameOver
    }

    /// The number of stones `side` has on the board.
    pub fn score(&self, side: Side) -> u8 {
        self.position.count(side)
    }

    /// The side with more stones, or None for a tie.
    pub fn winner(&self) -> Option<Side> {
        match self
            .score(Side::Black)
            .cmp(&self.score(Side::White))
        {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Replay a separator-free move record ("f5d6c3...") from the start
    /// of a game.
    ///
    /// The record's grammar is checked in full before any move is applied,
    /// and the whole record is rejected on the first illegal move; no
    /// partially-replayed game is ever returned.
    pub fn replay(record: &str) -> Result<Self, ReplayError> {
        let mut moves = Vec::with_capacity(record.len() / 2);
        let mut chars = record.chars();
        while let Some(file) = chars.next() {
            let rank = chars.next().ok_or(ReplayError::Notation)?;
            // The record grammar is strict lowercase; the lenient
            // single-square parser only sees what passes it.
            if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
                return Err(ReplayError::Notation);
            }
            let notation: String = [file, rank].iter().collect();
            let loc: Location = notation.parse().map_err(|_| ReplayError::Notation)?;
            moves.push(loc);
        }

        let mut game = Game::default();
        for loc in moves {
            game = game.apply_move(loc)?;
        }
        Ok(game)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.position)?;
        write!(f, "{} to move", self.to_move)
    }
}
