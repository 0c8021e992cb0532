//! The core game operations over a [`Position`].
//!
//! A [`Position`] is an immutable value: every operation returns a fresh
//! value and nothing is mutated in place, so positions can be shared
//! freely. [`Position::apply_move`] is unchecked for speed; the validated
//! interface lives in [`game.rs`](crate::Game).

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::location::{Location, LocationList};
use crate::utils;
use crate::NUM_SPACES;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Side {
    /// The darker stones; conventionally the first mover.
    #[default]
    Black,
    White,
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

/// Whether a game can go on from a given position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameStatus {
    Continue,
    GameOver,
}

/// The stones of both sides at one point in a game.
///
/// Invariant: the two bitboards are disjoint. Every constructor and
/// operation on this type preserves that.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Position {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Position {
    /// The standard Othello starting position: the four center squares
    /// occupied, same-colored stones diagonally opposite.
    pub const INITIAL: Self = Self {
        black: BLACK_START,
        white: WHITE_START,
    };

    /// Build a position from raw per-side bitboards.
    /// Panics if the bitboards overlap.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Self {
        assert!((black & white).is_empty());
        Self { black, white }
    }

    /// The bitboard of one side's stones.
    #[inline]
    pub fn pieces(self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    /// The bitboard of all occupied squares.
    #[inline]
    pub fn occupied(self) -> Bitboard {
        self.black | self.white
    }

    /// The number of stones one side has on the board.
    #[inline]
    pub fn count(self, side: Side) -> u8 {
        self.pieces(side).count_occupied()
    }

    /// Every square where `side` may currently place a stone.
    #[inline]
    pub fn legal_moves(self, side: Side) -> LocationList {
        LocationList::from(bitboard::move_mask(self.pieces(side), self.pieces(!side)))
    }

    /// Whether placing a stone of `side` on `loc` is currently legal.
    #[inline]
    pub fn is_legal_move(self, side: Side, loc: Location) -> bool {
        self.legal_moves(side).contains(loc)
    }

    /// Place a stone of `side` on `loc` and flip the captured runs.
    ///
    /// `loc` must be legal for `side` per [`Self::is_legal_move`]; the
    /// result is unspecified otherwise.
    #[inline]
    pub fn apply_move(self, side: Side, loc: Location) -> Self {
        let own = self.pieces(side);
        let opponent = self.pieces(!side);
        let flipped = bitboard::flip_mask(own, opponent, loc.into());

        let own = own | Bitboard::from(loc) | flipped;
        let opponent = opponent & !flipped;
        match side {
            Side::Black => Self {
                black: own,
                white: opponent,
            },
            Side::White => Self {
                black: opponent,
                white: own,
            },
        }
    }

    /// Whether the game is over: neither side has a legal move, no matter
    /// whose turn it nominally is.
    pub fn status(self) -> GameStatus {
        let any_move = Bitboard::from(self.legal_moves(Side::Black))
            | Bitboard::from(self.legal_moves(Side::White));
        if any_move.is_empty() {
            GameStatus::GameOver
        } else {
            GameStatus::Continue
        }
    }

    /// Flatten into one entry per square in row-major order, for rendering.
    pub fn cells(self) -> [Option<Side>; NUM_SPACES] {
        let mut cells = [None; NUM_SPACES];
        for (cell, (black, white)) in cells
            .iter_mut()
            .zip(self.black.into_iter().zip(self.white.into_iter()))
        {
            *cell = match (black, white) {
                (true, _) => Some(Side::Black),
                (_, true) => Some(Side::White),
                _ => None,
            };
        }
        cells
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells().iter().map(|cell| match cell {
                Some(Side::Black) => 'X',
                Some(Side::White) => 'O',
                None => '.',
            }),
            f,
        )
    }
}
