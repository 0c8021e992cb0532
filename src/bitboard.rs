//! Low-level bitboard operations.
//!
//! For efficiency, these operations are unchecked and may produce garbage
//! if the two sides' bitboards overlap or a move mask is not one-hot.
//!
//! Under the hood, everything works on u64 bitboards in row-major order:
//! bit 0 is square a1, bit `row * 8 + col` is the square at that row and
//! column, and bit 63 is h8.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: d5 and e4.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: d4 and e5.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// Every square except the a and h files.
const FILE_INTERIOR: u64 = 0x7E7E7E7E7E7E7E7E;

/// Every square except the first and eighth ranks.
const RANK_INTERIOR: u64 = 0x00FFFFFFFFFFFF00;

/// Every square not on the board's border.
const INTERIOR: u64 = 0x007E7E7E7E7E7E00;

/// The longest run of opponent pieces a move can capture on an 8-wide
/// board: 8 minus the origin and destination squares.
const MAX_RUN: usize = 6;

impl Bitboard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(u64::MAX);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// One of the eight movement directions on the board.
///
/// Each direction carries the edge mask that keeps a shifted search from
/// wrapping across the border onto the opposite edge: horizontal steps
/// exclude the a and h files, vertical steps the first and eighth ranks,
/// and diagonal steps the whole border.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    East,
    West,
    North,
    South,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::West,
        Self::North,
        Self::South,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// The mask of squares a search along this direction may pass through.
    #[inline]
    pub fn mask(self) -> Bitboard {
        match self {
            Self::East | Self::West => Bitboard(FILE_INTERIOR),
            Self::North | Self::South => Bitboard(RANK_INTERIOR),
            _ => Bitboard(INTERIOR),
        }
    }

    /// Move every piece in `bitboard` one square along this direction.
    #[inline]
    pub fn shift(self, bitboard: Bitboard) -> Bitboard {
        let bits = bitboard.0;
        Bitboard(match self {
            Self::East => bits << 1,
            Self::West => bits >> 1,
            Self::North => bits << 8,
            Self::South => bits >> 8,
            Self::NorthEast => bits << 9,
            Self::NorthWest => bits << 7,
            Self::SouthEast => bits >> 7,
            Self::SouthWest => bits >> 9,
        })
    }

    /// Move every piece in `bitboard` one square against this direction.
    #[inline]
    pub fn unshift(self, bitboard: Bitboard) -> Bitboard {
        self.opposite().shift(bitboard)
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }
}

/// Walk from `seed` along `direction`, accumulating the contiguous run of
/// `opponent` pieces reachable without crossing the board edge.
#[inline]
fn opponent_run(seed: Bitboard, opponent: Bitboard, direction: Direction) -> Bitboard {
    let rail = opponent & direction.mask();
    let mut run = rail & direction.shift(seed);
    for _ in 1..MAX_RUN {
        run |= rail & direction.shift(run);
    }
    run
}

/// Compute a mask of the legal moves for the active player from masks of
/// the active player's pieces and the opponent's pieces.
/// Undefined behavior if an invalid Othello board is specified.
#[inline]
pub fn move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empty = !(active | opponent);
    let mut moves = Bitboard::EMPTY;

    // A square is a destination in some direction when it is empty and one
    // step beyond a run of opponent pieces anchored on an active piece.
    for direction in Direction::ALL {
        moves |= empty & direction.shift(opponent_run(active, opponent, direction));
    }
    moves
}

/// Compute the mask of opponent pieces captured when the active player
/// moves to the one-hot square `move_mask`. Undefined behavior if an
/// invalid Othello board or a non-legal move is provided.
#[inline]
pub fn flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut flips = Bitboard::EMPTY;

    for direction in Direction::ALL {
        // The opponent run extending away from the destination square.
        let run = opponent_run(move_mask, opponent, direction);
        // The run is only captured if an active piece seals its far end;
        // walk back from that anchor and keep the overlap.
        let anchor = active & direction.shift(run);
        let mut captured = run & direction.unshift(anchor);
        for _ in 1..MAX_RUN {
            captured |= run & direction.unshift(captured);
        }
        flips |= captured;
    }
    flips
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    index: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.0 & (1u64 << self.index) != 0;
        self.index += 1;

        Some(bit)
    }
}

impl ExactSizeIterator for Bits {
    fn len(&self) -> usize {
        NUM_SPACES - self.index
    }
}

/// Iterate over the bits in row-major order, starting from a1.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            index: 0,
            bitboard: self,
        }
    }
}
