use crate::error::Error;
use num::Integer;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use static_assertions::const_assert_eq;
use std::fmt;
use std::str::FromStr;

pub const BOARD_WIDTH: i32 = 8;
pub const NUM_SQUARES: i32 = BOARD_WIDTH * BOARD_WIDTH;

/// Terminates every run in a generated squares sequence. Never a legal
/// square.
pub const INVALID_SQUARE: u8 = 64;

/// Index-table placeholder for "no ray". Position 0 of every ray sequence
/// holds a sentinel, so walking from it yields nothing.
pub const NO_RAY: usize = 0;

const_assert_eq!(INVALID_SQUARE as i32, NUM_SQUARES);
const_assert_eq!(NO_RAY, 0);

/// Board squares in row-major order. Row 0 is the eighth rank, so square 0
/// is a8 and square 63 is h1.
#[rustfmt::skip]
#[derive(
  Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
  IntoPrimitive, TryFromPrimitive,
)]
#[repr(u8)]
pub enum Square {
  A8, B8, C8, D8, E8, F8, G8, H8,
  A7, B7, C7, D7, E7, F7, G7, H7,
  A6, B6, C6, D6, E6, F6, G6, H6,
  A5, B5, C5, D5, E5, F5, G5, H5,
  A4, B4, C4, D4, E4, F4, G4, H4,
  A3, B3, C3, D3, E3, F3, G3, H3,
  A2, B2, C2, D2, E2, F2, G2, H2,
  A1, B1, C1, D1, E1, F1, G1, H1,
}

/// Boundary test over the flat index space. Defined for every integer since
/// offset arithmetic upstream is unguarded.
pub fn fits_on_board(index: i32) -> bool {
  (0..NUM_SQUARES).contains(&index)
}

/// Column of a raw index, floored so negative indices still land in 0..8.
pub fn column(index: i32) -> i32 {
  index.mod_floor(&BOARD_WIDTH)
}

pub fn row(index: i32) -> i32 {
  Integer::div_floor(&index, &BOARD_WIDTH)
}

/// True iff `to` is on the board and no more than `tolerance` columns away
/// from `from`. Rejects offsets that wrap around the left or right edge.
pub fn within_tolerance(from: i32, to: i32, tolerance: i32) -> bool {
  (column(to) - column(from)).abs() <= tolerance && fits_on_board(to)
}

pub fn squares() -> impl Iterator<Item = Square> {
  (0..NUM_SQUARES as u8).filter_map(|i| Square::try_from(i).ok())
}

pub fn to_square(row: i32, column: i32) -> Option<Square> {
  if !(0..BOARD_WIDTH).contains(&row) || !(0..BOARD_WIDTH).contains(&column) {
    return None;
  }
  Square::new(row * BOARD_WIDTH + column)
}

impl Square {
  pub fn new(index: i32) -> Option<Square> {
    if !fits_on_board(index) {
      return None;
    }
    Square::try_from(index as u8).ok()
  }

  pub fn index(self) -> usize {
    u8::from(self) as usize
  }

  pub fn row(self) -> i32 {
    let (row, _) = (u8::from(self) as i32).div_rem(&BOARD_WIDTH);
    row
  }

  pub fn column(self) -> i32 {
    let (_, column) = (u8::from(self) as i32).div_rem(&BOARD_WIDTH);
    column
  }

  /// The square `d_row` rows and `d_column` columns away, if still on the
  /// board.
  pub fn offset(self, d_row: i32, d_column: i32) -> Option<Square> {
    to_square(self.row() + d_row, self.column() + d_column)
  }

  pub fn algebraic(self) -> String {
    let file = (b'a' + self.column() as u8) as char;
    let rank = (b'8' - self.row() as u8) as char;
    format!("{}{}", file, rank)
  }
}

impl fmt::Display for Square {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.algebraic())
  }
}

/// Accepts either an algebraic name (`e4`) or a flat index (`36`).
impl FromStr for Square {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || Error::InvalidSquare(s.to_string());
    if let Ok(index) = s.parse::<i32>() {
      return Square::new(index).ok_or_else(invalid);
    }
    let mut chars = s.chars();
    let column = match chars.next() {
      Some(c @ 'a'..='h') => c as i32 - 'a' as i32,
      _ => return Err(invalid()),
    };
    let row = match chars.next() {
      Some(c @ '1'..='8') => '8' as i32 - c as i32,
      _ => return Err(invalid()),
    };
    if chars.next().is_some() {
      return Err(invalid());
    }
    to_square(row, column).ok_or_else(invalid)
  }
}

// This is the index distance, not the Manhattan distance: a7 and h8 are 1
// apart.
pub fn distance(from: Square, to: Square) -> i32 {
  (u8::from(from) as i32 - u8::from(to) as i32).abs()
}

pub fn horizontal_distance(from: Square, to: Square) -> i32 {
  (from.column() - to.column()).abs()
}

pub fn vertical_distance(from: Square, to: Square) -> i32 {
  (from.row() - to.row()).abs()
}

pub fn valid_knight_movement(from: Square, to: Square) -> bool {
  matches!(distance(from, to), 6 | 10 | 15 | 17)
    && horizontal_distance(from, to) < 3
}

pub fn in_king_range(from: Square, to: Square) -> bool {
  horizontal_distance(from, to) < 2 && vertical_distance(from, to) < 2
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{Rng, SeedableRng};
  use rand_chacha::ChaChaRng;

  #[test]
  fn test_fits_on_board() {
    for i in 0..64 {
      assert!(fits_on_board(i), "{}", i);
    }
    assert!(!fits_on_board(-1));
    assert!(!fits_on_board(64));
    assert!(!fits_on_board(i32::MIN));
    assert!(!fits_on_board(i32::MAX));
  }

  #[test]
  fn test_within_tolerance() {
    assert!(within_tolerance(0, 2, 2));
    assert!(within_tolerance(0, 10, 2));
    assert!(!within_tolerance(7, 9, 2));
    assert!(!within_tolerance(0, 16 - 17, 2));
    assert!(within_tolerance(9, 0, 1));
    assert!(!within_tolerance(8, 7, 1));
    assert!(!within_tolerance(63, 72, 1));
  }

  #[test]
  fn test_within_tolerance_random() {
    let mut rng = ChaChaRng::seed_from_u64(0x10615);
    for _ in 0..10_000 {
      let from: i32 = rng.gen_range(0..64);
      let to: i32 = rng.gen_range(-200..200);
      let tolerance: i32 = rng.gen_range(0..8);
      let expected =
        (0..64).contains(&to) && (to % 8 - from % 8).abs() <= tolerance;
      assert_eq!(
        expected,
        within_tolerance(from, to, tolerance),
        "from={} to={} tolerance={}",
        from,
        to,
        tolerance
      );
    }
  }

  #[test]
  fn test_column_and_row_of_negative_index() {
    assert_eq!(7, column(-1));
    assert_eq!(-1, row(-1));
    assert_eq!(7, column(-17));
    assert_eq!(0, column(64));
    assert_eq!(8, row(64));
  }

  #[test]
  fn test_squares() {
    let all: Vec<Square> = squares().collect();
    assert_eq!(64, all.len());
    assert_eq!(Square::A8, all[0]);
    assert_eq!(Square::H1, all[63]);
    for (i, s) in all.iter().enumerate() {
      assert_eq!(i, s.index());
    }
  }

  #[test]
  fn test_row_column() {
    assert_eq!((0, 0), (Square::A8.row(), Square::A8.column()));
    assert_eq!((0, 7), (Square::H8.row(), Square::H8.column()));
    assert_eq!((7, 0), (Square::A1.row(), Square::A1.column()));
    assert_eq!((4, 4), (Square::E4.row(), Square::E4.column()));
    assert_eq!((1, 5), (Square::F7.row(), Square::F7.column()));
  }

  #[test]
  fn test_offset() {
    assert_eq!(Some(Square::B7), Square::A8.offset(1, 1));
    assert_eq!(None, Square::A8.offset(-1, 0));
    assert_eq!(None, Square::H4.offset(0, 1));
    assert_eq!(Some(Square::A5), Square::H5.offset(0, -7));
  }

  #[test]
  fn test_algebraic() {
    assert_eq!("a8", Square::A8.algebraic());
    assert_eq!("h1", Square::H1.algebraic());
    assert_eq!("e4", Square::E4.algebraic());
    assert_eq!("c5", Square::new(26).unwrap().to_string());
  }

  #[test]
  fn test_parse() {
    assert_eq!(Square::A8, "a8".parse::<Square>().unwrap());
    assert_eq!(Square::H1, "h1".parse::<Square>().unwrap());
    assert_eq!(Square::E4, "e4".parse::<Square>().unwrap());
    assert_eq!(Square::E4, "36".parse::<Square>().unwrap());
    assert_eq!(Square::A8, "0".parse::<Square>().unwrap());
    for s in squares() {
      assert_eq!(s, s.algebraic().parse::<Square>().unwrap());
    }
  }

  #[test]
  fn test_parse_invalid() {
    for bad in &["", "i1", "a9", "a0", "e44", "64", "-1", "E4"] {
      assert_eq!(
        Err(Error::InvalidSquare(bad.to_string())),
        bad.parse::<Square>(),
        "{}",
        bad
      );
    }
  }

  #[test]
  fn test_distances() {
    assert_eq!(1, distance(Square::A7, Square::H8));
    assert_eq!(1, horizontal_distance(Square::H6, Square::G1));
    assert_eq!(2, vertical_distance(Square::H1, Square::B3));
  }

  #[test]
  fn test_valid_knight_movement() {
    assert!(valid_knight_movement(Square::A8, Square::C7));
    assert!(valid_knight_movement(Square::A8, Square::B6));
    assert!(!valid_knight_movement(Square::H8, Square::B7));
    assert!(!valid_knight_movement(Square::E4, Square::E5));
  }

  #[test]
  fn test_in_king_range() {
    assert!(in_king_range(Square::E4, Square::D5));
    assert!(in_king_range(Square::E4, Square::F3));
    assert!(!in_king_range(Square::H4, Square::A3));
    assert!(!in_king_range(Square::E4, Square::E6));
  }
}
