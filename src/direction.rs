use crate::error::Error;
use crate::square::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::str::FromStr;

/// Compass directions on the board, north being towards row 0.
///
/// Directions come in complementary pairs that share one squares sequence:
/// the even member walks the sequence forwards and the odd member walks it
/// backwards.
#[derive(
  Debug, Copy, Clone, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u8)]
pub enum Direction {
  South,
  North,
  East,
  West,
  SouthEast,
  NorthWest,
  SouthWest,
  NorthEast,
}

pub const DIRECTIONS: [Direction; 8] = [
  Direction::South,
  Direction::North,
  Direction::East,
  Direction::West,
  Direction::SouthEast,
  Direction::NorthWest,
  Direction::SouthWest,
  Direction::NorthEast,
];

/// A pair of opposite directions backed by a single squares sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, IntoPrimitive)]
#[repr(u8)]
pub enum RayFamily {
  SouthNorth,
  EastWest,
  SoutheastNorthwest,
  SouthwestNortheast,
}

pub const RAY_FAMILIES: [RayFamily; 4] = [
  RayFamily::SouthNorth,
  RayFamily::EastWest,
  RayFamily::SoutheastNorthwest,
  RayFamily::SouthwestNortheast,
];

impl RayFamily {
  /// The direction that walks the squares sequence with increment +1.
  pub fn forward(self) -> Direction {
    match self {
      RayFamily::SouthNorth => Direction::South,
      RayFamily::EastWest => Direction::East,
      RayFamily::SoutheastNorthwest => Direction::SouthEast,
      RayFamily::SouthwestNortheast => Direction::SouthWest,
    }
  }

  pub fn backward(self) -> Direction {
    self.forward().opposite()
  }

  pub fn index(self) -> usize {
    u8::from(self) as usize
  }
}

impl Direction {
  /// Step through a shared squares sequence: +1 for the forward member of a
  /// family, -1 for the backward one.
  pub fn increment(self) -> isize {
    if u8::from(self) & 1 == 1 {
      -1
    } else {
      1
    }
  }

  pub fn family(self) -> RayFamily {
    match self {
      Direction::South | Direction::North => RayFamily::SouthNorth,
      Direction::East | Direction::West => RayFamily::EastWest,
      Direction::SouthEast | Direction::NorthWest => {
        RayFamily::SoutheastNorthwest
      }
      Direction::SouthWest | Direction::NorthEast => {
        RayFamily::SouthwestNortheast
      }
    }
  }

  pub fn opposite(self) -> Direction {
    match self {
      Direction::South => Direction::North,
      Direction::North => Direction::South,
      Direction::East => Direction::West,
      Direction::West => Direction::East,
      Direction::SouthEast => Direction::NorthWest,
      Direction::NorthWest => Direction::SouthEast,
      Direction::SouthWest => Direction::NorthEast,
      Direction::NorthEast => Direction::SouthWest,
    }
  }

  pub fn is_diagonal(self) -> bool {
    !self.is_straight()
  }

  pub fn is_straight(self) -> bool {
    matches!(self.family(), RayFamily::SouthNorth | RayFamily::EastWest)
  }

  /// (∆row, ∆column) of a single step.
  pub fn delta(self) -> (i32, i32) {
    match self {
      Direction::South => (1, 0),
      Direction::North => (-1, 0),
      Direction::East => (0, 1),
      Direction::West => (0, -1),
      Direction::SouthEast => (1, 1),
      Direction::NorthWest => (-1, -1),
      Direction::SouthWest => (1, -1),
      Direction::NorthEast => (-1, 1),
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Direction::South => "South",
      Direction::North => "North",
      Direction::East => "East",
      Direction::West => "West",
      Direction::SouthEast => "Southeast",
      Direction::NorthWest => "Northwest",
      Direction::SouthWest => "Southwest",
      Direction::NorthEast => "Northeast",
    }
  }

  /// The direction of travel from `from` to `to`, or None if the two squares
  /// do not share a file, rank or diagonal.
  pub fn between(from: Square, to: Square) -> Option<Direction> {
    let d_row = to.row() - from.row();
    let d_column = to.column() - from.column();
    if d_row == 0 && d_column == 0 {
      return None;
    }
    if d_row != 0 && d_column != 0 && d_row.abs() != d_column.abs() {
      return None;
    }
    DIRECTIONS
      .iter()
      .copied()
      .find(|d| d.delta() == (d_row.signum(), d_column.signum()))
  }
}

/// Accepts full names (`southeast`), compass abbreviations (`se`) and the
/// numeric direction codes 0-7.
impl FromStr for Direction {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Ok(code) = s.parse::<u8>() {
      return Direction::try_from(code)
        .map_err(|_| Error::InvalidDirection(s.to_string()));
    }
    match s.to_ascii_lowercase().as_str() {
      "south" | "s" => Ok(Direction::South),
      "north" | "n" => Ok(Direction::North),
      "east" | "e" => Ok(Direction::East),
      "west" | "w" => Ok(Direction::West),
      "southeast" | "se" => Ok(Direction::SouthEast),
      "northwest" | "nw" => Ok(Direction::NorthWest),
      "southwest" | "sw" => Ok(Direction::SouthWest),
      "northeast" | "ne" => Ok(Direction::NorthEast),
      _ => Err(Error::InvalidDirection(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_increment() {
    assert_eq!(1, Direction::South.increment());
    assert_eq!(-1, Direction::North.increment());
    assert_eq!(1, Direction::East.increment());
    assert_eq!(-1, Direction::West.increment());
    assert_eq!(1, Direction::SouthEast.increment());
    assert_eq!(-1, Direction::NorthWest.increment());
    assert_eq!(1, Direction::SouthWest.increment());
    assert_eq!(-1, Direction::NorthEast.increment());
  }

  #[test]
  fn test_family_pairs() {
    for &family in &RAY_FAMILIES {
      assert_eq!(family, family.forward().family());
      assert_eq!(family, family.backward().family());
      assert_eq!(1, family.forward().increment());
      assert_eq!(-1, family.backward().increment());
    }
    for &d in &DIRECTIONS {
      assert_eq!(d.family().index(), (u8::from(d) >> 1) as usize, "{:?}", d);
      assert_eq!(d, d.opposite().opposite());
      let (dr, dc) = d.delta();
      assert_eq!((-dr, -dc), d.opposite().delta());
    }
  }

  #[test]
  fn test_straight_and_diagonal() {
    assert!(Direction::South.is_straight());
    assert!(Direction::West.is_straight());
    assert!(!Direction::West.is_diagonal());
    assert!(Direction::SouthEast.is_diagonal());
    assert!(Direction::NorthEast.is_diagonal());
    assert!(!Direction::NorthEast.is_straight());
  }

  #[test]
  fn test_between() {
    let s = |i: i32| Square::new(i).unwrap();
    assert_eq!(Some(Direction::North), Direction::between(s(34), s(2)));
    assert_eq!(Some(Direction::South), Direction::between(s(34), s(58)));
    assert_eq!(Some(Direction::East), Direction::between(s(41), s(47)));
    assert_eq!(Some(Direction::West), Direction::between(s(18), s(16)));
    assert_eq!(Some(Direction::SouthEast), Direction::between(s(0), s(63)));
    assert_eq!(Some(Direction::NorthWest), Direction::between(s(63), s(0)));
    assert_eq!(Some(Direction::SouthWest), Direction::between(s(7), s(56)));
    assert_eq!(Some(Direction::NorthEast), Direction::between(s(56), s(7)));
    assert_eq!(Some(Direction::NorthEast), Direction::between(s(53), s(39)));
    assert_eq!(None, Direction::between(s(0), s(0)));
    assert_eq!(None, Direction::between(s(0), s(10)));
    // 7 apart but wrapping around the edge
    assert_eq!(None, Direction::between(s(8), s(15 + 7)));
    assert_eq!(None, Direction::between(s(7), s(8)));
  }

  #[test]
  fn test_parse() {
    assert_eq!(Ok(Direction::South), "south".parse());
    assert_eq!(Ok(Direction::NorthEast), "NE".parse());
    assert_eq!(Ok(Direction::SouthWest), "SouthWest".parse());
    assert_eq!(Ok(Direction::West), "3".parse());
    assert_eq!(Ok(Direction::NorthEast), "7".parse());
    assert_eq!(
      Err(Error::InvalidDirection("8".to_string())),
      "8".parse::<Direction>()
    );
    assert_eq!(
      Err(Error::InvalidDirection("up".to_string())),
      "up".parse::<Direction>()
    );
  }
}
