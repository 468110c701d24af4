use crate::direction::*;
use crate::square::*;
use crate::tables::*;
use lazy_static::lazy_static;
use std::iter;

lazy_static! {
  pub static ref LOGISTICS: Logistics = Logistics::new();
}

/// Read-side view of the generated tables, walking them the same way the
/// engine walks the pasted copies.
pub struct Logistics {
  rays: [RayTable; 4],
  knight: LeaperTable,
  king: LeaperTable,
}

impl Default for Logistics {
  fn default() -> Self {
    Self::new()
  }
}

impl Logistics {
  pub fn new() -> Self {
    Logistics {
      rays: [
        gen_ray_table(RayFamily::SouthNorth),
        gen_ray_table(RayFamily::EastWest),
        gen_ray_table(RayFamily::SoutheastNorthwest),
        gen_ray_table(RayFamily::SouthwestNortheast),
      ],
      knight: gen_knight_map(),
      king: gen_king_map(),
    }
  }

  pub fn ray_table(&self, family: RayFamily) -> &RayTable {
    &self.rays[family.index()]
  }

  /// Squares visited from `square` (exclusive) to the board edge.
  pub fn ray(&self, direction: Direction, square: Square) -> Walk<'_> {
    let table = self.ray_table(direction.family());
    Walk::new(
      table.squares(),
      table.start(direction, square).unwrap_or(NO_RAY),
      direction.increment(),
    )
  }

  /// Every square on the line through `square`, starting at the edge
  /// behind it and walking in `direction`.
  pub fn line(
    &self,
    direction: Direction,
    square: Square,
  ) -> impl Iterator<Item = Square> + '_ {
    let edge = self.ray(direction.opposite(), square).last().unwrap_or(square);
    iter::once(edge).chain(self.ray(direction, edge))
  }

  /// The file of `square`, from the eighth rank down.
  pub fn file(&self, square: Square) -> impl Iterator<Item = Square> + '_ {
    self.line(Direction::South, square)
  }

  /// The rank of `square`, from the a-file across.
  pub fn rank(&self, square: Square) -> impl Iterator<Item = Square> + '_ {
    self.line(Direction::East, square)
  }

  pub fn knight_moves(&self, square: Square) -> Walk<'_> {
    Walk::new(self.knight.squares(), self.knight.start(square), 1)
  }

  pub fn king_moves(&self, square: Square) -> Walk<'_> {
    Walk::new(self.king.squares(), self.king.start(square), 1)
  }
}

/// Cursor over a squares sequence that stops at the first sentinel.
pub struct Walk<'a> {
  squares: &'a [u8],
  position: Option<usize>,
  increment: isize,
}

impl<'a> Walk<'a> {
  fn new(squares: &'a [u8], start: usize, increment: isize) -> Self {
    Walk { squares, position: Some(start), increment }
  }
}

impl<'a> Iterator for Walk<'a> {
  type Item = Square;

  fn next(&mut self) -> Option<Self::Item> {
    // INVALID_SQUARE is the one value that is not a Square.
    let square = Square::new(*self.squares.get(self.position?)? as i32)?;
    self.position =
      self.position.and_then(|p| p.checked_add_signed(self.increment));
    Some(square)
  }
}
