//! Generators for the flat move tables consumed by the engine.
//!
//! Every table is a squares sequence plus per-square start positions into
//! it. Runs inside a sequence are bracketed by `INVALID_SQUARE`, so a
//! consumer walks from its start position until it reads a sentinel.

use crate::direction::*;
use crate::square::*;
use clap::ValueEnum;
use tracing::debug;

pub const KNIGHT_OFFSETS: [i32; 8] = [-17, -10, 6, 15, -15, -6, 10, 17];
pub const KING_OFFSETS: [i32; 8] = [-9, -1, 7, -7, 1, 9, -8, 8];

/// Order in which a generator emitted the squares of its sequence.
///
/// Index tables are always keyed by row-major square. Only the vertical
/// table lists its squares file by file, and consumers rely on that layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
  RowMajor,
  ColumnMajor,
}

/// Positions of a square's neighbours within a ray table's squares
/// sequence: `forward` for the next square in the family's forward
/// direction, `backward` for the previous one. Either may be `NO_RAY` or
/// address a sentinel, both of which read as an empty ray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayLink {
  pub forward: usize,
  pub backward: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RayTable {
  family: RayFamily,
  addressing: Addressing,
  squares: Vec<u8>,
  links: [RayLink; NUM_SQUARES as usize],
}

impl RayTable {
  fn new(family: RayFamily, addressing: Addressing) -> Self {
    RayTable {
      family,
      addressing,
      squares: vec![INVALID_SQUARE],
      links: [RayLink::default(); NUM_SQUARES as usize],
    }
  }

  pub fn family(&self) -> RayFamily {
    self.family
  }

  pub fn addressing(&self) -> Addressing {
    self.addressing
  }

  pub fn squares(&self) -> &[u8] {
    &self.squares
  }

  pub fn link(&self, square: Square) -> RayLink {
    self.links[square.index()]
  }

  pub fn forward_indices(&self) -> Vec<usize> {
    self.links.iter().map(|l| l.forward).collect()
  }

  pub fn backward_indices(&self) -> Vec<usize> {
    self.links.iter().map(|l| l.backward).collect()
  }

  /// Position in the squares sequence to start walking from when looking
  /// in `direction` from `square`. `None` if `direction` does not belong
  /// to this table's family.
  pub fn start(&self, direction: Direction, square: Square) -> Option<usize> {
    let link = self.link(square);
    if direction == self.family.forward() {
      Some(link.forward)
    } else if direction == self.family.backward() {
      Some(link.backward)
    } else {
      None
    }
  }

  fn end_run(&mut self) {
    self.squares.push(INVALID_SQUARE);
  }

  /// Appends a square and returns its position in the sequence.
  fn push(&mut self, square: i32) -> usize {
    debug_assert!(fits_on_board(square));
    self.squares.push(square as u8);
    self.squares.len() - 1
  }
}

pub fn gen_south_north() -> RayTable {
  let mut table = RayTable::new(RayFamily::SouthNorth, Addressing::ColumnMajor);
  for column in 0..BOARD_WIDTH {
    for row in 0..BOARD_WIDTH {
      let square = column + BOARD_WIDTH * row;
      table.push(square);
      // The entry belongs to the column-major address of the visited square.
      let slot = (column * BOARD_WIDTH + row) as usize;
      let north = (square + row) as usize;
      table.links[slot] = RayLink { forward: north + 2, backward: north };
    }
    table.end_run();
  }
  debug!(len = table.squares.len(), "generated south/north table");
  table
}

pub fn gen_east_west() -> RayTable {
  let mut table = RayTable::new(RayFamily::EastWest, Addressing::RowMajor);
  for row in 0..BOARD_WIDTH {
    for column in 0..BOARD_WIDTH {
      let square = row * BOARD_WIDTH + column;
      table.push(square);
      let west = (square + row) as usize;
      table.links[square as usize] =
        RayLink { forward: west + 2, backward: west };
    }
    table.end_run();
  }
  debug!(len = table.squares.len(), "generated east/west table");
  table
}

pub fn gen_southeast_northwest() -> RayTable {
  let table = gen_diagonal(RayFamily::SoutheastNorthwest, 9, 0);
  debug!(len = table.squares.len(), "generated southeast/northwest table");
  table
}

pub fn gen_southwest_northeast() -> RayTable {
  let table = gen_diagonal(RayFamily::SouthwestNortheast, 7, BOARD_WIDTH - 1);
  debug!(len = table.squares.len(), "generated southwest/northeast table");
  table
}

/// Walks one diagonal family. `step` moves one square along the forward
/// direction and `edge` is the column a step lands on when it wraps off the
/// board sideways; the second batch of runs is seeded down that column.
fn gen_diagonal(family: RayFamily, step: i32, edge: i32) -> RayTable {
  let mut table = RayTable::new(family, Addressing::RowMajor);

  // Runs seeded along the top row stop at the first wrapped step.
  for column in 0..BOARD_WIDTH {
    let mut square = column;
    table.links[column as usize].backward = table.squares.len() - 1;
    loop {
      let position = table.push(square);
      if fits_on_board(square - step) {
        table.links[square as usize].backward = position - 1;
      }
      square += step;
      if square % BOARD_WIDTH == edge {
        break;
      }
      table.links[(square - step) as usize].forward = position + 1;
    }
    table.links[(square - step) as usize].forward = NO_RAY;
    table.end_run();
  }

  // Runs seeded down the edge column stop at the bottom of the board.
  // Top-row slots are reseeded here and so only ever address sentinels.
  for row in 0..BOARD_WIDTH - 1 {
    let mut square = (row + 1) * BOARD_WIDTH + edge;
    table.links[row as usize].backward = table.squares.len() - 1;
    while fits_on_board(square) {
      let position = table.push(square);
      if fits_on_board(square - step) {
        table.links[square as usize].backward = position - 1;
      }
      square += step;
      table.links[(square - step) as usize].forward =
        if fits_on_board(square) { position + 1 } else { NO_RAY };
    }
    table.end_run();
  }

  table
}

pub fn gen_ray_table(family: RayFamily) -> RayTable {
  match family {
    RayFamily::SouthNorth => gen_south_north(),
    RayFamily::EastWest => gen_east_west(),
    RayFamily::SoutheastNorthwest => gen_southeast_northwest(),
    RayFamily::SouthwestNortheast => gen_southwest_northeast(),
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaper {
  Knight,
  King,
}

impl Leaper {
  pub fn offsets(self) -> &'static [i32; 8] {
    match self {
      Leaper::Knight => &KNIGHT_OFFSETS,
      Leaper::King => &KING_OFFSETS,
    }
  }

  /// Largest column change a legal jump can make.
  pub fn tolerance(self) -> i32 {
    match self {
      Leaper::Knight => 2,
      Leaper::King => 1,
    }
  }
}

/// Destination lists for a piece that jumps by fixed offsets. Each square's
/// list starts at `indices[square]` and ends with a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaperTable {
  leaper: Leaper,
  indices: [usize; NUM_SQUARES as usize],
  squares: Vec<u8>,
}

impl LeaperTable {
  pub fn leaper(&self) -> Leaper {
    self.leaper
  }

  pub fn indices(&self) -> &[usize] {
    &self.indices
  }

  pub fn squares(&self) -> &[u8] {
    &self.squares
  }

  pub fn start(&self, square: Square) -> usize {
    self.indices[square.index()]
  }
}

pub fn gen_leaper_table(leaper: Leaper) -> LeaperTable {
  let mut indices = [0; NUM_SQUARES as usize];
  let mut squares = Vec::new();
  for from in 0..NUM_SQUARES {
    indices[from as usize] = squares.len();
    for &offset in leaper.offsets() {
      let to = from + offset;
      if within_tolerance(from, to, leaper.tolerance()) {
        squares.push(to as u8);
      }
    }
    squares.push(INVALID_SQUARE);
  }
  debug!(?leaper, len = squares.len(), "generated leaper table");
  LeaperTable { leaper, indices, squares }
}

pub fn gen_knight_map() -> LeaperTable {
  gen_leaper_table(Leaper::Knight)
}

pub fn gen_king_map() -> LeaperTable {
  gen_leaper_table(Leaper::King)
}

/// Tables that can be printed, in the order `--all` prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Table {
  SouthNorth,
  EastWest,
  SoutheastNorthwest,
  SouthwestNortheast,
  Knight,
  King,
}

pub const TABLES: [Table; 6] = [
  Table::SouthNorth,
  Table::EastWest,
  Table::SoutheastNorthwest,
  Table::SouthwestNortheast,
  Table::Knight,
  Table::King,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
  Ray(RayTable),
  Leaper(LeaperTable),
}

impl Table {
  pub fn generate(self) -> Generated {
    match self {
      Table::SouthNorth => Generated::Ray(gen_south_north()),
      Table::EastWest => Generated::Ray(gen_east_west()),
      Table::SoutheastNorthwest => Generated::Ray(gen_southeast_northwest()),
      Table::SouthwestNortheast => Generated::Ray(gen_southwest_northeast()),
      Table::Knight => Generated::Leaper(gen_knight_map()),
      Table::King => Generated::Leaper(gen_king_map()),
    }
  }
}
