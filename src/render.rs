use crate::tables::*;
use clap::ValueEnum;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
  /// Labelled integer lists.
  List,
  /// `pub const` array declarations.
  Rust,
}

impl Generated {
  pub fn render(&self, format: Format) -> String {
    match (self, format) {
      (Generated::Ray(t), Format::List) => ray_list(t),
      (Generated::Ray(t), Format::Rust) => ray_rust(t),
      (Generated::Leaper(t), Format::List) => leaper_list(t),
      (Generated::Leaper(t), Format::Rust) => leaper_rust(t),
    }
  }
}

fn ray_list(table: &RayTable) -> String {
  let family = table.family();
  let mut out = format!("Squares (length {}):\n", table.squares().len());
  out += &format!("{:?}\n", table.squares());
  out += &format!("{} indices:\n", family.forward().label());
  out += &format!("{:?}\n", table.forward_indices());
  out += &format!("{} indices:\n", family.backward().label());
  out += &format!("{:?}\n", table.backward_indices());
  out
}

fn leaper_list(table: &LeaperTable) -> String {
  let mut out = String::from("Indices:\n");
  out += &format!("{:?}\n", table.indices());
  out += "Squares:\n";
  out += &format!("{:?}\n", table.squares());
  out += &format!("Squares Size:  {}\n", table.squares().len());
  out
}

fn const_array<T: Debug>(name: &str, ty: &str, values: &[T]) -> String {
  format!(
    "pub const {}: [{}; {}] = {:?};\n",
    name,
    ty,
    values.len(),
    values
  )
}

fn ray_rust(table: &RayTable) -> String {
  let forward = table.family().forward().label().to_uppercase();
  let backward = table.family().backward().label().to_uppercase();
  let mut out = const_array(
    &format!("{}_{}_SQUARES", forward, backward),
    "u8",
    table.squares(),
  );
  out += &const_array(
    &format!("{}_INDICES", forward),
    "usize",
    &table.forward_indices(),
  );
  out += &const_array(
    &format!("{}_INDICES", backward),
    "usize",
    &table.backward_indices(),
  );
  out
}

fn leaper_rust(table: &LeaperTable) -> String {
  let name = match table.leaper() {
    Leaper::Knight => "KNIGHT",
    Leaper::King => "KING",
  };
  let mut out =
    const_array(&format!("{}_INDICES", name), "usize", table.indices());
  out += &const_array(&format!("{}_SQUARES", name), "u8", table.squares());
  out
}
