use clap::{Parser, Subcommand};
use genlogistics::direction::Direction;
use genlogistics::logistics::LOGISTICS;
use genlogistics::render::Format;
use genlogistics::square::Square;
use genlogistics::tables::{Table, TABLES};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints precomputed move tables for pasting into the engine.
#[derive(Parser)]
#[command(name = "genlogistics", version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
  #[command(subcommand)]
  command: Option<Command>,

  /// Tables to print (defaults to the king table)
  #[arg(value_enum)]
  tables: Vec<Table>,

  /// Print every table
  #[arg(long, conflicts_with = "tables")]
  all: bool,

  #[arg(short, long, value_enum, default_value_t = Format::List)]
  format: Format,
}

#[derive(Subcommand)]
enum Command {
  /// Walk the generated tables from a square, e.g. `ray north e4`
  Ray {
    /// south, north, east, west, southeast, northwest, southwest, northeast
    direction: Direction,
    /// Algebraic name (a8 is 0) or index 0-63
    square: Square,
  },
}

fn main() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  match cli.command {
    Some(Command::Ray { direction, square }) => {
      info!(?direction, %square, "walking ray");
      let squares: Vec<String> = LOGISTICS
        .ray(direction, square)
        .map(|s| u8::from(s).to_string())
        .collect();
      println!("{}", squares.join(" "));
    }
    None => {
      let tables = if cli.all {
        TABLES.to_vec()
      } else if cli.tables.is_empty() {
        vec![Table::King]
      } else {
        cli.tables
      };
      for (i, table) in tables.iter().enumerate() {
        info!(?table, format = ?cli.format, "printing table");
        if i > 0 {
          println!();
        }
        print!("{}", table.generate().render(cli.format));
      }
    }
  }
}
