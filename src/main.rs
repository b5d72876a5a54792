use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bitlife::*;

/// Run Conway's Game of Life on a toroidal bitboard without a window.
#[derive(Parser)]
#[command(name = "bitlife", about = "Conway's Game of Life on a toroidal bitboard")]
struct Args {
  /// Cells per side of the square board (at least 4).
  #[arg(long, default_value_t = 32)]
  side: usize,

  /// Birth/survival rule in B/S notation.
  #[arg(long, default_value = "B3/S23")]
  rule: Rule,

  /// File used by --load and --save.
  #[arg(long, default_value = "savefile")]
  save_path: PathBuf,

  /// Number of frames to run.
  #[arg(long, default_value_t = 1)]
  ticks: u64,

  /// The board advances on every Nth frame.
  #[arg(long, default_value_t = 1)]
  ticks_per_generation: u64,

  /// Generations per advance; anything but a nonnegative integer means 1.
  #[arg(long, default_value = "1")]
  generations: String,

  /// Start from a random board.
  #[arg(long)]
  random: bool,

  /// Seed for --random.
  #[arg(long)]
  seed: Option<u64>,

  /// Start from the board in --save-path.
  #[arg(long)]
  load: bool,

  /// Start from an RLE pattern file.
  #[arg(long)]
  rle: Option<PathBuf>,

  /// Write the final board to --save-path.
  #[arg(long)]
  save: bool,

  /// How to print the final board.
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  Text,
  Rle,
  None,
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  let config = Config {
    side: args.side,
    rule: args.rule,
    save_path: args.save_path,
    ticks_per_generation: args.ticks_per_generation,
    generations: args.generations,
  };
  let rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let mut tables = TableCache::new();
  let mut session = Session::new(config, &mut tables, rng)?;

  if let Some(path) = &args.rle {
    let src = fs::read_to_string(path)
      .with_context(|| format!("reading {}", path.display()))?;
    let pattern = rle::read(src, args.side)?;
    session.set_board(pattern.board)?;
    session.set_rule(pattern.rule);
  }
  if args.load {
    session.dispatch(Action::Load)?;
  }
  if args.random {
    session.dispatch(Action::Randomize)?;
  }

  for _ in 0..args.ticks {
    session.tick()?;
  }

  if args.save {
    session.dispatch(Action::Save)?;
  }

  match args.format {
    Format::Text => {
      println!("{}", export::debug(session.board()));
      println!(
        "generation {}, {} cells alive",
        session.generation(),
        session.board().population(),
      );
    }
    Format::Rle => print!("{}", rle::write(session.board(), session.rule())),
    Format::None => {}
  }

  Ok(())
}
