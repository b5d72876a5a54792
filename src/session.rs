use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use log::{info, trace, warn};
use rand::Rng;
use crate::board::BitBoard;
use crate::error::*;
use crate::mask::{NeighborMaskTable, TableCache};
use crate::rule::*;

#[derive(Clone, Debug)]
pub struct Config {
  pub side: usize,
  pub rule: Rule,
  /// Where `Action::Save` and `Action::Load` put the board.
  pub save_path: PathBuf,
  /// The board advances on every `ticks_per_generation`-th tick.
  pub ticks_per_generation: u64,
  /// Initial generation count text, see `parse_generations`.
  pub generations: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      side: 32,
      rule: GAME_OF_LIFE,
      save_path: PathBuf::from("savefile"),
      ticks_per_generation: 20,
      generations: String::new(),
    }
  }
}

/// Everything a front end can ask of a running session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
  TogglePause,
  Clear,
  /// Advance once, even while paused.
  Step,
  Save,
  Load,
  Randomize,
  Toggle { x: usize, y: usize },
  /// Raw contents of the generations-per-step field.
  SetGenerations(String),
}

/// Number of generations to advance per step, from user input. Anything but
/// a nonnegative integer means 1.
pub fn parse_generations(text: &str) -> u64 {
  match text.trim().parse::<i64>() {
    Ok(n) if n >= 0 => n as u64,
    _ => {
      if !text.trim().is_empty() {
        warn!("invalid generation count {:?}, using 1", text);
      }
      1
    }
  }
}

/// A board together with its neighbor table and the state of the controls
/// around it.
pub struct Session<R> {
  board: BitBoard,
  table: Arc<NeighborMaskTable>,
  rule: Rule,
  rng: R,
  save_path: PathBuf,
  ticks_per_generation: u64,
  generations: String,
  paused: bool,
  ticks: u64,
  generation: u64,
}

impl<R: Rng> Session<R> {
  pub fn new(config: Config, tables: &mut TableCache, rng: R) -> Result<Self> {
    let table = tables.get(config.side)?;
    let board = BitBoard::empty(config.side)?;
    Ok(Self {
      board,
      table,
      rule: config.rule,
      rng,
      save_path: config.save_path,
      ticks_per_generation: config.ticks_per_generation.max(1),
      generations: config.generations,
      paused: false,
      ticks: 0,
      generation: 0,
    })
  }

  pub fn board(&self) -> &BitBoard {
    &self.board
  }

  pub fn rule(&self) -> &Rule {
    &self.rule
  }

  pub fn is_paused(&self) -> bool {
    self.paused
  }

  /// Generations advanced since the session started.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn generations_per_step(&self) -> u64 {
    parse_generations(&self.generations)
  }

  /// Replaces the board, e.g. with an imported pattern of the same side.
  pub fn set_board(&mut self, board: BitBoard) -> Result<()> {
    if board.side() != self.board.side() {
      return Err(Error::SideMismatch { board: board.side(), table: self.table.side() });
    }
    self.board = board;
    Ok(())
  }

  pub fn set_rule(&mut self, rule: Rule) {
    self.rule = rule;
  }

  pub fn dispatch(&mut self, action: Action) -> Result<()> {
    match action {
      Action::TogglePause => {
        self.paused = !self.paused;
      }
      Action::Clear => {
        self.board.clear();
      }
      Action::Step => {
        self.step()?;
      }
      Action::Save => {
        fs::write(&self.save_path, self.board.to_bytes())?;
        info!("saved board to {}", self.save_path.display());
      }
      Action::Load => {
        self.load();
      }
      Action::Randomize => {
        self.board.randomize(&mut self.rng);
        info!("randomized board, {} cells alive", self.board.population());
      }
      Action::Toggle { x, y } => {
        self.board.toggle(x, y)?;
      }
      Action::SetGenerations(text) => {
        self.generations = text;
      }
    }
    Ok(())
  }

  /// Called once per frame. The board advances on frames `n`, `2n`, ...
  /// where `n` is `ticks_per_generation`. Returns whether it advanced.
  pub fn tick(&mut self) -> Result<bool> {
    self.ticks += 1;
    let due = self.ticks % self.ticks_per_generation == 0;
    if !due || self.paused {
      return Ok(false);
    }
    trace!("tick {}", self.ticks);
    self.step()?;
    Ok(true)
  }

  fn step(&mut self) -> Result<()> {
    let num_gen = self.generations_per_step();
    self.board.advance(&self.rule, &self.table, num_gen)?;
    self.generation += num_gen;
    Ok(())
  }

  fn load(&mut self) {
    match fs::read(&self.save_path) {
      Ok(bytes) => {
        if self.board.load_bytes(&bytes) {
          info!("loaded board from {}", self.save_path.display());
        } else {
          warn!(
            "{} holds {} bytes, expected {}; clearing the board",
            self.save_path.display(), bytes.len(), self.board.byte_len(),
          );
        }
      }
      Err(err) => {
        warn!("cannot read {}: {}; clearing the board", self.save_path.display(), err);
        self.board.clear();
      }
    }
  }
}
