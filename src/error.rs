use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("side length {0} is below the minimum of 4")]
  SideTooSmall(usize),

  #[error("cell ({x}, {y}) is outside of a {side}x{side} board")]
  OutOfBounds {
    x: usize,
    y: usize,
    side: usize,
  },

  #[error("board has side {board} but the neighbor table was built for side {table}")]
  SideMismatch {
    board: usize,
    table: usize,
  },

  #[error("invalid rule {0:?}")]
  InvalidRule(String),

  #[error("rules with birth on 0 neighbors are not supported")]
  BirthOnZero,

  #[error("invalid RLE: {0}")]
  Rle(String),

  #[error("{width}x{height} pattern does not fit on a {side}x{side} board")]
  PatternTooLarge {
    width: usize,
    height: usize,
    side: usize,
  },

  #[error(transparent)]
  Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
