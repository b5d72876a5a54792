//! Conway's Game of Life on a square torus, with the whole board packed into
//! one big integer.
//!
//! Each cell `(x, y)` of a `side x side` board is bit `y * side + x` of a
//! [`BitBoard`]. A [`NeighborMaskTable`] built once per side gives, for
//! every cell, the bitset of its 8 wrapped neighbors; the [`step`] module
//! uses it to advance the board while only visiting live cells and their
//! neighbors.

pub mod bits;
pub mod board;
pub mod error;
pub mod export;
pub mod mask;
pub mod rle;
pub mod rule;
pub mod session;
pub mod step;

pub use board::{BitBoard, MIN_SIDE};
pub use error::{Error, Result};
pub use mask::{build_table, NeighborMaskTable, TableCache};
pub use rule::{Rule, GAME_OF_LIFE};
pub use session::{Action, Config, Session};
pub use step::{advance, alive_next, step};

use num_bigint::BigUint;

/// Whether cell `(x, y)` is alive in a raw `side * side` bit state.
pub fn read_bit(state: &BigUint, side: usize, x: usize, y: usize) -> bool {
  state.bit((y * side + x) as u64)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn read_bit_row_major() {
    let state = BigUint::from(14336u32);
    assert!(read_bit(&state, 5, 1, 2));
    assert!(read_bit(&state, 5, 3, 2));
    assert!(!read_bit(&state, 5, 2, 1));
  }
}
