//! Generation stepping over a bit-packed board.
//!
//! A step first widens the set of live cells to every cell that has a live
//! neighbor (the active set), then evaluates the rule only on that set. A
//! cell outside it is dead with no live neighbors, and stays dead under any
//! rule without birth on 0, so the result equals evaluating every cell.

use num_bigint::BigUint;
use crate::bits::*;
use crate::board::BitBoard;
use crate::error::*;
use crate::mask::NeighborMaskTable;
use crate::rule::*;

/// Whether cell `index` of `state` is alive in the next generation of
/// Conway's Life.
pub fn alive_next(state: &BigUint, table: &NeighborMaskTable, index: usize) -> bool {
  alive_next_with(&GAME_OF_LIFE, state, table, index)
}

pub fn alive_next_with(
  rule: &Rule,
  state: &BigUint,
  table: &NeighborMaskTable,
  index: usize,
) -> bool {
  let population = and_count(state, &table[index]);
  rule.next_state(state.bit(index as u64), population)
}

/// Live cells plus all of their neighbors.
pub fn active_set(state: &BigUint, table: &NeighborMaskTable) -> BigUint {
  let mut active = state.clone();
  for i in set_bits(state) {
    active |= &table[i];
  }
  active
}

/// One generation of Conway's Life.
pub fn step(state: &BigUint, table: &NeighborMaskTable) -> BigUint {
  step_with(&GAME_OF_LIFE, state, table)
}

pub fn step_with(rule: &Rule, state: &BigUint, table: &NeighborMaskTable) -> BigUint {
  let active = active_set(state, table);
  let mut next = BigUint::default();
  for i in set_bits(&active) {
    if alive_next_with(rule, state, table, i) {
      next.set_bit(i as u64, true);
    }
  }
  next
}

/// One generation computed by visiting every cell of the board.
pub fn step_exhaustive(state: &BigUint, table: &NeighborMaskTable) -> BigUint {
  step_exhaustive_with(&GAME_OF_LIFE, state, table)
}

pub fn step_exhaustive_with(
  rule: &Rule,
  state: &BigUint,
  table: &NeighborMaskTable,
) -> BigUint {
  let mut next = BigUint::default();
  for i in 0..table.len() {
    if alive_next_with(rule, state, table, i) {
      next.set_bit(i as u64, true);
    }
  }
  next
}

/// Evaluates the active set on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn par_step_with(rule: &Rule, state: &BigUint, table: &NeighborMaskTable) -> BigUint {
  use rayon::prelude::*;

  let active: Vec<usize> = set_bits(&active_set(state, table)).collect();
  let born: Vec<usize> = active
    .into_par_iter()
    .filter(|&i| alive_next_with(rule, state, table, i))
    .collect();

  let mut next = BigUint::default();
  for i in born {
    next.set_bit(i as u64, true);
  }
  next
}

#[cfg(feature = "parallel")]
pub fn par_step(state: &BigUint, table: &NeighborMaskTable) -> BigUint {
  par_step_with(&GAME_OF_LIFE, state, table)
}

/// Applies `step` `num_gen` times. There is no cycle detection: every
/// generation is computed.
pub fn advance(state: &BigUint, table: &NeighborMaskTable, num_gen: u64) -> BigUint {
  advance_with(&GAME_OF_LIFE, state, table, num_gen)
}

pub fn advance_with(
  rule: &Rule,
  state: &BigUint,
  table: &NeighborMaskTable,
  num_gen: u64,
) -> BigUint {
  let mut state = state.clone();
  for _ in 0..num_gen {
    state = step_with(rule, &state, table);
  }
  state
}

impl BitBoard {
  /// Advances the board in place by `num_gen` generations of `rule`.
  pub fn advance(&mut self, rule: &Rule, table: &NeighborMaskTable, num_gen: u64) -> Result<()> {
    if table.side() != self.side() {
      return Err(Error::SideMismatch { board: self.side(), table: table.side() });
    }
    if num_gen > 0 {
      let next = advance_with(rule, self.state(), table, num_gen);
      self.replace(next);
    }
    Ok(())
  }
}
