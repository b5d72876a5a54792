use std::hash::BuildHasherDefault;
use std::ops::Index;
use std::slice;
use std::sync::Arc;
use indexmap::IndexMap;
use log::debug;
use num_bigint::BigUint;
use rustc_hash::FxHasher;
use crate::bits::*;
use crate::board::check_side;
use crate::error::*;

/// Row patterns of the 3x3 window around a cell, one `u8` per row from the
/// row above to the row below. Bit 0 is column `x - 1`, bit 2 is `x + 1`.
type Rows = [u8; 3];

const DEFAULT_ROWS: Rows = [0b111, 0b101, 0b111];
const LEFT_COLUMN: u8 = 0b001;
const RIGHT_COLUMN: u8 = 0b100;
const FULL_ROW: u8 = 0b111;

/// For every cell index `i` of a `side x side` torus, the bitset of the 8
/// cells adjacent to `i` (wrapping around all four edges).
///
/// A table holds `side ^ 4` bits in total, so it is built once per side and
/// shared, see [`TableCache`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NeighborMaskTable {
  side: usize,
  masks: Vec<BigUint>,
}

impl NeighborMaskTable {
  pub fn new(side: usize) -> Result<Self> {
    check_side(side)?;

    let builder = MaskBuilder::new(side);
    let mut masks = Vec::with_capacity(side * side);
    for y in 0..side {
      for x in 0..side {
        masks.push(builder.mask(x, y));
      }
    }

    debug!("built neighbor mask table for side {}", side);
    Ok(Self { side, masks })
  }

  pub fn side(&self) -> usize {
    self.side
  }

  pub fn len(&self) -> usize {
    self.masks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.masks.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&BigUint> {
    self.masks.get(index)
  }

  pub fn iter(&self) -> slice::Iter<'_, BigUint> {
    self.masks.iter()
  }
}

impl Index<usize> for NeighborMaskTable {
  type Output = BigUint;

  fn index(&self, index: usize) -> &BigUint {
    &self.masks[index]
  }
}

pub fn build_table(side: usize) -> Result<NeighborMaskTable> {
  NeighborMaskTable::new(side)
}

struct MaskBuilder {
  side: usize,
  /// Left column of a window: cells `(0, 0)`, `(0, 1)` and `(0, 2)`.
  column: BigUint,
  top_left: BigUint,
  top_right: BigUint,
  bottom_left: BigUint,
  bottom_right: BigUint,
}

impl MaskBuilder {
  fn new(side: usize) -> Self {
    let n = side * side;
    let bits = |value: u8, at: usize| BigUint::from(value) << at;

    let column = bits(1, 0) | bits(1, side) | bits(1, 2 * side);

    // The corners wrap horizontally and vertically at once, and the
    // diagonal neighbor sits in the opposite corner.
    let top_left = bits(0b10, 0) | bits(0b11, side)
      | bits(1, side - 1) | bits(1, 2 * side - 1)
      | bits(0b11, n - side)
      | bits(1, n - 1);
    let top_right = bits(1, side - 2) | bits(0b11, 2 * side - 2)
      | bits(1, 0) | bits(1, side)
      | bits(0b11, n - 2)
      | bits(1, n - side);
    let bottom_left = bits(0b11, n - 2 * side) | bits(1, n - side + 1)
      | bits(1, n - side - 1) | bits(1, n - 1)
      | bits(0b11, 0)
      | bits(1, side - 1);
    let bottom_right = bits(0b11, n - side - 2) | bits(1, n - 2)
      | bits(1, n - 2 * side) | bits(1, n - side)
      | bits(0b11, side - 2)
      | bits(1, 0);

    Self { side, column, top_left, top_right, bottom_left, bottom_right }
  }

  fn window(&self, rows: Rows) -> BigUint {
    rows.iter()
      .enumerate()
      .fold(BigUint::default(), |acc, (r, &row)| {
        acc | BigUint::from(row) << (r * self.side)
      })
  }

  /// Places a window whose center is `(1, 1)` onto `(x, y)`.
  fn slide(&self, rows: Rows, x: usize, y: usize) -> BigUint {
    let offset = (x as isize - 1) + (y as isize - 1) * self.side as isize;
    shift(self.window(rows), offset)
  }

  fn mask(&self, x: usize, y: usize) -> BigUint {
    let last = self.side - 1;
    let wrap_row = |at: usize| BigUint::from(FULL_ROW) << at;

    match (x, y) {
      (0, 0) => self.top_left.clone(),
      (x, 0) if x == last => self.top_right.clone(),
      (0, y) if y == last => self.bottom_left.clone(),
      (x, y) if x == last && y == last => self.bottom_right.clone(),
      (0, y) => {
        let rows = DEFAULT_ROWS.map(|row| row & !LEFT_COLUMN);
        self.slide(rows, x, y) | &self.column << (y * self.side - 1)
      }
      (x, y) if x == last => {
        let rows = DEFAULT_ROWS.map(|row| row & !RIGHT_COLUMN);
        self.slide(rows, x, y) | &self.column << ((y - 1) * self.side)
      }
      (x, 0) => {
        let rows = [0, DEFAULT_ROWS[1], DEFAULT_ROWS[2]];
        self.slide(rows, x, y) | wrap_row(self.side * last + x - 1)
      }
      (x, y) if y == last => {
        let rows = [DEFAULT_ROWS[0], DEFAULT_ROWS[1], 0];
        self.slide(rows, x, y) | wrap_row(x - 1)
      }
      (x, y) => self.slide(DEFAULT_ROWS, x, y),
    }
  }
}

/// Neighbor tables keyed by side, each built on first use.
#[derive(Default)]
pub struct TableCache {
  tables: IndexMap<usize, Arc<NeighborMaskTable>, BuildHasherDefault<FxHasher>>,
}

impl TableCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&mut self, side: usize) -> Result<Arc<NeighborMaskTable>> {
    if let Some(table) = self.tables.get(&side) {
      debug!("reusing neighbor mask table for side {}", side);
      return Ok(Arc::clone(table));
    }

    let table = Arc::new(NeighborMaskTable::new(side)?);
    self.tables.insert(side, Arc::clone(&table));
    Ok(table)
  }

  pub fn len(&self) -> usize {
    self.tables.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tables.is_empty()
  }

  /// Sides in the order their tables were built.
  pub fn sides(&self) -> impl Iterator<Item = usize> + '_ {
    self.tables.keys().copied()
  }
}
