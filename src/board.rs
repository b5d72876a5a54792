use num_bigint::{BigUint, RandBigInt};
use rand::Rng;
use crate::bits::*;
use crate::error::*;

/// Smallest supported side length. The neighbor masks of smaller boards
/// overlap with themselves.
pub const MIN_SIDE: usize = 4;

/// A square toroidal board stored as one `side * side` bit integer.
///
/// # Bit-cell correspondence
///
/// ```ignored
/// [0]           [1]           ... [side - 1]
/// [side]        [side + 1]    ... [2 * side - 1]
/// ...
/// [side * (side - 1)]         ... [side * side - 1]
/// ```
///
/// I.e. cell `(x, y)` is bit `y * side + x`, and bit value 1 means alive.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BitBoard {
  side: usize,
  state: BigUint,
}

impl BitBoard {
  /// `initial` is taken modulo `2 ^ (side * side)`.
  pub fn new(side: usize, initial: BigUint) -> Result<Self> {
    check_side(side)?;
    let state = initial & low_mask(side * side);
    Ok(Self { side, state })
  }

  pub fn empty(side: usize) -> Result<Self> {
    Self::new(side, BigUint::default())
  }

  /// Uniformly random state in `[0, 2 ^ (side * side))`.
  pub fn random<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Result<Self> {
    check_side(side)?;
    let state = rng.gen_biguint((side * side) as u64);
    Ok(Self { side, state })
  }

  pub fn side(&self) -> usize {
    self.side
  }

  /// Number of cells, `side * side`.
  pub fn area(&self) -> usize {
    self.side * self.side
  }

  pub fn state(&self) -> &BigUint {
    &self.state
  }

  pub fn into_state(self) -> BigUint {
    self.state
  }

  pub fn index(&self, x: usize, y: usize) -> usize {
    y * self.side + x
  }

  pub fn read_cell(&self, x: usize, y: usize) -> bool {
    debug_assert!(x < self.side && y < self.side);
    self.state.bit(self.index(x, y) as u64)
  }

  pub fn toggle(&mut self, x: usize, y: usize) -> Result<()> {
    if x >= self.side || y >= self.side {
      return Err(Error::OutOfBounds { x, y, side: self.side });
    }
    self.toggle_index(self.index(x, y));
    Ok(())
  }

  /// Flips exactly one bit. `index` must be below `side * side`.
  pub fn toggle_index(&mut self, index: usize) {
    debug_assert!(index < self.area());
    let alive = self.state.bit(index as u64);
    self.state.set_bit(index as u64, !alive);
  }

  /// Overwrites the whole board, ignoring bits beyond `side * side`.
  pub fn replace(&mut self, state: BigUint) {
    self.state = state & low_mask(self.area());
  }

  pub fn clear(&mut self) {
    self.state = BigUint::default();
  }

  pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    self.state = rng.gen_biguint(self.area() as u64);
  }

  pub fn is_empty(&self) -> bool {
    self.state.bits() == 0
  }

  /// Number of live cells.
  pub fn population(&self) -> u64 {
    self.state.count_ones()
  }

  /// Indices of the live cells in ascending order.
  pub fn live_cells(&self) -> SetBits<'_> {
    set_bits(&self.state)
  }

  /// Number of bytes in the serialized form, `ceil(side * side / 8)`.
  pub fn byte_len(&self) -> usize {
    byte_len(self.side)
  }

  /// Little-endian bytes of the state, always exactly `byte_len()` long.
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut bytes = self.state.to_bytes_le();
    bytes.resize(self.byte_len(), 0);
    bytes
  }

  /// Inverse of `to_bytes`. Returns `None` if `bytes` has the wrong length.
  pub fn from_bytes(side: usize, bytes: &[u8]) -> Result<Option<Self>> {
    check_side(side)?;
    if bytes.len() != byte_len(side) {
      return Ok(None);
    }
    Self::new(side, BigUint::from_bytes_le(bytes)).map(Some)
  }

  /// Replaces the state with the decoded `bytes`, or with the empty board if
  /// `bytes` has the wrong length. Returns whether the bytes were accepted.
  pub fn load_bytes(&mut self, bytes: &[u8]) -> bool {
    if bytes.len() == self.byte_len() {
      self.replace(BigUint::from_bytes_le(bytes));
      true
    } else {
      self.clear();
      false
    }
  }
}

pub(crate) fn check_side(side: usize) -> Result<()> {
  if side < MIN_SIDE {
    Err(Error::SideTooSmall(side))
  } else {
    Ok(())
  }
}

fn byte_len(side: usize) -> usize {
  (side * side + 7) / 8
}
