use num_bigint::{BigUint, U64Digits};

/// Iterates the indices of the set bits of a `BigUint`, lowest first.
///
/// Each step isolates the lowest set bit of the current 64-bit word, reads
/// its index from the trailing-zero count and clears it, so the cost is
/// proportional to the number of set bits plus the number of words.
pub struct SetBits<'a> {
  digits: U64Digits<'a>,
  base: u64,
  word: u64,
}

impl<'a> SetBits<'a> {
  pub fn new(value: &'a BigUint) -> Self {
    let mut digits = value.iter_u64_digits();
    let word = digits.next().unwrap_or(0);
    Self { digits, base: 0, word }
  }
}

impl Iterator for SetBits<'_> {
  type Item = usize;

  fn next(&mut self) -> Option<usize> {
    while self.word == 0 {
      self.word = self.digits.next()?;
      self.base += 64;
    }

    let index = self.base + self.word.trailing_zeros() as u64;
    self.word &= self.word - 1;
    Some(index as usize)
  }
}

pub fn set_bits(value: &BigUint) -> SetBits<'_> {
  SetBits::new(value)
}

/// `popcount(a & b)` without materializing the intersection.
#[inline]
pub fn and_count(a: &BigUint, b: &BigUint) -> u32 {
  a.iter_u64_digits()
    .zip(b.iter_u64_digits())
    .map(|(x, y)| (x & y).count_ones())
    .sum()
}

/// `2^bits - 1`.
pub fn low_mask(bits: usize) -> BigUint {
  (BigUint::from(1u8) << bits) - 1u8
}

/// Shifts left for positive `places`, right for negative ones.
pub(crate) fn shift(value: BigUint, places: isize) -> BigUint {
  if places < 0 {
    value >> (-places) as usize
  } else {
    value << places as usize
  }
}
