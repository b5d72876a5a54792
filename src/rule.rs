use std::fmt::{self, Display};
use std::str::FromStr;
use itertools::Itertools;
use regex::Regex;
use crate::error::*;

/// Birth/survival conditions, one bit per neighbor count (bit `n` set means
/// the condition holds with `n` live neighbors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn set_birth(&mut self, num: u8) -> Result<()> {
    debug_assert!(num < 9);
    if num == 0 {
      return Err(Error::BirthOnZero);
    }
    self.birth |= 1 << num;
    Ok(())
  }

  pub(crate) fn set_survival(&mut self, num: u8) {
    debug_assert!(num < 9);
    self.survival |= 1 << num;
  }

  /// Next state of a cell that is currently `alive` and has `population`
  /// live neighbors.
  #[inline]
  pub fn next_state(&self, alive: bool, population: u32) -> bool {
    let mask = if alive { self.survival } else { self.birth };
    population < 9 && mask >> population & 1 == 1
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B{}/S{}", counts(self.birth).join(""), counts(self.survival).join(""))
  }
}

/// Neighbor counts present in `mask`, ascending.
fn counts(mask: NeighborMask) -> impl Iterator<Item = u32> {
  (0..9).filter(move |&n| mask >> n & 1 == 1)
}

impl FromStr for Rule {
  type Err = Error;

  /// Parses `B3/S23` notation (case-insensitive).
  fn from_str(src: &str) -> Result<Self> {
    let re = Regex::new(r"^[Bb]([0-8]*)/[Ss]([0-8]*)$").expect("valid regex");
    let caps = re.captures(src.trim())
      .ok_or_else(|| Error::InvalidRule(src.to_owned()))?;

    let mut rule = Rule::new();
    for c in caps[1].bytes() {
      rule.set_birth(c - b'0')?;
    }
    for c in caps[2].bytes() {
      rule.set_survival(c - b'0');
    }
    Ok(rule)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn game_of_life_transitions() {
    let rule = GAME_OF_LIFE;
    assert!(rule.next_state(true, 2));
    assert!(rule.next_state(true, 3));
    assert!(!rule.next_state(true, 1));
    assert!(!rule.next_state(true, 4));
    assert!(rule.next_state(false, 3));
    assert!(!rule.next_state(false, 2));
    assert!(!rule.next_state(false, 0));
    assert!(!rule.next_state(false, 8));
  }

  #[test]
  fn display() {
    assert_eq!(GAME_OF_LIFE.to_string(), "B3/S23");
    assert_eq!(Rule::new().to_string(), "B/S");
    assert_eq!("B368/S012345678".parse::<Rule>().unwrap().to_string(), "B368/S012345678");
  }

  #[test]
  fn parse() {
    assert_eq!("B3/S23".parse::<Rule>().unwrap(), GAME_OF_LIFE);
    assert_eq!("b3/s23".parse::<Rule>().unwrap(), GAME_OF_LIFE);

    let highlife: Rule = "B36/S23".parse().unwrap();
    assert_eq!(highlife.to_string(), "B36/S23");
    assert!(highlife.next_state(false, 6));
  }

  #[test]
  fn parse_rejects_garbage() {
    assert!(matches!("B9/S23".parse::<Rule>(), Err(Error::InvalidRule(_))));
    assert!(matches!("23/3".parse::<Rule>(), Err(Error::InvalidRule(_))));
    assert!(matches!("B03/S23".parse::<Rule>(), Err(Error::BirthOnZero)));
  }
}
