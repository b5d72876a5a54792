use itertools::Itertools;
use regex::Regex;
use crate::board::*;
use crate::error::*;
use crate::rule::*;

/// A board read from an RLE file, with the rule named in its header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
  pub board: BitBoard,
  pub rule: Rule,
}

/// Read a Life pattern from a RLE string onto a `side x side` board, with
/// the top left corner of the pattern at cell `(0, 0)`.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn read(src: impl AsRef<str>, side: usize) -> Result<Pattern> {
  let header_re = Regex::new(r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)(?:\s*,\s*rule\s*=\s*(\S+))?")
    .expect("valid regex");

  let mut src = src.as_ref().trim_start();
  while src.starts_with('#') {
    src = src[src.find('\n').unwrap_or(src.len())..].trim_start();
  }

  let caps = header_re.captures(src)
    .ok_or_else(|| Error::Rle("invalid header line".to_owned()))?;
  let width: usize = caps[1].parse().map_err(|_| Error::Rle("invalid width".to_owned()))?;
  let height: usize = caps[2].parse().map_err(|_| Error::Rle("invalid height".to_owned()))?;
  let rule = match caps.get(3) {
    Some(rule) => rule.as_str().parse()?,
    None => GAME_OF_LIFE,
  };

  let mut board = BitBoard::empty(side)?;
  if width > side || height > side {
    return Err(Error::PatternTooLarge { width, height, side });
  }

  src = &src[src.find('\n').unwrap_or(src.len())..];

  let mut x = 0;
  let mut y = 0;
  loop {
    src = src.trim_start();

    let b0 = match src.as_bytes().first() {
      Some(&b) => b,
      None => return Err(Error::Rle("unexpected EOF".to_owned())),
    };
    if b0 == b'!' {
      break;
    }

    let mut num = 1;
    if b0.is_ascii_digit() {
      let num_len = src.find(|c: char| !c.is_ascii_digit()).unwrap_or(src.len());
      num = src[..num_len].parse().map_err(|_| Error::Rle("invalid run count".to_owned()))?;
      src = &src[num_len..];
    }

    match src.as_bytes().first() {
      Some(b'b') => {
        x = advance_run(x, num)?;
      }
      Some(b'o') => {
        let end = advance_run(x, num)?;
        if end > side || y >= side {
          return Err(Error::PatternTooLarge { width: end, height: y.saturating_add(1), side });
        }
        for i in x..end {
          board.toggle(i, y)?;
        }
        x = end;
      }
      Some(b'$') => {
        x = 0;
        y = advance_run(y, num)?;
      }
      Some(_) => {
        let c = src.chars().next().unwrap_or_default();
        return Err(Error::Rle(format!("invalid character {:?}", c)));
      }
      None => return Err(Error::Rle("unexpected EOF".to_owned())),
    }

    src = &src[1..];
  }

  Ok(Pattern { board, rule })
}

fn advance_run(pos: usize, num: usize) -> Result<usize> {
  pos.checked_add(num)
    .ok_or_else(|| Error::Rle("run count overflow".to_owned()))
}

/// Write a board to a RLE string covering the whole board.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn write(board: &BitBoard, rule: &Rule) -> String {
  let side = board.side();
  let mut output = format!("x = {}, y = {}, rule = {}\n", side, side, rule);

  let mut num_consec_next_rows = 0;
  for y in 0..side {
    let groups = (0..side).map(|x| board.read_cell(x, y)).group_by(|&alive| alive);
    let mut runs = (&groups).into_iter()
      .map(|(alive, run)| (alive, run.count()))
      .collect_vec();

    // trailing dead cells are implied by the end of the row
    if let Some(&(false, _)) = runs.last() {
      runs.pop();
    }
    if runs.is_empty() {
      num_consec_next_rows += 1;
      continue;
    }

    if num_consec_next_rows > 0 {
      RleUnit::NextRow.write(num_consec_next_rows, &mut output);
    }
    for (alive, num) in runs {
      let unit = if alive { RleUnit::Alive } else { RleUnit::Dead };
      unit.write(num, &mut output);
    }
    num_consec_next_rows = 1;
  }

  let line_start = output.rfind('\n').map_or(0, |i| i + 1);
  if output.len() - line_start >= 70 {
    output.push('\n');
  }
  output.push('!');
  output.push('\n');
  output
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
}

impl RleUnit {
  fn write(&self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    let line_start = s.rfind('\n').map_or(0, |i| i + 1);
    if s.len() - line_start + buf.len() > 70 {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::export::debug;
  use pretty_assertions::assert_eq;

  #[test]
  fn read_glider() {
    let src = r"
#N Glider
#C comment
x = 3, y = 3, rule = B3/S23
bo$2bo$3o!
".trim();

    let pattern = read(src, 5).unwrap();
    assert_eq!(pattern.rule, GAME_OF_LIFE);
    assert_eq!(debug(&pattern.board), "\
.#...
..#..
###..
.....
.....");
  }

  #[test]
  fn read_without_rule() {
    let pattern = read("x = 3, y = 1\n3o!", 4).unwrap();
    assert_eq!(pattern.board.population(), 3);
    assert_eq!(pattern.rule, GAME_OF_LIFE);
  }

  #[test]
  fn read_other_rule() {
    let pattern = read("x = 1, y = 1, rule = B36/S23\no!", 4).unwrap();
    assert_eq!(pattern.rule.to_string(), "B36/S23");
  }

  #[test]
  fn read_huge_run_counts() {
    assert!(matches!(
      read("x = 1, y = 1\n18446744073709551615b2o!", 8),
      Err(Error::Rle(_))
    ));
    assert!(matches!(
      read("x = 1, y = 1\n2b18446744073709551615o!", 8),
      Err(Error::Rle(_))
    ));
    assert!(matches!(
      read("x = 1, y = 1\n$18446744073709551615$o!", 8),
      Err(Error::Rle(_))
    ));
    assert!(matches!(
      read("x = 1, y = 1\n18446744073709551615$o!", 8),
      Err(Error::PatternTooLarge { .. })
    ));
  }

  #[test]
  fn read_too_large() {
    assert!(matches!(
      read("x = 5, y = 1\n5o!", 4),
      Err(Error::PatternTooLarge { width: 5, height: 1, side: 4 })
    ));
    assert!(matches!(
      read("x = 1, y = 1\n5o!", 4),
      Err(Error::PatternTooLarge { .. })
    ));
  }

  #[test]
  fn read_malformed() {
    assert!(matches!(read("3o!", 4), Err(Error::Rle(_))));
    assert!(matches!(read("x = 3, y = 3\nbo$2bo", 4), Err(Error::Rle(_))));
    assert!(matches!(read("x = 3, y = 3\nbq!", 4), Err(Error::Rle(_))));
  }

  #[test]
  fn write_glider() {
    let pattern = read("x = 3, y = 3\nbo$2bo$3o!", 8).unwrap();
    assert_eq!(write(&pattern.board, &GAME_OF_LIFE), "x = 8, y = 8, rule = B3/S23\nbo$2bo$3o!\n");
  }

  #[test]
  fn write_skips_empty_rows() {
    let mut board = BitBoard::empty(6).unwrap();
    board.toggle(0, 1).unwrap();
    board.toggle(5, 4).unwrap();
    assert_eq!(write(&board, &GAME_OF_LIFE), "x = 6, y = 6, rule = B3/S23\n$o3$5bo!\n");
  }

  #[test]
  fn write_wraps_long_lines() {
    let mut board = BitBoard::empty(160).unwrap();
    for x in (0..160).step_by(2) {
      board.toggle(x, 0).unwrap();
    }
    let output = write(&board, &GAME_OF_LIFE);
    assert!(output.lines().count() > 3);
    assert!(output.lines().all(|line| line.len() <= 70));
    assert_eq!(read(&output, 160).unwrap().board, board);
  }
}
