use itertools::Itertools;
use crate::board::BitBoard;

/// Packs the board into rows of bytes, `ceil(side / 8)` bytes per row, with
/// the leftmost cell of each byte in its highest bit (1-bit bitmap layout).
pub fn write_buffer(board: &BitBoard) -> Vec<Vec<u8>> {
  let side = board.side();
  let bw = side + 7 >> 3;
  let mut buffer = vec![vec![0u8; bw]; side];

  for i in board.live_cells() {
    let (x, y) = (i % side, i / side);
    buffer[y][x >> 3] |= 0x80 >> (x & 7);
  }

  buffer
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellData {
  pub x: usize,
  pub y: usize,
}

/// Calls `f` for each live cell, in index order.
pub fn write_cells(
  board: &BitBoard,
  mut f: impl FnMut(CellData),
) {
  let side = board.side();
  for i in board.live_cells() {
    f(CellData { x: i % side, y: i / side })
  }
}

/// One line per row, `#` for live cells and `.` for dead ones.
pub fn debug(board: &BitBoard) -> String {
  let side = board.side();
  (0..side)
    .map(|y| {
      (0..side)
        .map(|x| if board.read_cell(x, y) { '#' } else { '.' })
        .collect::<String>()
    })
    .join("\n")
}
