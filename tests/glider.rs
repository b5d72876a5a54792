use bitlife::*;
use pretty_assertions::assert_eq;

const GLIDER: &str = "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";

fn shifted(board: &BitBoard, dx: usize, dy: usize) -> BitBoard {
  let side = board.side();
  let mut out = BitBoard::empty(side).unwrap();
  for i in board.live_cells() {
    let (x, y) = (i % side, i / side);
    out.toggle((x + dx) % side, (y + dy) % side).unwrap();
  }
  out
}

#[test]
fn glider_moves_diagonally() {
  let table = build_table(8).unwrap();
  let mut board = rle::read(GLIDER, 8).unwrap().board;
  let start = board.clone();

  board.advance(&GAME_OF_LIFE, &table, 4).unwrap();

  assert_eq!(export::debug(&board), export::debug(&shifted(&start, 1, 1)));
}

#[test]
fn glider_wraps_around_torus() {
  for &side in &[5, 8, 12] {
    let table = build_table(side).unwrap();
    let start = rle::read(GLIDER, side).unwrap().board;

    let state = advance(start.state(), &table, 4 * side as u64);

    assert_eq!(&state, start.state(), "side {}", side);
  }
}

#[test]
fn glider_crosses_corner() {
  let table = build_table(6).unwrap();
  let start = shifted(&rle::read(GLIDER, 6).unwrap().board, 4, 4);
  let mut board = start.clone();

  board.advance(&GAME_OF_LIFE, &table, 8).unwrap();

  assert_eq!(board, shifted(&start, 2, 2));
  assert_eq!(board.population(), 5);
}

#[test]
fn glider_rle_round_trip() {
  let pattern = rle::read(GLIDER, 10).unwrap();
  let written = rle::write(&pattern.board, &pattern.rule);
  assert_eq!(written, "x = 10, y = 10, rule = B3/S23\nbo$2bo$3o!\n");
  assert_eq!(rle::read(written, 10).unwrap(), pattern);
}
