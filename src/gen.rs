//! Generates solved Sudoku grids by randomized constrained filling.

use crate::core::*;
use crate::random::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Generates a solved grid.
///
/// Runs filling attempts until one completes; an attempt that dead-ends is
/// discarded wholesale, never repaired.  Dead ends are rare enough at this
/// grid size that the retry loop finishes quickly in practice, and the
/// caller only ever sees a complete, valid grid.
pub fn generate<R: Rng>(random: &mut R) -> SolvedGrid {
  loop {
    if let Some(solved) = attempt_fill(random) {
      return solved;
    }
  }
}

/// Makes one attempt at filling a grid, visiting locations in row-major
/// order and picking uniformly among the numerals still open for each.
///
/// Returns None when some location's row, column, and block candidates have
/// an empty intersection: the attempt has painted itself into a corner.
fn attempt_fill<R: Rng>(random: &mut R) -> Option<SolvedGrid> {
  let mut grid = Grid::new();
  // The numerals not yet placed in each row, column, and block.
  let mut rows = [NumSet::all(); 9];
  let mut cols = [NumSet::all(); 9];
  let mut blks = [NumSet::all(); 9];
  for loc in Loc::all() {
    let choices = rows[loc.row().index()] & cols[loc.col().index()] & blks[loc.blk().index()];
    if choices.is_empty() {
      return None;
    }
    // Safe because the choice index stays within the set's range.
    let num = choices.item_at(random.random_range(0..choices.len())).unwrap();
    grid[loc] = Some(num);
    rows[loc.row().index()].remove(num);
    cols[loc.col().index()].remove(num);
    blks[loc.blk().index()].remove(num);
  }
  // Safe because all 81 locations were filled from disjoint group
  // candidates, so every unit holds nine distinct numerals.
  Some(unsafe { SolvedGrid::new(&grid) })
}

/// JS entry point: generates a solved grid, deterministically when a seed
/// is supplied.
#[wasm_bindgen(js_name = "generateSolution")]
pub fn generate_solution(seed: Option<String>) -> SolvedGrid {
  let mut random = seeded_or_entropy(seed);
  generate(&mut random)
}
