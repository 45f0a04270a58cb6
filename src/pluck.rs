//! Reduces a solved grid to a playable puzzle by "plucking" cells: emptying
//! them one at a time, so long as a local heuristic says the emptied value
//! would still be implied by the cell's peer groups.
//!
//! The heuristic is deliberately a single-hop scan, not a solver.  It can
//! misjudge true logical deducibility in both directions, and the rest of
//! the system is defined in terms of its exact behavior.

use crate::core::*;
use crate::random::*;
use serde::Serialize;
use wasm_bindgen::prelude::wasm_bindgen;

/// A generated puzzle: the plucked grid plus how many cells remain filled.
///
/// The count can exceed the requested target when the heuristic runs out of
/// pluckable cells first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[wasm_bindgen]
pub struct Puzzle {
  puzzle: Grid,
  filled_count: i32,
}

#[wasm_bindgen]
impl Puzzle {
  /// The puzzle grid, with plucked cells blank.
  #[wasm_bindgen(getter)]
  pub fn puzzle(&self) -> Grid {
    self.puzzle
  }

  /// How many cells remain filled.
  #[wasm_bindgen(getter, js_name = "filledCount")]
  pub fn filled_count(&self) -> i32 {
    self.filled_count
  }
}

/// Plucks cells from the given solution until at most `target` remain
/// filled, or until no cell left standing can be plucked.
///
/// Each cell is attempted at most once, in uniformly random order.  A cell
/// survives ("is unpluckable") when every one of its three groups still has
/// another cell that could plausibly hold its value; once a cell survives
/// it is never reconsidered, since plucking only removes information.
pub fn pluck<R: Rng>(solution: &SolvedGrid, target: i32, random: &mut R) -> Puzzle {
  let mut puzzle = solution.grid();
  let mut untried = LocSet::all();
  let mut filled = LocSet::all();
  while !untried.is_empty() && filled.len() > target {
    // Safe because the pick index stays within the set's range.
    let pivot = untried.item_at(random.random_range(0..untried.len())).unwrap();
    untried.remove(pivot);
    let num = solution[pivot];
    let ambiguous = |unit_locs: LocSet| {
      (unit_locs - pivot.as_set())
        .iter()
        .any(|loc| could_hold(&puzzle, loc, pivot, num))
    };
    let row = ambiguous(pivot.row().locs());
    let col = ambiguous(pivot.col().locs());
    let blk = ambiguous(pivot.blk().locs());
    if row && col && blk {
      // No group pins the value down; the cell has to stay.
      continue;
    }
    puzzle[pivot] = None;
    filled.remove(pivot);
  }
  Puzzle {
    puzzle,
    filled_count: filled.len(),
  }
}

/// Answers whether `loc` could be carrying the numeral at `pivot`: whether,
/// looking one step out from `loc`, nothing rules `num` out there.
///
/// A filled `loc` can only be carrying the numeral it holds.  A blank `loc`
/// is ruled out exactly when some peer of it other than `pivot` already
/// shows `num`.
fn could_hold(puzzle: &Grid, loc: Loc, pivot: Loc, num: Num) -> bool {
  if loc == pivot {
    return true;
  }
  match puzzle[loc] {
    Some(held) => held == num,
    None => (loc.peers() - pivot.as_set())
      .iter()
      .all(|peer| puzzle[peer] != Some(num)),
  }
}

/// JS entry point: derives a puzzle from the given solution, aiming for
/// `target` prefilled cells, deterministically when a seed is supplied.
#[wasm_bindgen(js_name = "pluckPuzzle")]
pub fn pluck_puzzle(solution: &SolvedGrid, target: i32, seed: Option<String>) -> Puzzle {
  let mut random = seeded_or_entropy(seed);
  pluck(solution, target, &mut random)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::gen::generate;
  use std::str::FromStr;

  fn solved(seed: &str) -> SolvedGrid {
    generate(&mut new_random(seed))
  }

  #[test]
  fn target_81_returns_solution_untouched() {
    let solution = solved("untouched");
    let result = pluck(&solution, 81, &mut new_random("untouched pluck"));
    assert_eq!(81, result.filled_count());
    assert_eq!(solution.grid(), result.puzzle());
  }

  #[test]
  fn surviving_cells_match_the_solution() {
    let solution = solved("non-mutation");
    let result = pluck(&solution, 17, &mut new_random("non-mutation pluck"));
    assert!(result.filled_count() >= 17);
    let mut filled = 0;
    for loc in Loc::all() {
      if let Some(num) = result.puzzle()[loc] {
        assert_eq!(solution[loc], num);
        filled += 1;
      }
    }
    assert_eq!(result.filled_count(), filled);
  }

  #[test]
  fn filled_count_tracks_the_grid() {
    for i in 0..10 {
      let solution = solved(&format!("count {}", i));
      let result = pluck(&solution, 20, &mut new_random(&format!("count pluck {}", i)));
      assert_eq!(result.puzzle().len(), result.filled_count() as usize);
      assert!(result.filled_count() >= 20);
      assert!(result.filled_count() <= 81);
    }
  }

  #[test]
  fn maximal_removal_still_leaves_a_consistent_grid() {
    // A target of 0 plucks as far as the heuristic allows; whatever
    // survives must still be a subset of the solution with no broken units.
    let solution = solved("maximal");
    let result = pluck(&solution, 0, &mut new_random("maximal pluck"));
    assert!(result.filled_count() >= 0);
    assert!(result.filled_count() < 81);
    if let GridState::Broken(locs) = result.puzzle().state() {
      panic!("broken at {:?}", locs);
    }
  }

  #[test]
  fn plucking_is_reproducible() {
    let solution = solved("reproducible");
    let p1 = pluck(&solution, 25, &mut new_random("reproducible pluck"));
    let p2 = pluck(&solution, 25, &mut new_random("reproducible pluck"));
    assert_eq!(p1, p2);
  }

  #[test]
  fn oracle_contract() {
    let grid = Grid::from_str(
      "123456789456789123789123456234567891567891234891234567345678912678912345912345678",
    )
    .unwrap();
    let pivot = L11; // holds 1
    let num = N1;
    // The pivot itself always qualifies.
    assert!(could_hold(&grid, pivot, pivot, num));
    // A cell filled with a different numeral cannot hold the value.
    assert!(!could_hold(&grid, L12, pivot, num));
    // A blank cell whose peers include the value elsewhere is ruled out.
    let mut plucked = grid;
    plucked[L12] = None;
    assert!(!could_hold(&plucked, L12, pivot, num)); // L92 holds 1 in column 2
    // A blank cell with no conflicting peer (besides the pivot) qualifies.
    let mut open = grid;
    for loc in Loc::all() {
      if loc != pivot {
        open[loc] = None;
      }
    }
    assert!(could_hold(&open, L12, pivot, num));
  }
}
