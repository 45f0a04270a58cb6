//! Defines the Grid type, representing a Sudoku grid, and SolvedGrid, the
//! fully-filled form that generation produces.

use itertools::Itertools;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use static_assertions::assert_eq_size;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use super::*;

// The byte encodings below reinterpret cells as bytes.
assert_eq_size!(Option<Num>, u8);

/// A Sudoku grid: a 9x9 array with each location holding an optional numeral
/// from 1 through 9. We model this as a map from `Loc` to `Option<Num>`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[wasm_bindgen]
pub struct Grid([Option<Num>; 81]);

#[wasm_bindgen]
impl Grid {
  /// Makes an empty Grid.
  pub fn new() -> Grid {
    Grid([None; 81])
  }

  /// Constructs a Grid from a byte array.
  #[wasm_bindgen(js_name = "newFromBytes")]
  pub fn new_from_bytes(bytes: Box<[u8]>) -> Option<Grid> {
    if bytes.len() != 81 || bytes.iter().any(|&b| b > 9) {
      None
    } else {
      unsafe {
        // Safe because we've just checked the requirements for Grid.
        let p = bytes.as_ptr() as *const [Option<Num>; 81];
        Some(Grid(*p))
      }
    }
  }

  /// Constructs a Grid from a string, or throws.
  #[wasm_bindgen(js_name = "newFromString")]
  pub fn new_from_string(s: &str) -> Result<Grid, String> {
    Grid::from_str(s)
  }

  /// Converts the grid to a Uint8Array, row-major with 0 meaning blank.
  pub fn bytes(&self) -> Box<[u8]> {
    unsafe {
      // Safe because Option<Num> is stored as a byte.
      let p = self.0.as_ptr() as *const [u8; 81];
      Box::new(*p)
    }
  }

  /// Duplicates this grid.
  pub fn clone(self) -> Grid {
    self
  }

  /// Index wrapper for wasm.
  pub fn get(&self, loc: Loc) -> Option<Num> {
    self[loc]
  }

  /// Index wrapper for wasm.
  pub fn set(&mut self, loc: Loc, num: Option<Num>) {
    self[loc] = num;
  }

  /// Returns the number of locations that have assigned numerals.
  pub fn len(&self) -> usize {
    self.0.iter().filter(|optional| optional.is_some()).count()
  }

  /// Tells whether this grid is a complete and valid Sudoku solution.
  #[wasm_bindgen(js_name = "isSolved")]
  pub fn is_solved(&self) -> bool {
    matches!(self.state(), GridState::Solved)
  }

  /// Returns the debug string (ASCII grid).
  #[wasm_bindgen(js_name = "toString")]
  pub fn to_debug_string(&self) -> String {
    format!("{:?}", self)
  }

  /// Returns the display string (81 characters).
  #[wasm_bindgen(js_name = "toFlatString")]
  pub fn to_flat_string(&self) -> String {
    format!("{}", self)
  }

  /// Converts the grid to a nested row-major array of numbers, 0 meaning
  /// blank.  This is the shape the UI exchanges with the core.
  #[wasm_bindgen(js_name = "toNestedArray")]
  pub fn to_nested_array(&self) -> JsValue {
    serde_wasm_bindgen::to_value(self).unwrap()
  }
}

impl Grid {
  /// This grid's state: solved, incomplete, or broken.
  pub fn state(&self) -> GridState {
    let mut broken = LocSet::new();
    for unit in Unit::all() {
      broken |= self.duplicates_in(unit);
    }
    if !broken.is_empty() {
      GridState::Broken(broken)
    } else if self.len() == Loc::COUNT {
      GridState::Solved
    } else {
      GridState::Incomplete
    }
  }

  /// Converts this grid to a SolvedGrid when this grid is solved.
  pub fn solved_grid(&self) -> Option<SolvedGrid> {
    match self.state() {
      // Safe because we've just checked that the grid is solved.
      GridState::Solved => Some(unsafe { SolvedGrid::new(self) }),
      _ => None,
    }
  }

  /// Finds the locations in the given unit whose numeral also appears at
  /// another of the unit's locations.
  fn duplicates_in(&self, unit: Unit) -> LocSet {
    let mut dups = LocSet::new();
    let mut first_seen: [Option<Loc>; 9] = [None; 9];
    for loc in unit.locs().iter() {
      if let Some(num) = self[loc] {
        match first_seen[num.index()] {
          Some(first) => {
            dups.insert(first);
            dups.insert(loc);
          }
          None => first_seen[num.index()] = Some(loc),
        }
      }
    }
    dups
  }
}

/// The validity state of a grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridState {
  /// Every location is filled and every unit holds all nine numerals.
  Solved,
  /// No unit holds a repeated numeral, but blank squares remain.
  Incomplete,
  /// Some unit holds a repeated numeral; the set holds the offending
  /// locations.
  Broken(LocSet),
}

impl Default for Grid {
  fn default() -> Self {
    Self::new()
  }
}

impl Index<Loc> for Grid {
  type Output = Option<Num>;

  /// Allows `Grid`s to be indexed by `Loc`s.
  fn index(&self, loc: Loc) -> &Option<Num> {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked(loc.index())
    }
  }
}

impl IndexMut<Loc> for Grid {
  fn index_mut(&mut self, loc: Loc) -> &mut Option<Num> {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked_mut(loc.index())
    }
  }
}

impl Serialize for Grid {
  /// Serializes this grid as nine rows of nine integers in 0..=9, in
  /// row-major order, 0 meaning blank.
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut rows = serializer.serialize_seq(Some(9))?;
    for row in Row::all() {
      let nums: Vec<u8> = row
        .locs()
        .iter()
        .map(|loc| self[loc].map_or(0, |num| num.get() as u8))
        .collect();
      rows.serialize_element(&nums)?;
    }
    rows.end()
  }
}

impl fmt::Display for Grid {
  /// Prints this grid in row-major order, with `.` for unassigned squares.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for optional in self.0 {
      match optional {
        Some(num) => num.get().fmt(f)?,
        None => '.'.fmt(f)?,
      }
    }
    Ok(())
  }
}

impl fmt::Debug for Grid {
  /// Prints this grid as Ascii art.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rows: Vec<String> = Row::all()
      .map(|row| {
        let cells: Vec<String> = row
          .locs()
          .iter()
          .map(|loc| match self[loc] {
            Some(num) => num.to_string(),
            None => ".".to_owned(),
          })
          .collect();
        cells.chunks(3).map(|third| third.join(" ")).join(" | ")
      })
      .collect();
    let text = rows
      .chunks(3)
      .map(|band| band.join("\n"))
      .join("\n- - - + - - - + - - -\n");
    f.write_str(&text)
  }
}

impl FromStr for Grid {
  type Err = String;

  /// Constructs a Grid from a string, which must contain exactly 81
  /// location characters, plus any number of other characters.
  ///
  /// A location character is `1` through `9`, signifying an assignment of
  /// that digit to the corresponding location, or `0` or `.`, signifying
  /// that the location is blank.
  ///
  /// This method ignores all other characters, which means that strings in
  /// both of Grid's Display and Debug forms are correctly parsed back into
  /// the original grid.
  fn from_str(s: &str) -> Result<Grid, String> {
    let mut i = 0;
    let mut grid = Grid::new();
    for c in s.chars() {
      if c.is_ascii_digit() || c == '.' {
        if i >= Loc::COUNT {
          return Err(format!("More than 81 locations in {}", s));
        }
        if c != '0' && c != '.' {
          // 0 and . are placeholders meaning a blank square.
          grid.0[i] = Num::new(c.to_digit(10).unwrap() as i8);
        }
        i += 1
      }
    }
    if i == Loc::COUNT {
      Ok(grid)
    } else {
      Err(format!("Fewer than 81 locations in {}", s))
    }
  }
}

/// A solved Sudoku grid: a 9x9 array with each location holding a numeral
/// from 1 through 9, and each row, column, and 3x3 block containing one copy of
/// every numeral.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[wasm_bindgen]
pub struct SolvedGrid([Num; 81]);

impl SolvedGrid {
  /// Makes a SolvedGrid from a Grid.
  ///
  /// # Safety
  ///
  /// Callers must ensure that the Grid's state is Solved.
  pub unsafe fn new(grid: &Grid) -> SolvedGrid {
    // Note we use the fact that Option<Num> and Num have the same single-byte
    // representation when there is actually a Num present.
    let p = grid.0.as_ptr() as *const [Num; 81];
    SolvedGrid(*p)
  }
}

#[wasm_bindgen]
impl SolvedGrid {
  /// Converts back to Grid.  This always works.
  pub fn grid(&self) -> Grid {
    unsafe {
      // Safe because Num always converts cleanly to Option<Num>.
      let p = self.0.as_ptr() as *const [Option<Num>; 81];
      Grid(*p)
    }
  }

  /// Converts to a Uint8Array.
  pub fn bytes(&self) -> Box<[u8]> {
    self.grid().bytes()
  }

  /// Index wrapper for wasm.
  pub fn get(&self, loc: Loc) -> Num {
    self[loc]
  }

  /// Converts the grid to a nested row-major array of numbers.
  #[wasm_bindgen(js_name = "toNestedArray")]
  pub fn to_nested_array(&self) -> JsValue {
    serde_wasm_bindgen::to_value(&self.grid()).unwrap()
  }
}

impl From<&SolvedGrid> for Grid {
  fn from(value: &SolvedGrid) -> Grid {
    value.grid()
  }
}

impl TryFrom<&Grid> for SolvedGrid {
  type Error = &'static str;

  fn try_from(value: &Grid) -> Result<Self, Self::Error> {
    value.solved_grid().ok_or("Grid is not solved")
  }
}

impl Index<Loc> for SolvedGrid {
  type Output = Num;

  /// Allows `SolvedGrid`s to be indexed by `Loc`s.
  fn index(&self, loc: Loc) -> &Num {
    unsafe {
      // Safe because `loc.index()` is in 0..81.
      self.0.get_unchecked(loc.index())
    }
  }
}

impl fmt::Display for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.grid(), f)
  }
}

impl fmt::Debug for SolvedGrid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.grid(), f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  #[test]
  /// Ensures that Option<Num> occupies a single byte.
  fn sized_correctly() {
    use std::mem::size_of;
    assert_eq!(size_of::<Grid>(), Loc::COUNT);
    assert_eq!(size_of::<SolvedGrid>(), Loc::COUNT);
  }

  #[test]
  fn order_and_equality() {
    let mut g1 = Grid::new();
    let mut g2 = Grid::new();
    assert_eq!(g1, g2);

    g1[L37] = Some(N6);
    g2[L37] = Some(N2);
    assert!(g2 < g1);

    g2[L11] = Some(N9);
    assert!(g2 > g1);

    g1 = g2;
    assert_eq!(g1, g2);
    assert_eq!(g2.len(), 2);
  }

  #[test]
  fn strings() {
    let s = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    let g = s.parse::<Grid>().unwrap();
    assert_eq!(s, g.to_string());
    assert_eq!(s, format!("{}", g));
    let s2 = format!("{:?}", g);
    assert_ne!(s2, s);
    assert_eq!(
      s2,
      r"
5 3 . | . 7 . | . . .
6 . . | 1 9 5 | . . .
. 9 8 | . . . | . 6 .
- - - + - - - + - - -
8 . . | . 6 . | . . 3
4 . . | 8 . 3 | . . 1
7 . . | . 2 . | . . 6
- - - + - - - + - - -
. 6 . | . . . | 2 8 .
. . . | 4 1 9 | . . 5
. . . | . 8 . | . 7 9"[1..]
    );
    // Both rendered forms parse back to the same grid.
    let g2 = s2.parse::<Grid>().unwrap();
    assert_eq!(g, g2);
  }

  #[test]
  fn bad_strings() {
    assert!("123".parse::<Grid>().is_err());
    assert!(format!("{}4", "1".repeat(81)).parse::<Grid>().is_err());
  }

  #[test]
  fn bytes_round_trip() {
    let s = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    let g = s.parse::<Grid>().unwrap();
    let bytes = g.bytes();
    assert_eq!(81, bytes.len());
    assert_eq!(Some(g), Grid::new_from_bytes(bytes));
    // Out-of-range and wrong-length byte arrays are rejected.
    assert_eq!(None, Grid::new_from_bytes(Box::new([10; 81])));
    assert_eq!(None, Grid::new_from_bytes(Box::new([1; 80])));
  }

  #[test]
  fn nested_encoding() {
    let mut g = Grid::new();
    g[L12] = Some(N5);
    g[L99] = Some(N9);
    let value = serde_json::to_value(g).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(9, rows.len());
    for row in rows {
      assert_eq!(9, row.as_array().unwrap().len());
    }
    assert_eq!(5, value[0][1]);
    assert_eq!(0, value[0][0]);
    assert_eq!(9, value[8][8]);
  }

  #[test]
  fn state() {
    // A row pair (which is also a block pair) and a column pair; the two
    // 7s share no unit and must not be flagged.
    let g = Grid::from_str(
      r"
            1 1 . | . . . | . . .
            . . . | . . . | . . .
            5 . . | . . . | . . .
            - - - + - - - + - - -
            . . . | . . . | . . .
            . . . | . 7 . | . . .
            . . . | . . . | . . .
            - - - + - - - + - - -
            . . . | . . . | . . .
            . . . | . . . | . . .
            5 . . | . . 7 | . . .",
    )
    .unwrap();
    assert_eq!(
      GridState::Broken(L11.as_set() | L12.as_set() | L31.as_set() | L91.as_set()),
      g.state()
    );
    let g = Grid::from_str(
      r"
            1 2 . | . . . | . . .
            . . . | . . . | . . .
            5 . . | . . . | . . .
            - - - + - - - + - - -
            . . . | . . . | . . .
            . . . | . 7 . | . . .
            . . . | . . . | . . .
            - - - + - - - + - - -
            . . . | . . . | . . .
            . . . | . . . | . . .
            6 . . | . . 7 | . . .",
    )
    .unwrap();
    assert_eq!(GridState::Incomplete, g.state());
    let g = Grid::from_str(
      "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
    )
    .unwrap();
    assert_eq!(GridState::Solved, g.state());
    assert!(g.is_solved());
    let solved = g.solved_grid().unwrap();
    assert_eq!(g, solved.grid());
    assert_eq!(N5, solved[L11]);
    assert_eq!(N9, solved[L99]);
    // An incomplete grid doesn't convert.
    assert!(SolvedGrid::try_from(&Grid::new()).is_err());
  }
}
