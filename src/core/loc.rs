//! Defines the Loc type, which identifies the locations (or squares or cells)
//! of a Sudoku grid, and the peer relation between locations.

use super::units::*;
use crate::define_id_types;
use crate::define_set_operators;
use itertools::Itertools;
use once_cell::sync::Lazy;
use paste::paste;
use seq_macro::seq;
use std::fmt;
use wasm_bindgen::convert::{FromWasmAbi, IntoWasmAbi, OptionFromWasmAbi, OptionIntoWasmAbi};
use wasm_bindgen::describe::{inform, WasmDescribe, I8};
use wasm_bindgen::prelude::wasm_bindgen;

define_id_types! {
    /// Identifies one of the 81 locations in a Sudoku grid.
    ///
    /// Sudokus are represented as length-81 arrays in row-major order.
    /// `Loc(0)` is the top left square of the grid, and `Loc(80)` is the
    /// bottom right.
    Loc: i8[81];
}

// Constant Loc values, L11 through L99.
seq!(R in 1..=9 {
    seq!(C in 1..=9 {
        paste! {
            #[allow(clippy::identity_op, clippy::erasing_op, clippy::eq_op)]
            pub const [<L R C>]: Loc = Loc((R - 1) * 9 + (C - 1));
        }
    });
});

impl Loc {
  /// Converts from row/col to Loc.
  pub const fn at(row: Row, col: Col) -> Loc {
    Loc(row.get() * 9 + col.get())
  }

  /// This location's row.
  pub const fn row(self) -> Row {
    // Safe because Loc ids are in 0..81.
    unsafe { Row::new_unchecked(self.0 / 9) }
  }

  /// This location's column.
  pub const fn col(self) -> Col {
    // Safe because Loc ids are in 0..81.
    unsafe { Col::new_unchecked(self.0 % 9) }
  }

  /// This location's block.
  pub const fn blk(self) -> Blk {
    Blk::containing(self.row(), self.col())
  }

  /// This location's peer locations, meaning the locations that share this
  /// location's row, column, or block.
  pub fn peers(self) -> LocSet {
    PEERS[self.index()]
  }

  /// Calculates this location's peer set.
  fn calc_peers(self) -> LocSet {
    (self.row().locs() | self.col().locs() | self.blk().locs()) - self.as_set()
  }

  /// Returns a singleton set containing just this location.
  pub fn as_set(self) -> LocSet {
    LocSet::singleton(self)
  }
}

/// Tells whether two locations see each other, meaning they share a row,
/// a column, or a block.  A location is its own peer in this sense.
///
/// An absent location stands for the UI's "no selection" and is peer to
/// nothing.
#[wasm_bindgen(js_name = "isPeer")]
pub fn is_peer(a: Option<Loc>, b: Option<Loc>) -> bool {
  match (a, b) {
    (Some(a), Some(b)) => a == b || a.peers().contains(b),
    _ => false,
  }
}

/// Memoizes all locations' peer locations.
static PEERS: Lazy<[LocSet; 81]> = Lazy::new(|| {
  std::array::from_fn(|i| {
    // Safe because `from_fn` ranges over 0..81.
    unsafe { Loc::new_unchecked(i as i8) }.calc_peers()
  })
});

impl fmt::Display for Loc {
  /// Prints this location as (r, c), where r and c are the ordinal numbers of
  /// the location's row and column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row().ordinal(), self.col().ordinal())
  }
}

impl fmt::Debug for Loc {
  /// Prints this location as Lrc, where r and c are the ordinal numbers of
  /// the location's row and column.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "L{}{}", self.row().ordinal(), self.col().ordinal())
  }
}

impl WasmDescribe for Loc {
  fn describe() {
    inform(I8)
  }
}

impl FromWasmAbi for Loc {
  type Abi = i32;

  unsafe fn from_abi(js: Self::Abi) -> Self {
    Self::new(js as i8).unwrap()
  }
}

impl OptionFromWasmAbi for Loc {
  fn is_none(abi: &Self::Abi) -> bool {
    *abi < 0
  }
}

impl IntoWasmAbi for Loc {
  type Abi = i32;

  fn into_abi(self) -> Self::Abi {
    self.0 as i32
  }
}

impl OptionIntoWasmAbi for Loc {
  fn none() -> Self::Abi {
    -1
  }
}

/// A set of `Loc`s, as an 81-bit mask in row-major order.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct LocSet(u128);

impl LocSet {
  const MASK: u128 = (1 << 81) - 1;

  /// Makes a new empty LocSet.
  pub const fn new() -> Self {
    LocSet(0)
  }

  /// Makes a new LocSet containing all locations.
  pub const fn all() -> Self {
    LocSet(Self::MASK)
  }

  /// Makes a new single-valued LocSet.
  pub fn singleton(loc: Loc) -> Self {
    LocSet(1 << loc.index())
  }

  /// How many locations are in this set.
  pub fn len(self) -> i32 {
    self.0.count_ones() as i32
  }

  /// Tells whether this set is empty.
  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Whether the given location is in this set.
  pub fn contains(self, loc: Loc) -> bool {
    self.0 & 1 << loc.index() != 0
  }

  /// Adds a location to the set.  Tells whether it was previously absent.
  pub fn insert(&mut self, loc: Loc) -> bool {
    let bit = 1 << loc.index();
    let added = self.0 & bit == 0;
    self.0 |= bit;
    added
  }

  /// Removes a location from the set.  Tells whether it was previously
  /// present.
  pub fn remove(&mut self, loc: Loc) -> bool {
    let bit = 1 << loc.index();
    let removed = self.0 & bit != 0;
    self.0 &= !bit;
    removed
  }

  /// The `n`th smallest location in this set, or None if `n` is not in
  /// `0..len()`.
  pub fn item_at(self, n: i32) -> Option<Loc> {
    if n < 0 {
      return None;
    }
    self.iter().nth(n as usize)
  }

  /// Returns an iterator over this set's locations, smallest first.
  pub fn iter(self) -> LocSetIter {
    LocSetIter(self.0)
  }
}

define_set_operators!(LocSet);

impl Default for LocSet {
  fn default() -> Self {
    Self::new()
  }
}

impl FromIterator<Loc> for LocSet {
  fn from_iter<I: IntoIterator<Item = Loc>>(iter: I) -> Self {
    let mut set = Self::new();
    for loc in iter {
      set.insert(loc);
    }
    set
  }
}

impl IntoIterator for LocSet {
  type Item = Loc;
  type IntoIter = LocSetIter;

  fn into_iter(self) -> LocSetIter {
    self.iter()
  }
}

/// Iterates the locations of a `LocSet`, smallest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LocSetIter(u128);

impl Iterator for LocSetIter {
  type Item = Loc;

  fn next(&mut self) -> Option<Loc> {
    if self.0 == 0 {
      return None;
    }
    let i = self.0.trailing_zeros() as i8;
    self.0 &= self.0 - 1;
    // Safe because only bits 0..81 are ever set.
    Some(unsafe { Loc::new_unchecked(i) })
  }
}

impl fmt::Debug for LocSet {
  /// Prints this set as a list of locations.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "LocSet({:?})", self.iter().format(", "))
  }
}
