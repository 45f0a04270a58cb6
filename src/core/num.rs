//! Defines the Num type, which represents the numerals written in a Sudoku.

use crate::define_set_operators;
use core::fmt;
use itertools::Itertools;
use paste::paste;
use seq_macro::seq;
use std::num::NonZeroI8;
use wasm_bindgen::convert::{FromWasmAbi, IntoWasmAbi, OptionFromWasmAbi, OptionIntoWasmAbi};
use wasm_bindgen::describe::{inform, WasmDescribe, I8};

/// Identifies one of the 9 numerals that can occupy a location of a
/// Sudoku grid.
///
/// Backed by `NonZeroI8` so that `Option<Num>` is a single byte, which the
/// grid encodings rely on.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Num(NonZeroI8);

// Constant Num values, N1 through N9.
seq!(K in 1..=9 {
    paste! {
        pub const [<N K>]: Num = Num(unsafe {
            // Safe because K in 1..=9
            NonZeroI8::new_unchecked(K)
        });
    }
});

impl Num {
  /// How many distinct numerals there are.
  pub const COUNT: usize = 9;

  /// Makes a Num from an int, which callers must ensure is in the range
  /// 1..=9.
  ///
  /// # Safety
  ///
  /// Callers must ensure the argument is in `1..=9`.
  pub unsafe fn new_unchecked(num: i8) -> Self {
    Num(NonZeroI8::new_unchecked(num))
  }

  /// Makes an optional Num from an int, present when it's in range and
  /// absent otherwise.
  pub fn new(num: i8) -> Option<Self> {
    if num > 0 && num <= 9 {
      Some(unsafe { Self::new_unchecked(num) })
    } else {
      None
    }
  }

  /// Makes an optional Num from an index in `0..9`.
  pub fn from_index(i: usize) -> Option<Self> {
    if i < 9 {
      Some(unsafe { Self::new_unchecked(i as i8 + 1) })
    } else {
      None
    }
  }

  /// Returns the int that this Num wraps, which is in 1..=9.
  pub fn get(self) -> i8 {
    self.0.get()
  }

  /// Returns the number to use for indexing, when you need to index by
  /// `Num`s.
  pub fn index(self) -> usize {
    (self.get() - 1) as usize
  }

  /// Iterates all distinct `Num`s, 1 through 9.
  pub fn all() -> impl Iterator<Item = Self> {
    (1..=9).map(|n| unsafe { Self::new_unchecked(n) })
  }

  /// Returns a singleton set containing just this numeral.
  pub fn as_set(self) -> NumSet {
    NumSet::singleton(self)
  }
}

impl WasmDescribe for Num {
  fn describe() {
    inform(I8)
  }
}

impl FromWasmAbi for Num {
  type Abi = i32;

  unsafe fn from_abi(js: Self::Abi) -> Self {
    Self::new(js as _).unwrap()
  }
}

impl OptionFromWasmAbi for Num {
  fn is_none(abi: &Self::Abi) -> bool {
    *abi == 0
  }
}

impl IntoWasmAbi for Num {
  type Abi = i32;

  fn into_abi(self) -> Self::Abi {
    self.get() as _
  }
}

impl OptionIntoWasmAbi for Num {
  fn none() -> Self::Abi {
    0
  }
}

impl fmt::Debug for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "N{}", self.get())
  }
}

impl fmt::Display for Num {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.get())
  }
}

/// A set of `Num`s, as a 9-bit mask over the numerals.
///
/// The generator's per-group candidate sets are `NumSet`s; intersecting
/// three of them yields the choices open for a cell.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct NumSet(u16);

impl NumSet {
  const MASK: u16 = (1 << 9) - 1;

  /// Makes a new empty NumSet.
  pub const fn new() -> Self {
    NumSet(0)
  }

  /// Makes a new NumSet containing all numerals.
  pub const fn all() -> Self {
    NumSet(Self::MASK)
  }

  /// Makes a new single-valued NumSet.
  pub fn singleton(num: Num) -> Self {
    NumSet(1 << num.index())
  }

  /// How many numerals are in this set.
  pub fn len(self) -> i32 {
    self.0.count_ones() as i32
  }

  /// Tells whether this set is empty.
  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Whether the given numeral is in this set.
  pub fn contains(self, num: Num) -> bool {
    self.0 & 1 << num.index() != 0
  }

  /// Adds a numeral to the set.  Tells whether it was previously absent.
  pub fn insert(&mut self, num: Num) -> bool {
    let bit = 1 << num.index();
    let added = self.0 & bit == 0;
    self.0 |= bit;
    added
  }

  /// Removes a numeral from the set.  Tells whether it was previously
  /// present.
  pub fn remove(&mut self, num: Num) -> bool {
    let bit = 1 << num.index();
    let removed = self.0 & bit != 0;
    self.0 &= !bit;
    removed
  }

  /// The `n`th smallest numeral in this set, or None if `n` is not in
  /// `0..len()`.
  pub fn item_at(self, n: i32) -> Option<Num> {
    if n < 0 {
      return None;
    }
    self.iter().nth(n as usize)
  }

  /// Returns an iterator over this set's numerals, smallest first.
  pub fn iter(self) -> NumSetIter {
    NumSetIter(self.0)
  }
}

define_set_operators!(NumSet);

impl Default for NumSet {
  fn default() -> Self {
    Self::new()
  }
}

impl FromIterator<Num> for NumSet {
  fn from_iter<I: IntoIterator<Item = Num>>(iter: I) -> Self {
    let mut set = Self::new();
    for num in iter {
      set.insert(num);
    }
    set
  }
}

impl IntoIterator for NumSet {
  type Item = Num;
  type IntoIter = NumSetIter;

  fn into_iter(self) -> NumSetIter {
    self.iter()
  }
}

/// Iterates the numerals of a `NumSet`, smallest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NumSetIter(u16);

impl Iterator for NumSetIter {
  type Item = Num;

  fn next(&mut self) -> Option<Num> {
    if self.0 == 0 {
      return None;
    }
    let i = self.0.trailing_zeros() as usize;
    self.0 &= self.0 - 1;
    // Safe because only bits 0..9 are ever set.
    Some(unsafe { Num::new_unchecked(i as i8 + 1) })
  }
}

impl fmt::Debug for NumSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{{:?}}}", self.iter().format(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn check_eq(set: NumSet, nums: &[Num]) {
    let contents: Vec<_> = set.iter().collect();
    assert_eq!(contents[..], *nums);
  }

  #[test]
  fn basics() {
    let mut set = NumSet::new();
    assert!(set.insert(N4));
    assert!(set.insert(N8));
    assert!(set.insert(N6));
    assert!(!set.insert(N8));
    check_eq(set, &[N4, N6, N8]);
    assert_eq!(3, set.len());

    assert!(!set.remove(N5));
    assert!(set.remove(N6));
    check_eq(set, &[N4, N8]);
  }

  #[test]
  fn ops() {
    let mut set1 = N1.as_set();
    let mut set2 = N2.as_set();
    let set3 = set1 | set2;
    check_eq(set3, &[N1, N2]);
    assert_eq!(set1, set3 - set2);

    set1 |= N7.as_set();
    set2 |= N8.as_set();
    check_eq(set1 & set2, &[]);
    check_eq(!(set1 | set2), &[N3, N4, N5, N6, N9]);
  }

  #[test]
  fn items() {
    let set = NumSet::from_iter([N2, N5, N9]);
    assert_eq!(Some(N2), set.item_at(0));
    assert_eq!(Some(N5), set.item_at(1));
    assert_eq!(Some(N9), set.item_at(2));
    assert_eq!(None, set.item_at(3));
    assert_eq!(None, set.item_at(-1));
    assert_eq!("{N2, N5, N9}", format!("{:?}", set));
  }

  #[test]
  fn all_candidates() {
    let all = NumSet::all();
    assert_eq!(9, all.len());
    for num in Num::all() {
      assert!(all.contains(num));
    }
    assert!(!all.is_empty());
    assert!(NumSet::new().is_empty());
  }
}
