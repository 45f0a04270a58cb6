//! The `define_set_operators` macro.

/// Adds the set-algebra operators to a bitset tuple struct.
///
/// The struct must wrap an unsigned integer and expose a `MASK` constant
/// covering exactly the valid bit positions; complement is taken relative
/// to that mask so invalid high bits never become set.
#[macro_export]
macro_rules! define_set_operators {
  ($type:ident) => {
    impl std::ops::BitAnd for $type {
      type Output = Self;
      fn bitand(self, rhs: Self) -> Self {
        $type(self.0 & rhs.0)
      }
    }
    impl std::ops::BitAndAssign for $type {
      fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
      }
    }
    impl std::ops::BitOr for $type {
      type Output = Self;
      fn bitor(self, rhs: Self) -> Self {
        $type(self.0 | rhs.0)
      }
    }
    impl std::ops::BitOrAssign for $type {
      fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
      }
    }
    impl std::ops::Not for $type {
      type Output = Self;
      fn not(self) -> Self {
        $type(!self.0 & Self::MASK)
      }
    }
    /// Set difference.
    impl std::ops::Sub for $type {
      type Output = Self;
      fn sub(self, rhs: Self) -> Self {
        $type(self.0 & !rhs.0)
      }
    }
    impl std::ops::SubAssign for $type {
      fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0;
      }
    }
  };
}
