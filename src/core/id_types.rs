//! The `define_id_types` macro.

/// Defines types that consist of a single integer-valued ID in `0..$count`.
///
/// Each generated type gets checked and unchecked constructors, accessors
/// for the raw ID in its various guises, and an iterator over all values.
#[macro_export]
macro_rules! define_id_types {
    (
        $(
            $(#[$outer:meta])*
            $type_name:ident : $int_type:ty[$count:expr];
        )*
    ) => {
        $(
            $(#[$outer])*
            #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
            pub struct $type_name($int_type);

            impl $type_name {
                /// The number of distinct values of this type.
                pub const COUNT: usize = $count;

                /// Makes a new value from its ID, without checking the range.
                ///
                /// # Safety
                ///
                /// Callers must ensure the ID is in `0..COUNT`.
                pub const unsafe fn new_unchecked(id: $int_type) -> Self {
                    $type_name(id)
                }

                /// Makes a new value from its ID, if the ID is in range.
                pub const fn new(id: $int_type) -> Option<Self> {
                    if id >= 0 && id < $count {
                        Some($type_name(id))
                    } else {
                        None
                    }
                }

                /// Makes a new value from an array index, if it's in range.
                pub const fn from_index(i: usize) -> Option<Self> {
                    if i < $count {
                        Some($type_name(i as $int_type))
                    } else {
                        None
                    }
                }

                /// Returns this value's ID.
                pub const fn get(self) -> $int_type {
                    self.0
                }

                /// Returns this value's ordinal number, which starts at 1.
                pub const fn ordinal(self) -> $int_type {
                    self.0 + 1
                }

                /// Returns this value's ID in a form suitable for indexing.
                pub const fn index(self) -> usize {
                    self.0 as usize
                }

                /// Iterates all distinct values of this type.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$count).map(|i| unsafe {
                        // Safe because the range is 0..COUNT.
                        Self::new_unchecked(i)
                    })
                }
            }

            impl TryFrom<$int_type> for $type_name {
                type Error = &'static str;
                fn try_from(value: $int_type) -> Result<Self, Self::Error> {
                    $type_name::new(value).ok_or("Out of bounds")
                }
            }

            impl TryFrom<usize> for $type_name {
                type Error = &'static str;
                fn try_from(value: usize) -> Result<Self, Self::Error> {
                    $type_name::from_index(value).ok_or("Out of bounds")
                }
            }

            impl From<$type_name> for $int_type {
                fn from(n: $type_name) -> Self {
                    n.get()
                }
            }

            impl From<$type_name> for usize {
                fn from(n: $type_name) -> Self {
                    n.index()
                }
            }
        )*
    };
}
