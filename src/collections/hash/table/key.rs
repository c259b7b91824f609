use std::fmt::Display;

/// A key which can be stored in a [`HashTable`](super::HashTable).
///
/// Rather than hashing through [`Hash`](std::hash::Hash), each key maps itself directly onto a
/// slot of a table with a given size:
/// - strings use the sum of their characters' code points, modulo the size.
/// - integers use their own value, modulo the size. Negative integers use the Euclidean remainder,
///   so `-3` in a table of 10 slots lands in slot 7.
///
/// The slot depends on the size, so every entry has to be placed again whenever the table grows.
///
/// Keys must be [`Display`] so that a failed lookup can report the missing key.
pub trait TableKey: Eq + Display {
    /// Returns the home slot for this key in a table with `size` slots. The result is always less
    /// than `size`.
    ///
    /// # Panics
    /// May panic if `size` is 0.
    fn home_slot(&self, size: usize) -> usize;
}

impl TableKey for str {
    fn home_slot(&self, size: usize) -> usize {
        // Reducing as we go keeps the running sum below 2 * size.
        self.chars()
            .fold(0, |sum, c| (sum + (c as usize) % size) % size)
    }
}

impl TableKey for String {
    fn home_slot(&self, size: usize) -> usize {
        self.as_str().home_slot(size)
    }
}

impl<T: TableKey + ?Sized> TableKey for &T {
    fn home_slot(&self, size: usize) -> usize {
        (**self).home_slot(size)
    }
}

macro_rules! impl_table_key_for_int {
    ($($int:ty),*) => {
        $(
            impl TableKey for $int {
                fn home_slot(&self, size: usize) -> usize {
                    // Every implementing type fits in an i128, and so does any usize.
                    (*self as i128).rem_euclid(size as i128) as usize
                }
            }
        )*
    };
}

impl_table_key_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
