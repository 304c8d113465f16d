//! Trait implementations for [`Word`] and the crate's error type.

use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

use crate::Word;

/// Error returned when an element does not fit in a bit-set's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// The element that was rejected
    pub element: usize,
    /// The capacity of the bit-set at the time
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element {} does not fit in a bit-set with capacity {}",
            self.element, self.capacity
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}

impl From<u64> for Word {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Word> for u64 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl BitAnd for Word {
    type Output = Self;

    /// Same as [`Word::intersection`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::Word;
    ///
    /// assert_eq!(Word::new(0b1100) & Word::new(0b1010), Word::new(0b1000));
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for Word {
    fn bitand_assign(&mut self, rhs: Self) {
        self.form_intersection(rhs);
    }
}

impl BitOr for Word {
    type Output = Self;

    /// Same as [`Word::union`].
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Word {
    fn bitor_assign(&mut self, rhs: Self) {
        self.form_union(rhs);
    }
}

impl BitXor for Word {
    type Output = Self;

    /// Same as [`Word::symmetric_difference`].
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl BitXorAssign for Word {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.form_symmetric_difference(rhs);
    }
}

impl Not for Word {
    type Output = Self;

    /// Same as [`Word::complement`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::Word;
    ///
    /// assert_eq!(!Word::EMPTY, Word::ALL);
    /// ```
    fn not(self) -> Self::Output {
        self.complement()
    }
}
