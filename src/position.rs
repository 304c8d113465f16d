//! Positional index into the bit space of a bit-set.

use core::fmt;

use crate::{Word, macros::bitpos};

/// An ordered locator `(word, bit)` for one slot of a bit-set.
///
/// Positions order by their absolute [`value`](Self::value). The end sentinel
/// of a bit-set with `n` words is `(n, 0)`, which compares greater than every
/// in-range position.
///
/// # Examples
///
/// ```
/// use dense_bitset::BitPosition;
///
/// let pos = BitPosition::from_value(130);
/// assert_eq!(pos.word(), 2);
/// assert_eq!(pos.bit(), 2);
/// assert_eq!(pos.value(), 130);
/// assert!(pos < BitPosition::end(3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPosition {
    // field order matters for the derived ordering
    word: usize,
    bit: usize,
}

impl BitPosition {
    /// Creates a position from a word index and a bit offset.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 64`.
    #[must_use]
    #[inline]
    pub const fn new(word: usize, bit: usize) -> Self {
        assert!(bit < Word::BITS, "bit offset out of range");
        Self { word, bit }
    }

    /// Creates the position holding the absolute element `value`.
    #[must_use]
    #[inline(always)]
    pub const fn from_value(value: usize) -> Self {
        let (word, bit) = bitpos!(value);
        Self { word, bit }
    }

    /// The end sentinel for a bit-set with `word_count` words.
    #[must_use]
    #[inline(always)]
    pub const fn end(word_count: usize) -> Self {
        Self {
            word: word_count,
            bit: 0,
        }
    }

    /// Index of the word holding this position.
    #[must_use]
    #[inline(always)]
    pub const fn word(self) -> usize {
        self.word
    }

    /// Bit offset within the word.
    #[must_use]
    #[inline(always)]
    pub const fn bit(self) -> usize {
        self.bit
    }

    /// Returns `word * 64 + bit`.
    ///
    /// # Panics
    ///
    /// Panics if the absolute value does not fit in `usize`, which only
    /// happens for positions whose word index exceeds `usize::MAX / 64`.
    #[must_use]
    #[inline(always)]
    pub const fn value(self) -> usize {
        match self.word.checked_mul(Word::BITS) {
            Some(base) => base + self.bit,
            None => panic!("bit position overflows usize"),
        }
    }

    #[inline(always)]
    pub(crate) const fn split(self) -> (usize, usize) {
        (self.word, self.bit)
    }

    /// Splits the position so that the bits strictly below it are
    /// `Word::up_to(bit)` of the returned word.
    ///
    /// A position on bit 0 of word `w > 0` maps to `(w - 1, 64)`.
    #[inline(always)]
    pub(crate) const fn end_split(self) -> (usize, usize) {
        if self.bit == 0 && self.word > 0 {
            (self.word - 1, Word::BITS)
        } else {
            (self.word, self.bit)
        }
    }
}

impl fmt::Debug for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitPosition({}:{})", self.word, self.bit)
    }
}

impl From<usize> for BitPosition {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

impl From<BitPosition> for usize {
    fn from(pos: BitPosition) -> Self {
        pos.value()
    }
}
