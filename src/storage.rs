//! Scratch word storage for short-lived bit-sets.

use alloc::{boxed::Box, vec};
use core::ops::{Deref, DerefMut};

use crate::{Bitset, BitsetMut, Word, macros::trace};

/// Number of words a temporary bit-set can hold without touching the heap.
pub const WORDS_INLINE: usize = 2;

/// Zero-initialized scratch words, inline when small enough.
///
/// Heap storage is released when the value is dropped, which covers normal
/// returns, early `?` returns and unwinding alike.
pub(crate) enum TemporaryWords {
    /// Inline buffer and the number of words in use
    Inline([Word; WORDS_INLINE], usize),
    /// Heap-allocated buffer
    Heap(Box<[Word]>),
}

impl TemporaryWords {
    pub(crate) fn zeroed(word_count: usize) -> Self {
        if word_count <= WORDS_INLINE {
            trace!(words = word_count, inline = true, "temporary bitset");
            Self::Inline([Word::EMPTY; WORDS_INLINE], word_count)
        } else {
            trace!(words = word_count, inline = false, "temporary bitset");
            Self::Heap(vec![Word::EMPTY; word_count].into_boxed_slice())
        }
    }

    #[cfg(test)]
    pub(crate) const fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(..))
    }
}

impl Deref for TemporaryWords {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Inline(array, n) => &array[..*n],
            Self::Heap(words) => words,
        }
    }
}

impl DerefMut for TemporaryWords {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Self::Inline(array, n) => &mut array[..*n],
            Self::Heap(words) => words,
        }
    }
}

/// Runs `body` over a zeroed, mutable bit-set of `word_count` words.
///
/// Up to [`WORDS_INLINE`] words live on the stack; larger requests are
/// allocated on the heap. Either way the storage is released before this
/// function returns, whether `body` returns normally or panics. The bit-set
/// cannot escape `body`.
///
/// # Examples
///
/// ```
/// use dense_bitset::with_temporary_bitset;
///
/// let count = with_temporary_bitset(4, |mut bits| {
///     bits.form_union(10..200);
///     bits.subtract(50..60);
///     bits.count()
/// });
/// assert_eq!(count, 180);
/// ```
///
/// Errors returned by `body` pass straight through:
///
/// ```
/// use dense_bitset::{CapacityError, with_temporary_bitset};
///
/// let result: Result<bool, CapacityError> =
///     with_temporary_bitset(1, |mut bits| bits.try_insert(64));
/// assert!(result.is_err());
/// ```
pub fn with_temporary_bitset<R>(word_count: usize, body: impl FnOnce(BitsetMut<'_>) -> R) -> R {
    let mut words = TemporaryWords::zeroed(word_count);
    body(Bitset::new(&mut *words))
}
