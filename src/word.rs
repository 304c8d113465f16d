//! Fixed-width bit vector used as the storage unit of every bit-set.

use core::slice;

/// A 64-bit packed bit vector.
///
/// Bit `b` is set if and only if element `b` (with `0 <= b < 64`) belongs to
/// the slice of the universe this word covers. All operations are O(1).
///
/// # Examples
///
/// ```
/// use dense_bitset::Word;
///
/// let mut word = Word::EMPTY;
/// assert!(word.insert(3));
/// assert!(!word.insert(3));
/// assert_eq!(word.count(), 1);
/// assert_eq!(word.first_member(), Some(3));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Word(pub u64);

impl Word {
    /// Number of bits held by a single word.
    pub const BITS: usize = 64;

    /// The word with no members.
    pub const EMPTY: Self = Self(0);

    /// The word with every bit set.
    pub const ALL: Self = Self(!0);

    /// Wraps a raw `u64`.
    #[must_use]
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits of this word.
    #[must_use]
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns a word with every bit strictly below `bit` set.
    ///
    /// `up_to(0)` is empty and `up_to(64)` is full.
    ///
    /// # Panics
    ///
    /// Panics if `bit > 64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::Word;
    ///
    /// assert_eq!(Word::up_to(0), Word::EMPTY);
    /// assert_eq!(Word::up_to(3), Word::new(0b111));
    /// assert_eq!(Word::up_to(64), Word::ALL);
    /// ```
    #[must_use]
    #[inline]
    pub const fn up_to(bit: usize) -> Self {
        assert!(bit <= Self::BITS, "bit out of range");
        if bit == Self::BITS {
            Self::ALL
        } else {
            Self((1u64 << bit) - 1)
        }
    }

    /// Returns a word with the bits in the half-open range `[from, to)` set.
    ///
    /// # Panics
    ///
    /// Panics if `to > 64`. In debug builds, also panics if `from > to`.
    #[must_use]
    #[inline]
    pub const fn range(from: usize, to: usize) -> Self {
        debug_assert!(from <= to, "from must be <= to");
        Self(Self::up_to(to).0 & !Self::up_to(from).0)
    }

    /// Returns `true` if `bit` is a member of this word.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 64`.
    #[must_use]
    #[inline(always)]
    pub const fn contains(self, bit: usize) -> bool {
        assert!(bit < Self::BITS, "bit out of range");
        (self.0 >> bit) & 1 != 0
    }

    /// Sets `bit`, returning `true` if it was not already set.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 64`.
    #[inline(always)]
    pub const fn insert(&mut self, bit: usize) -> bool {
        assert!(bit < Self::BITS, "bit out of range");
        let mask = 1u64 << bit;
        let inserted = self.0 & mask == 0;
        self.0 |= mask;
        inserted
    }

    /// Clears `bit`, returning `true` if it was set.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 64`.
    #[inline(always)]
    pub const fn remove(&mut self, bit: usize) -> bool {
        assert!(bit < Self::BITS, "bit out of range");
        let mask = 1u64 << bit;
        let removed = self.0 & mask != 0;
        self.0 &= !mask;
        removed
    }

    /// Sets `bit` to `value`, returning the previous membership of `bit`.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 64`.
    #[inline(always)]
    pub const fn update(&mut self, bit: usize, value: bool) -> bool {
        if value {
            !self.insert(bit)
        } else {
            self.remove(bit)
        }
    }

    /// Returns the number of members (population count).
    #[must_use]
    #[inline(always)]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit is set.
    #[must_use]
    #[inline(always)]
    pub const fn is_full(self) -> bool {
        self.0 == !0
    }

    /// Returns the members of either word.
    #[must_use]
    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the members common to both words.
    #[must_use]
    #[inline(always)]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the members of exactly one of the two words.
    #[must_use]
    #[inline(always)]
    pub const fn symmetric_difference(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Returns the members of `self` that are not in `other`.
    #[must_use]
    #[inline(always)]
    pub const fn subtracting(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the bitwise complement.
    #[must_use]
    #[inline(always)]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    /// In-place [`union`](Self::union).
    #[inline(always)]
    pub const fn form_union(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// In-place [`intersection`](Self::intersection).
    #[inline(always)]
    pub const fn form_intersection(&mut self, other: Self) {
        self.0 &= other.0;
    }

    /// In-place [`symmetric_difference`](Self::symmetric_difference).
    #[inline(always)]
    pub const fn form_symmetric_difference(&mut self, other: Self) {
        self.0 ^= other.0;
    }

    /// In-place [`subtracting`](Self::subtracting).
    #[inline(always)]
    pub const fn subtract(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// In-place [`complement`](Self::complement).
    #[inline(always)]
    pub const fn form_complement(&mut self) {
        self.0 = !self.0;
    }

    /// Returns the lowest set bit, or [`None`] if the word is empty.
    #[must_use]
    #[inline(always)]
    pub const fn first_member(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Returns the highest set bit, or [`None`] if the word is empty.
    #[must_use]
    #[inline(always)]
    pub const fn last_member(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(63 - self.0.leading_zeros() as usize)
        }
    }

    /// Removes and returns the lowest set bit.
    #[inline]
    pub const fn pop_first(&mut self) -> Option<usize> {
        let bit = self.first_member();
        // clear lowest set bit
        self.0 &= self.0.wrapping_sub(1);
        bit
    }

    /// Removes and returns the highest set bit.
    #[inline]
    pub const fn pop_last(&mut self) -> Option<usize> {
        let bit = self.last_member();
        if let Some(bit) = bit {
            self.0 &= !(1u64 << bit);
        }
        bit
    }

    /// Clears every bit at or below `bit`.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 64`.
    #[inline]
    pub const fn remove_all_through(&mut self, bit: usize) {
        assert!(bit < Self::BITS, "bit out of range");
        self.0 &= !Self::up_to(bit + 1).0;
    }

    /// Clears every bit at or above `bit`.
    ///
    /// `bit` may be 64, in which case nothing is cleared.
    #[inline]
    pub const fn remove_all_from(&mut self, bit: usize) {
        self.0 &= Self::up_to(bit).0;
    }

    /// Returns the number of members strictly below `bit`.
    #[must_use]
    #[inline]
    pub const fn rank(self, bit: usize) -> usize {
        (self.0 & Self::up_to(bit).0).count_ones() as usize
    }

    /// Returns the position of the `n`-th (0-based) member in ascending order.
    #[must_use]
    #[inline]
    pub const fn select(self, n: usize) -> Option<usize> {
        if n >= self.count() {
            return None;
        }
        let mut value = self.0;
        let mut i = 0;
        while i < n {
            value &= value - 1;
            i += 1;
        }
        Some(value.trailing_zeros() as usize)
    }

    /// Scans upward for the member `*remaining` steps past the lowest one.
    ///
    /// On a hit, returns its bit and leaves `*remaining` at zero. On a miss,
    /// subtracts this word's count from `*remaining` and returns [`None`], so
    /// the caller can continue with the next word.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::Word;
    ///
    /// let word = Word::new(0b1011_0000);
    /// let mut remaining = 2;
    /// assert_eq!(word.nth_element(&mut remaining), Some(7));
    ///
    /// let mut remaining = 5;
    /// assert_eq!(word.nth_element(&mut remaining), None);
    /// assert_eq!(remaining, 2);
    /// ```
    #[inline]
    pub const fn nth_element(self, remaining: &mut usize) -> Option<usize> {
        let c = self.count();
        if *remaining >= c {
            *remaining -= c;
            return None;
        }
        let bit = self.select(*remaining);
        *remaining = 0;
        bit
    }

    /// Mirror of [`nth_element`](Self::nth_element) scanning down from the
    /// highest member.
    #[inline]
    pub const fn nth_element_from_end(self, remaining: &mut usize) -> Option<usize> {
        let c = self.count();
        if *remaining >= c {
            *remaining -= c;
            return None;
        }
        let bit = self.select(c - 1 - *remaining);
        *remaining = 0;
        bit
    }

    /// Reinterprets a slice of raw words as a slice of [`Word`]s.
    #[must_use]
    #[inline(always)]
    pub const fn from_raw_slice(words: &[u64]) -> &[Self] {
        // SAFETY: Word is repr(transparent) over u64, so both slices share
        // layout, alignment and validity.
        unsafe { slice::from_raw_parts(words.as_ptr().cast::<Self>(), words.len()) }
    }

    /// Reinterprets a mutable slice of raw words as a slice of [`Word`]s.
    #[must_use]
    #[inline(always)]
    pub const fn from_raw_slice_mut(words: &mut [u64]) -> &mut [Self] {
        // SAFETY: Word is repr(transparent) over u64 and the exclusive borrow
        // is carried over to the returned slice.
        unsafe { slice::from_raw_parts_mut(words.as_mut_ptr().cast::<Self>(), words.len()) }
    }
}
