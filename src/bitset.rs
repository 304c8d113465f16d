//! `Bitset` view type and its element-level primitives.

use core::borrow::{Borrow, BorrowMut};

use crate::{BitPosition, CapacityError, Word, iter::Iter, macros::bitpos};

/// A non-owning view over contiguous [`Word`] storage.
///
/// # Overview
///
/// `Bitset` never allocates or frees the words it is given; the owner of the
/// storage decides when to grow or shrink it. The element `v` is a member if
/// bit `v % 64` of word `v / 64` is set.
///
/// # Access Model
///
/// The storage parameter `S` fixes the capability of the view at compile time:
///
/// - [`BitsetRef`] (`Bitset<&[Word]>`) only observes.
/// - [`BitsetMut`] (`Bitset<&mut [Word]>`) can also mutate.
///
/// Every read operation is available on both, and mutating methods only exist
/// when `S: BorrowMut<[Word]>`, so writing through a read-only view is a
/// compile error rather than a runtime check.
///
/// # Capacity Model
///
/// `capacity() == word_count() * 64` is the exclusive upper bound of the
/// elements the view can hold. The member count is never cached; it is
/// recomputed from the words on every call.
///
/// # Examples
///
/// ```
/// use dense_bitset::{Bitset, Word};
///
/// let mut storage = [Word::EMPTY; 2];
/// let mut bits = Bitset::new(&mut storage[..]);
///
/// assert!(bits.insert(10));
/// assert!(bits.insert(100));
/// assert!(bits.contains(10));
/// assert!(!bits.contains(500)); // beyond capacity is simply absent
/// assert_eq!(bits.count(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct Bitset<S> {
    words: S,
}

/// A read-only view over borrowed words.
///
/// Mutating methods are not available on a read-only view:
///
/// ```compile_fail,E0599
/// use dense_bitset::{Bitset, Word};
///
/// let words = [Word::EMPTY; 1];
/// let mut bits = Bitset::new(&words[..]);
/// bits.insert(3);
/// ```
///
/// ```compile_fail,E0599
/// use dense_bitset::{BitsetRef, Word};
///
/// let words = [Word::EMPTY; 2];
/// let mut bits: BitsetRef<'_> = BitsetRef::new(&words[..]);
/// bits.form_union(0..10);
/// ```
pub type BitsetRef<'a> = Bitset<&'a [Word]>;

/// A mutable view over exclusively borrowed words.
pub type BitsetMut<'a> = Bitset<&'a mut [Word]>;

/// Returns the number of words needed to hold `capacity` bits.
///
/// # Examples
///
/// ```
/// use dense_bitset::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// ```
#[must_use]
#[inline(always)]
pub const fn word_count(capacity: usize) -> usize {
    capacity.div_ceil(Word::BITS)
}

impl<S> Bitset<S> {
    /// Creates a view over `words`.
    #[must_use]
    #[inline(always)]
    pub const fn new(words: S) -> Self {
        Self { words }
    }

    /// Gives back the underlying storage.
    #[must_use]
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.words
    }
}

impl<'a> Bitset<&'a [Word]> {
    /// Creates a read-only view over raw `u64` words.
    #[must_use]
    pub const fn from_raw(words: &'a [u64]) -> Self {
        Self::new(Word::from_raw_slice(words))
    }
}

impl<'a> Bitset<&'a mut [Word]> {
    /// Creates a mutable view over raw `u64` words.
    #[must_use]
    pub const fn from_raw_mut(words: &'a mut [u64]) -> Self {
        Self::new(Word::from_raw_slice_mut(words))
    }
}

impl<S: Borrow<[Word]>> Bitset<S> {
    /// Returns the borrowed words.
    #[must_use]
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        self.words.borrow()
    }

    /// Returns a read-only view over the same words.
    #[must_use]
    #[inline(always)]
    pub fn reborrow(&self) -> BitsetRef<'_> {
        Bitset::new(self.words())
    }

    /// Number of borrowed words.
    #[must_use]
    #[inline(always)]
    pub fn word_count(&self) -> usize {
        self.words().len()
    }

    /// Exclusive upper bound of representable elements.
    #[must_use]
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.word_count() * Word::BITS
    }

    /// Returns `true` if `element` is a member.
    ///
    /// Elements at or beyond [`capacity`](Self::capacity) are never members.
    #[must_use]
    #[inline]
    pub fn contains(&self, element: usize) -> bool {
        let (word, bit) = bitpos!(element);
        self.words().get(word).is_some_and(|w| w.contains(bit))
    }

    /// Returns the number of members.
    ///
    /// Time complexity: O(n) where n is the number of words.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.words().iter().map(|w| w.count()).sum()
    }

    /// Returns `true` if no word has a member.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words().iter().all(|w| w.is_empty())
    }

    /// Returns the number of trailing words that hold no members.
    ///
    /// The owner of the storage can release this many words without losing
    /// any element.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let words = [Word::new(1), Word::EMPTY, Word::EMPTY];
    /// assert_eq!(Bitset::new(&words[..]).empty_suffix(), 2);
    /// ```
    #[must_use]
    pub fn empty_suffix(&self) -> usize {
        self.words()
            .iter()
            .rev()
            .take_while(|w| w.is_empty())
            .count()
    }

    /// Returns the lowest member, or [`None`] if the view is empty.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        let words = self.words();
        for (wi, word) in words.iter().enumerate() {
            if let Some(bit) = word.first_member() {
                return Some(wi * Word::BITS + bit);
            }
        }
        None
    }

    /// Returns the highest member, or [`None`] if the view is empty.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        let words = self.words();
        for (wi, word) in words.iter().enumerate().rev() {
            if let Some(bit) = word.last_member() {
                return Some(wi * Word::BITS + bit);
            }
        }
        None
    }

    /// Returns the position of `element` if it is a member.
    #[must_use]
    pub fn position_of(&self, element: usize) -> Option<BitPosition> {
        self.contains(element)
            .then_some(BitPosition::from_value(element))
    }

    /// Returns the element stored at an occupied position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not hold a member.
    #[must_use]
    pub fn element(&self, pos: BitPosition) -> usize {
        let value = pos.value();
        assert!(self.contains(value), "position does not hold a member");
        value
    }

    /// Returns an iterator over the members in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let words = [Word::new(0b1010), Word::new(1)];
    /// let bits = Bitset::new(&words[..]);
    /// assert_eq!(bits.iter().collect::<Vec<_>>(), vec![1, 3, 64]);
    /// assert_eq!(bits.iter().rev().collect::<Vec<_>>(), vec![64, 3, 1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.words())
    }
}

impl<S: BorrowMut<[Word]>> Bitset<S> {
    /// Returns the borrowed words mutably.
    #[must_use]
    #[inline(always)]
    pub fn words_mut(&mut self) -> &mut [Word] {
        self.words.borrow_mut()
    }

    /// Returns a mutable view reborrowing the same words.
    #[must_use]
    #[inline(always)]
    pub fn reborrow_mut(&mut self) -> BitsetMut<'_> {
        Bitset::new(self.words_mut())
    }

    /// Inserts `element`, returning `true` if it was not already a member.
    ///
    /// # Panics
    ///
    /// Panics if `element >= capacity()`. The owner must grow the storage
    /// before inserting past the current capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let mut storage = [Word::EMPTY; 1];
    /// let mut bits = Bitset::new(&mut storage[..]);
    ///
    /// assert!(bits.insert(10)); // First insertion
    /// assert!(!bits.insert(10)); // Already set
    /// ```
    #[inline]
    pub fn insert(&mut self, element: usize) -> bool {
        let capacity = self.capacity();
        assert!(
            element < capacity,
            "element {element} out of capacity {capacity}"
        );
        let (word, bit) = bitpos!(element);
        self.words_mut()[word].insert(bit)
    }

    /// Like [`insert`](Self::insert), but reports an element past the
    /// capacity as an error instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `element >= capacity()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let mut storage = [Word::EMPTY; 1];
    /// let mut bits = Bitset::new(&mut storage[..]);
    ///
    /// assert_eq!(bits.try_insert(63), Ok(true));
    /// assert!(bits.try_insert(64).is_err());
    /// ```
    pub fn try_insert(&mut self, element: usize) -> Result<bool, CapacityError> {
        let capacity = self.capacity();
        if element >= capacity {
            return Err(CapacityError { element, capacity });
        }
        Ok(self.insert(element))
    }

    /// Removes `element`, returning `true` if it was a member.
    ///
    /// Elements beyond the capacity are already absent, so removing them
    /// returns `false`.
    #[inline]
    pub fn remove(&mut self, element: usize) -> bool {
        let (word, bit) = bitpos!(element);
        self.words_mut()
            .get_mut(word)
            .is_some_and(|w| w.remove(bit))
    }

    /// Sets the membership of `element` to `value` and returns its previous
    /// membership.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `true` and `element >= capacity()`. Clearing an
    /// element beyond the capacity is a no-op returning `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let mut storage = [Word::EMPTY; 1];
    /// let mut bits = Bitset::new(&mut storage[..]);
    ///
    /// assert!(!bits.update(10, true));
    /// assert!(bits.update(10, false));
    /// assert!(!bits.update(1000, false));
    /// ```
    pub fn update(&mut self, element: usize, value: bool) -> bool {
        if value {
            !self.insert(element)
        } else {
            self.remove(element)
        }
    }

    /// Removes every member, keeping the storage.
    pub fn clear(&mut self) {
        self.words_mut().fill(Word::EMPTY);
    }
}
