//! Set algebra between a [`Bitset`] and a contiguous range of elements.
//!
//! Every operation splits the range into `(word, bit)` boundaries, applies a
//! partial-word mask at each end and touches interior words whole. Ranges are
//! half-open; a range with `start >= end` is empty.

use core::{
    borrow::{Borrow, BorrowMut},
    ops::Range,
};

use crate::{Bitset, Word, macros::bitpos};

#[inline(always)]
fn all_empty(words: &[Word]) -> bool {
    words.iter().all(|w| w.is_empty())
}

#[inline(always)]
fn all_full(words: &[Word]) -> bool {
    words.iter().all(|w| w.is_full())
}

impl<S: BorrowMut<[Word]>> Bitset<S> {
    /// Inserts every element of `range`.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty `range` ends past the capacity. The owner must
    /// grow the storage first.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let mut storage = [Word::EMPTY; 2];
    /// let mut bits = Bitset::new(&mut storage[..]);
    /// bits.form_union(10..70);
    ///
    /// assert!(!bits.contains(9));
    /// assert!(bits.contains(10));
    /// assert!(bits.contains(69));
    /// assert!(!bits.contains(70));
    /// assert_eq!(bits.count(), 60);
    /// ```
    pub fn form_union(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let capacity = self.capacity();
        assert!(
            range.end <= capacity,
            "range {range:?} exceeds capacity {capacity}"
        );

        let (lw, lb) = bitpos!(range.start);
        let (uw, ub) = bitpos!(range.end);
        let words = self.words_mut();

        if lw == uw {
            words[lw].form_union(Word::range(lb, ub));
            return;
        }

        words[lw].form_union(Word::up_to(lb).complement());
        words[lw + 1..uw].fill(Word::ALL);
        if let Some(word) = words.get_mut(uw) {
            word.form_union(Word::up_to(ub));
        }
    }

    /// Removes every member outside `range`.
    ///
    /// The range is clamped to the capacity; an empty range clears the view.
    pub fn form_intersection(&mut self, range: Range<usize>) {
        if range.is_empty() {
            self.clear();
            return;
        }
        let capacity = self.capacity();
        let (lw, lb) = bitpos!(range.start.min(capacity));
        let (uw, ub) = bitpos!(range.end.min(capacity));
        let words = self.words_mut();
        let len = words.len();

        words[..lw].fill(Word::EMPTY);
        if uw < len {
            words[uw + 1..].fill(Word::EMPTY);
        }

        if lw == uw {
            if let Some(word) = words.get_mut(lw) {
                word.form_intersection(Word::range(lb, ub));
            }
            return;
        }

        words[lw].form_intersection(Word::up_to(lb).complement());
        if let Some(word) = words.get_mut(uw) {
            word.form_intersection(Word::up_to(ub));
        }
    }

    /// Toggles the membership of every element of `range`.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty `range` ends past the capacity.
    pub fn form_symmetric_difference(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let capacity = self.capacity();
        assert!(
            range.end <= capacity,
            "range {range:?} exceeds capacity {capacity}"
        );

        let (lw, lb) = bitpos!(range.start);
        let (uw, ub) = bitpos!(range.end);
        let words = self.words_mut();

        if lw == uw {
            words[lw].form_symmetric_difference(Word::range(lb, ub));
            return;
        }

        words[lw].form_symmetric_difference(Word::up_to(lb).complement());
        for word in &mut words[lw + 1..uw] {
            word.form_complement();
        }
        if let Some(word) = words.get_mut(uw) {
            word.form_symmetric_difference(Word::up_to(ub));
        }
    }

    /// Removes every element of `range`.
    ///
    /// The range is clamped to the capacity.
    pub fn subtract(&mut self, range: Range<usize>) {
        let capacity = self.capacity();
        let start = range.start.min(capacity);
        let end = range.end.min(capacity);
        if start >= end {
            return;
        }

        let (lw, lb) = bitpos!(start);
        let (uw, ub) = bitpos!(end);
        let words = self.words_mut();

        if lw == uw {
            words[lw].subtract(Word::range(lb, ub));
            return;
        }

        words[lw].subtract(Word::up_to(lb).complement());
        words[lw + 1..uw].fill(Word::EMPTY);
        if let Some(word) = words.get_mut(uw) {
            word.subtract(Word::up_to(ub));
        }
    }
}

impl<S: Borrow<[Word]>> Bitset<S> {
    /// Returns `true` if no element of `range` is a member.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let words = [Word::new(1 << 20), Word::EMPTY];
    /// let bits = Bitset::new(&words[..]);
    ///
    /// assert!(bits.is_disjoint(21..500));
    /// assert!(!bits.is_disjoint(0..21));
    /// assert!(bits.is_disjoint(20..20));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, range: Range<usize>) -> bool {
        let capacity = self.capacity();
        let start = range.start.min(capacity);
        let end = range.end.min(capacity);
        if start >= end {
            return true;
        }

        let (lw, lb) = bitpos!(start);
        let (uw, ub) = bitpos!(end);
        let words = self.words();

        if lw == uw {
            return words[lw].intersection(Word::range(lb, ub)).is_empty();
        }

        words[lw].subtracting(Word::up_to(lb)).is_empty()
            && all_empty(&words[lw + 1..uw])
            && words
                .get(uw)
                .is_none_or(|w| w.intersection(Word::up_to(ub)).is_empty())
    }

    /// Returns `true` if every member lies within `range`.
    ///
    /// An empty view is a subset of every range, including an empty one.
    #[must_use]
    pub fn is_subset(&self, range: Range<usize>) -> bool {
        let capacity = self.capacity();
        if range.is_empty() || range.start >= capacity {
            return self.is_empty();
        }

        let (lw, lb) = bitpos!(range.start);
        let (uw, ub) = bitpos!(range.end.min(capacity));
        let words = self.words();

        if !all_empty(&words[..lw]) {
            return false;
        }

        if lw == uw {
            return words[lw].subtracting(Word::range(lb, ub)).is_empty()
                && all_empty(&words[lw + 1..]);
        }

        if !words[lw].intersection(Word::up_to(lb)).is_empty() {
            return false;
        }
        match words.get(uw) {
            Some(word) => {
                word.subtracting(Word::up_to(ub)).is_empty() && all_empty(&words[uw + 1..])
            }
            None => true,
        }
    }

    /// Returns `true` if every element of `range` is a member.
    ///
    /// Every view is a superset of an empty range. A non-empty range reaching
    /// past the capacity is never covered.
    #[must_use]
    pub fn is_superset(&self, range: Range<usize>) -> bool {
        if range.is_empty() {
            return true;
        }
        if range.end > self.capacity() {
            return false;
        }

        let (lw, lb) = bitpos!(range.start);
        let (uw, ub) = bitpos!(range.end);
        let words = self.words();

        if lw == uw {
            let mask = Word::range(lb, ub);
            return words[lw].intersection(mask) == mask;
        }

        let head = Word::up_to(lb).complement();
        if words[lw].intersection(head) != head {
            return false;
        }
        if !all_full(&words[lw + 1..uw]) {
            return false;
        }
        words.get(uw).is_none_or(|w| {
            let tail = Word::up_to(ub);
            w.intersection(tail) == tail
        })
    }

    /// Returns `true` if the members are exactly the elements of `range`.
    ///
    /// Members in words past the end of `range` make the sets unequal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let mut storage = [Word::EMPTY; 3];
    /// let mut bits = Bitset::new(&mut storage[..]);
    /// bits.form_union(5..70);
    ///
    /// assert!(bits.is_equal(5..70));
    /// assert!(!bits.is_equal(5..71));
    ///
    /// bits.insert(150);
    /// assert!(!bits.is_equal(5..70));
    /// ```
    #[must_use]
    pub fn is_equal(&self, range: Range<usize>) -> bool {
        if range.is_empty() {
            return self.is_empty();
        }
        if range.end > self.capacity() {
            return false;
        }

        let (lw, lb) = bitpos!(range.start);
        let (uw, ub) = bitpos!(range.end);
        let words = self.words();

        if !all_empty(&words[..lw]) {
            return false;
        }

        if lw == uw {
            return words[lw] == Word::range(lb, ub) && all_empty(&words[lw + 1..]);
        }

        if words[lw] != Word::up_to(lb).complement() || !all_full(&words[lw + 1..uw]) {
            return false;
        }
        match words.get(uw) {
            Some(word) => *word == Word::up_to(ub) && all_empty(&words[uw + 1..]),
            None => true,
        }
    }
}
