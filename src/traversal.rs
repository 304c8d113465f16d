//! Positional traversal over the members of a [`Bitset`].
//!
//! Positions follow ordered-collection rules: the valid positions are the
//! occupied slots plus the end sentinel, `index_after` and `index_before`
//! step between neighbouring members, and `distance` counts the steps
//! between two positions. Every walk is built on per-word rank/select, so a
//! single step costs O(1) amortized and any walk is O(word count) at worst.

use core::borrow::Borrow;

use crate::{BitPosition, Bitset, Word};

impl<S: Borrow<[Word]>> Bitset<S> {
    /// Returns the position of the lowest member, or the end position if the
    /// view is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let words = [Word::EMPTY, Word::new(0b100)];
    /// let bits = Bitset::new(&words[..]);
    /// assert_eq!(bits.start_index().value(), 66);
    ///
    /// let empty = [Word::EMPTY; 2];
    /// let bits = Bitset::new(&empty[..]);
    /// assert_eq!(bits.start_index(), bits.end_index());
    /// ```
    #[must_use]
    pub fn start_index(&self) -> BitPosition {
        self.words()
            .iter()
            .enumerate()
            .find_map(|(w, word)| word.first_member().map(|bit| BitPosition::new(w, bit)))
            .unwrap_or_else(|| self.end_index())
    }

    /// Returns the end sentinel `(word_count, 0)`.
    #[must_use]
    #[inline(always)]
    pub fn end_index(&self) -> BitPosition {
        BitPosition::end(self.word_count())
    }

    #[inline]
    fn is_valid_index(&self, pos: BitPosition) -> bool {
        pos == self.end_index() || self.contains(pos.value())
    }

    /// Returns the position of the first member after `pos`, or the end
    /// position if there is none.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not before the end position.
    #[must_use]
    pub fn index_after(&self, pos: BitPosition) -> BitPosition {
        let end = self.end_index();
        assert!(pos < end, "cannot advance past the end index");

        let words = self.words();
        let (mut w, b) = pos.split();
        let mut word = words[w];
        word.remove_all_through(b);
        loop {
            if let Some(bit) = word.first_member() {
                return BitPosition::new(w, bit);
            }
            w += 1;
            if w >= words.len() {
                return end;
            }
            word = words[w];
        }
    }

    /// Returns the position of the last member before `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the end position or if no member precedes it.
    #[must_use]
    pub fn index_before(&self, pos: BitPosition) -> BitPosition {
        assert!(pos <= self.end_index(), "index out of bounds");

        let words = self.words();
        let (mut w, b) = pos.split();
        if let Some(&word) = words.get(w) {
            let mut word = word;
            word.remove_all_from(b);
            if let Some(bit) = word.last_member() {
                return BitPosition::new(w, bit);
            }
        }
        while w > 0 {
            w -= 1;
            if let Some(bit) = words[w].last_member() {
                return BitPosition::new(w, bit);
            }
        }
        panic!("cannot retreat before the start index");
    }

    /// Counts the members in the half-open span `[lo, hi)` of positions.
    ///
    /// Words at or beyond the word count contribute nothing.
    pub(crate) fn count_between(&self, lo: BitPosition, hi: BitPosition) -> usize {
        debug_assert!(lo <= hi);
        let words = self.words();
        let (w1, b1) = lo.split();
        let (w2, b2) = hi.split();

        if w1 == w2 {
            return words
                .get(w1)
                .map_or(0, |w| w.intersection(Word::range(b1, b2)).count());
        }

        let Some(first) = words.get(w1) else {
            return 0;
        };
        let mut count = first.subtracting(Word::up_to(b1)).count();

        // Middle words (full)
        let interior_end = w2.min(words.len());
        count += words[w1 + 1..interior_end]
            .iter()
            .map(|w| w.count())
            .sum::<usize>();

        // Last word (partial)
        if let Some(last) = words.get(w2) {
            count += last.intersection(Word::up_to(b2)).count();
        }
        count
    }

    /// Returns the signed number of steps from `from` to `to`.
    ///
    /// The magnitude is the number of members in `[min, max)` of the two
    /// positions; the sign is negative when `to` precedes `from`.
    ///
    /// # Panics
    ///
    /// Panics if either position is neither occupied nor the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let words = [Word::new(0b1011), Word::new(1)];
    /// let bits = Bitset::new(&words[..]);
    /// let start = bits.start_index();
    /// let end = bits.end_index();
    ///
    /// assert_eq!(bits.distance(start, end), 4);
    /// assert_eq!(bits.distance(end, start), -4);
    /// ```
    #[must_use]
    pub fn distance(&self, from: BitPosition, to: BitPosition) -> isize {
        assert!(self.is_valid_index(from), "invalid start index");
        assert!(self.is_valid_index(to), "invalid end index");

        if from <= to {
            self.count_between(from, to) as isize
        } else {
            -(self.count_between(to, from) as isize)
        }
    }

    /// Moves `pos` by exactly `distance` members, forward when positive and
    /// backward when negative.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is neither occupied nor the end position, or if the
    /// walk would leave the `[start, end]` range of positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let words = [Word::new(0b1011), Word::new(1)];
    /// let bits = Bitset::new(&words[..]);
    ///
    /// let third = bits.index_offset(bits.start_index(), 2);
    /// assert_eq!(third.value(), 3);
    /// assert_eq!(bits.index_offset(third, 2), bits.end_index());
    /// assert_eq!(bits.index_offset(bits.end_index(), -1).value(), 64);
    /// ```
    #[must_use]
    pub fn index_offset(&self, pos: BitPosition, distance: isize) -> BitPosition {
        assert!(self.is_valid_index(pos), "invalid index");
        if distance == 0 {
            return pos;
        }

        let words = self.words();
        let mut remaining = distance.unsigned_abs();

        if distance > 0 {
            let (mut w, b) = pos.split();
            assert!(w < words.len(), "index out of bounds");
            let first = words[w].subtracting(Word::up_to(b));
            if let Some(bit) = first.nth_element(&mut remaining) {
                return BitPosition::new(w, bit);
            }
            loop {
                w += 1;
                if w >= words.len() {
                    break;
                }
                if let Some(bit) = words[w].nth_element(&mut remaining) {
                    return BitPosition::new(w, bit);
                }
            }
            assert!(remaining == 0, "index out of bounds");
            return self.end_index();
        }

        // Stepping to the previous member already consumes one step.
        remaining -= 1;
        let (mut w, b) = pos.end_split();
        if let Some(word) = words.get(w) {
            let head = word.intersection(Word::up_to(b));
            if let Some(bit) = head.nth_element_from_end(&mut remaining) {
                return BitPosition::new(w, bit);
            }
        }
        loop {
            assert!(w > 0, "index out of bounds");
            w -= 1;
            if let Some(bit) = words[w].nth_element_from_end(&mut remaining) {
                return BitPosition::new(w, bit);
            }
        }
    }

    /// Moves `pos` by `distance` members unless that would cross `limit`.
    ///
    /// Returns [`None`] if the walk would pass `limit`. Landing exactly on
    /// `limit` is allowed. A `limit` lying behind the direction of travel does
    /// not constrain the walk.
    ///
    /// # Panics
    ///
    /// Panics if `pos` or `limit` is neither occupied nor the end position,
    /// or, when `limit` does not constrain the walk, under the same
    /// conditions as [`index_offset`](Self::index_offset).
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::{Bitset, Word};
    ///
    /// let words = [Word::new(0b1_0110)];
    /// let bits = Bitset::new(&words[..]);
    /// let start = bits.start_index();
    /// let limit = bits.index_after(start);
    ///
    /// assert_eq!(bits.index_offset_limited(start, 1, limit), Some(limit));
    /// assert_eq!(bits.index_offset_limited(start, 2, limit), None);
    /// ```
    #[must_use]
    pub fn index_offset_limited(
        &self,
        pos: BitPosition,
        distance: isize,
        limit: BitPosition,
    ) -> Option<BitPosition> {
        assert!(self.is_valid_index(pos), "invalid index");
        assert!(self.is_valid_index(limit), "invalid limit index");
        if distance == 0 {
            return Some(pos);
        }

        let available = if distance > 0 {
            if limit < pos {
                return Some(self.index_offset(pos, distance));
            }
            self.count_between(pos, limit)
        } else {
            if limit > pos {
                return Some(self.index_offset(pos, distance));
            }
            self.count_between(limit, pos)
        };

        if distance.unsigned_abs() > available {
            return None;
        }
        Some(self.index_offset(pos, distance))
    }
}
