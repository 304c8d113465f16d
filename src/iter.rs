//! Iterator over the members of a [`Bitset`](crate::Bitset).

use core::iter::FusedIterator;

use crate::{Bitset, Word};

/// An iterator over the members of a bit-set, in ascending order.
///
/// Each end holds a cursor `(word index, remaining bits of that word)`.
/// Members are consumed by clearing them from the cursor word, and the cursor
/// refills from the next word once its word runs dry. When both cursors reach
/// the same word they share its remaining bits.
///
/// The iterator is not restartable; call [`Bitset::iter`] again to start
/// over.
///
/// # Examples
///
/// ```
/// use dense_bitset::{Bitset, Word};
///
/// let words = [Word::new(1 << 5), Word::new(1 << 2)];
/// let bits = Bitset::new(&words[..]);
///
/// let mut iter = bits.iter();
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.next(), Some(5));
/// assert_eq!(iter.next_back(), Some(66));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    words: &'a [Word],
    front: usize,
    front_word: Word,
    back: usize,
    back_word: Word,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        match words {
            [] => Self {
                words,
                front: 0,
                front_word: Word::EMPTY,
                back: 0,
                back_word: Word::EMPTY,
            },
            [first, .., last] => Self {
                words,
                front: 0,
                front_word: *first,
                back: words.len() - 1,
                back_word: *last,
            },
            [only] => Self {
                words,
                front: 0,
                front_word: *only,
                back: 0,
                back_word: *only,
            },
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bit) = self.front_word.pop_first() {
                if self.front == self.back {
                    self.back_word = self.front_word;
                }
                return Some(self.front * Word::BITS + bit);
            }
            if self.front >= self.back {
                return None;
            }
            self.front += 1;
            self.front_word = if self.front == self.back {
                self.back_word
            } else {
                self.words[self.front]
            };
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        if self.front == self.back {
            return self.front_word.count();
        }
        let interior: usize = self.words[self.front + 1..self.back]
            .iter()
            .map(|w| w.count())
            .sum();
        self.front_word.count() + interior + self.back_word.count()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bit) = self.back_word.pop_last() {
                if self.front == self.back {
                    self.front_word = self.back_word;
                }
                return Some(self.back * Word::BITS + bit);
            }
            if self.back <= self.front {
                return None;
            }
            self.back -= 1;
            self.back_word = if self.front == self.back {
                self.front_word
            } else {
                self.words[self.back]
            };
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a, S: core::borrow::Borrow<[Word]>> IntoIterator for &'a Bitset<S> {
    type IntoIter = Iter<'a>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
