use std::hint::black_box;

use dense_bitset::Word;

#[test]
fn test_constants() {
    assert!(Word::EMPTY.is_empty());
    assert!(!Word::EMPTY.is_full());
    assert!(Word::ALL.is_full());
    assert_eq!(Word::ALL.count(), Word::BITS);
    assert_eq!(Word::default(), Word::EMPTY);
}

#[test]
fn test_insert_remove_update() {
    let mut word = Word::EMPTY;

    assert!(word.insert(0));
    assert!(word.insert(63));
    assert!(!word.insert(63));
    assert_eq!(word.bits(), (1u64 << 63) | 1);

    assert!(word.remove(0));
    assert!(!word.remove(0));
    assert!(!word.contains(0));

    // update reports the previous membership
    assert!(!word.update(5, true));
    assert!(word.update(5, true));
    assert!(word.update(5, false));
    assert!(!word.contains(5));
}

#[test]
fn test_up_to_extremes() {
    assert_eq!(Word::up_to(0), Word::EMPTY);
    assert_eq!(Word::up_to(1), Word::new(1));
    assert_eq!(Word::up_to(63), Word::new(!0 >> 1));
    assert_eq!(Word::up_to(64), Word::ALL);
}

#[test]
#[should_panic(expected = "bit out of range")]
fn test_up_to_past_width_panics() {
    let _ = Word::up_to(65);
}

#[test]
#[should_panic(expected = "bit out of range")]
fn test_insert_past_width_panics() {
    let mut word = Word::EMPTY;
    word.insert(black_box(64));
}

#[test]
#[should_panic(expected = "bit out of range")]
fn test_contains_past_width_panics() {
    let _ = Word::ALL.contains(black_box(64));
}

#[test]
#[should_panic(expected = "bit out of range")]
fn test_remove_past_width_panics() {
    let mut word = Word::ALL;
    word.remove(black_box(64));
}

#[test]
#[should_panic(expected = "bit out of range")]
fn test_update_past_width_panics() {
    let mut word = Word::EMPTY;
    word.update(black_box(100), true);
}

#[test]
#[should_panic(expected = "bit out of range")]
fn test_remove_all_through_past_width_panics() {
    let mut word = Word::ALL;
    word.remove_all_through(black_box(64));
}

#[test]
fn test_range_masks() {
    assert_eq!(Word::range(0, 0), Word::EMPTY);
    assert_eq!(Word::range(5, 5), Word::EMPTY);
    assert_eq!(Word::range(0, 64), Word::ALL);
    assert_eq!(Word::range(2, 5), Word::new(0b11100));
    assert_eq!(Word::range(60, 64), Word::new(0xF000_0000_0000_0000));
    for from in 0..=64 {
        for to in from..=64 {
            assert_eq!(Word::range(from, to).count(), to - from);
        }
    }
}

#[test]
fn test_algebra() {
    let a = Word::new(0b1100);
    let b = Word::new(0b1010);

    assert_eq!(a.union(b), Word::new(0b1110));
    assert_eq!(a.intersection(b), Word::new(0b1000));
    assert_eq!(a.symmetric_difference(b), Word::new(0b0110));
    assert_eq!(a.subtracting(b), Word::new(0b0100));
    assert_eq!(a.complement(), Word::new(!0b1100));

    assert_eq!(a | b, a.union(b));
    assert_eq!(a & b, a.intersection(b));
    assert_eq!(a ^ b, a.symmetric_difference(b));
    assert_eq!(!a, a.complement());

    let mut c = a;
    c.form_union(b);
    assert_eq!(c, a | b);
    c.form_intersection(b);
    assert_eq!(c, b);
    c.form_symmetric_difference(a);
    assert_eq!(c, a ^ b);
    c.subtract(Word::new(0b0100));
    assert_eq!(c, Word::new(0b0010));
    c.form_complement();
    assert_eq!(c, Word::new(!0b0010));

    let mut d = a;
    d |= b;
    d &= Word::new(0b0110);
    d ^= Word::new(0b0001);
    assert_eq!(d, Word::new(0b0111));
}

#[test]
fn test_first_last_member() {
    assert_eq!(Word::EMPTY.first_member(), None);
    assert_eq!(Word::EMPTY.last_member(), None);
    assert_eq!(Word::ALL.first_member(), Some(0));
    assert_eq!(Word::ALL.last_member(), Some(63));

    let word = Word::new(0b0101_0000);
    assert_eq!(word.first_member(), Some(4));
    assert_eq!(word.last_member(), Some(6));
}

#[test]
fn test_remove_all_through_and_from() {
    let mut word = Word::new(0b1111_0000);
    word.remove_all_through(5);
    assert_eq!(word, Word::new(0b1100_0000));

    let mut word = Word::new(0b1111_0000);
    word.remove_all_from(6);
    assert_eq!(word, Word::new(0b0011_0000));

    let mut word = Word::ALL;
    word.remove_all_through(0);
    assert_eq!(word.first_member(), Some(1));
}

#[test]
fn test_rank() {
    let word = Word::new(0b1011_0101);
    assert_eq!(word.rank(0), 0);
    assert_eq!(word.rank(1), 1);
    assert_eq!(word.rank(3), 2);
    assert_eq!(word.rank(8), 5);
    assert_eq!(word.rank(64), 5);
    assert_eq!(Word::ALL.rank(64), 64);
}

#[test]
fn test_nth_element_forward() {
    let word = Word::new(0b1011_0101); // members 0, 2, 4, 5, 7
    let members = [0, 2, 4, 5, 7];
    for (n, &bit) in members.iter().enumerate() {
        let mut remaining = n;
        assert_eq!(word.nth_element(&mut remaining), Some(bit));
        assert_eq!(remaining, 0);
    }

    let mut remaining = 5;
    assert_eq!(word.nth_element(&mut remaining), None);
    assert_eq!(remaining, 0);

    let mut remaining = 12;
    assert_eq!(word.nth_element(&mut remaining), None);
    assert_eq!(remaining, 7);

    let mut remaining = 0;
    assert_eq!(Word::EMPTY.nth_element(&mut remaining), None);
    assert_eq!(remaining, 0);
}

#[test]
fn test_nth_element_from_end() {
    let word = Word::new(0b1011_0101); // members 0, 2, 4, 5, 7
    let members = [7, 5, 4, 2, 0];
    for (n, &bit) in members.iter().enumerate() {
        let mut remaining = n;
        assert_eq!(word.nth_element_from_end(&mut remaining), Some(bit));
    }

    let mut remaining = 9;
    assert_eq!(word.nth_element_from_end(&mut remaining), None);
    assert_eq!(remaining, 4);
}

#[test]
fn test_raw_slice_views() {
    let mut raw = [1u64, 2, 3];
    assert_eq!(
        Word::from_raw_slice(&raw),
        &[Word::new(1), Word::new(2), Word::new(3)]
    );

    Word::from_raw_slice_mut(&mut raw)[1].insert(63);
    assert_eq!(raw[1], 2 | (1 << 63));
}

#[test]
fn test_conversions() {
    let word: Word = 42u64.into();
    assert_eq!(word.bits(), 42);
    let raw: u64 = word.into();
    assert_eq!(raw, 42);
}
