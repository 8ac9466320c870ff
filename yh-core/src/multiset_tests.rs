use crate::multiset::*;

#[test]
fn face_counts_and_lookups() {
    let dice = [1, 1, 2, 3, 3];
    let counts = face_counts(&dice);
    assert_eq!(counts[1], 2);
    assert_eq!(counts[2], 1);
    assert_eq!(counts[3], 2);
    assert_eq!(counts[4], 0);

    assert_eq!(count_of(&dice, 3), 2);
    assert!(contains_face(&dice, 2));
    assert!(!contains_face(&dice, 6));
    assert_eq!(sum(&dice), 10);
}

#[test]
fn order_never_affects_results() {
    let a = [5, 3, 1, 4, 2];
    let b = [1, 2, 3, 4, 5];
    assert_eq!(face_counts(&a), face_counts(&b));
    assert_eq!(longest_run(&a), longest_run(&b));
    assert!(unordered_eq(&a, &b));
}

#[test]
fn distinct_and_repeats() {
    assert_eq!(distinct(&[4, 2, 4, 2, 6]), vec![2, 4, 6]);
    assert_eq!(distinct_count(&[4, 2, 4, 2, 6]), 3);
    assert_eq!(max_face_count(&[4, 2, 4, 2, 6]), 2);
    assert_eq!(max_face_count(&[]), 0);

    // Two pairs waste two dice; a triple wastes two.
    assert_eq!(repeated_excess(&[4, 2, 4, 2, 6]), 2);
    assert_eq!(repeated_excess(&[3, 3, 3, 1, 2]), 2);
    assert_eq!(repeated_excess(&[1, 2, 3, 4, 5]), 0);
}

#[test]
fn longest_run_over_distinct_values() {
    assert_eq!(longest_run(&[1, 2, 3, 4, 5]), 5);
    assert_eq!(longest_run(&[1, 2, 3, 3, 4]), 4);
    assert_eq!(longest_run(&[2, 2, 4, 5, 6]), 3);
    assert_eq!(longest_run(&[6, 6, 6, 6, 6]), 1);
    assert_eq!(longest_run(&[1, 3, 5, 2, 6]), 3);
    assert_eq!(longest_run(&[]), 0);
}

#[test]
fn intersection_respects_multiplicity_and_follows_second_arg() {
    assert_eq!(intersection(&[3, 3, 5], &[5, 3, 5]), vec![5, 3]);
    assert_eq!(intersection(&[3, 4, 4], &[4, 4, 4]), vec![4, 4]);
    assert_eq!(intersection(&[1, 2], &[3, 4]), Vec::<u8>::new());
    assert_eq!(intersection(&[], &[1, 2]), Vec::<u8>::new());
}

#[test]
fn difference_is_multiset_not_set() {
    assert_eq!(difference(&[3, 3, 4], &[3]), vec![3, 4]);
    assert_eq!(difference(&[3, 3, 3, 5, 5], &[3, 4, 5]), vec![3, 3, 5]);
    assert_eq!(difference(&[1, 2, 3], &[1, 2, 3]), Vec::<u8>::new());
    assert_eq!(difference(&[], &[1]), Vec::<u8>::new());
    // Result is sorted regardless of input order.
    assert_eq!(difference(&[5, 1, 3], &[3]), vec![1, 5]);
}

#[test]
fn unordered_eq_counts_duplicates() {
    assert!(unordered_eq(&[1, 1, 2], &[2, 1, 1]));
    assert!(!unordered_eq(&[1, 1, 2], &[1, 2, 2]));
    assert!(!unordered_eq(&[1, 2], &[1, 2, 2]));
    assert!(unordered_eq(&[], &[]));
}

#[test]
fn combinations_counts_match_binomials() {
    // C(n + 5, n) for n dice over six faces.
    let expected = [1usize, 6, 21, 56, 126, 252];
    for (n, &want) in expected.iter().enumerate() {
        let combos = combinations(n);
        assert_eq!(combos.len(), want, "n = {}", n);
        for c in &combos {
            assert_eq!(c.len(), n);
            assert!(c.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", c);
            assert!(c.iter().all(|&d| (1..=6).contains(&d)));
        }
        // Lexicographic and therefore distinct.
        assert!(combos.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn combinations_zero_is_single_empty_sequence() {
    assert_eq!(combinations(0), vec![Vec::<u8>::new()]);
}
