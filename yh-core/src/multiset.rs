//! Multiset operations over dice hands.
//!
//! A hand is a slice of die values in 1..=6, at most five of them. Order
//! never matters: every function here treats the slice as an unordered
//! multiset and returns the same result for any permutation of its input.

/// Count occurrences of each face. Index 0 is unused; `counts[f]` is the
/// number of dice showing face `f`.
pub fn face_counts(dice: &[u8]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &d in dice {
        debug_assert!((1..=6).contains(&d), "die value out of range: {}", d);
        counts[d as usize] += 1;
    }
    counts
}

/// How many dice show `face`.
pub fn count_of(dice: &[u8], face: u8) -> u8 {
    face_counts(dice)[face as usize]
}

/// Whether any die shows `face`.
pub fn contains_face(dice: &[u8], face: u8) -> bool {
    dice.contains(&face)
}

/// Sum of all die values.
pub fn sum(dice: &[u8]) -> u32 {
    dice.iter().map(|&d| d as u32).sum()
}

/// The distinct face values present, sorted ascending.
pub fn distinct(dice: &[u8]) -> Vec<u8> {
    let counts = face_counts(dice);
    (1u8..=6).filter(|&f| counts[f as usize] > 0).collect()
}

/// Number of distinct face values present.
pub fn distinct_count(dice: &[u8]) -> usize {
    distinct(dice).len()
}

/// The largest count of any single face (0 for an empty hand).
pub fn max_face_count(dice: &[u8]) -> u8 {
    face_counts(dice)[1..].iter().copied().max().unwrap_or(0)
}

/// Total "wasted" repeats: Σ over faces of max(count − 1, 0).
///
/// A hand aiming for a straight can afford at most a fixed number of these.
pub fn repeated_excess(dice: &[u8]) -> u8 {
    face_counts(dice)[1..]
        .iter()
        .map(|&c| c.saturating_sub(1))
        .sum()
}

/// Length of the longest run of consecutive distinct faces (0 for an empty
/// hand). Duplicates do not break a run: `[1,2,3,3,4]` has a run of 4.
pub fn longest_run(dice: &[u8]) -> u8 {
    let faces = distinct(dice);
    let mut longest = 0u8;
    let mut current = 0u8;
    let mut prev = 0u8;
    for f in faces {
        if current > 0 && f == prev + 1 {
            current += 1;
        } else {
            current = 1;
        }
        prev = f;
        longest = longest.max(current);
    }
    longest
}

/// Multiset intersection: the elements of `b` that can be matched 1:1
/// against the multiplicities of `a`. Result order follows `b`.
///
/// `intersection(&[3,3,5], &[5,3,5])` is `[5,3]`: the second 5 in `b`
/// has no partner left in `a`.
pub fn intersection(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut budget = face_counts(a);
    let mut out = Vec::with_capacity(b.len());
    for &d in b {
        if budget[d as usize] > 0 {
            budget[d as usize] -= 1;
            out.push(d);
        }
    }
    out
}

/// Multiset difference: the elements of `a` not matched 1:1 by `b`,
/// sorted ascending. Duplicates matter: `difference(&[3,3,4], &[3])`
/// is `[3,4]`, not `[4]`.
pub fn difference(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut budget = face_counts(b);
    let mut out: Vec<u8> = a
        .iter()
        .copied()
        .filter(|&d| {
            if budget[d as usize] > 0 {
                budget[d as usize] -= 1;
                false
            } else {
                true
            }
        })
        .collect();
    out.sort_unstable();
    out
}

/// Whether two hands contain the same dice, ignoring order.
pub fn unordered_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && face_counts(a) == face_counts(b)
}

/// Every non-decreasing sequence of `n` die values, in lexicographic order.
///
/// These are the combinations with repetition of `n` dice over six faces:
/// `C(n + 5, n)` sequences (252 for n = 5). `combinations(0)` is a single
/// empty sequence, so appending to a complete hand is a no-op enumeration.
pub fn combinations(n: usize) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(n);
    collect_combinations(n, 1, &mut current, &mut out);
    out
}

fn collect_combinations(n: usize, start: u8, current: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
    if n == 0 {
        out.push(current.clone());
        return;
    }
    for face in start..=6 {
        current.push(face);
        collect_combinations(n - 1, face, current, out);
        current.pop();
    }
}
