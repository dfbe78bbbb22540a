//! Cyclic string similarity.
//!
//! Scores how close a candidate word is to an anchor when the candidate is
//! read cyclically. "trick" and "rickt" score 0: one is a rotation of the
//! other, and a solver who latches onto the wrong letter first hears
//! exactly that rotation.

/// Unit-cost edit distance (insert, delete, substitute).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let subst = prev[j] + usize::from(ca != cb);
            cur[j + 1] = subst.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Minimum edit distance between `b` and every rotation of `a`, the zero
/// rotation included.
///
/// Rotations apply to `a` only; clustering depends on that direction, so
/// keep the asymmetry.
pub fn cyclic_similarity(a: &str, b: &str) -> usize {
    let mut best = edit_distance(a, b);
    // pool words are ascii lowercase, byte rotation is safe
    for i in 1..a.len() {
        let rotated = format!("{}{}", &a[i..], &a[..i]);
        best = best.min(edit_distance(&rotated, b));
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("same", "same"), 0);
        assert_eq!(edit_distance("trick", "track"), 1);
    }

    #[test]
    fn rotations_cost_nothing() {
        assert_eq!(cyclic_similarity("abcde", "cdeab"), 0);
        assert_eq!(cyclic_similarity("trick", "rickt"), 0);
        assert_eq!(cyclic_similarity("lemon", "onlem"), 0);
    }

    #[test]
    fn identical_words_score_zero() {
        for word in ["a", "bistro", "strobe", "xylophone"] {
            assert_eq!(cyclic_similarity(word, word), 0);
        }
    }

    #[test]
    fn disjoint_words_score_the_longer_length() {
        assert_eq!(cyclic_similarity("abcde", "xyz"), 5);
    }
}
