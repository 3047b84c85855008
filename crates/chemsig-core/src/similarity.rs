//! Tanimoto (intersection-over-union) similarity between fingerprints.

use crate::fingerprint::Fingerprint;

/// Tanimoto coefficient `|a ∩ b| / |a ∪ b|` in [0, 1].
///
/// When both fingerprints are empty the coefficient is undefined; this
/// implementation returns 0.0 so degenerate pairs never contribute to a
/// summary and never divide by zero.
pub fn tanimoto(a: &Fingerprint, b: &Fingerprint) -> f64 {
    let union = a.union_len(b);
    if union == 0 {
        return 0.0;
    }
    a.intersection_len(b) as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetry() {
        let a = Fingerprint::parse("1 2 3 4");
        let b = Fingerprint::parse("3 4 5");
        assert_eq!(tanimoto(&a, &b), tanimoto(&b, &a));
    }

    #[test]
    fn test_self_similarity_is_one() {
        let a = Fingerprint::parse("x y z");
        assert_eq!(tanimoto(&a, &a), 1.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let a = Fingerprint::parse("1 2");
        let b = Fingerprint::parse("3 4");
        assert_eq!(tanimoto(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // |{b,c}| / |{a,b,c,d}| = 2/4
        let a = Fingerprint::parse("a b c");
        let b = Fingerprint::parse("b c d");
        assert_eq!(tanimoto(&a, &b), 0.5);
    }

    #[test]
    fn test_both_empty_is_zero() {
        let a = Fingerprint::default();
        let b = Fingerprint::default();
        assert_eq!(tanimoto(&a, &b), 0.0);
    }

    #[test]
    fn test_one_empty_is_zero() {
        let a = Fingerprint::parse("1 2 3");
        assert_eq!(tanimoto(&a, &Fingerprint::default()), 0.0);
    }

    #[test]
    fn test_range() {
        let pairs = [
            ("1", "1 2 3"),
            ("1 2 3 4 5", "4 5 6"),
            ("q", "q"),
        ];
        for (x, y) in pairs {
            let s = tanimoto(&Fingerprint::parse(x), &Fingerprint::parse(y));
            assert!((0.0..=1.0).contains(&s), "out of range: {s}");
        }
    }
}
