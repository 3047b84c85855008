//! Tanimoto summary — the per-protein-pair aggregate score.

use crate::similarity::tanimoto;
use crate::store::FingerprintStore;

/// Pairwise scores must strictly exceed this to count toward a summary.
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Sum of above-threshold Tanimoto scores over the full cross-product of two
/// drug profiles.
///
/// Every ordered pair is scored, repeated ids included; scores of exactly
/// 0.5 or below are discarded. The result is a sum, not an average: protein
/// pairs with larger, more overlapping profiles get larger raw summaries,
/// and the bootstrap accounts for profile size when judging significance.
/// An empty profile on either side yields 0.0.
pub fn tanimoto_summary<A, B>(drugs_a: &[A], drugs_b: &[B], store: &FingerprintStore) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut sum = 0.0;
    for a in drugs_a {
        let fp_a = store.lookup(a.as_ref());
        for b in drugs_b {
            let score = tanimoto(fp_a, store.lookup(b.as_ref()));
            if score > SIMILARITY_THRESHOLD {
                sum += score;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::Fingerprint;

    fn store() -> FingerprintStore {
        FingerprintStore::build(vec![
            ("d1".to_string(), Fingerprint::parse("a b c")),
            ("d2".to_string(), Fingerprint::parse("b c d")),
            ("d3".to_string(), Fingerprint::parse("x y")),
        ])
    }

    #[test]
    fn test_score_at_threshold_is_discarded() {
        // tanimoto(d1, d2) = 2/4 = 0.5 exactly, not strictly greater
        let s = store();
        assert_eq!(tanimoto_summary(&["d1"], &["d2"], &s), 0.0);
    }

    #[test]
    fn test_identical_profiles_count() {
        let s = store();
        assert_eq!(tanimoto_summary(&["d1"], &["d1"], &s), 1.0);
    }

    #[test]
    fn test_empty_profile_yields_zero() {
        let s = store();
        let none: [&str; 0] = [];
        assert_eq!(tanimoto_summary(&none, &["d1", "d2"], &s), 0.0);
        assert_eq!(tanimoto_summary(&["d1"], &none, &s), 0.0);
    }

    #[test]
    fn test_duplicates_multiply_contributions() {
        let s = store();
        // Two copies of d1 against one d1: two pairs, each scoring 1.0.
        assert_eq!(tanimoto_summary(&["d1", "d1"], &["d1"], &s), 2.0);
    }

    #[test]
    fn test_missing_drug_contributes_nothing() {
        let s = store();
        assert_eq!(tanimoto_summary(&["nope"], &["d1", "d2", "d3"], &s), 0.0);
    }

    #[test]
    fn test_never_negative() {
        let s = store();
        let summary = tanimoto_summary(&["d1", "d2", "d3"], &["d1", "d2", "d3"], &s);
        assert!(summary >= 0.0);
    }
}
