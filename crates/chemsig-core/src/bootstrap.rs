//! Bootstrap p-value estimation for Tanimoto summaries.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{ChemsigError, Result};
use crate::store::FingerprintStore;
use crate::summary::tanimoto_summary;

pub const DEFAULT_TRIALS: usize = 500;
pub const DEFAULT_SEED: u64 = 214;

/// Resampling parameters for one estimation call.
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapConfig {
    /// Number of random resampling trials.
    pub trials: usize,
    /// Seed for the owned generator; identical seed, trials, and store
    /// contents give an identical p-value.
    pub seed: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Empirical p-value of an observed Tanimoto summary.
///
/// Each trial draws `size_a` and `size_b` drug ids uniformly with
/// replacement from the store's full id universe, recomputes the summary
/// over the two random profiles, and counts trials whose summary strictly
/// exceeds `observed`. The returned fraction is in [0, 1], with Monte-Carlo
/// standard error roughly `sqrt(p(1-p)/trials)`.
///
/// The generator is owned by this call and seeded from `config.seed`; no
/// global randomness is touched, so concurrent estimations cannot interfere.
pub fn estimate_p(
    store: &FingerprintStore,
    size_a: usize,
    size_b: usize,
    observed: f64,
    config: &BootstrapConfig,
) -> Result<f64> {
    if config.trials == 0 {
        return Err(ChemsigError::Config(
            "bootstrap trial count must be positive".to_string(),
        ));
    }
    let universe = store.ids();
    if universe.is_empty() && (size_a > 0 || size_b > 0) {
        return Err(ChemsigError::Config(
            "fingerprint store is empty; nothing to resample".to_string(),
        ));
    }

    tracing::debug!(
        trials = config.trials,
        seed = config.seed,
        universe = universe.len(),
        size_a,
        size_b,
        "bootstrapping p-value"
    );
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut exceeded = 0usize;
    for _ in 0..config.trials {
        let sample_a = draw_with_replacement(&mut rng, universe, size_a);
        let sample_b = draw_with_replacement(&mut rng, universe, size_b);
        if tanimoto_summary(&sample_a, &sample_b, store) > observed {
            exceeded += 1;
        }
    }
    Ok(exceeded as f64 / config.trials as f64)
}

fn draw_with_replacement<'a>(
    rng: &mut StdRng,
    universe: &'a [String],
    k: usize,
) -> Vec<&'a str> {
    (0..k)
        .map(|_| universe[rng.gen_range(0..universe.len())].as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::Fingerprint;

    fn store() -> FingerprintStore {
        FingerprintStore::build(vec![
            ("t1".to_string(), Fingerprint::parse("a b c")),
            ("t2".to_string(), Fingerprint::parse("a b c")),
            ("u1".to_string(), Fingerprint::parse("p q")),
            ("u2".to_string(), Fingerprint::parse("r s")),
        ])
    }

    fn config(trials: usize, seed: u64) -> BootstrapConfig {
        BootstrapConfig { trials, seed }
    }

    #[test]
    fn test_zero_trials_rejected() {
        let s = store();
        let err = estimate_p(&s, 1, 1, 0.0, &config(0, 214)).unwrap_err();
        assert!(matches!(err, ChemsigError::Config(_)));
    }

    #[test]
    fn test_empty_store_with_nonzero_sizes_rejected() {
        let s = FingerprintStore::default();
        let err = estimate_p(&s, 2, 3, 0.0, &config(10, 214)).unwrap_err();
        assert!(matches!(err, ChemsigError::Config(_)));
    }

    #[test]
    fn test_result_in_unit_interval() {
        let s = store();
        let p = estimate_p(&s, 2, 2, 0.5, &BootstrapConfig::default()).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_same_seed_same_result() {
        let s = store();
        let a = estimate_p(&s, 3, 2, 1.0, &config(200, 99)).unwrap();
        let b = estimate_p(&s, 3, 2, 1.0, &config(200, 99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unreachable_observed_gives_zero() {
        let s = store();
        // Max possible summary for 1x1 profiles is 1.0, never > 10.0.
        let p = estimate_p(&s, 1, 1, 10.0, &config(100, 214)).unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_negative_observed_gives_one() {
        let s = store();
        // Every resampled summary is >= 0.0, so all strictly exceed -1.0.
        let p = estimate_p(&s, 1, 1, -1.0, &config(100, 214)).unwrap();
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_zero_sized_profiles_ok() {
        let s = store();
        // Empty samples always summarize to 0.0, never strictly above it.
        let p = estimate_p(&s, 0, 0, 0.0, &config(50, 214)).unwrap();
        assert_eq!(p, 0.0);
    }

    fn sample_variance(values: &[f64]) -> f64 {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
    }

    #[test]
    fn test_variance_shrinks_with_more_trials() {
        let s = store();
        // True exceedance probability for 1x1 profiles and observed 0.5 is
        // 6/16; estimates at 1000 trials should scatter far less across
        // seeds than estimates at 50 trials.
        let seeds: Vec<u64> = (0..25).map(|i| 100 + i * 7).collect();
        let few: Vec<f64> = seeds
            .iter()
            .map(|&r| estimate_p(&s, 1, 1, 0.5, &config(50, r)).unwrap())
            .collect();
        let many: Vec<f64> = seeds
            .iter()
            .map(|&r| estimate_p(&s, 1, 1, 0.5, &config(1000, r)).unwrap())
            .collect();
        assert!(sample_variance(&many) < sample_variance(&few));
    }
}
