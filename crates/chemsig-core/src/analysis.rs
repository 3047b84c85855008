//! Protein-pair evaluation — summary plus bootstrap significance.

use serde::Serialize;

use crate::bootstrap::{estimate_p, BootstrapConfig};
use crate::error::Result;
use crate::profile::Profile;
use crate::store::FingerprintStore;
use crate::summary::tanimoto_summary;

/// Observed Tanimoto summary of a protein pair and its bootstrap p-value.
#[derive(Debug, Clone, Serialize)]
pub struct PairSignificance {
    pub summary: f64,
    pub p_value: f64,
}

impl PairSignificance {
    /// Significance decision applied by downstream consumers.
    pub fn is_significant(&self, cutoff: f64) -> bool {
        self.p_value <= cutoff
    }
}

/// Compute the observed summary for two profiles and bootstrap its p-value
/// with random profiles of the same sizes.
pub fn evaluate_pair(
    store: &FingerprintStore,
    profile_a: &Profile,
    profile_b: &Profile,
    config: &BootstrapConfig,
) -> Result<PairSignificance> {
    let summary = tanimoto_summary(profile_a.drug_ids(), profile_b.drug_ids(), store);
    let p_value = estimate_p(store, profile_a.len(), profile_b.len(), summary, config)?;
    Ok(PairSignificance { summary, p_value })
}
