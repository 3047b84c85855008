//! All-pairs drug comparison with shared-target annotation.

use std::collections::HashMap;

use serde::Serialize;

use crate::similarity::tanimoto;
use crate::store::FingerprintStore;

/// Offset added to every reported score so downstream 6-decimal renderings
/// of exact zeros stay distinguishable from absent rows.
pub const SCORE_EPSILON: f64 = 1e-9;

/// One row of the all-pairs drug report.
#[derive(Debug, Clone, Serialize)]
pub struct PairComparison {
    pub drug_a: String,
    pub drug_b: String,
    pub score: f64,
    pub shares_target: bool,
}

/// Score every unordered pair of drugs, in input order, and flag pairs whose
/// drugs share at least one target protein.
///
/// `target_index` maps drug id to the proteins it binds; drugs absent from
/// it simply never share a target.
pub fn compare_all_pairs(
    drug_ids: &[String],
    store: &FingerprintStore,
    target_index: &HashMap<String, Vec<String>>,
) -> Vec<PairComparison> {
    let mut rows = Vec::with_capacity(drug_ids.len().saturating_sub(1) * drug_ids.len() / 2);
    for (i, a) in drug_ids.iter().enumerate() {
        let fp_a = store.lookup(a);
        for b in &drug_ids[i + 1..] {
            let score = tanimoto(fp_a, store.lookup(b)) + SCORE_EPSILON;
            rows.push(PairComparison {
                drug_a: a.clone(),
                drug_b: b.clone(),
                score,
                shares_target: shares_target(a, b, target_index),
            });
        }
    }
    rows
}

fn shares_target(a: &str, b: &str, target_index: &HashMap<String, Vec<String>>) -> bool {
    match (target_index.get(a), target_index.get(b)) {
        (Some(prots_a), Some(prots_b)) => prots_a.iter().any(|p| prots_b.contains(p)),
        _ => false,
    }
}
