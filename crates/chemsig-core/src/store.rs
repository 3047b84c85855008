//! Fingerprint store — maps drug ids to their fingerprints and owns the
//! id universe that bootstrap resampling draws from.

use std::collections::HashMap;

use crate::fingerprint::Fingerprint;

/// Read-only mapping from drug id to fingerprint.
///
/// Built once from the drug file, then shared by every summary and bootstrap
/// computation in a run.
#[derive(Debug, Clone, Default)]
pub struct FingerprintStore {
    fingerprints: HashMap<String, Fingerprint>,
    ids: Vec<String>,
    empty: Fingerprint,
}

impl FingerprintStore {
    /// Build a store from `(id, fingerprint)` records.
    ///
    /// Duplicate ids are allowed; the last record for an id wins.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, Fingerprint)>,
    {
        let mut fingerprints = HashMap::new();
        for (id, fp) in records {
            fingerprints.insert(id, fp);
        }
        let mut ids: Vec<String> = fingerprints.keys().cloned().collect();
        // Sorted so the resampling universe has a stable order regardless of
        // hash-map iteration order.
        ids.sort();
        Self {
            fingerprints,
            ids,
            empty: Fingerprint::default(),
        }
    }

    /// Fingerprint for `id`, or the empty fingerprint when the id is unknown.
    ///
    /// Profiles built from real data may reference drugs absent from the drug
    /// file. Those are deliberately treated as empty sets: their similarity
    /// to anything is 0 and they contribute nothing to a summary. Callers
    /// that want to surface the gap can check [`contains`](Self::contains)
    /// first.
    pub fn lookup(&self, id: &str) -> &Fingerprint {
        self.fingerprints.get(id).unwrap_or(&self.empty)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fingerprints.contains_key(id)
    }

    /// Sorted drug-id universe. Bootstrap samples are drawn from this full
    /// key set, not just the drugs with known targets.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}
