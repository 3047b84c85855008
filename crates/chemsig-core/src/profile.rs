//! Drug profiles — the drugs known to bind one protein.

use serde::Serialize;

/// Ordered list of drug ids bound to one protein.
///
/// Duplicates are preserved: a drug that binds the protein through several
/// records appears once per record, and each occurrence participates in the
/// summary cross-product.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Profile {
    protein_id: String,
    drug_ids: Vec<String>,
}

impl Profile {
    pub fn new(protein_id: impl Into<String>, drug_ids: Vec<String>) -> Self {
        Self {
            protein_id: protein_id.into(),
            drug_ids,
        }
    }

    /// Build a profile by filtering `(drug_id, protein_id)` pairs on protein
    /// id equality, keeping input order.
    pub fn from_pairs<'a, I>(protein_id: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let drug_ids = pairs
            .into_iter()
            .filter(|(_, prot)| *prot == protein_id)
            .map(|(drug, _)| drug.to_string())
            .collect();
        Self {
            protein_id: protein_id.to_string(),
            drug_ids,
        }
    }

    pub fn protein_id(&self) -> &str {
        &self.protein_id
    }

    pub fn drug_ids(&self) -> &[String] {
        &self.drug_ids
    }

    pub fn len(&self) -> usize {
        self.drug_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drug_ids.is_empty()
    }
}
