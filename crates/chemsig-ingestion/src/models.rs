//! Record types for the input CSV relations.

use serde::Serialize;

/// Row of the drug file: `id,generic_name,fingerprint_tokens`.
/// Fingerprint tokens are whitespace separated within the third column.
#[derive(Debug, Clone, Serialize)]
pub struct DrugRecord {
    pub drug_id: String,
    pub generic_name: String,
    pub fingerprint: String,
}

/// Row of the target file: `drug_id,protein_id,...`.
/// Trailing columns beyond the first two are tolerated and ignored.
#[derive(Debug, Clone, Serialize)]
pub struct TargetRecord {
    pub drug_id: String,
    pub protein_id: String,
}

/// Row of the protein node file: `accession,uniprot_id,indication`.
#[derive(Debug, Clone, Serialize)]
pub struct ProteinNode {
    pub accession: String,
    pub uniprot_id: String,
    pub indication: String,
}
