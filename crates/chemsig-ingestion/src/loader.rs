//! CSV loaders. Header rows are always skipped; rows with too few columns
//! surface as parse errors rather than being silently dropped.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use chemsig_core::{ChemsigError, Fingerprint, FingerprintStore, Result};

use crate::models::{DrugRecord, ProteinNode, TargetRecord};

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path)?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

fn field<'r>(record: &'r StringRecord, idx: usize, what: &str) -> Result<&'r str> {
    record.get(idx).ok_or_else(|| {
        ChemsigError::Parse(format!(
            "{what}: expected at least {} columns, found {} (line {})",
            idx + 1,
            record.len(),
            record.position().map(|p| p.line()).unwrap_or(0),
        ))
    })
}

/// Load the drug-fingerprint relation.
pub fn load_drugs(path: impl AsRef<Path>) -> Result<Vec<DrugRecord>> {
    let mut reader = open_reader(path.as_ref())?;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(DrugRecord {
            drug_id: field(&record, 0, "drug file")?.to_string(),
            generic_name: field(&record, 1, "drug file")?.to_string(),
            fingerprint: field(&record, 2, "drug file")?.to_string(),
        });
    }
    debug!(rows = rows.len(), "loaded drug fingerprint records");
    Ok(rows)
}

/// Load the drug-target relation. Columns past the second are ignored.
pub fn load_targets(path: impl AsRef<Path>) -> Result<Vec<TargetRecord>> {
    let mut reader = open_reader(path.as_ref())?;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(TargetRecord {
            drug_id: field(&record, 0, "target file")?.to_string(),
            protein_id: field(&record, 1, "target file")?.to_string(),
        });
    }
    debug!(rows = rows.len(), "loaded drug-target records");
    Ok(rows)
}

/// Load the protein node list.
pub fn load_protein_nodes(path: impl AsRef<Path>) -> Result<Vec<ProteinNode>> {
    let mut reader = open_reader(path.as_ref())?;
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(ProteinNode {
            accession: field(&record, 0, "protein node file")?.to_string(),
            uniprot_id: field(&record, 1, "protein node file")?.to_string(),
            indication: field(&record, 2, "protein node file")?.trim().to_string(),
        });
    }
    debug!(rows = rows.len(), "loaded protein nodes");
    Ok(rows)
}

/// Build a fingerprint store from loaded drug records (last write wins on
/// duplicate ids).
pub fn build_store(records: &[DrugRecord]) -> FingerprintStore {
    FingerprintStore::build(
        records
            .iter()
            .map(|r| (r.drug_id.clone(), Fingerprint::parse(&r.fingerprint))),
    )
}

/// Index target records by drug: drug id → protein ids it binds.
pub fn target_index(records: &[TargetRecord]) -> HashMap<String, Vec<String>> {
    let mut index: HashMap<String, Vec<String>> = HashMap::new();
    for record in records {
        index
            .entry(record.drug_id.clone())
            .or_default()
            .push(record.protein_id.clone());
    }
    index
}
