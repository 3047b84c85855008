//! Subcommand implementations. All file output happens here; the core only
//! produces scores and decisions.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use chemsig_core::{evaluate_pair, pairwise, BootstrapConfig, Profile};
use chemsig_ingestion::{
    build_store, load_drugs, load_protein_nodes, load_targets, target_index, TargetRecord,
};

fn profile_for(protein_id: &str, targets: &[TargetRecord]) -> Profile {
    Profile::from_pairs(
        protein_id,
        targets
            .iter()
            .map(|t| (t.drug_id.as_str(), t.protein_id.as_str())),
    )
}

fn warn_missing_fingerprints(profile: &Profile, store: &chemsig_core::FingerprintStore) {
    for drug in profile.drug_ids() {
        if !store.contains(drug) {
            warn!(
                drug = %drug,
                protein = profile.protein_id(),
                "profile drug has no fingerprint; treated as empty set"
            );
        }
    }
}

pub fn run_pvalue(
    drugs: &Path,
    targets: &Path,
    prot_a: &str,
    prot_b: &str,
    trials: usize,
    seed: u64,
    json: bool,
) -> anyhow::Result<()> {
    let store = build_store(&load_drugs(drugs)?);
    let target_records = load_targets(targets)?;

    let profile_a = profile_for(prot_a, &target_records);
    let profile_b = profile_for(prot_b, &target_records);
    info!(
        prot_a,
        size_a = profile_a.len(),
        prot_b,
        size_b = profile_b.len(),
        trials,
        seed,
        "comparing protein profiles"
    );
    warn_missing_fingerprints(&profile_a, &store);
    warn_missing_fingerprints(&profile_b, &store);

    let config = BootstrapConfig { trials, seed };
    let result = evaluate_pair(&store, &profile_a, &profile_b, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.p_value);
    }
    Ok(())
}

pub fn run_pairs(drugs: &Path, targets: &Path, output: &Path) -> anyhow::Result<()> {
    let drug_records = load_drugs(drugs)?;
    let store = build_store(&drug_records);
    let index = target_index(&load_targets(targets)?);

    let ids: Vec<String> = drug_records.iter().map(|r| r.drug_id.clone()).collect();
    let rows = pairwise::compare_all_pairs(&ids, &store, &index);

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("cannot write {}", output.display()))?;
    for row in &rows {
        let score = format!("{:.6}", row.score);
        writer.write_record([
            row.drug_a.as_str(),
            row.drug_b.as_str(),
            score.as_str(),
            if row.shares_target { "1" } else { "0" },
        ])?;
    }
    writer.flush()?;
    info!(pairs = rows.len(), output = %output.display(), "wrote pairwise report");
    Ok(())
}

pub fn run_network(
    drugs: &Path,
    targets: &Path,
    nodes: &Path,
    output: &Path,
    trials: usize,
    seed: u64,
    cutoff: f64,
) -> anyhow::Result<()> {
    let store = build_store(&load_drugs(drugs)?);
    let target_records = load_targets(targets)?;
    let protein_nodes = load_protein_nodes(nodes)?;
    let config = BootstrapConfig { trials, seed };

    let file = File::create(output)
        .with_context(|| format!("cannot write {}", output.display()))?;
    let mut out = BufWriter::new(file);

    let mut edges = 0usize;
    for (i, node_a) in protein_nodes.iter().enumerate() {
        let profile_a = profile_for(&node_a.accession, &target_records);
        for node_b in &protein_nodes[i + 1..] {
            let profile_b = profile_for(&node_b.accession, &target_records);
            let result = evaluate_pair(&store, &profile_a, &profile_b, &config)?;
            if result.is_significant(cutoff) {
                writeln!(out, "{} {}", node_a.accession, node_b.accession)?;
                edges += 1;
                info!(
                    prot_a = %node_a.accession,
                    prot_b = %node_b.accession,
                    p_value = result.p_value,
                    "significant pair"
                );
            }
        }
    }
    out.flush()?;
    info!(edges, output = %output.display(), "wrote edge list");
    Ok(())
}
