//! chemsig-ingestion — CSV loading for the similarity engine.
//!
//! Parses the three input relations (drugs with fingerprints, drug-target
//! bindings, protein nodes) into the core types. Structurally invalid rows
//! are fatal; semantically missing data (a profile drug with no fingerprint
//! row) is handled leniently by the core.

pub mod loader;
pub mod models;

pub use loader::{build_store, load_drugs, load_protein_nodes, load_targets, target_index};
pub use models::{DrugRecord, ProteinNode, TargetRecord};
