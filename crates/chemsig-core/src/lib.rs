//! chemsig-core — similarity-and-significance engine.
//!
//! Computes Tanimoto similarity between molecular fingerprints, aggregates
//! pairwise scores across two proteins' drug profiles, and estimates a
//! bootstrap p-value for the aggregate by random resampling.

pub mod analysis;
pub mod bootstrap;
pub mod error;
pub mod fingerprint;
pub mod pairwise;
pub mod profile;
pub mod similarity;
pub mod store;
pub mod summary;

// Re-export commonly used types
pub use analysis::{evaluate_pair, PairSignificance};
pub use bootstrap::{estimate_p, BootstrapConfig};
pub use error::{ChemsigError, Result};
pub use fingerprint::Fingerprint;
pub use profile::Profile;
pub use similarity::tanimoto;
pub use store::FingerprintStore;
pub use summary::{tanimoto_summary, SIMILARITY_THRESHOLD};
