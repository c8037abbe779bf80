//! Shared utilities for CLI commands.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A fixed seed makes a run repeatable; otherwise seed from the OS.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
