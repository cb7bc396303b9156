//! paintbucket-test - Regression test framework for paintbucket
//!
//! This crate provides a small regression harness supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! plus the image fixtures shared by the fill tests.
//!
//! # Usage
//!
//! ```ignore
//! use paintbucket_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("seedfill");
//! rp.compare_values(9.0, stats.pixels_filled as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{SimpleRng, noise_image, reference_fill_mask, ring_image};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // paintbucket-test is at crates/paintbucket-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
