//! Core library: seeded lane hashing engine, one-shot adapter, and the API
//! surface used by the CLI and the C ABI.

use once_cell::sync::Lazy;
use serde::Serialize;

pub mod config;
pub mod digest;
pub mod errors;
pub mod fixed;
mod lanes;
pub mod oneshot;
pub mod stream;
pub mod width;

pub use digest::Digest;
pub use errors::{MeowError, Result};
pub use fixed::{hash_one_shot, LaneHash, MeowHash128, MeowHash256, MeowHash512};
pub use oneshot::{hash, try_hash};
pub use stream::{Hasher, StreamPhase};
pub use width::HashWidth;

/// Public width metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidthInfo {
    pub bits: u32,
    pub lanes: usize,
    pub digest_size: usize,
    pub block_size: usize,
}

impl From<HashWidth> for WidthInfo {
    fn from(width: HashWidth) -> Self {
        Self {
            bits: width.bits(),
            lanes: width.lanes(),
            digest_size: width.digest_size(),
            block_size: width.block_size(),
        }
    }
}

static WIDTHS: Lazy<Vec<WidthInfo>> =
    Lazy::new(|| HashWidth::ALL.iter().copied().map(WidthInfo::from).collect());

/// API: list supported widths
pub fn list_widths() -> &'static [WidthInfo] {
    WIDTHS.as_slice()
}

/// Version helper for CLI/FFI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
