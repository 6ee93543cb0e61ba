//! Fixed-width hashers with array digests.
//!
//! These wrap the same lane primitives as [`crate::Hasher`], but the width is
//! a type and `finalize` takes `self`, so a session cannot be finalized twice.

use crate::lanes::{Accumulator, LanePrimitives};
use crate::width::HashWidth;

/// A streaming hash with a compile-time width.
pub trait LaneHash {
    const WIDTH: HashWidth;
    type Output: AsRef<[u8]> + Copy + Eq + std::fmt::Debug;

    /// Create a hasher with seed 0.
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::with_seed(0)
    }
    fn with_seed(seed: u64) -> Self
    where
        Self: Sized;
    /// Absorb bytes into the state.
    fn update(&mut self, data: &[u8]);
    /// Finalize and produce the digest.
    fn finalize(self) -> Self::Output;
}

/// Compute a one-shot hash.
pub fn hash_one_shot<H: LaneHash>(seed: u64, data: &[u8]) -> H::Output {
    let mut h = H::with_seed(seed);
    h.update(data);
    h.finalize()
}

macro_rules! lane_hasher {
    ($name:ident, $width:expr, $len:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug)]
        pub struct $name {
            acc: Accumulator,
        }

        impl $name {
            const PRIMITIVES: &'static LanePrimitives = $width.primitives();
        }

        impl LaneHash for $name {
            const WIDTH: HashWidth = $width;
            type Output = [u8; $len];

            fn with_seed(seed: u64) -> Self {
                Self {
                    acc: (Self::PRIMITIVES.init)(seed),
                }
            }

            fn update(&mut self, data: &[u8]) {
                (Self::PRIMITIVES.update)(&mut self.acc, data);
            }

            fn finalize(self) -> [u8; $len] {
                let digest = (Self::PRIMITIVES.flush)(&self.acc);
                let mut out = [0u8; $len];
                out.copy_from_slice(digest.as_bytes());
                out
            }
        }
    };
}

lane_hasher!(MeowHash128, HashWidth::W128, 16, "128-bit lane hasher.");
lane_hasher!(MeowHash256, HashWidth::W256, 32, "256-bit lane hasher.");
lane_hasher!(MeowHash512, HashWidth::W512, 64, "512-bit lane hasher.");
