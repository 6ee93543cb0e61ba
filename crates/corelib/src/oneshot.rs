//! One-shot hashing on top of the streaming engine.

use crate::digest::Digest;
use crate::errors::Result;
use crate::width::HashWidth;

/// Hash a complete buffer. Same bytes as a [`crate::Hasher`] fed `data` in
/// any number of pieces.
pub fn hash(width: HashWidth, data: &[u8], seed: u64) -> Digest {
    let primitives = width.primitives();
    let mut acc = (primitives.init)(seed);
    (primitives.update)(&mut acc, data);
    (primitives.flush)(&acc)
}

/// [`hash`] for an untyped width.
pub fn try_hash(bits: i64, data: &[u8], seed: u64) -> Result<Digest> {
    let width = HashWidth::from_bits(bits)?;
    Ok(hash(width, data, seed))
}
