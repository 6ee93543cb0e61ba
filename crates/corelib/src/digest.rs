//! Fixed-size digest produced by a finalized stream.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::lanes::MAX_BLOCK;
use crate::width::HashWidth;

/// Digest bytes in the lane layout emitted by the flush primitive.
///
/// The length is `width.digest_size()` and nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    width: HashWidth,
    bytes: [u8; MAX_BLOCK],
}

impl Digest {
    /// `bytes` beyond the width's digest size must be zero.
    pub(crate) fn from_lane_bytes(width: HashWidth, bytes: [u8; MAX_BLOCK]) -> Self {
        debug_assert!(bytes[width.digest_size()..].iter().all(|b| *b == 0));
        Self { width, bytes }
    }

    pub fn width(&self) -> HashWidth {
        self.width
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.width.digest_size()]
    }

    pub fn len(&self) -> usize {
        self.width.digest_size()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}:{})", self.width, self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
