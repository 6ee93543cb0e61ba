//! Lane width selection and the width -> primitive dispatch table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MeowError;
use crate::lanes::{self, LanePrimitives};

/// Internal lane width of a hash session.
///
/// Each width is an independent algorithm variant with its own accumulator
/// size and (init, update, flush) triple. Serialized as the bare bit count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum HashWidth {
    #[default]
    W128,
    W256,
    W512,
}

impl HashWidth {
    pub const ALL: [HashWidth; 3] = [HashWidth::W128, HashWidth::W256, HashWidth::W512];

    /// Validate an integer width coming from a caller.
    pub fn from_bits(bits: i64) -> Result<Self, MeowError> {
        match bits {
            128 => Ok(HashWidth::W128),
            256 => Ok(HashWidth::W256),
            512 => Ok(HashWidth::W512),
            other => Err(MeowError::InvalidWidth(other)),
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            HashWidth::W128 => 128,
            HashWidth::W256 => 256,
            HashWidth::W512 => 512,
        }
    }

    /// Digest length in bytes. Depends on nothing but the width.
    pub const fn digest_size(self) -> usize {
        self.primitives().digest_size
    }

    /// Bytes consumed per lane compression.
    pub const fn block_size(self) -> usize {
        self.primitives().block_size
    }

    /// Number of 64-bit accumulator lanes.
    pub const fn lanes(self) -> usize {
        self.primitives().lanes
    }

    pub(crate) const fn primitives(self) -> &'static LanePrimitives {
        match self {
            HashWidth::W128 => &lanes::lane128::PRIMITIVES,
            HashWidth::W256 => &lanes::lane256::PRIMITIVES,
            HashWidth::W512 => &lanes::lane512::PRIMITIVES,
        }
    }
}

impl fmt::Display for HashWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<i64> for HashWidth {
    type Error = MeowError;

    fn try_from(bits: i64) -> Result<Self, Self::Error> {
        HashWidth::from_bits(bits)
    }
}

impl TryFrom<i32> for HashWidth {
    type Error = MeowError;

    fn try_from(bits: i32) -> Result<Self, Self::Error> {
        HashWidth::from_bits(i64::from(bits))
    }
}

impl TryFrom<u32> for HashWidth {
    type Error = MeowError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        HashWidth::from_bits(i64::from(bits))
    }
}

impl From<HashWidth> for i64 {
    fn from(width: HashWidth) -> Self {
        i64::from(width.bits())
    }
}

impl FromStr for HashWidth {
    type Err = MeowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bits: i64 = trimmed
            .parse()
            .map_err(|_| MeowError::InvalidArgument(format!("width '{trimmed}' is not an integer")))?;
        HashWidth::from_bits(bits)
    }
}
