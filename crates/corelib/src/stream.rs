//! Incremental hash sessions.
//!
//! A [`Hasher`] moves through two phases: `Open`, where it owns its
//! accumulator and accepts data, and `Finalized`, where the accumulator has
//! been flushed and dropped. Finalization is single-use; every call after it
//! fails with [`MeowError::InvalidState`] and changes nothing.

use std::io;

use log::{debug, trace};

use crate::digest::Digest;
use crate::errors::{MeowError, Result};
use crate::lanes::{Accumulator, LanePrimitives};
use crate::width::HashWidth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    Open,
    Finalized,
}

#[derive(Debug)]
enum Slot {
    Open(Accumulator),
    Finalized,
}

/// Streaming hash session with a width fixed at construction.
#[derive(Debug)]
pub struct Hasher {
    primitives: &'static LanePrimitives,
    seed: u64,
    bytes_hashed: u64,
    slot: Slot,
}

impl Hasher {
    /// Open a session with the default seed (0).
    pub fn new(width: HashWidth) -> Self {
        Self::with_seed(width, 0)
    }

    pub fn with_seed(width: HashWidth, seed: u64) -> Self {
        let primitives = width.primitives();
        debug!("opening meowhash-{width} stream (seed={seed:#x})");
        Self {
            primitives,
            seed,
            bytes_hashed: 0,
            slot: Slot::Open((primitives.init)(seed)),
        }
    }

    /// Open a session from an untyped width, as handed over by a host.
    pub fn try_new(bits: i64, seed: u64) -> Result<Self> {
        let width = HashWidth::from_bits(bits)?;
        Ok(Self::with_seed(width, seed))
    }

    pub fn width(&self) -> HashWidth {
        self.primitives.width
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> StreamPhase {
        match self.slot {
            Slot::Open(_) => StreamPhase::Open,
            Slot::Finalized => StreamPhase::Finalized,
        }
    }

    pub fn digest_size(&self) -> usize {
        self.primitives.digest_size
    }

    pub fn block_size(&self) -> usize {
        self.primitives.block_size
    }

    /// Total bytes accepted by `update` so far.
    pub fn bytes_hashed(&self) -> u64 {
        self.bytes_hashed
    }

    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        let Slot::Open(acc) = &mut self.slot else {
            return Err(MeowError::InvalidState { op: "update" });
        };
        trace!("meowhash-{} update: {} bytes", self.primitives.width, data.len());
        (self.primitives.update)(acc, data);
        self.bytes_hashed = acc.total_len();
        Ok(())
    }

    /// Feed several buffers in order; same result as one concatenated update.
    pub fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<()> {
        if self.phase() == StreamPhase::Finalized {
            return Err(MeowError::InvalidState { op: "update" });
        }
        for buf in bufs {
            self.update(buf)?;
        }
        Ok(())
    }

    /// Flush the accumulator and close the session.
    pub fn finalize(&mut self) -> Result<Digest> {
        let acc = match std::mem::replace(&mut self.slot, Slot::Finalized) {
            Slot::Open(acc) => acc,
            Slot::Finalized => return Err(MeowError::InvalidState { op: "finalize" }),
        };
        let digest = (self.primitives.flush)(&acc);
        debug!(
            "finalized meowhash-{} stream after {} bytes",
            self.primitives.width, self.bytes_hashed
        );
        Ok(digest)
    }

    /// Alias of [`Hasher::finalize`] under the host-facing name.
    pub fn digest(&mut self) -> Result<Digest> {
        self.finalize()
    }

    /// Consuming form of [`Hasher::finalize`].
    pub fn finish(mut self) -> Result<Digest> {
        self.finalize()
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
