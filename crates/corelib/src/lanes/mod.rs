//! Lane primitives (**NOT CRYPTO**).
//!
//! Each width module binds its own key schedule and flush round count to a
//! [`LanePrimitives`] record. The engine only ever reaches the lanes through
//! that record, so the three variants stay independent of one another.

pub(crate) mod lane128;
pub(crate) mod lane256;
pub(crate) mod lane512;

use crate::digest::Digest;
use crate::width::HashWidth;

pub(crate) const MAX_LANES: usize = 8;
pub(crate) const MAX_BLOCK: usize = MAX_LANES * 8;

const ZERO_BLOCK: [u8; MAX_BLOCK] = [0u8; MAX_BLOCK];

// xxh64 avalanche primes
const AVALANCHE_1: u64 = 0xC2B2_AE3D_27D4_EB4F;
const AVALANCHE_2: u64 = 0x1656_67B1_9E37_79F9;

/// Dispatch record for one lane width.
#[derive(Debug)]
pub(crate) struct LanePrimitives {
    pub width: HashWidth,
    pub lanes: usize,
    pub digest_size: usize,
    pub block_size: usize,
    pub init: fn(u64) -> Accumulator,
    pub update: fn(&mut Accumulator, &[u8]),
    pub flush: fn(&Accumulator) -> Digest,
}

/// Opaque per-session state; not `Clone`.
#[derive(Debug)]
pub(crate) struct Accumulator {
    lanes: [u64; MAX_LANES],
    block: [u8; MAX_BLOCK],
    buffered: usize,
    total_len: u64,
    seed: u64,
}

impl Accumulator {
    pub(crate) fn seeded(seed: u64, key: &[u64]) -> Self {
        debug_assert!(!key.is_empty() && key.len() <= MAX_LANES);
        let mut lanes = [0u64; MAX_LANES];
        for (i, (lane, k)) in lanes.iter_mut().zip(key).enumerate() {
            *lane = k ^ seed.rotate_left(8 * i as u32 + 1);
        }
        permute(&mut lanes[..key.len()], key);
        Self {
            lanes,
            block: [0u8; MAX_BLOCK],
            buffered: 0,
            total_len: 0,
            seed,
        }
    }

    pub(crate) fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Buffer `data` and compress every completed block.
    pub(crate) fn absorb(&mut self, data: &[u8], key: &[u64]) {
        let n = key.len();
        let block_len = n * 8;
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut input = data;
        if self.buffered > 0 {
            let take = (block_len - self.buffered).min(input.len());
            self.block[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];
            if self.buffered < block_len {
                return;
            }
            compress(&mut self.lanes[..n], &self.block[..block_len], key);
            self.buffered = 0;
        }

        let mut blocks = input.chunks_exact(block_len);
        for block in &mut blocks {
            compress(&mut self.lanes[..n], block, key);
        }
        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Produce the digest without touching the accumulator.
    pub(crate) fn flush(&self, key: &[u64], rounds: usize, width: HashWidth) -> Digest {
        let n = key.len();
        let block_len = n * 8;
        let mut lanes = self.lanes;

        let mut tail = [0u8; MAX_BLOCK];
        tail[..self.buffered].copy_from_slice(&self.block[..self.buffered]);
        compress(&mut lanes[..n], &tail[..block_len], key);

        lanes[0] ^= self.total_len;
        lanes[n - 1] ^= self.seed.rotate_left(32) ^ self.buffered as u64;
        for _ in 0..rounds {
            permute(&mut lanes[..n], key);
        }

        let mut out = [0u8; MAX_BLOCK];
        for (chunk, lane) in out[..block_len].chunks_exact_mut(8).zip(&lanes[..n]) {
            chunk.copy_from_slice(&avalanche(*lane).to_le_bytes());
        }
        Digest::from_lane_bytes(width, out)
    }
}

/// Lower 64-bit, then upper 64-bit.
#[inline(always)]
const fn wmul(a: u64, b: u64) -> (u64, u64) {
    let product = a as u128 * b as u128;
    (product as u64, (product >> 64) as u64)
}

#[inline(always)]
fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(word)
}

#[inline(always)]
const fn avalanche(mut value: u64) -> u64 {
    value ^= value >> 33;
    value = value.wrapping_mul(AVALANCHE_1);
    value ^= value >> 29;
    value = value.wrapping_mul(AVALANCHE_2);
    value ^= value >> 32;
    value
}

/// Fold one block into the lanes. Each lane is multiplied against the lane
/// updated just before it, so a word entering lane `i` reaches every later
/// lane in the same pass and wraps to the front on the next one.
fn compress(lanes: &mut [u64], block: &[u8], key: &[u64]) {
    let n = lanes.len();
    debug_assert_eq!(n, key.len());
    debug_assert_eq!(block.len(), n * 8);

    let mut carry = lanes[n - 1];
    for i in 0..n {
        let m = read_u64(block, i * 8);
        let a = (lanes[i] ^ m).wrapping_add(key[i]);
        let b = carry.rotate_left(23) ^ key[(i + 1) % n] ^ m;
        let (lo, hi) = wmul(a, b);
        lanes[i] = (lo ^ hi).wrapping_add(a.rotate_left(29));
        carry = lanes[i];
    }
}

fn permute(lanes: &mut [u64], key: &[u64]) {
    let block_len = lanes.len() * 8;
    compress(lanes, &ZERO_BLOCK[..block_len], key);
}
