//! 128-bit lane variant: two 64-bit lanes, 16-byte blocks.

use super::{Accumulator, LanePrimitives};
use crate::digest::Digest;
use crate::width::HashWidth;

const LANES: usize = 2;
const FLUSH_ROUNDS: usize = 3;

const KEY: [u64; LANES] = [0x243F_6A88_85A3_08D3, 0x1319_8A2E_0370_7344];

pub(crate) const PRIMITIVES: LanePrimitives = LanePrimitives {
    width: HashWidth::W128,
    lanes: LANES,
    digest_size: LANES * 8,
    block_size: LANES * 8,
    init,
    update,
    flush,
};

fn init(seed: u64) -> Accumulator {
    Accumulator::seeded(seed, &KEY)
}

fn update(acc: &mut Accumulator, data: &[u8]) {
    acc.absorb(data, &KEY);
}

fn flush(acc: &Accumulator) -> Digest {
    acc.flush(&KEY, FLUSH_ROUNDS, HashWidth::W128)
}
