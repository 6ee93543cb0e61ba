//! 256-bit lane variant: four 64-bit lanes, 32-byte blocks.

use super::{Accumulator, LanePrimitives};
use crate::digest::Digest;
use crate::width::HashWidth;

const LANES: usize = 4;
const FLUSH_ROUNDS: usize = 4;

const KEY: [u64; LANES] = [
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
    0x4528_21E6_38D0_1377,
    0xBE54_66CF_34E9_0C6C,
];

pub(crate) const PRIMITIVES: LanePrimitives = LanePrimitives {
    width: HashWidth::W256,
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
    acc.flush(&KEY, FLUSH_ROUNDS, HashWidth::W256)
}
