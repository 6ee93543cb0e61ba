//! 512-bit lane variant: eight 64-bit lanes, 64-byte blocks.

use super::{Accumulator, LanePrimitives};
use crate::digest::Digest;
use crate::width::HashWidth;

const LANES: usize = 8;
const FLUSH_ROUNDS: usize = 5;

const KEY: [u64; LANES] = [
    0xC0AC_29B7_C97C_50DD,
    0x3F84_D5B5_B547_0917,
    0x9216_D5D9_8979_FB1B,
    0xD131_0BA6_98DF_B5AC,
    0x2FFD_72DB_D01A_DFB7,
    0xB8E1_AFED_6A26_7E96,
    0xBA7C_9045_F12C_7F99,
    0x24A1_9947_B391_6CF7,
];

pub(crate) const PRIMITIVES: LanePrimitives = LanePrimitives {
    width: HashWidth::W512,
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
    acc.flush(&KEY, FLUSH_ROUNDS, HashWidth::W512)
}
