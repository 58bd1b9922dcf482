use crate::buffer::{HASH_LEN, ScratchBuffer};

const C1: u32 = 0x239b_961b;
const C2: u32 = 0xab0e_9789;
const C3: u32 = 0x38b3_4ae5;
const C4: u32 = 0xa1e3_8b93;

/// Runs MurmurHash3_x86_128 over the buffer's payload.
///
/// Reads `byte_len` payload bytes starting at offset 16 and writes the four
/// result lanes little-endian into bytes `[0, 16)`. Words past the end of the
/// payload in the tail block must read as zero; the encoder guarantees that.
pub(crate) fn mix_buffer(buf: &mut ScratchBuffer, byte_len: usize, seed: u32) {
    let mut h1 = seed;
    let mut h2 = seed;
    let mut h3 = seed;
    let mut h4 = seed;

    let n_blocks = byte_len / 16;
    for block in 0..n_blocks {
        let offset = HASH_LEN + block * 16;
        let mut k1 = buf.read_u32_le(offset);
        let mut k2 = buf.read_u32_le(offset + 4);
        let mut k3 = buf.read_u32_le(offset + 8);
        let mut k4 = buf.read_u32_le(offset + 12);

        k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(19).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x561c_cd1b);

        k2 = k2.wrapping_mul(C2).rotate_left(16).wrapping_mul(C3);
        h2 ^= k2;
        h2 = h2.rotate_left(17).wrapping_add(h3);
        h2 = h2.wrapping_mul(5).wrapping_add(0x0bca_a747);

        k3 = k3.wrapping_mul(C3).rotate_left(17).wrapping_mul(C4);
        h3 ^= k3;
        h3 = h3.rotate_left(15).wrapping_add(h4);
        h3 = h3.wrapping_mul(5).wrapping_add(0x96cd_1c35);

        k4 = k4.wrapping_mul(C4).rotate_left(18).wrapping_mul(C1);
        h4 ^= k4;
        h4 = h4.rotate_left(13).wrapping_add(h1);
        h4 = h4.wrapping_mul(5).wrapping_add(0x32ac_3b17);
    }

    // Tail: up to 15 leftover bytes, already zero-padded to word boundaries.
    // Lanes are applied high to low, each only once enough tail bytes exist.
    let tail_bytes = byte_len % 16;
    let offset = HASH_LEN + n_blocks * 16;
    if tail_bytes > 12 {
        let k4 = buf.read_u32_le(offset + 12);
        h4 ^= k4.wrapping_mul(C4).rotate_left(18).wrapping_mul(C1);
    }
    if tail_bytes > 8 {
        let k3 = buf.read_u32_le(offset + 8);
        h3 ^= k3.wrapping_mul(C3).rotate_left(17).wrapping_mul(C4);
    }
    if tail_bytes > 4 {
        let k2 = buf.read_u32_le(offset + 4);
        h2 ^= k2.wrapping_mul(C2).rotate_left(16).wrapping_mul(C3);
    }
    if tail_bytes > 0 {
        let k1 = buf.read_u32_le(offset);
        h1 ^= k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
    }

    let len = byte_len as u32;
    h1 ^= len;
    h2 ^= len;
    h3 ^= len;
    h4 ^= len;

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    h1 = fmix32(h1);
    h2 = fmix32(h2);
    h3 = fmix32(h3);
    h4 = fmix32(h4);

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    buf.write_u32_le(0, h1);
    buf.write_u32_le(4, h2);
    buf.write_u32_le(8, h3);
    buf.write_u32_le(12, h4);
}

/// Final avalanche step: diffuses each lane's bits so that small input
/// differences spread across the whole output.
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}
