use crate::buffer::ScratchBuffer;

/// Renders the four result lanes stored in the buffer header as a hex string.
///
/// Each lane becomes `0x` plus exactly eight lowercase hex digits, zero-padded
/// on the left; lanes are joined with commas in h1..h4 order.
pub(crate) fn format_digest(buf: &ScratchBuffer) -> String {
    let mut out = String::with_capacity(4 * 10 + 3);
    for lane in 0..4 {
        if lane > 0 {
            out.push(',');
        }
        out.push_str(&format!("0x{:08x}", buf.read_u32_le(lane * 4)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_joins_lanes() {
        // arrange
        let mut buf = ScratchBuffer::new();
        buf.write_u32_le(0, 0x0000_00ff);
        buf.write_u32_le(4, 0xdead_beef);
        buf.write_u32_le(8, 0);
        buf.write_u32_le(12, 0x0123_4567);

        // act
        let digest = format_digest(&buf);

        // assert
        assert_eq!(digest, "0x000000ff,0xdeadbeef,0x00000000,0x01234567");
    }
}
