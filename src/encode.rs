use crate::buffer::{HASH_LEN, ScratchBuffer};
use crate::error::Error;

/// How an input string is turned into the byte stream that gets hashed.
///
/// The two modes produce different byte layouts, so the same string generally
/// hashes to different digests under each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// One byte per code point. Restricted to ASCII: any code point above 127
    /// is rejected with [`Error::UnsupportedCodePoint`].
    #[default]
    Utf8Ascii,
    /// Two bytes per UTF-16 code unit, little-endian.
    Utf16Le,
}

/// Encodes `value` into the buffer's payload region (starting at byte 16) and
/// returns the payload byte count.
///
/// Bytes are packed four to a little-endian word. The final partial word is
/// always written zero-padded, which keeps the bytes between the end of the
/// input and the next word boundary at zero even when the buffer still holds
/// a longer payload from a previous call. The tail-mixing step depends on
/// that.
pub(crate) fn encode(
    value: &str,
    encoding: Encoding,
    buf: &mut ScratchBuffer,
) -> Result<usize, Error> {
    match encoding {
        Encoding::Utf8Ascii => encode_ascii(value, buf),
        Encoding::Utf16Le => encode_utf16le(value, buf),
    }
}

fn encode_ascii(value: &str, buf: &mut ScratchBuffer) -> Result<usize, Error> {
    if let Some(ch) = value.chars().find(|ch| !ch.is_ascii()) {
        return Err(Error::UnsupportedCodePoint(ch));
    }
    // ASCII only, so the UTF-8 byte length is the code point count.
    let byte_count = value.len();
    buf.ensure_capacity(HASH_LEN + byte_count);

    for (i, chunk) in value.as_bytes().chunks(4).enumerate() {
        let mut word = 0u32;
        for (j, &byte) in chunk.iter().enumerate() {
            word |= (byte as u32) << (8 * j);
        }
        buf.write_u32_le(HASH_LEN + i * 4, word);
    }
    Ok(byte_count)
}

fn encode_utf16le(value: &str, buf: &mut ScratchBuffer) -> Result<usize, Error> {
    let byte_count = value.encode_utf16().count() * 2;
    buf.ensure_capacity(HASH_LEN + byte_count);

    let mut offset = HASH_LEN;
    let mut word = 0u32;
    let mut filled = 0;
    for unit in value.encode_utf16() {
        word |= (unit as u32) << (16 * filled);
        filled += 1;
        if filled == 2 {
            buf.write_u32_le(offset, word);
            offset += 4;
            word = 0;
            filled = 0;
        }
    }
    if filled == 1 {
        // Odd code-unit count: trailing unit sits in the low half.
        buf.write_u32_le(offset, word);
    }
    Ok(byte_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_packs_low_byte_first() {
        // arrange
        let mut buf = ScratchBuffer::new();

        // act
        let len = encode("abcd", Encoding::Utf8Ascii, &mut buf).unwrap();

        // assert
        assert_eq!(len, 4);
        assert_eq!(buf.read_u32_le(16), 0x6463_6261);
    }

    #[test]
    fn ascii_partial_word_is_zero_padded() {
        // arrange: leave a longer payload behind first
        let mut buf = ScratchBuffer::new();
        encode("xxxxxxxx", Encoding::Utf8Ascii, &mut buf).unwrap();

        // act
        let len = encode("abcde", Encoding::Utf8Ascii, &mut buf).unwrap();

        // assert: the stale 'x' bytes in the last word are gone
        assert_eq!(len, 5);
        assert_eq!(buf.read_u32_le(16), 0x6463_6261);
        assert_eq!(buf.read_u32_le(20), 0x0000_0065);
    }

    #[test]
    fn ascii_rejects_non_ascii() {
        let mut buf = ScratchBuffer::new();
        let err = encode("café", Encoding::Utf8Ascii, &mut buf).unwrap_err();
        assert_eq!(err, Error::UnsupportedCodePoint('é'));
    }

    #[test]
    fn utf16le_packs_unit_pairs() {
        // arrange
        let mut buf = ScratchBuffer::new();

        // act
        let len = encode("ab", Encoding::Utf16Le, &mut buf).unwrap();

        // assert: 'a' in the low half, 'b' in the high half
        assert_eq!(len, 4);
        assert_eq!(buf.read_u32_le(16), 0x0062_0061);
    }

    #[test]
    fn utf16le_odd_length_pads_high_half() {
        let mut buf = ScratchBuffer::new();
        let len = encode("abc", Encoding::Utf16Le, &mut buf).unwrap();
        assert_eq!(len, 6);
        assert_eq!(buf.read_u32_le(16), 0x0062_0061);
        assert_eq!(buf.read_u32_le(20), 0x0000_0063);
    }

    #[test]
    fn utf16le_accepts_non_ascii() {
        let mut buf = ScratchBuffer::new();
        let len = encode("é", Encoding::Utf16Le, &mut buf).unwrap();
        assert_eq!(len, 2);
        assert_eq!(buf.read_u32_le(16), 0x0000_00e9);
    }

    #[test]
    fn empty_string_writes_nothing() {
        let mut buf = ScratchBuffer::new();
        assert_eq!(encode("", Encoding::Utf8Ascii, &mut buf).unwrap(), 0);
        assert_eq!(encode("", Encoding::Utf16Le, &mut buf).unwrap(), 0);
    }
}
