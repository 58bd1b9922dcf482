use log::debug;

/// Number of bytes reserved at the front of the buffer for the hash value.
pub(crate) const HASH_LEN: usize = 16;

/// Smallest capacity a buffer will ever have, in bytes.
pub(crate) const MIN_CAPACITY: usize = 4096;

/// A growable scratch region shared by one hasher instance.
///
/// Layout: bytes `[0, 16)` hold the four little-endian result lanes, the
/// encoded payload starts at byte 16. Capacity is always a power of two and
/// never below [`MIN_CAPACITY`]. Growth reallocates zeroed storage; contents
/// are transient per hash call and are not preserved.
pub(crate) struct ScratchBuffer {
    data: Vec<u8>,
}

impl ScratchBuffer {
    pub(crate) fn new() -> Self {
        Self {
            data: vec![0; MIN_CAPACITY],
        }
    }

    /// Current capacity in bytes.
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Grows the buffer until it can hold at least `min_bytes`.
    ///
    /// Doubles the capacity as many times as needed, then reallocates. The new
    /// storage is fully zeroed, so every byte past the old payload reads as
    /// zero afterwards.
    pub(crate) fn ensure_capacity(&mut self, min_bytes: usize) {
        if self.data.len() >= min_bytes {
            return;
        }
        let mut capacity = self.data.len();
        while capacity < min_bytes {
            capacity *= 2;
        }
        debug!(
            "growing scratch buffer from {} to {} bytes",
            self.data.len(),
            capacity
        );
        self.data = vec![0; capacity];
    }

    /// Writes a little-endian 32-bit word at `offset`, which must be 4-aligned.
    pub(crate) fn write_u32_le(&mut self, offset: usize, value: u32) {
        debug_assert_eq!(offset % 4, 0);
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Reads a little-endian 32-bit word at `offset`, which must be 4-aligned.
    pub(crate) fn read_u32_le(&self, offset: usize) -> u32 {
        debug_assert_eq!(offset % 4, 0);
        let word: [u8; 4] = self.data[offset..offset + 4].try_into().unwrap();
        u32::from_le_bytes(word)
    }
}
