//! A small library for 128-bit MurmurHash3 (x86 variant) string fingerprints.
//!
//! MurmurHash3 is a fast, well-distributed, non-cryptographic hash. This crate
//! computes the x86 128-bit variant of a string and renders the four 32-bit
//! result lanes as a comma-joined hexadecimal string, bit-exact with other
//! MurmurHash3_x86_128 implementations. Typical uses are deduplication,
//! partitioning, and cache keys.
//!
//! Strings can be hashed as ASCII bytes (the default, rejecting non-ASCII
//! input) or as little-endian UTF-16 code units. Hashing is synchronous and
//! deterministic; each [`Murmur3Hasher`] owns its own scratch buffer, so
//! concurrency is a matter of who owns the hasher.
//!
//! # Example
//!
//! ```rust
//! use murmur3_128::{murmur3_128, Encoding, Murmur3Hasher};
//!
//! // One-shot hash with the defaults (ASCII bytes, seed 0).
//! let digest = murmur3_128("Hello world").unwrap();
//! assert_eq!(digest, "0x35636f32,0xdd9255bd,0xc21764a9,0x4eada804");
//!
//! // A reusable hasher with a custom seed.
//! let mut hasher = Murmur3Hasher::builder().with_seed(0x9747b28c).build();
//! let seeded = hasher.hash("Hello world", Encoding::Utf8Ascii).unwrap();
//! assert_eq!(seeded, "0xb84809b4,0xc94b6c67,0xd348b27e,0x74d813d4");
//! ```

/// Contains the growable scratch buffer that holds the encoded payload and the
/// hash result.
mod buffer;
/// Contains the string-to-bytes encoders and the `Encoding` selector.
mod encode;
/// Contains the `Error` type for encoding failures.
mod error;
/// Contains the hex rendering of the four result lanes.
mod hex;
/// The core module of the library, containing the block and tail mixing
/// algorithm.
mod murmur3;

pub use crate::encode::Encoding;
pub use crate::error::Error;

use crate::buffer::ScratchBuffer;

/// A reusable MurmurHash3_x86_128 hasher.
///
/// Owns the scratch buffer used for encoding and mixing, so repeated calls on
/// the same instance reuse one allocation. A hasher is cheap to create but not
/// shareable across threads without external synchronization; give each thread
/// its own instance instead.
pub struct Murmur3Hasher {
    buffer: ScratchBuffer,
    seed: u32,
}

impl Default for Murmur3Hasher {
    fn default() -> Self {
        Murmur3HasherBuilder::new().build()
    }
}

/// A builder for creating instances of `Murmur3Hasher`.
pub struct Murmur3HasherBuilder {
    seed: u32,
}

impl Murmur3HasherBuilder {
    /// Creates a new builder with the default seed of 0.
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    /// Sets the seed used to initialize all four hash lanes.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the `Murmur3Hasher` with the configured parameters.
    pub fn build(self) -> Murmur3Hasher {
        Murmur3Hasher {
            buffer: ScratchBuffer::new(),
            seed: self.seed,
        }
    }
}

impl Default for Murmur3HasherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Murmur3Hasher {
    /// Returns a new builder for `Murmur3Hasher`.
    pub fn builder() -> Murmur3HasherBuilder {
        Murmur3HasherBuilder::new()
    }

    /// Creates a hasher with the default seed of 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes `value` under the given encoding and returns the digest as four
    /// `0x`-prefixed, 8-digit lowercase hex lanes joined by commas.
    ///
    /// Fails only if encoding fails; see [`Encoding`] for the rules.
    pub fn hash(&mut self, value: &str, encoding: Encoding) -> Result<String, Error> {
        let byte_count = encode::encode(value, encoding, &mut self.buffer)?;
        murmur3::mix_buffer(&mut self.buffer, byte_count, self.seed);
        Ok(hex::format_digest(&self.buffer))
    }
}

/// Hashes a string with the defaults: ASCII byte encoding and seed 0.
///
/// Convenience wrapper that builds a fresh [`Murmur3Hasher`] per call; use a
/// hasher instance directly to amortize the buffer allocation.
pub fn murmur3_128(value: &str) -> Result<String, Error> {
    murmur3_128_with(value, Encoding::default())
}

/// Hashes a string under an explicit encoding, with seed 0.
pub fn murmur3_128_with(value: &str, encoding: Encoding) -> Result<String, Error> {
    Murmur3Hasher::new().hash(value, encoding)
}
