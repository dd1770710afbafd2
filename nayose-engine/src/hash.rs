//! 64-bit hash of normalized keys.
//!
//! The hash is `(crc32 << 32) | adler32`, both digests taken over the UTF-8
//! bytes of the normalized key. Keys that normalize to the same string
//! always hash to the same value.

use crate::normalize::Normalizer;

/// CRC-32 (high half) and Adler-32 (low half) of the UTF-8 bytes of `text`.
pub(crate) fn digest(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let crc = crc32fast::hash(bytes);
    let mut adler = adler2::Adler32::new();
    adler.write_slice(bytes);
    (u64::from(crc) << 32) | u64::from(adler.checksum())
}

/// Hash `text` after normalizing it against the process-wide variant table.
pub fn hash(text: &str) -> u64 {
    Normalizer::global().hash(text)
}
