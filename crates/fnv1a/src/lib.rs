//! 32-bit FNV-1a hash.
//!
//! Property-bag records identify fields, types and entries by the FNV-1a
//! hash of their ASCII-lowercased name. This crate computes that hash.

/// FNV-1a 32-bit offset basis.
pub const OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const PRIME: u32 = 0x0100_0193;

/// Compute the FNV-1a hash of raw bytes.
#[inline]
pub fn hash32(data: &[u8]) -> u32 {
    let mut h = OFFSET_BASIS;
    for &b in data {
        h ^= b as u32;
        h = h.wrapping_mul(PRIME);
    }
    h
}

/// Compute the FNV-1a hash of a name after ASCII-lowercasing it.
///
/// Non-ASCII bytes are hashed unchanged.
#[inline]
pub fn hash_lower(name: &str) -> u32 {
    let mut h = OFFSET_BASIS;
    for b in name.bytes() {
        h ^= b.to_ascii_lowercase() as u32;
        h = h.wrapping_mul(PRIME);
    }
    h
}
