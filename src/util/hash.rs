//! Lazily populated cache of property-bag field hashes.

use std::collections::HashMap;
use std::fmt;

use super::{Error, Result};

/// A 32-bit field-name hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldHash(pub u32);

impl FieldHash {
    /// Hash a name, or parse it when it is a `0x`-prefixed hex literal.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.strip_prefix("0x") {
            Some(hex) if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Err(Error::InvalidHash(name.to_string()))
            }
            Some(hex) => u32::from_str_radix(hex, 16)
                .map(Self)
                .map_err(|_| Error::InvalidHash(name.to_string())),
            None => Ok(Self(fnv1a::hash_lower(name))),
        }
    }
}

impl fmt::Display for FieldHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl From<FieldHash> for u32 {
    fn from(h: FieldHash) -> Self {
        h.0
    }
}

/// Name-to-hash mapping owned by the caller.
///
/// Entries are computed on first lookup and reused afterwards.
#[derive(Debug, Default, Clone)]
pub struct HashCache {
    entries: HashMap<String, FieldHash>,
}

impl HashCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the hash for a name, computing and storing it if absent.
    pub fn get(&mut self, name: &str) -> Result<FieldHash> {
        if let Some(&h) = self.entries.get(name) {
            return Ok(h);
        }
        let h = FieldHash::from_name(name)?;
        self.entries.insert(name.to_string(), h);
        Ok(h)
    }

    /// Number of cached names.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been looked up yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
