/// Seed used whenever an identity hash cannot supply one.
pub const FALLBACK_SEED: u32 = 12345;

const SEED_HEX_CHARS: usize = 8;

/// Opaque identity hash attached to one generated character.
///
/// Only its leading hex digits are ever read, to derive a layout seed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct IdentityHash(String);

impl IdentityHash {
    /// Wrap a hash string as-is.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Underlying hash text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters read as a hex `u32`; [`FALLBACK_SEED`] when empty or not hex.
    pub fn seed(&self) -> u32 {
        let prefix: String = self.0.chars().take(SEED_HEX_CHARS).collect();
        if prefix.is_empty() {
            return FALLBACK_SEED;
        }
        // from_str_radix tolerates a leading sign, which is not part of a hex digest.
        if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            tracing::warn!(prefix = %prefix, "identity hash prefix is not hex; using fallback seed");
            return FALLBACK_SEED;
        }
        u32::from_str_radix(&prefix, 16).unwrap_or(FALLBACK_SEED)
    }
}

/// Seed for an optional hash (absent hashes use [`FALLBACK_SEED`]).
pub fn seed_for(hash: Option<&IdentityHash>) -> u32 {
    hash.map_or(FALLBACK_SEED, IdentityHash::seed)
}

#[cfg(test)]
#[path = "../../tests/unit/traits/identity.rs"]
mod tests;
