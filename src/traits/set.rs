use std::collections::BTreeMap;
use std::io::Read;

use crate::foundation::error::{FelisError, FelisResult};
use crate::traits::category::TraitCategory;
use crate::traits::identity::{IdentityHash, seed_for};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Resolved trait values for one character, plus its optional identity hash.
///
/// A trait set is produced upstream by the genetics model and is read-only here. It may be
/// built with [`TraitSet::builder`] or loaded from JSON:
///
/// ```json
/// {
///   "traits": { "body_color": "golden", "expression": "happy", "accessory": "none",
///               "pattern": "solid", "background": "space", "special": "none" },
///   "identity_hash": "deadbeef..."
/// }
/// ```
pub struct TraitSet {
    traits: BTreeMap<TraitCategory, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identity_hash: Option<IdentityHash>,
}

impl TraitSet {
    /// Start building a trait set.
    pub fn builder() -> TraitSetBuilder {
        TraitSetBuilder::default()
    }

    /// Parse a trait set from JSON text.
    pub fn from_json_str(s: &str) -> FelisResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FelisError::validation(format!("parse trait set JSON: {e}")))
    }

    /// Parse a trait set from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> FelisResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FelisError::validation(format!("parse trait set JSON: {e}")))
    }

    /// Value selected for `category`, if present.
    pub fn get(&self, category: TraitCategory) -> Option<&str> {
        self.traits.get(&category).map(String::as_str)
    }

    /// Identity hash, if one was attached.
    pub fn identity_hash(&self) -> Option<&IdentityHash> {
        self.identity_hash.as_ref()
    }

    /// Layout seed derived from the identity hash.
    pub fn seed(&self) -> u32 {
        seed_for(self.identity_hash.as_ref())
    }

    /// Resolve every category, failing on the first one that is absent.
    pub fn resolve(&self) -> FelisResult<ResolvedTraits<'_>> {
        if let Some(missing) = TraitCategory::ALL
            .into_iter()
            .find(|c| !self.traits.contains_key(c))
        {
            return Err(FelisError::MissingTrait(missing));
        }
        let require = |category: TraitCategory| {
            self.get(category)
                .ok_or(FelisError::MissingTrait(category))
        };

        Ok(ResolvedTraits {
            body_color: require(TraitCategory::BodyColor)?,
            expression: require(TraitCategory::Expression)?,
            accessory: require(TraitCategory::Accessory)?,
            pattern: require(TraitCategory::Pattern)?,
            background: require(TraitCategory::Background)?,
            special: require(TraitCategory::Special)?,
            seed: self.seed(),
        })
    }
}

/// Builder for [`TraitSet`].
#[derive(Clone, Debug, Default)]
pub struct TraitSetBuilder {
    traits: BTreeMap<TraitCategory, String>,
    identity_hash: Option<IdentityHash>,
}

impl TraitSetBuilder {
    /// Select `value` for `category` (replaces an earlier selection).
    pub fn trait_value(mut self, category: TraitCategory, value: impl Into<String>) -> Self {
        self.traits.insert(category, value.into());
        self
    }

    /// Attach an identity hash.
    pub fn identity_hash(mut self, hash: impl Into<String>) -> Self {
        self.identity_hash = Some(IdentityHash::new(hash));
        self
    }

    /// Finish building.
    pub fn build(self) -> TraitSet {
        TraitSet {
            traits: self.traits,
            identity_hash: self.identity_hash,
        }
    }
}

/// All six trait values of a [`TraitSet`], borrowed, plus the derived seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedTraits<'a> {
    /// Fur colour name.
    pub body_color: &'a str,
    /// Expression name.
    pub expression: &'a str,
    /// Accessory name.
    pub accessory: &'a str,
    /// Pattern name.
    pub pattern: &'a str,
    /// Background name.
    pub background: &'a str,
    /// Special marker name.
    pub special: &'a str,
    /// Identity-derived seed.
    pub seed: u32,
}

#[cfg(test)]
#[path = "../../tests/unit/traits/set.rs"]
mod tests;
