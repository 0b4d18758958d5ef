use crate::traits::category::TraitCategory;

/// Convenience result type used across Felis.
pub type FelisResult<T> = Result<T, FelisError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for trait resolution and document composition.
pub enum FelisError {
    /// A required trait category is absent from the input trait set.
    #[error("missing trait: {0}")]
    MissingTrait(TraitCategory),

    /// Input values violate documented invariants (canvas size, trait JSON shape).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization of a composed document failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FelisError {
    /// Build [`FelisError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`FelisError::Render`] from any message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// The missing category, when this error reports one.
    pub fn missing_category(&self) -> Option<TraitCategory> {
        match self {
            Self::MissingTrait(c) => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
