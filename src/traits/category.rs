use std::fmt;

/// One fixed dimension of visual variation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    /// Fur colour, resolved through the colour palette.
    BodyColor,
    /// Facial expression.
    #[serde(alias = "face_expression")]
    Expression,
    /// Worn accessory.
    Accessory,
    /// Fur pattern.
    Pattern,
    /// Backdrop behind the portrait.
    Background,
    /// Rare special marker.
    Special,
}

impl TraitCategory {
    /// Every category, in resolution order.
    pub const ALL: [TraitCategory; 6] = [
        TraitCategory::BodyColor,
        TraitCategory::Expression,
        TraitCategory::Accessory,
        TraitCategory::Pattern,
        TraitCategory::Background,
        TraitCategory::Special,
    ];

    /// Stable snake_case identifier (matches the serde name).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BodyColor => "body_color",
            Self::Expression => "expression",
            Self::Accessory => "accessory",
            Self::Pattern => "pattern",
            Self::Background => "background",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
