/// Three related shades used to colour one visual element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColorPalette {
    /// Base fill.
    pub main: &'static str,
    /// Darker shade.
    pub shadow: &'static str,
    /// Lighter shade.
    pub highlight: &'static str,
}

/// Palette name used when a colour lookup misses.
pub const DEFAULT_BODY_COLOR: &str = "gray";

const fn palette(
    main: &'static str,
    shadow: &'static str,
    highlight: &'static str,
) -> ColorPalette {
    ColorPalette {
        main,
        shadow,
        highlight,
    }
}

const GRAY: ColorPalette = palette("#808080", "#5A5A5A", "#A0A0A0");

/// Known body colours, by trait value.
pub static BODY_COLORS: [(&str, ColorPalette); 9] = [
    ("brown", palette("#8B4513", "#5D2E0C", "#A0522D")),
    ("tan", palette("#D2B48C", "#B8956E", "#E8D4B8")),
    ("beige", palette("#F5F5DC", "#D4D4B8", "#FFFFF0")),
    (DEFAULT_BODY_COLOR, GRAY),
    ("golden", palette("#FFD700", "#B8860B", "#FFEC8B")),
    ("silver", palette("#C0C0C0", "#909090", "#E8E8E8")),
    ("white", palette("#FFFFFF", "#E0E0E0", "#FFFFFF")),
    ("black", palette("#333333", "#000000", "#555555")),
    ("orange", palette("#FFA500", "#CC8400", "#FFB732")),
];

/// Palette for `name`, or the gray palette when the name is unknown.
pub fn body_palette(name: &str) -> ColorPalette {
    match BODY_COLORS.iter().find(|(key, _)| *key == name) {
        Some((_, p)) => *p,
        None => {
            tracing::debug!(color = name, fallback = DEFAULT_BODY_COLOR, "unknown body color");
            GRAY
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tables/palette.rs"]
mod tests;
