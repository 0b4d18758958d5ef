use super::*;

#[test]
fn known_colors_resolve() {
    assert_eq!(body_palette("golden").main, "#FFD700");
    assert_eq!(body_palette("black").shadow, "#000000");
    assert_eq!(body_palette("orange").highlight, "#FFB732");
}

#[test]
fn unknown_color_falls_back_to_gray() {
    assert_eq!(body_palette("chartreuse"), body_palette(DEFAULT_BODY_COLOR));
    assert_eq!(body_palette("").main, "#808080");
}

#[test]
fn table_keys_are_unique() {
    let mut keys: Vec<_> = BODY_COLORS.iter().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), BODY_COLORS.len());
}
