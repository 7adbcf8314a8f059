use super::*;

// =============================================================
// Theme construction
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::from_kind(ThemeKind::Dark));
    assert_eq!(ThemeKind::default(), ThemeKind::Dark);
}

#[test]
fn dark_background_is_black() {
    let theme = Theme::from_kind(ThemeKind::Dark);
    assert_eq!(theme.background, Rgb([0, 0, 0]));
    assert_eq!(theme.background_rgba(), Rgba([0, 0, 0, 255]));
}

#[test]
fn light_background_is_white() {
    let theme = Theme::from_kind(ThemeKind::Light);
    assert_eq!(theme.background_rgba(), Rgba([255, 255, 255, 255]));
}

#[test]
fn theme_kind_deserializes_lowercase() {
    let kind: ThemeKind = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(kind, ThemeKind::Light);
}

// =============================================================
// is_background
// =============================================================

#[test]
fn transparent_pixel_is_background() {
    let theme = Theme::from_kind(ThemeKind::Light);
    assert!(theme.is_background(Rgba([0, 0, 0, 0])));
    assert!(theme.is_background(Rgba([255, 0, 0, 0])));
}

#[test]
fn near_black_is_background_on_dark() {
    let theme = Theme::default();
    assert!(theme.is_background(Rgba([0, 0, 0, 255])));
    assert!(theme.is_background(Rgba([49, 49, 49, 255])));
}

#[test]
fn threshold_is_exclusive() {
    let theme = Theme::default();
    assert!(!theme.is_background(Rgba([50, 0, 0, 255])));
    assert!(!theme.is_background(Rgba([0, 50, 0, 255])));
    assert!(!theme.is_background(Rgba([0, 0, 50, 255])));
}

#[test]
fn class_colors_are_not_background_on_dark() {
    let theme = Theme::default();
    assert!(!theme.is_background(Rgba([255, 0, 0, 255])));
    assert!(!theme.is_background(Rgba([0, 255, 0, 255])));
}

#[test]
fn light_theme_classifies_relative_to_white() {
    let theme = Theme::from_kind(ThemeKind::Light);
    assert!(theme.is_background(Rgba([250, 240, 230, 255])));
    assert!(!theme.is_background(Rgba([0, 0, 0, 255])));
    assert!(!theme.is_background(Rgba([255, 0, 0, 255])));
}
