use super::*;
use crate::theme::Theme;

#[test]
fn default_palette_has_roads_and_buildings() {
    let palette = Palette::default();
    assert_eq!(palette.len(), 2);
    assert!(!palette.is_empty());

    let roads = palette.get(ClassId(0));
    assert_eq!(roads.name, "roads");
    assert_eq!(roads.rgba(), Rgba([255, 0, 0, 255]));
    assert_eq!(roads.shape, BrushShape::Disc);
    assert!(!roads.fills_closed);

    let buildings = palette.get(ClassId(1));
    assert_eq!(buildings.name, "buildings");
    assert_eq!(buildings.rgba(), Rgba([0, 255, 0, 255]));
    assert_eq!(buildings.shape, BrushShape::Square);
    assert!(buildings.fills_closed);
}

#[test]
fn find_resolves_names() {
    let palette = Palette::default();
    assert_eq!(palette.find("buildings").unwrap(), ClassId(1));
    assert!(matches!(palette.find("rivers"), Err(CanvasError::UnknownClass(name)) if name == "rivers"));
}

#[test]
fn stale_id_falls_back_to_first_class() {
    let palette = Palette::default();
    assert_eq!(palette.get(ClassId(99)).name, "roads");
}

#[test]
fn empty_class_list_uses_default() {
    assert_eq!(Palette::new(Vec::new()), Palette::default());
}

#[test]
fn default_colors_are_distinct_from_background_and_each_other() {
    let palette = Palette::default();
    let theme = Theme::default();
    let colors: Vec<_> = ["roads", "buildings"].iter().map(|name| palette.get(palette.find(name).unwrap()).rgba()).collect();
    for color in &colors {
        assert!(!theme.is_background(*color));
    }
    assert_ne!(colors[0], colors[1]);
}

#[test]
fn brush_shape_deserializes_lowercase() {
    let shape: BrushShape = serde_json::from_str("\"square\"").unwrap();
    assert_eq!(shape, BrushShape::Square);
}
