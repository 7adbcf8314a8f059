use image::Rgba;

use super::*;
use crate::surface::PixelRect;
use crate::theme::ThemeKind;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[test]
fn empty_bounds_fail_with_empty_canvas() {
    let surface = Surface::new(64);
    let result = export_crop(&surface, &Bounds::empty(), &Theme::default(), ExportOptions::default());
    assert!(matches!(result, Err(CanvasError::EmptyCanvas)));
}

#[test]
fn single_pixel_export_is_minimum_size_and_offset_by_margin() {
    let mut surface = Surface::new(512);
    surface.set_pixel(100, 100, RED);
    let mut bounds = Bounds::empty();
    bounds.extend(100.0, 100.0, 0.0);

    let crop = export_crop(&surface, &bounds, &Theme::default(), ExportOptions::default()).unwrap();
    assert_eq!((crop.width(), crop.height()), (256, 256));
    assert_eq!((crop.origin_x, crop.origin_y), (50, 50));
    assert_eq!(*crop.image.get_pixel(50, 50), RED);
    assert_eq!(*crop.image.get_pixel(49, 50), BLACK);
}

#[test]
fn large_span_rounds_up_to_grid() {
    let mut surface = Surface::new(1024);
    surface.fill_rect(PixelRect::new(100, 100, 301, 11), RED);
    let mut bounds = Bounds::empty();
    bounds.extend(100.0, 100.0, 0.0);
    bounds.extend(400.0, 110.0, 0.0);

    let crop = export_crop(&surface, &bounds, &Theme::default(), ExportOptions::default()).unwrap();
    // (300 + 100) / 64 -> 7 cells -> 448; height stays at the 256 floor.
    assert_eq!(crop.width(), 448);
    assert_eq!(crop.height(), 256);
    assert_eq!(*crop.image.get_pixel(350, 55), RED);
}

#[test]
fn origin_is_clamped_at_surface_edge() {
    let mut surface = Surface::new(512);
    surface.set_pixel(10, 20, RED);
    let mut bounds = Bounds::empty();
    bounds.extend(10.0, 20.0, 0.0);

    let crop = export_crop(&surface, &bounds, &Theme::default(), ExportOptions::default()).unwrap();
    assert_eq!((crop.origin_x, crop.origin_y), (0, 0));
    assert_eq!(*crop.image.get_pixel(10, 20), RED);
}

#[test]
fn crop_past_surface_edge_is_background() {
    let mut surface = Surface::new(300);
    surface.set_pixel(290, 290, RED);
    let mut bounds = Bounds::empty();
    bounds.extend(290.0, 290.0, 0.0);

    let crop = export_crop(&surface, &bounds, &Theme::default(), ExportOptions::default()).unwrap();
    assert_eq!((crop.origin_x, crop.origin_y), (240, 240));
    assert_eq!(*crop.image.get_pixel(50, 50), RED);
    assert_eq!(*crop.image.get_pixel(200, 200), BLACK);
}

#[test]
fn transparent_pixels_take_theme_background() {
    let mut surface = Surface::new(512);
    surface.set_pixel(200, 200, RED);
    let mut bounds = Bounds::empty();
    bounds.extend(200.0, 200.0, 0.0);

    let theme = Theme::from_kind(ThemeKind::Light);
    let crop = export_crop(&surface, &bounds, &theme, ExportOptions::default()).unwrap();
    assert_eq!(*crop.image.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    assert!(crop.image.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn snapped_len_examples() {
    let opts = ExportOptions::default();
    assert_eq!(opts.snapped_len(0.0), 256);
    assert_eq!(opts.snapped_len(156.0), 256);
    assert_eq!(opts.snapped_len(157.0), 320);
    let tight = ExportOptions { margin_px: 0, grid_snap: 10, min_size: 1 };
    assert_eq!(tight.snapped_len(21.0), 30);
}

#[test]
fn encode_png_decodes_to_same_pixels() {
    let mut surface = Surface::new(512);
    surface.set_pixel(100, 100, RED);
    let mut bounds = Bounds::empty();
    bounds.extend(100.0, 100.0, 0.0);
    let crop = export_crop(&surface, &bounds, &Theme::default(), ExportOptions::default()).unwrap();

    let bytes = crop.encode_png().unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).map(|img| img.to_rgba8());
    assert!(decoded.is_ok_and(|img| img == crop.image));
}

#[test]
fn file_name_carries_dimensions_and_timestamp() {
    let crop = ExportCrop { origin_x: 0, origin_y: 0, image: RgbaImage::new(256, 320) };
    assert_eq!(crop.file_name("2026-10-18T12-00-00"), "segmentation_mask_256x320_2026-10-18T12-00-00.png");
}
