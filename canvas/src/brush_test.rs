#![allow(clippy::float_cmp)]

use super::*;
use crate::surface::TRANSPARENT;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

fn disc(size: u32) -> Brush {
    Brush { size, shape: BrushShape::Disc, color: RED }
}

fn square(size: u32) -> Brush {
    Brush { size, shape: BrushShape::Square, color: GREEN }
}

fn painted(surface: &Surface) -> usize {
    surface.image().pixels().filter(|p| **p != TRANSPARENT).count()
}

// =============================================================
// Dab geometry
// =============================================================

#[test]
fn disc_dab_uses_squared_distance() {
    let mut surface = Surface::new(32);
    stamp(&mut surface, &disc(7), Point::new(10.5, 10.5));
    // radius 3.5 => r^2 = 12.25
    assert_eq!(surface.get_pixel(10, 10), Some(RED));
    assert_eq!(surface.get_pixel(13, 10), Some(RED));
    assert_eq!(surface.get_pixel(14, 10), Some(TRANSPARENT));
    assert_eq!(surface.get_pixel(12, 12), Some(RED));
    assert_eq!(surface.get_pixel(13, 13), Some(TRANSPARENT));
}

#[test]
fn disc_dab_is_symmetric() {
    let mut surface = Surface::new(64);
    stamp(&mut surface, &disc(9), Point::new(32.0, 32.0));
    for dy in -5_i64..=5 {
        for dx in -5_i64..=5 {
            assert_eq!(surface.get_pixel(32 + dx, 32 + dy), surface.get_pixel(32 - dx, 32 - dy));
            assert_eq!(surface.get_pixel(32 + dx, 32 + dy), surface.get_pixel(32 + dy, 32 + dx));
        }
    }
}

#[test]
fn one_pixel_disc_paints_exactly_one_pixel() {
    let mut surface = Surface::new(16);
    stamp(&mut surface, &disc(1), Point::new(5.0, 5.0));
    assert_eq!(painted(&surface), 1);
    assert_eq!(surface.get_pixel(5, 5), Some(RED));
}

#[test]
fn square_dab_covers_full_side() {
    let mut surface = Surface::new(64);
    stamp(&mut surface, &square(10), Point::new(20.0, 20.0));
    assert_eq!(painted(&surface), 100);
    assert_eq!(surface.get_pixel(15, 15), Some(GREEN));
    assert_eq!(surface.get_pixel(24, 24), Some(GREEN));
    assert_eq!(surface.get_pixel(14, 20), Some(TRANSPARENT));
    assert_eq!(surface.get_pixel(25, 20), Some(TRANSPARENT));
}

#[test]
fn square_dab_odd_size_is_centered() {
    let rect = dab_rect(Point::new(20.0, 20.0), 7, BrushShape::Square);
    assert_eq!(rect, PixelRect::new(17, 17, 7, 7));
}

#[test]
fn dab_writes_solid_color_without_blending() {
    let mut surface = Surface::new(16);
    stamp(&mut surface, &disc(5), Point::new(8.0, 8.0));
    assert!(surface.image().pixels().all(|p| *p == RED || *p == TRANSPARENT));
}

#[test]
fn dab_is_clipped_at_edges() {
    let mut surface = Surface::new(16);
    let touched = stamp(&mut surface, &square(8), Point::new(0.0, 0.0));
    assert_eq!(touched, Some(PixelRect::new(0, 0, 4, 4)));
    assert_eq!(painted(&surface), 16);
}

#[test]
fn dab_off_surface_touches_nothing() {
    let mut surface = Surface::new(16);
    assert_eq!(stamp(&mut surface, &disc(4), Point::new(-50.0, 8.0)), None);
    assert_eq!(painted(&surface), 0);
}

#[test]
fn eraser_brush_clears_pixels() {
    let mut surface = Surface::new(16);
    stamp(&mut surface, &square(6), Point::new(8.0, 8.0));
    let eraser = Brush { size: 6, shape: BrushShape::Disc, color: TRANSPARENT };
    stamp(&mut surface, &eraser, Point::new(8.0, 8.0));
    assert_eq!(surface.get_pixel(8, 8), Some(TRANSPARENT));
}

// =============================================================
// Strokes
// =============================================================

#[test]
fn begin_stroke_draws_one_dab_and_tracks_bounds() {
    let mut surface = Surface::new(64);
    let mut bounds = Bounds::empty();
    let stroke = StrokeState::begin(&mut surface, &mut bounds, disc(4), Point::new(30.0, 30.0));
    assert!(stroke.active);
    assert_eq!(stroke.points, vec![Point::new(30.0, 30.0)]);
    assert_eq!(stroke.last, Point::new(30.0, 30.0));
    assert_eq!(surface.get_pixel(30, 30), Some(RED));
    assert_eq!(bounds.min_x, 26.0);
    assert_eq!(bounds.max_y, 34.0);
}

#[test]
fn zero_distance_continue_matches_single_dab() {
    let p = Point::new(17.3, 22.8);

    let mut single = Surface::new(48);
    stamp(&mut single, &disc(6), p);

    let mut stroked = Surface::new(48);
    let mut bounds = Bounds::empty();
    let mut stroke = StrokeState::begin(&mut stroked, &mut bounds, disc(6), p);
    stroke.continue_to(&mut stroked, &mut bounds, p);

    assert_eq!(single.image(), stroked.image());
}

#[test]
fn fast_motion_leaves_no_gaps() {
    let mut surface = Surface::new(128);
    let mut bounds = Bounds::empty();
    let mut stroke = StrokeState::begin(&mut surface, &mut bounds, disc(2), Point::new(10.0, 50.0));
    stroke.continue_to(&mut surface, &mut bounds, Point::new(110.0, 50.0));
    for x in 10..=110 {
        assert_eq!(surface.get_pixel(x, 50), Some(RED), "gap at x={x}");
    }
}

#[test]
fn continue_draws_ceil_distance_over_spacing_plus_one_dabs() {
    let mut surface = Surface::new(128);
    let mut bounds = Bounds::empty();
    let mut stroke = StrokeState::begin(&mut surface, &mut bounds, disc(8), Point::new(0.0, 0.0));
    // spacing = 2, distance = 10 => 5 steps, 6 dabs (t = 0..=1)
    assert_eq!(stroke.continue_to(&mut surface, &mut bounds, Point::new(10.0, 0.0)), 6);
    assert_eq!(stroke.last, Point::new(10.0, 0.0));
    assert_eq!(stroke.points.len(), 2);
}

#[test]
fn diagonal_stroke_is_continuous() {
    let mut surface = Surface::new(128);
    let mut bounds = Bounds::empty();
    let mut stroke = StrokeState::begin(&mut surface, &mut bounds, square(1), Point::new(5.0, 5.0));
    stroke.continue_to(&mut surface, &mut bounds, Point::new(85.0, 45.0));
    // Every column between the endpoints has at least one painted pixel.
    for x in 5..=85 {
        assert!((0..128).any(|y| surface.get_pixel(x, y) == Some(GREEN)), "gap in column {x}");
    }
}

#[test]
fn finished_stroke_ignores_moves() {
    let mut surface = Surface::new(32);
    let mut bounds = Bounds::empty();
    let mut stroke = StrokeState::begin(&mut surface, &mut bounds, disc(2), Point::new(4.0, 4.0));
    stroke.finish();
    assert_eq!(stroke.continue_to(&mut surface, &mut bounds, Point::new(20.0, 20.0)), 0);
    assert_eq!(surface.get_pixel(20, 20), Some(TRANSPARENT));
}

#[test]
fn stroke_off_surface_does_not_extend_bounds() {
    let mut surface = Surface::new(32);
    let mut bounds = Bounds::empty();
    let mut stroke = StrokeState::begin(&mut surface, &mut bounds, disc(2), Point::new(-40.0, -40.0));
    stroke.continue_to(&mut surface, &mut bounds, Point::new(-60.0, -20.0));
    assert!(bounds.is_empty());
}

#[test]
fn spacing_is_quarter_brush() {
    assert_eq!(disc(8).spacing(), 2.0);
    assert_eq!(disc(1).spacing(), 0.25);
}
