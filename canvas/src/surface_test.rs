use super::*;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

// =============================================================
// Construction
// =============================================================

#[test]
fn new_surface_is_transparent() {
    let surface = Surface::new(16);
    assert_eq!(surface.size(), 16);
    assert_eq!(surface.byte_len(), 16 * 16 * 4);
    assert!(surface.image().pixels().all(|p| *p == TRANSPARENT));
}

// =============================================================
// get_pixel / set_pixel
// =============================================================

#[test]
fn set_then_get_pixel() {
    let mut surface = Surface::new(8);
    assert!(surface.set_pixel(3, 4, RED));
    assert_eq!(surface.get_pixel(3, 4), Some(RED));
    assert_eq!(surface.get_pixel(4, 3), Some(TRANSPARENT));
}

#[test]
fn out_of_range_reads_are_none() {
    let surface = Surface::new(8);
    assert_eq!(surface.get_pixel(-1, 0), None);
    assert_eq!(surface.get_pixel(0, -1), None);
    assert_eq!(surface.get_pixel(8, 0), None);
    assert_eq!(surface.get_pixel(0, 8), None);
}

#[test]
fn out_of_range_writes_are_dropped() {
    let mut surface = Surface::new(8);
    assert!(!surface.set_pixel(-5, 2, RED));
    assert!(!surface.set_pixel(2, 100, RED));
    assert!(surface.image().pixels().all(|p| *p == TRANSPARENT));
}

// =============================================================
// fill_rect
// =============================================================

#[test]
fn fill_rect_is_clipped() {
    let mut surface = Surface::new(8);
    surface.fill_rect(PixelRect::new(-2, -2, 4, 4), GREEN);
    assert_eq!(surface.get_pixel(0, 0), Some(GREEN));
    assert_eq!(surface.get_pixel(1, 1), Some(GREEN));
    assert_eq!(surface.get_pixel(2, 2), Some(TRANSPARENT));
}

#[test]
fn fill_rect_fully_outside_is_noop() {
    let mut surface = Surface::new(8);
    surface.fill_rect(PixelRect::new(20, 20, 4, 4), GREEN);
    assert!(surface.image().pixels().all(|p| *p == TRANSPARENT));
}

// =============================================================
// read_all / write_all
// =============================================================

#[test]
fn write_all_replaces_pixels() {
    let mut source = Surface::new(4);
    source.set_pixel(1, 2, RED);
    let mut target = Surface::new(4);
    assert!(target.write_all(source.read_all()).is_ok());
    assert_eq!(target.get_pixel(1, 2), Some(RED));
}

#[test]
fn write_all_rejects_wrong_length() {
    let mut surface = Surface::new(4);
    let err = surface.write_all(vec![0; 10]);
    assert!(matches!(err, Err(CanvasError::BufferSizeMismatch { expected: 64, actual: 10 })));
}

#[test]
fn clear_resets_to_transparent() {
    let mut surface = Surface::new(4);
    surface.fill_rect(PixelRect::new(0, 0, 4, 4), RED);
    surface.clear();
    assert!(surface.image().pixels().all(|p| *p == TRANSPARENT));
}

// =============================================================
// Snapshots
// =============================================================

#[test]
fn restore_snapshot_round_trip() {
    let mut surface = Surface::new(4);
    surface.set_pixel(0, 0, RED);
    let snap = surface.snapshot();
    surface.set_pixel(0, 0, GREEN);
    assert!(surface.restore(&snap));
    assert_eq!(surface.get_pixel(0, 0), Some(RED));
}

#[test]
fn restore_rejects_foreign_size() {
    let other = Surface::new(2).snapshot();
    let mut surface = Surface::new(4);
    surface.set_pixel(0, 0, RED);
    assert!(!surface.restore(&other));
    assert_eq!(surface.get_pixel(0, 0), Some(RED));
}

#[test]
fn snapshot_memory_is_full_buffer() {
    let surface = Surface::new(4);
    assert_eq!(surface.snapshot().memory_bytes(), 64);
    assert_eq!(surface.snapshot().size(), 4);
}

#[test]
fn pixel_rect_edges() {
    let rect = PixelRect::new(-3, 2, 5, 4);
    assert_eq!(rect.right(), 2);
    assert_eq!(rect.bottom(), 6);
    assert!(!rect.is_empty());
    assert!(PixelRect::new(0, 0, 0, 3).is_empty());
}
