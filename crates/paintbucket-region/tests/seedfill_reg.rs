//! Seed fill regression test
//!
//! Fills on the 5x5 outline fixture plus invalid input handling. The two
//! ring fills are checked byte-for-byte against golden RGBA dumps.

use paintbucket_core::{Color, InvalidInput, RgbaImage};
use paintbucket_region::{FillOptions, FillStats, fill, fill_image};
use paintbucket_test::{RegParams, ring_image};

const RED: Color = Color::rgb(255, 0, 0);

fn ring() -> RgbaImage {
    ring_image(5, Color::BLACK, Color::WHITE).unwrap()
}

#[test]
fn ringfill_reg() {
    let mut rp = RegParams::new("ringfill");
    let options = FillOptions::new(RED).with_tolerance(10);

    // Seed inside the outline, then on the outline
    let mut inside = ring();
    let inside_stats = fill_image(&mut inside, 2, 2, &options).unwrap();
    let mut outline = ring();
    let outline_stats = fill_image(&mut outline, 0, 0, &options).unwrap();

    // Dumps first so they keep golden indices 01 and 02
    rp.write_data_and_check(inside.as_bytes(), "rgba").unwrap();
    rp.write_data_and_check(outline.as_bytes(), "rgba").unwrap();

    rp.compare_values(9.0, inside_stats.pixels_filled as f64, 0.0);
    rp.compare_values(9.0, inside.count_color(RED) as f64, 0.0);
    rp.compare_values(16.0, inside.count_color(Color::BLACK) as f64, 0.0);
    rp.compare_values(16.0, outline_stats.pixels_filled as f64, 0.0);
    rp.compare_values(9.0, outline.count_color(Color::WHITE) as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn seedfill_buffer_api_reg() {
    let mut rp = RegParams::new("seedfill_buffer");

    // The flat-buffer entry point must agree with the image entry point
    let mut expected = ring();
    fill_image(&mut expected, 3, 1, &FillOptions::new(RED).with_tolerance(10)).unwrap();

    let mut buffer = ring().into_raw();
    fill(&mut buffer, 5, 5, 3, 1, RED, 10).unwrap();
    rp.compare_strings(expected.as_bytes(), &buffer);

    // Seed already holds the fill color: byte-for-byte unchanged
    let original = ring().into_raw();
    let mut buffer = original.clone();
    fill(&mut buffer, 5, 5, 4, 4, Color::BLACK, 10).unwrap();
    rp.compare_strings(&original, &buffer);

    // Same, with a tolerance large enough to cover every color
    let mut buffer = original.clone();
    fill(&mut buffer, 5, 5, 2, 2, Color::WHITE, u32::MAX).unwrap();
    rp.compare_strings(&original, &buffer);

    assert!(rp.cleanup());
}

#[test]
fn seedfill_invalid_input_reg() {
    let original = ring().into_raw();

    let mut buffer = original.clone();
    let err = fill(&mut buffer, 5, 5, 5, 5, RED, 10).unwrap_err();
    assert_eq!(
        err,
        InvalidInput::SeedOutOfBounds {
            x: 5,
            y: 5,
            width: 5,
            height: 5
        }
    );
    assert_eq!(buffer, original);

    let err = fill(&mut buffer, 5, 5, 0, 7, RED, 10).unwrap_err();
    assert!(matches!(err, InvalidInput::SeedOutOfBounds { .. }));

    let err = fill(&mut buffer, 0, 5, 0, 0, RED, 10).unwrap_err();
    assert!(matches!(err, InvalidInput::InvalidDimension { .. }));

    let err = fill(&mut buffer, 5, 4, 0, 0, RED, 10).unwrap_err();
    assert_eq!(
        err,
        InvalidInput::BufferLength {
            expected: 80,
            actual: 100
        }
    );

    // Unaddressable size is rejected as a dimension error, not a panic
    let err = fill(&mut buffer, u32::MAX, u32::MAX, 0, 0, RED, 10).unwrap_err();
    assert!(matches!(err, InvalidInput::InvalidDimension { .. }));

    assert_eq!(buffer, original);
}

#[test]
fn seedfill_transparent_reg() {
    let mut rp = RegParams::new("seedfill_transparent");

    // Alpha is part of the metric: transparent pixels of different RGB
    // match only when their RGB distance is inside the radius.
    let clear_a = Color::new(0, 0, 0, 0);
    let clear_b = Color::new(8, 0, 0, 0);
    let clear_c = Color::new(200, 0, 0, 0);

    let mut img = RgbaImage::new_filled(3, 1, clear_a).unwrap();
    img.set_pixel(1, 0, clear_b);
    img.set_pixel(2, 0, clear_c);

    let stats = fill_image(&mut img, 0, 0, &FillOptions::new(RED).with_tolerance(8)).unwrap();
    rp.compare_values(2.0, stats.pixels_filled as f64, 0.0);
    rp.compare_values(1.0, img.count_color(clear_c) as f64, 0.0);

    // Opaque black vs transparent black differs only in alpha (255)
    let mut img = RgbaImage::new_filled(2, 1, Color::TRANSPARENT).unwrap();
    img.set_pixel(1, 0, Color::BLACK);
    let stats = fill_image(&mut img, 0, 0, &FillOptions::new(RED).with_tolerance(254)).unwrap();
    rp.compare_values(1.0, stats.pixels_filled as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn seedfill_large_image_reg() {
    let mut rp = RegParams::new("seedfill_large");

    // Uniform image with a single horizontal outline across the middle
    let mut img = RgbaImage::new_filled(1024, 1024, Color::WHITE).unwrap();
    for x in 0..1024 {
        img.set_pixel(x, 512, Color::BLACK);
    }

    let stats = fill_image(&mut img, 10, 1000, &FillOptions::new(RED)).unwrap();
    rp.compare_values((1024 * 511) as f64, stats.pixels_filled as f64, 0.0);
    rp.compare_values(511.0, stats.spans as f64, 0.0);
    rp.compare_values(1024.0 * 512.0, img.count_color(Color::WHITE) as f64, 0.0);
    rp.compare_values(1.0, stats.peak_stack as f64, 1.0);

    // Second identical call is a no-op
    let before = img.clone();
    let again = fill_image(&mut img, 10, 1000, &FillOptions::new(RED)).unwrap();
    rp.compare_values(0.0, again.pixels_filled as f64, 0.0);
    rp.compare_images(&before, &img);
    assert_eq!(again, FillStats::default());

    assert!(rp.cleanup());
}
