//! Pixel laws for the bitmap transforms. All inputs use bitmask alpha
//! (0 or 255), the domain the asset pipeline produces.
use burbuja::bitmap::Bitmap;
use image::{Rgba, RgbaImage};

/// A 4×3 image where every pixel has a unique color and the corner column
/// is transparent, so reflections are observable on both axes.
fn sample() -> Bitmap {
    let mut img = RgbaImage::new(4, 3);
    for y in 0..3 {
        for x in 0..4 {
            let alpha = if x == 0 { 0 } else { 255 };
            img.put_pixel(x, y, Rgba([x as u8 * 50 + 1, y as u8 * 70 + 1, 9, alpha]));
        }
    }
    Bitmap::from_pixels(img)
}

/// Applying the horizontal flip twice must restore every pixel.
#[test]
fn mirror_round_trip_restores_every_pixel() {
    let b = sample();
    assert_eq!(b.mirrored().mirrored(), b);
}

/// Applying the vertical flip twice must restore every pixel.
#[test]
fn flip_round_trip_restores_every_pixel() {
    let b = sample();
    assert_eq!(b.flipped().flipped(), b);
}

/// Both transforms keep the pixel bounds at the original width × height.
#[test]
fn transforms_preserve_dimensions() {
    let b = sample();
    for derived in [b.mirrored(), b.flipped()] {
        assert_eq!((derived.width(), derived.height()), (b.width(), b.height()));
    }
}

/// Mirror∘flip and flip∘mirror are both the 180° rotation, so they must
/// agree pixel for pixel.
#[test]
fn mirror_and_flip_commute() {
    let b = sample();
    assert_eq!(b.mirrored().flipped(), b.flipped().mirrored());
}

/// A reflected pixel lands at the reflected coordinate, transparency
/// included.
#[test]
fn mirror_reflects_across_the_vertical_axis() {
    let b = sample();
    let m = b.mirrored();
    for y in 0..b.height() {
        for x in 0..b.width() {
            assert_eq!(m.pixel(b.width() - 1 - x, y), b.pixel(x, y));
        }
    }
}
