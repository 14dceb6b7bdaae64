use std::fmt;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::ResourceError;

// ── Bitmap ──────────────────────────────────────────────────────────────────

/// An immutable RGBA raster. Decoded once from disk (or derived from another
/// bitmap) and then only ever read; palette entries and animation frames are
/// shared behind `Arc<Bitmap>`.
#[derive(Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
}

impl Bitmap {
    /// Decode a PNG from `path`. Missing and undecodable files are reported
    /// the same way: the asset is unusable either way.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let img = image::open(path).map_err(|source| ResourceError::AssetNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { pixels: img.to_rgba8() })
    }

    /// Wrap an already-decoded image.
    pub fn from_pixels(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Horizontal flip (reflection across the vertical axis through the
    /// bitmap center). The result is freshly allocated, has the same
    /// dimensions, and uses bitmask transparency; inputs whose alpha is
    /// already 0/255 round-trip exactly under double application.
    pub fn mirrored(&self) -> Bitmap {
        let (w, h) = self.pixels.dimensions();
        let mut out = RgbaImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                out.put_pixel(w - 1 - x, y, mask_alpha(*self.pixels.get_pixel(x, y)));
            }
        }
        Bitmap { pixels: out }
    }

    /// Vertical flip (reflection across the horizontal axis through the
    /// bitmap center). Same allocation and transparency rules as `mirrored`.
    pub fn flipped(&self) -> Bitmap {
        let (w, h) = self.pixels.dimensions();
        let mut out = RgbaImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                out.put_pixel(x, h - 1 - y, mask_alpha(*self.pixels.get_pixel(x, y)));
            }
        }
        Bitmap { pixels: out }
    }
}

/// Snap alpha to the bitmask domain: a pixel is either fully opaque or
/// fully clear.
fn mask_alpha(mut px: Rgba<u8>) -> Rgba<u8> {
    px.0[3] = if px.0[3] >= 128 { 255 } else { 0 };
    px
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.pixels.dimensions() == other.pixels.dimensions()
            && self.pixels.as_raw() == other.pixels.as_raw()
    }
}

impl Eq for Bitmap {}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitmap({}x{})", self.width(), self.height())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// A 3×2 test image with a unique opaque color per pixel.
    fn checker() -> Bitmap {
        let mut img = RgbaImage::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                img.put_pixel(x, y, Rgba([x as u8 * 40, y as u8 * 80, 7, 255]));
            }
        }
        Bitmap::from_pixels(img)
    }

    #[test]
    fn mirror_moves_left_column_to_right() {
        let b = checker();
        let m = b.mirrored();
        assert_eq!(m.pixel(2, 0), b.pixel(0, 0));
        assert_eq!(m.pixel(0, 1), b.pixel(2, 1));
        assert_eq!(m.pixel(1, 0), b.pixel(1, 0), "center column stays put");
    }

    #[test]
    fn flip_moves_top_row_to_bottom() {
        let b = checker();
        let f = b.flipped();
        assert_eq!(f.pixel(0, 1), b.pixel(0, 0));
        assert_eq!(f.pixel(2, 0), b.pixel(2, 1));
    }

    #[test]
    fn mirror_is_involutive() {
        let b = checker();
        assert_eq!(b.mirrored().mirrored(), b);
    }

    #[test]
    fn flip_is_involutive() {
        let b = checker();
        assert_eq!(b.flipped().flipped(), b);
    }

    #[test]
    fn transforms_preserve_dimensions() {
        let b = Bitmap::from_pixels(RgbaImage::new(5, 9));
        for derived in [b.mirrored(), b.flipped()] {
            assert_eq!((derived.width(), derived.height()), (5, 9));
        }
    }

    #[test]
    fn derived_alpha_is_bitmask() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 127]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 128]));
        let m = Bitmap::from_pixels(img).mirrored();
        assert_eq!(m.pixel(1, 0).0[3], 0, "alpha below threshold snaps clear");
        assert_eq!(m.pixel(0, 0).0[3], 255, "alpha at threshold snaps opaque");
    }

    #[test]
    fn load_missing_file_is_asset_not_found() {
        let err = Bitmap::load(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, ResourceError::AssetNotFound { .. }));
    }
}
