use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::bitmap::Bitmap;
use crate::error::ResourceError;

// ── TilePalette ─────────────────────────────────────────────────────────────

/// The ordered tile bitmaps a map may reference: entry `i` is named by glyph
/// `'A' + i`. Dropping a new `tile_X.png` into the images directory extends
/// the palette without code changes.
#[derive(Debug)]
pub struct TilePalette {
    tiles: Vec<Arc<Bitmap>>,
}

impl TilePalette {
    /// Probe `tile_A.png`, `tile_B.png`, … under `images_dir` and collect the
    /// contiguous prefix; the first missing file ends the scan. The map
    /// grammar only names tiles `A..=Z`, so the scan never goes further.
    /// A file that exists but fails to decode is an error, not a gap.
    pub fn scan(images_dir: &Path) -> Result<Self, ResourceError> {
        let mut tiles = Vec::new();
        for glyph in 'A'..='Z' {
            let path = images_dir.join(format!("tile_{glyph}.png"));
            if !path.exists() {
                break;
            }
            tiles.push(Arc::new(Bitmap::load(&path)?));
        }
        debug!("tile palette: {} entries", tiles.len());
        Ok(Self { tiles })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Bitmap>> {
        self.tiles.get(index)
    }

    /// The tile a map glyph refers to, or `None` when the glyph is outside
    /// the palette range (either not a tile letter at all, or past the end).
    pub fn tile_for_glyph(&self, glyph: char) -> Option<&Arc<Bitmap>> {
        let index = (glyph as u32).checked_sub('A' as u32)? as usize;
        self.tiles.get(index)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
