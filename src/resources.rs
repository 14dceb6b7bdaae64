use std::path::{Path, PathBuf};

use log::{error, info, warn};
use walkdir::WalkDir;

use crate::bitmap::Bitmap;
use crate::error::ResourceError;
use crate::map::{TileMap, parse_map};
use crate::palette::TilePalette;
use crate::prototypes::PrototypeCatalogue;

// ── ResourceManager ─────────────────────────────────────────────────────────

/// Owns the tile palette and prototype catalogue and walks the map cycle.
/// Construction is eager: by the time `build` returns, every sprite bitmap
/// is decoded and every derived facing exists.
#[derive(Debug)]
pub struct ResourceManager {
    images_dir: PathBuf,
    maps_dir: PathBuf,
    palette: TilePalette,
    prototypes: PrototypeCatalogue,
    current_map: u32,
}

impl ResourceManager {
    pub fn builder() -> ResourceManagerBuilder {
        ResourceManagerBuilder::default()
    }

    pub fn palette(&self) -> &TilePalette {
        &self.palette
    }

    pub fn prototypes(&self) -> &PrototypeCatalogue {
        &self.prototypes
    }

    /// The highest map number addressed so far; 0 before the first
    /// `load_next`.
    pub fn current_map(&self) -> u32 {
        self.current_map
    }

    /// Load a single image by name from the images directory.
    pub fn load_image(&self, name: &str) -> Result<Bitmap, ResourceError> {
        Bitmap::load(&self.images_dir.join(name))
    }

    fn map_path(&self, number: u32) -> PathBuf {
        self.maps_dir.join(format!("map{number}.txt"))
    }

    /// Advance to the next map: `map1.txt`, `map2.txt`, … and back to
    /// `map1.txt` after the last one. `Ok(None)` means the game has no maps
    /// at all. A map file that exists but cannot be read is a real error
    /// and is returned as such rather than treated as the end of the cycle.
    pub fn load_next(&mut self) -> Result<Option<TileMap>, ResourceError> {
        loop {
            self.current_map += 1;
            let path = self.map_path(self.current_map);
            match parse_map(&path, &self.palette, &self.prototypes) {
                Ok(map) => {
                    info!(
                        "map {} loaded ({}x{} tiles, {} sprites)",
                        self.current_map,
                        map.width(),
                        map.height(),
                        map.sprites().len()
                    );
                    return Ok(Some(map));
                }
                Err(ResourceError::MapNotFound { .. }) => {
                    if self.current_map == 1 {
                        warn!("no maps found under {}", self.maps_dir.display());
                        return Ok(None);
                    }
                    // Ran past the last map; wrap around to map1.
                    self.current_map = 0;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Re-parse the current map, e.g. after the player dies. Failures are
    /// logged and reported as absence; the caller decides what a missing
    /// level means mid-game.
    pub fn reload(&mut self) -> Option<TileMap> {
        let path = self.map_path(self.current_map);
        match parse_map(&path, &self.palette, &self.prototypes) {
            Ok(map) => Some(map),
            Err(err) => {
                error!("failed to reload {}: {err}", path.display());
                None
            }
        }
    }

    /// Map numbers present on disk, sorted. Diagnostic only: the cycle
    /// itself probes files so a map dropped in mid-session is still picked
    /// up.
    pub fn available_maps(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = WalkDir::new(&self.maps_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| map_number(entry.path()))
            .collect();
        numbers.sort_unstable();
        numbers
    }
}

/// `maps/map7.txt` → `Some(7)`; anything else → `None`.
fn map_number(path: &Path) -> Option<u32> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix("map")?
        .parse()
        .ok()
}

// ── ResourceManagerBuilder ──────────────────────────────────────────────────

/// Configures where assets live before the eager load. `images/` and `maps/`
/// resolve under the root, which defaults to the working directory.
pub struct ResourceManagerBuilder {
    root: PathBuf,
}

impl Default for ResourceManagerBuilder {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl ResourceManagerBuilder {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Scan the palette and load the full prototype catalogue.
    pub fn build(self) -> Result<ResourceManager, ResourceError> {
        let images_dir = self.root.join("images");
        let maps_dir = self.root.join("maps");

        let palette = TilePalette::scan(&images_dir)?;
        let prototypes = PrototypeCatalogue::load(&images_dir)?;

        let manager = ResourceManager {
            images_dir,
            maps_dir,
            palette,
            prototypes,
            current_map: 0,
        };
        info!(
            "resources ready: {} palette tiles, maps on disk: {:?}",
            manager.palette.len(),
            manager.available_maps()
        );
        Ok(manager)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
