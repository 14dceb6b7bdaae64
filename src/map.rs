use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::sync::Arc;

use glam::Vec2;
use log::debug;

use crate::bitmap::Bitmap;
use crate::error::ResourceError;
use crate::palette::TilePalette;
use crate::prototypes::PrototypeCatalogue;
use crate::sprite::{Sprite, SpriteKind};
use crate::tiles_to_pixels;

// ── TileMap ─────────────────────────────────────────────────────────────────

/// One loaded level: a rectangular grid of optional tiles, the sprites
/// spawned into it (in row-major map order), and the player. The map owns
/// its sprites; tiles are shared read-only with the palette.
#[derive(Debug)]
pub struct TileMap {
    width: u32,
    height: u32,
    tiles: Vec<Option<Arc<Bitmap>>>,
    sprites: Vec<Sprite>,
    player: Sprite,
}

impl TileMap {
    /// An empty `width × height` map holding `player`. Every cell starts
    /// passable.
    pub fn new(width: u32, height: u32, player: Sprite) -> Self {
        Self {
            width,
            height,
            tiles: vec![None; (width * height) as usize],
            sprites: Vec::new(),
            player,
        }
    }

    /// Width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width_pixels(&self) -> u32 {
        tiles_to_pixels(self.width)
    }

    pub fn height_pixels(&self) -> u32 {
        tiles_to_pixels(self.height)
    }

    /// The tile at `(x, y)`, or `None` for passable/empty cells and
    /// out-of-bounds coordinates.
    pub fn tile(&self, x: u32, y: u32) -> Option<&Arc<Bitmap>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles[(y * self.width + x) as usize].as_ref()
    }

    /// Place a tile at `(x, y)`. Out-of-bounds coordinates are ignored.
    pub fn set_tile(&mut self, x: u32, y: u32, bitmap: Arc<Bitmap>) {
        if x < self.width && y < self.height {
            self.tiles[(y * self.width + x) as usize] = Some(bitmap);
        }
    }

    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Spawned sprites in spawn order (row-major over the source map).
    pub fn sprites(&self) -> &[Sprite] {
        self.sprites.as_slice()
    }

    pub fn sprites_mut(&mut self) -> &mut [Sprite] {
        self.sprites.as_mut_slice()
    }

    pub fn player(&self) -> &Sprite {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Sprite {
        &mut self.player
    }

    pub fn set_player(&mut self, player: Sprite) {
        self.player = player;
    }
}

// ── Map parsing ─────────────────────────────────────────────────────────────

/// Parse a text map into a `TileMap`.
///
/// Lines starting with `#` are comments. Remaining lines form the grid
/// top-to-bottom; the widest line fixes the map width and shorter lines are
/// right-padded with empty cells. Each glyph is either a palette tile
/// (`A`.. up to the palette size), a sprite spawn, or nothing.
pub fn parse_map(
    path: &Path,
    palette: &TilePalette,
    prototypes: &PrototypeCatalogue,
) -> Result<TileMap, ResourceError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ResourceError::MapNotFound {
            path: path.to_path_buf(),
        },
        _ => ResourceError::MapUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut lines: Vec<String> = Vec::new();
    let mut width = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ResourceError::MapUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if line.starts_with('#') {
            continue;
        }
        width = width.max(line.chars().count());
        lines.push(line);
    }
    let height = lines.len();

    let mut player = prototypes.player().instantiate();
    player.position = Vec2::new(tiles_to_pixels(3) as f32, 0.0);
    let mut map = TileMap::new(width as u32, height as u32, player);

    for (y, line) in lines.iter().enumerate() {
        for (x, glyph) in line.chars().enumerate() {
            if let Some(tile) = palette.tile_for_glyph(glyph) {
                map.set_tile(x as u32, y as u32, Arc::clone(tile));
            } else if let Some(kind) = spawn_kind(glyph) {
                spawn_sprite(&mut map, prototypes.prototype(kind), x as u32, y as u32);
            }
        }
    }

    debug!(
        "parsed {}: {}x{} tiles, {} sprites",
        path.display(),
        map.width(),
        map.height(),
        map.sprites().len()
    );
    Ok(map)
}

/// The sprite kind a glyph spawns. Glyph `'1'` has always spawned the slow
/// grub and `'2'` the fast fly; maps depend on that binding.
fn spawn_kind(glyph: char) -> Option<SpriteKind> {
    match glyph {
        'o' => Some(SpriteKind::Coin),
        '!' => Some(SpriteKind::Music),
        '*' => Some(SpriteKind::Goal),
        '1' => Some(SpriteKind::Grub),
        '2' => Some(SpriteKind::Fly),
        '3' => Some(SpriteKind::Blob),
        _ => None,
    }
}

/// Clone `prototype` and drop the instance into its cell: horizontally
/// centered in the tile column, bottom edge flush with the tile row's
/// bottom.
fn spawn_sprite(map: &mut TileMap, prototype: &Sprite, tile_x: u32, tile_y: u32) {
    let mut sprite = prototype.instantiate();
    let tile = tiles_to_pixels(1) as f32;
    sprite.position = Vec2::new(
        tiles_to_pixels(tile_x) as f32 + (tile - sprite.width() as f32) / 2.0,
        tiles_to_pixels(tile_y + 1) as f32 - sprite.height() as f32,
    );
    map.add_sprite(sprite);
}

// ── Tests ───────────────────────────────────────────────────────────────────
