//! Shared fixtures: asset directories generated on the fly so tests never
//! depend on files checked into the repo.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};

/// Pixel size of every generated sprite frame. Deliberately smaller than a
/// tile so the centering math has something to do.
pub const SPRITE_W: u32 = 24;
pub const SPRITE_H: u32 = 30;

/// Write a solid-color PNG.
pub fn write_png(path: &Path, w: u32, h: u32, color: [u8; 4]) {
    let mut img = RgbaImage::new(w, h);
    for px in img.pixels_mut() {
        *px = Rgba(color);
    }
    img.save(path).unwrap();
}

/// Write a solid-color PNG with a single `marker` pixel at (0, 0), so a
/// test can tell where that corner ended up after a transform.
pub fn write_marked_png(path: &Path, w: u32, h: u32, fill: [u8; 4], marker: [u8; 4]) {
    let mut img = RgbaImage::new(w, h);
    for px in img.pixels_mut() {
        *px = Rgba(fill);
    }
    img.put_pixel(0, 0, Rgba(marker));
    img.save(path).unwrap();
}

/// Populate `root/images` with every bitmap the prototype catalogue needs
/// plus `tile_count` contiguous palette tiles, and create an empty
/// `root/maps`.
pub fn write_assets(root: &Path, tile_count: usize) {
    let images = root.join("images");
    fs::create_dir_all(&images).unwrap();
    fs::create_dir_all(root.join("maps")).unwrap();

    for (i, glyph) in ('A'..='Z').take(tile_count).enumerate() {
        write_png(
            &images.join(format!("tile_{glyph}.png")),
            64,
            64,
            [i as u8, 120, 120, 255],
        );
    }

    for i in 1..=4u32 {
        write_png(&images.join(format!("player{i}.png")), SPRITE_W, SPRITE_H, [200, 0, 0, 255]);
        write_png(&images.join(format!("Mugre1_{i}.png")), SPRITE_W, SPRITE_H, [0, 200, 0, 255]);
        write_png(&images.join(format!("Mugre2_{i}.png")), SPRITE_W, SPRITE_H, [0, 0, 200, 255]);
        write_png(&images.join(format!("Mugre3_{i}.png")), SPRITE_W, SPRITE_H, [0, 200, 200, 255]);
        write_png(&images.join(format!("gota{i}.png")), SPRITE_W, SPRITE_H, [220, 220, 0, 255]);
        write_png(&images.join(format!("jabon{i}.png")), SPRITE_W, SPRITE_H, [220, 0, 220, 255]);
    }
    for i in 1..=3u32 {
        write_png(&images.join(format!("burbuja{i}.png")), SPRITE_W, SPRITE_H, [240, 240, 240, 255]);
    }
}

/// Write `root/maps/map<number>.txt`.
pub fn write_map(root: &Path, number: u32, contents: &str) {
    fs::write(root.join("maps").join(format!("map{number}.txt")), contents).unwrap();
}
