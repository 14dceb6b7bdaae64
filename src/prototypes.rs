use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::animation::Animation;
use crate::bitmap::Bitmap;
use crate::error::ResourceError;
use crate::sprite::{Sprite, SpriteKind};

// ── PrototypeCatalogue ──────────────────────────────────────────────────────

/// The canonical animated sprites every level clones from. Built eagerly at
/// resource-manager construction; a missing source bitmap aborts the build.
/// Immutable afterwards; instances are taken with `Sprite::instantiate`.
#[derive(Debug)]
pub struct PrototypeCatalogue {
    player: Sprite,
    fly: Sprite,
    grub: Sprite,
    blob: Sprite,
    goal: Sprite,
    coin: Sprite,
    music: Sprite,
}

impl PrototypeCatalogue {
    /// Load every creature and power-up prototype from `images_dir`.
    ///
    /// Only left-facing alive frames exist on disk; the right-facing row is
    /// mirrored from them and both dead rows are flipped upside down.
    pub fn load(images_dir: &Path) -> Result<Self, ResourceError> {
        let player = creature(
            images_dir,
            SpriteKind::Player,
            ["player1.png", "player2.png", "player3.png", "player4.png"],
            Duration::from_millis(150),
        )?;
        let fly = creature(
            images_dir,
            SpriteKind::Fly,
            ["Mugre1_1.png", "Mugre1_2.png", "Mugre1_3.png", "Mugre1_4.png"],
            Duration::from_millis(100),
        )?;
        let grub = creature(
            images_dir,
            SpriteKind::Grub,
            ["Mugre2_1.png", "Mugre2_2.png", "Mugre2_3.png", "Mugre2_4.png"],
            Duration::from_millis(250),
        )?;
        let blob = creature(
            images_dir,
            SpriteKind::Blob,
            ["Mugre3_1.png", "Mugre3_2.png", "Mugre3_3.png", "Mugre3_4.png"],
            Duration::from_millis(150),
        )?;

        // The goal bubble plays 1-2-3-2: a four-step ping-pong over three
        // source frames.
        let goal = power_up(
            images_dir,
            SpriteKind::Goal,
            &["burbuja1.png", "burbuja2.png", "burbuja3.png"],
            &[0, 1, 2, 1],
            Duration::from_millis(150),
        )?;
        let coin = power_up(
            images_dir,
            SpriteKind::Coin,
            &["gota1.png", "gota2.png", "gota3.png", "gota4.png"],
            &[0, 1, 2, 3],
            Duration::from_millis(100),
        )?;
        let music = power_up(
            images_dir,
            SpriteKind::Music,
            &["jabon1.png", "jabon2.png", "jabon3.png", "jabon4.png"],
            &[0, 1, 2, 3],
            Duration::from_millis(150),
        )?;

        debug!("prototype catalogue loaded from {}", images_dir.display());
        Ok(Self {
            player,
            fly,
            grub,
            blob,
            goal,
            coin,
            music,
        })
    }

    pub fn player(&self) -> &Sprite {
        &self.player
    }

    pub fn fly(&self) -> &Sprite {
        &self.fly
    }

    pub fn grub(&self) -> &Sprite {
        &self.grub
    }

    pub fn blob(&self) -> &Sprite {
        &self.blob
    }

    pub fn goal(&self) -> &Sprite {
        &self.goal
    }

    pub fn coin(&self) -> &Sprite {
        &self.coin
    }

    pub fn music(&self) -> &Sprite {
        &self.music
    }

    /// The prototype for any sprite kind.
    pub fn prototype(&self, kind: SpriteKind) -> &Sprite {
        match kind {
            SpriteKind::Player => &self.player,
            SpriteKind::Fly => &self.fly,
            SpriteKind::Grub => &self.grub,
            SpriteKind::Blob => &self.blob,
            SpriteKind::Goal => &self.goal,
            SpriteKind::Coin => &self.coin,
            SpriteKind::Music => &self.music,
        }
    }
}

// ── Construction helpers ────────────────────────────────────────────────────

/// Build one creature prototype: load its four left-facing alive frames,
/// derive the other three facings, and assemble one animation per facing at
/// the kind's frame period.
fn creature(
    images_dir: &Path,
    kind: SpriteKind,
    stems: [&str; 4],
    period: Duration,
) -> Result<Sprite, ResourceError> {
    let mut left_alive = Vec::with_capacity(stems.len());
    for stem in stems {
        left_alive.push(Arc::new(Bitmap::load(&images_dir.join(stem))?));
    }
    let right_alive: Vec<Arc<Bitmap>> =
        left_alive.iter().map(|b| Arc::new(b.mirrored())).collect();
    let left_dead: Vec<Arc<Bitmap>> = left_alive.iter().map(|b| Arc::new(b.flipped())).collect();
    let right_dead: Vec<Arc<Bitmap>> = right_alive.iter().map(|b| Arc::new(b.flipped())).collect();

    Ok(Sprite::creature(
        kind,
        [
            frame_loop(&left_alive, period)?,
            frame_loop(&right_alive, period)?,
            frame_loop(&left_dead, period)?,
            frame_loop(&right_dead, period)?,
        ],
    ))
}

fn frame_loop(row: &[Arc<Bitmap>], period: Duration) -> Result<Arc<Animation>, ResourceError> {
    let mut anim = Animation::new();
    for bitmap in row {
        anim.add_frame(Arc::clone(bitmap), period)?;
    }
    Ok(Arc::new(anim))
}

/// Build one power-up prototype. `order` indexes into `stems`, so a source
/// frame may appear more than once in the loop.
fn power_up(
    images_dir: &Path,
    kind: SpriteKind,
    stems: &[&str],
    order: &[usize],
    period: Duration,
) -> Result<Sprite, ResourceError> {
    let mut bitmaps = Vec::with_capacity(stems.len());
    for stem in stems {
        bitmaps.push(Arc::new(Bitmap::load(&images_dir.join(stem))?));
    }
    let mut anim = Animation::new();
    for &index in order {
        anim.add_frame(Arc::clone(&bitmaps[index]), period)?;
    }
    Ok(Sprite::power_up(kind, Arc::new(anim)))
}
