use std::sync::Arc;

use glam::Vec2;

use crate::animation::Animation;

// ── Kinds and animation axes ────────────────────────────────────────────────

/// Which way a creature is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

/// Whether a creature is drawn with its alive or dead frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Liveness {
    Alive,
    Dead,
}

/// Every placeable sprite kind. The three enemies keep their historical
/// speeds: `Fly` cycles fastest, `Grub` slowest, `Blob` in between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Fly,
    Grub,
    Blob,
    Goal,
    Coin,
    Music,
}

impl SpriteKind {
    pub fn is_creature(self) -> bool {
        matches!(
            self,
            SpriteKind::Player | SpriteKind::Fly | SpriteKind::Grub | SpriteKind::Blob
        )
    }

    pub fn is_power_up(self) -> bool {
        !self.is_creature()
    }
}

// ── Sprite ──────────────────────────────────────────────────────────────────

/// Creatures carry one animation per (facing, liveness) pair; power-ups loop
/// a single animation.
#[derive(Clone, Debug)]
enum AnimationSet {
    Creature([Arc<Animation>; 4]),
    Single(Arc<Animation>),
}

fn table_index(facing: Facing, liveness: Liveness) -> usize {
    match (facing, liveness) {
        (Facing::Left, Liveness::Alive) => 0,
        (Facing::Right, Liveness::Alive) => 1,
        (Facing::Left, Liveness::Dead) => 2,
        (Facing::Right, Liveness::Dead) => 3,
    }
}

/// An animated game object. The same type serves as prototype (held by the
/// catalogue, never placed in a map) and as instance (cloned into a map via
/// `instantiate`). Animations are shared read-only between a prototype and
/// all of its instances; `position` is per-sprite.
#[derive(Clone, Debug)]
pub struct Sprite {
    kind: SpriteKind,
    animations: AnimationSet,
    /// Top-left corner in pixel units.
    pub position: Vec2,
}

impl Sprite {
    /// A creature prototype. `table` is ordered left-alive, right-alive,
    /// left-dead, right-dead.
    pub fn creature(kind: SpriteKind, table: [Arc<Animation>; 4]) -> Self {
        debug_assert!(kind.is_creature());
        Self {
            kind,
            animations: AnimationSet::Creature(table),
            position: Vec2::ZERO,
        }
    }

    /// A power-up prototype with a single looping animation.
    pub fn power_up(kind: SpriteKind, animation: Arc<Animation>) -> Self {
        debug_assert!(kind.is_power_up());
        Self {
            kind,
            animations: AnimationSet::Single(animation),
            position: Vec2::ZERO,
        }
    }

    pub fn kind(&self) -> SpriteKind {
        self.kind
    }

    /// The animation for a given facing/liveness. Power-ups have a single
    /// animation and ignore both axes.
    pub fn animation(&self, facing: Facing, liveness: Liveness) -> &Arc<Animation> {
        match &self.animations {
            AnimationSet::Creature(table) => &table[table_index(facing, liveness)],
            AnimationSet::Single(anim) => anim,
        }
    }

    /// The animation a freshly spawned sprite shows (left-facing, alive).
    pub fn default_animation(&self) -> &Arc<Animation> {
        self.animation(Facing::Left, Liveness::Alive)
    }

    /// Width in pixels, taken from the first frame of the default animation.
    pub fn width(&self) -> u32 {
        self.default_animation()
            .frames()
            .first()
            .map_or(0, |f| f.bitmap.width())
    }

    /// Height in pixels, taken from the first frame of the default animation.
    pub fn height(&self) -> u32 {
        self.default_animation()
            .frames()
            .first()
            .map_or(0, |f| f.bitmap.height())
    }

    /// Pixel bounds as (top-left corner, size).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (
            self.position,
            Vec2::new(self.width() as f32, self.height() as f32),
        )
    }

    /// Clone this prototype into a live instance: animations stay shared,
    /// position starts at the origin. Instances never affect their prototype
    /// or each other.
    pub fn instantiate(&self) -> Sprite {
        Sprite {
            kind: self.kind,
            animations: self.animations.clone(),
            position: Vec2::ZERO,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
