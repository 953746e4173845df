//! Ambient sparkle field simulation.
//!
//! A [`SparkleField`] owns a small pool of fading light points drawn over the
//! whole window. Each tick it may spawn one sparkle (probabilistic, capped),
//! advances every sparkle by its velocity, fades it by its decay rate, and
//! removes it once fully transparent. The field never exceeds
//! [`FieldConfig::cap`] live sparkles.
//!
//! The field is an explicit owned resource: construct it, `set_bounds` on
//! resize, call [`SparkleField::tick`] once per frame, and `stop()` to freeze
//! it. Nothing outside the field holds a reference to a sparkle across ticks.
//!
//! ```ignore
//! let mut field = SparkleField::new(FieldConfig::default(), Randomness::from_entropy());
//! field.set_bounds(Vec2::new(1280.0, 720.0));
//! loop {
//!     field.tick();
//!     draw(field.sparkles());
//! }
//! ```

use crate::random::Randomness;
use crate::visuals::Palette;
use glam::{Vec2, Vec3};
use std::ops::Range;

/// Tuning for the sparkle field.
///
/// Defaults reproduce the original presentation: at most 60 sparkles, a 15%
/// spawn chance per tick, slow drift, and a rose/gold palette.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Maximum live sparkles. Spawning pauses at the cap.
    pub cap: usize,
    /// Probability of spawning one sparkle on a given tick.
    pub spawn_chance: f32,
    /// Velocity span per axis; each axis gets a value in `-speed/2..speed/2`
    /// (px per tick).
    pub speed: f32,
    /// Radius range in pixels.
    pub radius: Range<f32>,
    /// Initial opacity range.
    pub opacity: Range<f32>,
    /// Opacity lost per tick.
    pub decay: Range<f32>,
    /// Color stops sampled per sparkle.
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cap: 60,
            spawn_chance: 0.15,
            speed: 0.25,
            radius: 0.5..2.5,
            opacity: 0.1..0.5,
            decay: 0.002..0.005,
            palette: Palette::RoseGold,
        }
    }
}

/// One point of ambient light.
#[derive(Clone, Debug)]
pub struct Sparkle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub decay: f32,
    pub color: Vec3,
}

/// The sparkle pool and its tick loop.
pub struct SparkleField {
    config: FieldConfig,
    sparkles: Vec<Sparkle>,
    bounds: Vec2,
    rng: Randomness,
    running: bool,
}

impl SparkleField {
    /// Create a field with no sparkles and zero bounds.
    ///
    /// Call [`set_bounds`](Self::set_bounds) before the first tick; with
    /// zero-area bounds the field spawns nothing.
    pub fn new(config: FieldConfig, rng: Randomness) -> Self {
        let sparkles = Vec::with_capacity(config.cap);
        Self {
            config,
            sparkles,
            bounds: Vec2::ZERO,
            rng,
            running: true,
        }
    }

    /// Track a new surface size. Existing sparkles keep their positions;
    /// ones outside the new bounds fade out naturally.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Current tracked surface size.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Resume ticking after `stop()`.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze the field: ticks become no-ops until `start()`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the field is currently ticking.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the simulation by one tick: maybe spawn, move, fade, cull.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        if self.bounds.x > 0.0
            && self.bounds.y > 0.0
            && self.sparkles.len() < self.config.cap
            && self.rng.chance(self.config.spawn_chance)
        {
            let sparkle = self.spawn_one();
            self.sparkles.push(sparkle);
        }

        for s in &mut self.sparkles {
            s.position += s.velocity;
            s.opacity -= s.decay;
        }
        self.sparkles.retain(|s| s.opacity > 0.0);
    }

    fn spawn_one(&mut self) -> Sparkle {
        let cfg = &self.config;
        let colors = cfg.palette.colors();
        Sparkle {
            position: Vec2::new(
                self.rng.range(0.0, self.bounds.x),
                self.rng.range(0.0, self.bounds.y),
            ),
            velocity: Vec2::new(
                self.rng.centered(cfg.speed),
                self.rng.centered(cfg.speed),
            ),
            radius: self.rng.range(cfg.radius.start, cfg.radius.end),
            opacity: self.rng.range(cfg.opacity.start, cfg.opacity.end),
            decay: self.rng.range(cfg.decay.start, cfg.decay.end),
            color: *self.rng.pick(&colors),
        }
    }

    /// Live sparkles, valid until the next tick.
    #[inline]
    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    /// Number of live sparkles.
    #[inline]
    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    /// Whether the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    /// Remove all sparkles without changing the running state.
    pub fn clear(&mut self) {
        self.sparkles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field(seed: u64) -> SparkleField {
        let mut field = SparkleField::new(FieldConfig::default(), Randomness::from_seed(seed));
        field.set_bounds(Vec2::new(1280.0, 720.0));
        field
    }

    #[test]
    fn test_population_never_exceeds_cap() {
        let mut field = test_field(1);
        for _ in 0..10_000 {
            field.tick();
            assert!(field.len() <= 60);
        }
    }

    #[test]
    fn test_opacity_monotonic_and_in_range() {
        let mut field = test_field(2);
        for _ in 0..200 {
            field.tick();
        }
        for s in field.sparkles() {
            assert!(s.opacity > 0.0 && s.opacity <= 1.0);
        }
        let before: Vec<Sparkle> = field.sparkles().to_vec();
        field.tick();

        // Survivors keep their order; anything the tick spawned sits at the
        // tail with no "before" counterpart.
        let expected: Vec<&Sparkle> =
            before.iter().filter(|s| s.opacity - s.decay > 0.0).collect();
        assert!(field.len() >= expected.len());
        assert!(field.len() <= expected.len() + 1);
        for (s, prev) in field.sparkles().iter().zip(&expected) {
            assert!(s.opacity < prev.opacity);
            assert!((s.opacity - (prev.opacity - prev.decay)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_faded_sparkles_removed() {
        let mut field = test_field(3);
        for _ in 0..100 {
            field.tick();
        }
        // Force everything to the edge of death, then tick once.
        let n = field.len();
        assert!(n > 0);
        for s in &mut field.sparkles {
            s.opacity = 0.0001;
            s.decay = 1.0;
        }
        field.tick();
        // Only a possible fresh spawn from this tick remains.
        assert!(field.len() <= 1);
    }

    #[test]
    fn test_positions_advance_by_velocity() {
        let mut field = test_field(4);
        while field.is_empty() {
            field.tick();
        }
        let s = field.sparkles()[0].clone();
        field.tick();
        let moved = &field.sparkles()[0];
        let expected = s.position + s.velocity;
        assert!((moved.position - expected).length() < 1e-5);
    }

    #[test]
    fn test_stop_freezes_field() {
        let mut field = test_field(5);
        for _ in 0..50 {
            field.tick();
        }
        let before = field.len();
        field.stop();
        for _ in 0..50 {
            field.tick();
        }
        assert_eq!(field.len(), before);
    }

    #[test]
    fn test_zero_bounds_spawns_nothing() {
        let mut field = SparkleField::new(FieldConfig::default(), Randomness::from_seed(6));
        for _ in 0..100 {
            field.tick();
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_set_bounds_is_idempotent() {
        let mut field = test_field(7);
        field.set_bounds(Vec2::new(800.0, 600.0));
        field.set_bounds(Vec2::new(800.0, 600.0));
        assert_eq!(field.bounds(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = test_field(8);
        let mut b = test_field(8);
        for _ in 0..500 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.len(), b.len());
        for (x, y) in a.sparkles().iter().zip(b.sparkles()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.opacity, y.opacity);
        }
    }
}
