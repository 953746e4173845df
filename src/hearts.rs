//! Floating hearts — the faint background layer behind the scenes.
//!
//! Twenty heart glyphs rise slowly from the bottom of the window on looping
//! tracks, each with its own lane, size, start delay, loop duration,
//! horizontal drift, and opacity. Tracks are fixed at construction; a
//! heart's placement at any instant is a pure function of elapsed time, so
//! the layer needs no per-frame mutation at all.

use crate::random::Randomness;
use glam::Vec2;

/// Tuning for the heart layer. Defaults match the original presentation.
#[derive(Clone, Debug)]
pub struct HeartsConfig {
    /// Number of hearts.
    pub count: usize,
    /// Glyph size range: `size_min + rand * size_spread` pixels.
    pub size_min: f32,
    pub size_spread: f32,
    /// Start delay range: `rand * delay_max` seconds.
    pub delay_max: f32,
    /// Loop duration range: `duration_min + rand * duration_spread` seconds.
    pub duration_min: f32,
    pub duration_spread: f32,
    /// Horizontal drift span over one loop, centered on zero, in pixels.
    pub drift_span: f32,
    /// Opacity range: `opacity_min + rand * opacity_spread`.
    pub opacity_min: f32,
    pub opacity_spread: f32,
}

impl Default for HeartsConfig {
    fn default() -> Self {
        Self {
            count: 20,
            size_min: 8.0,
            size_spread: 14.0,
            delay_max: 14.0,
            duration_min: 12.0,
            duration_spread: 10.0,
            drift_span: 50.0,
            opacity_min: 0.06,
            opacity_spread: 0.12,
        }
    }
}

/// One heart's fixed track.
#[derive(Clone, Debug)]
pub struct Heart {
    /// Horizontal lane as a fraction of window width, in `[0, 1)`.
    pub lane: f32,
    /// Glyph size in pixels.
    pub size: f32,
    /// Seconds before the first loop starts.
    pub delay: f32,
    /// Seconds per bottom-to-top pass.
    pub duration: f32,
    /// Horizontal drift over one pass, in pixels.
    pub drift: f32,
    /// Peak opacity.
    pub opacity: f32,
}

/// A heart's placement at one instant.
#[derive(Clone, Copy, Debug)]
pub struct HeartFrame {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
}

/// The fixed set of heart tracks.
pub struct HeartLayer {
    hearts: Vec<Heart>,
}

impl HeartLayer {
    /// Roll `config.count` tracks from the given source.
    pub fn new(config: &HeartsConfig, rng: &mut Randomness) -> Self {
        let hearts = (0..config.count)
            .map(|_| Heart {
                lane: rng.unit(),
                size: config.size_min + rng.unit() * config.size_spread,
                delay: rng.unit() * config.delay_max,
                duration: config.duration_min + rng.unit() * config.duration_spread,
                drift: rng.centered(config.drift_span),
                opacity: config.opacity_min + rng.unit() * config.opacity_spread,
            })
            .collect();
        Self { hearts }
    }

    /// The rolled tracks.
    #[inline]
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Placements of all currently visible hearts at `now` over a window of
    /// `bounds` pixels. Hearts still waiting out their delay are omitted.
    pub fn frames(&self, now: f32, bounds: Vec2) -> Vec<HeartFrame> {
        self.hearts
            .iter()
            .filter_map(|h| {
                let active = now - h.delay;
                if active < 0.0 {
                    return None;
                }
                // Phase 0 at the bottom edge, 1 just above the top edge.
                let phase = (active / h.duration).fract();
                let x = h.lane * bounds.x + h.drift * phase;
                let y = bounds.y + h.size - phase * (bounds.y + 2.0 * h.size);
                // Fade in at the bottom and out near the top.
                let edge = (phase * 8.0).min((1.0 - phase) * 4.0).clamp(0.0, 1.0);
                Some(HeartFrame {
                    position: Vec2::new(x, y),
                    size: h.size,
                    opacity: h.opacity * edge,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(seed: u64) -> HeartLayer {
        HeartLayer::new(&HeartsConfig::default(), &mut Randomness::from_seed(seed))
    }

    #[test]
    fn test_rolls_configured_count() {
        assert_eq!(layer(1).hearts().len(), 20);
    }

    #[test]
    fn test_delayed_hearts_hidden() {
        let l = layer(2);
        // At t=0 only hearts with (near-)zero delay can show.
        let visible = l.frames(0.0, Vec2::new(1000.0, 800.0)).len();
        assert!(visible < l.hearts().len());
        // Far into the run, every heart is looping.
        let all = l.frames(100.0, Vec2::new(1000.0, 800.0)).len();
        assert!(all >= visible);
    }

    #[test]
    fn test_hearts_rise() {
        let l = layer(3);
        let bounds = Vec2::new(1000.0, 800.0);
        let h = &l.hearts()[0];
        let t0 = h.delay + 0.1 * h.duration;
        let t1 = h.delay + 0.4 * h.duration;
        let y0 = frame_for(&l, 0, t0, bounds).position.y;
        let y1 = frame_for(&l, 0, t1, bounds).position.y;
        assert!(y1 < y0, "later in the loop means higher on screen");
    }

    #[test]
    fn test_same_seed_same_tracks() {
        let a = layer(4);
        let b = layer(4);
        for (x, y) in a.hearts().iter().zip(b.hearts()) {
            assert_eq!(x.lane, y.lane);
            assert_eq!(x.duration, y.duration);
        }
    }

    fn frame_for(layer: &HeartLayer, index: usize, now: f32, bounds: Vec2) -> HeartFrame {
        let h = &layer.hearts()[index];
        let phase = ((now - h.delay) / h.duration).fract();
        let x = h.lane * bounds.x + h.drift * phase;
        let y = bounds.y + h.size - phase * (bounds.y + 2.0 * h.size);
        HeartFrame {
            position: Vec2::new(x, y),
            size: h.size,
            opacity: h.opacity,
        }
    }
}
