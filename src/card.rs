//! The fold-open card and its glyph burst.
//!
//! The card is a two-state toggle. Opening spawns a one-shot [`Burst`]: a
//! ring of glyphs on fixed angular slots flying outward with staggered
//! delays, and schedules the inner message to appear after a short delay.
//! Closing hides the message immediately; the next open replays a fresh
//! burst. A burst already in flight is never cancelled — it just overlaps
//! the new one until it finishes and is culled.
//!
//! All timing is expressed against the presentation clock
//! ([`crate::time::Time`] elapsed seconds), so the whole interaction is
//! deterministic under a fixed timestep.

use crate::random::Randomness;
use crate::visuals::BURST_GLYPHS;
use glam::Vec2;
use std::f32::consts::TAU;

/// Tuning for the card interaction.
///
/// Defaults reproduce the original presentation: 16 glyphs, flight distance
/// 90-220 px, 35 ms stagger, 1.3 s flight, message reveal 600 ms after open.
#[derive(Clone, Debug)]
pub struct CardConfig {
    /// Glyphs per burst, evenly spaced over the full circle.
    pub burst_count: usize,
    /// Minimum flight distance in pixels.
    pub burst_distance_min: f32,
    /// Extra random flight distance on top of the minimum.
    pub burst_distance_spread: f32,
    /// Glyph size range minimum in pixels.
    pub glyph_size_min: f32,
    /// Extra random glyph size.
    pub glyph_size_spread: f32,
    /// Start delay added per slot, in seconds.
    pub stagger: f32,
    /// Flight duration per glyph, in seconds.
    pub flight_duration: f32,
    /// Seconds between opening and the inner message appearing.
    pub reveal_delay: f32,
    /// Glyph set cycled across slots.
    pub glyphs: &'static [char],
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            burst_count: 16,
            burst_distance_min: 90.0,
            burst_distance_spread: 130.0,
            glyph_size_min: 12.0,
            glyph_size_spread: 16.0,
            stagger: 0.035,
            flight_duration: 1.3,
            reveal_delay: 0.6,
            glyphs: &BURST_GLYPHS,
        }
    }
}

/// Which way the card currently faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Closed,
    Open,
}

/// One glyph of a burst, fixed at spawn.
#[derive(Clone, Debug)]
pub struct BurstGlyph {
    /// Angular slot in radians; slot `i` sits at `i / count * TAU`.
    pub angle: f32,
    /// Flight distance in pixels.
    pub distance: f32,
    /// Displayed glyph.
    pub glyph: char,
    /// Glyph size in pixels.
    pub size: f32,
    /// Start delay relative to the burst, in seconds.
    pub delay: f32,
}

/// A glyph's state at one instant of its flight.
#[derive(Clone, Copy, Debug)]
pub struct GlyphFrame {
    /// Offset from the burst center in pixels.
    pub offset: Vec2,
    /// Scale multiplier (0 → peak → 0 over the flight).
    pub scale: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Displayed glyph.
    pub glyph: char,
    /// Base size in pixels before scaling.
    pub size: f32,
}

/// One-shot radial glyph explosion.
#[derive(Clone, Debug)]
pub struct Burst {
    started_at: f32,
    duration: f32,
    glyphs: Vec<BurstGlyph>,
}

impl Burst {
    /// Spawn a burst at `now`, one glyph per angular slot.
    pub fn ignite(config: &CardConfig, rng: &mut Randomness, now: f32) -> Self {
        let count = config.burst_count.max(1);
        let glyphs = (0..count)
            .map(|i| BurstGlyph {
                angle: i as f32 / count as f32 * TAU,
                distance: config.burst_distance_min + rng.unit() * config.burst_distance_spread,
                glyph: config.glyphs[i % config.glyphs.len()],
                size: config.glyph_size_min + rng.unit() * config.glyph_size_spread,
                delay: i as f32 * config.stagger,
            })
            .collect();
        Self {
            started_at: now,
            duration: config.flight_duration,
            glyphs,
        }
    }

    /// The spawned glyphs, in slot order.
    #[inline]
    pub fn glyphs(&self) -> &[BurstGlyph] {
        &self.glyphs
    }

    /// When this burst was spawned, in presentation seconds.
    #[inline]
    pub fn started_at(&self) -> f32 {
        self.started_at
    }

    /// Whether every glyph has finished its flight.
    pub fn is_finished(&self, now: f32) -> bool {
        let last_delay = self
            .glyphs
            .last()
            .map(|g| g.delay)
            .unwrap_or(0.0);
        now - self.started_at >= last_delay + self.duration
    }

    /// Per-glyph frames at `now`. Glyphs still waiting on their delay or
    /// already finished are omitted.
    pub fn frames(&self, now: f32) -> Vec<GlyphFrame> {
        self.glyphs
            .iter()
            .filter_map(|g| {
                let t = (now - self.started_at - g.delay) / self.duration;
                if !(0.0..=1.0).contains(&t) {
                    return None;
                }
                let p = ease_out(t);
                Some(GlyphFrame {
                    offset: Vec2::new(g.angle.cos(), g.angle.sin()) * g.distance * p,
                    scale: scale_keyframe(t),
                    opacity: if t < 0.5 { 1.0 } else { 2.0 * (1.0 - t) },
                    glyph: g.glyph,
                    size: g.size,
                })
            })
            .collect()
    }
}

/// Scale keyframes 0 → 1.3 → 0 over normalized flight time.
fn scale_keyframe(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * 1.3
    } else {
        2.0 * (1.0 - t) * 1.3
    }
}

/// Decelerating ease, fast start and soft landing.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// The two-state card with burst and delayed reveal.
pub struct Card {
    config: CardConfig,
    face: CardFace,
    opened_at: Option<f32>,
    bursts: Vec<Burst>,
}

impl Card {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            face: CardFace::Closed,
            opened_at: None,
            bursts: Vec::new(),
        }
    }

    /// Current face.
    #[inline]
    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Whether the card is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.face == CardFace::Open
    }

    /// Flip the card at `now`. Opening spawns a fresh burst; closing hides
    /// the inner message immediately and leaves in-flight bursts to finish.
    pub fn toggle(&mut self, now: f32, rng: &mut Randomness) {
        match self.face {
            CardFace::Closed => {
                self.face = CardFace::Open;
                self.opened_at = Some(now);
                self.bursts.push(Burst::ignite(&self.config, rng, now));
            }
            CardFace::Open => {
                self.face = CardFace::Closed;
                self.opened_at = None;
            }
        }
    }

    /// Whether the inner message is visible at `now`.
    ///
    /// True once the card has been open for the reveal delay; false the
    /// instant the card closes, regardless of any pending delay.
    pub fn inside_revealed(&self, now: f32) -> bool {
        match (self.face, self.opened_at) {
            (CardFace::Open, Some(t)) => now - t >= self.config.reveal_delay,
            _ => false,
        }
    }

    /// Drop bursts whose every glyph has landed.
    pub fn cull_finished(&mut self, now: f32) {
        self.bursts.retain(|b| !b.is_finished(now));
    }

    /// Bursts currently alive, oldest first.
    #[inline]
    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    /// Tuning in effect.
    #[inline]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }
}
