//! # cardlet — scroll-driven animated greeting cards
//!
//! A cardlet presentation is a vertical stack of full-viewport scenes that
//! the viewer scrolls through, ending in a card they click to fold open.
//! Ambient sparkles and faint drifting hearts run behind everything; a
//! progress indicator tracks which scene is current.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cardlet::prelude::*;
//!
//! fn main() -> Result<(), PresentationError> {
//!     Presentation::new()
//!         .with_scenes(default_scenes())
//!         .with_title("for you")
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sparkle field
//!
//! A capped pool of fading light points ([`SparkleField`]). Each tick it
//! may spawn one sparkle, drifts every sparkle by its velocity, fades it by
//! its decay rate, and removes it at zero opacity. Tuned via
//! [`FieldConfig`]; all the classic knobs (cap, spawn chance, palette) are
//! configuration, not literals.
//!
//! ### Scroll tracking
//!
//! The layout ([`SceneStack`]) computes how much of each section intersects
//! the viewport. [`SectionWatcher`] turns those fractions into
//! edge-triggered [`VisibilityObserver`] calls, and [`ProgressTracker`]
//! keeps the last section reported visible as "current" for the indicator
//! markers.
//!
//! ### The card
//!
//! [`Card`] is a two-state toggle. Opening spawns a [`Burst`] — a ring of
//! glyphs on evenly spaced angular slots with randomized distances and
//! staggered delays — and reveals the inner message after a short delay.
//! Closing hides the message immediately; re-opening replays a fresh burst.
//!
//! ### Determinism
//!
//! All randomness flows through the seedable [`Randomness`] source and all
//! timing through [`Time`], which supports a fixed timestep. Under
//! `.with_seed(..)` plus a fixed delta, a presentation is fully
//! reproducible — the property tests rely on this.
//!
//! ## No GPU?
//!
//! The simulation layer (field, tracker, card, hearts) has no rendering
//! dependencies and runs headless. The windowed runner degrades gracefully:
//! if no adapter or device is available, it logs a warning and keeps
//! running without drawing.

pub mod app;
pub mod card;
pub mod error;
pub mod field;
mod gpu;
pub mod hearts;
pub mod random;
pub mod scene;
pub mod time;
pub mod tracker;
pub mod visuals;

pub use app::Presentation;
pub use card::{Burst, BurstGlyph, Card, CardConfig, CardFace, GlyphFrame};
pub use error::{GpuError, PresentationError};
pub use field::{FieldConfig, Sparkle, SparkleField};
pub use glam::{Vec2, Vec3, Vec4};
pub use hearts::{Heart, HeartFrame, HeartLayer, HeartsConfig};
pub use random::Randomness;
pub use scene::{default_scenes, Scene, SceneStack, FINALE_THRESHOLD, SCENE_THRESHOLD};
pub use time::Time;
pub use tracker::{MarkerStyle, ProgressTracker, SectionWatcher, VisibilityObserver};
pub use visuals::{Palette, BURST_GLYPHS};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use cardlet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::Presentation;
    pub use crate::card::{Burst, Card, CardConfig, CardFace};
    pub use crate::error::PresentationError;
    pub use crate::field::{FieldConfig, SparkleField};
    pub use crate::hearts::{HeartLayer, HeartsConfig};
    pub use crate::random::Randomness;
    pub use crate::scene::{default_scenes, Scene, SceneStack};
    pub use crate::time::Time;
    pub use crate::tracker::{MarkerStyle, ProgressTracker, SectionWatcher, VisibilityObserver};
    pub use crate::visuals::Palette;
    pub use crate::{Vec2, Vec3, Vec4};
}
