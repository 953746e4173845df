//! Scenes and the vertical scroll layout.
//!
//! A presentation is a stack of full-viewport sections: N text scenes
//! followed by the card finale. [`SceneStack`] owns the scene data and the
//! scroll state, and computes how much of each section intersects the
//! viewport — the numbers fed to the visibility watcher
//! ([`crate::tracker::SectionWatcher`]).

use crate::visuals::scene_colors;
use glam::Vec3;

/// Visibility threshold for text scenes (fraction of section height).
pub const SCENE_THRESHOLD: f32 = 0.5;

/// Visibility threshold for the finale section.
pub const FINALE_THRESHOLD: f32 = 0.3;

/// One full-viewport text panel.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Stable identifier, used in logs.
    pub id: &'static str,
    /// Headline text.
    pub text: &'static str,
    /// Secondary line under the headline.
    pub sub: &'static str,
    /// Optional nudge shown on the first scene ("scroll down").
    pub hint: Option<&'static str>,
    /// Background fill.
    pub background: Vec3,
    /// Headline color.
    pub text_color: Vec3,
    /// Accent color for the subline and decor.
    pub accent: Vec3,
}

impl Scene {
    /// A cream-background scene with default text colors.
    pub fn new(id: &'static str, text: &'static str, sub: &'static str) -> Self {
        Self {
            id,
            text,
            sub,
            hint: None,
            background: scene_colors::cream(),
            text_color: scene_colors::text_primary(),
            accent: scene_colors::rose_mid(),
        }
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }

    pub fn with_colors(mut self, text_color: Vec3, accent: Vec3) -> Self {
        self.text_color = text_color;
        self.accent = accent;
        self
    }
}

/// The scene list plus scroll state.
///
/// Sections are each exactly one viewport high; the finale (card) section is
/// the last one. Scroll offset is clamped so the viewport never leaves the
/// stack.
#[derive(Debug)]
pub struct SceneStack {
    scenes: Vec<Scene>,
    viewport_height: f32,
    offset: f32,
}

impl SceneStack {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self {
            scenes,
            viewport_height: 0.0,
            offset: 0.0,
        }
    }

    /// The text scenes (not counting the finale).
    #[inline]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Total sections: text scenes plus the finale.
    #[inline]
    pub fn section_count(&self) -> usize {
        self.scenes.len() + 1
    }

    /// Index of the finale section.
    #[inline]
    pub fn finale_index(&self) -> usize {
        self.scenes.len()
    }

    /// Per-section thresholds, in section order.
    pub fn thresholds(&self) -> Vec<f32> {
        let mut t = vec![SCENE_THRESHOLD; self.scenes.len()];
        t.push(FINALE_THRESHOLD);
        t
    }

    /// Track a new viewport height, re-clamping the offset.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Current scroll offset in pixels from the top of the stack.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Scroll by a pixel delta (positive scrolls down), clamped to the stack.
    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// Jump to a section so it fills the viewport exactly.
    pub fn scroll_to_section(&mut self, index: usize) {
        self.offset = (index as f32 * self.viewport_height).clamp(0.0, self.max_offset());
    }

    fn max_offset(&self) -> f32 {
        let total = self.section_count() as f32 * self.viewport_height;
        (total - self.viewport_height).max(0.0)
    }

    /// Fraction of section `index` currently inside the viewport, in `[0,1]`.
    ///
    /// Sections are stacked at `index * viewport_height`; the viewport spans
    /// `offset .. offset + viewport_height`.
    pub fn visible_fraction(&self, index: usize) -> f32 {
        if self.viewport_height <= 0.0 || index >= self.section_count() {
            return 0.0;
        }
        let top = index as f32 * self.viewport_height;
        let bottom = top + self.viewport_height;
        let view_top = self.offset;
        let view_bottom = self.offset + self.viewport_height;

        let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
        overlap / self.viewport_height
    }

    /// Visible fractions for all sections, in section order.
    pub fn visible_fractions(&self) -> Vec<f32> {
        (0..self.section_count())
            .map(|i| self.visible_fraction(i))
            .collect()
    }

    /// Background color for the current scroll position, crossfading across
    /// section boundaries instead of popping.
    pub fn background_at_offset(&self) -> Vec3 {
        if self.viewport_height <= 0.0 {
            return scene_colors::cream();
        }
        // Offset in section units: 0 while resting on section 0, blending
        // toward section 1 as the boundary scrolls past.
        let pos = self.offset / self.viewport_height;
        let index = (pos as usize).min(self.section_count() - 1);
        let frac = pos - index as f32;

        let of = |i: usize| -> Vec3 {
            self.scenes
                .get(i)
                .map(|s| s.background)
                .unwrap_or_else(scene_colors::rose_whisper)
        };
        of(index).lerp(of((index + 1).min(self.section_count() - 1)), frac)
    }
}

/// The six scenes of the default greeting, playful to warm.
pub fn default_scenes() -> Vec<Scene> {
    vec![
        Scene::new("intro", "Hey, you 👋", "there's something here for you")
            .with_hint("scroll down ↓"),
        Scene::new("tease1", "No no, not that fast", " 😏")
            .with_background(scene_colors::rose_whisper())
            .with_colors(scene_colors::text_primary(), scene_colors::rose_light()),
        Scene::new("tease2", "Just a little further...", " 🤭")
            .with_colors(scene_colors::text_secondary(), scene_colors::gold_light()),
        Scene::new("warm1", "You know what I realized?", "the best moments are the ones with you in them")
            .with_background(scene_colors::rose_whisper())
            .with_colors(scene_colors::rose_deep(), scene_colors::rose_light()),
        Scene::new("warm2", "Even silence sounds lovely with you", "♡")
            .with_background(scene_colors::rose_whisper())
            .with_colors(scene_colors::rose_deep(), scene_colors::rose_mid()),
        Scene::new("prefinal", "Alright, enough suspense", "...")
            .with_colors(scene_colors::text_primary(), scene_colors::gold()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> SceneStack {
        let mut s = SceneStack::new(default_scenes());
        s.set_viewport_height(800.0);
        s
    }

    #[test]
    fn test_section_count_includes_finale() {
        let s = stack();
        assert_eq!(s.scenes().len(), 6);
        assert_eq!(s.section_count(), 7);
        assert_eq!(s.finale_index(), 6);
    }

    #[test]
    fn test_thresholds_per_section() {
        let t = stack().thresholds();
        assert_eq!(t.len(), 7);
        assert!(t[..6].iter().all(|&x| x == SCENE_THRESHOLD));
        assert_eq!(t[6], FINALE_THRESHOLD);
    }

    #[test]
    fn test_fraction_at_rest() {
        let s = stack();
        assert_eq!(s.visible_fraction(0), 1.0);
        assert_eq!(s.visible_fraction(1), 0.0);
    }

    #[test]
    fn test_fraction_mid_scroll() {
        let mut s = stack();
        s.scroll_by(200.0); // a quarter of a section down
        assert!((s.visible_fraction(0) - 0.75).abs() < 1e-5);
        assert!((s.visible_fraction(1) - 0.25).abs() < 1e-5);
        assert_eq!(s.visible_fraction(2), 0.0);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut s = stack();
        s.scroll_by(-500.0);
        assert_eq!(s.offset(), 0.0);
        s.scroll_by(1e9);
        // Bottom of the stack: finale fully visible.
        assert_eq!(s.visible_fraction(s.finale_index()), 1.0);
    }

    #[test]
    fn test_scroll_to_section() {
        let mut s = stack();
        s.scroll_to_section(3);
        assert_eq!(s.visible_fraction(3), 1.0);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut s = stack();
        s.scroll_by(1e9);
        let bottom = s.offset();
        s.set_viewport_height(400.0);
        assert!(s.offset() <= bottom);
        assert!(s.offset() <= 6.0 * 400.0);
    }

    #[test]
    fn test_fractions_sum_to_one_mid_stack() {
        let mut s = stack();
        s.scroll_by(1234.0);
        let sum: f32 = s.visible_fractions().iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
    }
}
