//! Scroll progress tracking.
//!
//! Sections report visibility transitions through [`VisibilityObserver`];
//! the [`ProgressTracker`] records the last section reported visible as
//! "current" and classifies each indicator marker as visited, current, or
//! pending.
//!
//! [`SectionWatcher`] is the edge detector between raw per-section
//! visibility fractions (computed by the layout, see [`crate::scene`]) and
//! the observer: it fires `on_visibility_change` only when a section crosses
//! its threshold, in either direction.

/// Receives visibility transitions for stacked sections.
///
/// `visible` is edge-triggered: `true` when the section's visible fraction
/// rises to its threshold, `false` when it falls below again.
pub trait VisibilityObserver {
    fn on_visibility_change(&mut self, section: usize, visible: bool);
}

/// Indicator style for one progress marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Before the current section: small, dimmed-but-warm.
    Visited,
    /// The current section: emphasized (larger, accent color).
    Current,
    /// After the current section: small, pale.
    Pending,
}

/// Tracks which section is current and renders marker styles.
///
/// Last-reported-wins: whichever section most recently became visible is
/// current. Sections leaving the viewport do not move the index back.
#[derive(Debug)]
pub struct ProgressTracker {
    sections: usize,
    current: usize,
}

impl ProgressTracker {
    /// Track `sections` stacked sections, starting at index 0.
    pub fn new(sections: usize) -> Self {
        Self {
            sections,
            current: 0,
        }
    }

    /// Index of the current section, always in `0..sections`.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Total number of markers.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections
    }

    /// Whether there are no sections at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections == 0
    }

    /// Style for the marker at `index`.
    pub fn marker(&self, index: usize) -> MarkerStyle {
        use std::cmp::Ordering::*;
        match index.cmp(&self.current) {
            Less => MarkerStyle::Visited,
            Equal => MarkerStyle::Current,
            Greater => MarkerStyle::Pending,
        }
    }
}

impl VisibilityObserver for ProgressTracker {
    fn on_visibility_change(&mut self, section: usize, visible: bool) {
        if visible && section < self.sections {
            self.current = section;
        }
    }
}

/// Edge detector turning visibility fractions into observer calls.
///
/// Holds one threshold and one last-known state per section. Feed it the
/// full fraction slice whenever the scroll position changes; it emits a
/// transition per section that crossed its threshold since the last call.
#[derive(Debug)]
pub struct SectionWatcher {
    thresholds: Vec<f32>,
    visible: Vec<bool>,
}

impl SectionWatcher {
    /// One threshold per section, in section order.
    pub fn new(thresholds: Vec<f32>) -> Self {
        let visible = vec![false; thresholds.len()];
        Self {
            thresholds,
            visible,
        }
    }

    /// Number of watched sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Whether no sections are watched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Compare fractions against thresholds and report transitions.
    ///
    /// `fractions[i]` is how much of section `i` currently intersects the
    /// viewport, in `[0, 1]`. Extra fractions beyond the watched sections
    /// are ignored; missing ones count as not visible.
    pub fn observe(&mut self, fractions: &[f32], observer: &mut dyn VisibilityObserver) {
        for i in 0..self.thresholds.len() {
            let fraction = fractions.get(i).copied().unwrap_or(0.0);
            let now_visible = fraction >= self.thresholds[i];
            if now_visible != self.visible[i] {
                self.visible[i] = now_visible;
                observer.on_visibility_change(i, now_visible);
            }
        }
    }

    /// Drop all remembered state, as if nothing had ever been visible.
    pub fn reset(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = false);
    }
}
