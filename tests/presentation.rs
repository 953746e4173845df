//! End-to-end scenarios for the scroll tracker and the card interaction,
//! driven headlessly through the public API.

use cardlet::prelude::*;
use cardlet::{FINALE_THRESHOLD, SCENE_THRESHOLD};

/// Observer that records every transition alongside a ProgressTracker.
struct Recorder {
    tracker: ProgressTracker,
    became_current: Vec<usize>,
}

impl VisibilityObserver for Recorder {
    fn on_visibility_change(&mut self, section: usize, visible: bool) {
        self.tracker.on_visibility_change(section, visible);
        if visible {
            self.became_current.push(section);
        }
    }
}

fn scrolled_stack() -> (SceneStack, SectionWatcher, Recorder) {
    let mut stack = SceneStack::new(default_scenes());
    stack.set_viewport_height(800.0);
    let watcher = SectionWatcher::new(stack.thresholds());
    let recorder = Recorder {
        tracker: ProgressTracker::new(stack.section_count()),
        became_current: Vec::new(),
    };
    (stack, watcher, recorder)
}

#[test]
fn scrolling_to_section_three_advances_once_per_boundary() {
    let (mut stack, mut watcher, mut rec) = scrolled_stack();

    // Settle the initial state: section 0 fully visible.
    watcher.observe(&stack.visible_fractions(), &mut rec);
    assert_eq!(rec.tracker.current(), 0);
    rec.became_current.clear();

    // Scroll smoothly down to the top of section 3, 20 px per step.
    let target = 3.0 * 800.0;
    while stack.offset() < target {
        stack.scroll_by(20.0);
        watcher.observe(&stack.visible_fractions(), &mut rec);
    }

    assert_eq!(rec.tracker.current(), 3);
    // One "became current" event per boundary crossed, in order.
    assert_eq!(rec.became_current, vec![1, 2, 3]);
}

#[test]
fn finale_uses_lower_threshold_than_scenes() {
    assert!(FINALE_THRESHOLD < SCENE_THRESHOLD);

    let (mut stack, mut watcher, mut rec) = scrolled_stack();
    watcher.observe(&stack.visible_fractions(), &mut rec);

    // Park so the finale shows 35% — above its own threshold, below a
    // scene's.
    let finale = stack.finale_index();
    stack.scroll_by(finale as f32 * 800.0 - 800.0 * 0.65);
    watcher.observe(&stack.visible_fractions(), &mut rec);

    assert_eq!(rec.tracker.current(), finale);
}

#[test]
fn markers_reflect_scroll_position() {
    let (mut stack, mut watcher, mut rec) = scrolled_stack();
    stack.scroll_to_section(2);
    watcher.observe(&stack.visible_fractions(), &mut rec);

    assert_eq!(rec.tracker.marker(0), MarkerStyle::Visited);
    assert_eq!(rec.tracker.marker(2), MarkerStyle::Current);
    assert_eq!(rec.tracker.marker(3), MarkerStyle::Pending);
}

#[test]
fn card_open_close_open_replays_independent_bursts() {
    let mut card = Card::new(CardConfig::default());
    let mut rng = Randomness::from_seed(99);
    let mut time = Time::new();
    time.set_fixed_delta(Some(1.0 / 60.0));

    // Open.
    let (now, _) = time.update();
    card.toggle(now, &mut rng);
    assert_eq!(card.face(), CardFace::Open);
    assert_eq!(card.bursts()[0].glyphs().len(), 16);
    assert!(!card.inside_revealed(now), "reveal waits 600ms");

    // Well past the 600ms delay the message shows.
    for _ in 0..40 {
        time.update();
    }
    assert!(card.inside_revealed(time.elapsed()));

    // Close: hidden immediately.
    card.toggle(time.elapsed(), &mut rng);
    assert_eq!(card.face(), CardFace::Closed);
    assert!(!card.inside_revealed(time.elapsed()));

    // Re-open while the first burst is still flying: two live bursts with
    // independent randomization.
    let (now, _) = time.update();
    card.toggle(now, &mut rng);
    card.cull_finished(now);
    assert_eq!(card.bursts().len(), 2);

    let a = card.bursts()[0].glyphs();
    let b = card.bursts()[1].glyphs();
    let identical = a
        .iter()
        .zip(b)
        .filter(|(x, y)| x.distance == y.distance && x.size == y.size)
        .count();
    assert!(identical < a.len());
}

#[test]
fn burst_angles_cover_the_circle() {
    let mut rng = Randomness::from_seed(5);
    let burst = Burst::ignite(&CardConfig::default(), &mut rng, 0.0);

    let step = std::f32::consts::TAU / 16.0;
    let angles: Vec<f32> = burst.glyphs().iter().map(|g| g.angle).collect();
    for (i, angle) in angles.iter().enumerate() {
        assert!((angle - i as f32 * step).abs() < 1e-5);
    }
    // Distinct slots, full circle, no wraparound duplicates.
    assert!(angles.last().unwrap() < &std::f32::consts::TAU);
}

#[test]
fn field_invariants_hold_through_a_long_run() {
    let mut field = SparkleField::new(FieldConfig::default(), Randomness::from_seed(7));
    field.set_bounds(Vec2::new(1280.0, 720.0));

    for _ in 0..5_000 {
        field.tick();
        assert!(field.len() <= 60);
        for s in field.sparkles() {
            assert!(s.opacity > 0.0);
            assert!(s.opacity <= 1.0);
        }
    }

    // Resizing twice to the same bounds changes nothing the next tick
    // depends on.
    field.set_bounds(Vec2::new(640.0, 480.0));
    let count = field.len();
    field.set_bounds(Vec2::new(640.0, 480.0));
    assert_eq!(field.len(), count);
    assert_eq!(field.bounds(), Vec2::new(640.0, 480.0));
}
