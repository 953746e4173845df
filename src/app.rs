//! Presentation builder and runner.
//!
//! [`Presentation`] is the entry point: configure scenes, the card, the
//! sparkle field, and an optional seed, then call `.run()` to open the
//! window. The internal `App` drives one tick per redraw: advance time,
//! tick the field, cull finished bursts, re-observe scroll visibility, and
//! hand the sprite list to the GPU.
//!
//! ```ignore
//! Presentation::new()
//!     .with_scenes(default_scenes())
//!     .with_title("for you")
//!     .run()?;
//! ```
//!
//! If no GPU is available the window still opens and the state machines
//! still tick; the presentation just draws nothing. Failure to set up the
//! ambient layer is logged, never fatal.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::card::{Card, CardConfig};
use crate::error::PresentationError;
use crate::field::{FieldConfig, SparkleField};
use crate::gpu::{GpuState, SpriteInstance, SpriteShape};
use crate::hearts::{HeartLayer, HeartsConfig};
use crate::random::Randomness;
use crate::scene::{Scene, SceneStack};
use crate::time::Time;
use crate::tracker::{MarkerStyle, ProgressTracker, SectionWatcher};
use crate::visuals::scene_colors;

/// Pixels scrolled per mouse-wheel line.
const WHEEL_LINE_PX: f32 = 80.0;

/// A greeting presentation, built with method chaining.
pub struct Presentation {
    scenes: Vec<Scene>,
    field_config: FieldConfig,
    hearts_config: HeartsConfig,
    card_config: CardConfig,
    title: String,
    seed: Option<u64>,
}

impl Presentation {
    /// Create a presentation with no scenes and default tuning.
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            field_config: FieldConfig::default(),
            hearts_config: HeartsConfig::default(),
            card_config: CardConfig::default(),
            title: "cardlet".to_string(),
            seed: None,
        }
    }

    /// Set the scroll scenes shown before the card finale.
    pub fn with_scenes(mut self, scenes: Vec<Scene>) -> Self {
        self.scenes = scenes;
        self
    }

    /// Tune the sparkle field.
    pub fn with_field(mut self, config: FieldConfig) -> Self {
        self.field_config = config;
        self
    }

    /// Tune the floating hearts layer.
    pub fn with_hearts(mut self, config: HeartsConfig) -> Self {
        self.hearts_config = config;
        self
    }

    /// Tune the card interaction.
    pub fn with_card(mut self, config: CardConfig) -> Self {
        self.card_config = config;
        self
    }

    /// Window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fix the random seed. Mostly useful for screenshots and tests; by
    /// default every run rolls fresh sparkles, hearts, and bursts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Open the window and run until closed.
    pub fn run(self) -> Result<(), PresentationError> {
        if self.scenes.is_empty() {
            return Err(PresentationError::NoScenes);
        }

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    title: String,

    time: Time,
    rng: Randomness,
    field: SparkleField,
    hearts: HeartLayer,
    stack: SceneStack,
    watcher: SectionWatcher,
    tracker: ProgressTracker,
    card: Card,
}

impl App {
    fn new(config: Presentation) -> Self {
        let mut rng = match config.seed {
            Some(seed) => Randomness::from_seed(seed),
            None => Randomness::from_entropy(),
        };
        let field = SparkleField::new(
            config.field_config,
            match config.seed {
                Some(seed) => Randomness::from_seed(seed ^ 0x5f12),
                None => Randomness::from_entropy(),
            },
        );
        let hearts = HeartLayer::new(&config.hearts_config, &mut rng);
        let stack = SceneStack::new(config.scenes);
        let watcher = SectionWatcher::new(stack.thresholds());
        let tracker = ProgressTracker::new(stack.section_count());

        Self {
            window: None,
            gpu: None,
            title: config.title,
            time: Time::new(),
            rng,
            field,
            hearts,
            stack,
            watcher,
            tracker,
            card: Card::new(config.card_config),
        }
    }

    fn handle_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(size);
        }
        self.field
            .set_bounds(Vec2::new(size.width as f32, size.height as f32));
        self.stack.set_viewport_height(size.height as f32);
    }

    fn tick(&mut self) {
        let (now, _dt) = self.time.update();
        self.field.tick();
        self.card.cull_finished(now);
        let fractions = self.stack.visible_fractions();
        self.watcher.observe(&fractions, &mut self.tracker);
    }

    /// Flatten the current state into the frame's sprite list,
    /// back-to-front.
    fn build_sprites(&self) -> Vec<SpriteInstance> {
        let now = self.time.elapsed();
        let bounds = self.field.bounds();
        let mut sprites = Vec::with_capacity(128);

        // Hearts sit behind everything else.
        for frame in self.hearts.frames(now, bounds) {
            sprites.push(SpriteInstance::new(
                frame.position,
                Vec2::splat(frame.size * 0.5),
                scene_colors::rose_light().extend(frame.opacity),
                SpriteShape::Circle,
            ));
        }

        for s in self.field.sparkles() {
            // Radius doubled to leave room for the soft glow edge.
            sprites.push(SpriteInstance::new(
                s.position,
                Vec2::splat(s.radius * 2.0),
                s.color.extend(s.opacity),
                SpriteShape::Circle,
            ));
        }

        self.push_progress_markers(&mut sprites, bounds);
        self.push_card(&mut sprites, bounds, now);

        sprites
    }

    fn push_progress_markers(&self, sprites: &mut Vec<SpriteInstance>, bounds: Vec2) {
        let count = self.tracker.len();
        if count == 0 || bounds.y <= 0.0 {
            return;
        }
        let spacing = 22.0;
        let x = bounds.x - 24.0;
        let top = bounds.y * 0.5 - (count as f32 - 1.0) * spacing * 0.5;

        for i in 0..count {
            let center = Vec2::new(x, top + i as f32 * spacing);
            let (radius, color) = match self.tracker.marker(i) {
                MarkerStyle::Current => (5.6, scene_colors::rose_mid().extend(1.0)),
                MarkerStyle::Visited => (4.0, scene_colors::rose_light().extend(0.9)),
                MarkerStyle::Pending => (4.0, scene_colors::rose_pale().extend(0.7)),
            };
            sprites.push(SpriteInstance::new(
                center,
                Vec2::splat(radius),
                color,
                SpriteShape::Circle,
            ));
        }
    }

    fn push_card(&self, sprites: &mut Vec<SpriteInstance>, bounds: Vec2, now: f32) {
        // Card only shows once the finale section reaches the viewport.
        if self.stack.visible_fraction(self.stack.finale_index()) <= 0.0 {
            return;
        }
        let center = Vec2::new(bounds.x * 0.5, bounds.y * 0.5);
        let card_half = Vec2::new(150.0, 105.0);

        // Card body: closed shows the rose cover, open shows the cream page.
        let body_color = if self.card.is_open() {
            scene_colors::cream().extend(1.0)
        } else {
            scene_colors::rose_light().extend(1.0)
        };
        sprites.push(SpriteInstance::new(
            center,
            card_half,
            body_color,
            SpriteShape::Rect,
        ));

        // Inner message panel after the reveal delay.
        if self.card.inside_revealed(now) {
            sprites.push(SpriteInstance::new(
                center,
                card_half * 0.82,
                scene_colors::rose_whisper().extend(1.0),
                SpriteShape::Rect,
            ));
            sprites.push(SpriteInstance::new(
                center,
                Vec2::new(12.0, 12.0),
                scene_colors::rose_mid().extend(1.0),
                SpriteShape::Circle,
            ));
        }

        for burst in self.card.bursts() {
            for frame in burst.frames(now) {
                sprites.push(SpriteInstance::new(
                    center + frame.offset,
                    Vec2::splat(frame.size * 0.5 * frame.scale.max(0.0)),
                    scene_colors::rose_mid().extend(frame.opacity),
                    SpriteShape::Circle,
                ));
            }
        }
    }

    fn clear_color(&self) -> wgpu::Color {
        let bg = self.stack.background_at_offset();
        wgpu::Color {
            r: bg.x as f64,
            g: bg.y as f64,
            b: bg.z as f64,
            a: 1.0,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        // A missing GPU degrades to a windowed-but-blank run, never a crash.
        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => log::warn!("{}", e),
        }

        let size = window.inner_size();
        self.handle_resize(size);

        if let Some(scene) = self.stack.scenes().first() {
            log::info!(
                "presentation started at scene '{}' ({} sections)",
                scene.id,
                self.stack.section_count()
            );
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.handle_resize(physical_size);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.stack.scroll_by(px);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left && state == ElementState::Pressed {
                    // The card only responds while the finale is current.
                    if self.tracker.current() == self.stack.finale_index() {
                        let now = self.time.elapsed();
                        self.card.toggle(now, &mut self.rng);
                        log::debug!(
                            "card toggled to {:?} at {:.2}s",
                            self.card.face(),
                            now
                        );
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick();
                let sprites = self.build_sprites();
                let clear = self.clear_color();
                if let Some(gpu) = &mut self.gpu {
                    match gpu.render(clear, &sprites, self.time.elapsed()) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let size = winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            };
                            gpu.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Stop the field first so a late redraw cannot mutate mid-teardown.
        self.field.stop();
        self.gpu = None;
        self.window = None;
    }
}
