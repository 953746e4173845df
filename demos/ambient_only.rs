//! Minimal presentation: one scene plus the finale, mostly to watch the
//! sparkle field on its own.
//!
//! Run with `cargo run --example ambient_only`.

use cardlet::prelude::*;

fn main() {
    env_logger::init();

    let scenes = vec![Scene::new("only", "Just the sparkles", "scroll down for the card")
        .with_hint("scroll down ↓")];

    let field = FieldConfig {
        cap: 120,
        spawn_chance: 0.3,
        palette: Palette::Candlelight,
        ..FieldConfig::default()
    };

    if let Err(e) = Presentation::new()
        .with_scenes(scenes)
        .with_field(field)
        .with_title("ambient only")
        .run()
    {
        eprintln!("{}", e);
    }
}
