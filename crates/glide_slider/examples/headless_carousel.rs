//! Headless Carousel Demo
//!
//! Drives a slider without a renderer: pages forward to the end and back,
//! stepping a manual clock at 60 fps and logging every frame.
//!
//! Run with:
//! `cargo run -p glide_slider --example headless_carousel`
//!
//! Set `RUST_LOG=glide_slider=debug` for engine internals.

use std::rc::Rc;

use anyhow::Result;
use glide_slider::prelude::*;

const CONFIG: &str = r#"
use_emulated_offset = true
duration_ms = 300
easing = "ease-in-out"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = SliderConfig::from_toml_str(CONFIG)?;
    let clock = Rc::new(ManualClock::new());
    let items = ItemStrip::uniform(12, 160.0, config.orientation);
    let content = items.content_extent(config.orientation);

    let mut slider = SliderEngine::with_clock(config, items, clock.clone())?;

    slider.on(event_types::BEFORE_NAVIGATE, |event| {
        if let SliderEvent::BeforeNavigate { index, .. } = event {
            tracing::info!("Navigating to item {}", index);
        }
    });
    slider.on(event_types::EDGES_CHANGED, |event| {
        if let SliderEvent::EdgesChanged {
            begin_reached,
            end_reached,
        } = event
        {
            tracing::info!("Edges: begin={} end={}", begin_reached, end_reached);
        }
    });

    slider.resize(480.0, content);

    for direction in [Direction::Next, Direction::Prev] {
        loop {
            let state = slider.navigation_state();
            let blocked = match direction {
                Direction::Next => !state.can_go_next(),
                Direction::Prev => !state.can_go_prev(),
            };
            if blocked {
                break;
            }

            match slider.step(direction, true) {
                Navigation::Started { from, target } => {
                    tracing::info!("{:?}: {} -> {}", direction, from, target);
                }
                other => {
                    tracing::warn!("{:?} not started: {:?}", direction, other);
                    break;
                }
            }

            let mut frames = 0;
            while slider.tick() {
                frames += 1;
                clock.step_frame();
            }
            let visible: Vec<usize> = slider.visible_items(true).iter().map(|v| v.index).collect();
            tracing::info!(
                "Settled at {} after {} frames, fully visible {:?}",
                slider.position(),
                frames,
                visible
            );
        }
    }

    slider.destroy();
    Ok(())
}
