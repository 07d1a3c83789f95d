//! Animated starfield background.
//!
//! Stars are generated once per mount from the configured seed. A frame loop
//! owned by the component advances the rotation and twinkle; each frame is
//! projected and drawn as a handful of batched SVG paths.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use starfolio_core::starfield::{layers, twinkle, Starfield as StarShell};
use starfolio_core::{Rotation, RotationDriver, Viewport};
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::debug;

use crate::context::use_config;

/// Initial viewport until the first resize event reports the real size
const INITIAL_VIEWPORT: (f32, f32) = (1100.0, 900.0);

/// Per-frame animation inputs
#[derive(Clone, Copy, PartialEq, Debug)]
struct Frame {
    rotation: Rotation,
    twinkle: f32,
}

/// Full-window rotating starfield, drawn behind page content.
///
/// The frame loop lives in a component-scoped future: it is registered on
/// mount and dropped with the component, so a remount starts again from a
/// zero rotation.
#[component]
pub fn Starfield() -> Element {
    let config = use_config();
    let settings = config.starfield.clone();

    let shell = use_hook(|| {
        let shell = StarShell::generate(&settings);
        debug!(stars = shell.len(), "starfield generated");
        Rc::new(shell)
    });

    let mut viewport = use_signal(|| Viewport::new(INITIAL_VIEWPORT.0, INITIAL_VIEWPORT.1));
    let mut frame = use_signal(|| Frame {
        rotation: Rotation::default(),
        twinkle: twinkle(0.0, settings.speed),
    });

    let frame_interval = Duration::from_millis(settings.frame_interval_ms.max(1));
    let speed = settings.speed;
    use_future(move || async move {
        debug!(?frame_interval, "starfield frame loop registered");
        let mut driver = RotationDriver::new();
        let started = Instant::now();
        let mut ticker = interval(frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let now = ticker.tick().await;
            let rotation = driver.on_frame(now.into_std());
            let elapsed = now.duration_since(started).as_secs_f32();
            frame.set(Frame {
                rotation,
                twinkle: twinkle(elapsed, speed),
            });
        }
    });

    use_drop(|| debug!("starfield frame loop deregistered"));

    let buckets = settings.size_buckets;
    let star_layers = use_memo(move || {
        let Frame { rotation, twinkle } = frame();
        let projected = shell.project(rotation, viewport(), twinkle);
        layers(&projected, buckets)
    });

    let Viewport { width, height } = viewport();
    let class = if settings.fade { "starfield faded" } else { "starfield" };
    let rendered = star_layers();

    rsx! {
        div {
            class: "{class}",
            "aria-hidden": "true",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.data().get_content_box_size() {
                    if size.width > 0.0 && size.height > 0.0 {
                        viewport.set(Viewport::new(size.width as f32, size.height as f32));
                    }
                }
            },
            svg {
                view_box: "0 0 {width} {height}",
                preserve_aspect_ratio: "none",
                for (i, layer) in rendered.into_iter().enumerate() {
                    path {
                        key: "{i}",
                        d: layer.path,
                        fill: "none",
                        stroke: layer.color,
                        stroke_width: "{layer.stroke_width}",
                        stroke_linecap: "round",
                    }
                }
            }
        }
    }
}
