//! Typewriter tagline with a blinking caret.

use std::rc::Rc;

use dioxus::prelude::*;
use starfolio_core::{Typewriter, TypewriterConfig, TypewriterDriver};
use tracing::warn;

use crate::context::use_config;

/// Drive a typewriter for the lifetime of the calling component.
///
/// The driver's timer loop is polled from a component-scoped future and
/// `stop()` runs on unmount, so no timer outlives the view. Phrases and
/// config are read on first render only.
///
/// An empty phrase list is logged and leaves the text empty.
pub fn use_typewriter(phrases: Vec<String>, config: TypewriterConfig) -> Signal<String> {
    let mut displayed = use_signal(String::new);

    let driver = use_hook(move || match Typewriter::new(phrases, config) {
        Ok(typewriter) => Some(Rc::new(TypewriterDriver::new(typewriter))),
        Err(e) => {
            warn!("Typewriter disabled: {}", e);
            None
        }
    });

    let loop_driver = driver.clone();
    use_future(move || {
        let driver = loop_driver.clone();
        async move {
            let Some(driver) = driver else {
                return;
            };
            let mut rx = driver.subscribe();
            let run = driver.run();
            tokio::pin!(run);

            loop {
                tokio::select! {
                    _ = &mut run => break,
                    changed = rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let text = rx.borrow_and_update().displayed.clone();
                        displayed.set(text);
                    }
                }
            }
        }
    });

    use_drop(move || {
        if let Some(driver) = driver {
            driver.stop();
        }
    });

    displayed
}

/// Cycling tagline text followed by a caret.
///
/// The caret blink is pure CSS and independent of typing state.
#[component]
pub fn TypewriterText(phrases: Vec<String>, #[props(default)] class: Option<String>) -> Element {
    let config = use_config();
    let displayed = use_typewriter(phrases, config.typewriter);
    let blink = config.motion.caret_blink();
    let class = match class {
        Some(extra) => format!("typewriter {extra}"),
        None => "typewriter".to_string(),
    };

    rsx! {
        span { class: "{class}",
            "{displayed}"
            span {
                class: "typewriter-caret",
                style: "animation-duration: {blink};",
                "aria-hidden": "true",
                "|"
            }
        }
    }
}
