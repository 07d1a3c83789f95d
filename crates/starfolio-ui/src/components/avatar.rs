//! Avatar Component
//!
//! Round profile image that falls back to initials when the image fails.

use dioxus::prelude::*;

/// Properties for the Avatar component
#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Image URL
    pub src: String,
    /// Alt text for the image
    pub alt: String,
    /// Initials shown when the image cannot be loaded
    pub fallback: String,
    /// Diameter in pixels
    #[props(default = 80)]
    pub size: u32,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let mut failed = use_signal(|| false);
    let size = props.size;

    rsx! {
        div {
            class: "avatar",
            style: "width: {size}px; height: {size}px;",
            if failed() || props.src.is_empty() {
                span { class: "avatar-fallback", "{props.fallback}" }
            } else {
                img {
                    class: "avatar-image",
                    src: "{props.src}",
                    alt: "{props.alt}",
                    onerror: move |_| {
                        tracing::debug!("Avatar image failed to load, showing initials");
                        failed.set(true);
                    },
                }
            }
        }
    }
}
