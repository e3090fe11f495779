use dioxus::prelude::*;

use crate::catalog::{initial, AvatarSource};

/// Round avatar; shows the name's first letter when the image fails to load.
#[component]
pub fn Avatar(source: AvatarSource, name: String, size: Option<u32>) -> Element {
    // Remembers which source failed so a newly chosen one gets a fresh try.
    let mut failed_src = use_signal(|| Option::<String>::None);
    let size = size.unwrap_or(96);
    let style = format!("width: {size}px; height: {size}px");
    let src = source.src().to_string();
    let failed = failed_src.read().as_deref() == Some(src.as_str());

    if failed || src.is_empty() {
        let letter = initial(&name);
        return rsx! {
            div { class: "avatar avatar--fallback", style: "{style}", "{letter}" }
        };
    }

    let broken = src.clone();
    rsx! {
        img {
            class: "avatar",
            style: "{style}",
            src: "{src}",
            alt: "{name}",
            onerror: move |_| failed_src.set(Some(broken.clone())),
        }
    }
}
