use dioxus::prelude::*;

use crate::components::{nav_link, NavTarget};
use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");
    let back = nav_link(NavTarget::Challenges, "button button--primary", &t!("detail-back"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            code { "{path}" }
            {back}
        }
    }
}
