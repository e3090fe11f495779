//! Reusable building blocks shared by the views.

pub mod app_navbar;
pub mod avatar;
pub mod challenge_card;
pub mod charts;
pub mod footer;
pub mod glow;

pub use app_navbar::{nav_link, register_nav, AppNavbar, NavBuilder, NavTarget};
pub use avatar::Avatar;
pub use challenge_card::{ExploreCard, MyChallengeCard};
pub use charts::{ActivityHeatmap, ProgressBar, ProgressRing, TrendChart};
pub use footer::SiteFooter;
pub use glow::PointerGlow;

use dioxus::prelude::*;

/// Outcome line shown under a form after submit.
#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Done(String),
    Error(String),
}

#[component]
pub fn StatusLine(status: FormStatus) -> Element {
    match status {
        FormStatus::Idle => rsx! {},
        FormStatus::Done(message) => rsx! {
            p { class: "form-status form-status--success", role: "status", "{message}" }
        },
        FormStatus::Error(message) => rsx! {
            p { class: "form-status form-status--error", role: "alert", "{message}" }
        },
    }
}
