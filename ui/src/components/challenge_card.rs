use dioxus::prelude::*;

use super::app_navbar::{nav_link, NavTarget};
use super::charts::ProgressRing;
use crate::catalog::{Challenge, ChallengeSummary};
use crate::t;

/// Dashboard card for a challenge the viewer is taking part in.
#[component]
pub fn MyChallengeCard(summary: ChallengeSummary) -> Element {
    let progress = f64::from(summary.progress);
    let participants = t!("participants-count", count = summary.participants_count);
    let days_left = summary.days_left.map(|days| t!("days-left", days = days));
    let view = nav_link(
        NavTarget::Challenge(summary.id),
        "button button--primary",
        &t!("challenges-view"),
    );

    rsx! {
        article { class: "challenge-card",
            header { class: "challenge-card__header",
                h3 { class: "challenge-card__title", "{summary.title}" }
                span { class: "badge", "{summary.category}" }
            }
            p { class: "challenge-card__description", "{summary.description}" }
            div { class: "challenge-card__progress",
                span { class: "challenge-card__progress-label", {t!("progress-label")} }
                ProgressRing { percent: progress }
            }
            div { class: "challenge-card__meta",
                span { "{participants}" }
                if let Some(days_left) = days_left {
                    span { "{days_left}" }
                }
            }
            {view}
        }
    }
}

/// Explore tab card for a challenge the viewer could join.
#[component]
pub fn ExploreCard(challenge: Challenge) -> Element {
    let participants = t!("participants-count", count = challenge.participants_count);
    let duration = t!("duration-days", days = challenge.duration_days);
    let id = challenge.id;
    let title = challenge.title.clone();
    let details = nav_link(
        NavTarget::Challenge(id),
        "challenge-card__title-link",
        &challenge.title,
    );

    rsx! {
        article { class: "challenge-card challenge-card--explore",
            header { class: "challenge-card__header",
                h3 { class: "challenge-card__title", {details} }
                if challenge.trending {
                    span { class: "badge badge--trending", {t!("explore-trending")} }
                }
            }
            p { class: "challenge-card__description", "{challenge.description}" }
            div { class: "challenge-card__meta",
                span { class: "badge", "{challenge.category}" }
                span { "{participants}" }
                span { "{duration}" }
            }
            button {
                class: "button button--secondary",
                r#type: "button",
                onclick: move |_| {
                    tracing::info!(challenge = %id, title = %title, "join requested");
                },
                {t!("join-challenge")}
            }
        }
    }
}
