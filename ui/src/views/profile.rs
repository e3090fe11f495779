use dioxus::prelude::*;

use crate::catalog::{catalog, CompletedChallenge};
use crate::components::{nav_link, Avatar, NavTarget};
use crate::core::format::{format_month_short, format_month_year};
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn Profile() -> Element {
    let _lang = use_language_marker();
    let profile = catalog().profile().clone();
    let completed = catalog().completed().to_vec();

    let joined_on = format_month_year(profile.joined);
    let joined = t!("profile-joined", date = joined_on);
    let edit = nav_link(NavTarget::EditProfile, "button button--primary", &t!("profile-edit"));
    let stats = [
        (profile.stats.challenges_completed, t!("profile-stat-completed")),
        (profile.stats.active_challenges, t!("profile-stat-active")),
        (profile.stats.achievements, t!("profile-stat-achievements")),
    ];

    rsx! {
        section { class: "page page-profile",
            div { class: "card profile-card",
                Avatar { source: profile.avatar.clone(), name: profile.name.clone() }
                div { class: "profile-card__body",
                    h1 { "{profile.name}" }
                    p { class: "profile-card__username", "@{profile.username}" }
                    p { class: "profile-card__bio", "{profile.bio}" }
                    p { class: "profile-card__joined", "{joined}" }
                }
                div { class: "profile-card__actions",
                    {edit}
                    button {
                        class: "button button--secondary",
                        r#type: "button",
                        onclick: move |_| tracing::info!("settings opened"),
                        {t!("profile-settings")}
                    }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| tracing::info!("log out requested"),
                        {t!("profile-logout")}
                    }
                }
            }
            div { class: "stat-grid",
                for (value, label) in stats {
                    div { key: "{label}", class: "stat-tile",
                        span { class: "stat-tile__value", "{value}" }
                        span { class: "stat-tile__label", "{label}" }
                    }
                }
            }
            div { class: "card",
                h2 { {t!("profile-completed")} }
                ul { class: "completed-list",
                    for item in completed {
                        CompletedRow { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn CompletedRow(item: CompletedChallenge) -> Element {
    let when = format_month_short(item.completed);

    rsx! {
        li { class: "completed-list__item",
            div {
                p { class: "completed-list__title", "{item.title}" }
                span { class: "badge", "{item.category}" }
            }
            span { class: "completed-list__date", "{when}" }
        }
    }
}
