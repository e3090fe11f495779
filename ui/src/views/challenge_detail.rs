use dioxus::prelude::*;

use crate::catalog::{catalog, Challenge, ChallengeId, Participant};
use crate::components::{
    nav_link, ActivityHeatmap, FormStatus, NavTarget, ProgressBar, ProgressRing, StatusLine,
    TrendChart,
};
use crate::core::chart::average_per_day;
use crate::core::config::use_app_config;
use crate::i18n::use_language_marker;
use crate::t;

/// Detail page for `/challenge/:id`. Unparseable or unknown ids render the
/// not-found state.
#[component]
pub fn ChallengeDetail(id: String) -> Element {
    let _lang = use_language_marker();
    let challenge = id
        .parse::<ChallengeId>()
        .ok()
        .and_then(|id| catalog().challenge(id));

    let back = nav_link(NavTarget::Challenges, "back-link", &t!("detail-back"));

    let Some(challenge) = challenge else {
        tracing::debug!(id = %id, "unknown challenge id");
        return rsx! {
            section { class: "page page-detail",
                {back}
                h1 { class: "page-detail__missing", {t!("detail-not-found")} }
            }
        };
    };

    let challenge = challenge.clone();
    let participants = t!("participants-count", count = challenge.participants_count);
    let duration = t!("duration-days", days = challenge.duration_days);
    let days_left = challenge
        .days_left
        .filter(|_| challenge.is_active)
        .map(|days| t!("days-left", days = days));

    rsx! {
        section { class: "page page-detail",
            {back}
            header { class: "page-detail__header",
                h1 { "{challenge.title}" }
                p { class: "page-detail__description", "{challenge.description}" }
                div { class: "page-detail__badges",
                    span { class: "badge", "{participants}" }
                    span { class: "badge", "{duration}" }
                    if let Some(days_left) = days_left {
                        span { class: "badge", "{days_left}" }
                    }
                    span { class: "badge badge--category", "{challenge.category}" }
                }
            }
            if challenge.trending {
                div { class: "banner banner--trending", {t!("detail-trending")} }
            }
            div { class: "page-detail__columns",
                div { class: "page-detail__main",
                    GroupPanel { challenge: challenge.clone() }
                }
                aside { class: "page-detail__side",
                    ViewerPanel { challenge: challenge.clone() }
                }
            }
        }
    }
}

/// Participants list plus the shared charts.
#[component]
fn GroupPanel(challenge: Challenge) -> Element {
    if challenge.participants.is_empty() {
        return rsx! {
            div { class: "card",
                h2 { {t!("detail-participants")} }
                p { class: "empty-state", {t!("detail-no-participants")} }
            }
        };
    }

    let group_average = average_per_day(&challenge.weeks());
    let rows = challenge.activity_rows();

    rsx! {
        div { class: "card",
            h2 { {t!("detail-participants")} }
            ul { class: "participants",
                for participant in challenge.participants.iter() {
                    ParticipantRow { key: "{participant.id.0}", participant: participant.clone() }
                }
            }
        }
        div { class: "card",
            h2 { {t!("detail-heatmap")} }
            ActivityHeatmap { rows, caption: t!("detail-heatmap-caption") }
        }
        div { class: "card",
            h2 { {t!("detail-group-trend")} }
            TrendChart {
                values: group_average.values().to_vec(),
                caption: t!("detail-group-caption"),
            }
        }
    }
}

#[component]
fn ParticipantRow(participant: Participant) -> Element {
    let progress = t!("detail-progress-line", percent = participant.progress);

    rsx! {
        li { class: "participants__item",
            div { class: "participants__line",
                span { class: "participants__name", "{participant.name}" }
                span { class: "participants__progress", "{progress}" }
            }
            ProgressBar { percent: f64::from(participant.progress) }
        }
    }
}

/// Right column: the viewer's own progress when they are in an active
/// challenge, otherwise a join button.
#[component]
fn ViewerPanel(challenge: Challenge) -> Element {
    let config = use_app_config();
    let mut entry = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);
    let challenge_id = challenge.id;

    let me = challenge
        .participant_for(config.current_user)
        .filter(|_| challenge.is_active)
        .cloned();

    let Some(me) = me else {
        return rsx! {
            div { class: "card",
                button {
                    class: "button button--primary button--wide",
                    r#type: "button",
                    onclick: move |_| {
                        tracing::info!(challenge_id = %challenge_id, "join requested");
                        status.set(FormStatus::Done(t!("detail-joined")));
                    },
                    {t!("join-challenge")}
                }
                StatusLine { status: status() }
            }
        };
    };

    let progress = f64::from(me.progress);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let trimmed = entry.read().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        tracing::info!(challenge_id = %challenge_id, entry = %trimmed, "progress logged");
        status.set(FormStatus::Done(t!("detail-logged", entry = trimmed.clone())));
        entry.set(String::new());
    };

    rsx! {
        div { class: "card",
            h2 { {t!("detail-your-progress")} }
            ProgressRing { percent: progress }
            ProgressBar { percent: progress }
        }
        div { class: "card",
            h2 { {t!("detail-your-trend")} }
            TrendChart {
                values: me.activity.values().to_vec(),
                caption: t!("detail-your-trend-caption"),
            }
        }
        div { class: "card",
            form { class: "log-form", onsubmit: on_submit,
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: t!("detail-log-placeholder"),
                    value: "{entry}",
                    oninput: move |evt| entry.set(evt.value()),
                }
                button { class: "button button--primary", r#type: "submit", {t!("detail-log-submit")} }
            }
            StatusLine { status: status() }
        }
        div { class: "card",
            h2 { {t!("detail-your-logs")} }
            if me.logs.is_empty() {
                p { class: "empty-state", {t!("detail-no-logs")} }
            } else {
                ul { class: "logs",
                    for (index, log) in me.logs.iter().enumerate() {
                        li { key: "{index}", "{log}" }
                    }
                }
            }
        }
    }
}
