use dioxus::prelude::*;

use crate::catalog::{catalog, Category, ExploreFilter, UserId};
use crate::components::{nav_link, ExploreCard, MyChallengeCard, NavTarget};
use crate::core::config::use_app_config;
use crate::i18n::use_language_marker;
use crate::t;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Active,
    Explore,
}

/// Category chips offered above the explore list.
const EXPLORE_CHIPS: [Category; 3] = [Category::Fitness, Category::Wellness, Category::Skills];

#[component]
pub fn Challenges() -> Element {
    let _lang = use_language_marker();
    let config = use_app_config();
    let mut tab = use_signal(|| Tab::Active);

    let tab_class = move |which: Tab| {
        if tab() == which {
            "tabs__tab tabs__tab--active"
        } else {
            "tabs__tab"
        }
    };

    let create = nav_link(
        NavTarget::CreateChallenge,
        "button button--primary",
        &t!("challenges-new"),
    );

    let viewer = config.current_user;
    let body = match tab() {
        Tab::Active => rsx! { ActiveList { viewer } },
        Tab::Explore => rsx! { ExploreList { viewer } },
    };

    rsx! {
        section { class: "page page-challenges",
            header { class: "page__header",
                h1 { {t!("challenges-title")} }
                {create}
            }
            div { class: "tabs", role: "tablist",
                button {
                    class: tab_class(Tab::Active),
                    r#type: "button",
                    role: "tab",
                    onclick: move |_| tab.set(Tab::Active),
                    {t!("tab-active")}
                }
                button {
                    class: tab_class(Tab::Explore),
                    r#type: "button",
                    role: "tab",
                    onclick: move |_| tab.set(Tab::Explore),
                    {t!("tab-explore")}
                }
            }
            {body}
        }
    }
}

#[component]
fn ActiveList(viewer: UserId) -> Element {
    let mine = catalog().my_challenges(viewer);

    if mine.is_empty() {
        let create = nav_link(
            NavTarget::CreateChallenge,
            "button button--primary",
            &t!("create-submit"),
        );
        return rsx! {
            div { class: "empty-state",
                p { {t!("challenges-empty")} }
                {create}
            }
        };
    }

    rsx! {
        div { class: "card-grid",
            for summary in mine {
                MyChallengeCard { key: "{summary.id}", summary: summary.clone() }
            }
        }
    }
}

#[component]
fn ExploreList(viewer: UserId) -> Element {
    let mut filter = use_signal(ExploreFilter::default);
    let current = filter();
    let results: Vec<_> = catalog()
        .explore(viewer, &current)
        .into_iter()
        .cloned()
        .collect();

    let chip_class = move |category: Option<Category>| {
        if filter.read().category == category {
            "chip chip--active"
        } else {
            "chip"
        }
    };

    rsx! {
        div { class: "explore",
            div { class: "explore__controls",
                input {
                    class: "input explore__search",
                    r#type: "search",
                    placeholder: t!("explore-search-placeholder"),
                    value: "{current.query}",
                    oninput: move |evt| filter.write().query = evt.value(),
                }
                div { class: "explore__chips",
                    button {
                        class: chip_class(None),
                        r#type: "button",
                        onclick: move |_| filter.write().category = None,
                        {t!("explore-all")}
                    }
                    for category in EXPLORE_CHIPS {
                        button {
                            key: "{category}",
                            class: chip_class(Some(category)),
                            r#type: "button",
                            onclick: move |_| filter.write().category = Some(category),
                            "{category}"
                        }
                    }
                }
            }
            if results.is_empty() {
                p { class: "empty-state", {t!("explore-empty")} }
            } else {
                div { class: "card-grid",
                    for challenge in results {
                        ExploreCard { key: "{challenge.id}", challenge: challenge.clone() }
                    }
                }
            }
        }
    }
}
