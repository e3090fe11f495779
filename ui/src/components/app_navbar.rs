use crate::catalog::ChallengeId;
use crate::core::config::use_app_config;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Every in-app destination a shared component can link to.
///
/// `ui` does not know the platform `Route` enum, so components describe the
/// target and the registered [`NavBuilder`] turns it into a router `Link`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Challenges,
    Challenge(ChallengeId),
    CreateChallenge,
    Planner,
    Profile,
    EditProfile,
}

impl NavTarget {
    /// Path of the target, used for plain anchors when no builder is registered.
    pub fn href(self) -> String {
        match self {
            NavTarget::Challenges => "/".to_string(),
            NavTarget::Challenge(id) => format!("/challenge/{id}"),
            NavTarget::CreateChallenge => "/create-challenge".to_string(),
            NavTarget::Planner => "/home".to_string(),
            NavTarget::Profile => "/profile".to_string(),
            NavTarget::EditProfile => "/editProfile".to_string(),
        }
    }
}

/// Platforms register one link constructor at startup:
///
/// ```ignore
/// fn nav_link(target: NavTarget, class: &str, label: &str) -> Element {
///     let to = match target {
///         NavTarget::Challenges => Route::Challenges {},
///         NavTarget::Challenge(id) => Route::ChallengeDetail { id: id.to_string() },
///         // ...
///     };
///     rsx!(Link { class: "{class}", to, "{label}" })
/// }
///
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// The closure receives the localized label and must render it as the link's
/// only child so styling stays with the caller's class.
pub struct NavBuilder {
    pub link: fn(target: NavTarget, class: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to `target` through the registered builder, or a plain anchor when the
/// component renders outside a router (tests, previews).
pub fn nav_link(target: NavTarget, class: &str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, class, label),
        None => {
            let href = target.href();
            rsx!(a { class: "{class}", href: "{href}", "{label}" })
        }
    }
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let config = use_app_config();
    let mut current_lang = use_signal(|| config.locale.clone());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal provided by the launcher.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency so the navbar re-renders on language change.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::debug!(lang = %val, "switched language");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(lang = %val, %err, "language switch failed"),
        }
    };

    let brand = nav_link(NavTarget::Challenges, "navbar__brand-link", &t!("brand"));
    let challenges = nav_link(NavTarget::Challenges, "navbar__link", &t!("nav-challenges"));
    let planner = nav_link(NavTarget::Planner, "navbar__link", &t!("nav-home"));
    let create = nav_link(NavTarget::CreateChallenge, "navbar__link", &t!("nav-create"));
    let profile = nav_link(NavTarget::Profile, "navbar__link", &t!("nav-profile"));

    let tagline = t!("tagline");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {brand}
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    {challenges}
                    {planner}
                    {create}
                    {profile}
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
