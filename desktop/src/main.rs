#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, NavTarget};
use ui::core::config::AppConfig;
use ui::views::{
    ChallengeDetail, ChallengePlanner, Challenges, CreateChallenge, EditProfile, NotFound, Profile,
};
use ui::{AppNavbar, PointerGlow, SiteFooter};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
        #[route("/")]
        Challenges {},
        #[redirect("/challenges", || Route::Challenges {})]
        #[route("/challenge/:id")]
        ChallengeDetail { id: String },
        #[route("/create-challenge")]
        CreateChallenge {},
        #[route("/home")]
        ChallengePlanner {},
        #[route("/profile")]
        Profile {},
        #[route("/editProfile")]
        EditProfile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Varti Studio – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Challenges => Route::Challenges {},
        NavTarget::Challenge(id) => Route::ChallengeDetail { id: id.to_string() },
        NavTarget::CreateChallenge => Route::CreateChallenge {},
        NavTarget::Planner => Route::ChallengePlanner {},
        NavTarget::Profile => Route::Profile {},
        NavTarget::EditProfile => Route::EditProfile {},
    }
}

fn nav_link(target: NavTarget, class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: route_for(target), "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; the shared navbar writes it on selection.
    let config = use_context_provider(AppConfig::default);
    let lang_code = use_signal(|| config.locale.clone());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { link: nav_link });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language to force a full remount on change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

/// Desktop layout: the shared chrome around the routed page.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        PointerGlow {
            AppNavbar {}
            main { class: "app-main", Outlet::<Route> {} }
            SiteFooter {}
        }
    }
}
