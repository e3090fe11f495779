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
    #[layout(WebShell)]
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

// The web bundle ships the same theme the desktop build embeds.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

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
    rsx!(Link {
        class: "{class}",
        to: route_for(target),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    let config = use_context_provider(AppConfig::default);
    let lang_code = use_signal(|| config.locale.clone());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared chrome around the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        PointerGlow {
            AppNavbar {}
            main { class: "app-main", Outlet::<Route> {} }
            SiteFooter {}
        }
    }
}
