use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                p { class: "site-footer__rights", {t!("footer-rights")} }
                div { class: "site-footer__links",
                    a { href: "/privacy", {t!("footer-privacy")} }
                    a { href: "/terms", {t!("footer-terms")} }
                    a { href: "/help", {t!("footer-help")} }
                }
            }
        }
    }
}
