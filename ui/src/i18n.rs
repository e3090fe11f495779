//! Internationalization (i18n) support for `varti-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/varti-ui.ftl   (fallback/reference)
//!   es-ES/varti-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::i18n::init;
//! use crate::t;
//! init(); // idempotent
//! let label = t!("nav-challenges");
//! ```
//!
//! To add a new locale:
//! 1. Copy `en-US/varti-ui.ftl` to `i18n/<lang-id>/varti-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (we enable `debug-embed` feature in that target-specific dependency section).
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `available_languages()` – discover embedded language tags (for a picker).
//! - `weekday_labels()` – localized Mon–Sun column labels for the charts.
//! - `use_language_marker()` – reactive read of the launcher language signal.
//! - `fl` macro re-export (for direct keyed access when needed).
//! - `LOADER` – global `FluentLanguageLoader` consumed by helpers & `fl!` macro.
//!
//! NOTE: The hyphenated filename `varti-ui.ftl` is canonical across all locales.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-profile")
///     t!("participants-count", count = 12)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "varti-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Bidi isolation marks around placeables leak into SVG text and test output.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Localized Mon–Sun labels, in activity-sequence order.
pub fn weekday_labels() -> [String; 7] {
    [
        crate::t!("weekday-mon"),
        crate::t!("weekday-tue"),
        crate::t!("weekday-wed"),
        crate::t!("weekday-thu"),
        crate::t!("weekday-fri"),
        crate::t!("weekday-sat"),
        crate::t!("weekday-sun"),
    ]
}

/// Subscribes the calling component to the launcher's language signal so it
/// re-renders after a switch. Returns the active code.
pub fn use_language_marker() -> String {
    dioxus::prelude::try_use_context::<dioxus::prelude::Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| crate::core::config::DEFAULT_LOCALE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
