//! Shared UI crate for Varti Studio. Models, the demo catalog, chart math,
//! components and routed views live here; the `web` and `desktop` crates only
//! declare routes and launch.

pub mod catalog;
pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

pub use components::{AppNavbar, PointerGlow, SiteFooter};

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
