//! Platform-agnostic building blocks: chart math, formatting, form drafts and
//! their errors.

pub mod avatar;
pub mod chart;
pub mod config;
pub mod drafts;
pub mod error;
pub mod format;
