//! Error types surfaced by the forms. None of them are fatal: views render the
//! message inline and keep the draft.

use thiserror::Error;

/// Validation failures while turning a form draft into a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("duration `{raw}` is not a whole number of days")]
    InvalidDuration { raw: String },
    #[error("duration must be between {min} and {max} days (got {days})")]
    DurationOutOfRange { days: u32, min: u32, max: u32 },
    #[error("`{raw}` is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { raw: String },
    #[error("`{raw}` is not a valid email address")]
    InvalidEmail { raw: String },
    #[error("`{raw}` was already invited")]
    DuplicateInvite { raw: String },
    #[error("unknown category `{raw}`")]
    UnknownCategory { raw: String },
    #[error("usernames cannot contain spaces (`{raw}`)")]
    InvalidUsername { raw: String },
}

/// Failures while loading a locally selected avatar image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AvatarError {
    #[error("no file was selected")]
    NoFile,
    #[error("`{name}` is empty")]
    Empty { name: String },
    #[error("`{name}` is not a supported image type")]
    UnsupportedType { name: String },
    #[error("couldn't read `{name}`")]
    ReadFailed { name: String },
}
