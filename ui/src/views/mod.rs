//! Routed pages. Each view reads from the shared catalog and the
//! launcher-provided [`AppConfig`](crate::core::config::AppConfig).

mod challenge_detail;
mod challenges;
mod create_challenge;
mod edit_profile;
mod not_found;
mod planner;
mod profile;

pub use challenge_detail::ChallengeDetail;
pub use challenges::Challenges;
pub use create_challenge::CreateChallenge;
pub use edit_profile::EditProfile;
pub use not_found::NotFound;
pub use planner::ChallengePlanner;
pub use profile::Profile;
