//! Form drafts and their validated submissions.
//!
//! Drafts hold raw input exactly as typed. `validate` produces the submission
//! value the views log; nothing is stored.

use serde::Serialize;
use time::{macros::format_description, Date, Duration};

use super::error::DraftError;
use crate::catalog::{AvatarSource, Category, UserProfile};

/// Longest challenge the forms accept.
pub const MAX_DURATION_DAYS: u32 = 365;

fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_duration(raw: &str) -> Result<u32, DraftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField("duration"));
    }
    let days: u32 = trimmed.parse().map_err(|_| DraftError::InvalidDuration {
        raw: trimmed.to_string(),
    })?;
    if !(1..=MAX_DURATION_DAYS).contains(&days) {
        return Err(DraftError::DurationOutOfRange {
            days,
            min: 1,
            max: MAX_DURATION_DAYS,
        });
    }
    Ok(days)
}

fn parse_date(raw: &str) -> Result<Date, DraftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField("start date"));
    }
    Date::parse(trimmed, &format_description!("[year]-[month]-[day]")).map_err(|_| {
        DraftError::InvalidDate {
            raw: trimmed.to_string(),
        }
    })
}

fn valid_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !raw.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

impl Privacy {
    pub fn from_value(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("private") {
            Privacy::Private
        } else {
            Privacy::Public
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Private => "private",
        }
    }
}

/// Raw state of the create-challenge form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub privacy: Privacy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub duration_days: u32,
    pub privacy: Privacy,
}

impl ChallengeDraft {
    pub fn validate(&self) -> Result<NewChallenge, DraftError> {
        let title = required(&self.title, "title")?;
        let description = required(&self.description, "description")?;
        let category: Category = required(&self.category, "category")?.parse()?;
        let duration_days = parse_duration(&self.duration)?;

        Ok(NewChallenge {
            title,
            description,
            category,
            duration_days,
            privacy: self.privacy,
        })
    }
}

/// Raw state of the challenge planner: schedule, goals and invitations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub duration: String,
    pub goals: Vec<String>,
    pub pending_goal: String,
    pub invites: Vec<String>,
    pub pending_invite: String,
    pub daily_reminders: bool,
    pub celebrate_completion: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChallengePlan {
    pub name: String,
    pub description: String,
    pub starts_on: Date,
    pub duration_days: u32,
    pub goals: Vec<String>,
    pub invites: Vec<String>,
    pub daily_reminders: bool,
    pub celebrate_completion: bool,
}

impl ChallengePlan {
    /// Last day of the challenge, inclusive.
    pub fn ends_on(&self) -> Date {
        self.starts_on + Duration::days(i64::from(self.duration_days) - 1)
    }
}

impl PlanDraft {
    /// Moves the pending goal into the list. Blank input is ignored.
    pub fn add_goal(&mut self) -> bool {
        let goal = self.pending_goal.trim();
        if goal.is_empty() {
            return false;
        }
        self.goals.push(goal.to_string());
        self.pending_goal.clear();
        true
    }

    pub fn remove_goal(&mut self, index: usize) {
        if index < self.goals.len() {
            self.goals.remove(index);
        }
    }

    /// Moves the pending address into the invite list.
    pub fn add_invite(&mut self) -> Result<(), DraftError> {
        let email = self.pending_invite.trim().to_lowercase();
        if email.is_empty() {
            return Err(DraftError::MissingField("email"));
        }
        if !valid_email(&email) {
            return Err(DraftError::InvalidEmail { raw: email });
        }
        if self.invites.contains(&email) {
            return Err(DraftError::DuplicateInvite { raw: email });
        }
        self.invites.push(email);
        self.pending_invite.clear();
        Ok(())
    }

    pub fn remove_invite(&mut self, index: usize) {
        if index < self.invites.len() {
            self.invites.remove(index);
        }
    }

    pub fn validate(&self) -> Result<ChallengePlan, DraftError> {
        let name = required(&self.name, "challenge name")?;
        let starts_on = parse_date(&self.start_date)?;
        let duration_days = parse_duration(&self.duration)?;

        let mut goals = self.goals.clone();
        let pending = self.pending_goal.trim();
        if !pending.is_empty() {
            goals.push(pending.to_string());
        }

        Ok(ChallengePlan {
            name,
            description: self.description.trim().to_string(),
            starts_on,
            duration_days,
            goals,
            invites: self.invites.clone(),
            daily_reminders: self.daily_reminders,
            celebrate_completion: self.celebrate_completion,
        })
    }
}

/// Staged profile edits. Discarded when the page unmounts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub avatar: AvatarSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub avatar_replaced: bool,
}

impl ProfileDraft {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            username: profile.username.clone(),
            bio: profile.bio.clone(),
            avatar: profile.avatar.clone(),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, DraftError> {
        let name = required(&self.name, "full name")?;
        let username = required(&self.username, "username")?;
        if username.contains(char::is_whitespace) {
            return Err(DraftError::InvalidUsername { raw: username });
        }

        Ok(ProfileUpdate {
            name,
            username,
            bio: self.bio.trim().to_string(),
            avatar_replaced: self.avatar.is_uploaded(),
        })
    }
}
