//! Challenge, participant and profile records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::core::chart::ActivityWeek;
use crate::core::error::DraftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChallengeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChallengeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Wellness,
    Fitness,
    Nutrition,
    Skills,
    Mindfulness,
    Education,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Fitness,
        Category::Wellness,
        Category::Nutrition,
        Category::Mindfulness,
        Category::Skills,
        Category::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Wellness => "Wellness",
            Category::Fitness => "Fitness",
            Category::Nutrition => "Nutrition",
            Category::Skills => "Skills",
            Category::Mindfulness => "Mindfulness",
            Category::Education => "Education",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DraftError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DraftError::UnknownCategory {
                raw: needle.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub user: UserId,
    pub name: String,
    /// Percent complete. Not bounded here; renderers clamp.
    pub progress: u8,
    pub logs: Vec<String>,
    pub activity: ActivityWeek,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub participants_count: u32,
    pub duration_days: u32,
    pub days_left: Option<u32>,
    pub is_active: bool,
    #[serde(default)]
    pub trending: bool,
    pub participants: Vec<Participant>,
}

impl Challenge {
    pub fn participant_for(&self, user: UserId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.user == user)
    }

    pub fn has_member(&self, user: UserId) -> bool {
        self.participant_for(user).is_some()
    }

    pub fn activity_rows(&self) -> Vec<(String, ActivityWeek)> {
        self.participants
            .iter()
            .map(|p| (p.name.clone(), p.activity))
            .collect()
    }

    pub fn weeks(&self) -> Vec<ActivityWeek> {
        self.participants.iter().map(|p| p.activity).collect()
    }
}

/// Dashboard card for a challenge the viewer takes part in.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeSummary {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub participants_count: u32,
    pub days_left: Option<u32>,
    pub progress: u8,
}

impl ChallengeSummary {
    pub fn for_viewer(challenge: &Challenge, viewer: UserId) -> Option<Self> {
        let member = challenge.participant_for(viewer)?;
        Some(Self {
            id: challenge.id,
            title: challenge.title.clone(),
            description: challenge.description.clone(),
            category: challenge.category,
            participants_count: challenge.participants_count,
            days_left: challenge.days_left,
            progress: member.progress,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AvatarSource {
    Url(String),
    DataUrl(String),
}

impl AvatarSource {
    pub fn src(&self) -> &str {
        match self {
            AvatarSource::Url(url) | AvatarSource::DataUrl(url) => url,
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, AvatarSource::DataUrl(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    pub challenges_completed: u32,
    pub active_challenges: u32,
    pub achievements: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub bio: String,
    pub avatar: AvatarSource,
    pub joined: Date,
    pub stats: ProfileStats,
}

/// First letter of a display name, used when no avatar image loads.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedChallenge {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub completed: Date,
}
