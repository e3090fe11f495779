//! The demo data set every page renders from.

use time::macros::date;

use super::model::*;
use crate::core::chart::ActivityWeek;

/// The viewer in the demo data set.
pub const DEMO_VIEWER: UserId = UserId(1);

const ALEX: UserId = UserId(2);
const SAM: UserId = UserId(3);
const JAMIE: UserId = UserId(4);

fn participant(
    id: u32,
    user: UserId,
    name: &str,
    progress: u8,
    logs: &[&str],
    activity: [f64; 7],
) -> Participant {
    Participant {
        id: ParticipantId(id),
        user,
        name: name.to_string(),
        progress,
        logs: logs.iter().map(|log| log.to_string()).collect(),
        activity: ActivityWeek::new(activity),
    }
}

fn open_challenge(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    participants_count: u32,
    duration_days: u32,
    trending: bool,
) -> Challenge {
    Challenge {
        id: ChallengeId(id),
        title: title.to_string(),
        description: description.to_string(),
        category,
        participants_count,
        duration_days,
        days_left: None,
        is_active: false,
        trending,
        participants: Vec::new(),
    }
}

pub(super) fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: ChallengeId(1),
            title: "Morning Meditation".into(),
            description: "Start your day with 10 minutes of mindfulness".into(),
            category: Category::Wellness,
            participants_count: 8,
            duration_days: 30,
            days_left: Some(14),
            is_active: true,
            trending: false,
            participants: vec![
                participant(
                    101,
                    ALEX,
                    "Alex",
                    70,
                    &["Day 1: 10 min", "Day 2: 15 min"],
                    [5.0, 10.0, 15.0, 20.0, 10.0, 5.0, 0.0],
                ),
                participant(
                    102,
                    DEMO_VIEWER,
                    "You",
                    65,
                    &["Day 1: 10 min"],
                    [10.0, 5.0, 15.0, 10.0, 5.0, 0.0, 0.0],
                ),
                participant(
                    103,
                    SAM,
                    "Sam",
                    50,
                    &["Day 1: 10 min"],
                    [0.0, 5.0, 10.0, 15.0, 5.0, 5.0, 0.0],
                ),
            ],
        },
        Challenge {
            id: ChallengeId(2),
            title: "10K Steps Daily".into(),
            description: "Walk 10,000 steps every day for 30 days".into(),
            category: Category::Fitness,
            participants_count: 12,
            duration_days: 30,
            days_left: Some(23),
            is_active: true,
            trending: false,
            participants: vec![
                participant(
                    201,
                    DEMO_VIEWER,
                    "You",
                    45,
                    &["Day 1: 10k steps"],
                    [10000.0, 8000.0, 12000.0, 9000.0, 6000.0, 0.0, 0.0],
                ),
                participant(
                    202,
                    JAMIE,
                    "Jamie",
                    60,
                    &["Day 1: 12k steps"],
                    [12000.0, 10000.0, 11000.0, 13000.0, 9000.0, 7000.0, 0.0],
                ),
            ],
        },
        Challenge {
            id: ChallengeId(3),
            title: "Coding Streak".into(),
            description: "Code for at least 1 hour every day".into(),
            category: Category::Skills,
            participants_count: 5,
            duration_days: 30,
            days_left: Some(9),
            is_active: true,
            trending: false,
            participants: vec![participant(
                301,
                DEMO_VIEWER,
                "You",
                80,
                &["Day 1: 1h 20m", "Day 2: 1h"],
                [80.0, 60.0, 75.0, 90.0, 60.0, 0.0, 0.0],
            )],
        },
        open_challenge(
            4,
            "Plant-Based Week",
            "Try going plant-based for one week",
            Category::Nutrition,
            124,
            7,
            true,
        ),
        open_challenge(
            5,
            "Digital Detox Weekend",
            "Spend the weekend offline and reclaim your attention",
            Category::Wellness,
            85,
            2,
            false,
        ),
        open_challenge(
            6,
            "30-Day Yoga Journey",
            "Daily yoga practice for flexibility and strength",
            Category::Fitness,
            328,
            30,
            true,
        ),
        open_challenge(
            7,
            "Gratitude Journaling",
            "Write three things you're grateful for each day",
            Category::Mindfulness,
            217,
            21,
            false,
        ),
        open_challenge(
            8,
            "Read 5 Books in a Month",
            "Expand your mind with a reading challenge",
            Category::Education,
            95,
            30,
            false,
        ),
    ]
}

pub(super) fn profile() -> UserProfile {
    UserProfile {
        username: "QuantumExplorer".into(),
        name: "Alex Chen".into(),
        bio: "Passionate about self-improvement and technology. On a journey to master new skills and habits."
            .into(),
        avatar: AvatarSource::Url("/placeholder-avatar.jpg".into()),
        joined: date!(2023 - 01 - 01),
        stats: ProfileStats {
            challenges_completed: 12,
            active_challenges: 3,
            achievements: 8,
        },
    }
}

pub(super) fn completed() -> Vec<CompletedChallenge> {
    vec![
        CompletedChallenge {
            id: 1,
            title: "30-Day Meditation".into(),
            category: Category::Wellness,
            completed: date!(2024 - 12 - 01),
        },
        CompletedChallenge {
            id: 2,
            title: "5K Running Goal".into(),
            category: Category::Fitness,
            completed: date!(2024 - 11 - 01),
        },
        CompletedChallenge {
            id: 3,
            title: "Learn Python Basics".into(),
            category: Category::Skills,
            completed: date!(2024 - 10 - 01),
        },
    ]
}
