//! In-memory challenge catalog.
//!
//! The client has no backend: every page reads from one immutable catalog
//! built on first access. Actions that would mutate it (joining, logging
//! progress, creating challenges) only emit a log event.

mod fixtures;
mod model;

pub use fixtures::DEMO_VIEWER;
pub use model::*;

use once_cell::sync::Lazy;

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::demo);

/// Shared read-only catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Clone)]
pub struct Catalog {
    challenges: Vec<Challenge>,
    profile: UserProfile,
    completed: Vec<CompletedChallenge>,
}

impl Catalog {
    pub fn demo() -> Self {
        Self {
            challenges: fixtures::challenges(),
            profile: fixtures::profile(),
            completed: fixtures::completed(),
        }
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn challenge(&self, id: ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Active challenges the viewer takes part in, in catalog order.
    pub fn my_challenges(&self, viewer: UserId) -> Vec<ChallengeSummary> {
        self.challenges
            .iter()
            .filter(|c| c.is_active)
            .filter_map(|c| ChallengeSummary::for_viewer(c, viewer))
            .collect()
    }

    /// Challenges the viewer hasn't joined that match `filter`.
    pub fn explore(&self, viewer: UserId, filter: &ExploreFilter) -> Vec<&Challenge> {
        self.challenges
            .iter()
            .filter(|c| !c.has_member(viewer))
            .filter(|c| filter.matches(c))
            .collect()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn completed(&self) -> &[CompletedChallenge] {
        &self.completed
    }
}

/// Search box + category chip state of the explore tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExploreFilter {
    pub query: String,
    pub category: Option<Category>,
}

impl ExploreFilter {
    pub fn matches(&self, challenge: &Challenge) -> bool {
        if let Some(category) = self.category {
            if challenge.category != category {
                return false;
            }
        }

        let needle = self.query.trim().to_lowercase();
        needle.is_empty()
            || challenge.title.to_lowercase().contains(&needle)
            || challenge.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::demo();
        assert_eq!(
            catalog.challenge(ChallengeId(2)).map(|c| c.title.as_str()),
            Some("10K Steps Daily")
        );
        assert!(catalog.challenge(ChallengeId(99)).is_none());
    }

    #[test]
    fn activity_weeks_are_seven_days() {
        for challenge in Catalog::demo().challenges() {
            for participant in &challenge.participants {
                assert_eq!(participant.activity.values().len(), 7);
            }
        }
    }

    #[test]
    fn my_challenges_use_viewer_progress() {
        let mine = Catalog::demo().my_challenges(DEMO_VIEWER);
        let progress: Vec<(u32, u8)> = mine.iter().map(|s| (s.id.0, s.progress)).collect();
        assert_eq!(progress, vec![(1, 65), (2, 45), (3, 80)]);
    }

    #[test]
    fn viewer_is_resolved_by_id_not_name() {
        let catalog = Catalog::demo();
        let meditation = catalog.challenge(ChallengeId(1)).expect("challenge 1");
        let alex = meditation.participant_for(UserId(2)).expect("alex");
        assert_eq!(alex.progress, 70);
        // Another viewer sees their own row, and no summaries where absent.
        assert_eq!(catalog.my_challenges(UserId(4)).len(), 1);
        assert!(catalog.my_challenges(UserId(42)).is_empty());
    }

    #[test]
    fn explore_excludes_joined_challenges() {
        let catalog = Catalog::demo();
        let ids: Vec<u32> = catalog
            .explore(DEMO_VIEWER, &ExploreFilter::default())
            .iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(ids, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn explore_filters_by_query_and_category() {
        let catalog = Catalog::demo();
        let by_query = ExploreFilter {
            query: "  YOGA ".into(),
            category: None,
        };
        let found = catalog.explore(DEMO_VIEWER, &by_query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "30-Day Yoga Journey");

        let by_category = ExploreFilter {
            query: String::new(),
            category: Some(Category::Wellness),
        };
        let found = catalog.explore(DEMO_VIEWER, &by_category);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ChallengeId(5));

        let nothing = ExploreFilter {
            query: "yoga".into(),
            category: Some(Category::Skills),
        };
        assert!(catalog.explore(DEMO_VIEWER, &nothing).is_empty());
    }

    #[test]
    fn description_matches_too() {
        let filter = ExploreFilter {
            query: "offline".into(),
            category: None,
        };
        assert_eq!(Catalog::demo().explore(DEMO_VIEWER, &filter).len(), 1);
    }
}
