//! Client-side match filtering
//!
//! The DVR server has no query parameters for this lookup, so the
//! full listings are filtered in memory against the user's criteria.

use crate::types::Recording;

/// Search criteria for a lookup
///
/// Title matching is a case-sensitive substring test: a recording
/// matches when the given title appears anywhere in its airing title.
/// Season and episode filters, when set, each require an exact match
/// on the corresponding airing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// Title (or fragment of a title) to search for
    pub title: String,
    /// Restrict matches to this season number
    pub season: Option<u32>,
    /// Restrict matches to this episode number
    pub episode: Option<u32>,
}

impl Criteria {
    /// Create criteria matching any airing whose title contains `title`
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            season: None,
            episode: None,
        }
    }

    /// Restrict matches to the given season number
    pub fn season(mut self, season: u32) -> Self {
        self.season = Some(season);
        self
    }

    /// Restrict matches to the given episode number
    pub fn episode(mut self, episode: u32) -> Self {
        self.episode = Some(episode);
        self
    }

    /// Whether the given recording satisfies these criteria
    ///
    /// A recording with no season (or episode) number fails a season
    /// (or episode) filter: an unnumbered airing cannot be confirmed
    /// as the one being looked for.
    pub fn matches(&self, recording: &Recording) -> bool {
        if !recording.airing.title.contains(&self.title) {
            return false;
        }

        let season_ok = self
            .season
            .map_or(true, |season| recording.airing.season_number == Some(season));
        let episode_ok = self
            .episode
            .map_or(true, |episode| recording.airing.episode_number == Some(episode));

        season_ok && episode_ok
    }
}

/// Keep only the recordings that satisfy the criteria, preserving
/// the server's listing order.
pub fn filter_matches(criteria: &Criteria, recordings: Vec<Recording>) -> Vec<Recording> {
    recordings
        .into_iter()
        .filter(|recording| criteria.matches(recording))
        .collect()
}
