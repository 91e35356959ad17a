// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::model::asset::Picture;
use crate::model::contributor::Contribution;
use crate::model::episode::Episode;
use crate::model::fabric::Fabric;
use crate::model::tag::TagReference;
use crate::runtime::Timestamp;

/// A season within a podcast, owning its episodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Season {
    pub fabric: Fabric,
    pub season_number: u32,
    pub title: String,
    pub description: String,
    pub publication_date: Timestamp,
    pub cover_art: Picture,
    pub tags: Vec<TagReference>,
    pub contributors: Vec<Contribution>,
    /// Episodes in publishing order
    pub episodes: Vec<Episode>,
}

impl Season {
    pub fn new(season_number: u32) -> Self {
        Self {
            fabric: Fabric::new(),
            season_number,
            ..Default::default()
        }
    }

    /// First episode carrying the given number
    pub fn episode(&self, episode_number: u32) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.episode_number == episode_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episodes_keep_insertion_order() {
        let mut season = Season::new(1);
        season.episodes.push(Episode::new(3, "Third"));
        season.episodes.push(Episode::new(1, "First"));
        season.episodes.push(Episode::new(2, "Second"));

        let titles: Vec<&str> = season.episodes.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn episode_lookup_by_number() {
        let season = Season {
            episodes: vec![Episode::new(1, "First"), Episode::new(2, "Second")],
            ..Season::new(4)
        };

        assert_eq!(season.episode(2).map(|e| e.title.as_str()), Some("Second"));
        assert!(season.episode(9).is_none());
    }

    #[test]
    fn duplicate_episode_numbers_are_allowed() {
        let season = Season {
            episodes: vec![Episode::new(1, "Original"), Episode::new(1, "Re-release")],
            ..Season::new(1)
        };

        assert_eq!(season.episodes.len(), 2);
        assert_eq!(season.episode(1).map(|e| e.title.as_str()), Some("Original"));
    }
}
