// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::model::asset::{Enclosure, Picture};
use crate::model::contributor::Contribution;
use crate::model::enumerations::EpisodeType;
use crate::model::fabric::Fabric;
use crate::model::tag::TagReference;
use crate::runtime::{Timespan, Timestamp};

/// A single podcast episode, owned by a season
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Episode {
    pub fabric: Fabric,
    pub episode_number: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub kind: EpisodeType,
    pub publication_date: Timestamp,
    pub duration: Timespan,
    pub cover_art: Picture,
    /// Media files for this episode, in order of preference
    pub enclosures: Vec<Enclosure>,
    pub tags: Vec<TagReference>,
    pub contributors: Vec<Contribution>,
}

impl Episode {
    pub fn new(episode_number: u32, title: impl Into<String>) -> Self {
        Self {
            fabric: Fabric::new(),
            episode_number,
            title: title.into(),
            ..Default::default()
        }
    }

    /// The first enclosure, which feeds publish as the episode's media file
    pub fn primary_enclosure(&self) -> Option<&Enclosure> {
        self.enclosures.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::enumerations::EnclosureType;

    fn make_episode() -> Episode {
        Episode {
            subtitle: "The one where it starts".to_string(),
            kind: EpisodeType::Trailer,
            publication_date: Timestamp::parse("Mon, 15 Jan 2024 12:00:00 +0000").unwrap(),
            duration: Timespan::parse("30:00").unwrap(),
            enclosures: vec![
                Enclosure::new("https://example.com/ep1.mp3", EnclosureType::Mp3, 1234567),
                Enclosure::new("https://example.com/ep1.opus", EnclosureType::Opus, 654321),
            ],
            ..Episode::new(1, "Test Episode")
        }
    }

    #[test]
    fn new_sets_number_and_title() {
        let episode = Episode::new(42, "Answers");
        assert_eq!(episode.episode_number, 42);
        assert_eq!(episode.title, "Answers");
        assert_eq!(episode.kind, EpisodeType::Full);
        assert!(episode.enclosures.is_empty());
    }

    #[test]
    fn primary_enclosure_is_first() {
        let episode = make_episode();
        let primary = episode.primary_enclosure().unwrap();
        assert_eq!(primary.kind, EnclosureType::Mp3);
        assert_eq!(episode.enclosures.len(), 2);
    }

    #[test]
    fn primary_enclosure_missing() {
        assert!(Episode::new(1, "No Audio").primary_enclosure().is_none());
    }

    #[test]
    fn serde_keeps_episode_fields() {
        let episode = make_episode();
        let json = serde_json::to_value(&episode).unwrap();
        assert_eq!(json["type"], "trailer");
        assert_eq!(json["title"], "Test Episode");

        let read_back: Episode = serde_json::from_value(json).unwrap();
        assert_eq!(read_back, episode);
    }
}
