// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::asset::Picture;
use crate::model::contributor::Contribution;
use crate::model::episode::Episode;
use crate::model::fabric::Fabric;
use crate::model::publisher::Publisher;
use crate::model::season::Season;
use crate::model::tag::TagReference;
use crate::runtime::Timestamp;

/// A complete podcast series, the root aggregate of the schema
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Podcast {
    pub fabric: Fabric,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub summary: String,
    pub language: String,
    /// Categories in display order
    pub categories: Vec<String>,
    pub publication_date: Timestamp,
    pub last_build_date: Timestamp,
    pub managing_editor: String,
    pub webmaster: String,
    pub copyright: String,
    /// Website link, kept as given
    pub link: String,
    pub publisher: Publisher,
    pub cover_art: Picture,
    pub tags: Vec<TagReference>,
    pub contributors: Vec<Contribution>,
    /// Seasons in publishing order
    pub seasons: Vec<Season>,
}

impl Podcast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            fabric: Fabric::new(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// The website link, if it parses
    pub fn parsed_link(&self) -> Option<Url> {
        Url::parse(&self.link).ok()
    }

    /// First season carrying the given number
    pub fn season(&self, season_number: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.season_number == season_number)
    }

    /// Every episode of every season, season by season
    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.seasons.iter().flat_map(|s| s.episodes.iter())
    }

    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }
}
