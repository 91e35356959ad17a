// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::model::contributor::Contributor;
use crate::model::fabric::Fabric;
use crate::runtime::Timespan;

/// A classification label attachable to content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    pub fabric: Fabric,
    pub name: String,
    pub description: String,
    pub creator: Contributor,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fabric: Fabric::new(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Chapter marker within an episode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChapterTag {
    pub tag: Tag,
    pub start_time: Timespan,
    pub end_time: Timespan,
}

impl ChapterTag {
    pub fn new(name: impl Into<String>, start_time: Timespan, end_time: Timespan) -> Self {
        Self {
            tag: Tag::new(name),
            start_time,
            end_time,
        }
    }

    /// Chapter length, or `None` if it ends before it starts
    pub fn duration(&self) -> Option<Timespan> {
        self.end_time.checked_sub(self.start_time)
    }
}

/// Geographic location tag
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationTag {
    pub tag: Tag,
    pub address: String,
    #[serde(with = "crate::model::float")]
    pub latitude: f64,
    #[serde(with = "crate::model::float")]
    pub longitude: f64,
}

impl LocationTag {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            tag: Tag::new(name),
            address: String::new(),
            latitude,
            longitude,
        }
    }
}

/// Transcript segment with timing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranscriptTag {
    pub tag: Tag,
    pub text: String,
    pub start_time: Timespan,
    pub end_time: Timespan,
}

impl TranscriptTag {
    pub fn new(text: impl Into<String>, start_time: Timespan, end_time: Timespan) -> Self {
        Self {
            tag: Tag::new(String::new()),
            text: text.into(),
            start_time,
            end_time,
        }
    }

    /// Segment length, or `None` if it ends before it starts
    pub fn duration(&self) -> Option<Timespan> {
        self.end_time.checked_sub(self.start_time)
    }
}

/// Any of the specialized tag kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TagVariant {
    Chapter(ChapterTag),
    Location(LocationTag),
    Transcript(TranscriptTag),
}

impl TagVariant {
    /// The common tag fields
    pub fn tag(&self) -> &Tag {
        match self {
            Self::Chapter(t) => &t.tag,
            Self::Location(t) => &t.tag,
            Self::Transcript(t) => &t.tag,
        }
    }

    pub fn tag_mut(&mut self) -> &mut Tag {
        match self {
            Self::Chapter(t) => &mut t.tag,
            Self::Location(t) => &mut t.tag,
            Self::Transcript(t) => &mut t.tag,
        }
    }

    /// Start and end offsets for timed tags
    pub fn time_range(&self) -> Option<(Timespan, Timespan)> {
        match self {
            Self::Chapter(t) => Some((t.start_time, t.end_time)),
            Self::Transcript(t) => Some((t.start_time, t.end_time)),
            Self::Location(_) => None,
        }
    }
}

impl From<ChapterTag> for TagVariant {
    fn from(tag: ChapterTag) -> Self {
        Self::Chapter(tag)
    }
}

impl From<LocationTag> for TagVariant {
    fn from(tag: LocationTag) -> Self {
        Self::Location(tag)
    }
}

impl From<TranscriptTag> for TagVariant {
    fn from(tag: TranscriptTag) -> Self {
        Self::Transcript(tag)
    }
}

/// A weighted link between content and a tag
///
/// `weight` is expected to lie in `[0.0, 1.0]` but any value is accepted,
/// including NaN and infinities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagReference {
    pub tag: Tag,
    #[serde(with = "crate::model::float")]
    pub weight: f64,
}

impl TagReference {
    pub fn new(tag: Tag, weight: f64) -> Self {
        Self { tag, weight }
    }

    /// Whether the weight lies in `[0.0, 1.0]`
    pub fn is_weight_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.weight)
    }
}
