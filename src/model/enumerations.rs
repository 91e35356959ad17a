// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed sets of named variants used across the record schema.
//!
//! Every enumeration renders as the lowercase name feeds use
//! (`itunes:episodeType` values, `itunes:role` style roles, file format
//! names) and parses back case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Role types for contributors in podcast production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributorRole {
    /// Podcast owner
    #[default]
    Owner,
    /// Episode host
    Host,
    /// Episode guest
    Guest,
    /// Content publisher
    Publisher,
    /// Content author
    Author,
}

impl ContributorRole {
    pub const ALL: [ContributorRole; 5] = [
        Self::Owner,
        Self::Host,
        Self::Guest,
        Self::Publisher,
        Self::Author,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Host => "host",
            Self::Guest => "guest",
            Self::Publisher => "publisher",
            Self::Author => "author",
        }
    }
}

impl FromStr for ContributorRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "host" => Ok(Self::Host),
            "guest" => Ok(Self::Guest),
            "publisher" => Ok(Self::Publisher),
            "author" => Ok(Self::Author),
            _ => Err(unknown("contributor role", s)),
        }
    }
}

/// Episode type classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeType {
    /// Full episode
    #[default]
    Full,
    /// Trailer episode
    Trailer,
    /// Bonus episode
    Bonus,
}

impl EpisodeType {
    pub const ALL: [EpisodeType; 3] = [Self::Full, Self::Trailer, Self::Bonus];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Trailer => "trailer",
            Self::Bonus => "bonus",
        }
    }
}

impl FromStr for EpisodeType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "trailer" => Ok(Self::Trailer),
            "bonus" => Ok(Self::Bonus),
            _ => Err(unknown("episode type", s)),
        }
    }
}

/// Platforms a contributor can be present on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributorPresenceType {
    /// Generic presence
    #[default]
    Any,
    /// Twitter presence
    Twitter,
}

impl ContributorPresenceType {
    pub const ALL: [ContributorPresenceType; 2] = [Self::Any, Self::Twitter];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Twitter => "twitter",
        }
    }
}

impl FromStr for ContributorPresenceType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "twitter" => Ok(Self::Twitter),
            _ => Err(unknown("contributor presence type", s)),
        }
    }
}

/// Sources a tag reference can point into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagReferenceType {
    /// Generic reference
    #[default]
    Any,
    /// Wikipedia reference
    Wikipedia,
    /// Wikidata reference
    Wikidata,
}

impl TagReferenceType {
    pub const ALL: [TagReferenceType; 3] = [Self::Any, Self::Wikipedia, Self::Wikidata];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Wikipedia => "wikipedia",
            Self::Wikidata => "wikidata",
        }
    }
}

impl FromStr for TagReferenceType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "wikipedia" => Ok(Self::Wikipedia),
            "wikidata" => Ok(Self::Wikidata),
            _ => Err(unknown("tag reference type", s)),
        }
    }
}

/// Picture file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PictureType {
    /// JPEG format
    #[default]
    Jpg,
    /// PNG format
    Png,
}

impl PictureType {
    pub const ALL: [PictureType; 2] = [Self::Jpg, Self::Png];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }

    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Map a MIME type to a picture format
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(Self::Jpg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl FromStr for PictureType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "png" => Ok(Self::Png),
            _ => Err(unknown("picture type", s)),
        }
    }
}

/// Audio/video enclosure formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnclosureType {
    /// MP3 audio format
    #[default]
    Mp3,
    /// MP4 video format
    Mp4,
    /// OGG audio format
    Ogg,
    /// OPUS audio format
    Opus,
}

impl EnclosureType {
    pub const ALL: [EnclosureType; 4] = [Self::Mp3, Self::Mp4, Self::Ogg, Self::Opus];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
            Self::Ogg => "ogg",
            Self::Opus => "opus",
        }
    }

    /// File extension for media of this type
    pub const fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// MIME type to advertise in an RSS `<enclosure type="...">`
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Mp4 => "video/mp4",
            Self::Ogg => "audio/ogg",
            Self::Opus => "audio/opus",
        }
    }

    /// Map a MIME type to an enclosure format
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "video/mp4" | "audio/mp4" | "audio/m4a" | "audio/x-m4a" => Some(Self::Mp4),
            "audio/ogg" | "application/ogg" => Some(Self::Ogg),
            "audio/opus" => Some(Self::Opus),
            _ => None,
        }
    }
}

impl FromStr for EnclosureType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "mp4" | "m4a" => Ok(Self::Mp4),
            "ogg" | "oga" => Ok(Self::Ogg),
            "opus" => Ok(Self::Opus),
            _ => Err(unknown("enclosure type", s)),
        }
    }
}

fn unknown(kind: &'static str, value: &str) -> ModelError {
    ModelError::UnknownVariant {
        kind,
        value: value.to_string(),
    }
}

impl fmt::Display for ContributorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EpisodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContributorPresenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TagReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PictureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
