// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Record schema for podcast production and publishing (P3) metadata.
//!
//! A [`Podcast`] owns its [`Season`]s, which own their [`Episode`]s. Every
//! entity carries a [`Fabric`] with identity and audit dates. Records are
//! plain values with public fields; nothing validates them.

pub mod error;
pub mod library;
pub mod model;
pub mod runtime;

// Re-export main types for convenience
pub use error::ModelError;
pub use library::Model;
pub use model::{
    Asset, ChapterTag, Contribution, Contributor, ContributorPresence, ContributorPresenceType,
    ContributorRole, Enclosure, EnclosureType, Episode, EpisodeType, Fabric, LocationTag, Picture,
    PictureType, Podcast, Publisher, Season, Tag, TagReference, TagReferenceType, TagVariant,
    TranscriptTag,
};
pub use runtime::{Guid, Timespan, Timestamp};
