mod asset;
mod contributor;
mod enumerations;
mod episode;
mod fabric;
mod float;
mod podcast;
mod publisher;
mod season;
mod tag;

pub use asset::{Asset, Enclosure, Picture};
pub use contributor::{Contribution, Contributor, ContributorPresence};
pub use enumerations::{
    ContributorPresenceType, ContributorRole, EnclosureType, EpisodeType, PictureType,
    TagReferenceType,
};
pub use episode::Episode;
pub use fabric::Fabric;
pub use podcast::Podcast;
pub use publisher::Publisher;
pub use season::Season;
pub use tag::{ChapterTag, LocationTag, Tag, TagReference, TagVariant, TranscriptTag};
