// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::contributor::Contributor;
use crate::model::enumerations::{EnclosureType, PictureType};
use crate::runtime::Guid;

/// Provenance and licensing fields shared by media assets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    /// Location of the asset, kept as given
    pub uri: String,
    /// Fabric id of the contributor who authored the asset
    ///
    /// This refers to a contributor owned elsewhere; use
    /// [`Asset::resolve_author`] to look it up.
    pub author: Option<Guid>,
    pub license: String,
    pub copyright: String,
}

impl Asset {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// The asset URI, if it parses as an absolute URL
    pub fn parsed_uri(&self) -> Option<Url> {
        Url::parse(&self.uri).ok()
    }

    /// Find the author among a set of contributors
    pub fn resolve_author<'a>(&self, contributors: &'a [Contributor]) -> Option<&'a Contributor> {
        let author = self.author?;
        contributors.iter().find(|c| c.fabric.id == author)
    }
}

/// Cover art or other image
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Picture {
    pub asset: Asset,
    #[serde(rename = "type")]
    pub kind: PictureType,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Picture {
    pub fn new(uri: impl Into<String>, kind: PictureType) -> Self {
        Self {
            asset: Asset::new(uri),
            kind,
            width: 0,
            height: 0,
        }
    }
}

/// Media payload attached to an episode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Enclosure {
    pub asset: Asset,
    #[serde(rename = "type")]
    pub kind: EnclosureType,
    pub mime_type: String,
    /// File size in bytes
    pub file_size: u64,
}

impl Enclosure {
    /// Create an enclosure advertising the default MIME type for `kind`
    pub fn new(uri: impl Into<String>, kind: EnclosureType, file_size: u64) -> Self {
        Self {
            asset: Asset::new(uri),
            kind,
            mime_type: kind.mime_type().to_string(),
            file_size,
        }
    }
}
