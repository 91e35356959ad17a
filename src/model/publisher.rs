// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::fabric::Fabric;

/// A podcast publisher or network
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Publisher {
    pub fabric: Fabric,
    pub name: String,
    pub email: String,
    /// Website URL, kept as given
    pub url: String,
    pub description: String,
}

impl Publisher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fabric: Fabric::new(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// The website URL, if it parses
    pub fn parsed_url(&self) -> Option<Url> {
        Url::parse(&self.url).ok()
    }
}
