// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::model::enumerations::ContributorRole;
use crate::model::fabric::Fabric;
use crate::runtime::Timespan;

/// A person credited for work on a podcast, season or episode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contributor {
    pub fabric: Fabric,
    pub name: String,
    pub email: String,
    pub role: ContributorRole,
    /// Intervals during which this contributor can be heard
    pub presences: Vec<ContributorPresence>,
}

impl Contributor {
    pub fn new(name: impl Into<String>, role: ContributorRole) -> Self {
        Self {
            fabric: Fabric::new(),
            name: name.into(),
            role,
            ..Default::default()
        }
    }
}

/// A contributor's credit on a piece of content
///
/// The contributor is held by value, so the credit stays intact even when
/// the contributor record it was copied from changes later.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contribution {
    pub contributor: Contributor,
    /// Contribution type, e.g. "editing" or "music"
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
}

impl Contribution {
    pub fn new(contributor: Contributor, kind: impl Into<String>) -> Self {
        Self {
            contributor,
            kind: kind.into(),
            notes: String::new(),
        }
    }
}

/// Interval of an episode during which a contributor is present
///
/// `start_time <= end_time` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContributorPresence {
    pub start_time: Timespan,
    pub end_time: Timespan,
}

impl ContributorPresence {
    pub fn new(start_time: Timespan, end_time: Timespan) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Length of the interval, or `None` if it ends before it starts
    pub fn duration(&self) -> Option<Timespan> {
        self.end_time.checked_sub(self.start_time)
    }
}
