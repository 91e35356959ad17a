// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::runtime::{Guid, Timestamp};

/// Identity and audit fields shared by every domain entity
///
/// Entities embed this as their `fabric` field rather than inheriting it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fabric {
    /// Unique identifier for this entity
    pub id: Guid,
    /// Identifier of the entity's type
    pub type_id: Guid,
    pub creation_date: Timestamp,
    pub modification_date: Timestamp,
    /// Free-form user comment
    pub comment: String,
}

impl Fabric {
    /// Create fabric with a fresh id, stamped with the current time
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            id: Guid::new(),
            type_id: Guid::NIL,
            creation_date: now,
            modification_date: now,
            comment: String::new(),
        }
    }

    /// Create fabric with a fresh id and the given type id
    pub fn with_type(type_id: Guid) -> Self {
        Self {
            type_id,
            ..Self::new()
        }
    }

    /// Bump the modification date to the current time
    pub fn touch(&mut self) {
        self.modification_date = Timestamp::now();
    }
}
