// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors that can occur when converting text into model values
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Invalid GUID: {0}")]
    InvalidGuid(#[from] uuid::Error),

    #[error("Failed to parse date '{date_str}': {reason}")]
    InvalidDate { date_str: String, reason: String },

    #[error("Invalid timespan '{value}'")]
    InvalidTimespan { value: String },
}
