// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Library identity and process-wide lifecycle
///
/// `Model` has no values; it only groups the associated functions below.
#[derive(Debug)]
pub enum Model {}

impl Model {
    /// Library version in `major.minor.patch` form
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn library_name() -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    /// Mark the library as ready for use
    ///
    /// Always succeeds. Calling it again while initialized is harmless.
    pub fn initialize() -> bool {
        if INITIALIZED.swap(true, Ordering::AcqRel) {
            trace!("{} already initialized", Self::library_name());
        } else {
            debug!(
                library = Self::library_name(),
                version = Self::version(),
                "Initialized"
            );
        }
        true
    }

    /// Clear the ready flag. No resources are held, so nothing is released.
    pub fn shutdown() {
        if INITIALIZED.swap(false, Ordering::AcqRel) {
            debug!(library = Self::library_name(), "Shut down");
        } else {
            trace!("{} shut down without being initialized", Self::library_name());
        }
    }

    pub fn is_initialized() -> bool {
        INITIALIZED.load(Ordering::Acquire)
    }
}
