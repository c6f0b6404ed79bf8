// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for scene plan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations in a scene plan handed over by the generator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid world size {width}x{height}: both dimensions must be finite and positive")]
    InvalidWorldSize { width: f64, height: f64 },

    #[error("Invalid region '{id}': {reason}")]
    InvalidRegion { id: String, reason: String },

    #[error("Duplicate region id '{0}'")]
    DuplicateRegion(String),
}
