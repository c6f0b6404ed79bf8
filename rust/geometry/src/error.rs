// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::bool2d::ContourDefect;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during geometry compilation
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid contour: {0}")]
    InvalidContour(#[from] ContourDefect),

    #[error("Non-finite geometry on object '{object_id}'")]
    NonFinite { object_id: String },

    #[error("Invalid scene plan: {0}")]
    Plan(#[from] greybox_core::Error),
}
