// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the compilation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid scene plan: {0}")]
    Plan(#[from] greybox_core::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] greybox_geometry::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reported by a [`ScenePlanner`](crate::ScenePlanner) backend,
    /// e.g. a remote generator that could not be reached. Backends live
    /// outside this crate and construct it directly.
    #[error("Scene planner error: {0}")]
    Planner(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
