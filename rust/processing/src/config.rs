// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration loaded from environment variables.

use std::path::PathBuf;

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory receiving scene_plan.json, blockout.json, navmesh.json.
    pub output_dir: PathBuf,
    /// Number of worker threads for parallel compilation.
    pub worker_threads: usize,
    /// Also export the blockout as a Wavefront OBJ.
    pub write_obj: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            output_dir: lookup("GREYBOX_OUTPUT_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            worker_threads: lookup("GREYBOX_WORKER_THREADS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or_else(num_cpus::get),
            write_obj: lookup("GREYBOX_WRITE_OBJ")
                .map(|s| !matches!(s.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
