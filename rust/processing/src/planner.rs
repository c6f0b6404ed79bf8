// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary to the external scene generator
//!
//! Generation itself (language model calls, retries) lives outside this crate.
//! Here a planner is a synchronous call that returns a finished plan, and the
//! generator's JSON response is parsed with the defaults the generator
//! protocol allows it to omit.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use greybox_core::{Region, SceneObject, ScenePlan, Vec2};
use serde::Deserialize;

use crate::error::{Error, Result};

/// World size assumed when the generator omits `size`
pub const DEFAULT_WORLD_SIZE: Vec2 = Vec2::new(50.0, 50.0);

/// Theme assumed when the generator omits `theme`
pub const DEFAULT_THEME: &str = "unknown";

/// Produces a scene plan from a text prompt
pub trait ScenePlanner {
    fn plan(&self, prompt: &str) -> Result<ScenePlan>;
}

/// Generator response as sent over the wire; the prompt is not echoed back
#[derive(Debug, Deserialize)]
struct GeneratorResponse {
    #[serde(default = "default_theme")]
    theme: String,
    #[serde(default = "default_size")]
    size: Vec2,
    #[serde(default)]
    regions: Vec<Region>,
    #[serde(default)]
    objects: Vec<SceneObject>,
    #[serde(default)]
    notes: BTreeMap<String, String>,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_size() -> Vec2 {
    DEFAULT_WORLD_SIZE
}

/// Build a plan from a generator's JSON response to `prompt`
pub fn parse_generator_response(prompt: &str, json: &str) -> Result<ScenePlan> {
    let response: GeneratorResponse = serde_json::from_str(json)?;

    Ok(ScenePlan {
        prompt: prompt.to_string(),
        theme: response.theme,
        size: response.size,
        regions: response.regions,
        objects: response.objects,
        notes: response.notes,
    })
}

/// Replays a generator response saved on disk
#[derive(Debug, Clone)]
pub struct JsonFilePlanner {
    path: PathBuf,
}

impl JsonFilePlanner {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ScenePlanner for JsonFilePlanner {
    fn plan(&self, prompt: &str) -> Result<ScenePlan> {
        let json = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let plan = parse_generator_response(prompt, &json)?;
        tracing::debug!(
            path = %self.path.display(),
            regions = plan.regions.len(),
            objects = plan.objects.len(),
            "Loaded generator response"
        );
        Ok(plan)
    }
}
