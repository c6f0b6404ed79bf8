// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Greybox Processing
//!
//! Pipeline glue around the geometry crate: obtain a [`ScenePlan`] from a
//! [`ScenePlanner`], compile blockout and walkable area in parallel, and
//! persist everything as JSON (plus an optional OBJ of the blockout).
//!
//! [`ScenePlan`]: greybox_core::ScenePlan

pub mod config;
pub mod error;
pub mod persistence;
pub mod pipeline;
pub mod planner;

pub use config::Config;
pub use error::{Error, Result};
pub use persistence::{
    load_blockout, load_navmesh, load_scene_plan, save_artifacts, save_blockout, save_navmesh,
    save_scene_plan, write_obj, SavedArtifacts,
};
pub use pipeline::{compile_scene, plan_and_compile, SceneArtifacts};
pub use planner::{parse_generator_response, JsonFilePlanner, ScenePlanner};
