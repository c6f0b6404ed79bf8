// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scene compilation
//!
//! Blockout extrusion and walkable-area compilation read the same immutable
//! plan and write disjoint outputs, so they run side by side on the rayon pool.

use greybox_core::{BlockoutMesh, NavMesh2D, ScenePlan};
use greybox_geometry::{compile_walkable_area, generate_blockout, Diagnostic};

use crate::error::Result;
use crate::planner::ScenePlanner;

/// Both compiled artifacts of a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneArtifacts {
    pub blockout: BlockoutMesh,
    pub navmesh: NavMesh2D,
    /// Non-fatal conditions raised by walkable-area compilation
    pub diagnostics: Vec<Diagnostic>,
}

impl SceneArtifacts {
    /// Whether the navmesh lost its obstacle information
    pub fn navmesh_degraded(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::WorldBoundsFallback { .. }))
    }
}

/// Compile the blockout and the walkable area of a plan
pub fn compile_scene(plan: &ScenePlan) -> Result<SceneArtifacts> {
    plan.validate()?;

    for object in &plan.objects {
        if plan.region(&object.region_id).is_none() {
            tracing::debug!(
                object_id = %object.id,
                region_id = %object.region_id,
                "Object references an unknown region"
            );
        }
    }

    let (blockout, walkable) = rayon::join(
        || generate_blockout(plan),
        || compile_walkable_area(plan),
    );
    let blockout = blockout?;
    let walkable = walkable?;

    tracing::info!(
        theme = %plan.theme,
        regions = plan.regions.len(),
        objects = plan.objects.len(),
        boxes = blockout.len(),
        polygons = walkable.navmesh.len(),
        diagnostics = walkable.diagnostics.len(),
        "Compiled scene"
    );

    Ok(SceneArtifacts {
        blockout,
        navmesh: walkable.navmesh,
        diagnostics: walkable.diagnostics,
    })
}

/// Ask a planner for a plan, then compile it
pub fn plan_and_compile(
    planner: &dyn ScenePlanner,
    prompt: &str,
) -> Result<(ScenePlan, SceneArtifacts)> {
    tracing::info!(prompt, "Building scene plan");
    let plan = planner.plan(prompt)?;
    let artifacts = compile_scene(&plan)?;
    Ok((plan, artifacts))
}
