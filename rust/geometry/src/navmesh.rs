// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walkable-area compilation
//!
//! The walkable area is the world rectangle minus the union of obstacle
//! footprints. Only objects whose kind classifies as an obstacle take part;
//! decorative objects never block movement even when they overlap obstacles.
//!
//! The result is best-effort: when the boolean pipeline yields nothing usable
//! the full world rectangle is returned instead, because a pathfinding
//! consumer must never receive an empty navmesh. That fallback drops every
//! obstacle, so it is reported as a [`Diagnostic::WorldBoundsFallback`].

use std::fmt;

use greybox_core::{NavMesh2D, SceneObject, ScenePlan};
use nalgebra::Point2;
use rayon::prelude::*;

use crate::bool2d::{self, Contour, ContourDefect};
use crate::error::Result;
use crate::footprint::{from_point2, object_footprint, to_point2};

/// Non-fatal condition raised while compiling the walkable area
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// An obstacle footprint was dropped before the union
    SkippedObstacle {
        object_id: String,
        defect: ContourDefect,
    },
    /// Obstacle subtraction produced nothing; the navmesh is the open world
    WorldBoundsFallback { reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SkippedObstacle { object_id, defect } => {
                write!(f, "skipped obstacle '{}': {}", object_id, defect)
            }
            Diagnostic::WorldBoundsFallback { reason } => {
                write!(f, "walkable area fell back to world bounds: {}", reason)
            }
        }
    }
}

/// Compiled walkable area with the diagnostics raised on the way
#[derive(Debug, Clone, PartialEq)]
pub struct WalkableArea {
    pub navmesh: NavMesh2D,
    pub diagnostics: Vec<Diagnostic>,
}

impl WalkableArea {
    /// Whether obstacle information was discarded
    pub fn used_fallback(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::WorldBoundsFallback { .. }))
    }
}

/// Compile the walkable polygons of a scene
///
/// # Errors
/// Fails only when the plan violates its structural contract (see
/// [`ScenePlan::validate`]). Bad obstacle geometry is skipped and reported.
pub fn compile_walkable_area(plan: &ScenePlan) -> Result<WalkableArea> {
    plan.validate()?;

    let world: Contour = plan.world_bounds().into_iter().map(to_point2).collect();
    let mut diagnostics = Vec::new();

    // Footprints are independent; order is preserved by collect
    let obstacles: Vec<&SceneObject> = plan.obstacles().collect();
    let footprints: Vec<(&SceneObject, std::result::Result<Contour, ContourDefect>)> = obstacles
        .par_iter()
        .map(|object| (*object, bool2d::sanitize_contour(&object_footprint(object))))
        .collect();

    let mut valid = Vec::with_capacity(footprints.len());
    for (object, footprint) in footprints {
        match footprint {
            Ok(contour) => valid.push(contour),
            Err(defect) => {
                tracing::warn!(
                    object_id = %object.id,
                    kind = %object.kind,
                    %defect,
                    "Skipping obstacle footprint"
                );
                diagnostics.push(Diagnostic::SkippedObstacle {
                    object_id: object.id.clone(),
                    defect,
                });
            }
        }
    }

    // Footprints entirely outside the world cannot remove walkable area
    let before = valid.len();
    valid.retain(|contour| overlaps_world(contour, plan));
    if valid.len() < before {
        tracing::debug!(
            culled = before - valid.len(),
            "Ignoring obstacles outside the world"
        );
    }

    if valid.is_empty() {
        tracing::debug!("No obstacles, walkable area is the whole world");
        return Ok(WalkableArea {
            navmesh: world_navmesh(plan),
            diagnostics,
        });
    }

    let merged = bool2d::union(&valid);
    let walkable = bool2d::difference(&world, &merged.polygons);

    let reason = match walkable {
        Ok(output) if !output.is_empty() => {
            tracing::debug!(
                obstacles = valid.len(),
                merged = merged.polygons.len(),
                polygons = output.polygons.len(),
                "Compiled walkable area"
            );
            let polygons = output
                .polygons
                .iter()
                .map(|ring| ring.iter().map(from_point2).collect())
                .collect();
            return Ok(WalkableArea {
                navmesh: NavMesh2D::new(polygons),
                diagnostics,
            });
        }
        Ok(_) => "obstacles cover the entire world".to_string(),
        Err(e) => e.to_string(),
    };

    tracing::warn!(%reason, "Walkable area fell back to world bounds, obstacle information lost");
    diagnostics.push(Diagnostic::WorldBoundsFallback { reason });

    Ok(WalkableArea {
        navmesh: world_navmesh(plan),
        diagnostics,
    })
}

fn overlaps_world(contour: &[Point2<f64>], plan: &ScenePlan) -> bool {
    bool2d::contour_bounds(contour).map_or(false, |(min, max)| {
        max.x > 0.0 && max.y > 0.0 && min.x < plan.size.x && min.y < plan.size.y
    })
}

/// The open world: one rectangle, counter-clockwise from the origin
fn world_navmesh(plan: &ScenePlan) -> NavMesh2D {
    NavMesh2D::new(vec![plan.world_bounds()])
}
