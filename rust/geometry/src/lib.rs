// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Greybox Geometry Compilation
//!
//! Turns a [`ScenePlan`](greybox_core::ScenePlan) into its two geometric
//! artifacts: extruded blockout boxes and the walkable area, computed with
//! i_overlay polygon booleans and nalgebra points.

pub mod blockout;
pub mod bool2d;
pub mod error;
pub mod footprint;
pub mod mesh;
pub mod navmesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use blockout::{generate_blockout, object_height, BUILDING_HEIGHT, GROUND_HEIGHT, WALL_HEIGHT};
pub use bool2d::{BooleanOutput, Contour, ContourDefect, SkippedOperand};
pub use error::{Error, Result};
pub use footprint::{footprint, object_footprint};
pub use mesh::{box_mesh, Mesh};
pub use navmesh::{compile_walkable_area, Diagnostic, WalkableArea};
