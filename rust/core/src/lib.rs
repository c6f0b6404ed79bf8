// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Greybox Core
//!
//! Data model for declarative level descriptions: a [`ScenePlan`] of named
//! regions and placed objects, and the two artifacts compiled from it, a
//! [`BlockoutMesh`] of extruded boxes and a [`NavMesh2D`] of walkable polygons.
//!
//! The plan is produced by an external generator (a language model or a human
//! author) and treated as read-only. [`ScenePlan::validate`] enforces its
//! structural contract before compilation.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support. Points encode as JSON arrays
//!   (`[x, y]`), boxes as `[center, size]` pairs.

pub mod error;
pub mod kind;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use kind::ObjectClass;
pub use types::{
    ring_area, BlockoutMesh, BoxVolume, NavMesh2D, Region, SceneObject, ScenePlan, Vec2, Vec3,
};
