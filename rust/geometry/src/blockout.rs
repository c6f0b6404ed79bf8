// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Procedural blockout: scene entities as axis-aligned boxes
//!
//! Planar X maps to 3D X, planar Y maps to 3D Z, and 3D Y is up. Boxes are
//! emitted ground first, then one slab per region, then one box per object,
//! each group in input order.

use greybox_core::{BlockoutMesh, ObjectClass, ScenePlan, Vec3};

use crate::error::{Error, Result};

/// Thickness of the ground slab and of region marker slabs
pub const GROUND_HEIGHT: f64 = 0.2;

/// Extrusion height for houses, buildings and towers
pub const BUILDING_HEIGHT: f64 = 6.0;

/// Extrusion height for walls
pub const WALL_HEIGHT: f64 = 4.0;

/// Extrusion height for an object class
#[inline]
pub fn object_height(class: ObjectClass) -> f64 {
    match class {
        ObjectClass::Wall => WALL_HEIGHT,
        ObjectClass::Building => BUILDING_HEIGHT,
        ObjectClass::Structure | ObjectClass::Other => GROUND_HEIGHT * 2.0,
    }
}

/// Build the greybox volumes of a scene
///
/// Objects use their center and footprint size directly; rotation is ignored.
/// Negative footprint sizes are clamped to zero, giving a degenerate box.
///
/// # Errors
/// Fails when the plan violates its structural contract or an object carries
/// a non-finite position or size.
pub fn generate_blockout(plan: &ScenePlan) -> Result<BlockoutMesh> {
    plan.validate()?;

    let mut mesh = BlockoutMesh::with_capacity(1 + plan.regions.len() + plan.objects.len());

    // Ground
    let (width, depth) = (plan.size.x, plan.size.y);
    mesh.push(
        Vec3::new(width / 2.0, GROUND_HEIGHT / 2.0, depth / 2.0),
        Vec3::new(width, GROUND_HEIGHT, depth),
    );

    // Region marker slabs
    for region in &plan.regions {
        let extent = region.extent();
        mesh.push(
            Vec3::from_ground(region.center(), GROUND_HEIGHT / 2.0),
            Vec3::new(extent.x, GROUND_HEIGHT, extent.y),
        );
    }

    for object in &plan.objects {
        if !object.position.is_finite() || !object.size.is_finite() {
            return Err(Error::NonFinite {
                object_id: object.id.clone(),
            });
        }

        let height = object_height(object.class());
        mesh.push(
            Vec3::from_ground(object.position, height / 2.0),
            Vec3::new(object.size.x.max(0.0), height, object.size.y.max(0.0)),
        );
    }

    tracing::debug!(
        boxes = mesh.len(),
        degenerate = mesh.degenerate_boxes().len(),
        "Generated blockout"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greybox_core::{Region, SceneObject, Vec2};

    #[test]
    fn test_object_heights() {
        assert_eq!(object_height(ObjectClass::from_kind("wall")), 4.0);
        assert_eq!(object_height(ObjectClass::from_kind("tower")), 6.0);
        assert_eq!(object_height(ObjectClass::from_kind("Structure")), 0.4);
        assert_eq!(object_height(ObjectClass::from_kind("tree")), 0.4);
    }

    #[test]
    fn test_empty_plan_has_ground_only() {
        let plan = ScenePlan::new("p", "t", Vec2::new(40.0, 20.0));
        let mesh = generate_blockout(&plan).unwrap();
        assert_eq!(mesh.len(), 1);
        assert_eq!(mesh.boxes[0].center, Vec3::new(20.0, 0.1, 10.0));
        assert_eq!(mesh.boxes[0].size, Vec3::new(40.0, 0.2, 20.0));
    }

    #[test]
    fn test_axis_remap_and_order() {
        let plan = ScenePlan::new("p", "t", Vec2::new(50.0, 50.0))
            .with_region(Region::new(
                "r",
                "Road",
                "road",
                Vec2::new(0.0, 10.0),
                Vec2::new(50.0, 14.0),
            ))
            .with_object(SceneObject::new(
                "w",
                "wall",
                "r",
                Vec2::new(3.0, 40.0),
                Vec2::new(6.0, 0.5),
                30.0,
            ))
            .with_object(SceneObject::new(
                "t",
                "tree",
                "r",
                Vec2::new(7.0, 2.0),
                Vec2::new(1.0, 1.0),
                0.0,
            ));
        let mesh = generate_blockout(&plan).unwrap();

        assert_eq!(mesh.len(), 4);
        assert_eq!(mesh.boxes[1].center, Vec3::new(25.0, 0.1, 12.0));
        assert_eq!(mesh.boxes[1].size, Vec3::new(50.0, 0.2, 4.0));
        assert_eq!(mesh.boxes[2].center, Vec3::new(3.0, 2.0, 40.0));
        assert_eq!(mesh.boxes[2].size, Vec3::new(6.0, 4.0, 0.5));
        assert_eq!(mesh.boxes[3].center, Vec3::new(7.0, 0.2, 2.0));
        assert_eq!(mesh.boxes[3].size, Vec3::new(1.0, 0.4, 1.0));
    }

    #[test]
    fn test_flat_footprint_is_flagged_degenerate() {
        let plan = ScenePlan::new("p", "t", Vec2::new(10.0, 10.0))
            .with_object(SceneObject::new(
                "sign",
                "sign",
                "r",
                Vec2::new(5.0, 5.0),
                Vec2::new(0.0, 1.0),
                0.0,
            ))
            .with_object(SceneObject::new(
                "neg",
                "house",
                "r",
                Vec2::new(5.0, 5.0),
                Vec2::new(-2.0, 1.0),
                0.0,
            ));
        let mesh = generate_blockout(&plan).unwrap();
        assert_eq!(mesh.degenerate_boxes(), vec![1, 2]);
        assert_eq!(mesh.boxes[2].size.x, 0.0);
    }

    #[test]
    fn test_non_finite_object_is_rejected() {
        let plan = ScenePlan::new("p", "t", Vec2::new(10.0, 10.0)).with_object(SceneObject::new(
            "bad",
            "house",
            "r",
            Vec2::new(f64::INFINITY, 5.0),
            Vec2::new(1.0, 1.0),
            0.0,
        ));
        match generate_blockout(&plan) {
            Err(Error::NonFinite { object_id }) => assert_eq!(object_id, "bad"),
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }
}
