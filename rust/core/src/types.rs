// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene plan data model
//!
//! All records are plain values produced once by the scene generator and read
//! by the compilation stages. Planar coordinates are meters on the ground
//! plane; `Vec2::y` is the second planar axis, which becomes the 3D Z axis.

use std::collections::BTreeMap;

use crate::kind::ObjectClass;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point or extent on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

/// A 3D point or extent, Y-up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lift a ground-plane point to 3D at the given height.
    ///
    /// Planar X stays X, planar Y becomes Z and `height` becomes the vertical Y.
    #[inline]
    pub fn from_ground(p: Vec2, height: f64) -> Self {
        Self::new(p.x, height, p.y)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// A placed object with a rectangular footprint
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneObject {
    pub id: String,
    /// Free-form tag ("house", "tree", "road", ...)
    pub kind: String,
    pub region_id: String,
    /// Footprint center
    pub position: Vec2,
    /// Footprint (width, depth)
    pub size: Vec2,
    /// Degrees, counter-clockwise about the vertical axis
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f64,
}

impl SceneObject {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        region_id: impl Into<String>,
        position: Vec2,
        size: Vec2,
        rotation: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            region_id: region_id.into(),
            position,
            size,
            rotation,
        }
    }

    #[inline]
    pub fn class(&self) -> ObjectClass {
        ObjectClass::from_kind(&self.kind)
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.class().is_obstacle()
    }
}

/// A named axis-aligned area of the level
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub id: String,
    pub name: String,
    /// Free-form tag ("plaza", "residential", ...)
    pub kind: String,
    pub bbox_min: Vec2,
    pub bbox_max: Vec2,
}

impl Region {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        bbox_min: Vec2,
        bbox_max: Vec2,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            bbox_min,
            bbox_max,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.bbox_min.x + self.bbox_max.x) / 2.0,
            (self.bbox_min.y + self.bbox_max.y) / 2.0,
        )
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.bbox_max.x - self.bbox_min.x,
            self.bbox_max.y - self.bbox_min.y,
        )
    }
}

/// Root aggregate handed over by the scene generator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenePlan {
    pub prompt: String,
    pub theme: String,
    /// World (width, height) in meters
    pub size: Vec2,
    #[cfg_attr(feature = "serde", serde(default))]
    pub regions: Vec<Region>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub objects: Vec<SceneObject>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: BTreeMap<String, String>,
}

impl ScenePlan {
    /// Create an empty plan of the given world size
    pub fn new(prompt: impl Into<String>, theme: impl Into<String>, size: Vec2) -> Self {
        Self {
            prompt: prompt.into(),
            theme: theme.into(),
            size,
            regions: Vec::new(),
            objects: Vec::new(),
            notes: BTreeMap::new(),
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// World rectangle corners, counter-clockwise starting at the origin
    pub fn world_bounds(&self) -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(self.size.x, 0.0),
            Vec2::new(self.size.x, self.size.y),
            Vec2::new(0.0, self.size.y),
        ]
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.is_obstacle())
    }
}

/// One axis-aligned box of the blockout
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(Vec3, Vec3)", into = "(Vec3, Vec3)"))]
pub struct BoxVolume {
    pub center: Vec3,
    /// Full extents, every component >= 0
    pub size: Vec3,
}

impl BoxVolume {
    #[inline]
    pub const fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Zero extent along at least one axis
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0 || self.size.z == 0.0
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        Vec3::new(
            self.center.x - self.size.x / 2.0,
            self.center.y - self.size.y / 2.0,
            self.center.z - self.size.z / 2.0,
        )
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        Vec3::new(
            self.center.x + self.size.x / 2.0,
            self.center.y + self.size.y / 2.0,
            self.center.z + self.size.z / 2.0,
        )
    }
}

impl From<(Vec3, Vec3)> for BoxVolume {
    fn from((center, size): (Vec3, Vec3)) -> Self {
        Self { center, size }
    }
}

impl From<BoxVolume> for (Vec3, Vec3) {
    fn from(b: BoxVolume) -> Self {
        (b.center, b.size)
    }
}

/// Greybox volumes: ground first, then regions, then objects (input order)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockoutMesh {
    pub boxes: Vec<BoxVolume>,
}

impl BlockoutMesh {
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, center: Vec3, size: Vec3) {
        self.boxes.push(BoxVolume::new(center, size));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Indices of zero-volume boxes
    pub fn degenerate_boxes(&self) -> Vec<usize> {
        self.boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_degenerate())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Walkable area as simple, hole-free rings
///
/// Rings are not explicitly closed: the first vertex is not repeated.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavMesh2D {
    pub polygons: Vec<Vec<Vec2>>,
}

impl NavMesh2D {
    pub fn new(polygons: Vec<Vec<Vec2>>) -> Self {
        Self { polygons }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Sum of the unsigned areas of all rings
    pub fn total_area(&self) -> f64 {
        self.polygons.iter().map(|p| ring_area(p).abs()).sum()
    }
}

/// Signed shoelace area of an open ring (positive = counter-clockwise)
pub fn ring_area(ring: &[Vec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].x * ring[j].y;
        area -= ring[j].x * ring[i].y;
    }

    area * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_bounds_ccw_from_origin() {
        let plan = ScenePlan::new("p", "t", Vec2::new(50.0, 30.0));
        let bounds = plan.world_bounds();
        assert_eq!(bounds[0], Vec2::new(0.0, 0.0));
        assert_eq!(bounds[1], Vec2::new(50.0, 0.0));
        assert_eq!(bounds[2], Vec2::new(50.0, 30.0));
        assert_eq!(bounds[3], Vec2::new(0.0, 30.0));
        assert!(ring_area(&bounds) > 0.0);
    }

    #[test]
    fn test_region_center_and_extent() {
        let region = Region::new(
            "r1",
            "Town Square",
            "plaza",
            Vec2::new(5.0, 5.0),
            Vec2::new(20.0, 20.0),
        );
        assert_eq!(region.center(), Vec2::new(12.5, 12.5));
        assert_eq!(region.extent(), Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_degenerate_boxes() {
        let mut mesh = BlockoutMesh::new();
        mesh.push(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        mesh.push(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(mesh.degenerate_boxes(), vec![1]);
    }

    #[test]
    fn test_navmesh_total_area_ignores_winding() {
        let ccw = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        let cw: Vec<Vec2> = ccw.iter().rev().copied().collect();
        let navmesh = NavMesh2D::new(vec![ccw, cw]);
        assert_eq!(navmesh.total_area(), 8.0);
    }

    #[test]
    fn test_obstacle_filter() {
        let plan = ScenePlan::new("p", "t", Vec2::new(10.0, 10.0))
            .with_object(SceneObject::new(
                "a",
                "House",
                "r",
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 1.0),
                0.0,
            ))
            .with_object(SceneObject::new(
                "b",
                "tree",
                "r",
                Vec2::new(2.0, 2.0),
                Vec2::new(1.0, 1.0),
                0.0,
            ));
        let ids: Vec<&str> = plan.obstacles().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_generator_json_shape() {
        let json = r#"{
            "prompt": "village",
            "theme": "medieval",
            "size": [50, 50],
            "regions": [
                {"id": "region_1", "name": "Town Square", "kind": "plaza",
                 "bbox_min": [5, 5], "bbox_max": [20, 20]}
            ],
            "objects": [
                {"id": "obj_1", "kind": "house", "region_id": "region_1",
                 "position": [10, 10], "size": [4, 4]}
            ],
            "notes": {"lighting": "warm, evening"}
        }"#;
        let plan: ScenePlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.size, Vec2::new(50.0, 50.0));
        assert_eq!(plan.objects[0].rotation, 0.0);
        assert_eq!(plan.notes["lighting"], "warm, evening");

        let boxes = BlockoutMesh {
            boxes: vec![BoxVolume::new(
                Vec3::new(25.0, 0.1, 25.0),
                Vec3::new(50.0, 0.2, 50.0),
            )],
        };
        let encoded = serde_json::to_string(&boxes).unwrap();
        assert_eq!(encoded, r#"{"boxes":[[[25.0,0.1,25.0],[50.0,0.2,50.0]]]}"#);
    }
}
