// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object footprints as oriented rectangles in world space

use greybox_core::{SceneObject, Vec2};
use nalgebra::{Point2, Rotation2, Vector2};

/// Build the world-space corners of a `size` rectangle centered on `center`,
/// rotated counter-clockwise by `rotation_deg`.
///
/// Corners come out in the order (-w/2, -d/2), (w/2, -d/2), (w/2, d/2),
/// (-w/2, d/2) before rotation. A rotation of exactly zero skips the
/// trigonometry, so unrotated footprints land on exact axis-aligned corners.
///
/// Sizes are not validated: zero or negative extents produce a degenerate
/// rectangle which the clipping engine rejects later.
pub fn footprint(center: Point2<f64>, size: Vector2<f64>, rotation_deg: f64) -> [Point2<f64>; 4] {
    let hw = size.x / 2.0;
    let hh = size.y / 2.0;

    let mut corners = [
        Vector2::new(-hw, -hh),
        Vector2::new(hw, -hh),
        Vector2::new(hw, hh),
        Vector2::new(-hw, hh),
    ];

    if rotation_deg != 0.0 {
        let rotation = Rotation2::new(rotation_deg.to_radians());
        for corner in &mut corners {
            *corner = rotation * *corner;
        }
    }

    corners.map(|offset| center + offset)
}

/// Footprint of a scene object
#[inline]
pub fn object_footprint(object: &SceneObject) -> [Point2<f64>; 4] {
    footprint(
        to_point2(object.position),
        Vector2::new(object.size.x, object.size.y),
        object.rotation,
    )
}

#[inline]
pub fn to_point2(v: Vec2) -> Point2<f64> {
    Point2::new(v.x, v.y)
}

#[inline]
pub fn from_point2(p: &Point2<f64>) -> Vec2 {
    Vec2::new(p.x, p.y)
}
