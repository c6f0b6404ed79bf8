// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D Boolean Operations for Walkable-Area Compilation
//!
//! Union and difference of simple polygons using the i_overlay crate. Operands
//! are sanitized first; an operand that cannot be repaired is skipped and
//! reported instead of failing the whole operation.
//!
//! Every output ring is simple, counter-clockwise, not explicitly closed and
//! hole-free. Holes produced by the overlay are opened by cutting the shape
//! along a vertical line through the hole and recursing on both halves.
//!
//! i_overlay works on an integer grid, so its float output is off by a few
//! grid steps. Output coordinates within tolerance of an input coordinate are
//! restored to that exact value; only true intersection coordinates keep the
//! overlay's rounding.

use std::fmt;

use crate::error::Result;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use nalgebra::Point2;
use thiserror::Error;

/// Epsilon for floating point comparisons in 2D operations
const EPSILON_2D: f64 = 1e-9;

/// Minimum area threshold - polygons smaller than this are considered degenerate
const MIN_AREA_THRESHOLD: f64 = 1e-10;

/// Bound on recursive hole cutting
const MAX_SPLIT_DEPTH: usize = 64;

/// Snap tolerance relative to the extent of the overlay operands. The overlay
/// grid step is about 2^-30 of that extent.
const SNAP_RELATIVE_TOLERANCE: f64 = 1e-7;

/// A polygon ring without explicit closure
pub type Contour = Vec<Point2<f64>>;

/// i_overlay path format
type Path = Vec<[f64; 2]>;

/// Why an operand was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourDefect {
    #[error("fewer than 3 distinct vertices")]
    TooFewVertices,

    #[error("non-finite coordinate")]
    NonFinite,

    #[error("zero area")]
    ZeroArea,

    #[error("self-intersecting boundary")]
    SelfIntersecting,
}

/// An operand dropped from a boolean operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedOperand {
    /// Position in the operand slice passed by the caller
    pub index: usize,
    pub defect: ContourDefect,
}

impl fmt::Display for SkippedOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operand #{}: {}", self.index, self.defect)
    }
}

/// Result rings of a boolean operation plus the operands that were dropped
#[derive(Debug, Clone, Default)]
pub struct BooleanOutput {
    pub polygons: Vec<Contour>,
    pub skipped: Vec<SkippedOperand>,
}

impl BooleanOutput {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Total unsigned area of the result rings
    pub fn area(&self) -> f64 {
        self.polygons
            .iter()
            .map(|p| compute_signed_area(p).abs())
            .sum()
    }
}

/// Union a list of polygons into the smallest set of rings covering the same area
///
/// Empty input gives an empty result; a single valid operand is returned as-is
/// after sanitizing.
pub fn union(polygons: &[Contour]) -> BooleanOutput {
    let (mut valid, skipped) = sanitize_operands(polygons);

    let polygons = match valid.len() {
        0 => Vec::new(),
        1 => valid.pop().into_iter().collect(),
        _ => {
            let subject: Vec<Path> = vec![contour_to_path(&valid[0])];
            let clip: Vec<Path> = valid[1..].iter().map(|c| contour_to_path(c)).collect();

            // All operands are CCW, so NonZero merges overlaps inside each operand set
            let mut result = subject.overlay(&clip, OverlayRule::Union, FillRule::NonZero);
            SnapGrid::new(subject.iter().chain(&clip)).snap_shapes(&mut result);
            shapes_to_contours(result)
        }
    };

    BooleanOutput { polygons, skipped }
}

/// Subtract the union of `polygons` from `subject`
///
/// The result may be empty (subject fully covered), a single ring, or several
/// disjoint rings when the clip splits the subject. With no valid clip
/// operands the sanitized subject is returned unchanged.
///
/// # Errors
/// Fails only when the subject itself cannot be sanitized.
pub fn difference(subject: &[Point2<f64>], polygons: &[Contour]) -> Result<BooleanOutput> {
    let subject = sanitize_contour(subject)?;
    let (valid, skipped) = sanitize_operands(polygons);

    if valid.is_empty() {
        return Ok(BooleanOutput {
            polygons: vec![subject],
            skipped,
        });
    }

    let subject_paths: Vec<Path> = vec![contour_to_path(&subject)];
    let clip: Vec<Path> = valid.iter().map(|c| contour_to_path(c)).collect();

    let mut result = subject_paths.overlay(&clip, OverlayRule::Difference, FillRule::NonZero);
    SnapGrid::new(subject_paths.iter().chain(&clip)).snap_shapes(&mut result);

    Ok(BooleanOutput {
        polygons: shapes_to_contours(result),
        skipped,
    })
}

/// Repair and validate a ring for use as a boolean operand
///
/// Drops an explicit closing vertex and consecutive duplicates, then rejects
/// rings that are non-finite, have fewer than three vertices, enclose no
/// area, or cross themselves. Valid rings are returned counter-clockwise.
pub fn sanitize_contour(contour: &[Point2<f64>]) -> std::result::Result<Contour, ContourDefect> {
    if contour.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(ContourDefect::NonFinite);
    }

    let ring = dedup_ring(contour);
    if ring.len() < 3 {
        return Err(ContourDefect::TooFewVertices);
    }

    if compute_signed_area(&ring).abs() <= MIN_AREA_THRESHOLD {
        return Err(ContourDefect::ZeroArea);
    }

    if has_self_intersection(&ring) {
        return Err(ContourDefect::SelfIntersecting);
    }

    Ok(ensure_ccw(&ring))
}

/// Compute the signed area of a 2D contour
/// Positive = counter-clockwise, Negative = clockwise
pub fn compute_signed_area(contour: &[Point2<f64>]) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let n = contour.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area += contour[i].x * contour[j].y;
        area -= contour[j].x * contour[i].y;
    }

    area * 0.5
}

/// Ensure contour has counter-clockwise winding (positive area)
pub fn ensure_ccw(contour: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let area = compute_signed_area(contour);
    if area < 0.0 {
        contour.iter().rev().cloned().collect()
    } else {
        contour.to_vec()
    }
}

/// Compute bounding box of a contour
pub fn contour_bounds(contour: &[Point2<f64>]) -> Option<(Point2<f64>, Point2<f64>)> {
    if contour.is_empty() {
        return None;
    }

    let mut min = contour[0];
    let mut max = contour[0];

    for p in contour.iter().skip(1) {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some((min, max))
}

// ============================================================================
// Internal Helper Functions
// ============================================================================

fn sanitize_operands(polygons: &[Contour]) -> (Vec<Contour>, Vec<SkippedOperand>) {
    let mut valid = Vec::with_capacity(polygons.len());
    let mut skipped = Vec::new();

    for (index, polygon) in polygons.iter().enumerate() {
        match sanitize_contour(polygon) {
            Ok(contour) => valid.push(contour),
            Err(defect) => {
                tracing::warn!(index, %defect, "Skipping invalid boolean operand");
                skipped.push(SkippedOperand { index, defect });
            }
        }
    }

    (valid, skipped)
}

/// Remove consecutive duplicates, including a closing copy of the first vertex
fn dedup_ring(contour: &[Point2<f64>]) -> Contour {
    let mut ring: Contour = Vec::with_capacity(contour.len());
    for p in contour {
        if ring.last().map_or(true, |last| !same_point(last, p)) {
            ring.push(*p);
        }
    }
    while ring.len() > 1 && same_point(&ring[0], &ring[ring.len() - 1]) {
        ring.pop();
    }
    ring
}

#[inline]
fn same_point(a: &Point2<f64>, b: &Point2<f64>) -> bool {
    (a.x - b.x).abs() <= EPSILON_2D && (a.y - b.y).abs() <= EPSILON_2D
}

/// Whether any two non-adjacent edges of the ring touch or cross
fn has_self_intersection(ring: &[Point2<f64>]) -> bool {
    let n = ring.len();
    if n < 4 {
        return false;
    }

    for i in 0..n {
        let a1 = &ring[i];
        let a2 = &ring[(i + 1) % n];
        for j in (i + 2)..n {
            // First and last edges share vertex 0
            if i == 0 && j == n - 1 {
                continue;
            }
            let b1 = &ring[j];
            let b2 = &ring[(j + 1) % n];
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    false
}

#[inline]
fn orient(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
fn on_segment(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> bool {
    p.x >= a.x.min(b.x) - EPSILON_2D
        && p.x <= a.x.max(b.x) + EPSILON_2D
        && p.y >= a.y.min(b.y) - EPSILON_2D
        && p.y <= a.y.max(b.y) + EPSILON_2D
}

fn segments_intersect(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    q1: &Point2<f64>,
    q2: &Point2<f64>,
) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

/// Convert a Point2 contour to i_overlay path format
fn contour_to_path(contour: &[Point2<f64>]) -> Path {
    contour.iter().map(|p| [p.x, p.y]).collect()
}

fn path_to_contour(path: &[[f64; 2]]) -> Contour {
    path.iter().map(|p| Point2::new(p[0], p[1])).collect()
}

fn path_bounds(path: &[[f64; 2]]) -> ([f64; 2], [f64; 2]) {
    let mut min = [f64::MAX, f64::MAX];
    let mut max = [f64::MIN, f64::MIN];
    for p in path {
        min[0] = min[0].min(p[0]);
        min[1] = min[1].min(p[1]);
        max[0] = max[0].max(p[0]);
        max[1] = max[1].max(p[1]);
    }
    (min, max)
}

fn rect_path(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Path {
    vec![[min_x, min_y], [max_x, min_y], [max_x, max_y], [min_x, max_y]]
}

/// Convert i_overlay result shapes into hole-free rings
///
/// i_overlay returns Vec<Vec<Vec<[f64; 2]>>> where:
/// - Outer Vec: list of shapes
/// - Middle Vec: list of contours per shape (first is outer, rest are holes)
/// - Inner Vec: list of points per contour
fn shapes_to_contours(shapes: Vec<Vec<Path>>) -> Vec<Contour> {
    let mut outers = Vec::with_capacity(shapes.len());
    for shape in &shapes {
        split_holes(shape, 0, &mut outers);
    }

    outers
        .iter()
        .filter_map(|path| {
            let ring = dedup_ring(&path_to_contour(path));
            if ring.len() < 3 || compute_signed_area(&ring).abs() <= MIN_AREA_THRESHOLD {
                return None;
            }
            Some(ensure_ccw(&ring))
        })
        .collect()
}

/// Cut a shape with holes into hole-free pieces
///
/// The cut runs vertically through the middle of the first hole's bounding
/// box. A connected hole always straddles that line, so it opens into a notch
/// on both sides and every piece carries strictly fewer holes.
///
/// Both halves are snapped onto the shape's own coordinates and `cut_x`. The
/// right half additionally reuses the cut-line vertices of the left half, so
/// the two sides meet along identical edges.
fn split_holes(shape: &[Path], depth: usize, out: &mut Vec<Path>) {
    let Some(outer) = shape.first() else {
        return;
    };
    if shape.len() == 1 {
        out.push(outer.clone());
        return;
    }
    if depth >= MAX_SPLIT_DEPTH {
        tracing::warn!(
            holes = shape.len() - 1,
            "Hole cutting did not converge, keeping outer boundary only"
        );
        out.push(outer.clone());
        return;
    }

    let (hole_min, hole_max) = path_bounds(&shape[1]);
    let cut_x = 0.5 * (hole_min[0] + hole_max[0]);

    let (min, max) = path_bounds(outer);
    let margin = 1.0 + (max[0] - min[0]).max(max[1] - min[1]);
    let left = rect_path(min[0] - margin, min[1] - margin, cut_x, max[1] + margin);
    let right = rect_path(cut_x, min[1] - margin, max[0] + margin, max[1] + margin);

    let mut grid = SnapGrid::new(shape.iter().chain([&left, &right]));
    let subject: Vec<Path> = shape.to_vec();

    let mut left_pieces = subject.overlay(&vec![left], OverlayRule::Intersect, FillRule::EvenOdd);
    grid.snap_shapes(&mut left_pieces);
    grid.add_ys(
        left_pieces
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p[0] == cut_x)
            .map(|p| p[1]),
    );

    let mut right_pieces = subject.overlay(&vec![right], OverlayRule::Intersect, FillRule::EvenOdd);
    grid.snap_shapes(&mut right_pieces);

    for piece in left_pieces.iter().chain(&right_pieces) {
        split_holes(piece, depth + 1, out);
    }
}

/// Exact coordinates that overlay output is snapped back onto
struct SnapGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    tolerance: f64,
}

impl SnapGrid {
    fn new<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for p in paths.into_iter().flatten() {
            xs.push(p[0]);
            ys.push(p[1]);
        }
        sort_unique(&mut xs);
        sort_unique(&mut ys);

        let extent = match (xs.first(), xs.last(), ys.first(), ys.last()) {
            (Some(x0), Some(x1), Some(y0), Some(y1)) => (x1 - x0).max(y1 - y0),
            _ => 0.0,
        };

        Self {
            xs,
            ys,
            tolerance: (extent * SNAP_RELATIVE_TOLERANCE).max(EPSILON_2D),
        }
    }

    fn add_ys(&mut self, ys: impl IntoIterator<Item = f64>) {
        self.ys.extend(ys);
        sort_unique(&mut self.ys);
    }

    fn snap_shapes(&self, shapes: &mut [Vec<Path>]) {
        for p in shapes.iter_mut().flatten().flatten() {
            p[0] = snap_to(&self.xs, p[0], self.tolerance);
            p[1] = snap_to(&self.ys, p[1], self.tolerance);
        }
    }
}

fn sort_unique(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup();
}

/// Nearest value of the sorted `candidates` within `tolerance`, else `value`
fn snap_to(candidates: &[f64], value: f64, tolerance: f64) -> f64 {
    let i = candidates.partition_point(|&c| c < value);
    let below = i.checked_sub(1).map(|j| candidates[j]);
    let above = candidates.get(i).copied();

    let nearest = match (below, above) {
        (Some(b), Some(a)) => {
            if value - b <= a - value {
                b
            } else {
                a
            }
        }
        (Some(c), None) | (None, Some(c)) => c,
        (None, None) => return value,
    };

    if (nearest - value).abs() <= tolerance {
        nearest
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::footprint;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn square(x: f64, y: f64, size: f64) -> Contour {
        vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ]
    }

    #[test]
    fn test_compute_signed_area_ccw() {
        let area = compute_signed_area(&square(0.0, 0.0, 1.0));
        assert!((area - 1.0).abs() < EPSILON_2D);
    }

    #[test]
    fn test_compute_signed_area_cw() {
        let cw: Contour = square(0.0, 0.0, 1.0).into_iter().rev().collect();
        let area = compute_signed_area(&cw);
        assert!((area + 1.0).abs() < EPSILON_2D);
    }

    #[test]
    fn test_sanitize_removes_closure_and_duplicates() {
        let mut ring = square(0.0, 0.0, 2.0);
        ring.insert(1, Point2::new(0.0, 0.0));
        ring.push(Point2::new(0.0, 0.0));

        let clean = sanitize_contour(&ring).unwrap();
        assert_eq!(clean, square(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_sanitize_reorients_clockwise() {
        let cw: Contour = square(0.0, 0.0, 1.0).into_iter().rev().collect();
        let clean = sanitize_contour(&cw).unwrap();
        assert!(compute_signed_area(&clean) > 0.0);
    }

    #[test]
    fn test_sanitize_rejects_defects() {
        let collinear = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert_eq!(sanitize_contour(&collinear), Err(ContourDefect::ZeroArea));

        let too_few = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(sanitize_contour(&too_few), Err(ContourDefect::TooFewVertices));

        let nan = vec![
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 0.0),
            Point2::new(1.0, 1.0),
        ];
        assert_eq!(sanitize_contour(&nan), Err(ContourDefect::NonFinite));

        // Bow tie
        let bow_tie = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ];
        assert_eq!(
            sanitize_contour(&bow_tie),
            Err(ContourDefect::SelfIntersecting)
        );
    }

    #[test]
    fn test_union_empty_and_single() {
        assert!(union(&[]).is_empty());

        let single = union(&[square(1.0, 1.0, 3.0)]);
        assert_eq!(single.polygons, vec![square(1.0, 1.0, 3.0)]);
        assert!(single.skipped.is_empty());
    }

    #[test]
    fn test_union_overlapping_squares() {
        let result = union(&[square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]);
        assert_eq!(result.polygons.len(), 1);
        assert_relative_eq!(result.area(), 7.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_three_overlapping_operands() {
        // Clip operands overlap each other as well as the subject
        let result = union(&[
            square(0.0, 0.0, 2.0),
            square(1.0, 0.0, 2.0),
            square(2.0, 0.0, 2.0),
        ]);
        assert_eq!(result.polygons.len(), 1);
        assert_relative_eq!(result.area(), 8.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_disjoint_stays_separate() {
        let result = union(&[square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]);
        assert_eq!(result.polygons.len(), 2);
        assert_relative_eq!(result.area(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_union_skips_invalid_operand() {
        let degenerate = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let result = union(&[square(0.0, 0.0, 1.0), degenerate]);
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(
            result.skipped,
            vec![SkippedOperand {
                index: 1,
                defect: ContourDefect::ZeroArea
            }]
        );
    }

    #[test]
    fn test_difference_without_clip_is_identity() {
        let world = square(0.0, 0.0, 50.0);
        let result = difference(&world, &[]).unwrap();
        assert_eq!(result.polygons, vec![world]);
    }

    #[test]
    fn test_difference_split_in_two() {
        let world = square(0.0, 0.0, 10.0);
        let band = vec![
            Point2::new(-1.0, 4.0),
            Point2::new(11.0, 4.0),
            Point2::new(11.0, 6.0),
            Point2::new(-1.0, 6.0),
        ];
        let result = difference(&world, &[band]).unwrap();
        assert_eq!(result.polygons.len(), 2);
        assert_relative_eq!(result.area(), 80.0, epsilon = 1e-6);
    }

    #[test]
    fn test_difference_interior_hole_is_cut_open() {
        let world = square(0.0, 0.0, 10.0);
        let result = difference(&world, &[square(4.0, 4.0, 2.0)]).unwrap();

        assert!(result.polygons.len() >= 2);
        assert_relative_eq!(result.area(), 96.0, epsilon = 1e-6);
        for ring in &result.polygons {
            let (min, max) = contour_bounds(ring).unwrap();
            assert!(max.x <= 5.0 || min.x >= 5.0);
            assert!(compute_signed_area(ring) > 0.0);
            assert!(sanitize_contour(ring).is_ok());
        }
    }

    #[test]
    fn test_difference_multiple_holes() {
        let world = square(0.0, 0.0, 20.0);
        let holes = vec![
            square(2.0, 2.0, 2.0),
            square(10.0, 10.0, 3.0),
            square(15.0, 3.0, 1.0),
        ];
        let result = difference(&world, &holes).unwrap();
        assert_relative_eq!(result.area(), 400.0 - 4.0 - 9.0 - 1.0, epsilon = 1e-6);
        for ring in &result.polygons {
            assert_ne!(ring.first(), ring.last());
            assert!(ring.len() >= 3);
        }
    }

    #[test]
    fn test_difference_full_cover_is_empty() {
        let world = square(0.0, 0.0, 10.0);
        let result = difference(&world, &[square(-1.0, -1.0, 12.0)]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_difference_invalid_subject() {
        let subject = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(difference(&subject, &[square(0.0, 0.0, 1.0)]).is_err());
    }

    #[test]
    fn test_difference_restores_exact_input_coordinates() {
        let world = square(0.0, 0.0, 50.0);
        let house = vec![
            Point2::new(8.25, 9.05),
            Point2::new(12.35, 9.05),
            Point2::new(12.35, 12.35),
            Point2::new(8.25, 12.35),
        ];
        let result = difference(&world, &[house]).unwrap();
        let cut_x = 0.5 * (8.25 + 12.35);

        assert_relative_eq!(result.area(), 2500.0 - 4.1 * 3.3, epsilon = 1e-9);
        for ring in &result.polygons {
            for p in ring {
                assert!([0.0, 8.25, cut_x, 12.35, 50.0].contains(&p.x), "{:?}", p);
                assert!([0.0, 9.05, 12.35, 50.0].contains(&p.y), "{:?}", p);
            }
        }
    }

    #[test]
    fn test_hole_cut_pieces_meet_on_shared_edge() {
        let world = square(0.0, 0.0, 20.0);
        let tilted = footprint(Point2::new(9.7, 10.3), Vector2::new(3.3, 2.1), 30.0).to_vec();
        let (min, max) = contour_bounds(&tilted).unwrap();
        let result = difference(&world, &[tilted]).unwrap();

        let cut_x = 0.5 * (min.x + max.x);
        let mut left_ys = Vec::new();
        let mut right_ys = Vec::new();
        for ring in &result.polygons {
            let on_left = ring.iter().all(|p| p.x <= cut_x);
            let on_right = ring.iter().all(|p| p.x >= cut_x);
            assert!(on_left != on_right, "ring crosses the cut: {:?}", ring);

            let ys = if on_left { &mut left_ys } else { &mut right_ys };
            ys.extend(ring.iter().filter(|p| p.x == cut_x).map(|p| p.y));
        }
        left_ys.sort_by(f64::total_cmp);
        right_ys.sort_by(f64::total_cmp);
        assert!(!left_ys.is_empty());
        assert_eq!(left_ys, right_ys);
    }

    #[test]
    fn test_snap_to_nearest_within_tolerance() {
        let candidates = [0.0, 8.25, 12.35, 50.0];
        assert_eq!(snap_to(&candidates, 8.250000071525574, 1e-6), 8.25);
        assert_eq!(snap_to(&candidates, 12.349999952316284, 1e-6), 12.35);
        assert_eq!(snap_to(&candidates, 50.000000006486886, 1e-6), 50.0);
        assert_eq!(snap_to(&candidates, 6.4868856952671194e-9, 1e-6), 0.0);
        assert_eq!(snap_to(&candidates, 10.3, 1e-6), 10.3);
        assert_eq!(snap_to(&[], 1.5, 1e-6), 1.5);
    }

    #[test]
    fn test_contour_bounds() {
        let (min, max) = contour_bounds(&square(2.0, 3.0, 4.0)).unwrap();
        assert_eq!(min, Point2::new(2.0, 3.0));
        assert_eq!(max, Point2::new(6.0, 7.0));
        assert!(contour_bounds(&[]).is_none());
    }
}
