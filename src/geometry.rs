//! Pure geometric predicates for box-versus-polygon intersection.
//!
//! Polygon rings are flat `&[Coord]` slices. [`box_intersects_ring`] walks
//! consecutive vertex pairs without wrapping, so the ring must be closed
//! (last vertex equal to the first) for its whole boundary to be covered;
//! the query engine normalizes closure before calling in here.
//! [`point_in_ring`] wraps on its own and accepts open rings too.

use crate::types::BoundingBox;
use geo::Coord;

/// Check whether two line segments `p1..p2` and `p3..p4` intersect.
///
/// Solves the parametric line equations and accepts only crossings whose
/// parameters fall in `[0, 1]` on both segments, endpoints included.
///
/// Parallel and collinear segments always report no intersection: a zero
/// determinant short-circuits to `false` even when the segments overlap, so
/// pure edge-on-edge contact is invisible to this test.
///
/// # Examples
///
/// ```
/// use geo::coord;
/// use georoi::geometry::segments_intersect;
///
/// assert!(segments_intersect(
///     coord! { x: 0.0, y: 0.0 },
///     coord! { x: 2.0, y: 2.0 },
///     coord! { x: 0.0, y: 2.0 },
///     coord! { x: 2.0, y: 0.0 },
/// ));
/// ```
pub fn segments_intersect(p1: Coord, p2: Coord, p3: Coord, p4: Coord) -> bool {
    let d1x = p2.x - p1.x;
    let d1y = p2.y - p1.y;
    let d2x = p4.x - p3.x;
    let d2y = p4.y - p3.y;

    let det = d1x * d2y - d1y * d2x;
    if det == 0.0 {
        // Parallel or collinear, including collinear overlap.
        return false;
    }

    let s = (d1x * (p1.y - p3.y) - d1y * (p1.x - p3.x)) / det;
    let t = (d2x * (p1.y - p3.y) - d2y * (p1.x - p3.x)) / det;

    (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
}

/// Even-odd ray-cast containment test for a point against a polygon ring.
///
/// Casts a horizontal ray from the point and toggles containment at each
/// boundary crossing. Edges run between each vertex and its predecessor,
/// wrapping from the first vertex back to the last, so open and closed rings
/// behave identically. Points exactly on an edge are not handled specially
/// and may land on either side.
///
/// # Examples
///
/// ```
/// use geo::coord;
/// use georoi::geometry::point_in_ring;
///
/// let square = [
///     coord! { x: 0.0, y: 0.0 },
///     coord! { x: 1.0, y: 0.0 },
///     coord! { x: 1.0, y: 1.0 },
///     coord! { x: 0.0, y: 1.0 },
/// ];
/// assert!(point_in_ring(&square, coord! { x: 0.5, y: 0.5 }));
/// assert!(!point_in_ring(&square, coord! { x: 1.5, y: 0.5 }));
/// ```
pub fn point_in_ring(ring: &[Coord], point: Coord) -> bool {
    if ring.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);

        let crosses = (yi > point.y) != (yj > point.y)
            && point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Exact intersection test between an axis-aligned box and a polygon ring.
///
/// The union of four checks, evaluated in order:
///
/// 1. some ring vertex lies inside the box, bounds inclusive;
/// 2. some box boundary segment crosses some ring segment;
/// 3. all four box corners lie inside the ring (box swallowed by the
///    polygon);
/// 4. all ring vertices lie inside the box (polygon swallowed by the box).
///
/// Box boundary segments are walked bottom, right, top, left between
/// adjacent corners. Ring segments are consecutive vertex pairs with no
/// wrap, so closure is the caller's responsibility. The crossing check
/// inherits [`segments_intersect`]'s blindness to collinear overlap, but a
/// box edge ending on a ring segment still counts as a crossing, so contact
/// along a shared line is normally found through the adjacent box edges.
///
/// An empty ring is accepted: check 4 is vacuously true over no vertices.
/// Callers that want empty input rejected must gate it themselves.
///
/// # Examples
///
/// ```
/// use geo::coord;
/// use georoi::BoundingBox;
/// use georoi::geometry::box_intersects_ring;
///
/// let ring = [
///     coord! { x: 0.0, y: 0.0 },
///     coord! { x: 4.0, y: 0.0 },
///     coord! { x: 4.0, y: 4.0 },
///     coord! { x: 0.0, y: 4.0 },
///     coord! { x: 0.0, y: 0.0 },
/// ];
/// let inside = BoundingBox::new(1.0, 1.0, 2.0, 2.0);
/// let far = BoundingBox::new(10.0, 10.0, 11.0, 11.0);
///
/// assert!(box_intersects_ring(&inside, &ring));
/// assert!(!box_intersects_ring(&far, &ring));
/// ```
pub fn box_intersects_ring(bbox: &BoundingBox, ring: &[Coord]) -> bool {
    if ring.iter().any(|&v| bbox.contains_coord(v)) {
        return true;
    }

    let corners = bbox.corners();
    let [bl, br, tr, tl] = corners;
    let box_edges = [(bl, br), (br, tr), (tr, tl), (tl, bl)];
    for (e1, e2) in box_edges {
        for edge in ring.windows(2) {
            if segments_intersect(e1, e2, edge[0], edge[1]) {
                return true;
            }
        }
    }

    if corners.iter().all(|&c| point_in_ring(ring, c)) {
        return true;
    }

    ring.iter().all(|&v| bbox.contains_coord(v))
}

/// Bounding box of a ring, reduced with running min/max values seeded from
/// infinity. Returns `None` for an empty ring instead of the inverted
/// infinite box the seeds would otherwise produce.
pub fn ring_bbox(ring: &[Coord]) -> Option<BoundingBox> {
    if ring.is_empty() {
        return None;
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for v in ring {
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }

    Some(BoundingBox::new(min_x, min_y, max_x, max_y))
}
