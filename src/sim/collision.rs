//! Continuous collision detection against a paddle's leading edge
//!
//! The ball moves several pixels per tick, so point-in-rectangle checks
//! would tunnel straight through a paddle. Instead the ball's travel
//! segment (current position to next candidate position) is intersected
//! with the paddle's leading-edge segment using the standard parametric
//! line-segment formula.

use glam::Vec2;

/// Determinant threshold below which the segments count as parallel.
pub const PARALLEL_EPSILON: f32 = 0.001;

/// Result of a leading-edge hit test
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether the travel segment crossed the edge
    pub hit: bool,
    /// Intersection point (if hit)
    pub point: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
        }
    }
}

/// Intersect the edge segment `(edge_a, edge_b)` with the travel segment
/// `(past, future)`.
///
/// Both intersection parameters must lie strictly inside (0, 1): a travel
/// segment that only grazes an endpoint of either segment is a miss. This
/// keeps corner touches from registering as paddle bounces.
pub fn segment_hit(edge_a: Vec2, edge_b: Vec2, past: Vec2, future: Vec2) -> CollisionResult {
    let d = (edge_b.x - edge_a.x) * (future.y - past.y)
        - (edge_b.y - edge_a.y) * (future.x - past.x);

    if d.abs() < PARALLEL_EPSILON {
        // Parallel segments never cross
        return CollisionResult::miss();
    }

    let ab = ((edge_a.y - past.y) * (future.x - past.x)
        - (edge_a.x - past.x) * (future.y - past.y))
        / d;
    if ab <= 0.0 || ab >= 1.0 {
        return CollisionResult::miss();
    }

    let cd = ((edge_a.y - past.y) * (edge_b.x - edge_a.x)
        - (edge_a.x - past.x) * (edge_b.y - edge_a.y))
        / d;
    if cd <= 0.0 || cd >= 1.0 {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: edge_a + (edge_b - edge_a) * ab,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_segment_hits() {
        // Vertical edge at x=7.5 spanning y in [85, 115], ball travelling
        // left through it at y=100
        let result = segment_hit(
            Vec2::new(7.5, 85.0),
            Vec2::new(7.5, 115.0),
            Vec2::new(10.0, 100.0),
            Vec2::new(6.0, 100.0),
        );
        assert!(result.hit);
        assert!((result.point.x - 7.5).abs() < 0.001);
        assert!((result.point.y - 100.0).abs() < 0.001);
        // Intersection point lies on both segments
        assert!(result.point.y >= 85.0 && result.point.y <= 115.0);
        assert!(result.point.x <= 10.0 && result.point.x >= 6.0);
    }

    #[test]
    fn test_parallel_path_never_hits() {
        // Travel segment parallel to the edge (both vertical)
        let result = segment_hit(
            Vec2::new(7.5, 85.0),
            Vec2::new(7.5, 115.0),
            Vec2::new(7.5, 100.0),
            Vec2::new(7.5, 104.0),
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_short_segment_misses() {
        // Travel segment stops before reaching the edge
        let result = segment_hit(
            Vec2::new(7.5, 85.0),
            Vec2::new(7.5, 115.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(96.0, 100.0),
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_edge_endpoint_touch_is_miss() {
        // Path crosses exactly through the edge's lower endpoint: ab == 0
        let result = segment_hit(
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_travel_endpoint_touch_is_miss() {
        // Travel segment ends exactly on the edge: cd == 1
        let result = segment_hit(
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(5.0, 5.0),
        );
        assert!(!result.hit);
    }

    #[test]
    fn test_hit_off_center() {
        // Diagonal travel segment through the upper half of the edge
        let result = segment_hit(
            Vec2::new(7.5, 85.0),
            Vec2::new(7.5, 115.0),
            Vec2::new(11.0, 108.0),
            Vec2::new(4.0, 112.0),
        );
        assert!(result.hit);
        assert!((result.point.x - 7.5).abs() < 0.001);
        assert!(result.point.y > 108.0 && result.point.y < 112.0);
    }
}
