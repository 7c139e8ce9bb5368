use kurbo::Point;

use crate::foundation::error::{FieldError, FieldResult};
use crate::zone::hull;
use crate::zone::model::Zone;

/// Default vertex budget for rendered zone polygons.
pub const MAX_POLYGON_VERTICES: usize = 32;

/// Square, inclusive region of the field to sample, in inches.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    /// Create validated bounds with `min < max`.
    pub fn new(min: f64, max: f64) -> FieldResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(FieldError::validation(format!(
                "field bounds must be finite with min < max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    /// The standard field: `[-72, 72]` inches on both axes.
    pub fn standard() -> Self {
        Self { min: -72.0, max: 72.0 }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Approximate a zone's visual boundary with the default vertex budget.
///
/// Walks grid cell centers over `bounds` at step `resolution`, keeps the
/// members, and wraps them in a convex hull. The result is a best-effort
/// convex envelope of sampled membership: non-convex or disjoint zones (an
/// "OR of two distant rectangles") come back as one convex blob. Fewer than
/// three member cells yield an empty polygon — a zone too small or thin to
/// see at this resolution, not an error.
pub fn approximate_polygon(zone: &Zone, bounds: FieldBounds, resolution: f64) -> Vec<Point> {
    approximate_polygon_with_limit(zone, bounds, resolution, MAX_POLYGON_VERTICES)
}

/// [`approximate_polygon`] with an explicit vertex budget.
#[tracing::instrument(skip(zone), fields(zone = zone.name()))]
pub fn approximate_polygon_with_limit(
    zone: &Zone,
    bounds: FieldBounds,
    resolution: f64,
    max_vertices: usize,
) -> Vec<Point> {
    if !(resolution > 0.0) || !resolution.is_finite() {
        tracing::warn!(resolution, "non-positive sampling resolution, no polygon");
        return Vec::new();
    }

    let steps = (bounds.span() / resolution).ceil() as usize;
    let mut members = Vec::new();
    for iy in 0..steps {
        let y = bounds.min + (iy as f64 + 0.5) * resolution;
        if y > bounds.max {
            break;
        }
        for ix in 0..steps {
            let x = bounds.min + (ix as f64 + 0.5) * resolution;
            if x > bounds.max {
                break;
            }
            if zone.contains_point(x, y) {
                members.push(Point::new(x, y));
            }
        }
    }

    let hit_count = members.len();
    if hit_count < 3 {
        tracing::debug!(grid_steps = steps, hit_count, "too few member cells");
        return Vec::new();
    }

    let hull = hull::convex_hull(members);
    let polygon = hull::simplify(hull, max_vertices);
    tracing::debug!(
        grid_steps = steps,
        hit_count,
        vertices = polygon.len(),
        "zone polygon approximated"
    );
    polygon
}
