use kurbo::Point;

// Collinearity tolerance for the cross-product turn test.
const CROSS_EPS: f64 = 1e-12;

/// Convex hull of a point set via Graham scan, counter-clockwise order
/// starting at the pivot (lowest Y, ties by lowest X).
///
/// Returns an empty vec for degenerate input (fewer than 3 points, or all
/// points collinear).
pub(crate) fn convex_hull(mut points: Vec<Point>) -> Vec<Point> {
    if points.len() < 3 {
        return Vec::new();
    }

    let pivot_idx = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let pivot = points.swap_remove(pivot_idx);

    // Polar angle around the pivot; angle ties resolve nearer-first so the
    // farthest collinear point survives the sweep.
    points.sort_by(|a, b| {
        let angle_a = (a.y - pivot.y).atan2(a.x - pivot.x);
        let angle_b = (b.y - pivot.y).atan2(b.x - pivot.x);
        angle_a
            .total_cmp(&angle_b)
            .then_with(|| dist2(pivot, *a).total_cmp(&dist2(pivot, *b)))
    });

    let mut hull: Vec<Point> = vec![pivot];
    for p in points {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= CROSS_EPS {
            hull.pop();
        }
        hull.push(p);
    }

    if hull.len() < 3 {
        return Vec::new();
    }
    hull
}

/// Thin a hull down to at most `max_vertices` by keeping every Nth vertex
/// plus the final one, so closure back to the pivot is preserved.
pub(crate) fn simplify(hull: Vec<Point>, max_vertices: usize) -> Vec<Point> {
    if max_vertices < 3 || hull.len() <= max_vertices {
        return hull;
    }
    let step = hull.len().div_ceil(max_vertices);
    let last = *hull.last().expect("hull is non-empty here");
    let mut out: Vec<Point> = hull.into_iter().step_by(step).collect();
    if out.last() != Some(&last) {
        out.push(last);
    }
    out
}

// Z component of (a - o) x (b - o): positive for a counter-clockwise turn.
fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn dist2(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}
