/// A line in standard form `Ax + By + C = 0`, derived from two points.
///
/// Used to turn user-drawn boundary lines into half-plane tests for robot
/// code and zone authoring.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

const AXIS_EPS: f64 = 1e-10;

impl LineEquation {
    /// Standard-form coefficients through `(x1, y1)` and `(x2, y2)`.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        // Vertical line: x = x1.
        if (x2 - x1).abs() < AXIS_EPS {
            return Self {
                a: 1.0,
                b: 0.0,
                c: -x1,
            };
        }
        // Horizontal line: y = y1.
        if (y2 - y1).abs() < AXIS_EPS {
            return Self {
                a: 0.0,
                b: 1.0,
                c: -y1,
            };
        }
        Self {
            a: y1 - y2,
            b: x2 - x1,
            c: x1 * (y2 - y1) - y1 * (x2 - x1),
        }
    }

    /// Signed side test: zero on the line, opposite signs on opposite sides.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }

    /// `(slope, intercept)` for display; `None` for vertical lines.
    pub fn slope_intercept(&self) -> Option<(f64, f64)> {
        if self.b.abs() < AXIS_EPS {
            return None;
        }
        Some((-self.a / self.b, -self.c / self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_line_special_case() {
        let l = LineEquation::from_points(5.0, -10.0, 5.0, 10.0);
        assert_eq!((l.a, l.b, l.c), (1.0, 0.0, -5.0));
        assert_eq!(l.eval(5.0, 99.0), 0.0);
        assert!(l.slope_intercept().is_none());
    }

    #[test]
    fn horizontal_line_special_case() {
        let l = LineEquation::from_points(-10.0, 3.0, 10.0, 3.0);
        assert_eq!((l.a, l.b, l.c), (0.0, 1.0, -3.0));
        assert_eq!(l.eval(42.0, 3.0), 0.0);
        assert_eq!(l.slope_intercept(), Some((-0.0, 3.0)));
    }

    #[test]
    fn diagonal_line_passes_through_both_points() {
        let l = LineEquation::from_points(0.0, 0.0, 10.0, 5.0);
        assert!(l.eval(0.0, 0.0).abs() < 1e-9);
        assert!(l.eval(10.0, 5.0).abs() < 1e-9);
        let (m, b) = l.slope_intercept().unwrap();
        assert!((m - 0.5).abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn sides_have_opposite_signs() {
        let l = LineEquation::from_points(0.0, 0.0, 10.0, 10.0);
        let above = l.eval(0.0, 5.0);
        let below = l.eval(5.0, 0.0);
        assert!(above * below < 0.0);
    }
}
