use kurbo::Point;

use crate::foundation::error::{FieldError, FieldResult};

/// Side length of a standard field, in inches (12 ft x 12 ft).
pub const FIELD_SIZE_IN: f64 = 144.0;

/// Maps field inches (origin at field center, Y up) to/from a rendering
/// surface (origin top-left, Y down). Pure; holds only the dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTransform {
    field_size_in: f64,
    surface_width: f64,
    surface_height: f64,
}

impl FieldTransform {
    /// Create a validated transform. All dimensions must be finite and
    /// strictly positive.
    pub fn new(field_size_in: f64, surface_width: f64, surface_height: f64) -> FieldResult<Self> {
        for (name, v) in [
            ("field_size_in", field_size_in),
            ("surface_width", surface_width),
            ("surface_height", surface_height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(FieldError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(Self {
            field_size_in,
            surface_width,
            surface_height,
        })
    }

    /// Transform for the standard 144-inch field.
    pub fn standard(surface_width: f64, surface_height: f64) -> FieldResult<Self> {
        Self::new(FIELD_SIZE_IN, surface_width, surface_height)
    }

    fn half_field(&self) -> f64 {
        self.field_size_in / 2.0
    }

    /// Map field inches to surface coordinates.
    ///
    /// The Y axis flips here: field Y grows upward, surface Y grows downward.
    /// Every consumer (sampling, click mapping, snapping overlays) depends on
    /// this exact inversion.
    pub fn field_to_surface(&self, x_in: f64, y_in: f64) -> Point {
        let half = self.half_field();
        let sx = (x_in + half) * (self.surface_width / self.field_size_in);
        let sy = (half - y_in) * (self.surface_height / self.field_size_in);
        Point::new(sx, sy)
    }

    /// Map surface coordinates back to field inches. Exact inverse of
    /// [`field_to_surface`](Self::field_to_surface).
    pub fn surface_to_field(&self, p: Point) -> (f64, f64) {
        let half = self.half_field();
        let x_in = p.x * self.field_size_in / self.surface_width - half;
        let y_in = half - p.y * self.field_size_in / self.surface_height;
        (x_in, y_in)
    }
}

/// Round both coordinates independently to the nearest multiple of
/// `resolution`. `resolution` must be strictly positive.
pub fn snap_to_grid(x_in: f64, y_in: f64, resolution: f64) -> (f64, f64) {
    debug_assert!(resolution > 0.0, "snap resolution must be > 0");
    let snapped_x = (x_in / resolution).round() * resolution;
    let snapped_y = (y_in / resolution).round() * resolution;
    (snapped_x, snapped_y)
}
