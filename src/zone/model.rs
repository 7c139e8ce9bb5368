use crate::expression::{self, CompiledExpr};
use crate::zone::cache::ZoneCacheKey;

/// Closed set of zone categories. Determines the default display color when
/// none is set explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    #[default]
    Custom,
    RedAlliance,
    BlueAlliance,
    Neutral,
    Launch,
    Parking,
    Loading,
    Risky,
}

impl ZoneType {
    /// Default display color for this category.
    pub fn default_color(self) -> &'static str {
        match self {
            Self::RedAlliance => "#ff4d4d",
            Self::BlueAlliance => "#4da6ff",
            Self::Neutral => "#ffaa00",
            Self::Launch => "#ff8800",
            Self::Parking => "#cc6600",
            Self::Loading => "#990033",
            Self::Risky => "#ffff00",
            Self::Custom => "#ff6b6b",
        }
    }
}

/// Compilation outcome of a zone equation. Always one of the two — never a
/// partially built tree, never a stale flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Compiled {
    Valid(CompiledExpr),
    Invalid { reason: String },
}

impl Compiled {
    fn from_equation(equation: &str) -> Self {
        match expression::parse(equation) {
            Ok(expr) => Self::Valid(expr),
            Err(err) => Self::Invalid {
                reason: err.to_string(),
            },
        }
    }

    /// Membership at `(x, y)`. An invalid equation claims no points, and an
    /// evaluation error at a specific point (division by zero) means the zone
    /// simply does not claim that point.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        match self {
            Self::Valid(expr) => expr.evaluate(x, y).unwrap_or(false),
            Self::Invalid { .. } => false,
        }
    }
}

const DEFAULT_OPACITY: f64 = 0.3;

/// A named field region defined by a boolean equation over `(x, y)`.
///
/// The compiled form is derived solely from `equation` at construction.
/// Zones are replaced whole on edit; there is no in-place AST mutation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "ZoneRecord", into = "ZoneRecord")]
pub struct Zone {
    name: String,
    equation: String,
    compiled: Compiled,
    zone_type: ZoneType,
    color: Option<String>,
    opacity: f64,
}

impl Zone {
    /// Create a zone with default styling (`custom` type, 0.3 opacity),
    /// compiling the equation immediately.
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        Self::with_style(name, equation, None, DEFAULT_OPACITY, ZoneType::default())
    }

    /// Create a fully styled zone, compiling the equation immediately.
    pub fn with_style(
        name: impl Into<String>,
        equation: impl Into<String>,
        color: Option<String>,
        opacity: f64,
        zone_type: ZoneType,
    ) -> Self {
        let equation = equation.into();
        let compiled = Compiled::from_equation(&equation);
        Self {
            name: name.into(),
            equation,
            compiled,
            zone_type,
            color,
            opacity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original source text, preserved verbatim for display and editing.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn compiled(&self) -> &Compiled {
        &self.compiled
    }

    pub fn zone_type(&self) -> ZoneType {
        self.zone_type
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Explicit color if set, otherwise the zone type's default.
    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or(self.zone_type.default_color())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.compiled, Compiled::Valid(_))
    }

    /// The stored reason string shown to the equation's author.
    pub fn invalid_reason(&self) -> Option<&str> {
        match &self.compiled {
            Compiled::Invalid { reason } => Some(reason),
            Compiled::Valid(_) => None,
        }
    }

    /// Membership at `(x, y)` in field inches. Never panics, never errors.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.compiled.contains_point(x, y)
    }

    /// Key for host-owned polygon caches. Changing the equation changes the
    /// key, which is what invalidates stale polygons.
    pub fn cache_key(&self) -> ZoneCacheKey {
        ZoneCacheKey::new(&self.name, &self.equation)
    }
}

/// The persisted wire shape: `{name, equation, color?, opacity, zone_type}`.
/// `compiled` is never persisted; deserializing recompiles the equation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct ZoneRecord {
    name: String,
    equation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default = "default_opacity")]
    opacity: f64,
    #[serde(default)]
    zone_type: ZoneType,
}

fn default_opacity() -> f64 {
    DEFAULT_OPACITY
}

impl From<ZoneRecord> for Zone {
    fn from(r: ZoneRecord) -> Self {
        Zone::with_style(r.name, r.equation, r.color, r.opacity, r.zone_type)
    }
}

impl From<Zone> for ZoneRecord {
    fn from(z: Zone) -> Self {
        Self {
            name: z.name,
            equation: z.equation,
            color: z.color,
            opacity: z.opacity,
            zone_type: z.zone_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_equation_compiles_and_tests_points() {
        let zone = Zone::new("right half", "x >= 0");
        assert!(zone.is_valid());
        assert!(zone.contains_point(10.0, -50.0));
        assert!(!zone.contains_point(-10.0, 0.0));
    }

    #[test]
    fn invalid_equation_claims_no_points_and_keeps_reason() {
        let zone = Zone::new("broken", "x >");
        assert!(!zone.is_valid());
        assert!(zone.invalid_reason().is_some());
        assert!(!zone.contains_point(0.0, 0.0));
        // Source text is preserved verbatim for the editor.
        assert_eq!(zone.equation(), "x >");
    }

    #[test]
    fn division_by_zero_never_escapes_contains_point() {
        let zone = Zone::new("poisoned", "x / (y - y) > 0");
        assert!(zone.is_valid());
        for (x, y) in [(0.0, 0.0), (1.0, 2.0), (-50.0, 72.0), (3.5, -3.5)] {
            assert!(!zone.contains_point(x, y));
        }
    }

    #[test]
    fn effective_color_falls_back_to_zone_type() {
        let typed = Zone::with_style("launch", "x > 0", None, 0.3, ZoneType::Launch);
        assert_eq!(typed.effective_color(), "#ff8800");

        let explicit = Zone::with_style(
            "launch",
            "x > 0",
            Some("#123456".to_string()),
            0.3,
            ZoneType::Launch,
        );
        assert_eq!(explicit.effective_color(), "#123456");
    }

    #[test]
    fn json_round_trip_recompiles() {
        let zone = Zone::with_style(
            "parking",
            "x >= 30 && x <= 45.75 && y >= 24.7 && y <= 40.5",
            None,
            0.5,
            ZoneType::Parking,
        );
        let s = serde_json::to_string(&zone).unwrap();
        assert!(!s.contains("compiled"));
        let back: Zone = serde_json::from_str(&s).unwrap();
        assert!(back.is_valid());
        assert_eq!(back, zone);
        assert!(back.contains_point(40.0, 30.0));
    }

    #[test]
    fn record_defaults_apply_on_load() {
        let back: Zone = serde_json::from_str(r#"{"name":"n","equation":"x > 0"}"#).unwrap();
        assert_eq!(back.zone_type(), ZoneType::Custom);
        assert_eq!(back.opacity(), 0.3);
        assert_eq!(back.effective_color(), "#ff6b6b");
    }

    #[test]
    fn loaded_invalid_equation_is_a_zone_not_an_error() {
        let back: Zone = serde_json::from_str(r#"{"name":"n","equation":"q > 0"}"#).unwrap();
        assert!(!back.is_valid());
        assert!(!back.contains_point(0.0, 0.0));
    }

    #[test]
    fn cache_key_tracks_name_and_equation() {
        let a = Zone::new("a", "x > 0");
        let b = Zone::new("a", "x > 1");
        assert_ne!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), Zone::new("a", "x > 0").cache_key());
    }
}
