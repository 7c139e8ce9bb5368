use crate::foundation::error::{FieldError, FieldResult};
use crate::zone::model::Zone;

/// A named marker on the field, in inches.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_point_color")]
    pub color: String,
}

fn default_point_color() -> String {
    "#ff6b6b".to_string()
}

/// Free-form document metadata.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldMetadata {
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub description: String,
}

/// The persisted field document: points, zones, and associated imagery.
///
/// Zones recompile their equations on load; an unparsable equation becomes an
/// `Invalid` zone in the collection, never a load failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldConfiguration {
    pub name: String,
    #[serde(default)]
    pub points: Vec<FieldPoint>,
    #[serde(default)]
    pub associated_images: Vec<String>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub metadata: FieldMetadata,
}

impl Default for FieldConfiguration {
    fn default() -> Self {
        Self {
            name: "New Field".to_string(),
            points: Vec::new(),
            associated_images: Vec::new(),
            zones: Vec::new(),
            metadata: FieldMetadata::default(),
        }
    }
}

impl FieldConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add_point(&mut self, name: impl Into<String>, x: f64, y: f64, color: impl Into<String>) {
        self.points.push(FieldPoint {
            name: name.into(),
            x,
            y,
            color: color.into(),
        });
    }

    /// Remove a point by index; out-of-range is a no-op returning `false`.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if index < self.points.len() {
            self.points.remove(index);
            true
        } else {
            false
        }
    }

    /// Partial update of a point's fields; out-of-range returns `false`.
    pub fn update_point(
        &mut self,
        index: usize,
        name: Option<&str>,
        x: Option<f64>,
        y: Option<f64>,
        color: Option<&str>,
    ) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        if let Some(name) = name {
            point.name = name.to_string();
        }
        if let Some(x) = x {
            point.x = x;
        }
        if let Some(y) = y {
            point.y = y;
        }
        if let Some(color) = color {
            point.color = color.to_string();
        }
        true
    }

    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// Remove a zone by index; out-of-range is a no-op returning `false`.
    pub fn remove_zone(&mut self, index: usize) -> bool {
        if index < self.zones.len() {
            self.zones.remove(index);
            true
        } else {
            false
        }
    }

    pub fn validate(&self) -> FieldResult<()> {
        if self.name.trim().is_empty() {
            return Err(FieldError::validation("field name must be non-empty"));
        }
        for zone in &self.zones {
            let opacity = zone.opacity();
            if !(0.0..=1.0).contains(&opacity) {
                return Err(FieldError::validation(format!(
                    "zone '{}' opacity must be within 0.0..=1.0, got {opacity}",
                    zone.name()
                )));
            }
        }
        Ok(())
    }

    /// Serialize to the persisted JSON document.
    pub fn to_json(&self) -> FieldResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FieldError::serde(e.to_string()))
    }

    /// Load from the persisted JSON document, recompiling every zone.
    pub fn from_json(s: &str) -> FieldResult<Self> {
        serde_json::from_str(s).map_err(|e| FieldError::serde(e.to_string()))
    }
}
