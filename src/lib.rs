//! Fieldzone is the zone-definition engine behind an interactive
//! competition-robotics field editor.
//!
//! Zones are regions of the field described by user-typed boolean equations
//! over `(x, y)` in field inches, e.g. `x >= 0 && x <= 50 && y > 20`. The
//! engine:
//!
//! - parses equations into a typed AST with a strict allow-list ([`parse`])
//! - answers point membership without ever panicking ([`Zone::contains_point`])
//! - approximates a zone as a renderable convex polygon by sampling the field
//!   on a grid ([`approximate_polygon`])
//! - maps between field inches and rendering-surface coordinates
//!   ([`FieldTransform`])
//!
//! Everything is synchronous and single-threaded; hosts that want a
//! responsive UI offload whole [`approximate_polygon`] calls to a worker.
#![forbid(unsafe_code)]

pub mod expression;
pub mod field;
pub mod foundation;
pub mod zone;

pub use kurbo::Point;

pub use expression::error::{EvalError, LexError, ParseError};
pub use expression::{CompiledExpr, parse};
pub use field::config::{FieldConfiguration, FieldMetadata, FieldPoint};
pub use field::line::LineEquation;
pub use field::transform::{FIELD_SIZE_IN, FieldTransform, snap_to_grid};
pub use foundation::error::{FieldError, FieldResult};
pub use zone::cache::{PolygonCache, ZoneCacheKey};
pub use zone::model::{Compiled, Zone, ZoneType};
pub use zone::sampler::{
    FieldBounds, MAX_POLYGON_VERTICES, approximate_polygon, approximate_polygon_with_limit,
};
