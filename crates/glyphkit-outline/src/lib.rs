//! # GlyphKit Outline
//!
//! Glyph outlines as immutable vector paths, and the geometry derived from
//! them for two-tone text.
//!
//! ## Core Components
//!
//! - **Affine transforms**: 2D maps applied point-wise, with reflection
//!   parity tracking
//! - **Path builder**: curve events (or polygon rings) to segment streams
//! - **Vector path**: transform, bounding box, polygon extraction, buffering
//!   and SVG output
//! - **Polygon extraction**: winding-based outer/hole classification that
//!   stays correct under reflections
//! - **Geometry engines**: the offsetting capability and a cavalier_contours
//!   implementation
//! - **Two-tone glyphs**: a silhouette with an eroded highlight
//!
//! ## Architecture
//!
//! ```text
//! rusttype glyph / curve events
//!   └── PathBuilder
//!         └── VectorPath ──transform──> VectorPath
//!               ├── bbox()
//!               ├── svg()
//!               ├── shapely_polygon() ──> Geometry
//!               └── buffer(engine) ──> Geometry ──engine──> Geometry ──> VectorPath
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use glyphkit_outline::{CavalierEngine, TwoToneGlyph, TwoToneStyle, VectorPath};
//!
//! let glyph = font.glyph('8').scaled(rusttype::Scale::uniform(1000.0));
//! let path = VectorPath::from_glyph(&glyph).translate(0.0, ascent);
//!
//! let two_tone = TwoToneGlyph::new(path, &CavalierEngine::new(), &TwoToneStyle::default())?;
//! println!("{}", two_tone.svg());
//! ```

pub mod bbox;
pub mod builder;
pub mod cavalier;
pub mod engine;
pub mod extract;
pub mod geometry;
pub mod segment;
pub mod svg;
pub mod transform;
pub mod two_tone;
pub mod vector_path;

pub use bbox::{BoundingBox, Extent};
pub use builder::{CurveEvent, PathBuilder};
pub use cavalier::CavalierEngine;
pub use engine::{BufferParams, CapStyle, GeometryEngine, JoinStyle};
pub use extract::{classify, RingRole, DEFAULT_TOLERANCE, MIN_TOLERANCE};
pub use geometry::{Geometry, Polygon, Ring};
pub use segment::{Point, Segment};
pub use svg::SvgAttributes;
pub use transform::AffineTransform;
pub use two_tone::{TwoToneGlyph, TwoToneStyle};
pub use vector_path::{PathData, VectorPath};
