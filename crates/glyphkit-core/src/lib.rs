//! # GlyphKit Core
//!
//! Error taxonomy shared by every GlyphKit crate. Geometry operations on
//! glyph paths are pure value transformations, so the only failures that
//! surface here come from the delegated geometry engine, from invalid caller
//! parameters, or from configuration I/O one layer up.

pub mod error;

pub use error::{Error, GeometryError, Result};
