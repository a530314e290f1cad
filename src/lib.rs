//! # GlyphKit
//!
//! Glyph outlines to transformable vector paths, with inset/outset contours
//! for two-tone SVG lettering.
//!
//! ## Architecture
//!
//! GlyphKit is organized as a workspace with multiple crates:
//!
//! 1. **glyphkit-core** - Error types shared by every layer
//! 2. **glyphkit-outline** - Vector paths, transforms, polygon extraction,
//!    buffering and SVG output
//! 3. **glyphkit-settings** - Two-tone style configuration (JSON/TOML)
//! 4. **glyphkit** - This facade, plus logging setup
//!
//! ## Features
//!
//! - **Reflection-safe winding**: outer/hole classification survives mirrored
//!   transforms through a parity flag
//! - **Pluggable offsetting**: any [`GeometryEngine`], with a
//!   cavalier_contours implementation included
//! - **Exact SVG output**: three-decimal path data in a stable format

pub use glyphkit_core::{Error, GeometryError, Result};

pub use glyphkit_outline::{
    AffineTransform, BoundingBox, BufferParams, CapStyle, CavalierEngine, CurveEvent, Extent,
    Geometry, GeometryEngine, JoinStyle, PathBuilder, Point, Polygon, Ring, Segment,
    SvgAttributes, TwoToneGlyph, TwoToneStyle, VectorPath,
};

pub use glyphkit_settings::{Config, SettingsError, SvgSettings};

pub use glyphkit_outline as outline;
pub use glyphkit_settings as settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails instead of panicking when a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Initialize logging with one JSON object per event, for batch runs whose
/// output is collected by other tools.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).json())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Builds the two-tone version of `path` with the style from `config`.
pub fn two_tone_with_config<E>(path: VectorPath, engine: &E, config: &Config) -> Result<TwoToneGlyph>
where
    E: GeometryEngine + ?Sized,
{
    TwoToneGlyph::new(path, engine, &config.two_tone)
}
