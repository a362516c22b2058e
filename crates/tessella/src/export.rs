//! Export of arranged scenes.
//!
//! This module provides the [`Exporter`] trait for turning an arranged
//! [`Scene`] into an output format. It is the last stage of the pipeline:
//!
//! ```text
//! Sheet
//!     ↓ to_scenes
//! Scenes (one per item)
//!     ↓ layout
//! Arranged Scene
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG preview via [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::io;

use thiserror::Error;

use tessella_core::scene::Scene;

/// Abstraction for scene export backends.
pub trait Exporter {
    /// Writes `scene` to `writer` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_scene(&self, scene: &Scene, writer: &mut dyn io::Write) -> Result<(), Error>;
}

/// Errors raised while exporting a scene.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
