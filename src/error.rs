//! Error types for the shell
//!
//! Three layers, from the bottom up:
//! - `RenderError`: a single rendering-context call failed
//! - `ConfigError`: the shell configuration could not be read or is invalid
//! - `ShellError`: anything fatal to the process (SDL setup, scene init, bad destinations)

use std::path::PathBuf;

use crate::scene::SceneId;

/// Errors raised by the rendering context
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Font rasterization of a string failed
    #[error("could not render text {text:?}: {message}")]
    Text { text: String, message: String },

    /// Texture creation or upload failed
    #[error("could not create texture: {0}")]
    Texture(String),

    /// An image file could not be loaded as a texture
    #[error("could not load {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// Switching to (or back from) an offscreen render target failed
    #[error("render target error: {0}")]
    Target(String),

    /// A copy or fill on the current target failed
    #[error("draw failed: {0}")]
    Draw(String),
}

/// Errors raised while loading the shell configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Fatal errors; `main` logs these and exits
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("could not open font {}: {message}", .path.display())]
    Font { path: PathBuf, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A scene asked for a destination nobody knows how to build
    #[error("unknown scene destination {0:?}")]
    UnknownScene(String),

    #[error("could not init scene {scene}: {source}")]
    SceneInit {
        scene: SceneId,
        #[source]
        source: RenderError,
    },

    #[error("could not render scene {scene}: {source}")]
    SceneRender {
        scene: SceneId,
        #[source]
        source: RenderError,
    },
}
