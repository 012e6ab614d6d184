/// Rendering context capability set
///
/// Scenes never touch SDL2 directly. Every scene operation receives a
/// `RenderContext` handle, which exposes the handful of capabilities the shell
/// needs: rasterize text, compose offscreen textures, blit, clear and present.
///
/// # Architecture
///
/// - `RenderContext` trait: implemented by `SdlRenderer` for the real window
///   and by `testing::FakeRenderer` for unit tests
/// - `FontStyle`: which of the loaded fonts a text texture is rasterized with
///
/// # Ownership
///
/// Textures are handed out by value and owned by whoever asked for them. SDL2
/// does not reference-count textures, so owners return them through
/// `release()` before they are dropped.
use crate::error::RenderError;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::path::Path;

/// Font used to rasterize a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Menu labels
    Menu,
    /// Large title banner
    Title,
}

/// The rendering capabilities consumed by scenes.
pub trait RenderContext {
    /// GPU-resident texture handle
    type Texture;

    /// Size of the render output in pixels
    fn output_size(&self) -> (u32, u32);

    /// Recommended line height of a font in pixels
    fn line_height(&self, font: FontStyle) -> u32;

    /// Width and height of a texture in pixels
    fn texture_size(&self, texture: &Self::Texture) -> (u32, u32);

    /// Rasterizes `text` in `color` and uploads it as a texture.
    fn text_texture(
        &mut self,
        text: &str,
        color: Color,
        font: FontStyle,
    ) -> Result<Self::Texture, RenderError>;

    /// Creates an empty texture that can be used as a render target.
    fn target_texture(&mut self, width: u32, height: u32) -> Result<Self::Texture, RenderError>;

    /// Renders `layers` into `target` after clearing it to `background`.
    ///
    /// The previous render target is restored before returning, on success
    /// and on failure.
    fn compose(
        &mut self,
        target: &mut Self::Texture,
        background: Color,
        layers: &[(&Self::Texture, Rect)],
    ) -> Result<(), RenderError>;

    /// Loads an image file as a texture.
    fn load_texture(&mut self, path: &Path) -> Result<Self::Texture, RenderError>;

    /// Clears the whole frame.
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    /// Fills `rect`, or the whole frame when `None`.
    fn fill_rect(&mut self, color: Color, rect: Option<Rect>) -> Result<(), RenderError>;

    /// Copies `src` of `texture` (all of it when `None`) to `dst`.
    fn draw(
        &mut self,
        texture: &Self::Texture,
        src: Option<Rect>,
        dst: Rect,
    ) -> Result<(), RenderError>;

    /// Presents the frame.
    fn present(&mut self);

    /// Gives a texture back to the renderer.
    fn release(&mut self, texture: Self::Texture);
}
